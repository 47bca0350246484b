// Crossword – A crossword game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use super::template::Word;
use std::collections::{hash_map, HashMap};

// Words are referred to by their position in the template’s list so
// that the rest of the game can hold on to one without borrowing.
pub type WordId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordIndex {
    words: Vec<Word>,
    by_number: HashMap<u32, WordId>,
    starts: HashMap<(u32, u32), u32>,
}

impl WordIndex {
    pub fn new(words: Vec<Word>) -> WordIndex {
        let mut by_number = HashMap::new();
        let mut starts = HashMap::new();

        // When there are clashes the first word in the list wins
        for (id, word) in words.iter().enumerate() {
            if let hash_map::Entry::Vacant(entry) = by_number.entry(word.number)
            {
                entry.insert(id);
            }

            if let hash_map::Entry::Vacant(entry) =
                starts.entry((word.x, word.y))
            {
                entry.insert(word.number);
            }
        }

        WordIndex {
            words,
            by_number,
            starts,
        }
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    pub fn id_for_number(&self, number: u32) -> Option<WordId> {
        self.by_number.get(&number).copied()
    }

    pub fn word_at(&self, number: u32) -> Option<&Word> {
        self.id_for_number(number).map(|id| &self.words[id])
    }

    pub fn number_starting_at(&self, x: u32, y: u32) -> Option<u32> {
        self.starts.get(&(x, y)).copied()
    }

    pub fn words_containing(
        &self,
        x: u32,
        y: u32,
    ) -> impl Iterator<Item = (WordId, &Word)> + '_ {
        self.words.iter()
            .enumerate()
            .filter(move |(_, word)| word.contains(x, y))
    }
}
