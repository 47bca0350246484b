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

use super::grid::Grid;
use super::word_index::WordIndex;
use super::entries::Entries;
use super::template::Word;
use std::collections::HashSet;

// Numbers of the words that have been filled in correctly at some
// point. Once a word is completed it stays completed even if the
// player later changes one of its letters, until the puzzle is reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Completion {
    completed: HashSet<u32>,
}

fn is_correct(word: &Word, grid: &Grid, entries: &Entries) -> bool {
    let mut typed = String::with_capacity(word.text.len());

    for (x, y) in word.cells() {
        let Some(letter) = entries.letter(x, y)
        else {
            return false;
        };

        if grid.at(x, y) != Some(letter) {
            return false;
        }

        typed.push(letter);
    }

    typed == word.text
}

impl Completion {
    pub fn new() -> Completion {
        Completion::default()
    }

    // Checks every word that isn’t already completed and returns the
    // numbers of the ones that have just become correct, in template
    // order.
    pub fn evaluate(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        entries: &Entries,
    ) -> Vec<u32> {
        let mut newly_completed = Vec::new();

        for word in words.words() {
            if self.completed.contains(&word.number) {
                continue;
            }

            if is_correct(word, grid, entries) {
                self.completed.insert(word.number);
                newly_completed.push(word.number);
            }
        }

        newly_completed
    }

    pub fn is_completed(&self, number: u32) -> bool {
        self.completed.contains(&number)
    }

    pub fn n_completed(&self) -> usize {
        self.completed.len()
    }

    pub fn clear(&mut self) {
        self.completed.clear();
    }
}
