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
use std::collections::HashMap;

// The letters that the player has typed, regardless of whether they
// are right. Cells that have never been touched have no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Entries {
    letters: HashMap<(u32, u32), char>,
}

impl Entries {
    pub fn new() -> Entries {
        Entries::default()
    }

    // Returns false without changing anything if the cell isn’t part
    // of a word
    pub fn set_letter(&mut self, grid: &Grid, x: u32, y: u32, letter: char) -> bool {
        if !grid.is_occupied(x, y) {
            return false;
        }

        self.letters.insert((x, y), letter);

        true
    }

    pub fn clear_letter(&mut self, x: u32, y: u32) -> Option<char> {
        self.letters.remove(&(x, y))
    }

    pub fn letter(&self, x: u32, y: u32) -> Option<char> {
        self.letters.get(&(x, y)).copied()
    }

    pub fn is_empty_at(&self, x: u32, y: u32) -> bool {
        !self.letters.contains_key(&(x, y))
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::template::Template;

    fn cat_grid() -> Grid {
        let template = "3 2\n1 A 0 0 CAT Pet\n".parse::<Template>().unwrap();

        Grid::new(template.words.iter(), template.columns, template.rows).unwrap()
    }

    #[test]
    fn set_and_get() {
        let grid = cat_grid();
        let mut entries = Entries::new();

        assert!(entries.is_empty());
        assert_eq!(entries.letter(0, 0), None);
        assert!(entries.is_empty_at(0, 0));

        assert!(entries.set_letter(&grid, 0, 0, 'C'));
        assert!(entries.set_letter(&grid, 1, 0, 'X'));
        assert_eq!(entries.letter(0, 0), Some('C'));
        assert_eq!(entries.letter(1, 0), Some('X'));
        assert!(!entries.is_empty_at(1, 0));
        assert_eq!(entries.len(), 2);

        // Typing over a letter replaces it
        assert!(entries.set_letter(&grid, 1, 0, 'A'));
        assert_eq!(entries.letter(1, 0), Some('A'));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn unoccupied_cells() {
        let grid = cat_grid();
        let mut entries = Entries::new();

        assert!(!entries.set_letter(&grid, 0, 1, 'Q'));
        assert!(!entries.set_letter(&grid, 3, 0, 'Q'));
        assert!(!entries.set_letter(&grid, u32::MAX, 0, 'Q'));
        assert!(entries.is_empty());
    }

    #[test]
    fn clear() {
        let grid = cat_grid();
        let mut entries = Entries::new();

        entries.set_letter(&grid, 0, 0, 'C');
        entries.set_letter(&grid, 2, 0, 'T');

        assert_eq!(entries.clear_letter(0, 0), Some('C'));
        assert_eq!(entries.clear_letter(0, 0), None);
        assert_eq!(entries.letter(0, 0), None);
        assert_eq!(entries.letter(2, 0), Some('T'));

        entries.clear();

        assert!(entries.is_empty());
        assert_eq!(entries.letter(2, 0), None);
    }
}
