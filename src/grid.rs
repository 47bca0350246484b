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

use std::fmt;
use super::template::Word;

// Plenty for any crossword a person would want to solve, and small
// enough that cell indices can’t overflow
pub const MAX_CELLS: u32 = 1 << 16;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    TooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::TooLarge => write!(f, "grid too large"),
        }
    }
}

// Number of cells in a grid of the given size, or None if it is
// bigger than MAX_CELLS
pub fn n_cells(width: u32, height: u32) -> Option<u32> {
    width.checked_mul(height).filter(|&n| n <= MAX_CELLS)
}

// The answer key. Each cell either holds the uppercase letter that
// belongs there or None if no word passes through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Box<[Option<char>]>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new<'a, I>(words: I, width: u32, height: u32) -> Result<Grid, Error>
        where I: IntoIterator<Item = &'a Word>
    {
        let Some(size) = n_cells(width, height)
        else {
            return Err(Error::TooLarge);
        };

        let mut values = vec![None; size as usize];

        for word in words {
            for ((x, y), letter) in word.letters() {
                // Parts of words that run off the grid are dropped
                if x < width && y < height {
                    values[(y * width + x) as usize] =
                        Some(letter.to_ascii_uppercase());
                }
            }
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn at(&self, x: u32, y: u32) -> Option<char> {
        if x < self.width && y < self.height {
            self.values[(y * self.width + x) as usize]
        } else {
            None
        }
    }

    #[cfg(any(target_arch = "wasm32", test))]
    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.at(x, y).is_some()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::template::Template;
    use super::super::direction::Direction;

    fn grid_for(source: &str) -> (Template, Grid) {
        let template = source.parse::<Template>().unwrap();
        let grid = Grid::new(
            template.words.iter(),
            template.columns,
            template.rows,
        ).unwrap();

        (template, grid)
    }

    #[test]
    fn empty_template() {
        let (_, grid) = grid_for("4 3\n");

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.at(x, y), None);
                assert!(!grid.is_occupied(x, y));
            }
        }
    }

    #[test]
    fn words_are_overlaid() {
        let (template, grid) = grid_for(
            "5 5\n\
             1 A 0 0 CRANE A bird\n\
             2 D 0 0 CAT A pet\n\
             3 D 4 0 EAGLE Another bird\n\
             4 A 1 4 ooze Slow leak\n"
        );

        for word in template.words.iter() {
            for ((x, y), letter) in word.letters() {
                assert_eq!(grid.at(x, y), Some(letter));
            }
        }

        assert_eq!(grid.at(2, 4), Some('O'));
        assert_eq!(grid.at(1, 1), None);
        assert!(grid.is_occupied(0, 2));
        assert!(!grid.is_occupied(0, 3));
    }

    #[test]
    fn out_of_bounds() {
        let (_, grid) = grid_for(
            "3 2\n\
             1 A 1 0 CAT clue\n\
             2 D 0 1 DOG clue\n"
        );

        assert_eq!(grid.at(1, 0), Some('C'));
        assert_eq!(grid.at(2, 0), Some('A'));
        assert_eq!(grid.at(0, 1), Some('D'));
        assert_eq!(grid.at(3, 0), None);
        assert_eq!(grid.at(0, 2), None);
        assert_eq!(grid.at(u32::MAX, 0), None);
    }

    #[test]
    fn lowercase_letters() {
        let word = Word {
            number: 1,
            direction: Direction::Across,
            x: 0,
            y: 0,
            text: "ox".to_string(),
            clue: "Beast".to_string(),
        };

        let grid = Grid::new([&word], 2, 1).unwrap();

        assert_eq!(grid.at(0, 0), Some('O'));
        assert_eq!(grid.at(1, 0), Some('X'));
    }

    #[test]
    fn later_word_wins() {
        let (_, grid) = grid_for(
            "3 3\n\
             1 A 0 0 CAT clue\n\
             2 D 0 0 DOG clue\n"
        );

        assert_eq!(grid.at(0, 0), Some('D'));
        assert_eq!(grid.at(1, 0), Some('A'));
    }

    #[test]
    fn word_past_largest_coordinate() {
        let (template, grid) = grid_for(
            "3 2\n\
             1 A 4294967294 0 CAT clue\n\
             2 D 1 4294967295 DOG clue\n"
        );

        // The cells past the end of the coordinate space don’t wrap
        // around into the grid
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(grid.at(x, y), None);
            }
        }

        assert_eq!(
            template.words[0].cells().collect::<Vec<_>>(),
            &[(u32::MAX - 1, 0), (u32::MAX, 0)],
        );
        assert_eq!(template.words[1].cells().count(), 1);
    }

    #[test]
    fn too_large() {
        assert_eq!(n_cells(256, 256), Some(MAX_CELLS));
        assert_eq!(n_cells(0, u32::MAX), Some(0));
        assert_eq!(n_cells(257, 256), None);
        assert_eq!(n_cells(65536, 65536), None);
        assert_eq!(n_cells(u32::MAX, 2), None);

        assert_eq!(
            Grid::new(std::iter::empty(), 65536, 65536),
            Err(Error::TooLarge),
        );
        assert_eq!(Grid::new(std::iter::empty(), 256, 256).unwrap().width(), 256);
    }
}
