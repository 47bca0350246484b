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

// Words run either left to right or top to bottom. The arrow keys
// move the cursor one cell in screen space, independently of the
// direction of any word.

use std::fmt;
use std::str::FromStr;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
#[cfg_attr(
    not(target_arch = "wasm32"),
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase"),
)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    // Position of the letter at `index` in a word starting at `x`,`y`,
    // or None if it would go past the largest coordinate
    pub fn offset(self, x: u32, y: u32, index: u32) -> Option<(u32, u32)> {
        match self {
            Direction::Across => Some((x.checked_add(index)?, y)),
            Direction::Down => Some((x, y.checked_add(index)?)),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct InvalidDirection;

impl fmt::Display for InvalidDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid direction")
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Direction, InvalidDirection> {
        if s.eq_ignore_ascii_case("a") || s.eq_ignore_ascii_case("across") {
            Ok(Direction::Across)
        } else if s.eq_ignore_ascii_case("d") || s.eq_ignore_ascii_case("down") {
            Ok(Direction::Down)
        } else {
            Err(InvalidDirection)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[cfg(any(target_arch = "wasm32", test))]
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Arrow {
    Left,
    Right,
    Up,
    Down,
}

#[cfg(any(target_arch = "wasm32", test))]
pub fn step(x: u32, y: u32, arrow: Arrow) -> (u32, u32) {
    match arrow {
        Arrow::Left => (x.wrapping_sub(1), y),
        Arrow::Right => (x.wrapping_add(1), y),
        Arrow::Up => (x, y.wrapping_sub(1)),
        Arrow::Down => (x, y.wrapping_add(1)),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset() {
        assert_eq!(Direction::Across.offset(2, 3, 0), Some((2, 3)));
        assert_eq!(Direction::Across.offset(2, 3, 4), Some((6, 3)));
        assert_eq!(Direction::Down.offset(2, 3, 4), Some((2, 7)));

        assert_eq!(
            Direction::Across.offset(u32::MAX - 1, 0, 1),
            Some((u32::MAX, 0)),
        );
        assert_eq!(Direction::Across.offset(u32::MAX - 1, 0, 2), None);
        assert_eq!(Direction::Down.offset(0, u32::MAX, 1), None);
    }

    #[test]
    fn step_all_arrows() {
        assert_eq!(step(1, 2, Arrow::Left), (0, 2));
        assert_eq!(step(1, 2, Arrow::Right), (2, 2));
        assert_eq!(step(1, 2, Arrow::Up), (1, 1));
        assert_eq!(step(1, 2, Arrow::Down), (1, 3));
    }

    #[test]
    fn overflow() {
        // Going off the top or left of the grid should wrap the
        // coordinates around the integer maximum so that the rest of
        // the program can reject the move with a single comparison
        // against the dimensions of the grid.
        assert_eq!(step(0, 0, Arrow::Left), (u32::MAX, 0));
        assert_eq!(step(0, 0, Arrow::Up), (0, u32::MAX));
    }

    #[test]
    fn parse() {
        assert_eq!("A".parse::<Direction>().unwrap(), Direction::Across);
        assert_eq!("across".parse::<Direction>().unwrap(), Direction::Across);
        assert_eq!("d".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!(
            &"sideways".parse::<Direction>().unwrap_err().to_string(),
            "invalid direction",
        );
    }
}
