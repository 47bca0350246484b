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
use std::str::FromStr;
use super::direction::Direction;
use super::grid;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    not(target_arch = "wasm32"),
    derive(serde::Serialize, serde::Deserialize),
)]
pub struct Word {
    pub number: u32,
    pub direction: Direction,
    pub x: u32,
    pub y: u32,
    pub text: String,
    pub clue: String,
}

impl Word {
    pub fn len(&self) -> u32 {
        self.text.chars().count() as u32
    }

    // The cells covered by the word in order. Cells that run off the
    // grid are included, it’s up to the caller to check them. The
    // iterator stops early if the word would run past the largest
    // coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.len())
            .map_while(|i| self.direction.offset(self.x, self.y, i))
    }

    pub fn letters(&self) -> impl Iterator<Item = ((u32, u32), char)> + '_ {
        self.cells().zip(self.text.chars())
    }

    #[cfg(any(target_arch = "wasm32", test))]
    pub fn index_of(&self, x: u32, y: u32) -> Option<u32> {
        let (along, start, other, fixed) = match self.direction {
            Direction::Across => (x, self.x, y, self.y),
            Direction::Down => (y, self.y, x, self.x),
        };

        if other != fixed || along < start {
            return None;
        }

        let index = along - start;

        (index < self.len()).then_some(index)
    }

    #[cfg(any(target_arch = "wasm32", test))]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.index_of(x, y).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    not(target_arch = "wasm32"),
    derive(serde::Serialize, serde::Deserialize),
)]
pub struct Template {
    pub columns: u32,
    pub rows: u32,
    pub words: Vec<Word>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    MissingSize,
    InvalidSize(usize),
    TooLarge(usize),
    InvalidNumber(usize),
    InvalidDirection(usize),
    InvalidPosition(usize),
    MissingWord(usize),
    MissingClue(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (line, text) = match self {
            Error::MissingSize => return write!(f, "missing size"),
            Error::InvalidSize(line) => (line, "invalid size"),
            Error::TooLarge(line) => (line, "grid too large"),
            Error::InvalidNumber(line) => (line, "invalid number"),
            Error::InvalidDirection(line) => (line, "invalid direction"),
            Error::InvalidPosition(line) => (line, "invalid position"),
            Error::MissingWord(line) => (line, "missing word"),
            Error::MissingClue(line) => (line, "missing clue"),
        };

        write!(f, "line {}: {}", line, text)
    }
}

// Problems with a template that the game itself tolerates but that
// are almost certainly mistakes by whoever wrote it.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, PartialEq, Eq)]
pub enum Defect {
    OutOfBounds { number: u32 },
    Conflict { x: u32, y: u32, first: u32, second: u32 },
    DuplicateNumber { number: u32 },
}

#[cfg(not(target_arch = "wasm32"))]
impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Defect::OutOfBounds { number } => {
                write!(f, "word {} runs off the grid", number)
            },
            Defect::Conflict { x, y, first, second } => {
                write!(
                    f,
                    "words {} and {} disagree on the letter at {},{}",
                    first,
                    second,
                    x,
                    y,
                )
            },
            Defect::DuplicateNumber { number } => {
                write!(f, "number {} is used more than once", number)
            },
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Template {
    pub fn validate(&self) -> Vec<Defect> {
        use std::collections::{HashMap, HashSet};

        let mut defects = Vec::new();
        let mut numbers = HashSet::new();
        let mut letters = HashMap::<(u32, u32), (char, u32)>::new();

        for word in self.words.iter() {
            if !numbers.insert(word.number) {
                defects.push(Defect::DuplicateNumber { number: word.number });
            }

            let mut out_of_bounds = false;

            for ((x, y), letter) in word.letters() {
                if x >= self.columns || y >= self.rows {
                    out_of_bounds = true;
                    continue;
                }

                let letter = letter.to_ascii_uppercase();

                match letters.get(&(x, y)) {
                    Some(&(other, number)) if other != letter => {
                        defects.push(Defect::Conflict {
                            x,
                            y,
                            first: number,
                            second: word.number,
                        });
                    },
                    Some(_) => (),
                    None => {
                        letters.insert((x, y), (letter, word.number));
                    },
                }
            }

            if out_of_bounds {
                defects.push(Defect::OutOfBounds { number: word.number });
            }
        }

        defects
    }
}

fn parse_size(line_num: usize, line: &str) -> Result<(u32, u32), Error> {
    let mut parts = line.split_whitespace();

    let (Some(columns), Some(rows), None) =
        (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::InvalidSize(line_num));
    };

    let (Ok(columns), Ok(rows)) = (columns.parse::<u32>(), rows.parse::<u32>())
    else {
        return Err(Error::InvalidSize(line_num));
    };

    if grid::n_cells(columns, rows).is_none() {
        return Err(Error::TooLarge(line_num));
    }

    Ok((columns, rows))
}

// Splits off the next whitespace-separated field
fn split_field(s: &str) -> (&str, &str) {
    let s = s.trim_start();

    match s.find(char::is_whitespace) {
        Some(pos) => s.split_at(pos),
        None => (s, ""),
    }
}

fn parse_word(line_num: usize, line: &str) -> Result<Word, Error> {
    let (number, rest) = split_field(line);

    let Some(number) = number.parse::<u32>().ok().filter(|&n| n > 0)
    else {
        return Err(Error::InvalidNumber(line_num));
    };

    let (direction, rest) = split_field(rest);

    let Ok(direction) = direction.parse::<Direction>()
    else {
        return Err(Error::InvalidDirection(line_num));
    };

    let (x, rest) = split_field(rest);
    let (y, rest) = split_field(rest);

    let (Ok(x), Ok(y)) = (x.parse::<u32>(), y.parse::<u32>())
    else {
        return Err(Error::InvalidPosition(line_num));
    };

    let (text, rest) = split_field(rest);

    if text.is_empty() {
        return Err(Error::MissingWord(line_num));
    }

    let clue = rest.trim();

    if clue.is_empty() {
        return Err(Error::MissingClue(line_num));
    }

    Ok(Word {
        number,
        direction,
        x,
        y,
        text: text.to_uppercase(),
        clue: clue.to_string(),
    })
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(s: &str) -> Result<Template, Error> {
        let mut lines = s.lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

        let Some((line_num, size_line)) = lines.next()
        else {
            return Err(Error::MissingSize);
        };

        let (columns, rows) = parse_size(line_num, size_line)?;

        let mut words = Vec::new();

        for (line_num, line) in lines {
            words.push(parse_word(line_num, line)?);
        }

        Ok(Template { columns, rows, words })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} {}", self.columns, self.rows)?;

        for word in self.words.iter() {
            writeln!(
                f,
                "{} {} {} {} {} {}",
                word.number,
                word.direction,
                word.x,
                word.y,
                word.text,
                word.clue,
            )?;
        }

        Ok(())
    }
}
