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
use super::word_index::{WordIndex, WordId};
use super::direction::{self, Arrow};

// Keeps track of which cell has the input focus and which word the
// cursor is moving through. All of the movement functions return the
// newly focused cell, or None if nothing moved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Navigator {
    current_word: Option<WordId>,
    focus: Option<(u32, u32)>,
}

impl Navigator {
    pub fn new() -> Navigator {
        Navigator::default()
    }

    pub fn current_word(&self) -> Option<WordId> {
        self.current_word
    }

    pub fn focus(&self) -> Option<(u32, u32)> {
        self.focus
    }

    pub fn focus_cell(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        x: u32,
        y: u32,
    ) -> Option<(u32, u32)> {
        if !grid.is_occupied(x, y) {
            return None;
        }

        let mut first = None;

        for (id, _) in words.words_containing(x, y) {
            // Stay in the same word if possible so that the
            // direction doesn’t flip when moving onto a crossing
            if Some(id) == self.current_word {
                first = Some(id);
                break;
            }

            if first.is_none() {
                first = Some(id);
            }
        }

        self.current_word = first;
        self.focus = Some((x, y));

        self.focus
    }

    pub fn select_word(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        id: WordId,
    ) -> Option<(u32, u32)> {
        let word = words.get(id)?;

        if !grid.is_occupied(word.x, word.y) {
            return None;
        }

        self.current_word = Some(id);
        self.focus_cell(grid, words, word.x, word.y)
    }

    fn move_within_word(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        x: u32,
        y: u32,
        forwards: bool,
    ) -> Option<(u32, u32)> {
        let word = words.get(self.current_word?)?;
        let index = word.index_of(x, y)?;

        let next_index = if forwards {
            index + 1
        } else {
            index.checked_sub(1)?
        };

        if next_index >= word.len() {
            return None;
        }

        let (next_x, next_y) =
            word.direction.offset(word.x, word.y, next_index)?;

        self.focus_cell(grid, words, next_x, next_y)
    }

    pub fn advance_within_word(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        x: u32,
        y: u32,
    ) -> Option<(u32, u32)> {
        self.move_within_word(grid, words, x, y, true)
    }

    pub fn retreat_within_word(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        x: u32,
        y: u32,
    ) -> Option<(u32, u32)> {
        self.move_within_word(grid, words, x, y, false)
    }

    // Moves a single step. Blocked cells are not skipped over.
    pub fn arrow_move(
        &mut self,
        grid: &Grid,
        words: &WordIndex,
        arrow: Arrow,
        x: u32,
        y: u32,
    ) -> Option<(u32, u32)> {
        let (next_x, next_y) = direction::step(x, y, arrow);

        self.focus_cell(grid, words, next_x, next_y)
    }

    pub fn clear(&mut self) {
        self.current_word = None;
        self.focus = None;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use super::super::template::Template;

    fn board(source: &str) -> (Grid, WordIndex) {
        let template = source.parse::<Template>().unwrap();
        let grid = Grid::new(
            template.words.iter(),
            template.columns,
            template.rows,
        ).unwrap();

        (grid, WordIndex::new(template.words))
    }

    // C A T
    // O # O
    // W I E N
    fn crossing_board() -> (Grid, WordIndex) {
        board(
            "4 3\n\
             1 A 0 0 CAT Feline\n\
             2 D 0 0 COW Bovine\n\
             3 D 2 0 TOE Digit\n\
             4 A 0 2 WIEN Vienna\n"
        )
    }

    #[test]
    fn focus_picks_first_word() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        assert_eq!(nav.current_word(), None);
        assert_eq!(nav.focus(), None);

        assert_eq!(nav.focus_cell(&grid, &words, 0, 0), Some((0, 0)));
        assert_eq!(nav.current_word(), Some(0));
        assert_eq!(nav.focus(), Some((0, 0)));
    }

    #[test]
    fn focus_keeps_current_word() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        assert_eq!(nav.select_word(&grid, &words, 1), Some((0, 0)));
        assert_eq!(nav.current_word(), Some(1));

        assert_eq!(nav.focus_cell(&grid, &words, 0, 0), Some((0, 0)));
        assert_eq!(nav.current_word(), Some(1));

        // Moving to a cell that isn’t in the down word switches to
        // the across word
        assert_eq!(nav.focus_cell(&grid, &words, 1, 0), Some((1, 0)));
        assert_eq!(nav.current_word(), Some(0));

        assert_eq!(nav.focus_cell(&grid, &words, 3, 2), Some((3, 2)));
        assert_eq!(nav.current_word(), Some(3));
    }

    #[test]
    fn focus_blocked_cell() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        nav.focus_cell(&grid, &words, 1, 0);

        assert_eq!(nav.focus_cell(&grid, &words, 1, 1), None);
        assert_eq!(nav.focus_cell(&grid, &words, 3, 0), None);
        assert_eq!(nav.focus_cell(&grid, &words, 9, 9), None);
        assert_eq!(nav.focus(), Some((1, 0)));
        assert_eq!(nav.current_word(), Some(0));
    }

    #[test]
    fn advance_and_retreat() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        assert_eq!(nav.select_word(&grid, &words, 3), Some((0, 2)));
        assert_eq!(nav.current_word(), Some(3));

        assert_eq!(nav.advance_within_word(&grid, &words, 0, 2), Some((1, 2)));
        assert_eq!(nav.advance_within_word(&grid, &words, 1, 2), Some((2, 2)));

        // The crossing cell stays in the across word
        assert_eq!(nav.current_word(), Some(3));

        assert_eq!(nav.advance_within_word(&grid, &words, 2, 2), Some((3, 2)));
        assert_eq!(nav.advance_within_word(&grid, &words, 3, 2), None);
        assert_eq!(nav.focus(), Some((3, 2)));

        assert_eq!(nav.retreat_within_word(&grid, &words, 3, 2), Some((2, 2)));
        assert_eq!(nav.retreat_within_word(&grid, &words, 1, 2), Some((0, 2)));
        assert_eq!(nav.retreat_within_word(&grid, &words, 0, 2), None);
        assert_eq!(nav.focus(), Some((0, 2)));
        assert_eq!(nav.current_word(), Some(3));
    }

    #[test]
    fn advance_down() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        nav.select_word(&grid, &words, 2);

        assert_eq!(nav.advance_within_word(&grid, &words, 2, 0), Some((2, 1)));
        assert_eq!(nav.advance_within_word(&grid, &words, 2, 1), Some((2, 2)));
        assert_eq!(nav.current_word(), Some(2));
        assert_eq!(nav.advance_within_word(&grid, &words, 2, 2), None);
    }

    #[test]
    fn advance_without_word() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        assert_eq!(nav.advance_within_word(&grid, &words, 0, 0), None);
        assert_eq!(nav.retreat_within_word(&grid, &words, 1, 0), None);

        // The cell isn’t part of the current word
        nav.focus_cell(&grid, &words, 1, 0);
        assert_eq!(nav.advance_within_word(&grid, &words, 2, 1), None);
        assert_eq!(nav.focus(), Some((1, 0)));
    }

    #[test]
    fn truncated_word() {
        let (grid, words) = board("2 1\n1 A 0 0 CAT Feline\n");
        let mut nav = Navigator::new();

        nav.focus_cell(&grid, &words, 1, 0);

        assert_eq!(nav.advance_within_word(&grid, &words, 1, 0), None);
        assert_eq!(nav.focus(), Some((1, 0)));
    }

    #[test]
    fn arrows() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        nav.focus_cell(&grid, &words, 0, 0);

        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Left, 0, 0), None);
        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Up, 0, 0), None);
        assert_eq!(
            nav.arrow_move(&grid, &words, Arrow::Down, 0, 0),
            Some((0, 1)),
        );
        assert_eq!(nav.current_word(), Some(1));

        // Doesn’t jump over the blocked cell
        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Right, 0, 1), None);
        assert_eq!(nav.focus(), Some((0, 1)));

        assert_eq!(
            nav.arrow_move(&grid, &words, Arrow::Down, 0, 1),
            Some((0, 2)),
        );
        assert_eq!(nav.current_word(), Some(1));

        nav.focus_cell(&grid, &words, 3, 2);
        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Right, 3, 2), None);
        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Down, 3, 2), None);
        assert_eq!(nav.arrow_move(&grid, &words, Arrow::Up, 3, 2), None);
        assert_eq!(nav.focus(), Some((3, 2)));
    }

    #[test]
    fn clear() {
        let (grid, words) = crossing_board();
        let mut nav = Navigator::new();

        nav.focus_cell(&grid, &words, 2, 1);
        nav.clear();

        assert_eq!(nav.current_word(), None);
        assert_eq!(nav.focus(), None);
    }
}
