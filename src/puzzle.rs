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

use super::grid::{self, Grid};
use super::word_index::{WordIndex, WordId};
use super::entries::Entries;
use super::completion::Completion;
use super::navigation::Navigator;
use super::timers::{Timers, Task, TimerId};
use super::template::{Template, Word};
use super::direction::Arrow;

// Things that the page needs to reflect. They are queued up while the
// puzzle handles an event and the page collects them afterwards with
// pending_notifications().
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Notification {
    LetterValidated { x: u32, y: u32, letter: char, correct: bool },
    LetterCleared { x: u32, y: u32 },
    ErrorCleared { x: u32, y: u32 },
    WordCompleted { number: u32 },
    FlashCleared { number: u32 },
    FocusChanged { x: u32, y: u32 },
    WordHighlighted { number: u32 },
    PuzzleReset,
    TimerScheduled { id: TimerId, delay_ms: u32 },
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Key {
    Backspace,
    Tab,
    Arrow(Arrow),
    Other,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct Modifiers {
    pub shift: bool,
}

pub struct Puzzle {
    grid: Grid,
    words: WordIndex,
    entries: Entries,
    completion: Completion,
    navigator: Navigator,
    timers: Timers,
    notifications: Vec<Notification>,
}

impl Puzzle {
    pub fn new(template: Template) -> Result<Puzzle, grid::Error> {
        let grid = Grid::new(
            template.words.iter(),
            template.columns,
            template.rows,
        )?;

        Ok(Puzzle {
            grid,
            words: WordIndex::new(template.words),
            entries: Entries::new(),
            completion: Completion::new(),
            navigator: Navigator::new(),
            timers: Timers::new(),
            notifications: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &WordIndex {
        &self.words
    }

    pub fn letter(&self, x: u32, y: u32) -> Option<char> {
        self.entries.letter(x, y)
    }

    pub fn is_completed(&self, number: u32) -> bool {
        self.completion.is_completed(number)
    }

    pub fn n_completed(&self) -> usize {
        self.completion.n_completed()
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.navigator.current_word().and_then(|id| self.words.get(id))
    }

    pub fn focus(&self) -> Option<(u32, u32)> {
        self.navigator.focus()
    }

    pub fn pending_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    fn schedule(&mut self, task: Task) {
        let id = self.timers.schedule(task);

        self.notifications.push(Notification::TimerScheduled {
            id,
            delay_ms: task.delay_ms(),
        });
    }

    fn focus_moved(
        &mut self,
        previous_word: Option<WordId>,
        focus: Option<(u32, u32)>,
    ) {
        let Some((x, y)) = focus
        else {
            return;
        };

        self.notifications.push(Notification::FocusChanged { x, y });

        let current_word = self.navigator.current_word();

        if current_word != previous_word {
            if let Some(word) = current_word.and_then(|id| self.words.get(id)) {
                self.notifications.push(Notification::WordHighlighted {
                    number: word.number,
                });
            }
        }
    }

    fn check_completion(&mut self) {
        let newly_completed = self.completion.evaluate(
            &self.grid,
            &self.words,
            &self.entries,
        );

        for number in newly_completed {
            self.notifications.push(Notification::WordCompleted { number });
            self.schedule(Task::ClearFlash { number });
        }
    }

    pub fn focus_cell(&mut self, x: u32, y: u32) {
        let previous_word = self.navigator.current_word();
        let focus = self.navigator.focus_cell(
            &self.grid,
            &self.words,
            x,
            y,
        );
        self.focus_moved(previous_word, focus);
    }

    fn advance(&mut self, x: u32, y: u32) {
        let previous_word = self.navigator.current_word();
        let focus = self.navigator.advance_within_word(
            &self.grid,
            &self.words,
            x,
            y,
        );
        self.focus_moved(previous_word, focus);
    }

    fn retreat(&mut self, x: u32, y: u32) {
        let previous_word = self.navigator.current_word();
        let focus = self.navigator.retreat_within_word(
            &self.grid,
            &self.words,
            x,
            y,
        );
        self.focus_moved(previous_word, focus);
    }

    fn arrow_move(&mut self, arrow: Arrow, x: u32, y: u32) {
        let previous_word = self.navigator.current_word();
        let focus = self.navigator.arrow_move(
            &self.grid,
            &self.words,
            arrow,
            x,
            y,
        );
        self.focus_moved(previous_word, focus);
    }

    pub fn type_letter(&mut self, x: u32, y: u32, ch: char) {
        if !ch.is_alphabetic() {
            return;
        }

        let mut upper = ch.to_uppercase();

        let (Some(letter), None) = (upper.next(), upper.next())
        else {
            return;
        };

        let Some(answer) = self.grid.at(x, y)
        else {
            return;
        };

        if self.navigator.focus() != Some((x, y)) {
            self.focus_cell(x, y);
        }

        self.entries.set_letter(&self.grid, x, y, letter);
        self.timers.touch_cell(x, y);

        let correct = letter == answer;

        self.notifications.push(Notification::LetterValidated {
            x,
            y,
            letter,
            correct,
        });

        if correct {
            self.schedule(Task::Advance { x, y });
        } else {
            self.schedule(Task::ClearError { x, y });
        }

        self.check_completion();
    }

    // Returns true if the key was handled so that the page can stop
    // the browser from doing anything else with it
    pub fn press_key(
        &mut self,
        key: Key,
        x: u32,
        y: u32,
        modifiers: Modifiers,
    ) -> bool {
        match key {
            Key::Backspace => {
                if self.entries.is_empty_at(x, y) {
                    self.retreat(x, y);
                } else {
                    self.entries.clear_letter(x, y);
                    self.timers.touch_cell(x, y);
                    self.notifications.push(
                        Notification::LetterCleared { x, y }
                    );
                    self.check_completion();
                }
            },
            Key::Tab => {
                if modifiers.shift {
                    self.retreat(x, y);
                } else {
                    self.advance(x, y);
                }
            },
            Key::Arrow(arrow) => self.arrow_move(arrow, x, y),
            Key::Other => return false,
        }

        true
    }

    pub fn select_clue(&mut self, number: u32) {
        let Some(id) = self.words.id_for_number(number)
        else {
            return;
        };

        let previous_word = self.navigator.current_word();
        let focus = self.navigator.select_word(&self.grid, &self.words, id);
        self.focus_moved(previous_word, focus);
    }

    pub fn fire_timer(&mut self, id: TimerId) {
        let Some(task) = self.timers.fire(id)
        else {
            return;
        };

        match task {
            Task::Advance { x, y } => {
                // Don’t drag the cursor back if the player has
                // already moved somewhere else
                if self.navigator.focus() == Some((x, y)) {
                    self.advance(x, y);
                }
            },
            Task::ClearError { x, y } => {
                self.notifications.push(Notification::ErrorCleared { x, y });
            },
            Task::ClearFlash { number } => {
                self.notifications.push(Notification::FlashCleared { number });
            },
        }
    }

    // The page is expected to have asked the player for confirmation
    pub fn reset(&mut self) {
        self.entries.clear();
        self.completion.clear();
        self.navigator.clear();
        self.timers.cancel_all();
        self.notifications.push(Notification::PuzzleReset);
    }
}
