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

// Delayed tasks for the visual feedback. The game doesn’t have a
// clock of its own, so it only hands out an id and the delay and
// relies on whoever is driving it to call back when the time is up.
// Every task remembers the generation of the cell it is about so that
// a callback that arrives after the cell has been typed in again does
// nothing.

use std::collections::HashMap;

pub const ADVANCE_DELAY_MS: u32 = 100;
pub const ERROR_DELAY_MS: u32 = 500;
pub const FLASH_DELAY_MS: u32 = 1000;

pub type TimerId = u32;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Task {
    Advance { x: u32, y: u32 },
    ClearError { x: u32, y: u32 },
    ClearFlash { number: u32 },
}

impl Task {
    pub fn delay_ms(&self) -> u32 {
        match self {
            Task::Advance { .. } => ADVANCE_DELAY_MS,
            Task::ClearError { .. } => ERROR_DELAY_MS,
            Task::ClearFlash { .. } => FLASH_DELAY_MS,
        }
    }

    fn cell(&self) -> Option<(u32, u32)> {
        match *self {
            Task::Advance { x, y } | Task::ClearError { x, y } => Some((x, y)),
            Task::ClearFlash { .. } => None,
        }
    }
}

#[derive(Debug)]
struct PendingTask {
    task: Task,
    generation: u32,
}

#[derive(Debug, Default)]
pub struct Timers {
    next_id: TimerId,
    pending: HashMap<TimerId, PendingTask>,
    generations: HashMap<(u32, u32), u32>,
}

impl Timers {
    pub fn new() -> Timers {
        Timers::default()
    }

    fn generation(&self, task: &Task) -> u32 {
        task.cell()
            .and_then(|cell| self.generations.get(&cell).copied())
            .unwrap_or(0)
    }

    pub fn schedule(&mut self, task: Task) -> TimerId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let generation = self.generation(&task);

        self.pending.insert(id, PendingTask { task, generation });

        id
    }

    // Invalidates any tasks that are waiting on this cell
    pub fn touch_cell(&mut self, x: u32, y: u32) {
        let generation = self.generations.entry((x, y)).or_insert(0);
        *generation = generation.wrapping_add(1);
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.generations.clear();
    }

    // Returns the task if it is still relevant. Each id can only be
    // fired once.
    pub fn fire(&mut self, id: TimerId) -> Option<Task> {
        let pending = self.pending.remove(&id)?;

        (pending.generation == self.generation(&pending.task))
            .then_some(pending.task)
    }

    #[cfg(test)]
    pub fn n_pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn delays() {
        assert_eq!(Task::Advance { x: 0, y: 0 }.delay_ms(), 100);
        assert_eq!(Task::ClearError { x: 0, y: 0 }.delay_ms(), 500);
        assert_eq!(Task::ClearFlash { number: 1 }.delay_ms(), 1000);
    }

    #[test]
    fn fire_once() {
        let mut timers = Timers::new();

        let a = timers.schedule(Task::Advance { x: 1, y: 2 });
        let b = timers.schedule(Task::ClearFlash { number: 3 });

        assert_ne!(a, b);
        assert_eq!(timers.n_pending(), 2);

        assert_eq!(timers.fire(b), Some(Task::ClearFlash { number: 3 }));
        assert_eq!(timers.fire(b), None);
        assert_eq!(timers.fire(a), Some(Task::Advance { x: 1, y: 2 }));
        assert_eq!(timers.fire(a), None);
        assert_eq!(timers.fire(1000), None);
        assert_eq!(timers.n_pending(), 0);
    }

    #[test]
    fn stale_cell() {
        let mut timers = Timers::new();

        let old = timers.schedule(Task::ClearError { x: 1, y: 1 });
        let other = timers.schedule(Task::ClearError { x: 2, y: 1 });

        timers.touch_cell(1, 1);

        let new = timers.schedule(Task::ClearError { x: 1, y: 1 });

        assert_eq!(timers.fire(old), None);
        assert_eq!(timers.fire(new), Some(Task::ClearError { x: 1, y: 1 }));
        assert_eq!(timers.fire(other), Some(Task::ClearError { x: 2, y: 1 }));
    }

    #[test]
    fn cancel_all() {
        let mut timers = Timers::new();

        let a = timers.schedule(Task::Advance { x: 0, y: 0 });
        let b = timers.schedule(Task::ClearFlash { number: 1 });

        timers.cancel_all();

        assert_eq!(timers.fire(a), None);
        assert_eq!(timers.fire(b), None);

        // Ids are not reused after a reset
        let c = timers.schedule(Task::ClearFlash { number: 1 });
        assert!(c != a && c != b);
        assert_eq!(timers.fire(c), Some(Task::ClearFlash { number: 1 }));
    }
}
