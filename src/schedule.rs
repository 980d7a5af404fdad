//! Timer continuations and the two rate limiters built on them.
//!
//! DESIGN
//! ======
//! Tasks are fire-and-forget: nothing is awaited and no cancellation handle
//! is returned. Rate limiting is done with shared flags instead of canceling
//! timers: [`Debouncer`] drops every task whose generation was superseded,
//! [`FrameGate`] refuses new work while one frame is pending.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::cell::Cell;
use std::rc::Rc;

/// A one-shot deferred task.
pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler {
    /// Run `task` once after `delay_ms`.
    fn after(&self, delay_ms: u32, task: Task);
    /// Run `task` before the next repaint.
    fn next_frame(&self, task: Task);
}

/// Trailing-edge debounce: only the last call within a quiet window runs.
pub struct Debouncer {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    #[must_use]
    pub fn new(scheduler: Rc<dyn Scheduler>, wait_ms: u32) -> Self {
        Self { scheduler, wait_ms, generation: Rc::new(Cell::new(0)) }
    }

    pub fn call(&self, task: impl FnOnce() + 'static) {
        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        let generation = Rc::clone(&self.generation);
        self.scheduler.after(
            self.wait_ms,
            Box::new(move || {
                if generation.get() == ticket {
                    task();
                }
            }),
        );
    }
}

/// At most one pending animation-frame computation at a time.
pub struct FrameGate {
    scheduler: Rc<dyn Scheduler>,
    in_flight: Rc<Cell<bool>>,
}

impl FrameGate {
    #[must_use]
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self { scheduler, in_flight: Rc::new(Cell::new(false)) }
    }

    /// Queue `task` for the next frame unless one is already queued.
    /// Returns whether the task was accepted.
    pub fn request(&self, task: impl FnOnce() + 'static) -> bool {
        if self.in_flight.get() {
            return false;
        }
        self.in_flight.set(true);
        let in_flight = Rc::clone(&self.in_flight);
        self.scheduler.next_frame(Box::new(move || {
            task();
            in_flight.set(false);
        }));
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }
}

// =============================================================================
// TEST CLOCK
// =============================================================================

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};

    use super::{Scheduler, Task};

    struct Pending {
        due: u64,
        seq: u64,
        task: Task,
    }

    /// Scheduler driven by explicit `advance` and `run_frame` calls.
    #[derive(Default)]
    pub struct ManualScheduler {
        now: Cell<u64>,
        seq: Cell<u64>,
        timers: RefCell<Vec<Pending>>,
        frames: RefCell<Vec<Task>>,
    }

    impl ManualScheduler {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        #[must_use]
        pub fn now(&self) -> u64 {
            self.now.get()
        }

        /// Move the clock forward, running due timers in deadline order.
        /// Timers scheduled by running tasks fire too if they fall inside the window.
        pub fn advance(&self, ms: u64) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut timers = self.timers.borrow_mut();
                    let position = timers
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    position.map(|i| timers.remove(i))
                };
                let Some(pending) = next else {
                    break;
                };
                self.now.set(pending.due);
                (pending.task)();
            }
            self.now.set(target);
        }

        /// Run every frame callback queued so far. Returns how many ran.
        pub fn run_frame(&self) -> usize {
            let tasks = std::mem::take(&mut *self.frames.borrow_mut());
            let count = tasks.len();
            for task in tasks {
                task();
            }
            count
        }

        #[must_use]
        pub fn pending_timers(&self) -> usize {
            self.timers.borrow().len()
        }

        #[must_use]
        pub fn pending_frames(&self) -> usize {
            self.frames.borrow().len()
        }
    }

    impl Scheduler for ManualScheduler {
        fn after(&self, delay_ms: u32, task: Task) {
            let seq = self.seq.get() + 1;
            self.seq.set(seq);
            self.timers.borrow_mut().push(Pending { due: self.now.get() + u64::from(delay_ms), seq, task });
        }

        fn next_frame(&self, task: Task) {
            self.frames.borrow_mut().push(task);
        }
    }
}
