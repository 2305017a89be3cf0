use gloo_timers::callback::Timeout;

/// A scheduled callback that can be cancelled exactly once.
///
/// Cancelling consumes the handle, so a timer can't be cancelled twice or
/// used after cancellation.
pub trait TimerHandle {
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser event-loop timers backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserScheduler;

pub struct BrowserTimeout(Timeout);

impl TimerHandle for BrowserTimeout {
    fn cancel(self) {
        // Dropping a gloo Timeout clears it; harmless if it already fired.
        drop(self.0);
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle {
        BrowserTimeout(Timeout::new(delay_ms, callback))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    Idle,
    Pending,
}

/// Holds at most one pending advance.
///
/// Every [`reset`](AutoplayTimer::reset) cancels the previous handle before
/// scheduling a new one. After [`teardown`](AutoplayTimer::teardown) the timer
/// stays idle for good.
pub struct AutoplayTimer<S: Scheduler> {
    scheduler: S,
    interval_ms: u32,
    pending: Option<S::Handle>,
    torn_down: bool,
}

impl<S: Scheduler> AutoplayTimer<S> {
    pub fn new(scheduler: S, interval_ms: u32) -> Self {
        Self {
            scheduler,
            interval_ms,
            pending: None,
            torn_down: false,
        }
    }

    pub fn reset(&mut self, enabled: bool, on_elapsed: impl FnOnce() + 'static) -> AutoplayPhase {
        self.cancel();
        if self.torn_down || !enabled {
            return AutoplayPhase::Idle;
        }
        let handle = self
            .scheduler
            .schedule(self.interval_ms, Box::new(on_elapsed));
        self.pending = Some(handle);
        AutoplayPhase::Pending
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }

    pub fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    pub fn phase(&self) -> AutoplayPhase {
        if self.pending.is_some() {
            AutoplayPhase::Pending
        } else {
            AutoplayPhase::Idle
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl<S: Scheduler> Drop for AutoplayTimer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Virtual-clock scheduler for driving timers from tests.
#[cfg(test)]
pub(crate) mod manual {
    use super::{Scheduler, TimerHandle};
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Entry {
        id: u64,
        due: u64,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        entries: Vec<Entry>,
    }

    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl TimerHandle for ManualHandle {
        fn cancel(self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().entries.retain(|e| e.id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + u64::from(delay_ms);
            queue.entries.push(Entry { id, due, callback });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    impl ManualScheduler {
        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().entries.len()
        }

        /// Move the clock forward, firing due callbacks in order.
        /// Callbacks run with the queue unborrowed so they may reschedule.
        pub(crate) fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now + ms;
            loop {
                let fired = {
                    let mut queue = self.queue.borrow_mut();
                    let next = queue
                        .entries
                        .iter()
                        .enumerate()
                        .filter(|(_, e)| e.due <= target)
                        .min_by_key(|(_, e)| (e.due, e.id))
                        .map(|(i, _)| i);
                    next.map(|i| {
                        let entry = queue.entries.remove(i);
                        queue.now = entry.due;
                        entry.callback
                    })
                };
                match fired {
                    Some(callback) => callback(),
                    None => break,
                }
            }
            self.queue.borrow_mut().now = target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, impl Fn() -> Box<dyn FnOnce()>) {
        let hits = Rc::new(Cell::new(0));
        let make = {
            let hits = hits.clone();
            move || {
                let hits = hits.clone();
                Box::new(move || hits.set(hits.get() + 1)) as Box<dyn FnOnce()>
            }
        };
        (hits, make)
    }

    #[test]
    fn disabled_reset_stays_idle() {
        let sched = ManualScheduler::default();
        let mut timer = AutoplayTimer::new(sched.clone(), 4000);
        assert_eq!(timer.reset(false, || {}), AutoplayPhase::Idle);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn fires_after_full_interval() {
        let sched = ManualScheduler::default();
        let (hits, make) = counter();
        let mut timer = AutoplayTimer::new(sched.clone(), 4000);
        timer.reset(true, make());
        sched.advance(3999);
        assert_eq!(hits.get(), 0);
        sched.advance(1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn repeated_resets_leave_one_pending_timer() {
        let sched = ManualScheduler::default();
        let (hits, make) = counter();
        let mut timer = AutoplayTimer::new(sched.clone(), 4000);
        for _ in 0..10 {
            timer.reset(true, make());
            assert_eq!(sched.pending(), 1);
        }
        sched.advance(20_000);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn reset_restarts_the_full_interval() {
        let sched = ManualScheduler::default();
        let (hits, make) = counter();
        let mut timer = AutoplayTimer::new(sched.clone(), 4000);
        timer.reset(true, make());
        sched.advance(3000);
        timer.reset(true, make());
        sched.advance(3000);
        assert_eq!(hits.get(), 0);
        sched.advance(1000);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn teardown_is_terminal() {
        let sched = ManualScheduler::default();
        let (hits, make) = counter();
        let mut timer = AutoplayTimer::new(sched.clone(), 4000);
        timer.reset(true, make());
        timer.teardown();
        assert_eq!(timer.phase(), AutoplayPhase::Idle);
        assert_eq!(timer.reset(true, make()), AutoplayPhase::Idle);
        sched.advance(10_000);
        assert_eq!(hits.get(), 0);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn dropping_the_timer_cancels_it() {
        let sched = ManualScheduler::default();
        let (hits, make) = counter();
        {
            let mut timer = AutoplayTimer::new(sched.clone(), 4000);
            timer.reset(true, make());
        }
        assert_eq!(sched.pending(), 0);
        sched.advance(5000);
        assert_eq!(hits.get(), 0);
    }
}
