use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use serde::Deserialize;

use super::schedule::IntervalScheduler;

/// What a direct jump does to the auto-advance timer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// Next automatic advance is a full interval after the jump.
    #[default]
    RestartTimer,
    /// The running interval is left alone.
    KeepTimer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOptions {
    pub interval_ms: u32,
    pub jump_policy: JumpPolicy,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval_ms: 8000,
            jump_policy: JumpPolicy::RestartTimer,
        }
    }
}

/// Active slide over a fixed number of items.
///
/// With zero items every operation is a no-op and the index stays 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0, paused: false }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Timer-driven advance. Returns whether the index moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.next()
    }

    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let before = self.active;
        self.active = (self.active + 1) % self.len;
        before != self.active
    }

    pub fn prev(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        let before = self.active;
        self.active = (self.active + self.len - 1) % self.len;
        before != self.active
    }

    /// Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let before = self.active;
        self.active = index;
        before != self.active
    }
}

struct CarouselShared<S: IntervalScheduler> {
    scheduler: S,
    options: CarouselOptions,
    state: RefCell<Carousel>,
    timer: RefCell<Option<S::Handle>>,
    running: Cell<bool>,
    on_change: Box<dyn Fn(usize)>,
}

/// Carousel state plus the timer that advances it.
///
/// The timer only exists while the driver is running; dropping the driver
/// stops it.
pub struct CarouselDriver<S: IntervalScheduler> {
    shared: Rc<CarouselShared<S>>,
}

impl<S: IntervalScheduler + 'static> CarouselDriver<S> {
    pub fn new(
        scheduler: S,
        len: usize,
        options: CarouselOptions,
        on_change: impl Fn(usize) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(CarouselShared {
                scheduler,
                options,
                state: RefCell::new(Carousel::new(len)),
                timer: RefCell::new(None),
                running: Cell::new(false),
                on_change: Box::new(on_change),
            }),
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> usize {
        self.shared.state.borrow().active()
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.shared.state.borrow().is_paused()
    }

    /// Starts or stops automatic advancement. Starting always replaces any
    /// previous timer.
    pub fn set_running(&self, running: bool) {
        self.shared.running.set(running);
        if running {
            Self::start_timer(&self.shared);
        } else {
            Self::stop_timer(&self.shared);
        }
    }

    pub fn set_paused(&self, paused: bool) {
        self.shared.state.borrow_mut().set_paused(paused);
    }

    pub fn next(&self) {
        let moved = self.shared.state.borrow_mut().next();
        Self::notify(&self.shared, moved);
    }

    pub fn prev(&self) {
        let moved = self.shared.state.borrow_mut().prev();
        Self::notify(&self.shared, moved);
    }

    /// Out-of-range indices are ignored and leave the timer alone.
    pub fn go_to(&self, index: usize) {
        let (in_range, moved) = {
            let mut state = self.shared.state.borrow_mut();
            (index < state.len, state.go_to(index))
        };
        if !in_range {
            debug!("carousel jump to {} ignored", index);
            return;
        }
        if self.shared.options.jump_policy == JumpPolicy::RestartTimer
            && self.shared.running.get()
        {
            Self::start_timer(&self.shared);
        }
        Self::notify(&self.shared, moved);
    }

    fn start_timer(shared: &Rc<CarouselShared<S>>) {
        Self::stop_timer(shared);
        let weak: Weak<CarouselShared<S>> = Rc::downgrade(shared);
        let handle = shared.scheduler.every(
            shared.options.interval_ms,
            Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    Self::tick(&shared);
                }
            }),
        );
        *shared.timer.borrow_mut() = Some(handle);
        debug!("carousel timer started ({} ms)", shared.options.interval_ms);
    }

    fn stop_timer(shared: &CarouselShared<S>) {
        if shared.timer.borrow_mut().take().is_some() {
            debug!("carousel timer stopped");
        }
    }

    fn tick(shared: &Rc<CarouselShared<S>>) {
        if !shared.running.get() {
            return;
        }
        let moved = shared.state.borrow_mut().tick();
        Self::notify(shared, moved);
    }

    fn notify(shared: &CarouselShared<S>, moved: bool) {
        if moved {
            let active = shared.state.borrow().active();
            (shared.on_change)(active);
        }
    }
}

impl<S: IntervalScheduler> Drop for CarouselDriver<S> {
    fn drop(&mut self) {
        self.shared.running.set(false);
        drop(self.shared.timer.borrow_mut().take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::schedule::testing::ManualIntervals;

    #[test]
    fn next_wraps_back_to_start() {
        for k in 2..8 {
            let mut carousel = Carousel::new(k);
            for _ in 0..k {
                carousel.next();
            }
            assert_eq!(carousel.active(), 0);
        }
    }

    #[test]
    fn prev_from_start_goes_to_last() {
        for k in 2..8 {
            let mut carousel = Carousel::new(k);
            carousel.prev();
            assert_eq!(carousel.active(), k - 1);
        }
    }

    #[test]
    fn go_to_sets_index_regardless_of_state() {
        let mut carousel = Carousel::new(5);
        carousel.next();
        carousel.set_paused(true);
        for i in [4, 0, 2, 2, 3] {
            carousel.go_to(i);
            assert_eq!(carousel.active(), i);
        }
        assert!(!carousel.go_to(5));
        assert_eq!(carousel.active(), 3);
    }

    #[test]
    fn paused_ticks_do_nothing_and_unpausing_resumes() {
        let mut carousel = Carousel::new(3);
        carousel.set_paused(true);
        for _ in 0..3 {
            assert!(!carousel.tick());
        }
        assert_eq!(carousel.active(), 0);

        // manual navigation still works while paused
        carousel.next();
        assert_eq!(carousel.active(), 1);

        carousel.set_paused(false);
        assert!(carousel.tick());
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn three_items_rotate_and_wrap() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        assert_eq!(carousel.active(), 1);
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.active(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.next());
        assert!(!carousel.prev());
        assert!(!carousel.tick());
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.active(), 0);
    }

    fn driver(
        policy: JumpPolicy,
    ) -> (ManualIntervals, CarouselDriver<ManualIntervals>, Rc<RefCell<Vec<usize>>>) {
        let timers = ManualIntervals::default();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = changes.clone();
        let options = CarouselOptions { interval_ms: 8000, jump_policy: policy };
        let driver = CarouselDriver::new(timers.clone(), 3, options, move |i| {
            sink.borrow_mut().push(i)
        });
        (timers, driver, changes)
    }

    #[test]
    fn timer_only_runs_while_enabled() {
        let (timers, driver, changes) = driver(JumpPolicy::RestartTimer);
        timers.tick();
        assert_eq!(driver.active(), 0);

        driver.set_running(true);
        assert_eq!(timers.active(), 1);
        assert_eq!(timers.period_of_latest(), Some(8000));
        timers.tick();
        assert_eq!(driver.active(), 1);

        driver.set_running(false);
        assert_eq!(timers.active(), 0);
        timers.tick();
        assert_eq!(driver.active(), 1);
        assert_eq!(*changes.borrow(), vec![1]);
    }

    #[test]
    fn enabling_twice_keeps_a_single_tick_stream() {
        let (timers, driver, _) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        driver.set_running(true);
        assert_eq!(timers.active(), 1);
        timers.tick();
        assert_eq!(driver.active(), 1);
    }

    #[test]
    fn jump_restarts_the_interval() {
        let (timers, driver, changes) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        assert_eq!(timers.started(), 1);

        driver.go_to(2);
        assert_eq!(driver.active(), 2);
        assert_eq!(timers.started(), 2);
        assert_eq!(timers.active(), 1);

        timers.tick();
        assert_eq!(driver.active(), 0);
        assert_eq!(*changes.borrow(), vec![2, 0]);
    }

    #[test]
    fn jump_can_leave_the_interval_running() {
        let (timers, driver, _) = driver(JumpPolicy::KeepTimer);
        driver.set_running(true);
        driver.go_to(2);
        assert_eq!(timers.started(), 1);
        assert_eq!(timers.active(), 1);
    }

    #[test]
    fn jump_while_stopped_does_not_start_a_timer() {
        let (timers, driver, _) = driver(JumpPolicy::RestartTimer);
        driver.go_to(1);
        assert_eq!(driver.active(), 1);
        assert_eq!(timers.active(), 0);
    }

    #[test]
    fn out_of_range_jump_leaves_index_and_timer_alone() {
        let (timers, driver, changes) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        driver.go_to(9);
        assert_eq!(driver.active(), 0);
        assert_eq!(timers.started(), 1);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn arrows_do_not_touch_the_timer() {
        let (timers, driver, changes) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        driver.prev();
        driver.next();
        driver.next();
        assert_eq!(timers.started(), 1);
        assert_eq!(*changes.borrow(), vec![2, 0, 1]);
    }

    #[test]
    fn pause_gates_ticks_not_navigation() {
        let (timers, driver, _) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        driver.set_paused(true);
        assert!(driver.is_paused());
        for _ in 0..3 {
            timers.tick();
        }
        assert_eq!(driver.active(), 0);

        driver.next();
        assert_eq!(driver.active(), 1);

        driver.set_paused(false);
        timers.tick();
        assert_eq!(driver.active(), 2);
    }

    #[test]
    fn dropping_the_driver_stops_its_timer() {
        let (timers, driver, changes) = driver(JumpPolicy::RestartTimer);
        driver.set_running(true);
        drop(driver);
        assert_eq!(timers.active(), 0);
        timers.tick();
        assert!(changes.borrow().is_empty());
    }
}
