use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;

use super::schedule::FrameScheduler;

/// Counts from zero up to `target` over `duration_ms`.
///
/// Intermediate values are floored to whole numbers; the last frame shows
/// `target` exactly, so a rating of 4.9 ends on 4.9 and not on 4.
#[derive(Clone, Debug)]
pub struct Ramp {
    target: f64,
    duration_ms: f64,
    started_at: Option<f64>,
    current: f64,
    finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RampFrame {
    pub value: f64,
    pub finished: bool,
}

impl Ramp {
    /// Negative or NaN targets count to zero.
    pub fn new(target: f64, duration_ms: f64) -> Self {
        let target = if target.is_nan() { 0.0 } else { target.max(0.0) };
        Self {
            target,
            duration_ms,
            started_at: None,
            current: 0.0,
            finished: false,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.current
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Progress in 0.0..=1.0. Before the first frame this is 0.
    pub fn progress_at(&self, now: f64) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        if !(self.duration_ms > 0.0) {
            return 1.0;
        }
        let progress = (now - start) / self.duration_ms;
        if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        }
    }

    /// Advances to the frame at `now`. The first call fixes the start time.
    pub fn step(&mut self, now: f64) -> RampFrame {
        if self.finished {
            return RampFrame { value: self.current, finished: true };
        }
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }

        let progress = self.progress_at(now);
        if progress >= 1.0 {
            self.current = self.target;
            self.finished = true;
        } else {
            // late or out-of-order timestamps must not move the display backwards
            let floored = (progress * self.target).floor().min(self.target);
            self.current = self.current.max(floored);
        }

        RampFrame { value: self.current, finished: self.finished }
    }
}

struct RampShared<S: FrameScheduler> {
    scheduler: S,
    ramp: RefCell<Ramp>,
    pending: RefCell<Option<S::Handle>>,
    started: Cell<bool>,
    torn_down: Cell<bool>,
    on_frame: Box<dyn Fn(f64)>,
}

/// Runs a [`Ramp`] off a frame scheduler.
///
/// Dropping the driver cancels the pending frame, and any frame already in
/// flight becomes a no-op.
pub struct RampDriver<S: FrameScheduler> {
    shared: Rc<RampShared<S>>,
}

impl<S: FrameScheduler + 'static> RampDriver<S> {
    pub fn new(
        scheduler: S,
        target: f64,
        duration_ms: f64,
        on_frame: impl Fn(f64) + 'static,
    ) -> Self {
        Self {
            shared: Rc::new(RampShared {
                scheduler,
                ramp: RefCell::new(Ramp::new(target, duration_ms)),
                pending: RefCell::new(None),
                started: Cell::new(false),
                torn_down: Cell::new(false),
                on_frame: Box::new(on_frame),
            }),
        }
    }

    /// Starts the ramp. Later calls do nothing.
    pub fn start(&self) {
        if self.shared.started.replace(true) {
            return;
        }
        debug!("ramp to {} started", self.shared.ramp.borrow().target());
        Self::schedule(&self.shared);
    }

    #[cfg(test)]
    pub fn value(&self) -> f64 {
        self.shared.ramp.borrow().value()
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.shared.pending.borrow().is_some()
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.shared.ramp.borrow().is_finished()
    }

    fn schedule(shared: &Rc<RampShared<S>>) {
        let weak: Weak<RampShared<S>> = Rc::downgrade(shared);
        let handle = shared.scheduler.request_frame(Box::new(move |timestamp| {
            if let Some(shared) = weak.upgrade() {
                Self::handle_frame(&shared, timestamp);
            }
        }));
        *shared.pending.borrow_mut() = Some(handle);
    }

    fn handle_frame(shared: &Rc<RampShared<S>>, timestamp: f64) {
        // this frame has fired, its handle is spent
        drop(shared.pending.borrow_mut().take());
        if shared.torn_down.get() {
            return;
        }

        let frame = shared.ramp.borrow_mut().step(timestamp);
        (shared.on_frame)(frame.value);

        if frame.finished {
            debug!("ramp finished at {}", frame.value);
        } else if !shared.torn_down.get() {
            Self::schedule(shared);
        }
    }
}

impl<S: FrameScheduler> Drop for RampDriver<S> {
    fn drop(&mut self) {
        self.shared.torn_down.set(true);
        drop(self.shared.pending.borrow_mut().take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::schedule::testing::ManualFrames;

    fn run(target: f64, duration: f64, timestamps: &[f64]) -> Vec<f64> {
        let mut ramp = Ramp::new(target, duration);
        timestamps.iter().map(|&t| ramp.step(t).value).collect()
    }

    #[test]
    fn counts_to_250_over_two_seconds() {
        let values = run(250.0, 2000.0, &[0.0, 500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(values, vec![0.0, 62.0, 125.0, 187.0, 250.0]);
    }

    #[test]
    fn fractional_target_ends_on_exact_value() {
        let values = run(4.9, 2000.0, &[0.0, 500.0, 1000.0, 1500.0, 2000.0]);
        assert_eq!(&values[..4], &[0.0, 1.0, 2.0, 3.0]);
        for v in &values[..4] {
            assert_eq!(v.fract(), 0.0);
        }
        assert_eq!(values[4], 4.9);
        assert_eq!(values[4].to_string(), "4.9");
    }

    #[test]
    fn sequence_is_monotonic_bounded_and_exact_at_the_end() {
        let timestamps = [
            16.0, 33.0, 20.0, 180.0, 640.0, 639.0, 1001.0, 1400.0, 1999.9, 2300.0,
        ];
        for &target in &[0.0, 1.0, 7.0, 98.0, 250.0, 12_345.0, 4.9] {
            let mut ramp = Ramp::new(target, 2000.0);
            let mut last = 0.0;
            for &t in &timestamps {
                let frame = ramp.step(t);
                assert!(frame.value >= last, "target {target} went backwards at {t}");
                assert!(frame.value <= target);
                last = frame.value;
            }
            assert!(ramp.is_finished());
            assert_eq!(ramp.value(), target);
        }
    }

    #[test]
    fn zero_or_negative_duration_finishes_on_first_frame() {
        for duration in [0.0, -100.0, f64::NAN] {
            let mut ramp = Ramp::new(42.0, duration);
            let frame = ramp.step(1234.0);
            assert_eq!(frame, RampFrame { value: 42.0, finished: true });
        }
    }

    #[test]
    fn timestamp_before_start_clamps_to_zero() {
        let mut ramp = Ramp::new(100.0, 1000.0);
        ramp.step(500.0);
        assert_eq!(ramp.progress_at(100.0), 0.0);
        assert_eq!(ramp.step(100.0).value, 0.0);
    }

    #[test]
    fn negative_target_counts_to_zero() {
        let mut ramp = Ramp::new(-5.0, 100.0);
        ramp.step(0.0);
        assert_eq!(ramp.step(100.0), RampFrame { value: 0.0, finished: true });
    }

    #[test]
    fn driver_waits_for_start() {
        let frames = ManualFrames::default();
        let driver = RampDriver::new(frames.clone(), 10.0, 100.0, |_| {});
        assert_eq!(frames.pending(), 0);
        frames.fire(0.0);
        assert_eq!(driver.value(), 0.0);
        assert!(!driver.is_running());
    }

    #[test]
    fn driver_emits_each_frame_and_stops_when_finished() {
        let frames = ManualFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let driver = RampDriver::new(frames.clone(), 250.0, 2000.0, move |v| {
            sink.borrow_mut().push(v)
        });

        driver.start();
        for t in [0.0, 500.0, 1000.0, 1500.0, 2000.0] {
            assert_eq!(frames.pending(), 1);
            frames.fire(t);
        }

        assert_eq!(*seen.borrow(), vec![0.0, 62.0, 125.0, 187.0, 250.0]);
        assert_eq!(frames.pending(), 0);
        assert!(driver.is_finished());
        assert!(!driver.is_running());
    }

    #[test]
    fn second_start_is_ignored() {
        let frames = ManualFrames::default();
        let driver = RampDriver::new(frames.clone(), 10.0, 100.0, |_| {});
        driver.start();
        driver.start();
        assert_eq!(frames.pending(), 1);

        frames.fire(0.0);
        frames.fire(100.0);
        assert!(driver.is_finished());

        driver.start();
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn dropping_mid_run_cancels_the_pending_frame() {
        let frames = ManualFrames::default();
        let writes = Rc::new(Cell::new(0));
        let counter = writes.clone();
        let driver = RampDriver::new(frames.clone(), 100.0, 1000.0, move |_| {
            counter.set(counter.get() + 1)
        });

        driver.start();
        frames.fire(0.0);
        assert_eq!(writes.get(), 1);
        assert_eq!(frames.pending(), 1);

        drop(driver);
        assert_eq!(frames.pending(), 0);
        frames.fire(500.0);
        assert_eq!(writes.get(), 1);
    }
}
