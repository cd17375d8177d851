use super::visibility::{Intersection, Watch};
use crate::error::PlatformError;

/// Per-display-frame scheduling. The handle cancels the frame when dropped.
pub trait FrameScheduler {
    type Handle;

    /// Runs `callback` once on the next frame with the frame timestamp in ms.
    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// Repeating timer. The handle stops the timer when dropped.
pub trait IntervalScheduler {
    type Handle;

    fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Viewport intersection notifications for one target. The handle
/// disconnects when dropped; so does a callback returning [`Watch::Stop`].
pub trait ViewportObserver {
    type Target;
    type Handle;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_sample: Box<dyn FnMut(Intersection) -> Watch>,
    ) -> Result<Self::Handle, PlatformError>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic schedulers for driving the state machines in tests.

    use super::{FrameScheduler, IntervalScheduler, ViewportObserver};
    use crate::error::PlatformError;
    use crate::motion::visibility::{Intersection, Watch};
    use std::cell::{Cell, RefCell};
    use std::collections::BTreeMap;
    use std::rc::{Rc, Weak};

    type FrameQueue = RefCell<BTreeMap<u64, Box<dyn FnOnce(f64)>>>;

    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<FrameQueue>,
        next_id: Rc<Cell<u64>>,
    }

    pub struct ManualFrame {
        id: u64,
        queue: Weak<FrameQueue>,
    }

    impl Drop for ManualFrame {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().remove(&self.id);
            }
        }
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Runs every frame that was pending when called.
        pub fn fire(&self, timestamp: f64) {
            let due: Vec<_> = std::mem::take(&mut *self.queue.borrow_mut())
                .into_values()
                .collect();
            for callback in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualFrame;

        fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> ManualFrame {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().insert(id, callback);
            ManualFrame {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    type TimerTable = RefCell<BTreeMap<u64, (u32, Rc<RefCell<Box<dyn FnMut()>>>)>>;

    #[derive(Clone, Default)]
    pub struct ManualIntervals {
        timers: Rc<TimerTable>,
        next_id: Rc<Cell<u64>>,
    }

    pub struct ManualInterval {
        id: u64,
        timers: Weak<TimerTable>,
    }

    impl Drop for ManualInterval {
        fn drop(&mut self) {
            if let Some(timers) = self.timers.upgrade() {
                timers.borrow_mut().remove(&self.id);
            }
        }
    }

    impl ManualIntervals {
        pub fn active(&self) -> usize {
            self.timers.borrow().len()
        }

        /// Total number of timers ever started.
        pub fn started(&self) -> u64 {
            self.next_id.get()
        }

        pub fn period_of_latest(&self) -> Option<u32> {
            self.timers.borrow().values().next_back().map(|(period, _)| *period)
        }

        /// One tick on every live timer. Timers cancelled by an earlier
        /// callback in the same round are skipped.
        pub fn tick(&self) {
            let ids: Vec<u64> = self.timers.borrow().keys().copied().collect();
            for id in ids {
                let callback = self.timers.borrow().get(&id).map(|(_, cb)| cb.clone());
                if let Some(callback) = callback {
                    let mut callback = callback.borrow_mut();
                    (*callback)();
                }
            }
        }
    }

    impl IntervalScheduler for ManualIntervals {
        type Handle = ManualInterval;

        fn every(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> ManualInterval {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.timers
                .borrow_mut()
                .insert(id, (period_ms, Rc::new(RefCell::new(callback))));
            ManualInterval {
                id,
                timers: Rc::downgrade(&self.timers),
            }
        }
    }

    type WatchTable = RefCell<BTreeMap<u64, (f64, Rc<RefCell<Box<dyn FnMut(Intersection) -> Watch>>>)>>;

    /// Observer fake. Samples are pushed with [`ManualViewport::deliver`].
    #[derive(Clone, Default)]
    pub struct ManualViewport {
        watches: Rc<WatchTable>,
        next_id: Rc<Cell<u64>>,
        unavailable: bool,
    }

    pub struct ManualWatch {
        id: u64,
        watches: Weak<WatchTable>,
    }

    impl Drop for ManualWatch {
        fn drop(&mut self) {
            if let Some(watches) = self.watches.upgrade() {
                watches.borrow_mut().remove(&self.id);
            }
        }
    }

    impl ManualViewport {
        /// A viewport whose observer can never be constructed.
        pub fn unavailable() -> Self {
            Self { unavailable: true, ..Self::default() }
        }

        /// Observers currently connected.
        pub fn active(&self) -> usize {
            self.watches.borrow().len()
        }

        /// Total number of observers ever registered.
        pub fn registered(&self) -> u64 {
            self.next_id.get()
        }

        pub fn threshold_of_latest(&self) -> Option<f64> {
            self.watches.borrow().values().next_back().map(|(threshold, _)| *threshold)
        }

        /// Sends `sample` to every connected observer, disconnecting the ones
        /// that answer [`Watch::Stop`].
        pub fn deliver(&self, sample: Intersection) {
            let ids: Vec<u64> = self.watches.borrow().keys().copied().collect();
            for id in ids {
                let callback = self.watches.borrow().get(&id).map(|(_, cb)| cb.clone());
                let Some(callback) = callback else {
                    continue;
                };
                let watch = {
                    let mut callback = callback.borrow_mut();
                    (*callback)(sample)
                };
                if watch == Watch::Stop {
                    self.watches.borrow_mut().remove(&id);
                }
            }
        }
    }

    impl ViewportObserver for ManualViewport {
        type Target = ();
        type Handle = ManualWatch;

        fn observe(
            &self,
            _target: &(),
            threshold: f64,
            on_sample: Box<dyn FnMut(Intersection) -> Watch>,
        ) -> Result<ManualWatch, PlatformError> {
            if self.unavailable {
                return Err(PlatformError::Observer("not supported".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.watches
                .borrow_mut()
                .insert(id, (threshold, Rc::new(RefCell::new(on_sample))));
            Ok(ManualWatch {
                id,
                watches: Rc::downgrade(&self.watches),
            })
        }
    }
}
