use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use super::schedule::ViewportObserver;
use crate::error::PlatformError;

/// What happens to the flag once the element has been seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Latch {
    /// Flips to true once and stops observing.
    #[default]
    Sticky,
    /// Follows the element in and out of the viewport.
    Tracking,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element's area that has to be on screen, 0.0..=1.0.
    pub threshold: f64,
    pub latch: Latch,
}

impl VisibilityOptions {
    pub const fn sticky(threshold: f64) -> Self {
        Self { threshold, latch: Latch::Sticky }
    }

    pub const fn tracking(threshold: f64) -> Self {
        Self { threshold, latch: Latch::Tracking }
    }

    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_nan() {
            0.0
        } else {
            self.threshold.clamp(0.0, 1.0)
        }
    }
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self::sticky(0.1)
    }
}

/// One notification from the viewport observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub intersecting: bool,
    pub ratio: f64,
}

#[cfg(test)]
impl Intersection {
    pub fn ratio(ratio: f64) -> Self {
        Self { intersecting: ratio > 0.0, ratio }
    }

    pub fn hidden() -> Self {
        Self { intersecting: false, ratio: 0.0 }
    }
}

/// Whether the observer should keep delivering samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

#[derive(Clone, Debug)]
pub struct VisibilityTrigger {
    options: VisibilityOptions,
    triggered: bool,
}

impl VisibilityTrigger {
    pub fn new(options: VisibilityOptions) -> Self {
        Self { options, triggered: false }
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Feeds one sample and reports whether observation should go on.
    pub fn observe(&mut self, sample: Intersection) -> Watch {
        let visible = sample.intersecting
            && !sample.ratio.is_nan()
            && sample.ratio >= self.options.clamped_threshold();

        match self.options.latch {
            Latch::Sticky => {
                if visible {
                    self.triggered = true;
                }
                if self.triggered {
                    Watch::Stop
                } else {
                    Watch::Continue
                }
            }
            Latch::Tracking => {
                self.triggered = visible;
                Watch::Continue
            }
        }
    }
}

struct VisibilityShared {
    trigger: RefCell<VisibilityTrigger>,
    on_change: Box<dyn Fn(bool)>,
}

impl VisibilityShared {
    fn handle_sample(&self, sample: Intersection) -> Watch {
        let (before, watch, after) = {
            let mut trigger = self.trigger.borrow_mut();
            let before = trigger.triggered();
            let watch = trigger.observe(sample);
            (before, watch, trigger.triggered())
        };
        if before != after {
            (self.on_change)(after);
        }
        watch
    }
}

/// One viewport observer feeding a [`VisibilityTrigger`].
///
/// `on_change` runs whenever the flag flips. Without a target nothing is
/// registered. Dropping the driver disconnects the observer.
pub struct VisibilityDriver<O: ViewportObserver> {
    // the observer callback only holds a weak reference
    #[cfg_attr(not(test), allow(dead_code))]
    shared: Rc<VisibilityShared>,
    _watch: Option<O::Handle>,
}

impl<O: ViewportObserver> VisibilityDriver<O> {
    pub fn new(
        observer: &O,
        target: Option<&O::Target>,
        options: VisibilityOptions,
        on_change: impl Fn(bool) + 'static,
    ) -> Result<Self, PlatformError> {
        let shared = Rc::new(VisibilityShared {
            trigger: RefCell::new(VisibilityTrigger::new(options)),
            on_change: Box::new(on_change),
        });

        let watch = match target {
            Some(target) => {
                let weak: Weak<VisibilityShared> = Rc::downgrade(&shared);
                let watch = observer.observe(
                    target,
                    options.clamped_threshold(),
                    Box::new(move |sample: Intersection| match weak.upgrade() {
                        Some(shared) => shared.handle_sample(sample),
                        None => Watch::Stop,
                    }),
                )?;
                Some(watch)
            }
            None => {
                debug!("visibility target not mounted, nothing to observe");
                None
            }
        };

        Ok(Self {
            shared,
            _watch: watch,
        })
    }

    #[cfg(test)]
    pub fn triggered(&self) -> bool {
        self.shared.trigger.borrow().triggered()
    }
}
