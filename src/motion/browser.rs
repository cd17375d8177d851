use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::schedule::{FrameScheduler, IntervalScheduler, ViewportObserver};
use super::visibility::{Intersection, Watch};
use crate::error::PlatformError;

/// `requestAnimationFrame`. Dropping the handle cancels the frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

/// `setInterval`. Dropping the handle clears the interval.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserIntervals;

impl IntervalScheduler for BrowserIntervals {
    type Handle = Interval;

    fn every(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, move || callback())
    }
}

/// `IntersectionObserver`. Each call watches one element through its own
/// [`ViewportWatch`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl ViewportObserver for BrowserViewport {
    type Target = Element;
    type Handle = ViewportWatch;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        on_sample: Box<dyn FnMut(Intersection) -> Watch>,
    ) -> Result<ViewportWatch, PlatformError> {
        ViewportWatch::new(target, threshold, on_sample)
    }
}

/// An `IntersectionObserver` watching one element, disconnected on drop.
pub struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewportWatch {
    /// `on_sample` gets every notification for `target`; returning
    /// [`Watch::Stop`] disconnects the observer.
    pub fn new(
        target: &Element,
        threshold: f64,
        mut on_sample: impl FnMut(Intersection) -> Watch + 'static,
    ) -> Result<Self, PlatformError> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = Intersection {
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    if on_sample(sample) == Watch::Stop {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| PlatformError::Observer(format!("{:?}", e)))?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
