use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use super::browser::{BrowserFrames, BrowserIntervals, BrowserViewport};
use super::carousel::{CarouselDriver, CarouselOptions};
use super::ramp::RampDriver;
use super::visibility::{VisibilityDriver, VisibilityOptions};

/// Whether the element behind `node` has been (or, when tracking, is) on
/// screen. One observer per mount, replaced when `node` or `options` change.
#[hook]
pub fn use_visibility(node: NodeRef, options: VisibilityOptions) -> bool {
    let visible = use_state(|| false);

    {
        let setter = visible.setter();
        use_effect_with_deps(
            move |(node, options)| {
                let element = node.cast::<Element>();
                let driver = VisibilityDriver::new(
                    &BrowserViewport,
                    element.as_ref(),
                    *options,
                    move |v| setter.set(v),
                )
                .map_err(|e| warn!("visibility watch not started: {}", e))
                .ok();
                move || drop(driver)
            },
            (node, options),
        );
    }

    *visible
}

/// Value of a counter ramping to `target` once `start` has been true.
/// Later changes of `start` do not restart it.
#[hook]
pub fn use_ramp(target: f64, duration_ms: u32, start: bool) -> f64 {
    let value = use_state(|| 0.0_f64);
    let latched = use_mut_ref(|| false);

    if start {
        *latched.borrow_mut() = true;
    }
    let started = *latched.borrow();

    {
        let setter = value.setter();
        use_effect_with_deps(
            move |(started, target, duration_ms)| {
                let driver = started.then(|| {
                    let driver = RampDriver::new(
                        BrowserFrames,
                        *target,
                        f64::from(*duration_ms),
                        move |v| setter.set(v),
                    );
                    driver.start();
                    driver
                });
                move || drop(driver)
            },
            (started, target, duration_ms),
        );
    }

    *value
}

/// What a carousel view needs to render and wire its controls.
#[derive(Clone)]
pub struct CarouselHandle {
    pub active: usize,
    pub go_to: Callback<usize>,
    pub prev: Callback<()>,
    pub next: Callback<()>,
    pub set_paused: Callback<bool>,
}

/// Carousel over `len` items whose timer runs only while `running`.
#[hook]
pub fn use_carousel(len: usize, options: CarouselOptions, running: bool) -> CarouselHandle {
    let active = use_state(|| 0_usize);

    let driver: Rc<CarouselDriver<BrowserIntervals>> = {
        let setter = active.setter();
        use_memo(
            move |(len, options)| {
                CarouselDriver::new(BrowserIntervals, *len, *options, move |i| setter.set(i))
            },
            (len, options),
        )
    };

    {
        // keyed on the driver's inputs too, so a rebuilt driver takes over the timer
        let driver = driver.clone();
        use_effect_with_deps(
            move |(running, _, _)| {
                driver.set_running(*running);
                move || driver.set_running(false)
            },
            (running, len, options),
        );
    }

    let go_to = {
        let driver = driver.clone();
        Callback::from(move |index: usize| driver.go_to(index))
    };
    let prev = {
        let driver = driver.clone();
        Callback::from(move |_: ()| driver.prev())
    };
    let next = {
        let driver = driver.clone();
        Callback::from(move |_: ()| driver.next())
    };
    let set_paused = {
        let driver = driver.clone();
        Callback::from(move |paused: bool| driver.set_paused(paused))
    };

    CarouselHandle {
        active: (*active).min(len.saturating_sub(1)),
        go_to,
        prev,
        next,
        set_paused,
    }
}
