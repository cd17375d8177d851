//! Scroll-triggered reveals, counters and the testimonial rotation.
//!
//! The state machines in [`visibility`], [`ramp`] and [`carousel`] know
//! nothing about the browser; they are driven through the traits in
//! [`schedule`]. [`browser`] implements those traits on top of
//! `requestAnimationFrame`, `setInterval` and `IntersectionObserver`, and
//! [`hooks`] wraps everything for function components.

pub mod browser;
pub mod carousel;
pub mod hooks;
pub mod ramp;
pub mod schedule;
pub mod visibility;

pub use carousel::{CarouselOptions, JumpPolicy};
pub use hooks::{use_carousel, use_ramp, use_visibility};
pub use visibility::VisibilityOptions;
