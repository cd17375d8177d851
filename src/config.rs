//! Site configuration, created once in `main` and handed down as props.
//!
//! Values can be overridden from `index.html` with an inline JSON document:
//!
//! ```html
//! <script id="site-config" type="application/json">
//!   { "motion": { "carousel_interval_ms": 6000 } }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::motion::JumpPolicy;

const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub contact_email: String,
    pub location: Vec<String>,
    pub images: ImageSet,
    pub motion: MotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "Kambl Creations".to_string(),
            contact_email: "Hello@kambl.co.uk".to_string(),
            location: vec!["Manchester".to_string(), "United Kingdom".to_string()],
            images: ImageSet::default(),
            motion: MotionConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the inline config document if the page has one, falling back
    /// to defaults otherwise.
    pub fn load() -> Self {
        let inline = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|e| e.text_content())
            .filter(|text| !text.trim().is_empty());

        match inline {
            Some(json) => match Self::from_json(&json) {
                Ok(config) => {
                    info!("Loaded inline site config");
                    config
                }
                Err(e) => {
                    warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImageSet {
    pub hero: String,
    pub team_photo: String,
    /// One portrait per testimonial, in display order.
    pub testimonials: Vec<String>,
}

#[cfg(debug_assertions)]
impl Default for ImageSet {
    fn default() -> Self {
        Self {
            hero: placeholder_image(1920, 1080, "#333", "Hero Background"),
            team_photo: placeholder_image(800, 600, "#555", "Team Photo"),
            testimonials: (1..=3)
                .map(|n| placeholder_image(400, 400, "#666", &format!("Client {}", n)))
                .collect(),
        }
    }
}

#[cfg(not(debug_assertions))]
impl Default for ImageSet {
    fn default() -> Self {
        Self {
            hero: "/assets/hero-bg.jpg".to_string(),
            team_photo: "/assets/team-photo.jpg".to_string(),
            testimonials: (1..=3)
                .map(|n| format!("/assets/testimonial-{}.jpg", n))
                .collect(),
        }
    }
}

impl ImageSet {
    pub fn testimonial(&self, index: usize) -> Option<&str> {
        self.testimonials.get(index).map(String::as_str)
    }

    pub fn all(&self) -> impl Iterator<Item = &str> {
        [self.hero.as_str(), self.team_photo.as_str()]
            .into_iter()
            .chain(self.testimonials.iter().map(String::as_str))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub counter_duration_ms: u32,
    pub counter_threshold: f64,
    pub about_threshold: f64,
    pub testimonials_threshold: f64,
    pub contact_threshold: f64,
    pub carousel_interval_ms: u32,
    pub carousel_jump: JumpPolicy,
    pub cookie_banner_delay_ms: u32,
    pub cookie_banner_exit_ms: u32,
    pub contact_submit_ms: u32,
    pub newsletter_submit_ms: u32,
    pub toast_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000,
            counter_threshold: 0.1,
            about_threshold: 0.1,
            testimonials_threshold: 0.3,
            contact_threshold: 0.2,
            carousel_interval_ms: 8000,
            carousel_jump: JumpPolicy::RestartTimer,
            cookie_banner_delay_ms: 1500,
            cookie_banner_exit_ms: 500,
            contact_submit_ms: 1500,
            newsletter_submit_ms: 1000,
            toast_ms: 4000,
        }
    }
}

/// An SVG data URL showing `text` centred on a flat background.
pub fn placeholder_image(width: u32, height: u32, background: &str, text: &str) -> String {
    let font_size = width.min(height) / 10;
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\
         <rect width='{w}' height='{h}' fill='{bg}'/>\
         <text x='{cx}' y='{cy}' font-family='Arial' font-size='{fs}' fill='#eee' \
         text-anchor='middle' alignment-baseline='middle'>{text}</text></svg>",
        w = width,
        h = height,
        bg = background,
        cx = width / 2,
        cy = height / 2,
        fs = font_size,
        text = text,
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}
