use yew::prelude::*;

use crate::components::counter::Counter;
use crate::config::MotionConfig;
use crate::motion::{use_visibility, VisibilityOptions};

/// (label, value, prefix, suffix)
const STATS: &[(&str, f64, &str, &str)] = &[
    ("Clients served", 250.0, "", "+"),
    ("Average client rating", 4.9, "", "/5"),
    ("Client retention", 98.0, "", "%"),
    ("Revenue generated for clients", 12.0, "£", "M"),
];

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub brand: String,
    pub team_photo: String,
    pub motion: MotionConfig,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let section_ref = use_node_ref();
    let is_visible = use_visibility(
        section_ref.clone(),
        VisibilityOptions::sticky(props.motion.about_threshold),
    );

    let slide = |delay: Option<&'static str>| {
        classes!(
            "reveal",
            "reveal-left",
            delay,
            is_visible.then(|| "revealed")
        )
    };

    html! {
        <section id="about" ref={section_ref} class="section about">
            <div class="about-grid">
                <div class="about-copy">
                    <h2 class={classes!("section-title", slide(None))}>{format!("About {}", props.brand)}</h2>
                    <p class={slide(Some("delay-100"))}>
                        {format!("At {}, we're more than a digital marketing agency: we're growth partners committed to your success. ", props.brand)}
                        {"Our data-driven approach combines creativity with analytics to deliver measurable results for small to medium businesses across industries."}
                    </p>
                    <p class={slide(Some("delay-200"))}>
                        {"We believe in transparency, ethical marketing practices, and building long-term relationships with our clients. Every strategy we develop is tailored to your unique goals, audience, and market position."}
                    </p>
                </div>
                <div class={classes!("about-photo", "reveal", "reveal-right", is_visible.then(|| "revealed"))}>
                    <div class="photo-frame"></div>
                    <img
                        src={props.team_photo.clone()}
                        alt={format!("The {} team gathered together in our office", props.brand)}
                        loading="lazy"
                    />
                </div>
            </div>

            <div class="stats-row">
                { for STATS.iter().map(|(label, value, prefix, suffix)| html! {
                    <div class="stat" key={*label}>
                        <Counter
                            end={*value}
                            duration_ms={props.motion.counter_duration_ms}
                            threshold={props.motion.counter_threshold}
                            prefix={*prefix}
                            suffix={*suffix}
                        />
                        <p class="stat-label">{*label}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
