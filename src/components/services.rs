use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::pointer::{pointer_offset, tilt_degrees, Bounds};

/// Maximum card tilt in degrees.
const TILT_STRENGTH: f64 = 8.0;

struct Service {
    title: &'static str,
    tagline: &'static str,
    description: &'static str,
    details: &'static str,
    icon: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        title: "Search Engine Optimization",
        tagline: "Rank higher, grow organically",
        description: "Boost your visibility with data-backed SEO strategies that drive organic traffic and improve search rankings.",
        details: "Our comprehensive SEO approach includes technical optimization, content strategy, keyword research, and continuous performance monitoring. We focus on sustainable practices that provide long-term results rather than quick fixes that might compromise your site in future algorithm updates.",
        icon: "🔍",
    },
    Service {
        title: "Social Media Marketing",
        tagline: "Build authentic engagement",
        description: "Connect with your audience through strategic social media campaigns that build brand loyalty and engagement.",
        details: "We create tailored social media strategies across platforms like Instagram, Facebook, LinkedIn, and TikTok. Our approach includes content calendars, community management, paid advertising campaigns, and detailed analytics to continuously optimize your social presence and ROI.",
        icon: "📈",
    },
    Service {
        title: "Web Design & Development",
        tagline: "Convert visitors into customers",
        description: "Create seamless user experiences with responsive, conversion-focused websites that represent your brand.",
        details: "Our web design process emphasizes both aesthetics and functionality. We build responsive, fast-loading sites with intuitive navigation and strong calls-to-action. Every design decision is made with conversion optimization in mind, ensuring your site not only looks great but performs excellently.",
        icon: "🖥️",
    },
];

fn set_tilt(card: &HtmlElement, (rotate_x, rotate_y): (f64, f64)) {
    let style = card.style();
    let _ = style.set_property("--rotate-x", &format!("{}deg", rotate_x));
    let _ = style.set_property("--rotate-y", &format!("{}deg", rotate_y));
}

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = &SERVICES[props.index];
    let is_expanded = use_state(|| false);
    let is_hovered = use_state(|| false);
    let card_ref = use_node_ref();

    let onmousemove = {
        let card_ref = card_ref.clone();
        let is_hovered = *is_hovered;
        Callback::from(move |e: MouseEvent| {
            if !is_hovered {
                return;
            }
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                let offset = pointer_offset(
                    Bounds::of(&card),
                    f64::from(e.client_x()),
                    f64::from(e.client_y()),
                );
                set_tilt(&card, tilt_degrees(offset, TILT_STRENGTH));
            }
        })
    };

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };

    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |_: MouseEvent| {
            is_hovered.set(false);
            if let Some(card) = card_ref.cast::<HtmlElement>() {
                set_tilt(&card, (0.0, 0.0));
            }
        })
    };

    let toggle = {
        let is_expanded = is_expanded.clone();
        Callback::from(move |_: MouseEvent| is_expanded.set(!*is_expanded))
    };

    html! {
        <div
            ref={card_ref}
            class={classes!(
                "tilt-card",
                (*is_hovered).then(|| "hovered"),
                (*is_expanded).then(|| "expanded")
            )}
            onmousemove={onmousemove}
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="service-icon">{service.icon}</div>
            <p class="service-tagline">{service.tagline}</p>
            <h3>{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <div class={classes!("service-details", (*is_expanded).then(|| "open"))}>
                <p>{service.details}</p>
            </div>
            <button class="service-toggle" onclick={toggle}>
                { if *is_expanded { "Show Less" } else { "Learn More" } }
            </button>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id="services" class="section services">
            <div class="section-header">
                <h2 class="section-title">{"Our Services"}</h2>
                <p class="section-subtitle">
                    {"Specialized digital marketing solutions designed to elevate your brand and drive measurable business growth."}
                </p>
            </div>
            <div class="services-grid">
                { for (0..SERVICES.len()).map(|index| html! { <ServiceCard key={index} index={index} /> }) }
            </div>
        </section>
    }
}
