use chrono::Datelike;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastSender};

const QUICK_LINKS: &[(&str, &str)] = &[
    ("Privacy Policy", "/privacy"),
    ("Terms of Service", "/terms"),
    ("Careers", "/careers"),
    ("Blog", "/blog"),
];

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Facebook", "https://facebook.com"),
    ("Instagram", "https://instagram.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: String,
    pub contact_email: String,
    pub mailto: String,
    pub location: Vec<String>,
    pub newsletter_submit_ms: u32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let email = use_state(String::new);
    let is_submitting = use_state(|| false);
    let toast = use_context::<ToastSender>();
    let year = chrono::Local::now().year();

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let is_submitting = is_submitting.clone();
        let latency = props.newsletter_submit_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            is_submitting.set(true);

            let email = email.clone();
            let is_submitting = is_submitting.clone();
            let toast = toast.clone();
            spawn_local(async move {
                TimeoutFuture::new(latency).await;
                is_submitting.set(false);
                email.set(String::new());
                if let Some(toast) = toast {
                    toast.emit(Toast::info(
                        "Successfully subscribed!",
                        "Thank you for joining our newsletter.",
                    ));
                }
            });
        })
    };

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <a href="#" class="footer-logo">{&props.brand}</a>
                    <p>{"Elevating brands through strategic digital marketing that delivers measurable results."}</p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(name, href)| html! {
                            <a key={*name} href={*href} aria-label={*name} target="_blank" rel="noopener noreferrer">{*name}</a>
                        }) }
                        <a href={props.mailto.clone()} aria-label="Email">{"Email"}</a>
                    </div>
                </div>

                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="quick-links">
                        { for QUICK_LINKS.iter().map(|(name, href)| html! {
                            <li key={*name}><a href={*href}>{*name}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h3>{"Contact Us"}</h3>
                    <address>
                        { for props.location.iter().map(|line| html! { <p>{line}</p> }) }
                        <p><a href={props.mailto.clone()}>{&props.contact_email}</a></p>
                    </address>
                </div>

                <div>
                    <h3>{"Newsletter"}</h3>
                    <p>{"Subscribe to our newsletter for the latest marketing insights."}</p>
                    <form class="newsletter-form" onsubmit={onsubmit}>
                        <input
                            type="email"
                            required={true}
                            placeholder="Your email address"
                            value={(*email).clone()}
                            oninput={oninput}
                        />
                        <button type="submit" disabled={*is_submitting}>
                            { if *is_submitting { "Subscribing..." } else { "Subscribe" } }
                        </button>
                    </form>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{format!("© {} {}. All rights reserved.", year, props.brand)}</p>
                <p>{"Crafted with precision for optimal performance"}</p>
            </div>
        </footer>
    }
}
