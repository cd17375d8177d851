use gloo_timers::future::TimeoutFuture;
use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, MouseEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastSender};
use crate::config::MotionConfig;
use crate::motion::{use_visibility, VisibilityOptions};

/// (value, label) for the service picker.
const SERVICE_OPTIONS: &[(&str, &str)] = &[
    ("SEO", "Search Engine Optimization"),
    ("Social Media", "Social Media Marketing"),
    ("Web Design", "Web Design & Development"),
    ("Other", "Other Services"),
];

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub motion: MotionConfig,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let section_ref = use_node_ref();
    let form_ref = use_node_ref();
    let is_visible = use_visibility(
        section_ref.clone(),
        VisibilityOptions::sticky(props.motion.contact_threshold),
    );
    let is_submitting = use_state(|| false);
    let show_success = use_state(|| false);
    let toast = use_context::<ToastSender>();

    let onsubmit = {
        let is_submitting = is_submitting.clone();
        let show_success = show_success.clone();
        let form_ref = form_ref.clone();
        let latency = props.motion.contact_submit_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);

            let is_submitting = is_submitting.clone();
            let show_success = show_success.clone();
            let form_ref = form_ref.clone();
            let toast = toast.clone();
            spawn_local(async move {
                // nothing is sent anywhere, the delay stands in for a request
                TimeoutFuture::new(latency).await;
                info!("Contact form submitted");
                is_submitting.set(false);
                show_success.set(true);
                if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                    form.reset();
                }
                if let Some(toast) = toast {
                    toast.emit(Toast::success(
                        "Message sent!",
                        "We'll get back to you within 24 hours.",
                    ));
                }
            });
        })
    };

    let close_modal = {
        let show_success = show_success.clone();
        Callback::from(move |_: MouseEvent| show_success.set(false))
    };

    html! {
        <section id="contact" ref={section_ref} class="section contact">
            <div class="section-header">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <p class="section-subtitle">
                    {"Ready to grow your business? Let's discuss how we can help you achieve your goals."}
                </p>
            </div>

            <div class={classes!("contact-card", "reveal", "reveal-up", is_visible.then(|| "revealed"))}>
                <form ref={form_ref} class="contact-form" onsubmit={onsubmit}>
                    <div class="form-row">
                        <label for="name">{"Full Name *"}</label>
                        <input id="name" name="name" type="text" required={true} minlength="2" placeholder="John Doe" />
                    </div>
                    <div class="form-row">
                        <label for="email">{"Email Address *"}</label>
                        <input id="email" name="email" type="email" required={true} placeholder="john@example.com" />
                    </div>
                    <div class="form-row">
                        <label for="phone">{"Phone Number (Optional)"}</label>
                        <input id="phone" name="phone" type="tel" placeholder="+1 (555) 000-0000" />
                    </div>
                    <div class="form-row">
                        <label for="service">{"I'm interested in *"}</label>
                        <select id="service" name="service">
                            { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value}>{*label}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-row">
                        <label for="message">{"Your Message *"}</label>
                        <textarea
                            id="message"
                            name="message"
                            rows="5"
                            required={true}
                            minlength="10"
                            placeholder="Tell us about your project and goals..."
                        />
                    </div>
                    <button
                        type="submit"
                        class={classes!("btn-submit", (*is_submitting).then(|| "submitting"))}
                        disabled={*is_submitting}
                    >
                        { if *is_submitting { "Processing..." } else { "Send Message" } }
                    </button>
                </form>
            </div>

            {
                if *show_success {
                    html! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <div class="modal-check">{"✓"}</div>
                                <h3>{"Message Received!"}</h3>
                                <p>{"Thank you for reaching out. We'll get back to you within 24 hours."}</p>
                                <button class="btn-primary" onclick={close_modal}>{"Close"}</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
