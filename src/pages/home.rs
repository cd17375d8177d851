use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlImageElement};
use yew::prelude::*;

use crate::components::{
    about::About, contact::Contact, cookie_consent::CookieConsent, footer::Footer, hero::Hero,
    navbar::Navbar, services::Services, testimonials::Testimonials,
};
use crate::config::SiteConfig;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub config: Rc<SiteConfig>,
}

/// Smooth scrolling, body fade-in and image warm-up for the page.
#[hook]
fn use_page_entrance(config: Rc<SiteConfig>) {
    use_effect_with_deps(
        move |config| {
            let document = web_sys::window().and_then(|w| w.document());
            let root = document.as_ref().and_then(|d| d.document_element());
            let body = document.as_ref().and_then(|d| d.body());

            if let Some(root) = root.as_ref().and_then(|r| r.dyn_ref::<HtmlElement>()) {
                let _ = root.style().set_property("scroll-behavior", "smooth");
            }

            let fade_in = body.map(|body| {
                let _ = body.style().set_property("opacity", "0");
                Timeout::new(100, move || {
                    let style = body.style();
                    let _ = style.set_property("transition", "opacity 0.5s ease");
                    let _ = style.set_property("opacity", "1");
                })
            });

            for src in config.images.all() {
                if let Ok(img) = HtmlImageElement::new() {
                    img.set_src(src);
                }
            }

            move || {
                drop(fade_in);
                if let Some(root) = root.as_ref().and_then(|r| r.dyn_ref::<HtmlElement>()) {
                    let _ = root.style().set_property("scroll-behavior", "auto");
                }
            }
        },
        config,
    );
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let config = &props.config;

    {
        use_effect_with_deps(
            |_| {
                info!("Home page mounted");
                || ()
            },
            (),
        );
    }
    use_page_entrance(config.clone());

    html! {
        <div class="page">
            <Navbar brand={config.brand.clone()} />
            <main>
                <Hero background={config.images.hero.clone()} />
                <Services />
                <About
                    brand={config.brand.clone()}
                    team_photo={config.images.team_photo.clone()}
                    motion={config.motion.clone()}
                />
                <Testimonials images={config.images.clone()} motion={config.motion.clone()} />
                <Contact motion={config.motion.clone()} />
            </main>
            <Footer
                brand={config.brand.clone()}
                contact_email={config.contact_email.clone()}
                mailto={config.mailto()}
                location={config.location.clone()}
                newsletter_submit_ms={config.motion.newsletter_submit_ms}
            />
            <CookieConsent
                delay_ms={config.motion.cookie_banner_delay_ms}
                exit_ms={config.motion.cookie_banner_exit_ms}
            />
        </div>
    }
}
