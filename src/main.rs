use log::{info, Level};
use yew::prelude::*;

mod config;
mod error;
mod motion;
mod pointer;
mod components {
    pub mod about;
    pub mod contact;
    pub mod cookie_consent;
    pub mod counter;
    pub mod footer;
    pub mod hero;
    pub mod navbar;
    pub mod services;
    pub mod testimonials;
    pub mod toast;
}
mod pages {
    pub mod home;
}

use components::toast::ToastHost;
use config::SiteConfig;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    // one config object for the whole page, passed down as props
    let config = use_memo(|_| SiteConfig::load(), ());

    html! {
        <ToastHost dismiss_after_ms={config.motion.toast_ms}>
            <Home config={config.clone()} />
        </ToastHost>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
