use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Services", "#services"),
    ("About", "#about"),
    ("Testimonials", "#testimonials"),
    ("Contact", "#contact"),
];

/// Scroll distance in px after which the bar gets its solid background.
const SCROLLED_AFTER: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub brand: String,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new({
                    let window = window.clone();
                    move || {
                        if let Some(scroll_y) = window.as_ref().and_then(|w| w.scroll_y().ok()) {
                            is_scrolled.set(scroll_y > SCROLLED_AFTER);
                        }
                    }
                });

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |onclick: Option<Callback<MouseEvent>>| {
        NAV_LINKS
            .iter()
            .map(|(name, href)| {
                html! {
                    <a key={*name} href={*href} class="nav-link" onclick={onclick.clone()}>{*name}</a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <nav class="nav-content">
                <a href="#" class="nav-logo">{&props.brand}</a>

                <div class="nav-right">
                    { links(None) }
                    <a href="#contact" class="nav-cta">{"Get Started"}</a>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"))}>
                { links(Some(close_menu.clone())) }
                <a href="#contact" class="nav-cta" onclick={close_menu}>{"Get Started"}</a>
            </div>
        </header>
    }
}
