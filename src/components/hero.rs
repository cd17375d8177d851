use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::pointer::{pointer_offset, Bounds};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub background: String,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let is_visible = use_state(|| false);
    let hero_ref = use_node_ref();

    {
        let is_visible = is_visible.clone();
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);

                // parallax on the whole document, written as CSS variables on the section
                let document = web_sys::window().and_then(|w| w.document());
                let mouse_callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                    let Some(hero) = hero_ref.cast::<HtmlElement>() else {
                        return;
                    };
                    let (x, y) = pointer_offset(
                        Bounds::of(&hero),
                        f64::from(e.client_x()),
                        f64::from(e.client_y()),
                    );
                    let style = hero.style();
                    let _ = style.set_property("--x-movement", &format!("{}px", x * 10.0));
                    let _ = style.set_property("--y-movement", &format!("{}px", y * 5.0));
                });

                if let Some(document) = &document {
                    let _ = document.add_event_listener_with_callback(
                        "mousemove",
                        mouse_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(document) = document {
                        let _ = document.remove_event_listener_with_callback(
                            "mousemove",
                            mouse_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let fade = |step: &'static str| classes!("fade-start", (*is_visible).then(|| step));

    html! {
        <section
            id="hero"
            ref={hero_ref}
            class="hero"
            style={format!("background-image: url(\"{}\");", props.background)}
        >
            <div class="hero-overlay"></div>
            <div class="section hero-content">
                <div class={fade("fade-in-1")}>
                    <h1>{"Precision Digital Marketing for Growth"}</h1>
                    <p class="hero-lead">
                        {"Data-driven strategies tailored to small businesses that deliver measurable results and sustainable growth."}
                    </p>
                </div>
                <div class="hero-actions">
                    <a href="#contact" class={classes!("btn-primary", fade("fade-in-2"))}>
                        {"Get Your Free Audit"}
                    </a>
                </div>
            </div>
        </section>
    }
}
