use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::{ImageSet, MotionConfig};
use crate::motion::{use_carousel, use_visibility, CarouselOptions, VisibilityOptions};

struct Testimonial {
    text: &'static str,
    author: &'static str,
    role: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "Working with Kambl Creations transformed our online presence completely. Our organic traffic increased by 187% in just six months, and our conversion rate has never been higher.",
        author: "Sarah Johnson",
        role: "Marketing Director",
        company: "Everyspace Interiors",
    },
    Testimonial {
        text: "The team at Kambl Creations doesn't just execute tasks; they become true partners in your business. Their strategic approach to social media helped us build a community, not just a following.",
        author: "Michael Chen",
        role: "Founder & CEO",
        company: "Nimble Technologies",
    },
    Testimonial {
        text: "What sets Kambl apart is their attention to detail and commitment to results. They completely redesigned our website with conversion in mind, and our lead generation increased by 143% within weeks.",
        author: "Priya Sharma",
        role: "Operations Manager",
        company: "GreenLife Organics",
    },
];

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub images: ImageSet,
    pub motion: MotionConfig,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let section_ref = use_node_ref();
    // tracking, so the rotation stops while scrolled away
    let is_visible = use_visibility(
        section_ref.clone(),
        VisibilityOptions::tracking(props.motion.testimonials_threshold),
    );
    let carousel = use_carousel(
        TESTIMONIALS.len(),
        CarouselOptions {
            interval_ms: props.motion.carousel_interval_ms,
            jump_policy: props.motion.carousel_jump,
        },
        is_visible,
    );

    let onmouseenter = carousel.set_paused.reform(|_: MouseEvent| true);
    let onmouseleave = carousel.set_paused.reform(|_: MouseEvent| false);
    let on_prev = carousel.prev.reform(|_: MouseEvent| ());
    let on_next = carousel.next.reform(|_: MouseEvent| ());

    html! {
        <section
            id="testimonials"
            ref={section_ref}
            class="section testimonials"
            onmouseenter={onmouseenter}
            onmouseleave={onmouseleave}
        >
            <div class="section-header">
                <h2 class="section-title">{"What Our Clients Say"}</h2>
                <p class="section-subtitle">
                    {"Don't just take our word for it: hear from the businesses we've helped grow."}
                </p>
            </div>

            <div class={classes!("carousel", "fade", is_visible.then(|| "shown"))}>
                <div class="carousel-viewport">
                    <div
                        class="carousel-track"
                        style={format!("transform: translateX(-{}%);", carousel.active * 100)}
                    >
                        { for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| html! {
                            <div class="carousel-slide" key={index}>
                                <div class="testimonial-card">
                                    <div class="testimonial-portrait">
                                        <img
                                            src={props.images.testimonial(index).unwrap_or_default().to_string()}
                                            alt={testimonial.author}
                                        />
                                    </div>
                                    <div class="testimonial-body">
                                        <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
                                        <h4>{testimonial.author}</h4>
                                        <p class="testimonial-role">
                                            {format!("{}, {}", testimonial.role, testimonial.company)}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="carousel-controls">
                    <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_prev}>{"‹"}</button>
                    <div class="carousel-dots">
                        { for (0..TESTIMONIALS.len()).map(|index| html! {
                            <button
                                key={index}
                                class={classes!("carousel-dot", (index == carousel.active).then(|| "active"))}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                                onclick={carousel.go_to.reform(move |_: MouseEvent| index)}
                            />
                        }) }
                    </div>
                    <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
                </div>
            </div>
        </section>
    }
}
