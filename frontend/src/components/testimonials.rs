use yew::prelude::*;

use super::carousel_view::{drag_nudge, use_carousel_updates, DragHandlers};
use crate::carousel::Carousel;
use crate::content::Testimonial;
use crate::context::use_app_data;

#[function_component]
pub fn Testimonials() -> Html {
    let data = use_app_data();
    match data.testimonial_carousel {
        Some(carousel) => html! { <TestimonialCarousel {carousel} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCarouselProps {
    carousel: Carousel<Testimonial>,
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[function_component]
fn TestimonialCarousel(props: &TestimonialCarouselProps) -> Html {
    let carousel = props.carousel.clone();
    use_carousel_updates(carousel.clone());

    let view = carousel.snapshot();
    let drag = DragHandlers::new(&carousel);
    let current = view.current;

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.previous())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.next())
    };
    let on_toggle = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.toggle_autoplay();
        })
    };

    let dots = (0..view.items.len()).map(|index| {
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_: MouseEvent| carousel.go_to(index as i64));
        html! {
            <button
                key={index}
                class={classes!("carousel-dot", (index == view.current_index).then_some("active"))}
                aria-label={format!("Show testimonial {}", index + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div class="testimonials-inner">
            <div
                class={classes!("testimonial-stage", view.dragging.then_some("dragging"))}
                onmousedown={drag.onmousedown}
                onmousemove={drag.onmousemove}
                onmouseup={drag.onmouseup}
                onmouseleave={drag.onmouseleave}
                ontouchstart={drag.ontouchstart}
                ontouchmove={drag.ontouchmove}
                ontouchend={drag.ontouchend}
            >
                <blockquote
                    key={view.current_index}
                    class="testimonial-card"
                    style={drag_nudge(view.drag_offset)}
                >
                    <i class="fas fa-quote-left testimonial-mark"></i>
                    <p class="testimonial-quote">{ current.quote }</p>
                    <footer class="testimonial-author">
                        <span class="testimonial-avatar">{ initials(current.name) }</span>
                        <div>
                            <strong>{ current.name }</strong>
                            <span>{ format!("{}, {}", current.role, current.company) }</span>
                        </div>
                    </footer>
                </blockquote>
            </div>
            if view.autoplay {
                <div class="testimonial-progress">
                    <div
                        key={view.current_index}
                        class="testimonial-progress-bar"
                        style={format!("animation-duration: {}ms;", view.autoplay_interval_ms)}
                    />
                </div>
            }
            <div class="carousel-controls">
                <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_previous}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div class="carousel-dots">{ for dots }</div>
                <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>
                    <i class="fas fa-chevron-right"></i>
                </button>
                <button class="autoplay-toggle" onclick={on_toggle}>
                    if view.autoplay {
                        <i class="fas fa-pause"></i>
                    } else {
                        <i class="fas fa-play"></i>
                    }
                </button>
            </div>
        </div>
    }
}
