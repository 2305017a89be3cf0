use yew::prelude::*;

use super::carousel_view::{drag_nudge, use_carousel_updates, DragHandlers};
use crate::analytics::AnalyticsEvent;
use crate::carousel::Carousel;
use crate::content::Screenshot;
use crate::context::use_app_data;

#[function_component]
pub fn Screenshots() -> Html {
    let data = use_app_data();
    match data.screenshot_carousel {
        Some(carousel) => html! { <ScreenshotCarousel {carousel} /> },
        None => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct ScreenshotCarouselProps {
    carousel: Carousel<Screenshot>,
}

#[function_component]
fn ScreenshotCarousel(props: &ScreenshotCarouselProps) -> Html {
    let data = use_app_data();
    let carousel = props.carousel.clone();
    use_carousel_updates(carousel.clone());

    let view = carousel.snapshot();
    let drag = DragHandlers::new(&carousel);
    let current = view.current;
    let (from, to) = current.color;

    let track = {
        let analytics = data.analytics.clone();
        move |button: &'static str| analytics.track(AnalyticsEvent::button_click(button, "screenshots"))
    };

    let on_previous = {
        let carousel = carousel.clone();
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            track("screenshot_previous");
            carousel.previous();
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            track("screenshot_next");
            carousel.next();
        })
    };
    let on_toggle = {
        let carousel = carousel.clone();
        let track = track.clone();
        Callback::from(move |_: MouseEvent| {
            let enabled = carousel.toggle_autoplay();
            track(if enabled { "autoplay_resume" } else { "autoplay_pause" });
        })
    };

    let dots = view.items.iter().enumerate().map(|(index, shot)| {
        let carousel = carousel.clone();
        let onclick = Callback::from(move |_: MouseEvent| carousel.go_to(index as i64));
        html! {
            <button
                key={shot.id}
                class={classes!("carousel-dot", (index == view.current_index).then_some("active"))}
                aria-label={format!("Show screenshot {}", index + 1)}
                {onclick}
            />
        }
    });

    html! {
        <div class="screenshots-inner">
            <div class="screenshot-copy">
                <span class="screenshot-step" style={format!("color: {};", current.accent)}>
                    { format!("{:02}", current.id) }
                </span>
                <h3>{ current.title }</h3>
                <p>{ current.description }</p>
            </div>
            <div
                class={classes!("phone-stage", view.dragging.then_some("dragging"))}
                style={format!("background: linear-gradient(135deg, {}, {});", from, to)}
                onmousedown={drag.onmousedown}
                onmousemove={drag.onmousemove}
                onmouseup={drag.onmouseup}
                onmouseleave={drag.onmouseleave}
                ontouchstart={drag.ontouchstart}
                ontouchmove={drag.ontouchmove}
                ontouchend={drag.ontouchend}
            >
                <button class="carousel-arrow prev" aria-label="Previous screenshot" onclick={on_previous}>
                    <i class="fas fa-chevron-left"></i>
                </button>
                <div class="phone-mockup" style={drag_nudge(view.drag_offset)}>
                    <img
                        key={current.id}
                        class="phone-screen"
                        src={current.image}
                        alt={current.title}
                        draggable="false"
                    />
                </div>
                <button class="carousel-arrow next" aria-label="Next screenshot" onclick={on_next}>
                    <i class="fas fa-chevron-right"></i>
                </button>
            </div>
            <div class="carousel-controls">
                <span class="carousel-position">
                    { format!("{}/{}", view.current_index + 1, view.items.len()) }
                </span>
                <div class="carousel-dots">{ for dots }</div>
                <button class="autoplay-toggle" onclick={on_toggle}>
                    if view.autoplay {
                        <i class="fas fa-pause"></i>{ " Pause" }
                    } else {
                        <i class="fas fa-play"></i>{ " Play" }
                    }
                </button>
            </div>
            <p class="swipe-hint">{ "Swipe or drag to browse" }</p>
        </div>
    }
}
