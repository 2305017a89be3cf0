use web_sys::{MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::carousel::{Carousel, PointerPosition};

/// Re-renders the calling component whenever `carousel` changes.
#[hook]
pub fn use_carousel_updates<T: 'static>(carousel: Carousel<T>) {
    let update = use_force_update();
    use_effect_with_deps(
        move |carousel: &Carousel<T>| {
            let subscription = carousel.subscribe(move || update.force_update());
            move || drop(subscription)
        },
        carousel,
    );
}

/// Mouse and touch callbacks feeding a carousel's drag interpreter.
pub struct DragHandlers {
    pub onmousedown: Callback<MouseEvent>,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseup: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
    pub ontouchstart: Callback<TouchEvent>,
    pub ontouchmove: Callback<TouchEvent>,
    pub ontouchend: Callback<TouchEvent>,
}

impl DragHandlers {
    pub fn new<T: 'static>(carousel: &Carousel<T>) -> Self {
        let end = {
            let carousel = carousel.clone();
            move || {
                if carousel.is_dragging() {
                    carousel.drag_end();
                }
            }
        };
        Self {
            onmousedown: {
                let carousel = carousel.clone();
                Callback::from(move |e: MouseEvent| {
                    carousel.drag_start(PointerPosition::from_mouse(&e));
                })
            },
            onmousemove: {
                let carousel = carousel.clone();
                Callback::from(move |e: MouseEvent| {
                    if carousel.drag_move(PointerPosition::from_mouse(&e)) {
                        e.prevent_default();
                    }
                })
            },
            onmouseup: {
                let end = end.clone();
                Callback::from(move |_: MouseEvent| end())
            },
            onmouseleave: {
                let end = end.clone();
                Callback::from(move |_: MouseEvent| end())
            },
            ontouchstart: {
                let carousel = carousel.clone();
                Callback::from(move |e: TouchEvent| {
                    if let Some(position) = PointerPosition::from_touch(&e) {
                        carousel.drag_start(position);
                    }
                })
            },
            ontouchmove: {
                let carousel = carousel.clone();
                Callback::from(move |e: TouchEvent| {
                    if let Some(position) = PointerPosition::from_touch(&e) {
                        if carousel.drag_move(position) {
                            e.prevent_default();
                        }
                    }
                })
            },
            ontouchend: Callback::from(move |_: TouchEvent| end()),
        }
    }
}

/// Horizontal nudge applied to the slide while a drag is in progress.
pub fn drag_nudge(offset: f64) -> String {
    format!("transform: translateX({:.1}px);", offset * 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nudge_follows_a_tenth_of_the_drag() {
        assert_eq!(drag_nudge(0.0), "transform: translateX(0.0px);");
        assert_eq!(drag_nudge(150.0), "transform: translateX(15.0px);");
        assert_eq!(drag_nudge(-42.0), "transform: translateX(-4.2px);");
    }
}
