//! Scroll-driven presentation: the hero fade, reveal-once sections and the
//! scroll-depth / time-on-page analytics.

use std::cell::Cell;
use std::rc::Rc;

use web_sys::js_sys;
use web_sys::window;
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::utils::events::EventListener;

/// Fraction of the viewport height a section's top must rise above to count
/// as in view.
pub const REVEAL_LINE: f64 = 0.85;

/// Scroll-depth percentages reported once each.
pub const DEPTH_MARKS: [u32; 4] = [25, 50, 75, 100];

/// How far down the page the viewport is, from 0.0 to 1.0.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Hero opacity and scale for a given page progress. The hero fades out and
/// shrinks to 80% over the first fifth of the page.
pub fn hero_fade(progress: f64) -> (f64, f64) {
    let t = (progress / 0.2).clamp(0.0, 1.0);
    (1.0 - t, 1.0 - 0.2 * t)
}

pub fn is_in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_LINE
}

/// Depth marks crossed when the furthest progress moves from `previous` to
/// `current`.
pub fn crossed_marks(previous: f64, current: f64) -> Vec<u32> {
    DEPTH_MARKS
        .iter()
        .copied()
        .filter(|mark| {
            let at = f64::from(*mark) / 100.0;
            previous < at && current >= at
        })
        .collect()
}

/// Brings the section with `id` into view. Smoothness comes from the
/// stylesheet's `scroll-behavior`.
pub fn scroll_to_section(id: &str) {
    match window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        Some(element) => element.scroll_into_view(),
        None => log::debug!("no section with id {}", id),
    }
}

fn read_progress() -> Option<f64> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let height = window.document()?.document_element()?.scroll_height();
    Some(scroll_progress(scroll_y, f64::from(height), viewport))
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0);
    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let update = move || {
                    if let Some(value) = read_progress() {
                        progress.set(value);
                    }
                };
                update();
                let listener = EventListener::window("scroll", update);
                move || drop(listener)
            },
            (),
        );
    }
    *progress
}

/// `true` once `node` has scrolled into view; stays `true` afterwards.
/// `on_reveal` runs exactly once, at that moment.
#[hook]
pub fn use_reveal(node: NodeRef, on_reveal: Callback<()>) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let done = Rc::new(Cell::new(false));
                let check = move || {
                    if done.get() {
                        return;
                    }
                    let Some(element) = node.cast::<web_sys::Element>() else {
                        return;
                    };
                    let viewport = window()
                        .and_then(|w| w.inner_height().ok())
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    if is_in_view(element.get_bounding_client_rect().top(), viewport) {
                        done.set(true);
                        revealed.set(true);
                        on_reveal.emit(());
                    }
                };
                check();
                let listener = EventListener::window("scroll", check);
                move || drop(listener)
            },
            (),
        );
    }
    *revealed
}

/// Reports each depth mark the first time the visitor scrolls past it.
#[hook]
pub fn use_scroll_depth(analytics: Analytics) {
    use_effect_with_deps(
        move |analytics: &Analytics| {
            let analytics = analytics.clone();
            let furthest = Rc::new(Cell::new(0.0_f64));
            let listener = EventListener::window("scroll", move || {
                let Some(current) = read_progress() else {
                    return;
                };
                let previous = furthest.get();
                if current <= previous {
                    return;
                }
                furthest.set(current);
                analytics.track_all(
                    crossed_marks(previous, current)
                        .into_iter()
                        .map(AnalyticsEvent::scroll_depth),
                );
            });
            move || drop(listener)
        },
        analytics,
    );
}

/// Reports seconds spent on the page whenever the tab is hidden.
#[hook]
pub fn use_time_on_page(analytics: Analytics) {
    use_effect_with_deps(
        move |analytics: &Analytics| {
            let analytics = analytics.clone();
            let started = js_sys::Date::now();
            let listener = EventListener::document("visibilitychange", move || {
                let hidden = window()
                    .and_then(|w| w.document())
                    .map_or(false, |d| d.hidden());
                if hidden {
                    let seconds = ((js_sys::Date::now() - started) / 1000.0).max(0.0) as u32;
                    analytics.track(AnalyticsEvent::time_on_page(seconds));
                }
            });
            move || drop(listener)
        },
        analytics,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn short_page_has_no_progress() {
        assert_eq!(scroll_progress(200.0, 800.0, 1000.0), 0.0);
    }

    fn assert_fade(progress: f64, opacity: f64, scale: f64) {
        let (o, s) = hero_fade(progress);
        assert!((o - opacity).abs() < 1e-9, "opacity {o} at {progress}");
        assert!((s - scale).abs() < 1e-9, "scale {s} at {progress}");
    }

    #[test]
    fn hero_fades_over_first_fifth() {
        assert_fade(0.0, 1.0, 1.0);
        assert_fade(0.1, 0.5, 0.9);
        assert_fade(0.2, 0.0, 0.8);
        assert_fade(0.9, 0.0, 0.8);
    }

    #[test]
    fn reveal_line_is_below_viewport_middle() {
        assert!(is_in_view(100.0, 1000.0));
        assert!(is_in_view(849.0, 1000.0));
        assert!(!is_in_view(850.0, 1000.0));
    }

    #[test]
    fn depth_marks_fire_once() {
        assert_eq!(crossed_marks(0.0, 0.3), vec![25]);
        assert_eq!(crossed_marks(0.3, 0.3), Vec::<u32>::new());
        assert_eq!(crossed_marks(0.3, 1.0), vec![50, 75, 100]);
        assert_eq!(crossed_marks(0.0, 0.24), Vec::<u32>::new());
    }
}
