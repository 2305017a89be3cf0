use yew::prelude::*;

use crate::config::DESKTOP_MIN_WIDTH;
use crate::content::NAV_ITEMS;
use crate::utils::events::EventListener;

#[derive(Properties, PartialEq)]
pub struct MobileMenuProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("failed to update body overflow: {:?}", err);
    }
}

fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

/// Full-screen navigation for narrow viewports. Closes itself when the
/// window grows to desktop width and keeps the page from scrolling while open.
#[function_component]
pub fn MobileMenu(props: &MobileMenuProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let open = *open;
                set_body_scroll_locked(open);
                let listener = open
                    .then(|| {
                        EventListener::window("resize", move || {
                            if viewport_width().map_or(false, |w| w >= DESKTOP_MIN_WIDTH) {
                                on_close.emit(());
                            }
                        })
                    })
                    .flatten();
                move || {
                    drop(listener);
                    if open {
                        set_body_scroll_locked(false);
                    }
                }
            },
            props.open,
        );
    }

    if !props.open {
        return html! {};
    }

    let links = NAV_ITEMS.iter().map(|item| {
        let on_close = props.on_close.clone();
        html! {
            <a key={item.href} href={item.href} onclick={Callback::from(move |_: MouseEvent| on_close.emit(()))}>
                { item.label }
            </a>
        }
    });

    html! {
        <div class="mobile-menu">
            <nav class="mobile-menu-links">{ for links }</nav>
        </div>
    }
}
