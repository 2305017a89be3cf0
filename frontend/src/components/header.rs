use yew::prelude::*;

use super::mobile_menu::MobileMenu;
use super::theme_toggle::ThemeToggle;
use crate::analytics::AnalyticsEvent;
use crate::content::NAV_ITEMS;
use crate::context::use_app_data;
use crate::scroll::scroll_to_section;

#[function_component]
pub fn Header() -> Html {
    let data = use_app_data();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };
    let join = {
        let analytics = data.analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track(AnalyticsEvent::button_click("join_waitlist_header", "header"));
            scroll_to_section("preregister");
        })
    };

    let links = NAV_ITEMS.iter().map(|item| {
        let analytics = data.analytics.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            analytics.track(AnalyticsEvent::button_click(item.label, "navigation"));
        });
        html! { <a key={item.href} href={item.href} {onclick}>{ item.label }</a> }
    });

    html! {
        <header class="site-header">
            <a href="#" class="logo">
                <img src="/assets/logo.png" alt="Moneo" />
                <span>{ "Moneo" }</span>
            </a>
            <nav class="header-nav">{ for links }</nav>
            <div class="header-actions">
                <ThemeToggle />
                <button class="header-cta" onclick={join}>{ "Join the waitlist" }</button>
                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                </button>
            </div>
            <MobileMenu open={*menu_open} on_close={close_menu} />
        </header>
    }
}
