use chrono::Datelike;
use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::content::NAV_ITEMS;
use crate::context::use_app_data;

#[function_component]
pub fn Download() -> Html {
    let data = use_app_data();
    let store = |button: &'static str| {
        let analytics = data.analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track(AnalyticsEvent::button_click(button, "download"));
            analytics.track_all(AnalyticsEvent::download());
        })
    };

    html! {
        <div class="download-inner">
            <h2>{ "Coming soon to your phone" }</h2>
            <p class="section-subtitle">
                { "Moneo launches on iOS and Android. Join the waitlist to hear first." }
            </p>
            <div class="store-buttons">
                <button class="store-button" onclick={store("download_app_store")}>
                    <i class="fab fa-apple"></i>{ " App Store" }
                </button>
                <button class="store-button" onclick={store("download_google_play")}>
                    <i class="fab fa-google-play"></i>{ " Google Play" }
                </button>
            </div>
        </div>
    }
}

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src="/assets/logo.png" alt="Moneo" />
                <p>{ "Smart money management for everyone." }</p>
            </div>
            <nav class="footer-links">
                { for NAV_ITEMS.iter().map(|item| html! {
                    <a key={item.href} href={item.href}>{ item.label }</a>
                }) }
            </nav>
            <p class="footer-copyright">{ format!("© {} Moneo. All rights reserved.", year) }</p>
        </footer>
    }
}
