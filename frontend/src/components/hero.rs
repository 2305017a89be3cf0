use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::context::use_app_data;
use crate::scroll::{hero_fade, scroll_to_section, use_scroll_progress};

#[function_component]
pub fn Hero() -> Html {
    let data = use_app_data();
    let (opacity, scale) = hero_fade(use_scroll_progress());

    let cta = |button: &'static str, target: &'static str| {
        let analytics = data.analytics.clone();
        Callback::from(move |_: MouseEvent| {
            analytics.track(AnalyticsEvent::button_click(button, "hero"));
            scroll_to_section(target);
        })
    };

    html! {
        <section
            class="hero"
            style={format!("opacity: {:.3}; transform: scale({:.3});", opacity, scale)}
        >
            <div class="hero-content">
                <h1>{ "Take control of your money with " }<span class="gradient-text">{ "Moneo" }</span></h1>
                <p class="hero-subtitle">
                    { "Track expenses, plan budgets and watch your savings grow, all in one secure app." }
                </p>
                <div class="hero-buttons">
                    <button class="hero-cta primary" onclick={cta("join_waitlist_hero", "preregister")}>
                        { "Join the waitlist" }
                    </button>
                    <button class="hero-cta secondary" onclick={cta("learn_more_hero", "features")}>
                        { "Learn more" }
                    </button>
                </div>
            </div>
        </section>
    }
}
