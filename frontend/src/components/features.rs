use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::context::use_app_data;

#[function_component]
pub fn Features() -> Html {
    let data = use_app_data();
    let active = *data.active_feature;

    let cards = data.features.iter().enumerate().map(|(index, feature)| {
        let onfocus = {
            let data = data.clone();
            Callback::from(move |_: FocusEvent| data.activate_feature(index))
        };
        let onmouseenter = {
            let data = data.clone();
            Callback::from(move |_: MouseEvent| data.activate_feature(index))
        };
        let onclick = {
            let data = data.clone();
            let engagement = feature.engagement;
            Callback::from(move |_: MouseEvent| {
                data.activate_feature(index);
                data.analytics.track(AnalyticsEvent::user_engagement(engagement));
            })
        };
        let (from, to) = feature.color;
        html! {
            <div
                key={feature.number}
                class={classes!("feature-card", (active == Some(index)).then_some("active"))}
                tabindex="0"
                {onmouseenter}
                {onfocus}
                {onclick}
            >
                <span class="feature-number">{ feature.number }</span>
                <div
                    class="feature-icon"
                    style={format!("background: linear-gradient(135deg, {}, {});", from, to)}
                >
                    <i class={feature.icon}></i>
                </div>
                <h3>{ feature.title }</h3>
                <p>{ feature.description }</p>
            </div>
        }
    });

    html! {
        <div class="features-inner">
            <h2>{ "Everything you need to manage your finances" }</h2>
            <p class="section-subtitle">
                { "Powerful tools that make money management simple." }
            </p>
            <div class="feature-grid">{ for cards }</div>
        </div>
    }
}
