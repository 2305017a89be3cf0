use yew::prelude::*;

use crate::analytics::AnalyticsEvent;
use crate::context::use_app_data;
use crate::scroll::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealSectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that fades in the first time it scrolls into view and
/// reports a `section_view` when it does.
#[function_component]
pub fn RevealSection(props: &RevealSectionProps) -> Html {
    let data = use_app_data();
    let node = use_node_ref();
    let on_reveal = {
        let analytics = data.analytics.clone();
        let id = props.id.clone();
        Callback::from(move |_| analytics.track(AnalyticsEvent::section_view(&id)))
    };
    let revealed = use_reveal(node.clone(), on_reveal);

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then_some("revealed"))}
        >
            { for props.children.iter() }
        </section>
    }
}
