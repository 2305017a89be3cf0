use yew::prelude::*;

use crate::context::use_app_data;
use crate::theme::Theme;

#[function_component]
pub fn ThemeToggle() -> Html {
    let data = use_app_data();
    let dark = *data.theme == Theme::Dark;
    let onclick = Callback::from(move |_: MouseEvent| data.toggle_theme());
    html! {
        <button
            class="theme-toggle"
            aria-label={if dark { "Switch to light theme" } else { "Switch to dark theme" }}
            {onclick}
        >
            <i class={if dark { "fas fa-sun" } else { "fas fa-moon" }}></i>
        </button>
    }
}
