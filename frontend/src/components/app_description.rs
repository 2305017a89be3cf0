use yew::prelude::*;

const HIGHLIGHTS: &[(&str, &str, &str)] = &[
    (
        "fas fa-shield-halved",
        "Bank-level security",
        "Your data is encrypted end to end and never sold.",
    ),
    (
        "fas fa-bolt",
        "Real-time insights",
        "See every transaction the moment it happens.",
    ),
    (
        "fas fa-mobile-screen",
        "Built for mobile",
        "Manage your money anywhere, online or offline.",
    ),
];

#[function_component]
pub fn AppDescription() -> Html {
    html! {
        <div class="app-description-inner">
            <div class="app-description-copy">
                <h2>{ "Your finances, finally in one place" }</h2>
                <p>
                    { "Moneo brings your accounts, budgets and goals together so you always know where you stand. " }
                    { "No spreadsheets, no guesswork, just a clear picture of your money." }
                </p>
            </div>
            <ul class="app-highlights">
                { for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                    <li key={*title}>
                        <i class={*icon}></i>
                        <div>
                            <h4>{ *title }</h4>
                            <p>{ *text }</p>
                        </div>
                    </li>
                }) }
            </ul>
        </div>
    }
}
