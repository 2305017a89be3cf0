use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::analytics::{AnalyticsEvent, FormAction};
use crate::config::get_form_endpoint;
use crate::context::use_app_data;
use crate::preregister::{submit, PreregisterForm, SubmitStatus};

const FORM_TYPE: &str = "preregister";

#[function_component]
pub fn PreregisterSection() -> Html {
    let data = use_app_data();
    let form = use_state(PreregisterForm::default);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set_name(e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            next.set_email(e.target_unchecked_into::<HtmlInputElement>().value());
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let analytics = data.analytics.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            analytics.track(AnalyticsEvent::button_click("submit_preregister", FORM_TYPE));
            let mut next = (*form).clone();
            let Some(registration) = next.begin_submit() else {
                return;
            };
            analytics.track_all(AnalyticsEvent::form(FORM_TYPE, FormAction::Start));
            form.set(next.clone());

            let form = form.clone();
            let analytics = analytics.clone();
            spawn_local(async move {
                let outcome = submit(get_form_endpoint(), &registration).await;
                match &outcome {
                    Ok(()) => {
                        log::info!("waitlist registration accepted");
                        analytics.track_all(AnalyticsEvent::form(FORM_TYPE, FormAction::Submit));
                    }
                    Err(err) => {
                        log::warn!("waitlist registration failed: {}", err);
                        analytics.track_all(AnalyticsEvent::form(FORM_TYPE, FormAction::Error));
                    }
                }
                next.finish(&outcome);
                form.set(next);
            });
        })
    };

    if form.status() == SubmitStatus::Submitted {
        return html! {
            <div class="preregister-inner">
                <div class="preregister-success">
                    <i class="fas fa-circle-check"></i>
                    <h3>{ "You're on the list!" }</h3>
                    <p>{ format!("Thanks {}, we'll email {} as soon as Moneo launches.", form.fields().name, form.fields().email) }</p>
                </div>
            </div>
        };
    }

    let loading = form.is_loading();
    html! {
        <div class="preregister-inner">
            <h2>{ "Be the first to try Moneo" }</h2>
            <p class="section-subtitle">
                { "Join the waitlist and get early access when we launch." }
            </p>
            <form class="preregister-form" {onsubmit}>
                <input
                    type="text"
                    name="name"
                    placeholder="Your name"
                    required=true
                    value={form.fields().name.clone()}
                    disabled={loading}
                    oninput={on_name}
                />
                <input
                    type="email"
                    name="email"
                    placeholder="Your email"
                    required=true
                    value={form.fields().email.clone()}
                    disabled={loading}
                    oninput={on_email}
                />
                if let Some(message) = form.error_message() {
                    <p class="form-error">{ message }</p>
                }
                <button type="submit" class="preregister-submit" disabled={loading || !form.can_submit()}>
                    if loading {
                        <span class="spinner"></span>{ " Joining..." }
                    } else {
                        { "Join the waitlist" }
                    }
                </button>
            </form>
        </div>
    }
}
