//! Fire-and-forget analytics through Google Analytics / Tag Manager.
//!
//! Events are plain values built by the constructors on [`AnalyticsEvent`];
//! [`Analytics`] decides whether and where to send them. With no measurement
//! or container id configured nothing is installed and every `track` call is
//! a no-op.

use serde_json::{json, Map, Value};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;

use crate::config;

pub const APP_NAME: &str = "moneo_finance";
pub const APP_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Start,
    Submit,
    Error,
}

impl FormAction {
    pub fn as_str(self) -> &'static str {
        match self {
            FormAction::Start => "start",
            FormAction::Submit => "submit",
            FormAction::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementFeature {
    BudgetTracker,
    ExpenseTracker,
    AccountTransfer,
    Statistics,
    Preregister,
}

impl EngagementFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            EngagementFeature::BudgetTracker => "budget_tracker",
            EngagementFeature::ExpenseTracker => "expense_tracker",
            EngagementFeature::AccountTransfer => "account_transfer",
            EngagementFeature::Statistics => "statistics",
            EngagementFeature::Preregister => "preregister",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    /// Every custom event carries the app name and version.
    fn finance(name: &'static str, params: Value) -> Self {
        let mut params = match params {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        params.insert("app_name".into(), APP_NAME.into());
        params.insert("app_version".into(), APP_VERSION.into());
        Self { name, params }
    }

    pub fn button_click(button: &str, section: &str) -> Self {
        Self::finance(
            "button_click",
            json!({
                "feature_used": button,
                "page_section": section,
                "user_action": "click",
            }),
        )
    }

    /// A successful submit counts as both a form submission and a conversion.
    pub fn form(form_type: &str, action: FormAction) -> Vec<Self> {
        match action {
            FormAction::Submit => vec![
                Self::finance(
                    "form_submit",
                    json!({ "user_action": "submit", "feature_used": form_type }),
                ),
                Self::conversion("preregister_submit"),
            ],
            _ => vec![Self::finance(
                "form_interaction",
                json!({ "feature_used": form_type, "user_action": action.as_str() }),
            )],
        }
    }

    pub fn user_engagement(feature: EngagementFeature) -> Self {
        Self::finance(
            "user_engagement",
            json!({ "feature_used": feature.as_str(), "user_action": "interaction" }),
        )
    }

    pub fn conversion(action: &str) -> Self {
        Self::finance("conversion", json!({ "user_action": action, "value": 1 }))
    }

    pub fn section_view(section: &str) -> Self {
        Self::finance(
            "section_view",
            json!({ "page_section": section, "user_action": "view" }),
        )
    }

    pub fn scroll_depth(percent: u32) -> Self {
        Self::finance(
            "scroll_depth",
            json!({ "value": percent, "user_action": "scroll" }),
        )
    }

    pub fn time_on_page(seconds: u32) -> Self {
        Self::finance(
            "time_on_page",
            json!({ "value": seconds, "user_action": "engagement" }),
        )
    }

    pub fn download() -> Vec<Self> {
        vec![
            Self::conversion("download_attempt"),
            Self::finance("download_intent", json!({ "user_action": "download_click" })),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analytics {
    measurement_id: Option<&'static str>,
    gtm_id: Option<&'static str>,
}

impl Analytics {
    pub fn new(measurement_id: Option<&'static str>, gtm_id: Option<&'static str>) -> Self {
        Self {
            measurement_id,
            gtm_id,
        }
    }

    pub fn from_config() -> Self {
        Self::new(config::get_ga_measurement_id(), config::get_gtm_id())
    }

    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some() || self.gtm_id.is_some()
    }

    /// Injects the gtag.js and GTM loaders for whichever ids are configured.
    pub fn install(&self) {
        if !self.is_enabled() {
            log::debug!("analytics disabled: no measurement or container id configured");
            return;
        }
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(id) = self.measurement_id {
            let src = format!("https://www.googletagmanager.com/gtag/js?id={id}");
            if let Err(err) = append_script(&document, Some(&src), None)
                .and_then(|_| append_script(&document, None, Some(&gtag_bootstrap(id))))
            {
                log::warn!("failed to install Google Analytics: {:?}", err);
            }
        }
        if let Some(id) = self.gtm_id {
            if let Err(err) = append_script(&document, None, Some(&gtm_bootstrap(id))) {
                log::warn!("failed to install Tag Manager: {:?}", err);
            }
        }
        log::info!(
            "analytics installed (ga: {}, gtm: {})",
            self.measurement_id.is_some(),
            self.gtm_id.is_some()
        );
    }

    pub fn page_view(&self, path: &str) {
        let Some(id) = self.measurement_id else {
            return;
        };
        let mut params = Map::new();
        params.insert("page_path".into(), path.into());
        params.insert(
            "custom_map".into(),
            json!({ "custom_parameter": "moneo_finance_app" }),
        );
        dispatch("config", id, &params);
    }

    pub fn track(&self, event: AnalyticsEvent) {
        if !self.is_enabled() {
            return;
        }
        dispatch("event", event.name, &event.params);
    }

    pub fn track_all(&self, events: impl IntoIterator<Item = AnalyticsEvent>) {
        for event in events {
            self.track(event);
        }
    }
}

fn gtag_bootstrap(measurement_id: &str) -> String {
    format!(
        r#"window.dataLayer = window.dataLayer || [];
function gtag(){{dataLayer.push(arguments);}}
gtag('js', new Date());
gtag('config', '{measurement_id}', {{
  page_title: 'Moneo - Personal Finance App',
  page_location: window.location.href,
  content_group1: 'Finance App',
  content_group2: 'Personal Finance',
  send_page_view: true
}});"#
    )
}

fn gtm_bootstrap(container_id: &str) -> String {
    format!(
        r#"(function(w,d,s,l,i){{w[l]=w[l]||[];w[l].push({{'gtm.start':
new Date().getTime(),event:'gtm.js'}});var f=d.getElementsByTagName(s)[0],
j=d.createElement(s),dl=l!='dataLayer'?'&l='+l:'';j.async=true;j.src=
'https://www.googletagmanager.com/gtm.js?id='+i+dl;f.parentNode.insertBefore(j,f);
}})(window,document,'script','dataLayer','{container_id}');
window.dataLayer.push({{
  'app_name': '{APP_NAME}',
  'app_version': '{APP_VERSION}',
  'page_type': 'landing_page',
  'content_category': 'personal_finance',
  'user_type': 'visitor'
}});"#
    )
}

fn append_script(
    document: &web_sys::Document,
    src: Option<&str>,
    body: Option<&str>,
) -> Result<(), JsValue> {
    let script = document.create_element("script")?;
    if let Some(src) = src {
        script.set_attribute("async", "")?;
        script.set_attribute("src", src)?;
    }
    if let Some(body) = body {
        script.set_text_content(Some(body));
    }
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}

/// Hands a command to `gtag`, or to the GTM data layer when only Tag Manager
/// is loaded. Missing globals are not an error.
fn dispatch(command: &str, target: &str, params: &Map<String, Value>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok());
    if let Some(gtag) = gtag {
        let Some(params) = to_js(&Value::Object(params.clone())) else {
            return;
        };
        if let Err(err) = gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str(command),
            &JsValue::from_str(target),
            &params,
        ) {
            log::debug!("gtag call failed: {:?}", err);
        }
        return;
    }

    let data_layer = js_sys::Reflect::get(&window, &JsValue::from_str("dataLayer"))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Array>().ok());
    match data_layer {
        Some(layer) if command == "event" => {
            let mut entry = params.clone();
            entry.insert("event".into(), target.into());
            if let Some(entry) = to_js(&Value::Object(entry)) {
                layer.push(&entry);
            }
        }
        Some(_) => {}
        None => log::debug!("no analytics globals present, dropping {command} {target}"),
    }
}

fn to_js(value: &Value) -> Option<JsValue> {
    let text = serde_json::to_string(value).ok()?;
    js_sys::JSON::parse(&text)
        .map_err(|err| log::debug!("could not convert analytics payload: {:?}", err))
        .ok()
}
