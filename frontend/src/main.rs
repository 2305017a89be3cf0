use moneo_web::analytics::Analytics;
use moneo_web::{App, AppProps};

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting moneo-web");

    let analytics = Analytics::from_config();
    analytics.install();
    yew::Renderer::<App>::with_props(AppProps { analytics }).render();
}
