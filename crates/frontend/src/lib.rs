pub mod app;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config_messages = shared::config::init_config();
    let config = shared::config::app_config();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.logging.level());
    for (level, message) in config_messages {
        log::log!(level, "{}", message);
    }
    console_error_panic_hook::set_once();

    log::info!("API base: {}", shared::api_utils::api_base());
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
