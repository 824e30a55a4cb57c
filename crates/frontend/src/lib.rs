pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    let config = shared::config::config();
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();
    log::info!("legal chat client, backend at {}", config.api_base);

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
