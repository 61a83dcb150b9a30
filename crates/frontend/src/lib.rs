pub mod app;
pub mod domain;
pub mod layout;
pub mod page_init;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point, called by the host once the document is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
