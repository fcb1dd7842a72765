pub mod api;
pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod store;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
