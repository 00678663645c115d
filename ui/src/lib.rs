use leptos::prelude::*;
use leptos::mount::mount_to_body;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}

pub mod anim;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod routes;

pub use crate::app::App;
