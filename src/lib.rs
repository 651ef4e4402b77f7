//! # explore-keyword-ui
//!
//! Leptos + WASM front end for the keyword search explorer.
//!
//! This crate holds the tag search bar with operator recognition and
//! auto-submit, the template checkbox groups, and the admin dialogs for
//! creating, editing and deleting search operators. Pure state lives in
//! `state`; `components` and `pages` bind it to the DOM; `net` talks to the
//! server's form and JSON endpoints.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: read back the embedded page config and hydrate the
/// server-rendered body with it.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = util::page_config::load();
    leptos::mount::hydrate_body(move || view! { <App config=config/> });
}
