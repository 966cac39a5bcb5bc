//! # client
//!
//! Browser side of the international student platform. Each static HTML
//! page loads the WASM bundle and calls `startPage("<name>")`; the matching
//! controller in [`pages`] fetches fixtures, paints string-rendered
//! fragments, localizes them, and keeps bookmarks, likes, group
//! memberships, language, and contact submissions in local storage.
//!
//! Browser bindings sit behind the `hydrate` feature. Renderers, storage,
//! preferences, and localization logic build and test natively.

pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point called from each page's bootstrap script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = startPage)]
pub fn start_page(page: &str) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let Some(page) = pages::Page::from_name(page) else {
        log::error!("unknown page {page:?}");
        return;
    };
    wasm_bindgen_futures::spawn_local(pages::run(page));
}
