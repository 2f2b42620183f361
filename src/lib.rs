use wasm_bindgen::prelude::*;

pub mod analytics;
pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod state;
pub mod storage;
pub mod types;

pub use app::App;

#[wasm_bindgen(start)]
pub fn run_app() {
    let config = config::Config::from_env();
    logging::init(config.log_level_filter());

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document to render into");
    let root = document
        .get_element_by_id("root")
        .expect("index.html must contain an element with id \"root\"");
    log::info!("mounting notes app (storage key '{}')", config.storage_key);
    yew::Renderer::<App>::with_root(root).render();
}
