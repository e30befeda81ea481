#![forbid(unsafe_code)]
//! ENS web front end: the bilingual landing site, mock login and template
//! gallery, rendered with Yew over the rules in `ens-core`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod i18n;
pub mod pages;
pub mod paths;
pub mod router;
pub mod sections;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("ens-web starting");
    yew::Renderer::<app::App>::new().render();
}
