//! State shared by every page, provided once by the root component.

use client::{
    api::ArroyoClient, config::ApiConfig, download_list::DownloadList,
    search_session::SearchSession,
};
use dioxus::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub api: ArroyoClient,
    pub session: Signal<SearchSession>,
    pub downloads: Signal<DownloadList>,
}

/// The backend serves this app, so in the browser it lives at the page origin.
#[cfg(target_arch = "wasm32")]
pub fn api_config() -> ApiConfig {
    match web_sys::window().and_then(|window| window.location().origin().ok()) {
        Some(origin) => ApiConfig::new(origin),
        None => ApiConfig::from_env(),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn api_config() -> ApiConfig {
    ApiConfig::from_env()
}
