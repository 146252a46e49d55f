use dioxus::prelude::*;
use dioxus::logger::tracing::info;

use client::{
    api::{ArroyoApi, ArroyoClient},
    download_list::DownloadList,
    search_session::SearchSession,
};
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::app_state::{AppState, api_config};
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let session = use_signal(SearchSession::new);
    let downloads = use_signal(DownloadList::new);
    let state = use_context_provider(move || {
        let config = api_config();
        info!("Using Arroyo backend at {}", config.base_url);
        AppState {
            api: ArroyoClient::new(config),
            session,
            downloads,
        }
    });

    // facets are loaded once per page load; the lists stay empty if this fails
    use_future(move || {
        let api = state.api.clone();
        let mut session = state.session;
        async move {
            let result = api.introspect().await;
            session.write().complete_initialize(result);
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
