//! Download queue page.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

use client::api::ArroyoApi;
use common::source_record::ItemId;
use crate::{
    components::{download_components::download_entry_row::DownloadEntryRow, error_boundary::ComponentErrorDisplay, loading_indicator::LoadingIndicator},
    data_definitions::app_state::AppState,
};


/// Downloads page
#[component]
pub fn DownloadsPage() -> Element {
    let state = use_context::<AppState>();
    let mut downloads = state.downloads;
    let mut loaded = use_signal(|| false);
    let mut error_txt = use_signal(|| None::<String>);

    let api = state.api.clone();
    let reload = use_callback(move |_: ()| {
        let api = api.clone();
        spawn(async move {
            let result = api.list_downloads().await;
            let outcome = downloads.write().complete_load(result);
            error_txt.set(outcome.err().map(|e| format!("{e:#}")));
            loaded.set(true);
        });
    });
    // the list is fetched again every time the page is opened
    use_hook(move || reload.call(()));

    let api = state.api.clone();
    let on_remove = use_callback(move |id: ItemId| {
        let api = api.clone();
        spawn(async move {
            let result = api.remove_download(&id).await;
            let outcome = downloads.write().complete_remove(&id, result);
            error_txt.set(outcome.err().map(|e| format!("{e:#}")));
        });
    });

    let entries = downloads.read().iter().cloned().collect::<Vec<_>>();

    rsx! {
        document::Title { "Arroyo - Downloads" }
        div {
            id: "x-downloads-page",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                padding: 24px 32px;
                height: 100%;
                background: #F5F6F8;
                box-sizing: border-box;
                overflow-y: auto;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h1 { style: "font-size: 28px; font-weight: 400; color: #1C212D;", "Downloads" }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    title: "Refresh",
                    onclick: move |_| reload.call(()),
                    Icon { icon: MdRefresh, style: "width: 24px; height: 24px; color: #1C212D;" }
                }
            }
            if let Some(error_txt) = error_txt() {
                ComponentErrorDisplay { title: "Downloads request failed".to_string(), error_txt }
            }
            if !loaded() {
                LoadingIndicator {}
            } else if entries.is_empty() {
                p { style: "color: #6B7280;", "No downloads." }
            } else {
                div {
                    for entry in entries {
                        DownloadEntryRow { key: "{entry.id}", entry: entry.clone(), on_remove }
                    }
                }
            }
        }
    }
}
