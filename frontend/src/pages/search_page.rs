use dioxus::prelude::*;

use client::api::ArroyoApi;
use crate::{
    components::{error_boundary::ComponentErrorDisplay, search_components::{search_facets::SearchFacetPanel, search_input_top_bar::SearchInputTopBar, search_result_grid::SearchResultGrid}},
    data_definitions::app_state::AppState,
};


/// Search page
#[component]
pub fn SearchPage() -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;
    let api = state.api.clone();

    // every form change searches again; short queries only clear the results
    let trigger_search = use_callback(move |_: ()| {
        let api = api.clone();
        let ticket = session.write().begin_search();
        if let Some(ticket) = ticket {
            spawn(async move {
                let result = api.search(&ticket.query).await;
                session.write().complete_search(ticket, result);
            });
        }
    });

    let last_error = session.read().last_error().map(|e| e.to_string());

    rsx! {
        document::Title { "Arroyo - Search" }
        div {
            id: "x-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-search-input-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    height: 76px;
                    width: 100%;
                ",

                SearchInputTopBar { trigger_search }
            }

            div {
                id: "x-search-results-bottom-space",
                style: r#"
                    width: 100%;
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    max-height: calc(100% - 76px);
                "#,
                div {
                    id: "x-search-facets-left-panel",
                    style: "
                        height: 100%;
                        background-color: #ECEEF2;
                        min-width: 220px;
                        width: 20%;
                        overflow-y: auto;
                    ",
                    SearchFacetPanel { trigger_search }
                }
                div {
                    id: "x-search-results-right-panel",
                    style: "
                        height: 100%;
                        flex-grow: 1;
                        overflow-y: auto;
                        padding: 7px;
                    ",
                    if let Some(error_txt) = last_error {
                        ComponentErrorDisplay {
                            title: "Backend request failed".to_string(),
                            error_txt,
                            button {
                                style: "color:blue; font-size: 16px; border: 1px solid blue; padding: 6px; border-radius: 5px; margin: 5px;",
                                onclick: move |_| session.write().clear_error(),
                                "Dismiss"
                            }
                        }
                    }
                    SearchResultGrid {}
                }
            }
        }
    }
}
