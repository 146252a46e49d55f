//! Search results laid out in rows of fixed size.

use dioxus::prelude::*;

use crate::{components::search_components::search_result_item_card::SearchResultItemCard, data_definitions::app_state::AppState};

#[component]
pub fn SearchResultGrid() -> Element {
    let session = use_context::<AppState>().session;
    let groups = session.read().result_groups().to_vec();
    let result_count = session.read().results().len();
    let query_too_short = !session.read().build_query().is_searchable();

    rsx! {
        h1 {
            style: "font-size: 20px; font-weight: 300; color:rgb(75, 87, 112); margin: 7px;",
            if query_too_short {
                "Type at least 3 characters to search"
            } else {
                "{result_count} results"
            }
        }
        div {
            id: "x-search-results-grid",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 100%;
            ",
            for (row_index, group) in groups.into_iter().enumerate() {
                div {
                    key: "{row_index}",
                    class: "x-search-results-row",
                    style: "
                        display: flex;
                        flex-direction: row;
                        gap: 12px;
                        width: 100%;
                    ",
                    for item in group {
                        SearchResultItemCard { key: "{item.id}", item: item.clone() }
                    }
                }
            }
        }
    }
}
