//! Checkbox lists for the type and language facets.

use dioxus::prelude::*;
use common::facet::{Facet, FacetKind};
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use crate::data_definitions::app_state::AppState;


#[component]
pub fn SearchFacetPanel(trigger_search: Callback<()>) -> Element {
    rsx! {
        div {
            id: "x-search-facets-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 12px;
            ",
            for kind in FacetKind::ALL {
                FacetList { key: "{kind.query_param()}", kind, trigger_search }
            }
        }
    }
}

#[component]
fn FacetList(kind: FacetKind, trigger_search: Callback<()>) -> Element {
    let session = use_context::<AppState>().session;
    let facets = session.read().facets(kind).to_vec();
    rsx! {
        div {
            h2 {
                style: "font-size: 18px; font-weight: 500; color: rgb(75, 87, 112); border-bottom: 1px solid rgb(75, 87, 112); margin-bottom: 6px;",
                "{kind.display_name()}"
            }
            if facets.is_empty() {
                p { style: "color: rgba(28, 33, 45, 0.6); font-size: 14px;", "None available" }
            }
            ul {
                for facet in facets {
                    li {
                        key: "{facet.name}",
                        FacetCheckbox { kind, facet: facet.clone(), trigger_search }
                    }
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(kind: FacetKind, facet: Facet, trigger_search: Callback<()>) -> Element {
    let mut session = use_context::<AppState>().session;
    let name = facet.name.clone();
    rsx! {
        div {
            class: "x-facet-list-item",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 4px;
                align-items: center;
            ",
            onclick: move |_e| {
                session.write().toggle_facet(kind, &name);
                trigger_search.call(());
            },

            if facet.selected {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45); flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 16px;
                    line-height: 24px;
                    color: rgb(0, 0, 0);
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{facet.name}"
            }
        }
    }
}
