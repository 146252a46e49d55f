use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdDelete};

use common::source_record::{DownloadEntry, ItemId};


#[component]
pub fn DownloadEntryRow(entry: DownloadEntry, on_remove: Callback<ItemId>) -> Element {
    let id = entry.id.clone();
    let name = entry.name().unwrap_or("(unnamed)").to_string();
    let (symbol, label) = match entry.state() {
        Some(state) => (state.symbol(), state.label()),
        None => (" ", "unknown"),
    };
    rsx! {
        div {
            class: "x-download-entry-row",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 8px 12px;
                background-color: white;
                border-bottom: 1px solid rgba(0,0,0,0.1);
            ",
            span {
                style: "width: 24px; font-size: 18px; text-align: center; flex-shrink: 0;",
                title: "{label}",
                "{symbol}"
            }
            span {
                style: "flex-grow: 1; min-width: 0; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                "{name}"
            }
            button {
                style: "border: none; background: none; cursor: pointer;",
                title: "Remove",
                onclick: move |_| on_remove.call(id.clone()),
                Icon { icon: MdDelete, style: "width: 22px; height: 22px; color: #DC2626;" }
            }
        }
    }
}
