//! Card for one search result, with its download button.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileDownload};

use client::search_session::SearchSession;
use common::source_record::ResultItem;
use crate::data_definitions::app_state::AppState;

#[derive(Debug, Clone, PartialEq)]
enum DownloadRequestStatus {
    Idle,
    Pending,
    Added,
    Failed(String),
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}

fn detail_line(item: &ResultItem) -> String {
    let mut details = vec![];
    if let Some(source_type) = item.source_type() {
        details.push(source_type.to_string());
    }
    details.push(item.language().unwrap_or("unknown").to_string());
    if let Some(size) = item.size() {
        details.push(format_size(size));
    }
    let seeds = item.seeds().map(|s| s.to_string()).unwrap_or("-".to_string());
    let leechers = item.leechers().map(|l| l.to_string()).unwrap_or("-".to_string());
    details.push(format!("{seeds}/{leechers}"));
    if let Some(provider) = item.provider() {
        details.push(provider.to_string());
    }
    details.join(" · ")
}

#[component]
pub fn SearchResultItemCard(item: ResultItem) -> Element {
    let api = use_context::<AppState>().api;
    let mut status = use_signal(|| DownloadRequestStatus::Idle);
    let id = item.id.clone();
    let name = item.name().unwrap_or("(unnamed)").to_string();
    let details = detail_line(&item);
    let uri = item.uri().map(|u| u.to_string());
    let (button_text, button_color) = match status.read().clone() {
        DownloadRequestStatus::Idle => ("Download".to_string(), "#4F46E5"),
        DownloadRequestStatus::Pending => ("Adding...".to_string(), "#6B7280"),
        DownloadRequestStatus::Added => ("Added".to_string(), "#059669"),
        DownloadRequestStatus::Failed(msg) => (format!("Failed: {msg}"), "#DC2626"),
    };

    rsx! {
        div {
            class: "x-search-result-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                flex: 1 1 0;
                min-width: 0;
                padding: 12px;
                background-color: white;
                border: 1px solid rgba(0,0,0,0.15);
                border-radius: 10px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.05);
            ",
            div {
                style: "font-size: 16px; font-weight: 500; color: #0F172A; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                title: "{name}",
                "{name}"
            }
            div {
                style: "font-size: 13px; color: rgba(28, 33, 45, 0.7);",
                "{details}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px; align-items: center;",
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        cursor: pointer;
                        border: 1px solid {button_color};
                        color: {button_color};
                        background: white;
                        border-radius: 6px;
                        padding: 4px 8px;
                    ",
                    disabled: *status.read() == DownloadRequestStatus::Pending,
                    onclick: move |_| {
                        let api = api.clone();
                        let id = id.clone();
                        status.set(DownloadRequestStatus::Pending);
                        spawn(async move {
                            match SearchSession::request_download(&api, &id).await {
                                Ok(()) => status.set(DownloadRequestStatus::Added),
                                Err(e) => status.set(DownloadRequestStatus::Failed(format!("{e:#}"))),
                            }
                        });
                    },
                    Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
                    "{button_text}"
                }
                {uri.map(|uri| rsx! {
                    a {
                        href: "{uri}",
                        style: "font-size: 13px; color: blue;",
                        "Link"
                    }
                })}
            }
        }
    }
}
