use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdSearch, md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}}};

use crate::data_definitions::app_state::AppState;


#[component]
pub fn SearchInputTopBar(trigger_search: Callback<()>) -> Element {
    let mut session = use_context::<AppState>().session;
    let all_states = session.read().all_states();
    let search_oninput = move |event: Event<FormData>| {
        session.write().set_query(event.value());
        trigger_search.call(());
    };
    let search_onkeydown = move |event: Event<KeyboardData>| {
        if event.key() == Key::Enter {
            trigger_search.call(());
        }
    };
    rsx! {
        div {
            id: "x-search-input-search-box",
            style: "
                display:flex;
                align-items:center;
                gap: 16px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
                width: 500px;
                margin-left: 16px;
            ",

            button {
                style: "
                    border: none;
                    background: none;
                    cursor: pointer;
                ",
                onclick: move |_| {
                    trigger_search.call(())
                },
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:#6B7280;" }
            }
            input {
                r#type: "text",
                placeholder: "Search sources (3 characters or more)",
                style: "
                    flex:1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 20px;
                    font-weight: 400;
                    font-family: Roboto, sans-serif;
                ",
                value: "{session.read().query()}",
                oninput: search_oninput,
                onkeydown: search_onkeydown,
            }
        }
        div {
            id: "x-search-all-states-toggle",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                margin-left: 16px;
                cursor: pointer;
                font-size: 16px;
                color: #1C212D;
            ",
            onclick: move |_| {
                let all_states = session.read().all_states();
                session.write().set_all_states(!all_states);
                trigger_search.call(());
            },
            if all_states {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: rgb(28, 33, 45);" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: black;" }
            }
            "Include downloaded and archived"
        }
    }
}
