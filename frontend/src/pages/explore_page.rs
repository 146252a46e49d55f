//! Movie browser page; the backend exposes no browse endpoints yet.

use dioxus::prelude::*;


/// Explore page
#[component]
pub fn ExplorePage() -> Element {
    rsx! {
        document::Title { "Arroyo - Explore" }
        h1 {
            style: "font-size: 28px; font-weight: 400; color: #1C212D; margin: 36px 40px;",
            "Explore movies"
        }
    }
}
