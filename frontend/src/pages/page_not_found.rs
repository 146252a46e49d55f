use dioxus::prelude::*;

use crate::components::loading_indicator::LoadingIndicator;
use crate::routes::Route;

/// Unknown paths go back to the search page.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    use_effect(move || {
        navigator().replace(Route::SearchPage {});
    });
    let path = segments.join("/");
    rsx! {
        document::Title { "Arroyo - Redirecting" }
        p { style: "margin: 15px; color: #6B7280;", "Nothing at /{path}, going to search." }
        LoadingIndicator {}
    }
}
