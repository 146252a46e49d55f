use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::pages::search_page::SearchPage;
use crate::pages::downloads_page::DownloadsPage;
use crate::pages::explore_page::ExplorePage;
use crate::pages::page_not_found::PageNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/search")]
    SearchPage {},


    #[route("/downloads")]
    DownloadsPage {},


    #[route("/explore/movies")]
    ExplorePage {},

    #[end_layout]

    #[redirect("/", || Route::SearchPage {})]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}
