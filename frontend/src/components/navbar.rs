//! Side navigation bar component.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

use dioxus_free_icons::icons::md_action_icons::MdExplore;
use dioxus_free_icons::icons::md_action_icons::MdSearch;
use dioxus_free_icons::icons::md_file_icons::MdCloudDownload;
use dioxus_free_icons::{Icon, IconShape};


/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {

        div {
            id:"x-nav-container",

            style:"
                display:flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",


            div {
                id:"x-nav-sidebar",
                style:"
                    display:flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #1C212D;
                    border: 1px solid #000000;
                    padding: 16px;
                ",

                NavbarTopLogo{},
                NavbarIconLink { to: Route::SearchPage {}, title: "Search".to_string(), icon: MdSearch }
                NavbarIconLink { to: Route::DownloadsPage {}, title: "Downloads".to_string(), icon: MdCloudDownload }
                NavbarIconLink { to: Route::ExplorePage {}, title: "Explore".to_string(), icon: MdExplore }
            },

            div {
                id:"x-page-container",
                style: "flex-grow:1; min-width: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }

    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::SearchPage {},
            style: "color: white; font-size: 22px; font-weight: 600; text-decoration: none;",
            "Ar"
        }
    }
}

#[component]
fn NavbarIconLink<I: IconShape + Clone + PartialEq + 'static>(
    to: Route,
    title: String,
    icon: I,
) -> Element {
    let route = use_route::<Route>();
    let is_active = route == to;
    let color = if is_active { "#FFFFFF" } else { "#9CA3AF" };
    rsx! {
        Link {
            to: to.clone(),
            title: "{title}",
            Icon { icon: icon, style: "width: 36px; height: 36px; color: {color};" }
        }
    }
}
