pub mod navbar;
pub mod error_boundary;
pub mod loading_indicator;
pub mod search_components;
pub mod download_components;
