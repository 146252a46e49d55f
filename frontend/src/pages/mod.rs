pub mod search_page;
pub mod downloads_page;
pub mod explore_page;
pub mod page_not_found;
