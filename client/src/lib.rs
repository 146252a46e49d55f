//! Client for the Arroyo HTTP API and the search and download state built on top of it.

pub mod config;
pub mod api;
pub mod search_session;
pub mod download_list;

#[cfg(test)]
mod fake_api;
