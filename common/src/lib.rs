//! Common library exports shared between the API client and the frontend.

extern crate serde;


pub mod search_const;
pub mod facet;
pub mod search_query;
pub mod source_record;
pub mod api_messages;
pub mod chunk;
