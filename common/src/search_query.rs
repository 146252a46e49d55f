//! Search query models and query string construction.

use std::fmt::Display;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{facet::FacetKind, search_const::MIN_QUERY_LENGTH};

/// Characters that would end or split a query parameter value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// A query for `GET /search/`, built from the search form at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub text: String,
    pub all_states: bool,
    pub types: Vec<String>,
    pub languages: Vec<String>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Default::default() }
    }

    pub fn with_all_states(mut self, all_states: bool) -> Self {
        self.all_states = all_states;
        self
    }

    pub fn with_facet(mut self, kind: FacetKind, name: impl Into<String>) -> Self {
        self.facet_names_mut(kind).push(name.into());
        self
    }

    pub fn facet_names(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::Type => &self.types,
            FacetKind::Language => &self.languages,
        }
    }

    pub fn facet_names_mut(&mut self, kind: FacetKind) -> &mut Vec<String> {
        match kind {
            FacetKind::Type => &mut self.types,
            FacetKind::Language => &mut self.languages,
        }
    }

    /// Texts shorter than [`MIN_QUERY_LENGTH`] characters are too vague to search.
    pub fn is_searchable(&self) -> bool {
        self.text.chars().count() >= MIN_QUERY_LENGTH
    }

    /// `q=<text>[&all_states][&type=<name>]*[&language=<name>]*`
    ///
    /// The order is part of the contract with the backend. Values are
    /// percent-encoded so that a `&` or `#` in them cannot start another
    /// parameter or a fragment.
    pub fn to_query_string(&self) -> String {
        let mut query = format!("q={}", encode(&self.text));
        if self.all_states {
            query.push_str("&all_states");
        }
        for kind in FacetKind::ALL {
            for name in self.facet_names(kind) {
                query.push_str(&format!("&{}={}", kind.query_param(), encode(name)));
            }
        }
        query
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_query_string())
    }
}
