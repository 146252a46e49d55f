//! Facet filters offered by the introspection endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetKind {
    Type,
    Language,
}

impl FacetKind {
    pub const ALL: [FacetKind; 2] = [FacetKind::Type, FacetKind::Language];

    /// Query string parameter carrying the selected names of this kind.
    pub fn query_param(&self) -> &'static str {
        match self {
            FacetKind::Type => "type",
            FacetKind::Language => "language",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FacetKind::Type => "Types",
            FacetKind::Language => "Languages",
        }
    }

    /// Whether the backend accepts `name` as a filter value. It silently
    /// ignores values that do not match.
    pub fn is_safe_name(&self, name: &str) -> bool {
        match self {
            FacetKind::Type => is_safe_type(name),
            FacetKind::Language => is_safe_language(name),
        }
    }
}

fn is_lowercase_word(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

// [a-z]+(-[a-z]+)?
fn is_safe_type(name: &str) -> bool {
    let mut parts = name.split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(head), None, _) => is_lowercase_word(head),
        (Some(head), Some(tail), None) => is_lowercase_word(head) && is_lowercase_word(tail),
        _ => false,
    }
}

// [a-z]{2}(-[a-z]{2,3})*
fn is_safe_language(name: &str) -> bool {
    let mut parts = name.split('-');
    let Some(head) = parts.next() else {
        return false;
    };
    head.len() == 2
        && is_lowercase_word(head)
        && parts.all(|part| (2..=3).contains(&part.len()) && is_lowercase_word(part))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub name: String,
    pub selected: bool,
}

impl Facet {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), selected: false }
    }
}

/// Response of `GET /introspect/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Introspection {
    pub types: Vec<String>,
    pub languages: Vec<String>,
}

impl Introspection {
    pub fn names(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::Type => &self.types,
            FacetKind::Language => &self.languages,
        }
    }
}
