//! Search form state and the grouped result list derived from it.

use common::{
    chunk::chunk,
    facet::{Facet, FacetKind, Introspection},
    search_const::RESULT_BLOCK_SIZE,
    search_query::SearchQuery,
    source_record::{ItemId, ResultItem},
};
use tracing::{debug, error, info, warn};

use crate::api::ArroyoApi;

/// A search started by [`SearchSession::begin_search`]. Hand it back to
/// [`SearchSession::complete_search`] together with the backend response.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    generation: u64,
    pub query: SearchQuery,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One per loaded UI. Facets are filled by [`SearchSession::initialize`],
/// everything else is driven by form events.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    all_states: bool,
    types: Vec<Facet>,
    languages: Vec<Facet>,
    results: Vec<ResultItem>,
    result_groups: Vec<Vec<ResultItem>>,
    last_error: Option<String>,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn all_states(&self) -> bool {
        self.all_states
    }

    pub fn set_all_states(&mut self, all_states: bool) {
        self.all_states = all_states;
    }

    pub fn facets(&self, kind: FacetKind) -> &[Facet] {
        match kind {
            FacetKind::Type => &self.types,
            FacetKind::Language => &self.languages,
        }
    }

    fn facets_mut(&mut self, kind: FacetKind) -> &mut Vec<Facet> {
        match kind {
            FacetKind::Type => &mut self.types,
            FacetKind::Language => &mut self.languages,
        }
    }

    /// Flips the selection of facet `name`. Returns the new state, or `None`
    /// if no such facet exists.
    pub fn toggle_facet(&mut self, kind: FacetKind, name: &str) -> Option<bool> {
        let facet = self.facets_mut(kind).iter_mut().find(|f| f.name == name)?;
        facet.selected = !facet.selected;
        Some(facet.selected)
    }

    pub fn set_facet_selected(&mut self, kind: FacetKind, name: &str, selected: bool) -> bool {
        match self.facets_mut(kind).iter_mut().find(|f| f.name == name) {
            Some(facet) => {
                facet.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn selected_names(&self, kind: FacetKind) -> Vec<String> {
        self.facets(kind).iter().filter(|f| f.selected).map(|f| f.name.clone()).collect()
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Results in rows of [`RESULT_BLOCK_SIZE`], always derived from [`Self::results`].
    pub fn result_groups(&self) -> &[Vec<ResultItem>] {
        &self.result_groups
    }

    /// Message of the most recent failed call, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Query for the current form state.
    pub fn build_query(&self) -> SearchQuery {
        SearchQuery {
            text: self.query.clone(),
            all_states: self.all_states,
            types: self.selected_names(FacetKind::Type),
            languages: self.selected_names(FacetKind::Language),
        }
    }

    /// Loads the facet lists. Failures are logged and leave the lists as they were.
    pub async fn initialize<A: ArroyoApi>(&mut self, api: &A) {
        let result = api.introspect().await;
        self.complete_initialize(result);
    }

    pub fn complete_initialize(&mut self, result: anyhow::Result<Introspection>) {
        match result {
            Ok(introspection) => {
                self.apply_introspection(&introspection);
                self.last_error = None;
            }
            Err(e) => {
                error!("introspect: request failed: {e:#}");
                self.last_error = Some(format!("{e:#}"));
            }
        }
    }

    /// Replaces both facet lists with the returned names, all unselected.
    pub fn apply_introspection(&mut self, introspection: &Introspection) {
        for kind in FacetKind::ALL {
            let names = introspection.names(kind);
            for name in names.iter().filter(|name| !kind.is_safe_name(name)) {
                warn!("introspect: backend may not filter on {} {:?}", kind.query_param(), name);
            }
            *self.facets_mut(kind) = names.iter().map(Facet::new).collect();
        }
    }

    /// Runs a search with the current form state.
    pub async fn search<A: ArroyoApi>(&mut self, api: &A) {
        if let Some(ticket) = self.begin_search() {
            let result = api.search(&ticket.query).await;
            self.complete_search(ticket, result);
        }
    }

    /// Starts a search. Queries shorter than the minimum length clear the
    /// results and return `None`: no request must be sent for them.
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        self.generation += 1;
        let query = self.build_query();
        if !query.is_searchable() {
            self.results.clear();
            self.result_groups.clear();
            return None;
        }
        Some(SearchTicket { generation: self.generation, query })
    }

    /// Stores the response of a search. Returns whether it was applied:
    /// responses to stale tickets and failures leave the results untouched.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: anyhow::Result<Vec<ResultItem>>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!("search: dropping stale response for {}", ticket.query);
            return false;
        }
        match result {
            Ok(results) => {
                info!("search: {} results for {}", results.len(), ticket.query);
                self.result_groups = chunk(Some(&results[..]), RESULT_BLOCK_SIZE);
                self.results = results;
                self.last_error = None;
                true
            }
            Err(e) => {
                error!("search: request failed for {}: {e:#}", ticket.query);
                self.last_error = Some(format!("{e:#}"));
                false
            }
        }
    }

    /// Asks the backend to download `id`. The download list is not touched;
    /// it picks the new entry up on its next load.
    pub async fn request_download<A: ArroyoApi>(api: &A, id: &ItemId) -> anyhow::Result<()> {
        match api.add_download(id).await {
            Ok(()) => {
                info!("Item: {id} added");
                Ok(())
            }
            Err(e) => {
                error!("Error adding {id}: {e:#}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_api::FakeApi;

    fn items(ids: std::ops::Range<i64>) -> Vec<ResultItem> {
        ids.map(|id| ResultItem::new(id).with_field("name", format!("source {id}"))).collect()
    }

    async fn initialized(api: &FakeApi) -> SearchSession {
        let mut session = SearchSession::new();
        session.initialize(api).await;
        session
    }

    #[tokio::test]
    async fn initialize_fills_unselected_facets() {
        let api = FakeApi::new();
        let session = initialized(&api).await;

        let types = session.facets(FacetKind::Type);
        assert_eq!(types.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(), ["movie", "episode"]);
        assert!(types.iter().all(|f| !f.selected));
        assert_eq!(session.facets(FacetKind::Language).len(), 2);
        assert_eq!(api.calls(), ["introspect"]);
    }

    #[tokio::test]
    async fn initialize_keeps_every_returned_name() {
        let api = FakeApi::new();
        api.set_introspection(Introspection {
            types: vec!["movie".into(), "Movie Extra".into(), "a&b".into()],
            languages: vec!["en".into(), "eng-us".into()],
        });
        let session = initialized(&api).await;

        assert_eq!(session.selected_names(FacetKind::Type), Vec::<String>::new());
        assert_eq!(
            session.facets(FacetKind::Type),
            [Facet::new("movie"), Facet::new("Movie Extra"), Facet::new("a&b")]
        );
        assert_eq!(session.facets(FacetKind::Language), [Facet::new("en"), Facet::new("eng-us")]);
    }

    #[tokio::test]
    async fn three_letter_language_can_be_selected() {
        let api = FakeApi::new();
        api.set_introspection(Introspection { types: vec![], languages: vec!["eng-us".into()] });
        let mut session = initialized(&api).await;

        assert_eq!(session.toggle_facet(FacetKind::Language, "eng-us"), Some(true));
        session.set_query("matrix");
        session.search(&api).await;

        assert_eq!(api.calls().last().unwrap(), "search q=matrix&language=eng-us");
    }

    #[tokio::test]
    async fn initialize_failure_leaves_facets_empty() {
        let api = FakeApi::new();
        api.fail_with("backend down");
        let session = initialized(&api).await;

        assert!(session.facets(FacetKind::Type).is_empty());
        assert!(session.facets(FacetKind::Language).is_empty());
        assert!(session.last_error().unwrap().contains("backend down"));
    }

    #[tokio::test]
    async fn short_query_clears_results_without_request() {
        let api = FakeApi::new();
        api.set_search_results(items(0..4));
        let mut session = initialized(&api).await;
        session.set_query("abc");
        session.search(&api).await;
        assert_eq!(session.results().len(), 4);

        session.set_query("ab");
        session.search(&api).await;

        assert!(session.results().is_empty());
        assert!(session.result_groups().is_empty());
        assert_eq!(api.calls(), ["introspect", "search q=abc"]);
    }

    #[tokio::test]
    async fn selected_facets_reach_the_query() {
        let api = FakeApi::new();
        let mut session = initialized(&api).await;
        session.set_query("abc");
        assert_eq!(session.toggle_facet(FacetKind::Type, "movie"), Some(true));
        assert_eq!(session.toggle_facet(FacetKind::Type, "documentary"), None);
        session.search(&api).await;

        assert_eq!(api.calls().last().unwrap(), "search q=abc&type=movie");
    }

    #[tokio::test]
    async fn all_states_with_several_facets() {
        let api = FakeApi::new();
        let mut session = initialized(&api).await;
        session.set_query("lost");
        session.set_all_states(true);
        session.toggle_facet(FacetKind::Type, "movie");
        session.toggle_facet(FacetKind::Type, "episode");
        session.toggle_facet(FacetKind::Language, "es-es");
        session.search(&api).await;

        assert_eq!(
            api.calls().last().unwrap(),
            "search q=lost&all_states&type=movie&type=episode&language=es-es"
        );
    }

    #[tokio::test]
    async fn toggling_twice_deselects() {
        let api = FakeApi::new();
        let mut session = initialized(&api).await;
        session.toggle_facet(FacetKind::Language, "en");
        session.toggle_facet(FacetKind::Language, "en");
        assert!(session.selected_names(FacetKind::Language).is_empty());
        assert!(session.set_facet_selected(FacetKind::Language, "en", true));
        assert_eq!(session.selected_names(FacetKind::Language), ["en".to_string()]);
    }

    #[tokio::test]
    async fn results_are_grouped_in_rows_of_three() {
        let api = FakeApi::new();
        api.set_search_results(items(0..7));
        let mut session = initialized(&api).await;
        session.set_query("abc");
        session.search(&api).await;

        let sizes = session.result_groups().iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(sizes, [3, 3, 1]);
        let flattened = session.result_groups().iter().flatten().cloned().collect::<Vec<_>>();
        assert_eq!(flattened, session.results());
    }

    #[tokio::test]
    async fn new_search_regroups_from_scratch() {
        let api = FakeApi::new();
        api.set_search_results(items(0..7));
        let mut session = initialized(&api).await;
        session.set_query("abc");
        session.search(&api).await;

        api.set_search_results(items(10..12));
        session.set_query("abcd");
        session.search(&api).await;

        assert_eq!(session.result_groups(), [items(10..12)]);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut session = SearchSession::new();
        session.set_query("first");
        let first = session.begin_search().unwrap();
        session.set_query("second");
        let second = session.begin_search().unwrap();
        assert!(second.generation() > first.generation());

        assert!(session.complete_search(second, Ok(items(0..2))));
        assert!(!session.complete_search(first, Ok(items(5..9))));
        assert_eq!(session.results(), items(0..2));
    }

    #[test]
    fn short_query_invalidates_pending_search() {
        let mut session = SearchSession::new();
        session.set_query("first");
        let pending = session.begin_search().unwrap();
        session.set_query("f");
        assert!(session.begin_search().is_none());

        assert!(!session.complete_search(pending, Ok(items(0..2))));
        assert!(session.results().is_empty());
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_results() {
        let api = FakeApi::new();
        api.set_search_results(items(0..2));
        let mut session = initialized(&api).await;
        session.set_query("abc");
        session.search(&api).await;

        api.fail_with("timeout");
        session.set_query("abcd");
        session.search(&api).await;

        assert_eq!(session.results(), items(0..2));
        assert!(session.last_error().unwrap().contains("timeout"));
    }

    #[tokio::test]
    async fn request_download_posts_id() {
        let api = FakeApi::new();
        SearchSession::request_download(&api, &ItemId::Int(12)).await.unwrap();
        assert_eq!(api.calls(), ["add 12"]);
        assert!(api.downloads().contains_key(&ItemId::Int(12)));
    }

    #[tokio::test]
    async fn request_download_reports_backend_message() {
        let api = FakeApi::new();
        api.fail_with("Invalid source");
        let err = SearchSession::request_download(&api, &ItemId::Int(12)).await.unwrap_err();
        assert!(err.to_string().contains("Invalid source"));
    }
}
