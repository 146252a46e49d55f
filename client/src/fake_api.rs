//! In-memory backend used by the unit tests.

use std::{cell::RefCell, collections::BTreeMap};

use common::{
    facet::Introspection,
    search_query::SearchQuery,
    source_record::{DownloadEntry, ItemId, ResultItem},
};

use crate::api::ArroyoApi;

pub(crate) struct FakeApi {
    introspection: RefCell<Introspection>,
    search_results: RefCell<Vec<ResultItem>>,
    downloads: RefCell<BTreeMap<ItemId, DownloadEntry>>,
    failure: RefCell<Option<String>>,
    calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self {
            introspection: RefCell::new(Introspection {
                types: vec!["movie".into(), "episode".into()],
                languages: vec!["en".into(), "es-es".into()],
            }),
            search_results: RefCell::new(vec![]),
            downloads: RefCell::new(BTreeMap::new()),
            failure: RefCell::new(None),
            calls: RefCell::new(vec![]),
        }
    }

    pub(crate) fn set_introspection(&self, introspection: Introspection) {
        *self.introspection.borrow_mut() = introspection;
    }

    pub(crate) fn set_search_results(&self, results: Vec<ResultItem>) {
        *self.search_results.borrow_mut() = results;
    }

    pub(crate) fn insert_download(&self, entry: DownloadEntry) {
        self.downloads.borrow_mut().insert(entry.id.clone(), entry);
    }

    /// Every following call fails with `message`.
    pub(crate) fn fail_with(&self, message: &str) {
        *self.failure.borrow_mut() = Some(message.to_string());
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub(crate) fn downloads(&self) -> BTreeMap<ItemId, DownloadEntry> {
        self.downloads.borrow().clone()
    }

    fn record(&self, call: String) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().as_ref() {
            Some(message) => anyhow::bail!("{message}"),
            None => Ok(()),
        }
    }
}

impl ArroyoApi for FakeApi {
    async fn introspect(&self) -> anyhow::Result<Introspection> {
        self.record("introspect".to_string())?;
        Ok(self.introspection.borrow().clone())
    }

    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<ResultItem>> {
        self.record(format!("search {query}"))?;
        Ok(self.search_results.borrow().clone())
    }

    async fn add_download(&self, id: &ItemId) -> anyhow::Result<()> {
        self.record(format!("add {id}"))?;
        self.insert_download(DownloadEntry::new(id.clone()).with_field("state", 2));
        Ok(())
    }

    async fn list_downloads(&self) -> anyhow::Result<Vec<DownloadEntry>> {
        self.record("list".to_string())?;
        Ok(self.downloads.borrow().values().cloned().collect())
    }

    async fn remove_download(&self, id: &ItemId) -> anyhow::Result<()> {
        self.record(format!("remove {id}"))?;
        match self.downloads.borrow_mut().remove(id) {
            Some(_) => Ok(()),
            None => anyhow::bail!("Invalid source"),
        }
    }
}
