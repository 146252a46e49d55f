//! Local copy of the backend's download queue.

use std::collections::BTreeMap;

use common::source_record::{DownloadEntry, ItemId};
use tracing::{error, info};

use crate::api::ArroyoApi;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DownloadList {
    downloads: BTreeMap<ItemId, DownloadEntry>,
}

impl DownloadList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ItemId) -> Option<&DownloadEntry> {
        self.downloads.get(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.downloads.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.downloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.downloads.is_empty()
    }

    /// Entries ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &DownloadEntry> {
        self.downloads.values()
    }

    /// Inserts or overwrites the entry with the same id.
    pub fn insert(&mut self, entry: DownloadEntry) -> Option<DownloadEntry> {
        self.downloads.insert(entry.id.clone(), entry)
    }

    pub fn replace_all(&mut self, entries: Vec<DownloadEntry>) {
        self.downloads = entries.into_iter().map(|e| (e.id.clone(), e)).collect();
    }

    /// Replaces the whole list with the backend's.
    pub async fn load<A: ArroyoApi>(&mut self, api: &A) -> anyhow::Result<()> {
        let result = api.list_downloads().await;
        self.complete_load(result)
    }

    pub fn complete_load(
        &mut self,
        result: anyhow::Result<Vec<DownloadEntry>>,
    ) -> anyhow::Result<()> {
        match result {
            Ok(entries) => {
                info!("downloads: loaded {} entries", entries.len());
                self.replace_all(entries);
                Ok(())
            }
            Err(e) => {
                error!("downloads: list request failed: {e:#}");
                Err(e)
            }
        }
    }

    /// Deletes `id` on the backend, then locally. On failure the list is left as it was.
    pub async fn remove<A: ArroyoApi>(&mut self, api: &A, id: &ItemId) -> anyhow::Result<()> {
        let result = api.remove_download(id).await;
        self.complete_remove(id, result)
    }

    pub fn complete_remove(
        &mut self,
        id: &ItemId,
        result: anyhow::Result<()>,
    ) -> anyhow::Result<()> {
        match result {
            Ok(()) => {
                self.downloads.remove(id);
                info!("Item: {id} removed");
                Ok(())
            }
            Err(e) => {
                error!("Error removing {id}: {e:#}");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fake_api::FakeApi, search_session::SearchSession};

    fn entry(id: i64, name: &str) -> DownloadEntry {
        DownloadEntry::new(id).with_field("name", name).with_field("state", 4)
    }

    #[tokio::test]
    async fn load_keys_entries_by_id() {
        let api = FakeApi::new();
        api.insert_download(entry(3, "c"));
        api.insert_download(entry(1, "a"));
        let mut list = DownloadList::new();
        list.load(&api).await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(&ItemId::Int(1)).and_then(|e| e.name()), Some("a"));
        let ids = list.iter().map(|e| e.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids, [ItemId::Int(1), ItemId::Int(3)]);
    }

    #[tokio::test]
    async fn load_replaces_previous_entries() {
        let api = FakeApi::new();
        api.insert_download(entry(1, "a"));
        let mut list = DownloadList::new();
        list.insert(entry(99, "gone"));
        list.load(&api).await.unwrap();

        assert!(!list.contains(&ItemId::Int(99)));
        assert!(list.contains(&ItemId::Int(1)));
    }

    #[tokio::test]
    async fn loading_twice_gives_same_list() {
        let api = FakeApi::new();
        SearchSession::request_download(&api, &ItemId::Int(5)).await.unwrap();
        let mut list = DownloadList::new();
        list.load(&api).await.unwrap();
        let first = list.clone();
        list.load(&api).await.unwrap();

        assert_eq!(list, first);
        assert!(list.contains(&ItemId::Int(5)));
    }

    #[tokio::test]
    async fn failed_load_keeps_entries() {
        let api = FakeApi::new();
        api.fail_with("backend down");
        let mut list = DownloadList::new();
        list.insert(entry(1, "a"));

        assert!(list.load(&api).await.is_err());
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn remove_deletes_entry() {
        let api = FakeApi::new();
        api.insert_download(entry(1, "a"));
        api.insert_download(entry(2, "b"));
        let mut list = DownloadList::new();
        list.load(&api).await.unwrap();

        list.remove(&api, &ItemId::Int(1)).await.unwrap();

        assert!(!list.contains(&ItemId::Int(1)));
        assert!(list.contains(&ItemId::Int(2)));
        assert_eq!(api.calls().last().unwrap(), "remove 1");
    }

    #[tokio::test]
    async fn failed_remove_keeps_entry() {
        let api = FakeApi::new();
        let mut list = DownloadList::new();
        list.insert(entry(7, "local only"));

        let err = list.remove(&api, &ItemId::Int(7)).await.unwrap_err();

        assert!(err.to_string().contains("Invalid source"));
        assert!(list.contains(&ItemId::Int(7)));
    }

    #[test]
    fn insert_overwrites_same_id() {
        let mut list = DownloadList::new();
        assert!(list.insert(entry(1, "old")).is_none());
        assert!(list.insert(entry(1, "new")).is_some());

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&ItemId::Int(1)).and_then(|e| e.name()), Some("new"));
    }
}
