//! Calls to the Arroyo backend.

use anyhow::Context;
use common::{
    api_messages::{AddDownloadRequest, ApiMessage},
    facet::Introspection,
    search_query::SearchQuery,
    source_record::{DownloadEntry, ItemId, ResultItem},
};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::ApiConfig;

/// The backend endpoints the search session and the download list depend on.
///
/// Futures are not required to be `Send` so the browser build can use it.
#[allow(async_fn_in_trait)]
pub trait ArroyoApi {
    /// `GET /introspect/`
    async fn introspect(&self) -> anyhow::Result<Introspection>;
    /// `GET /search/?<query>`
    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<ResultItem>>;
    /// `POST /downloads/` with `{"id": id}`
    async fn add_download(&self, id: &ItemId) -> anyhow::Result<()>;
    /// `GET /downloads/`
    async fn list_downloads(&self) -> anyhow::Result<Vec<DownloadEntry>>;
    /// `DELETE /downloads/<id>`
    async fn remove_download(&self, id: &ItemId) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct ArroyoClient {
    config: ApiConfig,
    http: reqwest::Client,
}

impl ArroyoClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> anyhow::Result<T> {
        let url = self.config.endpoint(path);
        info!("GET {url}");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;
        let response = error_for_status(response).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to decode response of {url}"))
    }
}

/// Turns a non-2xx response into an error carrying the backend's message.
async fn error_for_status(response: Response) -> anyhow::Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiMessage>(&body)
        .ok()
        .and_then(|m| m.message().map(|m| m.to_string()));
    match message {
        Some(message) => anyhow::bail!("{message} ({status})"),
        None => anyhow::bail!("Request failed with status {status}"),
    }
}

impl ArroyoApi for ArroyoClient {
    async fn introspect(&self) -> anyhow::Result<Introspection> {
        self.get_json("/introspect/").await
    }

    async fn search(&self, query: &SearchQuery) -> anyhow::Result<Vec<ResultItem>> {
        self.get_json(&format!("/search/?{}", query.to_query_string())).await
    }

    async fn add_download(&self, id: &ItemId) -> anyhow::Result<()> {
        let url = self.config.endpoint("/downloads/");
        info!("POST {url} id={id}");
        let response = self
            .http
            .post(&url)
            .json(&AddDownloadRequest { id: id.clone() })
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;
        error_for_status(response).await?;
        Ok(())
    }

    async fn list_downloads(&self) -> anyhow::Result<Vec<DownloadEntry>> {
        self.get_json("/downloads/").await
    }

    async fn remove_download(&self, id: &ItemId) -> anyhow::Result<()> {
        let url = self.config.endpoint(&format!("/downloads/{id}"));
        info!("DELETE {url}");
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;
        error_for_status(response).await?;
        Ok(())
    }
}
