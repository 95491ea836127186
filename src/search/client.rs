use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::SearchConfig;
use crate::errors::{RagError, RagResult};
use crate::search::query;
use crate::search::retriever::Retriever;
use crate::search::types::{SearchHit, SearchResponse};

/// HTTP client for an Elasticsearch-compatible engine, bound to one index.
pub struct ElasticClient {
    config: SearchConfig,
    client: reqwest::Client,
}

impl ElasticClient {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn index_name(&self) -> &str {
        &self.config.index
    }

    fn index_url(&self) -> String {
        format!("{}/{}", self.config.url.trim_end_matches('/'), self.config.index)
    }

    /// `HEAD /{index}`: 200 means present, 404 absent, anything else is an error.
    pub async fn index_exists(&self) -> RagResult<bool> {
        let response = self.client.head(self.index_url()).send().await?;
        match response.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(RagError::Search(format!(
                "unexpected status {} checking index '{}'",
                status, self.config.index
            ))),
        }
    }

    /// `PUT /{index}` with the two-field text mapping.
    pub async fn create_index(&self) -> RagResult<()> {
        let body = query::index_body(&self.config);
        tracing::debug!(index = %self.config.index, body = %body, "creating index");

        let response = self.client.put(self.index_url()).json(&body).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let err_body = response.text().await.unwrap_or_default();
            return Err(RagError::Search(format!("{}: {}", status, err_body)));
        }
        Ok(())
    }

    pub async fn search(&self, text: &str) -> RagResult<Vec<SearchHit>> {
        let body = query::search_body(text, &self.config);
        tracing::debug!(index = %self.config.index, query = %text, "sending search request");

        let response = self
            .client
            .post(format!("{}/_search", self.index_url()))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let err_body = response.text().await.unwrap_or_default();
            return Err(RagError::Search(format!("{}: {}", status, err_body)));
        }

        let parsed: SearchResponse = response.json().await?;
        let mut hits = parsed.hits.hits;
        hits.truncate(self.config.result_size);

        tracing::info!(
            index = %self.config.index,
            hits = hits.len(),
            top_score = ?hits.first().and_then(|h| h.score),
            "search complete"
        );
        Ok(hits)
    }
}

#[async_trait]
impl Retriever for ElasticClient {
    async fn search(&self, query: &str) -> RagResult<Vec<SearchHit>> {
        ElasticClient::search(self, query).await
    }
}
