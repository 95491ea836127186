use crate::errors::RagResult;
use crate::search::client::ElasticClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexStatus {
    Created,
    AlreadyExists,
}

/// Create the client's index unless it is already present. Safe to call on every start.
pub async fn ensure_index(client: &ElasticClient) -> RagResult<IndexStatus> {
    if client.index_exists().await? {
        tracing::info!(index = %client.index_name(), "index exists");
        return Ok(IndexStatus::AlreadyExists);
    }

    client.create_index().await?;
    tracing::info!(index = %client.index_name(), "index created");
    Ok(IndexStatus::Created)
}
