use serde::{Deserialize, Serialize};

/// Document field holding the patient's message.
pub const CONTEXT_FIELD: &str = "Context";
/// Document field holding the counselor's reply.
pub const RESPONSE_FIELD: &str = "Response";

/// A stored counseling exchange. Either field may be missing in the index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(rename = "Response", default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl Record {
    pub fn new(context: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            context: Some(context.into()),
            response: Some(response.into()),
        }
    }
}

/// One ranked match, shaped like an entry of `hits.hits` in a search response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    /// Null when the engine did not score the hit.
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source", default)]
    pub source: Record,
}

impl SearchHit {
    pub fn from_record(record: Record) -> Self {
        Self {
            id: None,
            score: None,
            source: record,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HitsEnvelope {
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}
