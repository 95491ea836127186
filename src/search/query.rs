//! Request bodies for the search engine.

use serde_json::{json, Value};

use crate::config::SearchConfig;
use crate::search::types::{CONTEXT_FIELD, RESPONSE_FIELD};

/// `field^boost`, or the bare field name when the boost is neutral.
fn boosted(field: &str, boost: f64) -> String {
    if boost == 1.0 {
        field.to_string()
    } else {
        format!("{field}^{boost}")
    }
}

/// Multi-field match over `Context` and `Response`, summing per-field scores (`most_fields`).
pub fn search_body(query: &str, cfg: &SearchConfig) -> Value {
    json!({
        "size": cfg.result_size,
        "query": {
            "bool": {
                "must": {
                    "multi_match": {
                        "query": query,
                        "fields": [
                            boosted(CONTEXT_FIELD, cfg.context_boost),
                            boosted(RESPONSE_FIELD, cfg.response_boost),
                        ],
                        "type": "most_fields",
                    }
                }
            }
        }
    })
}

/// Settings and mapping used when the index is created.
pub fn index_body(cfg: &SearchConfig) -> Value {
    json!({
        "settings": {
            "number_of_shards": cfg.shards,
            "number_of_replicas": cfg.replicas,
        },
        "mappings": {
            "properties": {
                CONTEXT_FIELD: { "type": "text" },
                RESPONSE_FIELD: { "type": "text" },
            }
        }
    })
}
