pub mod client;
pub mod provisioner;
pub mod query;
pub mod retriever;
pub mod types;
