pub mod pipeline;

pub use pipeline::{Answer, RagPipeline};
