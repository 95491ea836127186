pub mod builder;
pub mod templates;

pub use builder::{build_prompt, PromptBuilder};
