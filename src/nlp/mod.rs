//! Text generation layer.

pub mod openai;
pub mod summarize;

pub use openai::{OpenAiClient, TextGenerator};
pub use summarize::Summarizer;
