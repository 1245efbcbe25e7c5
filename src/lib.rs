//! Supplement interaction checks backed by PubMed evidence and an LLM summary.

pub mod api;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod handler;
pub mod logging;
pub mod nlp;
