//! Runtime configuration utilities for supplement-check.

use std::env;

use serde::Deserialize;

const DEFAULT_EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Credential for the text-generation service. Absence is not fatal.
    pub openai_api_key: Option<String>,
    /// Root of the OpenAI-compatible API.
    pub openai_base_url: String,
    /// Root of the NCBI E-utilities API.
    pub pubmed_base_url: String,
    /// Optional NCBI API key appended to E-utilities requests.
    pub pubmed_api_key: Option<String>,
    /// Contact email for PubMed E-utilities courtesy policy.
    pub pubmed_email: String,
    /// Tool name sent with PubMed requests.
    pub pubmed_tool: String,
    /// Identifiers requested from the search step.
    pub max_pubmed_results: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let openai_api_key = non_empty_var("OPENAI_API_KEY");
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_OPENAI_BASE.to_string());
        let pubmed_base_url =
            env::var("PUBMED_API_URL").unwrap_or_else(|_| DEFAULT_EUTILS_BASE.to_string());
        let pubmed_api_key = non_empty_var("PUBMED_API_KEY");
        let pubmed_email =
            env::var("PUBMED_EMAIL").unwrap_or_else(|_| "research@example.com".to_string());
        let pubmed_tool =
            env::var("PUBMED_TOOL").unwrap_or_else(|_| "supplement_check".to_string());
        let max_pubmed_results = env::var("MAX_PUBMED_RESULTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            openai_api_key,
            openai_base_url: openai_base_url.trim_end_matches('/').to_string(),
            pubmed_base_url: pubmed_base_url.trim_end_matches('/').to_string(),
            pubmed_api_key,
            pubmed_email,
            pubmed_tool,
            max_pubmed_results,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE.to_string(),
            pubmed_base_url: DEFAULT_EUTILS_BASE.to_string(),
            pubmed_api_key: None,
            pubmed_email: "research@example.com".to_string(),
            pubmed_tool: "supplement_check".to_string(),
            max_pubmed_results: 10,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
