//! PubMed access through NCBI E-utilities.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use urlencoding::encode;

use crate::{config::Settings, error::LiteratureError};

/// Search-then-fetch access to a literature database.
#[async_trait]
pub trait LiteratureSearch: Send + Sync {
    /// Return up to `max` identifiers matching the unencoded boolean `term`.
    async fn search(&self, term: &str, max: usize) -> Result<Vec<String>, LiteratureError>;

    /// Return the plain-text abstract for one identifier.
    async fn fetch_abstract(&self, id: &str) -> Result<String, LiteratureError>;
}

/// E-utilities client (`esearch` + `efetch`).
#[derive(Debug, Clone)]
pub struct PubmedClient {
    http: Client,
    base_url: String,
    tool: String,
    email: String,
    api_key: Option<String>,
}

impl PubmedClient {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            http: http_client(settings)?,
            base_url: settings.pubmed_base_url.trim_end_matches('/').to_string(),
            tool: settings.pubmed_tool.clone(),
            email: settings.pubmed_email.clone(),
            api_key: settings.pubmed_api_key.clone(),
        })
    }

    pub fn esearch_url(&self, term: &str, max: usize) -> String {
        format!(
            "{base}/esearch.fcgi?db=pubmed&term={term}&retmode=json&retmax={max}{courtesy}",
            base = self.base_url,
            term = encode(term),
            max = max,
            courtesy = self.courtesy_params(),
        )
    }

    pub fn efetch_url(&self, id: &str) -> String {
        format!(
            "{base}/efetch.fcgi?db=pubmed&id={id}&retmode=text&rettype=abstract{courtesy}",
            base = self.base_url,
            id = encode(id),
            courtesy = self.courtesy_params(),
        )
    }

    fn courtesy_params(&self) -> String {
        let mut params = format!("&tool={}&email={}", encode(&self.tool), encode(&self.email));
        if let Some(key) = &self.api_key {
            params.push_str("&api_key=");
            params.push_str(&encode(key));
        }
        params
    }
}

#[async_trait]
impl LiteratureSearch for PubmedClient {
    async fn search(&self, term: &str, max: usize) -> Result<Vec<String>, LiteratureError> {
        let url = self.esearch_url(term, max);
        debug!(%url, "esearch");
        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let payload: ESearchResponse = serde_json::from_str(&body)?;
        payload
            .esearchresult
            .and_then(|result| result.idlist)
            .ok_or(LiteratureError::MissingIdList)
    }

    async fn fetch_abstract(&self, id: &str) -> Result<String, LiteratureError> {
        let url = self.efetch_url(id);
        debug!(%url, "efetch");
        let text = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(text.trim().to_string())
    }
}

fn http_client(settings: &Settings) -> anyhow::Result<Client> {
    Ok(Client::builder()
        .user_agent(format!("supplement-check/0.1 (+{})", settings.pubmed_email))
        .gzip(true)
        .brotli(true)
        .build()?)
}

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    esearchresult: Option<ESearchResult>,
}

#[derive(Debug, Deserialize)]
struct ESearchResult {
    idlist: Option<Vec<String>>,
}
