//! Evidence gathering from the literature database.

pub mod pubmed;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::error::LiteratureError;

use self::pubmed::LiteratureSearch;

/// Returned as the unavailable reason when a search matches nothing.
pub const NO_STUDIES_FOUND: &str = "No studies found.";

/// One matched study and its abstract (or a fetch-error placeholder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub id: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl StudyRecord {
    pub fn new(id: impl Into<String>, abstract_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            abstract_text: abstract_text.into(),
        }
    }
}

/// Outcome of the evidence step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evidence {
    /// Studies in search order. May be empty.
    Found(Vec<StudyRecord>),
    /// Why no evidence could be gathered.
    Unavailable(String),
}

/// Boolean query asking for both supplements plus an interaction cue.
pub fn search_term(supplement_a: &str, supplement_b: &str) -> String {
    format!("({supplement_a}) AND ({supplement_b}) AND (interaction OR combined)")
}

/// Search for studies mentioning both supplements and fetch each abstract.
///
/// Never fails: search problems become [`Evidence::Unavailable`], and a
/// failed abstract fetch becomes a placeholder for that study only.
#[instrument(skip(client))]
pub async fn fetch_evidence(
    client: &dyn LiteratureSearch,
    supplement_a: &str,
    supplement_b: &str,
    max_results: usize,
) -> Evidence {
    let term = search_term(supplement_a, supplement_b);
    let ids = match client.search(&term, max_results).await {
        Ok(ids) => ids,
        Err(LiteratureError::MissingIdList) => {
            warn!("search response lacked an id list");
            return Evidence::Unavailable(NO_STUDIES_FOUND.to_string());
        }
        Err(err @ LiteratureError::Parse(_)) => {
            warn!(%err, "unparseable search response");
            return Evidence::Unavailable(format!("Error parsing PubMed response: {err}"));
        }
        Err(err) => {
            warn!(%err, "search request failed");
            return Evidence::Unavailable(format!("Error querying PubMed: {err}"));
        }
    };

    if ids.is_empty() {
        info!("search returned no identifiers");
        return Evidence::Unavailable(NO_STUDIES_FOUND.to_string());
    }

    info!(count = ids.len(), "fetching abstracts");
    let mut studies = Vec::with_capacity(ids.len());
    for id in ids {
        let abstract_text = match client.fetch_abstract(&id).await {
            Ok(text) => text,
            Err(err) => {
                warn!(%id, %err, "abstract fetch failed");
                format!("Error fetching abstract: {err}")
            }
        };
        studies.push(StudyRecord { id, abstract_text });
    }
    Evidence::Found(studies)
}
