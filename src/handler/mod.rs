//! Request handling: validate, gather evidence, summarize, respond.

pub mod types;
pub mod validate;

use std::{any::Any, panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::{
    config::Settings,
    data::{self, pubmed::LiteratureSearch, pubmed::PubmedClient},
    error::HandlerError,
    nlp::{OpenAiClient, Summarizer},
};

pub use types::{HandlerEvent, HandlerResponse, SupplementPair};
pub use validate::validate_input;

/// Stateless request handler. One call per request.
#[derive(Clone)]
pub struct Handler {
    literature: Arc<dyn LiteratureSearch>,
    summarizer: Summarizer,
    max_results: usize,
}

impl Handler {
    pub fn new(
        literature: Arc<dyn LiteratureSearch>,
        summarizer: Summarizer,
        max_results: usize,
    ) -> Self {
        Self {
            literature,
            summarizer,
            max_results,
        }
    }

    /// Wire the PubMed and OpenAI clients from configuration.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let literature = Arc::new(PubmedClient::new(settings)?);
        let generator = Arc::new(OpenAiClient::new(settings)?);
        let summarizer = Summarizer::new(settings.openai_api_key.clone(), generator);
        Ok(Self::new(literature, summarizer, settings.max_pubmed_results))
    }

    /// Handle one event. Always produces a response.
    #[instrument(skip_all)]
    pub async fn handle(&self, event: HandlerEvent) -> HandlerResponse {
        match self.try_handle(event).await {
            Ok(result) => HandlerResponse::success(&result),
            Err(err) => reject(&err),
        }
    }

    async fn try_handle(&self, event: HandlerEvent) -> Result<String, HandlerError> {
        let pair = parse_request(event.body.as_deref().unwrap_or("{}"))?;
        AssertUnwindSafe(self.analyze(&pair))
            .catch_unwind()
            .await
            .map_err(|panic| HandlerError::Internal(panic_message(panic.as_ref())))
    }

    /// Evidence then summary for an already validated pair.
    pub async fn analyze(&self, pair: &SupplementPair) -> String {
        info!(
            supplement_a = %pair.name_a,
            supplement_b = %pair.name_b,
            "querying PubMed for interactions"
        );
        let evidence = data::fetch_evidence(
            self.literature.as_ref(),
            &pair.name_a,
            &pair.name_b,
            self.max_results,
        )
        .await;

        info!("analyzing interactions");
        self.summarizer
            .summarize(&pair.name_a, &pair.name_b, &evidence)
            .await
    }
}

/// Parse and validate a raw request body.
pub fn parse_request(raw: &str) -> Result<SupplementPair, HandlerError> {
    let value: Value =
        serde_json::from_str(raw).map_err(|err| HandlerError::InvalidJson(err.to_string()))?;
    let Value::Object(body) = value else {
        return Err(HandlerError::MissingSupplements);
    };
    match validate_input(&body) {
        (true, name_a, name_b) => Ok(SupplementPair { name_a, name_b }),
        _ => Err(HandlerError::MissingSupplements),
    }
}

/// Log a request failure and turn it into the caller-facing response.
pub fn reject(err: &HandlerError) -> HandlerResponse {
    match err {
        HandlerError::InvalidJson(detail) => error!(%detail, "invalid JSON in request body"),
        HandlerError::MissingSupplements => warn!("invalid input: missing supplement names"),
        HandlerError::Internal(detail) => error!(%detail, "unexpected error"),
    }
    HandlerResponse::error(err.status_code(), &err.to_string())
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "pipeline panicked".to_string()
    }
}
