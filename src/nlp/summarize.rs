//! Interaction summaries generated from study abstracts.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::data::{Evidence, StudyRecord};

use super::openai::{ChatCompletionRequest, Message, TextGenerator};

pub const MODEL: &str = "gpt-3.5-turbo";
pub const TEMPERATURE: f32 = 0.5;
pub const MAX_TOKENS: u32 = 500;
/// Studies included in the prompt.
pub const MAX_STUDIES: usize = 5;
/// Characters kept from each abstract.
pub const MAX_ABSTRACT_CHARS: usize = 500;

pub const MISSING_API_KEY: &str = "Error: OpenAI API key not set.";
const SYSTEM_PROMPT: &str = "You are a helpful medical research assistant.";

/// Turns evidence into a prose summary via a [`TextGenerator`].
#[derive(Clone)]
pub struct Summarizer {
    api_key: Option<String>,
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    pub fn new(api_key: Option<String>, generator: Arc<dyn TextGenerator>) -> Self {
        Self { api_key, generator }
    }

    /// Produce the summary, or a descriptive message when none can be made.
    ///
    /// The generator is only called when a credential is configured and at
    /// least one study was found.
    #[instrument(skip(self, evidence))]
    pub async fn summarize(
        &self,
        supplement_a: &str,
        supplement_b: &str,
        evidence: &Evidence,
    ) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("no text generation credential configured");
            return MISSING_API_KEY.to_string();
        };

        let studies = match evidence {
            Evidence::Unavailable(reason) => {
                return format!(
                    "Could not find studies about {supplement_a} and {supplement_b} interactions: {reason}"
                );
            }
            Evidence::Found(studies) if studies.is_empty() => {
                return format!(
                    "No studies found that discuss interactions between {supplement_a} and {supplement_b}."
                );
            }
            Evidence::Found(studies) => studies,
        };

        let request = build_request(supplement_a, supplement_b, studies);
        info!(studies = studies.len().min(MAX_STUDIES), "requesting summary");
        match self.generator.generate(api_key, &request).await {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "summary generation failed");
                format!("Error analyzing interactions: {err}")
            }
        }
    }
}

/// Numbered block of the first [`MAX_STUDIES`] abstracts, each cut to
/// [`MAX_ABSTRACT_CHARS`] characters.
pub fn evidence_block(studies: &[StudyRecord]) -> String {
    studies
        .iter()
        .take(MAX_STUDIES)
        .enumerate()
        .map(|(i, study)| {
            let excerpt: String = study
                .abstract_text
                .chars()
                .take(MAX_ABSTRACT_CHARS)
                .collect();
            format!("Study {}: {excerpt}", i + 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(supplement_a: &str, supplement_b: &str, studies: &[StudyRecord]) -> String {
    let block = evidence_block(studies);
    format!(
        "You are a medical research assistant analyzing supplement interactions.
Analyze the following PubMed studies regarding interactions between {supplement_a} and {supplement_b}:

{block}

Based on these studies, summarize:
1. Known interactions between {supplement_a} and {supplement_b}
2. Strength of evidence (strong, moderate, weak, or inconclusive)
3. Safety concerns or recommendations
4. Any positive synergistic effects

If contradictions exist, note them. If studies don't directly address interactions, state that clearly."
    )
}

pub fn build_request(
    supplement_a: &str,
    supplement_b: &str,
    studies: &[StudyRecord],
) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(build_prompt(supplement_a, supplement_b, studies)),
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}
