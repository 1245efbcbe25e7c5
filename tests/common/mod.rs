#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc, sync::Mutex};

use async_trait::async_trait;
use supplement_check::{
    data::pubmed::LiteratureSearch,
    error::{GenerationError, LiteratureError},
    handler::Handler,
    nlp::{openai::ChatCompletionRequest, Summarizer, TextGenerator},
};

pub enum SearchBehavior {
    Ids(Vec<&'static str>),
    MissingIdList,
    Unparseable,
    Unreachable,
    Panic,
}

pub struct FakeLiterature {
    behavior: SearchBehavior,
    abstracts: HashMap<String, String>,
    pub searches: Mutex<Vec<(String, usize)>>,
    pub fetches: Mutex<Vec<String>>,
}

impl FakeLiterature {
    pub fn new(behavior: SearchBehavior) -> Self {
        Self {
            behavior,
            abstracts: HashMap::new(),
            searches: Mutex::new(Vec::new()),
            fetches: Mutex::new(Vec::new()),
        }
    }

    /// Ids without an abstract fail to fetch.
    pub fn with_abstract(mut self, id: &str, text: &str) -> Self {
        self.abstracts.insert(id.to_string(), text.to_string());
        self
    }
}

pub fn parse_error() -> serde_json::Error {
    serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
}

pub async fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .send()
        .await
        .unwrap_err()
}

#[async_trait]
impl LiteratureSearch for FakeLiterature {
    async fn search(&self, term: &str, max: usize) -> Result<Vec<String>, LiteratureError> {
        self.searches.lock().unwrap().push((term.to_string(), max));
        match &self.behavior {
            SearchBehavior::Ids(ids) => Ok(ids.iter().map(|id| id.to_string()).collect()),
            SearchBehavior::MissingIdList => Err(LiteratureError::MissingIdList),
            SearchBehavior::Unparseable => Err(LiteratureError::Parse(parse_error())),
            SearchBehavior::Unreachable => Err(LiteratureError::Transport(transport_error().await)),
            SearchBehavior::Panic => panic!("search exploded"),
        }
    }

    async fn fetch_abstract(&self, id: &str) -> Result<String, LiteratureError> {
        self.fetches.lock().unwrap().push(id.to_string());
        self.abstracts
            .get(id)
            .cloned()
            .ok_or_else(|| LiteratureError::Parse(parse_error()))
    }
}

pub struct FakeGenerator {
    reply: Option<String>,
    pub requests: Mutex<Vec<(String, ChatCompletionRequest)>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        let (_, request) = requests.last().expect("generator was called");
        request.messages.last().expect("user message").content.clone()
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<String, GenerationError> {
        self.requests
            .lock()
            .unwrap()
            .push((api_key.to_string(), request.clone()));
        self.reply.clone().ok_or(GenerationError::EmptyCompletion)
    }
}

pub fn summarizer(generator: &Arc<FakeGenerator>) -> Summarizer {
    Summarizer::new(Some("test-key".to_string()), generator.clone())
}

pub fn handler(literature: FakeLiterature, generator: &Arc<FakeGenerator>) -> Handler {
    Handler::new(Arc::new(literature), summarizer(generator), 10)
}
