use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use supplement_check::{
    config::Settings,
    data::StudyRecord,
    error::GenerationError,
    nlp::{summarize::build_request, OpenAiClient, TextGenerator},
};
use tokio::net::TcpListener;

async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

async fn completions(headers: HeaderMap, Json(request): Json<Value>) -> impl IntoResponse {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer good-key");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}})),
        );
    }
    let well_formed = request["model"] == "gpt-3.5-turbo"
        && request["temperature"] == 0.5
        && request["max_tokens"] == 500
        && request["messages"][0]["role"] == "system"
        && request["messages"][1]["role"] == "user";
    if !well_formed {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": {"message": "bad request"}})));
    }
    (
        StatusCode::OK,
        Json(json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "Moderate evidence."}, "finish_reason": "stop"}]
        })),
    )
}

fn client(base: String) -> OpenAiClient {
    let settings = Settings {
        openai_base_url: base,
        ..Settings::default()
    };
    OpenAiClient::new(&settings).unwrap()
}

#[tokio::test]
async fn returns_first_choice_content() {
    let base = spawn(Router::new().route("/v1/chat/completions", post(completions))).await;
    let request = build_request("Vitamin C", "Iron", &[StudyRecord::new("1", "abstract")]);

    let text = client(base).generate("good-key", &request).await.unwrap();

    assert_eq!(text, "Moderate evidence.");
}

#[tokio::test]
async fn upstream_error_message_is_surfaced() {
    let base = spawn(Router::new().route("/v1/chat/completions", post(completions))).await;
    let request = build_request("Vitamin C", "Iron", &[StudyRecord::new("1", "abstract")]);

    let err = client(base).generate("bad-key", &request).await.unwrap_err();

    match err {
        GenerationError::Upstream { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let base = spawn(router).await;
    let request = build_request("A", "B", &[StudyRecord::new("1", "abstract")]);

    let err = client(base).generate("any", &request).await.unwrap_err();

    assert!(matches!(err, GenerationError::EmptyCompletion));
}
