//! HTTP route handlers for Axum.

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::{
    error::HandlerError,
    handler::{reject, HandlerEvent, HandlerResponse},
};

use super::AppState;

/// `POST /analyze`: the raw body goes to the handler untouched. A body that
/// is not UTF-8 cannot be JSON and gets the same 400 as malformed JSON.
pub async fn analyze(State(state): State<AppState>, body: Bytes) -> Response {
    let response = match String::from_utf8(body.to_vec()) {
        Ok(body) => state.handler.handle(HandlerEvent::from_body(body)).await,
        Err(err) => reject(&HandlerError::InvalidJson(err.to_string())),
    };
    into_http(response)
}

fn into_http(response: HandlerResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut http = (status, response.body).into_response();
    let headers = http.headers_mut();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in &response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!(%name, "dropping unrepresentable response header"),
        }
    }
    http
}
