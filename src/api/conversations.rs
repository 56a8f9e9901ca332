// Conversation creation against the Tavus API.
//
// This is the only outbound call the wizard makes: a single best-effort
// POST, no retry, no backoff. Every failure kind is normalized into one
// human-readable message at the state-merge point.

use std::time::Duration;

use log::info;
use thiserror::Error;

use crate::models::requests::CreateConversationRequest;
use crate::models::responses::{ApiErrorBody, CreateConversationResponse};
use crate::models::state::ConversationState;
use crate::utils::logging::mask_sensitive;

pub const DEFAULT_BASE_URL: &str = "https://api.tavus.io";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(12);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status; `message` comes from the
    /// response body when present.
    #[error("{message}")]
    Rejected { message: String },
    #[error("malformed response from server")]
    MalformedResponse,
}

pub async fn create_conversation(
    base_url: &str,
    api_key: &str,
    state: &ConversationState,
) -> Result<CreateConversationResponse, ApiError> {
    let url = format!("{}/v2/conversations", base_url.trim_end_matches('/'));
    let payload = CreateConversationRequest::from_state(state);

    info!(
        "[PHASE: api] [STEP: create_conversation] POST {} (key {})",
        url,
        mask_sensitive(api_key)
    );

    let client = reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let resp = client
        .post(&url)
        .header("x-api-key", api_key)
        .json(&payload)
        .send()
        .await?;

    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP {}", status));
        return Err(ApiError::Rejected { message });
    }

    serde_json::from_str::<CreateConversationResponse>(&body)
        .map_err(|_| ApiError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn successful_call_returns_url_and_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/conversations"))
            .and(header("x-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "conversation_url": "https://tavus.daily.co/c123",
                "conversation_id": "c123"
            })))
            .mount(&server)
            .await;

        let state = ConversationState::default();
        let resp = create_conversation(&server.uri(), "test-key", &state)
            .await
            .unwrap();

        assert_eq!(
            resp.conversation_url.as_deref(),
            Some("https://tavus.daily.co/c123")
        );
        assert_eq!(resp.conversation_id.as_deref(), Some("c123"));
    }

    #[tokio::test]
    async fn payload_duration_falls_back_to_3600_for_non_numeric_input() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/conversations"))
            .and(body_partial_json(json!({
                "properties": { "max_call_duration": 3600 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "conversation_id": "c1"
            })))
            .mount(&server)
            .await;

        let mut state = ConversationState::default();
        state.max_duration = "abc".to_string();

        let resp = create_conversation(&server.uri(), "k", &state).await;
        assert!(resp.is_ok(), "payload did not carry the 3600 fallback");
    }

    #[tokio::test]
    async fn rejected_call_surfaces_body_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/conversations"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "invalid key" })),
            )
            .mount(&server)
            .await;

        let state = ConversationState::default();
        let err = create_conversation(&server.uri(), "bad", &state)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "invalid key");
    }

    #[tokio::test]
    async fn rejected_call_without_body_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/conversations"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = ConversationState::default();
        let err = create_conversation(&server.uri(), "k", &state)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("HTTP 500"));
    }

    #[tokio::test]
    async fn malformed_success_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/conversations"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let state = ConversationState::default();
        let err = create_conversation(&server.uri(), "k", &state)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MalformedResponse));
    }
}
