// Wire-format response DTOs for the Tavus API.

use serde::Deserialize;

/// Successful conversation creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConversationResponse {
    #[serde(default)]
    pub conversation_url: Option<String>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Error body returned by the API on a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_tolerates_missing_fields() {
        let resp: CreateConversationResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.conversation_url.is_none());
        assert!(resp.conversation_id.is_none());
    }

    #[test]
    fn error_body_extracts_message() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"invalid key"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("invalid key"));
    }
}
