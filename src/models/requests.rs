// Wire-format request DTOs for the Tavus API.

use serde::Serialize;

use crate::models::state::ConversationState;

#[derive(Debug, Clone, Serialize)]
pub struct CreateConversationRequest {
    pub replica_id: String,
    pub persona_id: String,
    pub callback_url: String,
    pub conversation_name: String,
    pub conversational_context: String,
    pub custom_greeting: String,
    pub language: String,
    pub properties: ConversationPropertiesDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationPropertiesDto {
    pub max_call_duration: u32,
    pub participant_left_timeout: u32,
    pub participant_absent_timeout: u32,
    pub enable_recording: bool,
    pub enable_transcription: bool,
    pub apply_greenscreen: bool,
}

impl CreateConversationRequest {
    /// Build the wire payload from the wizard state.
    ///
    /// The call duration is parsed from the free-text field with a 3600 s
    /// fallback. The snippet preview parses the same field with a 300 s
    /// fallback; the two paths are independent.
    pub fn from_state(state: &ConversationState) -> Self {
        Self {
            replica_id: state.replica_id.clone(),
            persona_id: state.persona_id.clone(),
            callback_url: state.callback_url.clone(),
            conversation_name: state.conversation_name.clone(),
            conversational_context: state.context.clone(),
            custom_greeting: state.custom_greeting.clone(),
            language: state.language.clone(),
            properties: ConversationPropertiesDto {
                max_call_duration: state.max_duration.trim().parse().unwrap_or(3600),
                participant_left_timeout: state.properties.participant_left_timeout,
                participant_absent_timeout: state.properties.participant_absent_timeout,
                enable_recording: state.properties.enable_recording,
                enable_transcription: state.properties.enable_transcription,
                apply_greenscreen: state.properties.apply_greenscreen,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_duration_falls_back_to_3600() {
        let mut state = ConversationState::default();
        state.max_duration = "abc".to_string();

        let payload = CreateConversationRequest::from_state(&state);
        assert_eq!(payload.properties.max_call_duration, 3600);
    }

    #[test]
    fn numeric_duration_is_parsed() {
        let mut state = ConversationState::default();
        state.max_duration = " 120 ".to_string();

        let payload = CreateConversationRequest::from_state(&state);
        assert_eq!(payload.properties.max_call_duration, 120);
    }

    #[test]
    fn payload_uses_snake_case_wire_names() {
        let mut state = ConversationState::default();
        state.replica_id = "rep1".to_string();
        state.context = "ctx".to_string();
        state.properties.enable_transcription = true;

        let value = serde_json::to_value(CreateConversationRequest::from_state(&state)).unwrap();
        assert_eq!(value["replica_id"], "rep1");
        assert_eq!(value["conversational_context"], "ctx");
        assert_eq!(value["properties"]["enable_transcription"], true);
        assert_eq!(value["properties"]["participant_left_timeout"], 30);
    }
}
