// Code-snippet generation.
//
// Each wizard tab maps to one fixed JavaScript template; field values are
// interpolated from an immutable snapshot of the wizard state. These are
// pure functions so the preview pane can recompute on every frame without
// hidden state reads.

use crate::models::state::{ConversationState, VideoState, WizardSelection};

/// Literal emitted in place of the API key while the field is empty.
pub const PLACEHOLDER_API_KEY: &str = "ffvfdvfdvdg";

/// Snapshot of the controller-level fields the templates draw from.
#[derive(Debug, Clone, Copy)]
pub struct SnippetInputs<'a> {
    pub api_key: &'a str,
    pub selected_replica: &'a str,
    pub video_script: &'a str,
    // Part of the snippet input set; no template reads it today.
    #[allow(dead_code)]
    pub persona_context: &'a str,
}

pub fn generate(
    selection: WizardSelection,
    inputs: &SnippetInputs<'_>,
    conversation: &ConversationState,
    video: &VideoState,
) -> String {
    match selection {
        WizardSelection::ReplicaPersona => replica_persona(inputs.api_key),
        WizardSelection::Conversation => {
            conversation_snippet(inputs.api_key, inputs.selected_replica, conversation)
        }
        WizardSelection::Video => video_snippet(
            inputs.api_key,
            inputs.selected_replica,
            inputs.video_script,
            video,
        ),
    }
}

fn key_or_placeholder(api_key: &str) -> &str {
    if api_key.is_empty() {
        PLACEHOLDER_API_KEY
    } else {
        api_key
    }
}

/// Empty fields render as the literal `undefined`, not an empty string.
fn quoted_or_undefined(value: &str) -> String {
    if value.is_empty() {
        "undefined".to_string()
    } else {
        format!("'{}'", value)
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Integer coercion for the scroll-depth text; non-numeric renders as `NaN`.
fn int_or_nan(raw: &str) -> String {
    raw.trim()
        .parse::<i64>()
        .map(|n| n.to_string())
        .unwrap_or_else(|_| "NaN".to_string())
}

pub fn replica_persona(api_key: &str) -> String {
    format!(
        r#"// Replica and Persona Management
const tavus = new TavusClient({{
  apiKey: '{key}',
}});

const createReplica = async () => {{
  const replica = await tavus.replicas.create({{
    name: 'New Replica',
    trainingVideo: './video.mp4'
  }});
  console.log('Created replica:', replica);
}};"#,
        key = key_or_placeholder(api_key)
    )
}

pub fn conversation_snippet(
    api_key: &str,
    selected_replica: &str,
    state: &ConversationState,
) -> String {
    format!(
        r#"// Conversation Management
const tavus = new TavusClient({{
  apiKey: '{key}',
}});

const startConversation = async () => {{
  const conversation = await tavus.conversations.create({{
    replica_id: '{replica}',
    name: '{name}',
    settings: {{
      recording_enabled: {recording},
      auto_end: {auto_end},
      max_duration: {max_duration},
      language: '{language}',
      pipeline_mode: '{pipeline}',
      custom_greeting: {greeting},
      context: {context}
    }}
  }});
  console.log('Started conversation:', conversation);
}};

const endConversation = async (conversationId) => {{
  await tavus.conversations.end(conversationId);
  console.log('Ended conversation:', conversationId);
}};

// Example usage:
startConversation()
  .then(() => console.log('Conversation started successfully'))
  .catch(console.error);"#,
        key = key_or_placeholder(api_key),
        replica = selected_replica,
        name = state.conversation_name,
        recording = state.recording_enabled,
        auto_end = state.auto_end_enabled,
        max_duration = state.max_duration.trim().parse::<i64>().unwrap_or(300),
        language = or_default(&state.language, "en"),
        pipeline = or_default(&state.pipeline_mode, "full"),
        greeting = quoted_or_undefined(&state.custom_greeting),
        context = quoted_or_undefined(&state.context),
    )
}

pub fn video_snippet(
    api_key: &str,
    selected_replica: &str,
    script: &str,
    state: &VideoState,
) -> String {
    // The properties object is emitted only when a background URL is set.
    let properties = if state.background_url.is_empty() {
        "undefined".to_string()
    } else {
        let scroll = &state.scroll_settings;
        format!(
            r#"{{
      background_scroll: {},
      background_scroll_type: '{}',
      background_scroll_depth: {},
      background_scroll_return: {},
    }}"#,
            scroll.scroll,
            scroll.scroll_type,
            int_or_nan(&scroll.scroll_depth),
            scroll.scroll_return,
        )
    };

    format!(
        r#"// Video Generation
const tavus = new TavusClient({{
  apiKey: '{key}',
}});

const generateVideo = async () => {{
  const video = await tavus.videos.generate({{
    replicaId: '{replica}',
    script: `{script}`,
    videoName: '{name}',
    backgroundUrl: {background_url},
    backgroundSourceUrl: {background_source_url},
    fast: {fast},
    language: '{language}',
    properties: {properties}
  }});
  console.log('Generated video:', video);
}};"#,
        key = key_or_placeholder(api_key),
        replica = selected_replica,
        script = script,
        name = state.video_name,
        background_url = quoted_or_undefined(&state.background_url),
        background_source_url = quoted_or_undefined(&state.background_source_url),
        fast = state.fast_rendering,
        language = state.language,
        properties = properties,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs<'a>(api_key: &'a str, replica: &'a str, script: &'a str) -> SnippetInputs<'a> {
        SnippetInputs {
            api_key,
            selected_replica: replica,
            video_script: script,
            persona_context: "",
        }
    }

    fn all_selections() -> [WizardSelection; 3] {
        [
            WizardSelection::ReplicaPersona,
            WizardSelection::Conversation,
            WizardSelection::Video,
        ]
    }

    #[test]
    fn every_snippet_has_exactly_one_client_construction() {
        let conversation = ConversationState::default();
        let video = VideoState::default();
        for selection in all_selections() {
            let snippet = generate(
                selection,
                &inputs("tv-key-1234", "rep1", "hello"),
                &conversation,
                &video,
            );
            assert_eq!(
                snippet.matches("new TavusClient").count(),
                1,
                "selection {:?}",
                selection
            );
            assert!(snippet.contains("apiKey: 'tv-key-1234'"));
        }
    }

    #[test]
    fn empty_api_key_renders_placeholder() {
        let conversation = ConversationState::default();
        let video = VideoState::default();
        for selection in all_selections() {
            let snippet = generate(selection, &inputs("", "", ""), &conversation, &video);
            assert!(
                snippet.contains(&format!("apiKey: '{}'", PLACEHOLDER_API_KEY)),
                "selection {:?}",
                selection
            );
        }
    }

    #[test]
    fn non_numeric_duration_falls_back_to_300() {
        let mut state = ConversationState::default();
        state.max_duration = "abc".to_string();

        let snippet = conversation_snippet("k", "rep1", &state);
        assert!(snippet.contains("max_duration: 300,"));
    }

    #[test]
    fn empty_greeting_and_context_render_undefined() {
        let state = ConversationState::default();
        let snippet = conversation_snippet("k", "rep1", &state);
        assert!(snippet.contains("custom_greeting: undefined,"));
        assert!(snippet.contains("context: undefined"));
    }

    #[test]
    fn filled_greeting_is_quoted() {
        let mut state = ConversationState::default();
        state.custom_greeting = "Welcome!".to_string();

        let snippet = conversation_snippet("k", "rep1", &state);
        assert!(snippet.contains("custom_greeting: 'Welcome!',"));
    }

    #[test]
    fn empty_language_and_pipeline_fall_back() {
        let mut state = ConversationState::default();
        state.language = String::new();
        state.pipeline_mode = String::new();

        let snippet = conversation_snippet("k", "rep1", &state);
        assert!(snippet.contains("language: 'en',"));
        assert!(snippet.contains("pipeline_mode: 'full',"));
    }

    #[test]
    fn empty_background_url_renders_undefined_properties() {
        let state = VideoState::default();
        let snippet = video_snippet("k", "rep1", "script", &state);
        assert!(snippet.contains("backgroundUrl: undefined,"));
        assert!(snippet.contains("properties: undefined"));
    }

    #[test]
    fn background_url_without_scroll_still_emits_properties() {
        let mut state = VideoState::default();
        state.background_url = "https://example.com/bg.mp4".to_string();

        let snippet = video_snippet("k", "rep1", "script", &state);
        assert!(snippet.contains("backgroundUrl: 'https://example.com/bg.mp4',"));
        assert!(snippet.contains("background_scroll: false,"));
        assert!(snippet.contains("background_scroll_type: 'vertical',"));
        assert!(snippet.contains("background_scroll_depth: 100,"));
        assert!(snippet.contains("background_scroll_return: false,"));
    }

    #[test]
    fn non_numeric_scroll_depth_renders_nan() {
        let mut state = VideoState::default();
        state.background_url = "https://example.com/bg.mp4".to_string();
        state.scroll_settings.scroll_depth = "deep".to_string();

        let snippet = video_snippet("k", "rep1", "script", &state);
        assert!(snippet.contains("background_scroll_depth: NaN,"));
    }

    #[test]
    fn video_script_is_embedded_in_template_literal() {
        let state = VideoState::default();
        let snippet = video_snippet("k", "rep2", "Hi there.\nBye.", &state);
        assert!(snippet.contains("script: `Hi there.\nBye.`,"));
        assert!(snippet.contains("replicaId: 'rep2',"));
    }
}
