// Wizard state records and the merge-update contract.
//
// Each tab panel reports changes as an update record with optional fields;
// the controller owns the state and merges updates in. Nested records are
// always fully populated: defaults are supplied at construction time, so the
// snippet generator and the payload builder never see a half-initialized
// sub-record.

/// Which wizard tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardSelection {
    #[default]
    ReplicaPersona,
    Conversation,
    Video,
}

impl WizardSelection {
    pub fn title(&self) -> &'static str {
        match self {
            WizardSelection::ReplicaPersona => "Replica/Persona",
            WizardSelection::Conversation => "Conversation",
            WizardSelection::Video => "Video Generation",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            WizardSelection::ReplicaPersona => WizardSelection::Conversation,
            WizardSelection::Conversation => WizardSelection::Video,
            WizardSelection::Video => WizardSelection::ReplicaPersona,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            WizardSelection::ReplicaPersona => WizardSelection::Video,
            WizardSelection::Conversation => WizardSelection::ReplicaPersona,
            WizardSelection::Video => WizardSelection::Conversation,
        }
    }
}

/// The fixed replica catalog. Closed set; ids are what the API expects.
pub const REPLICA_OPTIONS: &[(&str, &str)] = &[
    ("rep1", "Sales Rep 1"),
    ("rep2", "Support Rep 1"),
    ("rep3", "Technical Rep 1"),
];

pub const LANGUAGE_OPTIONS: &[(&str, &str)] = &[
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("zh", "Chinese"),
];

pub const PIPELINE_MODES: &[(&str, &str)] = &[
    ("full", "Full Pipeline"),
    ("speech2speech", "Speech to Speech"),
    ("audioEcho", "Audio Echo"),
    ("textEcho", "Text Echo"),
];

pub const TOOLBAR_POSITIONS: &[(&str, &str)] = &[
    ("top", "Top"),
    ("bottom", "Bottom"),
    ("left", "Left"),
    ("right", "Right"),
];

pub const SCROLL_TYPES: &[(&str, &str)] =
    &[("vertical", "Vertical"), ("horizontal", "Horizontal")];

/// Nested conversation properties. Always fully populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationProperties {
    pub max_call_duration: u32,
    pub participant_left_timeout: u32,
    pub participant_absent_timeout: u32,
    pub enable_recording: bool,
    pub enable_transcription: bool,
    pub apply_greenscreen: bool,
}

impl Default for ConversationProperties {
    fn default() -> Self {
        Self {
            max_call_duration: 3600,
            participant_left_timeout: 30,
            participant_absent_timeout: 30,
            enable_recording: false,
            enable_transcription: false,
            apply_greenscreen: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    pub conversation_name: String,
    pub context: String,
    pub custom_greeting: String,
    pub language: String,
    pub recording_enabled: bool,
    pub auto_end_enabled: bool,
    /// Free text; integer coercion happens at snippet/payload time.
    pub max_duration: String,
    pub pipeline_mode: String,
    pub toolbar_enabled: bool,
    pub toolbar_position: String,
    pub toolbar_actions: Vec<String>,
    pub replica_id: String,
    pub persona_id: String,
    pub callback_url: String,
    // Transient fields: set by the conversation-creation call only.
    pub error: String,
    pub conversation_url: Option<String>,
    pub conversation_id: Option<String>,
    pub is_processing: bool,
    pub properties: ConversationProperties,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self {
            conversation_name: String::new(),
            context: String::new(),
            custom_greeting: String::new(),
            language: "en".to_string(),
            recording_enabled: true,
            auto_end_enabled: true,
            max_duration: "300".to_string(),
            pipeline_mode: "full".to_string(),
            toolbar_enabled: false,
            toolbar_position: "top".to_string(),
            toolbar_actions: Vec::new(),
            replica_id: String::new(),
            persona_id: String::new(),
            callback_url: String::new(),
            error: String::new(),
            conversation_url: None,
            conversation_id: None,
            is_processing: false,
            properties: ConversationProperties::default(),
        }
    }
}

/// Partial update for [`ConversationState`]. Only present fields are merged.
#[derive(Debug, Clone, Default)]
pub struct ConversationUpdate {
    pub conversation_name: Option<String>,
    pub context: Option<String>,
    pub custom_greeting: Option<String>,
    pub language: Option<String>,
    pub recording_enabled: Option<bool>,
    pub auto_end_enabled: Option<bool>,
    pub max_duration: Option<String>,
    pub pipeline_mode: Option<String>,
    pub toolbar_enabled: Option<bool>,
    pub toolbar_position: Option<String>,
    pub toolbar_actions: Option<Vec<String>>,
    pub replica_id: Option<String>,
    pub persona_id: Option<String>,
    pub callback_url: Option<String>,
    pub error: Option<String>,
    pub is_processing: Option<bool>,
    pub properties: Option<PropertiesUpdate>,
}

/// Partial update for the nested properties record. Merged shallowly on top
/// of the existing properties, preserving sibling flags.
#[derive(Debug, Clone, Default)]
pub struct PropertiesUpdate {
    pub max_call_duration: Option<u32>,
    pub participant_left_timeout: Option<u32>,
    pub participant_absent_timeout: Option<u32>,
    pub enable_recording: Option<bool>,
    pub enable_transcription: Option<bool>,
    pub apply_greenscreen: Option<bool>,
}

impl ConversationProperties {
    pub fn apply(&mut self, update: PropertiesUpdate) {
        if let Some(v) = update.max_call_duration {
            self.max_call_duration = v;
        }
        if let Some(v) = update.participant_left_timeout {
            self.participant_left_timeout = v;
        }
        if let Some(v) = update.participant_absent_timeout {
            self.participant_absent_timeout = v;
        }
        if let Some(v) = update.enable_recording {
            self.enable_recording = v;
        }
        if let Some(v) = update.enable_transcription {
            self.enable_transcription = v;
        }
        if let Some(v) = update.apply_greenscreen {
            self.apply_greenscreen = v;
        }
    }
}

impl ConversationState {
    /// Merge an update into the state. Only fields present in the update are
    /// overwritten; a nested properties update preserves sibling flags.
    pub fn apply(&mut self, update: ConversationUpdate) {
        if let Some(v) = update.conversation_name {
            self.conversation_name = v;
        }
        if let Some(v) = update.context {
            self.context = v;
        }
        if let Some(v) = update.custom_greeting {
            self.custom_greeting = v;
        }
        if let Some(v) = update.language {
            self.language = v;
        }
        if let Some(v) = update.recording_enabled {
            self.recording_enabled = v;
        }
        if let Some(v) = update.auto_end_enabled {
            self.auto_end_enabled = v;
        }
        if let Some(v) = update.max_duration {
            self.max_duration = v;
        }
        if let Some(v) = update.pipeline_mode {
            self.pipeline_mode = v;
        }
        if let Some(v) = update.toolbar_enabled {
            self.toolbar_enabled = v;
        }
        if let Some(v) = update.toolbar_position {
            self.toolbar_position = v;
        }
        if let Some(v) = update.toolbar_actions {
            self.toolbar_actions = v;
        }
        if let Some(v) = update.replica_id {
            self.replica_id = v;
        }
        if let Some(v) = update.persona_id {
            self.persona_id = v;
        }
        if let Some(v) = update.callback_url {
            self.callback_url = v;
        }
        if let Some(v) = update.error {
            self.error = v;
        }
        if let Some(v) = update.is_processing {
            self.is_processing = v;
        }
        if let Some(p) = update.properties {
            self.properties.apply(p);
        }
    }

    /// Record the outcome of a conversation-creation attempt. Success fills
    /// the transient URL/id fields and clears any prior error; failure
    /// stores the normalized message and leaves the URL/id untouched.
    pub fn record_creation_outcome(
        &mut self,
        outcome: Result<crate::models::responses::CreateConversationResponse, String>,
    ) {
        self.is_processing = false;
        match outcome {
            Ok(resp) => {
                self.conversation_url = resp.conversation_url;
                self.conversation_id = resp.conversation_id;
                self.error.clear();
            }
            Err(message) => {
                self.error = message;
            }
        }
    }
}

/// Nested scroll settings. Always fully populated.
///
/// `scroll_depth` keeps the raw entered text; coercion happens when the
/// snippet is rendered, and a non-numeric value renders as `NaN`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollSettings {
    pub scroll: bool,
    pub scroll_type: String,
    pub scroll_depth: String,
    pub scroll_return: bool,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            scroll: false,
            scroll_type: "vertical".to_string(),
            scroll_depth: "100".to_string(),
            scroll_return: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoState {
    pub video_name: String,
    pub background_url: String,
    pub background_source_url: String,
    pub fast_rendering: bool,
    pub language: String,
    pub scroll_settings: ScrollSettings,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            video_name: String::new(),
            background_url: String::new(),
            background_source_url: String::new(),
            fast_rendering: false,
            language: "en".to_string(),
            scroll_settings: ScrollSettings::default(),
        }
    }
}

/// Partial update for [`VideoState`].
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub video_name: Option<String>,
    pub background_url: Option<String>,
    pub background_source_url: Option<String>,
    pub fast_rendering: Option<bool>,
    pub language: Option<String>,
    pub scroll_settings: Option<ScrollUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollUpdate {
    pub scroll: Option<bool>,
    pub scroll_type: Option<String>,
    pub scroll_depth: Option<String>,
    pub scroll_return: Option<bool>,
}

impl ScrollSettings {
    pub fn apply(&mut self, update: ScrollUpdate) {
        if let Some(v) = update.scroll {
            self.scroll = v;
        }
        if let Some(v) = update.scroll_type {
            self.scroll_type = v;
        }
        if let Some(v) = update.scroll_depth {
            self.scroll_depth = v;
        }
        if let Some(v) = update.scroll_return {
            self.scroll_return = v;
        }
    }
}

impl VideoState {
    pub fn apply(&mut self, update: VideoUpdate) {
        if let Some(v) = update.video_name {
            self.video_name = v;
        }
        if let Some(v) = update.background_url {
            self.background_url = v;
        }
        if let Some(v) = update.background_source_url {
            self.background_source_url = v;
        }
        if let Some(v) = update.fast_rendering {
            self.fast_rendering = v;
        }
        if let Some(v) = update.language {
            self.language = v;
        }
        if let Some(s) = update.scroll_settings {
            self.scroll_settings.apply(s);
        }
    }
}

/// Split the toolbar-actions free text into an ordered list of trimmed
/// entries. Duplicates and empty entries are kept.
pub fn split_toolbar_actions(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}
