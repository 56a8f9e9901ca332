//! Terminal wizard UI.
//!
//! Layout:
//! - Centered window frame titled "Tavus Developer Wizard"
//! - Tab row for the three wizards (Replica/Persona, Conversation, Video)
//! - Left form panel with the active wizard's fields, right live code preview
//! - Bottom button row: [ Copy ] [ Create Conversation ] [ Quit ]
//!
//! Note: Logging is file-only in TUI mode (stdout logging is disabled) to avoid corrupting the terminal UI.

use crate::api::conversations;
use crate::models::state::{
    split_toolbar_actions, ConversationState, ConversationUpdate, PropertiesUpdate, ScrollUpdate,
    VideoState, VideoUpdate, WizardSelection, LANGUAGE_OPTIONS, PIPELINE_MODES, REPLICA_OPTIONS,
    SCROLL_TYPES, TOOLBAR_POSITIONS,
};
use crate::settings::Settings;
use crate::snippet;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{info, warn};
use ratatui::backend::{CrosstermBackend, TestBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const DOCS_URL: &str = "https://docs.tavus.io/sections/introduction";
const SUPPORT_URL: &str = "https://www.tavus.io/support";
const GITHUB_URL: &str = "https://github.com/Tavus-Engineering/tavus-examples";

#[derive(Debug, Clone)]
struct TextInput {
    value: String,
    cursor: usize,
    masked: bool,
}

impl TextInput {
    fn new(value: impl Into<String>, masked: bool) -> Self {
        let v = value.into();
        Self {
            cursor: v.len(),
            value: v,
            masked,
        }
    }

    fn display(&self) -> String {
        if self.masked {
            "*".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    #[cfg(test)]
    fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor = (self.cursor + 1).min(self.value.len());
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 && !self.value.is_empty() {
                    let idx = self.cursor - 1;
                    self.value.remove(idx);
                    self.cursor = idx;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.value.len() && !self.value.is_empty() {
                    self.value.remove(self.cursor);
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.len());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.len();
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonFocus {
    Copy,
    Create,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusTarget {
    Tabs,
    Field(usize),
    Button(ButtonFocus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Modal {
    ConfirmQuit { quit_selected: bool },
}

/// Every form field across the three wizards. Which subset is visible (and
/// in what order) depends on the active wizard and the conditional panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldId {
    ApiKey,
    // Replica/Persona wizard
    PersonaContext,
    ReplicaSelect,
    // Conversation wizard
    ConversationName,
    ConversationContext,
    CustomGreeting,
    Language,
    RecordingEnabled,
    AutoEndEnabled,
    PipelineMode,
    MaxDuration,
    ToolbarEnabled,
    ToolbarPosition,
    ToolbarActions,
    EnableRecording,
    EnableTranscription,
    ApplyGreenscreen,
    ReplicaId,
    PersonaId,
    CallbackUrl,
    // Video wizard
    VideoName,
    VideoScript,
    VideoLanguage,
    BackgroundUrl,
    BackgroundSourceUrl,
    ScrollEnabled,
    ScrollType,
    ScrollDepth,
    ScrollReturn,
    FastRendering,
}

#[derive(Debug)]
enum UiMsg {
    ConversationCreated(Result<crate::models::responses::CreateConversationResponse, String>),
}

struct App {
    active_wizard: WizardSelection,
    focus: FocusTarget,
    modal: Option<Modal>,
    quit: bool,
    status: String,

    api_base_url: String,

    // Controller-level state (shared across wizards)
    api_key: TextInput,
    selected_replica: String,
    // Held for parity with the conversation payload; not read by the current flow.
    #[allow(dead_code)]
    selected_persona: String,
    persona_context: TextInput,
    video_script: TextInput,

    conversation_state: ConversationState,
    video_state: VideoState,

    // Free-text editors; the committed value lives in the state records and
    // is re-synced on every keystroke.
    conversation_name: TextInput,
    conversation_context: TextInput,
    custom_greeting: TextInput,
    max_duration: TextInput,
    toolbar_actions_input: TextInput,
    replica_id_input: TextInput,
    persona_id_input: TextInput,
    callback_url: TextInput,

    video_name: TextInput,
    background_url: TextInput,
    background_source_url: TextInput,
    scroll_depth: TextInput,
}

impl App {
    fn new(settings: Settings) -> Self {
        let conversation_state = ConversationState::default();
        let video_state = VideoState::default();
        Self {
            active_wizard: WizardSelection::default(),
            focus: FocusTarget::Tabs,
            modal: None,
            quit: false,
            status: String::new(),

            api_base_url: settings.api_base_url,

            api_key: TextInput::new(settings.api_key, true),
            selected_replica: String::new(),
            selected_persona: String::new(),
            persona_context: TextInput::new("", false),
            video_script: TextInput::new("", false),

            max_duration: TextInput::new(conversation_state.max_duration.clone(), false),
            scroll_depth: TextInput::new(video_state.scroll_settings.scroll_depth.clone(), false),

            conversation_state,
            video_state,

            conversation_name: TextInput::new("", false),
            conversation_context: TextInput::new("", false),
            custom_greeting: TextInput::new("", false),
            toolbar_actions_input: TextInput::new("", false),
            replica_id_input: TextInput::new("", false),
            persona_id_input: TextInput::new("", false),
            callback_url: TextInput::new("", false),

            video_name: TextInput::new("", false),
            background_url: TextInput::new("", false),
            background_source_url: TextInput::new("", false),
        }
    }

    fn update_conversation(&mut self, update: ConversationUpdate) {
        self.conversation_state.apply(update);
    }

    fn update_video(&mut self, update: VideoUpdate) {
        self.video_state.apply(update);
    }

    /// The derived snippet. Recomputed on demand, never stored.
    fn code_snippet(&self) -> String {
        snippet::generate(
            self.active_wizard,
            &snippet::SnippetInputs {
                api_key: &self.api_key.value,
                selected_replica: &self.selected_replica,
                video_script: &self.video_script.value,
                persona_context: &self.persona_context.value,
            },
            &self.conversation_state,
            &self.video_state,
        )
    }
}

/// Fields visible for the active wizard, in render/focus order. Conditional
/// panels (toolbar, scroll) appear and disappear based on state.
fn visible_fields(app: &App) -> Vec<FieldId> {
    let mut fields = vec![FieldId::ApiKey];
    match app.active_wizard {
        WizardSelection::ReplicaPersona => {
            fields.push(FieldId::PersonaContext);
            fields.push(FieldId::ReplicaSelect);
        }
        WizardSelection::Conversation => {
            fields.extend([
                FieldId::ConversationName,
                FieldId::ConversationContext,
                FieldId::CustomGreeting,
                FieldId::Language,
                FieldId::RecordingEnabled,
                FieldId::AutoEndEnabled,
                FieldId::PipelineMode,
                FieldId::MaxDuration,
                FieldId::ToolbarEnabled,
            ]);
            if app.conversation_state.toolbar_enabled {
                fields.push(FieldId::ToolbarPosition);
                fields.push(FieldId::ToolbarActions);
            }
            fields.extend([
                FieldId::EnableRecording,
                FieldId::EnableTranscription,
                FieldId::ApplyGreenscreen,
                FieldId::ReplicaId,
                FieldId::PersonaId,
                FieldId::CallbackUrl,
            ]);
        }
        WizardSelection::Video => {
            fields.extend([
                FieldId::VideoName,
                FieldId::VideoScript,
                FieldId::VideoLanguage,
                FieldId::BackgroundUrl,
                FieldId::BackgroundSourceUrl,
            ]);
            if !app.video_state.background_url.is_empty() {
                fields.push(FieldId::ScrollEnabled);
                if app.video_state.scroll_settings.scroll {
                    fields.extend([
                        FieldId::ScrollType,
                        FieldId::ScrollDepth,
                        FieldId::ScrollReturn,
                    ]);
                }
            }
            fields.push(FieldId::FastRendering);
        }
    }
    fields
}

fn focused_field(app: &App) -> Option<FieldId> {
    match app.focus {
        FocusTarget::Field(idx) => visible_fields(app).get(idx).copied(),
        _ => None,
    }
}

fn focused_text_input_mut(app: &mut App) -> Option<(&mut TextInput, FieldId)> {
    let field = focused_field(app)?;
    let input = match field {
        FieldId::ApiKey => &mut app.api_key,
        FieldId::PersonaContext => &mut app.persona_context,
        FieldId::ConversationName => &mut app.conversation_name,
        FieldId::ConversationContext => &mut app.conversation_context,
        FieldId::CustomGreeting => &mut app.custom_greeting,
        FieldId::MaxDuration => &mut app.max_duration,
        FieldId::ToolbarActions => &mut app.toolbar_actions_input,
        FieldId::ReplicaId => &mut app.replica_id_input,
        FieldId::PersonaId => &mut app.persona_id_input,
        FieldId::CallbackUrl => &mut app.callback_url,
        FieldId::VideoName => &mut app.video_name,
        FieldId::VideoScript => &mut app.video_script,
        FieldId::BackgroundUrl => &mut app.background_url,
        FieldId::BackgroundSourceUrl => &mut app.background_source_url,
        FieldId::ScrollDepth => &mut app.scroll_depth,
        _ => return None,
    };
    Some((input, field))
}

/// Push the edited text into the owning state record. Each keystroke reports
/// exactly the changed key through the merge-update contract.
fn sync_field(app: &mut App, field: FieldId) {
    match field {
        // Controller-level fields are authoritative in place.
        FieldId::ApiKey | FieldId::PersonaContext | FieldId::VideoScript => {}
        FieldId::ConversationName => {
            let v = app.conversation_name.value.clone();
            app.update_conversation(ConversationUpdate {
                conversation_name: Some(v),
                ..Default::default()
            });
        }
        FieldId::ConversationContext => {
            let v = app.conversation_context.value.clone();
            app.update_conversation(ConversationUpdate {
                context: Some(v),
                ..Default::default()
            });
        }
        FieldId::CustomGreeting => {
            let v = app.custom_greeting.value.clone();
            app.update_conversation(ConversationUpdate {
                custom_greeting: Some(v),
                ..Default::default()
            });
        }
        FieldId::MaxDuration => {
            let v = app.max_duration.value.clone();
            app.update_conversation(ConversationUpdate {
                max_duration: Some(v),
                ..Default::default()
            });
        }
        FieldId::ToolbarActions => {
            let actions = split_toolbar_actions(&app.toolbar_actions_input.value);
            app.update_conversation(ConversationUpdate {
                toolbar_actions: Some(actions),
                ..Default::default()
            });
        }
        FieldId::ReplicaId => {
            let v = app.replica_id_input.value.clone();
            app.update_conversation(ConversationUpdate {
                replica_id: Some(v),
                ..Default::default()
            });
        }
        FieldId::PersonaId => {
            let v = app.persona_id_input.value.clone();
            app.update_conversation(ConversationUpdate {
                persona_id: Some(v),
                ..Default::default()
            });
        }
        FieldId::CallbackUrl => {
            let v = app.callback_url.value.clone();
            app.update_conversation(ConversationUpdate {
                callback_url: Some(v),
                ..Default::default()
            });
        }
        FieldId::VideoName => {
            let v = app.video_name.value.clone();
            app.update_video(VideoUpdate {
                video_name: Some(v),
                ..Default::default()
            });
        }
        FieldId::BackgroundUrl => {
            let v = app.background_url.value.clone();
            app.update_video(VideoUpdate {
                background_url: Some(v),
                ..Default::default()
            });
        }
        FieldId::BackgroundSourceUrl => {
            let v = app.background_source_url.value.clone();
            app.update_video(VideoUpdate {
                background_source_url: Some(v),
                ..Default::default()
            });
        }
        FieldId::ScrollDepth => {
            let v = app.scroll_depth.value.clone();
            app.update_video(VideoUpdate {
                scroll_settings: Some(ScrollUpdate {
                    scroll_depth: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        _ => {}
    }
}

fn toggle_field(app: &mut App, field: FieldId) {
    match field {
        FieldId::RecordingEnabled => {
            let v = !app.conversation_state.recording_enabled;
            app.update_conversation(ConversationUpdate {
                recording_enabled: Some(v),
                ..Default::default()
            });
        }
        FieldId::AutoEndEnabled => {
            let v = !app.conversation_state.auto_end_enabled;
            app.update_conversation(ConversationUpdate {
                auto_end_enabled: Some(v),
                ..Default::default()
            });
        }
        FieldId::ToolbarEnabled => {
            let v = !app.conversation_state.toolbar_enabled;
            app.update_conversation(ConversationUpdate {
                toolbar_enabled: Some(v),
                ..Default::default()
            });
        }
        FieldId::EnableRecording => {
            let v = !app.conversation_state.properties.enable_recording;
            app.update_conversation(ConversationUpdate {
                properties: Some(PropertiesUpdate {
                    enable_recording: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        FieldId::EnableTranscription => {
            let v = !app.conversation_state.properties.enable_transcription;
            app.update_conversation(ConversationUpdate {
                properties: Some(PropertiesUpdate {
                    enable_transcription: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        FieldId::ApplyGreenscreen => {
            let v = !app.conversation_state.properties.apply_greenscreen;
            app.update_conversation(ConversationUpdate {
                properties: Some(PropertiesUpdate {
                    apply_greenscreen: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        FieldId::ScrollEnabled => {
            let v = !app.video_state.scroll_settings.scroll;
            app.update_video(VideoUpdate {
                scroll_settings: Some(ScrollUpdate {
                    scroll: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        FieldId::ScrollReturn => {
            let v = !app.video_state.scroll_settings.scroll_return;
            app.update_video(VideoUpdate {
                scroll_settings: Some(ScrollUpdate {
                    scroll_return: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        FieldId::FastRendering => {
            let v = !app.video_state.fast_rendering;
            app.update_video(VideoUpdate {
                fast_rendering: Some(v),
                ..Default::default()
            });
        }
        _ => {}
    }
}

fn cycle_option(options: &[(&str, &str)], current: &str, forward: bool) -> String {
    let idx = options.iter().position(|(id, _)| *id == current);
    let next = match (idx, forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1) % options.len(),
        (Some(i), false) => (i + options.len() - 1) % options.len(),
    };
    options[next].0.to_string()
}

fn cycle_select(app: &mut App, field: FieldId, forward: bool) {
    match field {
        FieldId::ReplicaSelect => {
            app.selected_replica = cycle_option(REPLICA_OPTIONS, &app.selected_replica, forward);
        }
        FieldId::Language => {
            let v = cycle_option(LANGUAGE_OPTIONS, &app.conversation_state.language, forward);
            app.update_conversation(ConversationUpdate {
                language: Some(v),
                ..Default::default()
            });
        }
        FieldId::PipelineMode => {
            let v = cycle_option(PIPELINE_MODES, &app.conversation_state.pipeline_mode, forward);
            app.update_conversation(ConversationUpdate {
                pipeline_mode: Some(v),
                ..Default::default()
            });
        }
        FieldId::ToolbarPosition => {
            let v = cycle_option(
                TOOLBAR_POSITIONS,
                &app.conversation_state.toolbar_position,
                forward,
            );
            app.update_conversation(ConversationUpdate {
                toolbar_position: Some(v),
                ..Default::default()
            });
        }
        FieldId::VideoLanguage => {
            let v = cycle_option(LANGUAGE_OPTIONS, &app.video_state.language, forward);
            app.update_video(VideoUpdate {
                language: Some(v),
                ..Default::default()
            });
        }
        FieldId::ScrollType => {
            let v = cycle_option(
                SCROLL_TYPES,
                &app.video_state.scroll_settings.scroll_type,
                forward,
            );
            app.update_video(VideoUpdate {
                scroll_settings: Some(ScrollUpdate {
                    scroll_type: Some(v),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        _ => {}
    }
}

fn is_select(field: FieldId) -> bool {
    matches!(
        field,
        FieldId::ReplicaSelect
            | FieldId::Language
            | FieldId::PipelineMode
            | FieldId::ToolbarPosition
            | FieldId::VideoLanguage
            | FieldId::ScrollType
    )
}

fn is_toggle(field: FieldId) -> bool {
    matches!(
        field,
        FieldId::RecordingEnabled
            | FieldId::AutoEndEnabled
            | FieldId::ToolbarEnabled
            | FieldId::EnableRecording
            | FieldId::EnableTranscription
            | FieldId::ApplyGreenscreen
            | FieldId::ScrollEnabled
            | FieldId::ScrollReturn
            | FieldId::FastRendering
    )
}

/// Buttons in left-to-right order for the active wizard. The Create button
/// only exists on the conversation wizard.
fn visible_buttons(app: &App) -> Vec<ButtonFocus> {
    if app.active_wizard == WizardSelection::Conversation {
        vec![ButtonFocus::Copy, ButtonFocus::Create, ButtonFocus::Quit]
    } else {
        vec![ButtonFocus::Copy, ButtonFocus::Quit]
    }
}

/// Conditional panels can shrink the field list under the current focus.
fn clamp_focus(app: &mut App) {
    match app.focus {
        FocusTarget::Field(idx) => {
            let count = visible_fields(app).len();
            if idx >= count {
                app.focus = FocusTarget::Field(count.saturating_sub(1));
            }
        }
        FocusTarget::Button(b) => {
            if !visible_buttons(app).contains(&b) {
                app.focus = FocusTarget::Button(ButtonFocus::Copy);
            }
        }
        FocusTarget::Tabs => {}
    }
}

fn advance_focus(app: &mut App, forward: bool) {
    let fields = visible_fields(app).len();
    let buttons = visible_buttons(app);
    app.focus = if forward {
        match app.focus {
            FocusTarget::Tabs => FocusTarget::Field(0),
            FocusTarget::Field(idx) if idx + 1 < fields => FocusTarget::Field(idx + 1),
            FocusTarget::Field(_) => FocusTarget::Button(buttons[0]),
            FocusTarget::Button(b) => {
                let pos = buttons.iter().position(|x| *x == b).unwrap_or(0);
                if pos + 1 < buttons.len() {
                    FocusTarget::Button(buttons[pos + 1])
                } else {
                    FocusTarget::Tabs
                }
            }
        }
    } else {
        match app.focus {
            FocusTarget::Tabs => FocusTarget::Button(*buttons.last().unwrap_or(&ButtonFocus::Quit)),
            FocusTarget::Field(0) => FocusTarget::Tabs,
            FocusTarget::Field(idx) => FocusTarget::Field(idx - 1),
            FocusTarget::Button(b) => {
                let pos = buttons.iter().position(|x| *x == b).unwrap_or(0);
                if pos > 0 {
                    FocusTarget::Button(buttons[pos - 1])
                } else {
                    FocusTarget::Field(fields.saturating_sub(1))
                }
            }
        }
    };
}

fn copy_snippet(app: &mut App) {
    let text = app.code_snippet();
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => {
            app.status = "Snippet copied to clipboard.".to_string();
        }
        Err(e) => {
            // Clipboard failures are logged, never surfaced in the UI.
            warn!("[PHASE: tui] [STEP: copy] Clipboard write failed: {}", e);
        }
    }
}

fn open_link(app: &mut App, url: &str) {
    match open::that_detached(url) {
        Ok(()) => {
            app.status = format!("Opened {}", url);
        }
        Err(e) => {
            warn!("[PHASE: tui] [STEP: open_link] Failed to open {}: {}", url, e);
        }
    }
}

fn start_create_conversation(app: &mut App, tx: &mpsc::Sender<UiMsg>) {
    if app.conversation_state.is_processing {
        return;
    }
    app.update_conversation(ConversationUpdate {
        is_processing: Some(true),
        ..Default::default()
    });
    app.status = "Creating conversation...".to_string();

    let base_url = app.api_base_url.clone();
    let api_key = app.api_key.value.clone();
    let state = app.conversation_state.clone();
    let tx = tx.clone();
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build();
        match rt {
            Ok(rt) => {
                let res =
                    rt.block_on(conversations::create_conversation(&base_url, &api_key, &state));
                let _ = tx.send(UiMsg::ConversationCreated(res.map_err(|e| e.to_string())));
            }
            Err(e) => {
                let _ = tx.send(UiMsg::ConversationCreated(Err(format!(
                    "Internal error starting request: {}",
                    e
                ))));
            }
        }
    });
}

fn drain_messages(app: &mut App, rx: &mpsc::Receiver<UiMsg>) {
    while let Ok(msg) = rx.try_recv() {
        match msg {
            UiMsg::ConversationCreated(outcome) => {
                app.conversation_state.record_creation_outcome(outcome);
                app.status = if app.conversation_state.error.is_empty() {
                    "Conversation created.".to_string()
                } else {
                    String::new()
                };
            }
        }
    }
}

fn activate_button(app: &mut App, button: ButtonFocus, tx: &mpsc::Sender<UiMsg>) {
    match button {
        ButtonFocus::Copy => copy_snippet(app),
        ButtonFocus::Create => start_create_conversation(app, tx),
        ButtonFocus::Quit => {
            app.modal = Some(Modal::ConfirmQuit {
                quit_selected: true,
            });
        }
    }
}

fn handle_key(app: &mut App, code: KeyCode, tx: &mpsc::Sender<UiMsg>) {
    // Modal handling
    if let Some(Modal::ConfirmQuit { quit_selected }) = app.modal.clone() {
        match code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                app.modal = Some(Modal::ConfirmQuit {
                    quit_selected: !quit_selected,
                });
            }
            KeyCode::Enter => {
                app.modal = None;
                if quit_selected {
                    app.quit = true;
                }
            }
            KeyCode::Esc => {
                app.modal = None;
            }
            _ => {}
        }
        return;
    }

    if matches!(code, KeyCode::Esc) {
        app.modal = Some(Modal::ConfirmQuit {
            quit_selected: false,
        });
        return;
    }

    // Text input handling (when a text field is focused)
    let consumed_field = match focused_text_input_mut(app) {
        Some((input, field)) => input.handle_key(code).then_some(field),
        None => None,
    };
    if let Some(field) = consumed_field {
        sync_field(app, field);
        clamp_focus(app);
        return;
    }

    match code {
        KeyCode::Tab => {
            advance_focus(app, true);
        }
        KeyCode::BackTab => {
            advance_focus(app, false);
        }
        KeyCode::Up => {
            if matches!(app.focus, FocusTarget::Field(_)) {
                advance_focus(app, false);
            }
        }
        KeyCode::Down => {
            if matches!(app.focus, FocusTarget::Field(_)) {
                advance_focus(app, true);
            }
        }
        KeyCode::Left | KeyCode::Right => {
            let forward = matches!(code, KeyCode::Right);
            match app.focus {
                FocusTarget::Tabs => {
                    app.active_wizard = if forward {
                        app.active_wizard.next()
                    } else {
                        app.active_wizard.prev()
                    };
                    app.status.clear();
                    clamp_focus(app);
                }
                FocusTarget::Field(_) => {
                    if let Some(field) = focused_field(app) {
                        if is_select(field) {
                            cycle_select(app, field, forward);
                        }
                    }
                }
                FocusTarget::Button(_) => {
                    advance_focus(app, forward);
                }
            }
        }
        KeyCode::Char(' ') => {
            if let Some(field) = focused_field(app) {
                if is_toggle(field) {
                    toggle_field(app, field);
                    clamp_focus(app);
                }
            }
        }
        KeyCode::Enter => match app.focus {
            FocusTarget::Tabs => {
                app.focus = FocusTarget::Field(0);
            }
            FocusTarget::Field(_) => {
                advance_focus(app, true);
            }
            FocusTarget::Button(b) => {
                activate_button(app, b, tx);
            }
        },
        // Link/copy shortcuts are only live while no text field has focus.
        KeyCode::Char('d') | KeyCode::Char('D')
            if !matches!(app.focus, FocusTarget::Field(_)) =>
        {
            open_link(app, DOCS_URL);
        }
        KeyCode::Char('s') | KeyCode::Char('S')
            if !matches!(app.focus, FocusTarget::Field(_)) =>
        {
            open_link(app, SUPPORT_URL);
        }
        KeyCode::Char('g') | KeyCode::Char('G')
            if !matches!(app.focus, FocusTarget::Field(_)) =>
        {
            open_link(app, GITHUB_URL);
        }
        KeyCode::Char('c') | KeyCode::Char('C')
            if !matches!(app.focus, FocusTarget::Field(_)) =>
        {
            copy_snippet(app);
        }
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn centered_window(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2)).max(60);
    let h = height.min(area.height.saturating_sub(2)).max(20);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

fn button_text(label: &str, focused: bool, enabled: bool) -> Span<'static> {
    let mut style = Style::default();
    if !enabled {
        style = style.fg(Color::DarkGray);
    }
    if focused && enabled {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("[ {} ]", label), style)
}

fn select_label(options: &[(&str, &str)], current: &str, placeholder: &str) -> String {
    options
        .iter()
        .find(|(id, _)| *id == current)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

fn toggle_marker(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn field_lines(app: &App, field: FieldId, focused: bool) -> Vec<Line<'static>> {
    let prefix = if focused { ">" } else { " " };
    let text_line = |label: &str, value: String| -> Line<'static> {
        Line::from(format!("{} {}: {}", prefix, label, value))
    };
    let toggle_line = |label: &str, on: bool| -> Line<'static> {
        Line::from(format!("{} {} {}", prefix, toggle_marker(on), label))
    };
    let select_line = |label: &str, value: String| -> Line<'static> {
        Line::from(format!("{} {}: < {} >", prefix, label, value))
    };

    let conv = &app.conversation_state;
    let video = &app.video_state;
    match field {
        FieldId::ApiKey => vec![text_line("API Key", app.api_key.display())],
        FieldId::PersonaContext => {
            vec![text_line("Persona Context", app.persona_context.display())]
        }
        FieldId::ReplicaSelect => vec![select_line(
            "Replica",
            select_label(REPLICA_OPTIONS, &app.selected_replica, "Select a replica"),
        )],
        FieldId::ConversationName => vec![text_line(
            "Conversation Name",
            app.conversation_name.display(),
        )],
        FieldId::ConversationContext => vec![text_line(
            "Conversation Context",
            app.conversation_context.display(),
        )],
        FieldId::CustomGreeting => {
            vec![text_line("Custom Greeting", app.custom_greeting.display())]
        }
        FieldId::Language => vec![select_line(
            "Language",
            select_label(LANGUAGE_OPTIONS, &conv.language, "English"),
        )],
        FieldId::RecordingEnabled => vec![toggle_line("Enable Recording", conv.recording_enabled)],
        FieldId::AutoEndEnabled => {
            vec![toggle_line("Auto End Conversation", conv.auto_end_enabled)]
        }
        FieldId::PipelineMode => vec![select_line(
            "Pipeline Mode",
            select_label(PIPELINE_MODES, &conv.pipeline_mode, "Full Pipeline"),
        )],
        FieldId::MaxDuration => {
            vec![text_line("Max Duration (s)", app.max_duration.display())]
        }
        FieldId::ToolbarEnabled => {
            vec![toggle_line("Interactive Toolbar", conv.toolbar_enabled)]
        }
        FieldId::ToolbarPosition => vec![select_line(
            "Toolbar Position",
            select_label(TOOLBAR_POSITIONS, &conv.toolbar_position, "Top"),
        )],
        FieldId::ToolbarActions => vec![text_line(
            "Toolbar Actions (comma-separated)",
            app.toolbar_actions_input.display(),
        )],
        FieldId::EnableRecording => vec![
            Line::from("  Call Properties"),
            toggle_line("Enable Recording", conv.properties.enable_recording),
        ],
        FieldId::EnableTranscription => vec![toggle_line(
            "Enable Transcription",
            conv.properties.enable_transcription,
        )],
        FieldId::ApplyGreenscreen => vec![toggle_line(
            "Apply Greenscreen",
            conv.properties.apply_greenscreen,
        )],
        FieldId::ReplicaId => vec![text_line("Replica ID", app.replica_id_input.display())],
        FieldId::PersonaId => vec![text_line("Persona ID", app.persona_id_input.display())],
        FieldId::CallbackUrl => vec![text_line("Callback URL", app.callback_url.display())],
        FieldId::VideoName => vec![text_line("Video Name", app.video_name.display())],
        FieldId::VideoScript => vec![text_line("Video Script", app.video_script.display())],
        FieldId::VideoLanguage => vec![select_line(
            "Language",
            select_label(LANGUAGE_OPTIONS, &video.language, "English"),
        )],
        FieldId::BackgroundUrl => {
            vec![text_line("Background URL", app.background_url.display())]
        }
        FieldId::BackgroundSourceUrl => vec![text_line(
            "Background Source URL",
            app.background_source_url.display(),
        )],
        FieldId::ScrollEnabled => {
            vec![toggle_line("Enable Scroll", video.scroll_settings.scroll)]
        }
        FieldId::ScrollType => vec![select_line(
            "Scroll Type",
            select_label(SCROLL_TYPES, &video.scroll_settings.scroll_type, "Vertical"),
        )],
        FieldId::ScrollDepth => vec![text_line("Scroll Depth", app.scroll_depth.display())],
        FieldId::ScrollReturn => vec![toggle_line(
            "Scroll Return",
            video.scroll_settings.scroll_return,
        )],
        FieldId::FastRendering => vec![toggle_line("Fast Rendering", video.fast_rendering)],
    }
}

fn draw_tabs(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    if matches!(app.focus, FocusTarget::Tabs) {
        spans.push(Span::raw("> "));
    } else {
        spans.push(Span::raw("  "));
    }
    for selection in [
        WizardSelection::ReplicaPersona,
        WizardSelection::Conversation,
        WizardSelection::Video,
    ] {
        let mut style = Style::default();
        if selection == app.active_wizard {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("[ {} ]", selection.title()), style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_form(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let fields = visible_fields(app);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let focused = app.focus == FocusTarget::Field(idx);
        lines.extend(field_lines(app, *field, focused));
    }

    if app.active_wizard == WizardSelection::Conversation {
        let conv = &app.conversation_state;
        if conv.is_processing {
            lines.push(Line::from(""));
            lines.push(Line::from("  Creating conversation..."));
        }
        if let Some(url) = conv.conversation_url.as_deref() {
            lines.push(Line::from(""));
            lines.push(Line::from(format!("  Conversation URL: {}", url)));
        }
        if let Some(id) = conv.conversation_id.as_deref() {
            lines.push(Line::from(format!("  Conversation ID: {}", id)));
        }
        if !conv.error.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  Error: {}", conv.error),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.active_wizard.title());
    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_preview(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Code Preview");
    let paragraph = Paragraph::new(app.code_snippet())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let text = if app.status.is_empty() {
        "Tab: focus  Left/Right: change  Space: toggle  Enter: activate  d/s/g: docs/support/github  Esc: quit".to_string()
    } else {
        app.status.clone()
    };
    let paragraph =
        Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::DarkGray))));
    f.render_widget(paragraph, area);
}

fn draw_buttons(f: &mut ratatui::Frame<'_>, area: Rect, app: &App) {
    let mut spans: Vec<Span<'static>> = Vec::new();
    for button in visible_buttons(app) {
        let (label, enabled) = match button {
            ButtonFocus::Copy => ("Copy", true),
            ButtonFocus::Create => (
                "Create Conversation",
                !app.conversation_state.is_processing,
            ),
            ButtonFocus::Quit => ("Quit", true),
        };
        spans.push(button_text(
            label,
            app.focus == FocusTarget::Button(button),
            enabled,
        ));
        spans.push(Span::raw(" "));
    }
    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);
    f.render_widget(paragraph, area);
}

fn draw_quit_modal(f: &mut ratatui::Frame<'_>, window_area: Rect, quit_selected: bool) {
    let modal_w = 46u16.min(window_area.width.saturating_sub(4)).max(30);
    let modal_h = 7u16;
    let x = window_area.x + (window_area.width.saturating_sub(modal_w)) / 2;
    let y = window_area.y + (window_area.height.saturating_sub(modal_h)) / 2;
    let rect = Rect {
        x,
        y,
        width: modal_w,
        height: modal_h,
    };

    f.render_widget(Clear, rect);
    let block = Block::default().borders(Borders::ALL).title("Exit");
    let stay = button_text("Stay", !quit_selected, true);
    let quit = button_text("Quit", quit_selected, true);
    let text = Text::from(vec![
        Line::from("Exit the Tavus Developer Wizard?"),
        Line::from(""),
        Line::from(vec![stay, Span::raw("  "), quit]),
    ]);
    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, rect);
}

fn draw(area: Rect, f: &mut ratatui::Frame<'_>, app: &App) {
    let window_area = centered_window(area, 120, 36);

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .title("Tavus Developer Wizard");
    f.render_widget(outer_block, window_area);

    let inner = window_area.inner(&ratatui::layout::Margin {
        vertical: 1,
        horizontal: 1,
    });
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    draw_tabs(f, rows[0], app);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(52), Constraint::Min(0)].as_ref())
        .split(rows[1]);

    draw_form(f, cols[0], app);
    draw_preview(f, cols[1], app);
    draw_status(f, rows[2], app);
    draw_buttons(f, rows[3], app);

    if let Some(Modal::ConfirmQuit { quit_selected }) = &app.modal {
        draw_quit_modal(f, window_area, *quit_selected);
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

pub fn run(settings: Settings) -> Result<()> {
    info!("[PHASE: tui] [STEP: start] Starting wizard");

    let mut terminal = setup_terminal()?;
    let result = run_loop(&mut terminal, settings);
    restore_terminal(&mut terminal)?;

    result
}

/// Non-interactive smoke mode: render a single seeded frame and exit.
/// Targets: replica|conversation|video
pub fn smoke(target: &str) -> Result<()> {
    info!(
        "[PHASE: tui] [STEP: smoke] Rendering single-frame smoke target={}",
        target
    );

    let t = target.trim().to_ascii_lowercase();
    let app = new_smoke_app(t.as_str());

    // In-memory backend so this can run in CI/tooling without touching the
    // real terminal (no raw mode / alternate screen).
    let backend = TestBackend::new(120, 36);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|f| draw(f.size(), f, &app))?;

    Ok(())
}

fn new_smoke_app(target: &str) -> App {
    let mut app = App::new(Settings::default());
    app.api_key = TextInput::new("tvk-smoke-000000", true);
    app.selected_replica = "rep1".to_string();

    match target {
        "conversation" => {
            app.active_wizard = WizardSelection::Conversation;
            app.conversation_name = TextInput::new("Demo Conversation", false);
            app.custom_greeting = TextInput::new("Hello there!", false);
            app.toolbar_actions_input = TextInput::new("mute,end,share", false);
            app.conversation_state.apply(ConversationUpdate {
                conversation_name: Some("Demo Conversation".to_string()),
                custom_greeting: Some("Hello there!".to_string()),
                toolbar_enabled: Some(true),
                toolbar_actions: Some(split_toolbar_actions("mute,end,share")),
                ..Default::default()
            });
            app.conversation_state.conversation_url =
                Some("https://tavus.daily.co/cdemo".to_string());
            app.conversation_state.conversation_id = Some("cdemo".to_string());
        }
        "video" => {
            app.active_wizard = WizardSelection::Video;
            app.video_name = TextInput::new("Launch Teaser", false);
            app.video_script = TextInput::new("Welcome to the launch.", false);
            app.background_url = TextInput::new("https://example.com/bg.mp4", false);
            app.video_state.apply(VideoUpdate {
                video_name: Some("Launch Teaser".to_string()),
                background_url: Some("https://example.com/bg.mp4".to_string()),
                scroll_settings: Some(ScrollUpdate {
                    scroll: Some(true),
                    ..Default::default()
                }),
                ..Default::default()
            });
        }
        _ => {
            // default: replica/persona
            app.persona_context = TextInput::new("A friendly sales assistant.", false);
        }
    }

    app
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, settings: Settings) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();
    let mut app = App::new(settings);
    let (tx, rx) = mpsc::channel::<UiMsg>();

    while !app.quit {
        drain_messages(&mut app, &rx);
        terminal.draw(|f| draw(f.size(), f, &app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_millis(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key.code, &tx),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Settings::default())
    }

    fn channel() -> (mpsc::Sender<UiMsg>, mpsc::Receiver<UiMsg>) {
        mpsc::channel()
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::new("", false);
        for c in "abc".chars() {
            input.handle_key(KeyCode::Char(c));
        }
        input.handle_key(KeyCode::Left);
        input.handle_key(KeyCode::Char('X'));
        assert_eq!(input.value, "abXc");

        input.handle_key(KeyCode::Backspace);
        assert_eq!(input.value, "abc");

        input.handle_key(KeyCode::Home);
        input.handle_key(KeyCode::Delete);
        assert_eq!(input.value, "bc");
    }

    #[test]
    fn masked_input_hides_value() {
        let input = TextInput::new("secret", true);
        assert_eq!(input.display(), "******");
    }

    #[test]
    fn toolbar_fields_appear_only_when_enabled() {
        let mut app = test_app();
        app.active_wizard = WizardSelection::Conversation;
        assert!(!visible_fields(&app).contains(&FieldId::ToolbarActions));

        app.conversation_state.toolbar_enabled = true;
        let fields = visible_fields(&app);
        assert!(fields.contains(&FieldId::ToolbarPosition));
        assert!(fields.contains(&FieldId::ToolbarActions));
    }

    #[test]
    fn scroll_fields_gate_on_background_url_and_scroll_flag() {
        let mut app = test_app();
        app.active_wizard = WizardSelection::Video;
        assert!(!visible_fields(&app).contains(&FieldId::ScrollEnabled));

        app.video_state.background_url = "https://example.com/bg.mp4".to_string();
        let fields = visible_fields(&app);
        assert!(fields.contains(&FieldId::ScrollEnabled));
        assert!(!fields.contains(&FieldId::ScrollDepth));

        app.video_state.scroll_settings.scroll = true;
        let fields = visible_fields(&app);
        assert!(fields.contains(&FieldId::ScrollType));
        assert!(fields.contains(&FieldId::ScrollDepth));
        assert!(fields.contains(&FieldId::ScrollReturn));
    }

    #[test]
    fn switching_tabs_preserves_wizard_state() {
        let (tx, _rx) = channel();
        let mut app = test_app();
        app.conversation_state.conversation_name = "kept".to_string();
        app.video_state.video_name = "kept too".to_string();
        let conversation_before = app.conversation_state.clone();
        let video_before = app.video_state.clone();

        app.focus = FocusTarget::Tabs;
        handle_key(&mut app, KeyCode::Right, &tx);
        assert_eq!(app.active_wizard, WizardSelection::Conversation);
        handle_key(&mut app, KeyCode::Right, &tx);
        assert_eq!(app.active_wizard, WizardSelection::Video);
        handle_key(&mut app, KeyCode::Left, &tx);
        handle_key(&mut app, KeyCode::Left, &tx);
        assert_eq!(app.active_wizard, WizardSelection::ReplicaPersona);

        assert_eq!(app.conversation_state, conversation_before);
        assert_eq!(app.video_state, video_before);
    }

    #[test]
    fn typing_into_a_field_syncs_the_state_record() {
        let (tx, _rx) = channel();
        let mut app = test_app();
        app.active_wizard = WizardSelection::Conversation;
        let idx = visible_fields(&app)
            .iter()
            .position(|f| *f == FieldId::ConversationName)
            .unwrap();
        app.focus = FocusTarget::Field(idx);

        for c in "Demo".chars() {
            handle_key(&mut app, KeyCode::Char(c), &tx);
        }
        assert_eq!(app.conversation_state.conversation_name, "Demo");
    }

    #[test]
    fn toolbar_actions_input_splits_on_every_keystroke() {
        let mut app = test_app();
        app.toolbar_actions_input.set("a, b ,c");
        sync_field(&mut app, FieldId::ToolbarActions);
        assert_eq!(app.conversation_state.toolbar_actions, vec!["a", "b", "c"]);
    }

    #[test]
    fn property_toggle_preserves_sibling_flags() {
        let mut app = test_app();
        app.conversation_state.properties.participant_absent_timeout = 99;
        toggle_field(&mut app, FieldId::EnableTranscription);
        assert!(app.conversation_state.properties.enable_transcription);
        assert_eq!(
            app.conversation_state.properties.participant_absent_timeout,
            99
        );
    }

    #[test]
    fn cycle_option_wraps_and_recovers_from_unknown() {
        assert_eq!(cycle_option(SCROLL_TYPES, "vertical", true), "horizontal");
        assert_eq!(cycle_option(SCROLL_TYPES, "horizontal", true), "vertical");
        assert_eq!(cycle_option(SCROLL_TYPES, "", true), "vertical");
        assert_eq!(cycle_option(SCROLL_TYPES, "vertical", false), "horizontal");
    }

    #[test]
    fn replica_cycling_starts_at_first_option() {
        let mut app = test_app();
        cycle_select(&mut app, FieldId::ReplicaSelect, true);
        assert_eq!(app.selected_replica, "rep1");
        cycle_select(&mut app, FieldId::ReplicaSelect, true);
        assert_eq!(app.selected_replica, "rep2");
    }

    #[test]
    fn create_button_only_on_conversation_tab() {
        let mut app = test_app();
        assert!(!visible_buttons(&app).contains(&ButtonFocus::Create));
        app.active_wizard = WizardSelection::Conversation;
        assert!(visible_buttons(&app).contains(&ButtonFocus::Create));
    }

    #[test]
    fn focus_clamps_when_conditional_panel_collapses() {
        let mut app = test_app();
        app.active_wizard = WizardSelection::Conversation;
        app.conversation_state.toolbar_enabled = true;
        let last = visible_fields(&app).len() - 1;
        app.focus = FocusTarget::Field(last);

        app.conversation_state.toolbar_enabled = false;
        clamp_focus(&mut app);
        let FocusTarget::Field(idx) = app.focus else {
            panic!("focus left the field list");
        };
        assert!(idx < visible_fields(&app).len());
    }

    #[test]
    fn snippet_follows_active_wizard() {
        let mut app = test_app();
        assert!(app.code_snippet().contains("Replica and Persona Management"));
        app.active_wizard = WizardSelection::Conversation;
        assert!(app.code_snippet().contains("Conversation Management"));
        app.active_wizard = WizardSelection::Video;
        assert!(app.code_snippet().contains("Video Generation"));
    }

    #[test]
    fn smoke_renders_every_target() {
        for target in ["replica", "conversation", "video", ""] {
            assert!(smoke(target).is_ok(), "target {:?}", target);
        }
    }

    #[test]
    fn esc_opens_quit_modal_defaulting_to_stay() {
        let (tx, _rx) = channel();
        let mut app = test_app();
        handle_key(&mut app, KeyCode::Esc, &tx);
        assert_eq!(
            app.modal,
            Some(Modal::ConfirmQuit {
                quit_selected: false
            })
        );

        handle_key(&mut app, KeyCode::Enter, &tx);
        assert!(app.modal.is_none());
        assert!(!app.quit);
    }

    #[test]
    fn quit_modal_confirms_quit() {
        let (tx, _rx) = channel();
        let mut app = test_app();
        handle_key(&mut app, KeyCode::Esc, &tx);
        handle_key(&mut app, KeyCode::Tab, &tx);
        handle_key(&mut app, KeyCode::Enter, &tx);
        assert!(app.quit);
    }
}
