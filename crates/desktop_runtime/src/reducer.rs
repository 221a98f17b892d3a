//! Reducer actions, side-effect intents, and the window lifecycle controller.

use leptos::logging;
pub use platform_host::SoundCue;
use platform_host::{ChatRelayError, ChatRelayReply, ChatRelayRequest};

use crate::{
    backgrounds,
    inventory::DesktopInventory,
    model::{
        BootPreferences, DesktopState, DragSession, InteractionState, Point, PowerScreen,
        TransitionKind, Viewport, WindowId, WindowTransition, TRANSITION_DURATION_MS,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open request from a desktop icon, start-menu item, or the messenger tray icon.
    ///
    /// Focuses (and unminimizes) an already open window instead of creating a second one.
    ActivateEntry {
        /// Inventory id of the entry.
        entry_id: String,
        /// Wall-clock time of the request, used to stamp fresh panel content.
        now_ms: u64,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Raise a window to the front.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Hide a window behind its taskbar button.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Fill the work area.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Return a maximized window to its free-floating geometry.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Maximize or restore depending on the current state (title-bar button).
    ToggleMaximize {
        /// Window to toggle.
        window_id: WindowId,
    },
    /// Taskbar button click: always unminimize and focus.
    ActivateTaskbarButton {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: Point,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: Point,
    },
    /// End the active window drag.
    EndMove,
    /// A scheduled presentation transition elapsed.
    CompleteTransition {
        /// Window the transition belongs to.
        window_id: WindowId,
        /// Token issued when the transition started.
        token: u64,
    },
    /// The browser viewport changed size.
    SetViewport {
        /// New full viewport size.
        viewport: Viewport,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Select a desktop icon, or clear the selection with `None`.
    SelectDesktopIcon {
        /// Inventory id of the icon.
        entry_id: Option<String>,
    },
    /// Apply a background preset.
    SetBackground {
        /// Preset id.
        background_id: String,
    },
    /// Mute or unmute chat sound cues.
    SetAudioMuted {
        /// Whether cues are suppressed.
        muted: bool,
    },
    /// Apply preference values loaded at boot.
    HydratePreferences {
        /// Loaded values.
        preferences: BootPreferences,
    },
    /// Boot hydration finished; shows the welcome panel unless it was dismissed.
    BootHydrationComplete,
    /// Start-menu power item chosen.
    RequestPower {
        /// Which screen to show.
        screen: PowerScreen,
    },
    /// Leave the power screen.
    DismissPowerScreen,
    /// Chat input text changed.
    ChatInputChanged {
        /// Current input text.
        text: String,
    },
    /// Send the current chat input.
    ChatSend {
        /// Wall-clock time of the send.
        now_ms: u64,
    },
    /// The host finished a chat relay exchange.
    ChatReplyReceived {
        /// Request id issued with [`RuntimeEffect::SendChatRequest`].
        request_id: u64,
        /// Relay outcome.
        outcome: Result<ChatRelayReply, ChatRelayError>,
        /// Wall-clock time the outcome arrived.
        now_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host to execute.
pub enum RuntimeEffect {
    /// Remember that the dismiss-once welcome panel was closed.
    PersistWelcomeDismissed,
    /// Persist the selected background preset id.
    PersistBackground(String),
    /// Persist the chat mute flag.
    PersistAudioMuted(bool),
    /// Open a URL outside the desktop shell.
    OpenExternalUrl(String),
    /// Play a UI sound cue.
    PlaySound(SoundCue),
    /// Dispatch [`DesktopAction::CompleteTransition`] after `delay_ms`.
    ScheduleTransitionEnd {
        /// Window the transition belongs to.
        window_id: WindowId,
        /// Token to echo back.
        token: u64,
        /// Delay before completion.
        delay_ms: u32,
    },
    /// Run a chat relay exchange and report back with [`DesktopAction::ChatReplyReceived`].
    SendChatRequest {
        /// Request id to echo back.
        request_id: u64,
        /// Relay request body.
        request: ChatRelayRequest,
    },
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions naming a window that is no longer open are ignored; a stale callback can never
/// corrupt the window stack.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    inventory: &DesktopInventory,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::ActivateEntry { entry_id, now_ms } => {
            state.start_menu_open = false;
            activate_entry(state, interaction, inventory, &entry_id, now_ms, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            let Some(closed) = state.stack.close(&window_id) else {
                ignore_stale("close", &window_id);
                return effects;
            };
            end_window_interaction(interaction, &closed.id);
            if closed.id.as_str() == crate::taskbar::MESSENGER_WINDOW_ID {
                state.chat.reset(0);
            }
            let dismiss_once = inventory
                .entry(closed.id.as_str())
                .is_some_and(|entry| entry.dismiss_once);
            if dismiss_once && !state.welcome_dismissed {
                state.welcome_dismissed = true;
                effects.push(RuntimeEffect::PersistWelcomeDismissed);
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if !state.stack.focus(&window_id) {
                ignore_stale("focus", &window_id);
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let Some(was_minimized) = state.stack.get(&window_id).map(|w| w.is_minimized) else {
                ignore_stale("minimize", &window_id);
                return effects;
            };
            if was_minimized {
                return effects;
            }
            state.stack.minimize(&window_id);
            if interaction.is_dragging(&window_id) {
                interaction.dragging = None;
            }
            effects.push(begin_transition(
                interaction,
                window_id,
                TransitionKind::Minimizing,
            ));
        }
        DesktopAction::MaximizeWindow { window_id } => maximize(state, interaction, &window_id),
        DesktopAction::RestoreWindow { window_id } => {
            if !state.stack.contains(&window_id) {
                ignore_stale("restore", &window_id);
            }
            state.stack.restore(&window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            match state.stack.get(&window_id).map(|w| w.is_maximized) {
                Some(true) => {
                    state.stack.restore(&window_id);
                }
                Some(false) => maximize(state, interaction, &window_id),
                None => ignore_stale("toggle maximize", &window_id),
            }
        }
        DesktopAction::ActivateTaskbarButton { window_id } => {
            if let Some(effect) = bring_back(state, interaction, &window_id) {
                effects.push(effect);
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let Some(window) = state.stack.get(&window_id) else {
                ignore_stale("begin move", &window_id);
                return effects;
            };
            if window.is_minimized || window.is_maximized {
                return effects;
            }
            let position_start = window.position;
            state.stack.focus(&window_id);
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                position_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            let Some(session) = interaction.dragging.clone() else {
                return effects;
            };
            let movable = state
                .stack
                .get(&session.window_id)
                .is_some_and(|w| !w.is_maximized && !w.is_minimized);
            if !movable {
                interaction.dragging = None;
                return effects;
            }
            let proposed = session.position_start.offset(
                pointer.x - session.pointer_start.x,
                pointer.y - session.pointer_start.y,
            );
            state
                .stack
                .set_position(&session.window_id, proposed.x, proposed.y);
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::CompleteTransition { window_id, token } => {
            interaction
                .transitions
                .retain(|t| !(t.window_id == window_id && t.token == token));
        }
        DesktopAction::SetViewport { viewport } => {
            state.stack.set_viewport(viewport);
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu_open = !state.start_menu_open;
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu_open = false;
        }
        DesktopAction::SelectDesktopIcon { entry_id } => {
            state.selected_icon = entry_id.map(WindowId::new);
        }
        DesktopAction::SetBackground { background_id } => {
            if backgrounds::background_preset(&background_id).is_none() {
                logging::debug_warn!("ignoring unknown background `{background_id}`");
                return effects;
            }
            if state.background_id != background_id {
                state.background_id = background_id.clone();
                effects.push(RuntimeEffect::PersistBackground(background_id));
            }
        }
        DesktopAction::SetAudioMuted { muted } => {
            if state.audio_muted != muted {
                state.audio_muted = muted;
                effects.push(RuntimeEffect::PersistAudioMuted(muted));
            }
        }
        DesktopAction::HydratePreferences { preferences } => {
            state.welcome_dismissed = preferences.welcome_dismissed;
            state.audio_muted = preferences.audio_muted;
            state.background_id = preferences
                .background_id
                .as_deref()
                .map(backgrounds::resolve_stored_background)
                .unwrap_or_else(backgrounds::default_background)
                .id
                .to_string();
        }
        DesktopAction::BootHydrationComplete => {
            if state.boot_complete {
                return effects;
            }
            state.boot_complete = true;
            if state.welcome_dismissed {
                return effects;
            }
            if let Some(welcome) = inventory.welcome_entry() {
                let welcome_id = welcome.id.clone();
                activate_entry(state, interaction, inventory, &welcome_id, 0, &mut effects);
            }
        }
        DesktopAction::RequestPower { screen } => {
            state.start_menu_open = false;
            state.power_screen = Some(screen);
        }
        DesktopAction::DismissPowerScreen => {
            state.power_screen = None;
        }
        DesktopAction::ChatInputChanged { text } => {
            state.chat.set_input(text);
        }
        DesktopAction::ChatSend { now_ms } => {
            if let Some((request_id, request)) = state.chat.begin_send(now_ms) {
                if !state.audio_muted {
                    effects.push(RuntimeEffect::PlaySound(SoundCue::MessageSent));
                }
                effects.push(RuntimeEffect::SendChatRequest {
                    request_id,
                    request,
                });
            }
        }
        DesktopAction::ChatReplyReceived {
            request_id,
            outcome,
            now_ms,
        } => {
            let replied = outcome.is_ok();
            if !state.chat.complete(request_id, outcome, now_ms) {
                logging::debug_warn!("dropping reply for superseded chat request {request_id}");
                return effects;
            }
            if replied && !state.audio_muted {
                effects.push(RuntimeEffect::PlaySound(SoundCue::MessageReceived));
            }
        }
    }

    effects
}

/// Single-instance open: focus an existing window or create one from its inventory entry.
fn activate_entry(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    inventory: &DesktopInventory,
    entry_id: &str,
    now_ms: u64,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(entry) = inventory.entry(entry_id) else {
        logging::debug_warn!("ignoring open request for unknown entry `{entry_id}`");
        return;
    };
    if let Some(url) = &entry.external_url {
        effects.push(RuntimeEffect::OpenExternalUrl(url.clone()));
        return;
    }

    let window_id = entry.window_id();
    if state.stack.contains(&window_id) {
        if let Some(effect) = bring_back(state, interaction, &window_id) {
            effects.push(effect);
        }
        return;
    }

    let position = entry.initial_position(state.stack.len(), state.stack.viewport());
    state.stack.open(
        window_id.clone(),
        entry.window_title(),
        position,
        entry.window_size(),
    );
    if window_id.as_str() == crate::taskbar::MESSENGER_WINDOW_ID {
        state.chat.reset(now_ms);
    }
}

/// Unminimizes and focuses; starts a restoring transition if the window was hidden.
fn bring_back(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    window_id: &WindowId,
) -> Option<RuntimeEffect> {
    let Some(was_minimized) = state.stack.get(window_id).map(|w| w.is_minimized) else {
        ignore_stale("activate", window_id);
        return None;
    };
    state.stack.restore_from_minimize(window_id);
    was_minimized.then(|| begin_transition(interaction, window_id.clone(), TransitionKind::Restoring))
}

fn maximize(state: &mut DesktopState, interaction: &mut InteractionState, window_id: &WindowId) {
    if !state.stack.contains(window_id) {
        ignore_stale("maximize", window_id);
        return;
    }
    state.stack.maximize(window_id);
    if interaction.is_dragging(window_id) {
        interaction.dragging = None;
    }
}

fn begin_transition(
    interaction: &mut InteractionState,
    window_id: WindowId,
    kind: TransitionKind,
) -> RuntimeEffect {
    interaction.transitions.retain(|t| t.window_id != window_id);
    interaction.next_transition_token += 1;
    let token = interaction.next_transition_token;
    interaction.transitions.push(WindowTransition {
        window_id: window_id.clone(),
        kind,
        token,
    });
    RuntimeEffect::ScheduleTransitionEnd {
        window_id,
        token,
        delay_ms: TRANSITION_DURATION_MS,
    }
}

fn end_window_interaction(interaction: &mut InteractionState, window_id: &WindowId) {
    if interaction.is_dragging(window_id) {
        interaction.dragging = None;
    }
    interaction.transitions.retain(|t| &t.window_id != window_id);
}

fn ignore_stale(operation: &str, window_id: &WindowId) {
    logging::debug_warn!("ignoring {operation} for closed window `{window_id}`");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        inventory::{test_entry, DesktopInventory, Placement},
        model::{Size, Z_INDEX_BASE},
    };

    fn inventory() -> DesktopInventory {
        let mut welcome = test_entry("welcome", "Welcome");
        welcome.title = Some("Welcome!".to_string());
        welcome.show_on_desktop = false;
        welcome.dismiss_once = true;
        welcome.placement = Placement::Centered;
        welcome.width = Some(500);
        welcome.height = Some(400);

        let mut link = test_entry("source", "Source Code");
        link.external_url = Some("https://example.com/source".to_string());

        DesktopInventory::new(vec![
            test_entry("chat", "Chat with my resume"),
            test_entry("resume", "Resume.pdf"),
            test_entry("contact", "Contact Me"),
            welcome,
            link,
        ])
        .expect("valid inventory")
    }

    struct Harness {
        state: DesktopState,
        interaction: InteractionState,
        inventory: DesktopInventory,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: DesktopState::new(Viewport::new(1280, 800)),
                interaction: InteractionState::default(),
                inventory: inventory(),
            }
        }

        fn apply(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
            reduce_desktop(
                &mut self.state,
                &mut self.interaction,
                &self.inventory,
                action,
            )
        }

        fn open(&mut self, id: &str) -> Vec<RuntimeEffect> {
            self.apply(DesktopAction::ActivateEntry {
                entry_id: id.to_string(),
                now_ms: 1_000,
            })
        }

        fn window(&self, id: &str) -> &crate::model::WindowRecord {
            self.state.stack.get(&WindowId::from(id)).expect("window open")
        }
    }

    fn wid(id: &str) -> WindowId {
        WindowId::from(id)
    }

    #[test]
    fn open_creates_cascaded_window_titled_from_inventory() {
        let mut h = Harness::new();
        h.open("resume");
        h.open("contact");

        let contact = h.window("contact");
        assert_eq!(contact.title, "Contact Me");
        assert_eq!(contact.position, Point::new(130, 130));
        assert_eq!(contact.size, Size::default());
        assert_eq!(contact.z_index, Z_INDEX_BASE + 2);
        assert_eq!(h.state.active_window_id(), Some(&wid("contact")));
    }

    #[test]
    fn reopening_minimized_window_restores_and_focuses_without_duplicate() {
        let mut h = Harness::new();
        h.open("resume");
        h.open("contact");
        h.apply(DesktopAction::MinimizeWindow {
            window_id: wid("resume"),
        });

        let effects = h.open("resume");
        assert_eq!(h.state.stack.len(), 2);
        assert!(!h.window("resume").is_minimized);
        assert_eq!(h.state.active_window_id(), Some(&wid("resume")));
        assert!(matches!(
            effects.as_slice(),
            [RuntimeEffect::ScheduleTransitionEnd { window_id, .. }] if window_id == &wid("resume")
        ));
    }

    #[test]
    fn unknown_entry_is_silent_noop_and_external_entry_opens_url() {
        let mut h = Harness::new();
        let before = h.state.clone();
        assert_eq!(h.open("nope"), Vec::new());
        assert_eq!(h.state, before);

        assert_eq!(
            h.open("source"),
            vec![RuntimeEffect::OpenExternalUrl(
                "https://example.com/source".to_string()
            )]
        );
        assert!(h.state.stack.is_empty());
    }

    #[test]
    fn closing_dismiss_once_window_persists_acknowledgement_once() {
        let mut h = Harness::new();
        h.apply(DesktopAction::BootHydrationComplete);
        let welcome = h.window("welcome");
        assert_eq!(welcome.title, "Welcome!");
        assert_eq!(welcome.position, Point::new(390, 200));

        let effects = h.apply(DesktopAction::CloseWindow {
            window_id: wid("welcome"),
        });
        assert_eq!(effects, vec![RuntimeEffect::PersistWelcomeDismissed]);
        assert!(h.state.welcome_dismissed);

        h.open("welcome");
        let effects = h.apply(DesktopAction::CloseWindow {
            window_id: wid("welcome"),
        });
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn boot_skips_welcome_once_dismissed() {
        let mut h = Harness::new();
        h.apply(DesktopAction::HydratePreferences {
            preferences: BootPreferences {
                welcome_dismissed: true,
                background_id: Some("#2c8c8c".to_string()),
                audio_muted: true,
            },
        });
        h.apply(DesktopAction::BootHydrationComplete);
        assert!(h.state.stack.is_empty());
        assert_eq!(h.state.background_id, "teal");
        assert!(h.state.audio_muted);
    }

    #[test]
    fn stale_window_actions_are_noops() {
        let mut h = Harness::new();
        h.open("resume");
        h.apply(DesktopAction::CloseWindow {
            window_id: wid("resume"),
        });
        let before = h.state.clone();

        for action in [
            DesktopAction::CloseWindow {
                window_id: wid("resume"),
            },
            DesktopAction::FocusWindow {
                window_id: wid("resume"),
            },
            DesktopAction::MinimizeWindow {
                window_id: wid("resume"),
            },
            DesktopAction::MaximizeWindow {
                window_id: wid("resume"),
            },
            DesktopAction::RestoreWindow {
                window_id: wid("resume"),
            },
            DesktopAction::ToggleMaximize {
                window_id: wid("resume"),
            },
            DesktopAction::ActivateTaskbarButton {
                window_id: wid("resume"),
            },
        ] {
            assert_eq!(h.apply(action), Vec::new());
        }
        assert_eq!(h.state, before);
    }

    #[test]
    fn drag_applies_deltas_from_start_and_clamps_every_update() {
        let mut h = Harness::new();
        h.open("resume");
        h.apply(DesktopAction::BeginMove {
            window_id: wid("resume"),
            pointer: Point::new(10, 10),
        });
        h.apply(DesktopAction::UpdateMove {
            pointer: Point::new(35, 50),
        });
        assert_eq!(h.window("resume").position, Point::new(125, 140));

        h.apply(DesktopAction::UpdateMove {
            pointer: Point::new(-9_000, 9_000),
        });
        assert_eq!(h.window("resume").position, Point::new(0, 360));

        h.apply(DesktopAction::UpdateMove {
            pointer: Point::new(20, 20),
        });
        assert_eq!(h.window("resume").position, Point::new(110, 110));

        h.apply(DesktopAction::EndMove);
        assert_eq!(h.interaction.dragging, None);
    }

    #[test]
    fn maximize_mid_drag_cancels_the_drag() {
        let mut h = Harness::new();
        h.open("resume");
        h.apply(DesktopAction::BeginMove {
            window_id: wid("resume"),
            pointer: Point::new(0, 0),
        });
        h.apply(DesktopAction::ToggleMaximize {
            window_id: wid("resume"),
        });
        assert_eq!(h.interaction.dragging, None);

        h.apply(DesktopAction::UpdateMove {
            pointer: Point::new(300, 300),
        });
        assert_eq!(h.window("resume").position, Point::new(0, 0));
        assert_eq!(h.window("resume").size, Size::new(1280, 760));

        h.apply(DesktopAction::ToggleMaximize {
            window_id: wid("resume"),
        });
        assert_eq!(h.window("resume").position, Point::new(100, 100));
    }

    #[test]
    fn stale_transition_completion_is_ignored() {
        let mut h = Harness::new();
        h.open("resume");
        let first = h.apply(DesktopAction::MinimizeWindow {
            window_id: wid("resume"),
        });
        let [RuntimeEffect::ScheduleTransitionEnd { token: stale, .. }] = first.as_slice() else {
            panic!("expected a scheduled transition, got {first:?}");
        };
        let stale = *stale;

        h.apply(DesktopAction::ActivateTaskbarButton {
            window_id: wid("resume"),
        });
        let pending = h
            .interaction
            .transition_for(&wid("resume"))
            .cloned()
            .expect("restoring transition");
        assert_eq!(pending.kind, TransitionKind::Restoring);

        h.apply(DesktopAction::CompleteTransition {
            window_id: wid("resume"),
            token: stale,
        });
        assert_eq!(h.interaction.transition_for(&wid("resume")), Some(&pending));

        h.apply(DesktopAction::CompleteTransition {
            window_id: wid("resume"),
            token: pending.token,
        });
        assert_eq!(h.interaction.transition_for(&wid("resume")), None);
    }

    #[test]
    fn background_changes_persist_and_unknown_ids_are_ignored() {
        let mut h = Harness::new();
        assert_eq!(
            h.apply(DesktopAction::SetBackground {
                background_id: "purple".to_string()
            }),
            vec![RuntimeEffect::PersistBackground("purple".to_string())]
        );
        assert_eq!(
            h.apply(DesktopAction::SetBackground {
                background_id: "plaid".to_string()
            }),
            Vec::new()
        );
        assert_eq!(h.state.background_id, "purple");
    }

    #[test]
    fn power_screen_leaves_windows_untouched() {
        let mut h = Harness::new();
        h.open("resume");
        h.apply(DesktopAction::ToggleStartMenu);
        let stack = h.state.stack.clone();

        h.apply(DesktopAction::RequestPower {
            screen: PowerScreen::Restart,
        });
        assert_eq!(h.state.power_screen, Some(PowerScreen::Restart));
        assert!(!h.state.start_menu_open);
        h.apply(DesktopAction::DismissPowerScreen);
        assert_eq!(h.state.power_screen, None);
        assert_eq!(h.state.stack, stack);
    }

    #[test]
    fn chat_send_emits_request_and_cue_unless_muted() {
        let mut h = Harness::new();
        h.open("chat");
        h.apply(DesktopAction::ChatInputChanged {
            text: "hello".to_string(),
        });
        let effects = h.apply(DesktopAction::ChatSend { now_ms: 2_000 });
        assert_eq!(effects[0], RuntimeEffect::PlaySound(SoundCue::MessageSent));
        let RuntimeEffect::SendChatRequest { request_id, request } = &effects[1] else {
            panic!("expected chat request, got {effects:?}");
        };
        assert_eq!(request.message, "hello");

        h.apply(DesktopAction::SetAudioMuted { muted: true });
        let effects = h.apply(DesktopAction::ChatReplyReceived {
            request_id: *request_id,
            outcome: Ok(ChatRelayReply {
                reply: "hi there".to_string(),
            }),
            now_ms: 3_000,
        });
        assert_eq!(effects, Vec::new());
        assert_eq!(
            h.state.chat.messages().last().map(|m| m.text.as_str()),
            Some("hi there")
        );
    }

    #[test]
    fn closing_chat_drops_in_flight_reply() {
        let mut h = Harness::new();
        h.open("chat");
        h.apply(DesktopAction::ChatInputChanged {
            text: "hello".to_string(),
        });
        let effects = h.apply(DesktopAction::ChatSend { now_ms: 2_000 });
        let Some(RuntimeEffect::SendChatRequest { request_id, .. }) = effects.last() else {
            panic!("expected chat request");
        };
        let request_id = *request_id;

        h.apply(DesktopAction::CloseWindow {
            window_id: wid("chat"),
        });
        h.open("chat");
        let fresh = h.state.chat.clone();
        h.apply(DesktopAction::ChatReplyReceived {
            request_id,
            outcome: Ok(ChatRelayReply {
                reply: "late".to_string(),
            }),
            now_ms: 5_000,
        });
        assert_eq!(h.state.chat, fresh);
        assert_eq!(h.state.chat.messages().len(), 1);
    }
}
