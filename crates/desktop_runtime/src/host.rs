//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! The reducer stays pure; everything that touches storage, the network, timers, or the browser
//! window goes through [`DesktopHostContext`], which wraps the injected [`HostServices`].

mod boot;
mod chat_effects;
mod host_ui;
mod persistence_effects;
mod transitions;

use std::{cell::Cell, rc::Rc};

use leptos::{logging, Callback};
use platform_host::{
    ChatRelay, ExternalUrlService, HostServices, PrefsStore, SoundCue, SoundService,
};

use crate::{
    model::Viewport,
    reducer::{DesktopAction, RuntimeEffect},
    runtime_context::DesktopRuntimeContext,
};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
    timers: transitions::TransitionTimers,
    active: Rc<Cell<bool>>,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self {
            services,
            timers: transitions::TransitionTimers::default(),
            active: Rc::new(Cell::new(true)),
        }
    }

    /// Returns the configured lightweight preference service.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.services.prefs.clone()
    }

    /// Returns the configured chat relay.
    pub fn chat_relay(&self) -> Rc<dyn ChatRelay> {
        self.services.chat_relay.clone()
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the configured sound cue service.
    pub fn sound_service(&self) -> Rc<dyn SoundService> {
        self.services.sounds.clone()
    }

    /// Plays a chat sound cue. Playback failures are logged and otherwise ignored.
    pub fn play_sound(&self, cue: SoundCue) {
        if !self.is_active() {
            return;
        }
        if let Err(err) = self.sound_service().play(cue) {
            logging::warn!("sound cue {cue:?} failed: {err}");
        }
    }

    /// Whether the owning provider is still mounted. Async completions check this before
    /// dispatching.
    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Installs boot hydration: load preferences, then report boot completion.
    pub fn install_boot_hydration(&self, dispatch: Callback<DesktopAction>) {
        boot::install_boot_hydration(self.clone(), dispatch);
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::PersistWelcomeDismissed => {
                persistence_effects::persist_welcome_dismissed(self.clone())
            }
            RuntimeEffect::PersistBackground(background_id) => {
                persistence_effects::persist_background(self.clone(), background_id)
            }
            RuntimeEffect::PersistAudioMuted(muted) => {
                persistence_effects::persist_audio_muted(self.clone(), muted)
            }
            RuntimeEffect::OpenExternalUrl(url) => host_ui::open_external_url(self.clone(), &url),
            RuntimeEffect::PlaySound(cue) => self.play_sound(cue),
            RuntimeEffect::ScheduleTransitionEnd {
                window_id,
                token,
                delay_ms,
            } => self
                .timers
                .schedule(self.clone(), runtime.dispatch, window_id, token, delay_ms),
            RuntimeEffect::SendChatRequest {
                request_id,
                request,
            } => chat_effects::send_chat_request(self.clone(), runtime.dispatch, request_id, request),
        }
    }

    /// Current full browser viewport.
    pub fn viewport(&self) -> Viewport {
        host_ui::viewport()
    }

    /// Stops every pending timer and blocks later async completions from dispatching.
    pub fn shutdown(&self) {
        self.active.set(false);
        self.timers.clear_all();
    }
}
