use std::rc::Rc;

use platform_host::{
    ChatRelay, ExternalUrlService, HostServices, NoopChatRelay, NoopExternalUrlService,
    NoopPrefsStore, NoopSoundService, PrefsStore, SoundService,
};

use crate::{FetchChatRelay, WebExternalUrlService, WebPrefsStore, WebSoundService};

/// Relay endpoint used when the entry layer does not override it.
pub const DEFAULT_CHAT_ENDPOINT: &str = "/api/chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters from this crate.
    Browser,
    /// No-op adapters for static previews without storage or a relay backend.
    Stub,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Stub
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Stub => "stub",
    }
}

/// Builds the preference store for the selected host strategy.
pub fn prefs_store() -> Rc<dyn PrefsStore> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebPrefsStore),
        HostStrategy::Stub => Rc::new(NoopPrefsStore),
    }
}

/// Builds the chat relay for the selected host strategy.
pub fn chat_relay_service(endpoint: &str) -> Rc<dyn ChatRelay> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(FetchChatRelay::new(endpoint)),
        HostStrategy::Stub => Rc::new(NoopChatRelay),
    }
}

/// Builds the external-URL service for the selected host strategy.
pub fn external_url_service() -> Rc<dyn ExternalUrlService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebExternalUrlService),
        HostStrategy::Stub => Rc::new(NoopExternalUrlService),
    }
}

/// Builds the sound cue service for the selected host strategy.
pub fn sound_service() -> Rc<dyn SoundService> {
    match selected_host_strategy() {
        HostStrategy::Browser => Rc::new(WebSoundService::default()),
        HostStrategy::Stub => Rc::new(NoopSoundService),
    }
}

/// Assembles the [`HostServices`] bundle injected into the desktop runtime.
pub fn build_host_services(chat_endpoint: &str) -> HostServices {
    HostServices {
        prefs: prefs_store(),
        chat_relay: chat_relay_service(chat_endpoint),
        external_urls: external_url_service(),
        sounds: sound_service(),
    }
}
