//! Host service bundle injected into the desktop runtime.

use std::rc::Rc;

use crate::{
    ChatRelay, ExternalUrlService, NoopChatRelay, NoopExternalUrlService, NoopPrefsStore,
    NoopSoundService, PrefsStore, SoundService,
};

/// Runtime-selected host service bundle injected into the shared desktop runtime.
///
/// All environment-specific service selection happens before this bundle crosses into
/// `desktop_runtime`, which keeps the window manager decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Lightweight typed preference store.
    pub prefs: Rc<dyn PrefsStore>,
    /// Chat completion relay used by the chat panel.
    pub chat_relay: Rc<dyn ChatRelay>,
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Chat sound cue playback.
    pub sounds: Rc<dyn SoundService>,
}

impl HostServices {
    /// Bundle with no persistence, no network, no navigation and no sound.
    pub fn noop() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            chat_relay: Rc::new(NoopChatRelay),
            external_urls: Rc::new(NoopExternalUrlService),
            sounds: Rc::new(NoopSoundService),
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices").finish_non_exhaustive()
    }
}
