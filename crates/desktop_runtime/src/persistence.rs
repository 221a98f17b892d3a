//! Desktop runtime persistence adapters for boot hydration and lightweight local preferences.
//!
//! Window layout is deliberately not persisted; only three small flags survive a reload.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsError, PrefsStore};

use crate::model::BootPreferences;

pub const WELCOME_DISMISSED_KEY: &str = "welcomeWindowClosed";
pub const BACKGROUND_KEY: &str = "desktopBackground";
pub const AUDIO_MUTED_KEY: &str = "chatAudioMuted";

/// Loads every boot preference. Failures are logged and treated as first-run values.
pub async fn load_boot_preferences(store: &dyn PrefsStore) -> BootPreferences {
    BootPreferences {
        welcome_dismissed: load_flag(store, WELCOME_DISMISSED_KEY).await,
        background_id: load_background(store).await,
        audio_muted: load_flag(store, AUDIO_MUTED_KEY).await,
    }
}

async fn load_flag(store: &dyn PrefsStore, key: &str) -> bool {
    match load_pref_with::<_, bool>(store, key).await {
        Ok(value) => value.unwrap_or(false),
        Err(err) => {
            logging::warn!("load preference `{key}` failed: {err}");
            false
        }
    }
}

/// Stored background reference. Values written as bare text (not JSON) are accepted verbatim.
async fn load_background(store: &dyn PrefsStore) -> Option<String> {
    let raw = match store.load_pref(BACKGROUND_KEY).await {
        Ok(raw) => raw?,
        Err(err) => {
            logging::warn!("load preference `{BACKGROUND_KEY}` failed: {err}");
            return None;
        }
    };
    Some(serde_json::from_str::<String>(&raw).unwrap_or(raw))
}

/// Records that the dismiss-once welcome panel was closed.
///
/// # Errors
///
/// Returns the store error.
pub async fn persist_welcome_dismissed(store: &dyn PrefsStore) -> Result<(), PrefsError> {
    save_pref_with(store, WELCOME_DISMISSED_KEY, &true).await
}

/// Stores the selected background preset id.
///
/// # Errors
///
/// Returns the store error.
pub async fn persist_background(store: &dyn PrefsStore, background_id: &str) -> Result<(), PrefsError> {
    save_pref_with(store, BACKGROUND_KEY, background_id).await
}

/// Stores the chat mute flag.
///
/// # Errors
///
/// Returns the store error.
pub async fn persist_audio_muted(store: &dyn PrefsStore, muted: bool) -> Result<(), PrefsError> {
    save_pref_with(store, AUDIO_MUTED_KEY, &muted).await
}
