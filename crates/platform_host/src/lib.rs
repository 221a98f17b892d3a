//! Typed host-domain contracts shared by the desktop runtime and its browser adapters.
//!
//! This crate is the API-first boundary for platform services the window-manager shell
//! consumes without owning: lightweight preference storage, the chat relay, external URL
//! opening, and sound cues. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat_relay;
pub mod external_url;
pub mod host;
pub mod sound;
pub mod storage;
pub mod time;

pub use chat_relay::{
    decode_relay_response, ChatRelay, ChatRelayError, ChatRelayFuture, ChatRelayReply,
    ChatRelayRequest, ChatRole, ChatTurn, NoopChatRelay, ScriptedChatRelay,
};
pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::HostServices;
pub use sound::{NoopSoundService, RecordingSoundService, SoundCue, SoundService};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsError, PrefsStore,
    PrefsStoreFuture,
};
pub use time::unix_time_ms_now;
