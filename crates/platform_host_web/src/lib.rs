//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for preferences
//! (`localStorage`), the chat relay (`fetch`), external URL opening (`window.open`),
//! and chat sound cues (Web Audio).
//! On non-wasm targets every adapter degrades to the no-op behavior of its contract so the
//! runtime can be exercised natively in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod chat_relay;
pub mod external_url;
pub mod sound;
pub mod storage;

pub use adapters::{
    build_host_services, chat_relay_service, external_url_service, host_strategy_name, prefs_store,
    selected_host_strategy, sound_service, HostStrategy, DEFAULT_CHAT_ENDPOINT,
};
pub use chat_relay::FetchChatRelay;
pub use external_url::WebExternalUrlService;
pub use sound::WebSoundService;
pub use storage::local_prefs::WebPrefsStore;
