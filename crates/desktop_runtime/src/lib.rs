//! Desktop window manager core and the Leptos shell UI that projects it.
//!
//! [`stack::WindowStack`] owns window records and stacking, [`geometry`] derives rectangles,
//! [`taskbar`] projects taskbar presence, and [`reducer::reduce_desktop`] is the lifecycle
//! controller driven by the shell components.

pub mod backgrounds;
pub mod chat;
pub mod components;
mod effect_executor;
pub mod geometry;
pub mod host;
pub mod inventory;
mod markdown;
pub mod model;
pub mod persistence;
pub mod reducer;
mod runtime_context;
pub mod stack;
pub mod taskbar;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use inventory::{DesktopInventory, InventoryEntry, InventoryError, Placement};
pub use model::*;
pub use persistence::{
    load_boot_preferences, persist_audio_muted, persist_background, persist_welcome_dismissed,
};
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect, SoundCue};
pub use stack::WindowStack;
pub use taskbar::{project_taskbar, TaskbarButton};
