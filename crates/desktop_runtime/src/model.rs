//! Shared data model for the desktop runtime: window records, geometry primitives, and the
//! top-level state container mutated by [`crate::reducer::reduce_desktop`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{backgrounds::DEFAULT_BACKGROUND_ID, chat::ChatConversation, stack::WindowStack};

/// Height reserved at the bottom of the viewport for the taskbar band.
pub const TASKBAR_HEIGHT: i32 = 40;
/// Stacking priority issued windows start above, leaving room for desktop chrome.
pub const Z_INDEX_BASE: u64 = 1000;
pub const DEFAULT_WINDOW_WIDTH: i32 = 600;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 400;
/// Duration of the minimize/restore presentation transition.
pub const TRANSITION_DURATION_MS: u32 = 120;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Identifier of an open window; doubles as content-selector and taskbar-button key.
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Full browser viewport, including the taskbar band.
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Position plus size of a window.
pub struct WindowGeometry {
    pub position: Point,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One open window managed by [`WindowStack`].
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub z_index: u64,
    pub position: Point,
    pub size: Size,
    /// Free-floating position captured when the window was maximized.
    pub saved_position: Option<Point>,
    /// Free-floating size captured when the window was maximized.
    pub saved_size: Option<Size>,
}

impl WindowRecord {
    pub fn geometry(&self) -> WindowGeometry {
        WindowGeometry {
            position: self.position,
            size: self.size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Full-screen "the computer refused" screen shown instead of actually powering off.
pub enum PowerScreen {
    ShutDown,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
/// Preference values read once at boot. Missing values mean first run.
pub struct BootPreferences {
    pub welcome_dismissed: bool,
    pub background_id: Option<String>,
    pub audio_muted: bool,
}

#[derive(Debug, Clone, PartialEq)]
/// Single owner of desktop session state.
pub struct DesktopState {
    pub stack: WindowStack,
    pub start_menu_open: bool,
    pub selected_icon: Option<WindowId>,
    pub background_id: String,
    pub welcome_dismissed: bool,
    pub audio_muted: bool,
    pub power_screen: Option<PowerScreen>,
    pub chat: ChatConversation,
    pub boot_complete: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl DesktopState {
    /// Starts a fresh desktop session sized to `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            stack: WindowStack::new(viewport),
            start_menu_open: false,
            selected_icon: None,
            background_id: DEFAULT_BACKGROUND_ID.to_string(),
            welcome_dismissed: false,
            audio_muted: false,
            power_screen: None,
            chat: ChatConversation::default(),
            boot_complete: false,
        }
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.stack.active_window_id()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// In-flight title-bar drag.
///
/// Every pointer update is applied relative to the start of the drag so clamping never
/// accumulates drift.
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: Point,
    pub position_start: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Minimizing,
    Restoring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pending two-phase presentation transition for one window.
pub struct WindowTransition {
    pub window_id: WindowId,
    pub kind: TransitionKind,
    /// Issued per transition; completions carrying another token are stale.
    pub token: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Pointer and presentation state that is not part of the window model itself.
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub transitions: Vec<WindowTransition>,
    pub next_transition_token: u64,
}

impl InteractionState {
    pub fn transition_for(&self, window_id: &WindowId) -> Option<&WindowTransition> {
        self.transitions.iter().find(|t| &t.window_id == window_id)
    }

    pub fn is_dragging(&self, window_id: &WindowId) -> bool {
        self.dragging
            .as_ref()
            .is_some_and(|session| &session.window_id == window_id)
    }
}
