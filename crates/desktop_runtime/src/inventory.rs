//! Desktop icon and start-menu inventory.
//!
//! The built-in inventory is declared in `desktop_inventory.toml`, validated by `build.rs`, and
//! embedded as JSON. The Lifecycle Controller uses it to decide which ids may be opened and how
//! a new window is titled, sized, and placed.

use std::{collections::BTreeSet, sync::OnceLock};

use leptos::logging;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    geometry,
    model::{Point, Size, Viewport, WindowId},
};

include!(concat!(env!("OUT_DIR"), "/desktop_inventory_generated.rs"));

/// Icon used when an id has no inventory entry or the entry names no icon.
pub const DEFAULT_FALLBACK_ICON: &str = "/images/pdf.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Where a newly created window is placed.
pub enum Placement {
    /// Staggered by the number of already open windows.
    #[default]
    Cascade,
    /// Centered in the viewport.
    Centered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub id: String,
    /// Icon and menu caption.
    pub label: String,
    /// Window title when it differs from `label`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Entries with a URL open it outside the shell instead of creating a window.
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default)]
    pub show_on_desktop: bool,
    #[serde(default)]
    pub show_in_start_menu: bool,
    /// Closing the window persists an acknowledgement so it is not shown on the next boot.
    #[serde(default)]
    pub dismiss_once: bool,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
}

impl InventoryEntry {
    pub fn window_id(&self) -> WindowId {
        WindowId::new(self.id.clone())
    }

    pub fn window_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }

    pub fn window_size(&self) -> Size {
        let default = Size::default();
        Size::new(
            self.width.unwrap_or(default.width),
            self.height.unwrap_or(default.height),
        )
    }

    /// Initial position for a window of this entry, given how many windows are already open.
    pub fn initial_position(&self, open_count: usize, viewport: Viewport) -> Point {
        match self.placement {
            Placement::Cascade => geometry::cascade_position(open_count),
            Placement::Centered => geometry::centered_position(self.window_size(), viewport),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("inventory parse failed: {0}")]
    Parse(String),
    #[error("duplicate inventory id `{0}`")]
    DuplicateId(String),
    #[error("inventory entry `{0}` has an empty id")]
    EmptyId(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ordered, static list of openable entries.
pub struct DesktopInventory {
    #[serde(default = "default_fallback_icon")]
    fallback_icon: String,
    #[serde(rename = "entry", default)]
    entries: Vec<InventoryEntry>,
}

fn default_fallback_icon() -> String {
    DEFAULT_FALLBACK_ICON.to_string()
}

impl Default for DesktopInventory {
    fn default() -> Self {
        Self {
            fallback_icon: default_fallback_icon(),
            entries: Vec::new(),
        }
    }
}

impl DesktopInventory {
    /// Builds an inventory from entries, rejecting empty or duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::EmptyId`] or [`InventoryError::DuplicateId`].
    pub fn new(entries: Vec<InventoryEntry>) -> Result<Self, InventoryError> {
        let inventory = Self {
            fallback_icon: default_fallback_icon(),
            entries,
        };
        inventory.validate()?;
        Ok(inventory)
    }

    /// Parses the JSON form emitted by the build script.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Parse`] for malformed JSON and the validation errors of
    /// [`Self::new`].
    pub fn from_json(raw: &str) -> Result<Self, InventoryError> {
        let inventory: Self =
            serde_json::from_str(raw).map_err(|e| InventoryError::Parse(e.to_string()))?;
        inventory.validate()?;
        Ok(inventory)
    }

    /// The inventory embedded at build time. Falls back to an empty inventory if it fails to parse.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<DesktopInventory> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_json(DESKTOP_INVENTORY_JSON).unwrap_or_else(|err| {
                logging::warn!("builtin desktop inventory rejected: {err}");
                Self::default()
            })
        })
    }

    fn validate(&self) -> Result<(), InventoryError> {
        let mut seen = BTreeSet::new();
        for entry in &self.entries {
            if entry.id.trim().is_empty() {
                return Err(InventoryError::EmptyId(entry.label.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(InventoryError::DuplicateId(entry.id.clone()));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn label(&self, id: &str) -> Option<&str> {
        self.entry(id).map(|entry| entry.label.as_str())
    }

    /// Icon for `id`, or the fallback icon when unmapped.
    pub fn icon(&self, id: &str) -> &str {
        self.entry(id)
            .and_then(|entry| entry.icon.as_deref())
            .unwrap_or(&self.fallback_icon)
    }

    pub fn desktop_icons(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter().filter(|entry| entry.show_on_desktop)
    }

    pub fn start_menu_items(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.entries.iter().filter(|entry| entry.show_in_start_menu)
    }

    /// The first entry flagged dismiss-once, shown at boot until acknowledged.
    pub fn welcome_entry(&self) -> Option<&InventoryEntry> {
        self.entries.iter().find(|entry| entry.dismiss_once)
    }
}

#[cfg(test)]
pub(crate) fn test_entry(id: &str, label: &str) -> InventoryEntry {
    InventoryEntry {
        id: id.to_string(),
        label: label.to_string(),
        title: None,
        icon: None,
        external_url: None,
        show_on_desktop: true,
        show_in_start_menu: true,
        dismiss_once: false,
        placement: Placement::Cascade,
        width: None,
        height: None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_inventory_lists_desktop_icons_in_declared_order() {
        let inventory = DesktopInventory::builtin();
        let desktop: Vec<&str> = inventory.desktop_icons().map(|e| e.id.as_str()).collect();
        assert_eq!(desktop, vec!["chat", "resume", "contact"]);

        let menu: Vec<&str> = inventory.start_menu_items().map(|e| e.id.as_str()).collect();
        assert!(menu.contains(&"welcome"));
        assert!(menu.contains(&"settings"));
    }

    #[test]
    fn builtin_welcome_entry_is_centered_and_dismiss_once() {
        let welcome = DesktopInventory::builtin()
            .welcome_entry()
            .expect("welcome entry");
        assert_eq!(welcome.id, "welcome");
        assert_eq!(welcome.window_title(), "Welcome!");
        assert_eq!(welcome.placement, Placement::Centered);
        assert_eq!(welcome.window_size(), Size::new(500, 400));
        assert_eq!(
            welcome.initial_position(3, Viewport::new(1280, 800)),
            Point::new(390, 200)
        );
    }

    #[test]
    fn icon_lookup_falls_back_for_unknown_ids() {
        let inventory = DesktopInventory::builtin();
        assert_eq!(inventory.icon("nope"), DEFAULT_FALLBACK_ICON);
        assert_eq!(inventory.label("chat"), Some("Chat with my resume"));
        assert_eq!(inventory.label("nope"), None);
    }

    #[test]
    fn cascade_entries_use_default_size_and_stagger() {
        let entry = test_entry("notes", "Notes");
        assert_eq!(entry.window_size(), Size::default());
        assert_eq!(
            entry.initial_position(2, Viewport::default()),
            Point::new(160, 160)
        );
        assert_eq!(entry.window_title(), "Notes");
    }

    #[test]
    fn validation_rejects_empty_and_duplicate_ids() {
        assert_eq!(
            DesktopInventory::new(vec![test_entry(" ", "Blank")]),
            Err(InventoryError::EmptyId("Blank".to_string()))
        );
        assert_eq!(
            DesktopInventory::new(vec![test_entry("a", "A"), test_entry("a", "B")]),
            Err(InventoryError::DuplicateId("a".to_string()))
        );
        assert!(matches!(
            DesktopInventory::from_json("{"),
            Err(InventoryError::Parse(_))
        ));
    }
}
