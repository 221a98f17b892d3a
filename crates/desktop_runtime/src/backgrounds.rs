//! Built-in desktop background presets used by the display properties panel.

/// Preset applied on first run and whenever a stored id is no longer known.
pub const DEFAULT_BACKGROUND_ID: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    /// `value` is an image URL rendered with cover sizing.
    Image,
    /// `value` is a CSS color.
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One selectable desktop background.
pub struct BackgroundPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
    pub kind: BackgroundKind,
}

impl BackgroundPreset {
    /// Inline CSS applied to the desktop surface and the preview monitor.
    pub fn css_style(&self) -> String {
        match self.kind {
            BackgroundKind::Color => format!("background-color: {};", self.value),
            BackgroundKind::Image => format!(
                "background-image: url({}); background-size: cover; background-position: center;",
                self.value
            ),
        }
    }
}

pub const BACKGROUND_PRESETS: [BackgroundPreset; 7] = [
    BackgroundPreset {
        id: DEFAULT_BACKGROUND_ID,
        name: "Bliss",
        value: "/images/background.jpeg",
        kind: BackgroundKind::Image,
    },
    BackgroundPreset {
        id: "blue",
        name: "Azul",
        value: "#58a6de",
        kind: BackgroundKind::Color,
    },
    BackgroundPreset {
        id: "green",
        name: "Olive Green",
        value: "#3a6e3a",
        kind: BackgroundKind::Color,
    },
    BackgroundPreset {
        id: "red",
        name: "Red Desert",
        value: "#d74f4f",
        kind: BackgroundKind::Color,
    },
    BackgroundPreset {
        id: "purple",
        name: "Purple Haze",
        value: "#6d5a9e",
        kind: BackgroundKind::Color,
    },
    BackgroundPreset {
        id: "orange",
        name: "Orange Sunset",
        value: "#e67e22",
        kind: BackgroundKind::Color,
    },
    BackgroundPreset {
        id: "teal",
        name: "Teal",
        value: "#2c8c8c",
        kind: BackgroundKind::Color,
    },
];

pub fn background_preset(id: &str) -> Option<&'static BackgroundPreset> {
    BACKGROUND_PRESETS.iter().find(|preset| preset.id == id)
}

pub fn default_background() -> &'static BackgroundPreset {
    &BACKGROUND_PRESETS[0]
}

/// Resolves a stored background reference.
///
/// Older sessions stored the raw CSS value rather than the preset id, so both are accepted.
/// Anything else resolves to the default preset.
pub fn resolve_stored_background(stored: &str) -> &'static BackgroundPreset {
    background_preset(stored)
        .or_else(|| BACKGROUND_PRESETS.iter().find(|preset| preset.value == stored))
        .unwrap_or_else(default_background)
}
