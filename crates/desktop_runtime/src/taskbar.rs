//! Taskbar presence projector and tray helpers.
//!
//! Everything here is a pure read of [`WindowStack`]; taskbar clicks route back through
//! [`crate::reducer::DesktopAction::ActivateTaskbarButton`].

use crate::{inventory::DesktopInventory, model::WindowId, stack::WindowStack};

/// Window id the messenger tray icon reflects and opens.
pub const MESSENGER_WINDOW_ID: &str = "chat";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarButton {
    pub window_id: WindowId,
    pub label: String,
    pub icon: String,
    /// Frontmost visible window.
    pub is_active: bool,
    pub is_minimized: bool,
}

/// One button per open window, minimized ones included, in window insertion order.
pub fn project_taskbar(stack: &WindowStack, inventory: &DesktopInventory) -> Vec<TaskbarButton> {
    let active = stack.active_window_id();
    stack
        .windows()
        .iter()
        .map(|window| TaskbarButton {
            window_id: window.id.clone(),
            label: window.title.clone(),
            icon: inventory.icon(window.id.as_str()).to_string(),
            is_active: active == Some(&window.id) && !window.is_minimized,
            is_minimized: window.is_minimized,
        })
        .collect()
}

/// Whether the messenger tray icon shows as online: chat is open and visible.
pub fn messenger_online(stack: &WindowStack) -> bool {
    stack
        .get(&WindowId::from(MESSENGER_WINDOW_ID))
        .is_some_and(|window| !window.is_minimized)
}

/// 12-hour clock text such as `9:05 AM` or `12:30 PM`.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let meridiem = if hours % 24 >= 12 { "PM" } else { "AM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{display_hours}:{minutes:02} {meridiem}")
}

/// Local wall-clock hours and minutes for a unix timestamp.
///
/// Uses the browser's timezone on `wasm32` and UTC elsewhere.
pub fn local_clock_parts(unix_ms: u64) -> (u32, u32) {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(unix_ms as f64));
        (date.get_hours(), date.get_minutes())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let minutes_of_day = (unix_ms / 60_000) % (24 * 60);
        ((minutes_of_day / 60) as u32, (minutes_of_day % 60) as u32)
    }
}

/// Clock text for a unix timestamp.
pub fn clock_text(unix_ms: u64) -> String {
    let (hours, minutes) = local_clock_parts(unix_ms);
    format_clock(hours, minutes)
}
