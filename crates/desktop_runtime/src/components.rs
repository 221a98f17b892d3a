//! Desktop shell UI composition and interaction surfaces.

mod chat;
mod display_properties;
mod menus;
mod panels;
mod power;
mod taskbar;
mod window;

use leptos::*;
use platform_host::unix_time_ms_now;

use self::{menus::StartMenu, power::PowerScreenOverlay, taskbar::Taskbar, window::DesktopWindow};
use crate::{
    backgrounds,
    inventory::{DesktopInventory, InventoryEntry},
    model::{Point, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x(), ev.client_y())
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// Open request shared by desktop icons, start-menu items and the messenger tray icon.
fn activate_entry(runtime: DesktopRuntimeContext, entry_id: impl Into<String>) {
    runtime.dispatch_action(DesktopAction::ActivateEntry {
        entry_id: entry_id.into(),
        now_ms: unix_time_ms_now(),
    });
}

/// Entries drawn on the desktop icon grid, in inventory order.
fn desktop_icon_entries(inventory: &DesktopInventory) -> Vec<InventoryEntry> {
    inventory.desktop_icons().cloned().collect()
}

#[component]
/// Renders the desktop surface, windows, start menu, taskbar and power screen.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let inventory = runtime.inventory;

    let background_style = move || {
        state.with(|desktop| backgrounds::resolve_stored_background(&desktop.background_id).css_style())
    };
    let desktop_icons = move || desktop_icon_entries(inventory);
    let window_ids = move || {
        state.with(|desktop| {
            desktop
                .stack
                .windows()
                .iter()
                .map(|win| win.id.clone())
                .collect::<Vec<_>>()
        })
    };

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if runtime.interaction.get_untracked().dragging.is_some() {
            runtime.dispatch_action(DesktopAction::EndMove);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            style=background_style
            on:click=move |_| {
                if runtime.state.get_untracked().selected_icon.is_some() {
                    runtime.dispatch_action(DesktopAction::SelectDesktopIcon { entry_id: None });
                }
            }
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div class="desktop-icons">
                <For each=desktop_icons key=|entry| entry.id.clone() let:entry>
                    <DesktopIcon entry=entry />
                </For>
            </div>

            <div class="desktop-window-layer">
                <For each=window_ids key=|window_id| window_id.clone() let:window_id>
                    <DesktopWindow window_id=window_id />
                </For>
            </div>

            <StartMenu />
            <Taskbar />
            <PowerScreenOverlay />
        </div>
    }
}

#[component]
fn DesktopIcon(entry: InventoryEntry) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let icon_id = WindowId::new(entry.id.clone());
    let select_id = entry.id.clone();
    let open_id = entry.id.clone();
    let icon_src = runtime.inventory.icon(&entry.id);

    let is_selected = move || {
        runtime
            .state
            .with(|desktop| desktop.selected_icon.as_ref() == Some(&icon_id))
    };

    view! {
        <button
            class="desktop-icon"
            class:selected=is_selected
            aria-label=entry.label.clone()
            on:click=move |ev: web_sys::MouseEvent| {
                ev.stop_propagation();
                runtime.dispatch_action(DesktopAction::SelectDesktopIcon {
                    entry_id: Some(select_id.clone()),
                });
            }
            on:dblclick=move |ev: web_sys::MouseEvent| {
                stop_mouse_event(&ev);
                activate_entry(runtime, open_id.clone());
            }
        >
            <img class="desktop-icon-image" src=icon_src alt="" width="32" height="32" />
            <span class="desktop-icon-label">{entry.label.clone()}</span>
        </button>
    }
}
