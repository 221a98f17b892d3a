use super::*;
use crate::{geometry::presented_geometry, model::TransitionKind};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

/// Title-bar buttons must not start a drag or steal the press from the button itself.
fn swallow_pointerdown(ev: web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let record_id = window_id.clone();
    let window = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.stack.get(&record_id).cloned())
    });

    let transition_id = window_id.clone();
    let transition = create_memo(move |_| {
        runtime
            .interaction
            .with(|ui| ui.transition_for(&transition_id).map(|t| t.kind))
    });

    let active_id = window_id.clone();
    let is_active = create_memo(move |_| {
        runtime
            .state
            .with(|desktop| desktop.active_window_id() == Some(&active_id))
    });

    let drag_id = window_id.clone();
    let is_dragging = move || runtime.interaction.with(|ui| ui.is_dragging(&drag_id));

    let window_style = move || {
        let Some(record) = window.get() else {
            return "display:none;".to_string();
        };
        let viewport = runtime.state.with(|desktop| desktop.stack.viewport());
        let presented = runtime.interaction.with(|ui| {
            presented_geometry(&record, ui.transition_for(&record.id), viewport)
        });
        match presented {
            Some(geometry) => format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
                geometry.position.x,
                geometry.position.y,
                geometry.size.width,
                geometry.size.height,
                record.z_index
            ),
            None => "display:none;".to_string(),
        }
    };

    let focus_id = window_id.clone();
    let focus = move |_: web_sys::PointerEvent| {
        if !is_active.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow {
                window_id: focus_id.clone(),
            });
        }
    };

    let move_id = window_id.clone();
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id: move_id.clone(),
            pointer: pointer_from_pointer_event(&ev),
        });
    };

    let toggle_id = window_id.clone();
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize {
            window_id: toggle_id.clone(),
        });
    };

    let minimize_id = window_id.clone();
    let maximize_id = window_id.clone();
    let close_id = window_id.clone();
    let title = move || window.get().map(|w| w.title).unwrap_or_default();
    let is_maximized = move || window.get().is_some_and(|w| w.is_maximized);
    let icon_src = runtime.inventory.icon(window_id.as_str());

    view! {
        <section
            class="desktop-window"
            class:active=move || is_active.get()
            class:maximized=is_maximized
            class:dragging=is_dragging
            class:minimizing=move || transition.get() == Some(TransitionKind::Minimizing)
            class:restoring=move || transition.get() == Some(TransitionKind::Restoring)
            style=window_style
            on:pointerdown=focus
            role="dialog"
            aria-label=title
        >
            <header
                class="titlebar"
                on:pointerdown=begin_move
                on:dblclick=titlebar_double_click
            >
                <div class="titlebar-title">
                    <img class="titlebar-icon" src=icon_src alt="" width="16" height="16" />
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        class="titlebar-button minimize"
                        aria-label="Minimize window"
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::MinimizeWindow {
                                window_id: minimize_id.clone(),
                            });
                        }
                    >
                        "_"
                    </button>
                    <button
                        class="titlebar-button maximize"
                        aria-label=move || if is_maximized() { "Restore window" } else { "Maximize window" }
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::ToggleMaximize {
                                window_id: maximize_id.clone(),
                            });
                        }
                    >
                        {move || if is_maximized() { "❐" } else { "□" }}
                    </button>
                    <button
                        class="titlebar-button close"
                        aria-label="Close window"
                        on:pointerdown=swallow_pointerdown
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            runtime.dispatch_action(DesktopAction::CloseWindow {
                                window_id: close_id.clone(),
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            </header>
            <div class="window-body">
                {panels::window_content(&window_id)}
            </div>
        </section>
    }
}
