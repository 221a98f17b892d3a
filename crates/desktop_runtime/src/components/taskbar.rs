use std::time::Duration;

use super::*;
use crate::taskbar::{clock_text, messenger_online, project_taskbar, MESSENGER_WINDOW_ID};

const MESSENGER_ONLINE_ICON: &str = "/images/messenger.svg";
const MESSENGER_OFFLINE_ICON: &str = "/images/messenger-offline.svg";

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(clock_text(unix_time_ms_now()));
    if let Ok(interval) = set_interval_with_handle(
        move || {
            let next = clock_text(unix_time_ms_now());
            if clock.get_untracked() != next {
                clock.set(next);
            }
        },
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let buttons = create_memo(move |_| {
        state.with(|desktop| project_taskbar(&desktop.stack, runtime.inventory))
    });
    let online = create_memo(move |_| state.with(|desktop| messenger_online(&desktop.stack)));
    let muted = move || state.with(|desktop| desktop.audio_muted);
    let start_open = move || state.with(|desktop| desktop.start_menu_open);

    view! {
        <footer class="taskbar" on:click=move |ev| ev.stop_propagation()>
            <button
                class="taskbar-start"
                class:pressed=start_open
                aria-expanded=move || start_open().to_string()
                aria-controls="start-menu"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                }
            >
                <span>"Start"</span>
            </button>

            <div class="taskbar-apps">
                <For
                    each=move || buttons.get()
                    key=|button| (button.window_id.clone(), button.is_active, button.is_minimized)
                    let:button
                >
                    {{
                        let window_id = button.window_id.clone();
                        view! {
                            <button
                                class="taskbar-button"
                                class:active=button.is_active
                                class:minimized=button.is_minimized
                                title=button.label.clone()
                                on:click=move |ev| {
                                    stop_mouse_event(&ev);
                                    runtime.dispatch_action(DesktopAction::ActivateTaskbarButton {
                                        window_id: window_id.clone(),
                                    });
                                }
                            >
                                <img src=button.icon.clone() alt="" width="16" height="16" />
                                <span class="taskbar-button-text">{button.label.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>

            <div class="taskbar-tray">
                <button
                    class="tray-icon"
                    aria-label=move || if muted() { "Unmute sounds" } else { "Mute sounds" }
                    aria-pressed=move || muted().to_string()
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        runtime.dispatch_action(DesktopAction::SetAudioMuted { muted: !muted() });
                    }
                >
                    <img
                        src=move || {
                            if muted() { "/images/volume-muted.svg" } else { "/images/volume.svg" }
                        }
                        alt="Volume"
                        width="16"
                        height="16"
                    />
                </button>
                <span class="tray-icon">
                    <img src="/images/network.svg" alt="Network" width="16" height="16" />
                </span>
                <button
                    class="tray-icon"
                    class:online=move || online.get()
                    aria-label="Messenger"
                    on:click=move |ev| {
                        stop_mouse_event(&ev);
                        activate_entry(runtime, MESSENGER_WINDOW_ID);
                    }
                >
                    <img
                        src=move || {
                            if online.get() { MESSENGER_ONLINE_ICON } else { MESSENGER_OFFLINE_ICON }
                        }
                        alt="Messenger"
                        width="16"
                        height="16"
                    />
                </button>
                <time class="taskbar-clock">{move || clock.get()}</time>
            </div>
        </footer>
    }
}
