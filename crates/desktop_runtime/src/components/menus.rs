use super::*;
use crate::model::PowerScreen;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let is_open = move || runtime.state.with(|desktop| desktop.start_menu_open);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.state.get_untracked().start_menu_open {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseStartMenu);
        }
    });
    on_cleanup(move || escape_listener.remove());

    let request_power = move |screen: PowerScreen| {
        runtime.dispatch_action(DesktopAction::RequestPower { screen });
    };

    view! {
        <Show when=is_open fallback=|| ()>
            <div
                class="start-menu-overlay"
                on:click=move |ev| {
                    ev.stop_propagation();
                    runtime.dispatch_action(DesktopAction::CloseStartMenu);
                }
            ></div>
            <nav
                id="start-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-header">"Guest"</div>
                <div class="start-menu-items">
                    {runtime
                        .inventory
                        .start_menu_items()
                        .map(|entry| {
                            let entry_id = entry.id.clone();
                            view! {
                                <button
                                    role="menuitem"
                                    class="start-menu-item"
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        activate_entry(runtime, entry_id.clone());
                                    }
                                >
                                    <img
                                        src=runtime.inventory.icon(&entry.id)
                                        alt=""
                                        width="24"
                                        height="24"
                                    />
                                    <span>{entry.label.clone()}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="start-menu-footer">
                    <button
                        role="menuitem"
                        class="start-menu-power"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            request_power(PowerScreen::Restart);
                        }
                    >
                        "Restart"
                    </button>
                    <button
                        role="menuitem"
                        class="start-menu-power"
                        on:click=move |ev| {
                            stop_mouse_event(&ev);
                            request_power(PowerScreen::ShutDown);
                        }
                    >
                        "Shut Down"
                    </button>
                </div>
            </nav>
        </Show>
    }
}
