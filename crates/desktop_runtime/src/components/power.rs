use super::*;

#[component]
pub(super) fn PowerScreenOverlay() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let screen = create_memo(move |_| runtime.state.with(|desktop| desktop.power_screen));
    let overlay = create_node_ref::<html::Div>();

    // Keyboard dismissal needs focus on the overlay.
    create_effect(move |_| {
        if screen.get().is_some() {
            if let Some(element) = overlay.get() {
                let _ = element.focus();
            }
        }
    });

    let dismiss = move || runtime.dispatch_action(DesktopAction::DismissPowerScreen);

    view! {
        <Show when=move || screen.get().is_some() fallback=|| ()>
            <div
                node_ref=overlay
                class="power-screen"
                tabindex="0"
                on:click=move |ev| {
                    ev.stop_propagation();
                    dismiss();
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" || ev.key() == "Enter" {
                        ev.prevent_default();
                        dismiss();
                    }
                }
            >
                <div class="power-screen-content">
                    <img class="power-screen-face" src="/images/sad-face.svg" alt="Sad face" />
                    <p class="power-screen-title">"Nice try."</p>
                    <p>"This is just a website, not an actual computer."</p>
                    <p>"Click anywhere or press ESC to get back to the fun."</p>
                    <p class="power-screen-code">
                        "ERROR: 0x000000000 (0xWEBSITE, 0xNOTREAL, 0xJUSTFUN, 0xCLICKME)"
                    </p>
                </div>
            </div>
        </Show>
    }
}
