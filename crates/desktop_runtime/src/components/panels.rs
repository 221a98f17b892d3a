use super::{chat::ChatPanel, display_properties::DisplayPropertiesPanel, *};
use crate::taskbar::MESSENGER_WINDOW_ID;

const WELCOME_WINDOW_ID: &str = "welcome";
const RESUME_WINDOW_ID: &str = "resume";
const CONTACT_WINDOW_ID: &str = "contact";
const SETTINGS_WINDOW_ID: &str = "settings";

/// Content panel rendered inside a window, selected by window id.
pub(super) fn window_content(window_id: &WindowId) -> View {
    match window_id.as_str() {
        WELCOME_WINDOW_ID => view! { <WelcomePanel /> }.into_view(),
        MESSENGER_WINDOW_ID => view! { <ChatPanel /> }.into_view(),
        RESUME_WINDOW_ID => view! { <ResumePanel /> }.into_view(),
        CONTACT_WINDOW_ID => view! { <ContactPanel /> }.into_view(),
        SETTINGS_WINDOW_ID => view! { <DisplayPropertiesPanel /> }.into_view(),
        _ => view! { <div class="panel">"Window content"</div> }.into_view(),
    }
}

#[component]
fn WelcomePanel() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="panel welcome-panel">
            <div class="welcome-header">
                <img src="/images/pdf.svg" alt="" width="32" height="32" />
                <div>
                    <h1 class="welcome-title">"Welcome!"</h1>
                    <p class="welcome-subtitle">"Thanks for visiting my portfolio"</p>
                </div>
            </div>
            <div class="welcome-content">
                <p>
                    "Hi, welcome to my portfolio website! It borrows its look from the desktop \
                     I grew up with, and it is a place for me to keep building and experimenting."
                </p>
                <p>
                    "Feel free to explore everything. If you have questions about my experience \
                     and past projects, open the chat app and ask the assistant that knows my \
                     work history."
                </p>
            </div>
            <div class="welcome-footer">
                <button
                    class="panel-button"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::CloseWindow {
                            window_id: WindowId::from(WELCOME_WINDOW_ID),
                        });
                    }
                >
                    "OK"
                </button>
            </div>
        </div>
    }
}

#[component]
fn ResumePanel() -> impl IntoView {
    view! {
        <div class="panel document-panel">
            <h2>"Resume.pdf"</h2>
            <p>"Resume content would go here..."</p>
        </div>
    }
}

#[component]
fn ContactPanel() -> impl IntoView {
    view! {
        <div class="panel document-panel">
            <h2>"Contact Me"</h2>
            <p>"Contact information would go here..."</p>
        </div>
    }
}
