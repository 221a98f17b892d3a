use super::*;
use crate::{
    chat::{ChatMessage, ChatSender},
    markdown::render_markdown,
    taskbar::clock_text,
};

fn bubble_class(message: &ChatMessage) -> &'static str {
    match (message.sender, message.is_error) {
        (ChatSender::User, _) => "chat-message user",
        (ChatSender::Bot, false) => "chat-message bot",
        (ChatSender::Bot, true) => "chat-message bot error",
    }
}

/// Bot replies are Markdown; visitor text is shown as typed.
fn message_text(message: &ChatMessage) -> View {
    match message.sender {
        ChatSender::Bot => {
            let html = render_markdown(&message.text);
            view! { <div class="chat-text markdown" inner_html=html></div> }.into_view()
        }
        ChatSender::User => view! { <div class="chat-text">{message.text.clone()}</div> }.into_view(),
    }
}

/// True on the update where a relay exchange stops loading.
fn exchange_finished(was_loading: Option<bool>, loading: bool) -> bool {
    was_loading == Some(true) && !loading
}

#[component]
pub(super) fn ChatPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let messages_end = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let messages = create_memo(move |_| state.with(|desktop| desktop.chat.messages().to_vec()));
    let input = move || state.with(|desktop| desktop.chat.input().to_string());
    let is_loading = create_memo(move |_| state.with(|desktop| desktop.chat.is_loading()));
    let can_send = move || state.with(|desktop| desktop.chat.can_send());
    let muted = move || state.with(|desktop| desktop.audio_muted);

    create_effect(move |_| {
        let _ = messages.with(Vec::len);
        let _ = is_loading.get();
        if let Some(end) = messages_end.get() {
            end.scroll_into_view();
        }
    });

    // The input is re-enabled in the same update, so focus waits for the next frame.
    create_effect(move |was_loading: Option<bool>| {
        let loading = is_loading.get();
        if exchange_finished(was_loading, loading) {
            if let Some(input) = input_ref.get_untracked() {
                request_animation_frame(move || {
                    let _ = input.focus();
                });
            }
        }
        loading
    });

    let send = move || {
        runtime.dispatch_action(DesktopAction::ChatSend {
            now_ms: unix_time_ms_now(),
        });
    };

    view! {
        <div class="panel chat-panel">
            <div class="chat-toolbar">
                <button
                    class="chat-mute"
                    aria-pressed=move || muted().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::SetAudioMuted { muted: !muted() });
                    }
                >
                    {move || if muted() { "Unmute sounds" } else { "Mute sounds" }}
                </button>
            </div>

            <div class="chat-messages">
                <For each=move || messages.get() key=|message| message.id let:message>
                    <div class=bubble_class(&message)>
                        <div class="chat-bubble">
                            {message_text(&message)}
                            <div class="chat-time">{clock_text(message.timestamp_ms)}</div>
                        </div>
                    </div>
                </For>
                <Show when=move || is_loading.get() fallback=|| ()>
                    <div class="chat-message bot">
                        <div class="chat-bubble">
                            <div class="chat-typing" aria-label="Assistant is typing">
                                <span></span>
                                <span></span>
                                <span></span>
                            </div>
                        </div>
                    </div>
                </Show>
                <div node_ref=messages_end></div>
            </div>

            <div class="chat-input-row">
                <input
                    node_ref=input_ref
                    type="text"
                    class="chat-input"
                    placeholder="Type a message..."
                    prop:value=input
                    prop:disabled=move || is_loading.get()
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::ChatInputChanged {
                            text: event_target_value(&ev),
                        });
                    }
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="chat-send"
                    prop:disabled=move || !can_send()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        send();
                    }
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_returns_only_when_loading_ends() {
        assert!(exchange_finished(Some(true), false));
        assert!(!exchange_finished(None, false));
        assert!(!exchange_finished(Some(false), false));
        assert!(!exchange_finished(Some(false), true));
        assert!(!exchange_finished(Some(true), true));
    }
}
