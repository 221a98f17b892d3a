use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{unix_time_ms_now, ChatRelayRequest};

use crate::{host::DesktopHostContext, reducer::DesktopAction};

pub(super) fn send_chat_request(
    host: DesktopHostContext,
    dispatch: Callback<DesktopAction>,
    request_id: u64,
    request: ChatRelayRequest,
) {
    spawn_local(async move {
        let relay = host.chat_relay();
        let outcome = relay.send(&request).await;
        if let Err(err) = &outcome {
            logging::warn!("chat relay request failed: {err}");
        }
        if !host.is_active() {
            return;
        }
        dispatch.call(DesktopAction::ChatReplyReceived {
            request_id,
            outcome,
            now_ms: unix_time_ms_now(),
        });
    });
}
