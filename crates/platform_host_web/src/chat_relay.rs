//! `fetch`-backed chat relay adapter.

#[cfg(target_arch = "wasm32")]
use platform_host::decode_relay_response;
use platform_host::{ChatRelay, ChatRelayError, ChatRelayFuture, ChatRelayReply, ChatRelayRequest};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Posts chat requests as JSON to a same-origin relay endpoint.
pub struct FetchChatRelay {
    endpoint: String,
}

impl FetchChatRelay {
    /// Creates a relay posting to `endpoint` (for example `/api/chat`).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this relay posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn exchange(&self, request: &ChatRelayRequest) -> Result<ChatRelayReply, ChatRelayError> {
        let body =
            serde_json::to_string(request).map_err(|e| ChatRelayError::Transport(e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        {
            let (status, text) = self.post_json(&body).await.map_err(|e| {
                ChatRelayError::Transport(e.as_string().unwrap_or_else(|| format!("{e:?}")))
            })?;
            decode_relay_response(status, &text)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = body;
            Err(ChatRelayError::Transport(format!(
                "fetch unavailable off-browser for `{}`",
                self.endpoint
            )))
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn post_json(&self, body: &str) -> Result<(u16, String), JsValue> {
        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&JsValue::from_str(body));
        let request = web_sys::Request::new_with_str_and_init(&self.endpoint, &init)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
            .await?
            .dyn_into()?;
        let status = response.status();
        let text = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();
        Ok((status, text))
    }
}

impl ChatRelay for FetchChatRelay {
    fn send<'a>(
        &'a self,
        request: &'a ChatRelayRequest,
    ) -> ChatRelayFuture<'a, Result<ChatRelayReply, ChatRelayError>> {
        Box::pin(self.exchange(request))
    }
}
