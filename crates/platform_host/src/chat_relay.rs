//! Chat relay contract: one request/response exchange with the completion proxy endpoint.
//!
//! The relay forwards `{message, history}` to a third-party completion API and answers with
//! `{reply}` on success or `{error}` with a non-success status. The shell only needs to know
//! whether a reply arrived; everything upstream of the endpoint is out of scope here.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Object-safe boxed future used by [`ChatRelay`].
pub type ChatRelayFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Speaker of one history turn.
pub enum ChatRole {
    /// The visitor typing into the chat panel.
    User,
    /// The relayed model.
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One prior conversation turn sent as context.
pub struct ChatTurn {
    /// Who said it.
    pub role: ChatRole,
    /// What was said.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Request body posted to the relay endpoint.
pub struct ChatRelayRequest {
    /// The new user message.
    pub message: String,
    /// Ordered prior turns, oldest first, excluding `message`.
    pub history: Vec<ChatTurn>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Success body returned by the relay endpoint.
pub struct ChatRelayReply {
    /// Model reply text. May be empty when the upstream produced no text block.
    pub reply: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatRelayErrorBody {
    error: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures of a relay exchange, classified by the endpoint's status contract.
pub enum ChatRelayError {
    /// `400`: the request had no message body.
    #[error("chat relay rejected request: message is required")]
    MissingMessage,
    /// `403`: the calling origin is not allowed.
    #[error("chat relay rejected request origin")]
    Forbidden,
    /// `500` with the credential marker: the upstream API key is missing or misconfigured.
    #[error("chat relay upstream credential is not configured")]
    MissingCredential,
    /// Any other non-success status.
    #[error("chat relay failed with status {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Error text reported by the relay, if any.
        message: String,
    },
    /// The request never produced a response (network failure, unsupported target).
    #[error("chat relay transport failed: {0}")]
    Transport(String),
    /// A success response whose body was not a valid reply payload.
    #[error("chat relay reply decode failed: {0}")]
    Decode(String),
}

const MISSING_CREDENTIAL_MARKER: &str = "API key is not configured";

impl ChatRelayError {
    /// Classifies a non-success response from its status code and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ChatRelayErrorBody>(body)
            .map(|body| body.error)
            .unwrap_or_default();
        match status {
            400 => Self::MissingMessage,
            403 => Self::Forbidden,
            500 if message.contains(MISSING_CREDENTIAL_MARKER) => Self::MissingCredential,
            _ => Self::Upstream { status, message },
        }
    }
}

/// Decodes a complete relay response.
///
/// # Errors
///
/// Returns the classified [`ChatRelayError`] for non-2xx statuses and
/// [`ChatRelayError::Decode`] for malformed success bodies.
pub fn decode_relay_response(status: u16, body: &str) -> Result<ChatRelayReply, ChatRelayError> {
    if !(200..300).contains(&status) {
        return Err(ChatRelayError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ChatRelayError::Decode(e.to_string()))
}

/// Host service performing one chat relay exchange.
pub trait ChatRelay {
    /// Sends `request` and resolves with the relay's reply.
    fn send<'a>(
        &'a self,
        request: &'a ChatRelayRequest,
    ) -> ChatRelayFuture<'a, Result<ChatRelayReply, ChatRelayError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Relay for targets without network access; every exchange fails at the transport.
pub struct NoopChatRelay;

impl ChatRelay for NoopChatRelay {
    fn send<'a>(
        &'a self,
        _request: &'a ChatRelayRequest,
    ) -> ChatRelayFuture<'a, Result<ChatRelayReply, ChatRelayError>> {
        Box::pin(async {
            Err(ChatRelayError::Transport(
                "chat relay unavailable on this host".to_string(),
            ))
        })
    }
}

#[derive(Debug, Clone, Default)]
/// Relay double answering from a queue of canned outcomes and recording every request.
///
/// An exhausted queue answers with a transport failure.
pub struct ScriptedChatRelay {
    outcomes: Rc<RefCell<VecDeque<Result<ChatRelayReply, ChatRelayError>>>>,
    requests: Rc<RefCell<Vec<ChatRelayRequest>>>,
}

impl ScriptedChatRelay {
    /// Queues a successful reply.
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.outcomes.borrow_mut().push_back(Ok(ChatRelayReply {
            reply: reply.into(),
        }));
    }

    /// Queues a failure.
    pub fn push_error(&self, error: ChatRelayError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ChatRelayRequest> {
        self.requests.borrow().clone()
    }
}

impl ChatRelay for ScriptedChatRelay {
    fn send<'a>(
        &'a self,
        request: &'a ChatRelayRequest,
    ) -> ChatRelayFuture<'a, Result<ChatRelayReply, ChatRelayError>> {
        Box::pin(async move {
            self.requests.borrow_mut().push(request.clone());
            self.outcomes.borrow_mut().pop_front().unwrap_or_else(|| {
                Err(ChatRelayError::Transport(
                    "no scripted outcome left".to_string(),
                ))
            })
        })
    }
}
