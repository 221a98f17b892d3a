//! Chat panel conversation model.
//!
//! The conversation is plain state inside [`crate::model::DesktopState`]; the relay exchange
//! itself runs in the host as a [`crate::reducer::RuntimeEffect::SendChatRequest`] and reports
//! back through [`ChatConversation::complete`]. Relay failures never leave this module: they
//! become one error bubble.

use platform_host::{ChatRelayError, ChatRelayReply, ChatRelayRequest, ChatRole, ChatTurn};

/// Number of prior messages sent as context with each request.
pub const CHAT_HISTORY_LIMIT: usize = 10;
pub const CHAT_GREETING: &str = "Hi! I'm an AI assistant representing this resume. Feel free to \
ask me questions about my experience, skills, or background!";
/// Shown when the relay answered successfully but with no text.
pub const CHAT_EMPTY_REPLY_TEXT: &str = "Sorry, I encountered an error.";
/// Shown when the relay exchange failed.
pub const CHAT_FAILURE_TEXT: &str = "Sorry, I encountered an error. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSender {
    User,
    Bot,
}

impl ChatSender {
    fn role(self) -> ChatRole {
        match self {
            Self::User => ChatRole::User,
            Self::Bot => ChatRole::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered chat bubble.
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: ChatSender,
    pub timestamp_ms: u64,
    /// Relay failure bubble, styled apart from real replies.
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConversation {
    messages: Vec<ChatMessage>,
    input: String,
    pending_request: Option<u64>,
    next_message_id: u64,
    next_request_id: u64,
}

impl Default for ChatConversation {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ChatConversation {
    /// Starts a conversation holding only the greeting, stamped at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            input: String::new(),
            pending_request: None,
            next_message_id: 0,
            next_request_id: 0,
        };
        conversation.push(CHAT_GREETING.to_string(), ChatSender::Bot, now_ms, false);
        conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn is_loading(&self) -> bool {
        self.pending_request.is_some()
    }

    /// Whether the send control should be enabled.
    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.input.trim().is_empty()
    }

    /// Discards the conversation and starts over with a fresh greeting.
    ///
    /// The request counter survives so replies to requests issued before the reset stay stale.
    pub fn reset(&mut self, now_ms: u64) {
        let next_request_id = self.next_request_id;
        *self = Self::new(now_ms);
        self.next_request_id = next_request_id;
    }

    /// Posts the current input as a user message and returns the relay request to run.
    ///
    /// Returns `None` (leaving the conversation untouched) for blank input or while a previous
    /// request is still in flight.
    pub fn begin_send(&mut self, now_ms: u64) -> Option<(u64, ChatRelayRequest)> {
        if !self.can_send() {
            return None;
        }
        let message = self.input.trim().to_string();
        let history = self.history_turns();

        self.push(message.clone(), ChatSender::User, now_ms, false);
        self.input.clear();
        self.next_request_id += 1;
        self.pending_request = Some(self.next_request_id);

        Some((self.next_request_id, ChatRelayRequest { message, history }))
    }

    /// Applies the relay outcome for `request_id`. Returns `false` for stale or unknown requests.
    pub fn complete(
        &mut self,
        request_id: u64,
        outcome: Result<ChatRelayReply, ChatRelayError>,
        now_ms: u64,
    ) -> bool {
        if self.pending_request != Some(request_id) {
            return false;
        }
        self.pending_request = None;
        match outcome {
            Ok(reply) if reply.reply.is_empty() => {
                self.push(CHAT_EMPTY_REPLY_TEXT.to_string(), ChatSender::Bot, now_ms, false)
            }
            Ok(reply) => self.push(reply.reply, ChatSender::Bot, now_ms, false),
            Err(_) => self.push(CHAT_FAILURE_TEXT.to_string(), ChatSender::Bot, now_ms, true),
        }
        true
    }

    fn history_turns(&self) -> Vec<ChatTurn> {
        let mut turns: Vec<ChatTurn> = self
            .messages
            .iter()
            .rev()
            .take(CHAT_HISTORY_LIMIT)
            .map(|message| ChatTurn {
                role: message.sender.role(),
                content: message.text.clone(),
            })
            .collect();
        turns.reverse();
        turns
    }

    fn push(&mut self, text: String, sender: ChatSender, timestamp_ms: u64, is_error: bool) {
        self.next_message_id += 1;
        self.messages.push(ChatMessage {
            id: self.next_message_id,
            text,
            sender,
            timestamp_ms,
            is_error,
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn send(conversation: &mut ChatConversation, text: &str) -> (u64, ChatRelayRequest) {
        conversation.set_input(text);
        conversation.begin_send(10).expect("send accepted")
    }

    #[test]
    fn send_trims_input_and_uses_prior_messages_as_history() {
        let mut conversation = ChatConversation::new(1);
        let (request_id, request) = send(&mut conversation, "  What do you build?  ");

        assert_eq!(request.message, "What do you build?");
        assert_eq!(
            request.history,
            vec![ChatTurn {
                role: ChatRole::Assistant,
                content: CHAT_GREETING.to_string(),
            }]
        );
        assert!(conversation.is_loading());
        assert_eq!(conversation.input(), "");
        assert_eq!(conversation.messages().len(), 2);
        assert_eq!(request_id, 1);
    }

    #[test]
    fn blank_input_and_concurrent_sends_are_refused() {
        let mut conversation = ChatConversation::new(1);
        conversation.set_input("   ");
        assert_eq!(conversation.begin_send(2), None);

        send(&mut conversation, "first");
        conversation.set_input("second");
        let before = conversation.clone();
        assert_eq!(conversation.begin_send(3), None);
        assert_eq!(conversation, before);
    }

    #[test]
    fn empty_reply_and_failures_become_fixed_bubbles() {
        let mut conversation = ChatConversation::new(1);
        let (first, _) = send(&mut conversation, "hi");
        assert!(conversation.complete(
            first,
            Ok(ChatRelayReply {
                reply: String::new()
            }),
            20
        ));
        assert_eq!(
            conversation.messages().last().map(|m| m.text.as_str()),
            Some(CHAT_EMPTY_REPLY_TEXT)
        );

        let (second, _) = send(&mut conversation, "again");
        assert!(conversation.complete(second, Err(ChatRelayError::Forbidden), 30));
        let last = conversation.messages().last().expect("error bubble");
        assert_eq!(last.text, CHAT_FAILURE_TEXT);
        assert!(last.is_error);
        assert!(!conversation.is_loading());
    }

    #[test]
    fn history_keeps_the_last_ten_messages_including_failures() {
        let mut conversation = ChatConversation::new(1);
        for n in 0..6 {
            let (id, _) = send(&mut conversation, &format!("q{n}"));
            conversation.complete(
                id,
                Ok(ChatRelayReply {
                    reply: format!("a{n}"),
                }),
                2,
            );
        }
        let (id, _) = send(&mut conversation, "boom");
        conversation.complete(id, Err(ChatRelayError::Transport("offline".into())), 3);

        let (_, request) = send(&mut conversation, "next");
        assert_eq!(request.history.len(), CHAT_HISTORY_LIMIT);
        assert_eq!(
            request.history.last(),
            Some(&ChatTurn {
                role: ChatRole::Assistant,
                content: CHAT_FAILURE_TEXT.to_string(),
            })
        );
        assert_eq!(
            request.history.first().map(|t| t.content.as_str()),
            Some("q2")
        );
    }

    #[test]
    fn reply_for_superseded_request_is_dropped() {
        let mut conversation = ChatConversation::new(1);
        let (stale, _) = send(&mut conversation, "hello");
        conversation.reset(5);

        let before = conversation.clone();
        assert!(!conversation.complete(
            stale,
            Ok(ChatRelayReply {
                reply: "late".into()
            }),
            6
        ));
        assert_eq!(conversation, before);

        let (fresh, _) = send(&mut conversation, "hello again");
        assert!(fresh > stale);
    }
}
