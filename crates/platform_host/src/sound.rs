//! Sound cue host-service contracts.
//!
//! The chat panel announces sent and received messages with short synthesized cues. Playback is
//! fire-and-forget, so the contract is synchronous and failures are reported but never retried.

use std::{cell::RefCell, rc::Rc};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Short audio cues the desktop can request.
pub enum SoundCue {
    /// Rising sweep played when the visitor sends a chat message.
    MessageSent,
    /// Two-tone chime played when the assistant replies.
    MessageReceived,
}

/// Host service for playing [`SoundCue`]s.
pub trait SoundService {
    /// Starts playing `cue` and returns immediately.
    fn play(&self, cue: SoundCue) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Silent sound service for unsupported targets.
pub struct NoopSoundService;

impl SoundService for NoopSoundService {
    fn play(&self, _cue: SoundCue) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// Sound service that only records which cues were requested.
pub struct RecordingSoundService {
    played: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingSoundService {
    /// Cues played so far, oldest first.
    pub fn played(&self) -> Vec<SoundCue> {
        self.played.borrow().clone()
    }
}

impl SoundService for RecordingSoundService {
    fn play(&self, cue: SoundCue) -> Result<(), String> {
        self.played.borrow_mut().push(cue);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recording_service_shares_history_across_clones() {
        let service = RecordingSoundService::default();
        let handle = service.clone();

        service.play(SoundCue::MessageSent).expect("play");
        handle.play(SoundCue::MessageReceived).expect("play");

        assert_eq!(
            service.played(),
            vec![SoundCue::MessageSent, SoundCue::MessageReceived]
        );
    }
}
