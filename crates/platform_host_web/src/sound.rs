//! Browser sound cue adapter.
//!
//! Both cues are synthesized with Web Audio nodes, so no audio assets are fetched. A single
//! `AudioContext` is created lazily on first playback and reused afterwards.

use platform_host::{SoundCue, SoundService};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;
#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, AudioContextState, OscillatorType};

#[cfg(target_arch = "wasm32")]
const CHIME_SECONDS: f64 = 0.3;
#[cfg(target_arch = "wasm32")]
const WOOSH_SECONDS: f64 = 0.15;

#[derive(Debug, Default)]
/// Plays chat cues through the Web Audio API.
pub struct WebSoundService {
    #[cfg(target_arch = "wasm32")]
    context: RefCell<Option<AudioContext>>,
}

#[cfg(target_arch = "wasm32")]
fn js_error(action: &'static str) -> impl Fn(JsValue) -> String {
    move |err| format!("{action} failed: {err:?}")
}

#[cfg(target_arch = "wasm32")]
impl WebSoundService {
    fn context(&self) -> Result<AudioContext, String> {
        let mut slot = self.context.borrow_mut();
        let ctx = match slot.as_ref() {
            Some(ctx) => ctx.clone(),
            None => {
                let ctx = AudioContext::new().map_err(js_error("create audio context"))?;
                *slot = Some(ctx.clone());
                ctx
            }
        };
        // Browsers start contexts suspended until a user gesture.
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Ok(ctx)
    }

    /// Two sine tones (C5 and A4) under a short attack/decay envelope.
    fn play_chime(ctx: &AudioContext) -> Result<(), String> {
        let now = ctx.current_time();
        let gain = ctx.create_gain().map_err(js_error("create gain"))?;
        let envelope = gain.gain();
        envelope
            .set_value_at_time(0.0, now)
            .and_then(|_| envelope.linear_ramp_to_value_at_time(0.3, now + 0.01))
            .and_then(|_| envelope.exponential_ramp_to_value_at_time(0.01, now + CHIME_SECONDS))
            .map_err(js_error("chime envelope"))?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(js_error("connect chime"))?;

        for frequency in [523.25_f32, 440.0] {
            let tone = ctx.create_oscillator().map_err(js_error("create oscillator"))?;
            tone.set_type(OscillatorType::Sine);
            tone.frequency()
                .set_value_at_time(frequency, now)
                .map_err(js_error("chime frequency"))?;
            tone.connect_with_audio_node(&gain)
                .map_err(js_error("connect tone"))?;
            tone.start_with_when(now).map_err(js_error("start tone"))?;
            tone.stop_with_when(now + CHIME_SECONDS)
                .map_err(js_error("stop tone"))?;
        }
        Ok(())
    }

    /// Rising triangle sweep layered over a burst of white noise.
    fn play_woosh(ctx: &AudioContext) -> Result<(), String> {
        let now = ctx.current_time();

        let sweep = ctx.create_oscillator().map_err(js_error("create oscillator"))?;
        sweep.set_type(OscillatorType::Triangle);
        let frequency = sweep.frequency();
        frequency
            .set_value_at_time(200.0, now)
            .and_then(|_| frequency.exponential_ramp_to_value_at_time(800.0, now + WOOSH_SECONDS))
            .map_err(js_error("woosh sweep"))?;
        let sweep_gain = ctx.create_gain().map_err(js_error("create gain"))?;
        let envelope = sweep_gain.gain();
        envelope
            .set_value_at_time(0.0, now)
            .and_then(|_| envelope.linear_ramp_to_value_at_time(0.2, now + 0.01))
            .and_then(|_| envelope.exponential_ramp_to_value_at_time(0.01, now + WOOSH_SECONDS))
            .map_err(js_error("woosh envelope"))?;

        let sample_rate = ctx.sample_rate();
        let frames = (f64::from(sample_rate) * WOOSH_SECONDS) as u32;
        let noise: Vec<f32> = (0..frames)
            .map(|_| (js_sys::Math::random() * 2.0 - 1.0) as f32)
            .collect();
        let buffer = ctx
            .create_buffer(1, frames, sample_rate)
            .map_err(js_error("create noise buffer"))?;
        buffer
            .copy_to_channel(&noise, 0)
            .map_err(js_error("fill noise buffer"))?;
        let noise_source = ctx
            .create_buffer_source()
            .map_err(js_error("create noise source"))?;
        noise_source.set_buffer(Some(&buffer));
        let noise_gain = ctx.create_gain().map_err(js_error("create gain"))?;
        let noise_envelope = noise_gain.gain();
        noise_envelope
            .set_value_at_time(0.0, now)
            .and_then(|_| noise_envelope.linear_ramp_to_value_at_time(0.05, now + 0.01))
            .and_then(|_| {
                noise_envelope.exponential_ramp_to_value_at_time(0.01, now + WOOSH_SECONDS)
            })
            .map_err(js_error("noise envelope"))?;

        let destination = ctx.destination();
        sweep
            .connect_with_audio_node(&sweep_gain)
            .and_then(|_| sweep_gain.connect_with_audio_node(&destination))
            .and_then(|_| noise_source.connect_with_audio_node(&noise_gain))
            .and_then(|_| noise_gain.connect_with_audio_node(&destination))
            .map_err(js_error("connect woosh"))?;

        sweep
            .start_with_when(now)
            .and_then(|_| noise_source.start_with_when(now))
            .and_then(|_| sweep.stop_with_when(now + WOOSH_SECONDS))
            .and_then(|_| noise_source.stop_with_when(now + WOOSH_SECONDS))
            .map_err(js_error("schedule woosh"))
    }
}

impl SoundService for WebSoundService {
    fn play(&self, cue: SoundCue) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let ctx = self.context()?;
            match cue {
                SoundCue::MessageSent => Self::play_woosh(&ctx),
                SoundCue::MessageReceived => Self::play_chime(&ctx),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = cue;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_playback_is_a_silent_success() {
        let service = WebSoundService::default();
        assert!(service.play(SoundCue::MessageSent).is_ok());
        assert!(service.play(SoundCue::MessageReceived).is_ok());
    }
}
