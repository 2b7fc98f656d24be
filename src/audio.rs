//! Audio using the Web Audio API
//!
//! Background music comes from an `<audio>` element on the page; the
//! end-of-run stings are generated procedurally.

use std::rc::Rc;

use web_sys::{AudioContext, GainNode, HtmlAudioElement, OscillatorNode, OscillatorType};

use crate::frontend::MusicPlayer;

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    music: Option<HtmlAudioElement>,
    /// Already accounts for mute
    volume: f32,
}

impl AudioManager {
    /// `volume` is `Settings::effective_music_volume`
    pub fn new(music: Option<HtmlAudioElement>, volume: f32) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - stings disabled");
        }
        if music.is_none() {
            log::warn!("No background music element - music disabled");
        }
        let manager = Self {
            ctx,
            music,
            volume: volume.clamp(0.0, 1.0),
        };
        manager.apply_volume();
        manager
    }

    fn apply_volume(&self) {
        if let Some(music) = &self.music {
            music.set_volume(self.volume as f64);
        }
    }

    /// Descending tones when a run ends
    pub fn play_game_over(&self) {
        let vol = self.volume;
        let Some(ctx) = self.ready_context(vol) else { return };
        for (i, freq) in [400.0, 350.0, 300.0, 200.0].iter().enumerate() {
            let delay = i as f64 * 0.2;
            if let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Sine) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.3, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }

    /// Rising arpeggio for a new high score
    pub fn play_high_score(&self) {
        let vol = self.volume;
        let Some(ctx) = self.ready_context(vol) else { return };
        for (i, freq) in [500.0, 600.0, 700.0, 800.0, 1000.0].iter().enumerate() {
            let delay = i as f64 * 0.08;
            if let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.25, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.25)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.3).ok();
            }
        }
    }

    fn ready_context(&self, vol: f32) -> Option<&AudioContext> {
        if vol <= 0.0 {
            return None;
        }
        let ctx = self.ctx.as_ref()?;
        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    pub fn play_music(&self) {
        if let Some(music) = &self.music {
            // Rejected until the user interacts with the page
            if let Err(e) = music.play() {
                log::warn!("Music playback refused: {:?}", e);
            }
        }
    }

    pub fn pause_music(&self) {
        if let Some(music) = &self.music {
            let _ = music.pause();
        }
    }

    pub fn rewind_music(&self) {
        if let Some(music) = &self.music {
            music.set_current_time(0.0);
        }
    }
}

/// The session owns one handle, the end-of-run panel another (for stings)
impl MusicPlayer for Rc<AudioManager> {
    fn play(&mut self) {
        self.play_music();
    }

    fn pause(&mut self) {
        self.pause_music();
    }

    fn rewind(&mut self) {
        self.rewind_music();
    }
}

/// Create an oscillator with gain envelope
fn create_osc(
    ctx: &AudioContext,
    freq: f32,
    osc_type: OscillatorType,
) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
