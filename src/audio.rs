//! Sound cues
//!
//! The core emits `GameEvent`s; this module turns them into sound effect
//! requests for whatever player the shell provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Projectile leaves the thrower's hand
    Throw,
    /// Projectile hits a building or an actor
    Explosion,
}

impl SoundEffect {
    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::ThrowStarted { .. } => Some(SoundEffect::Throw),
            GameEvent::Hit { .. } => Some(SoundEffect::Explosion),
            _ => None,
        }
    }
}

/// Something that can actually make noise
pub trait SoundPlayer {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Headless player that only logs cues
#[derive(Debug, Default)]
pub struct LogSoundPlayer;

impl SoundPlayer for LogSoundPlayer {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("Sound {:?} at volume {:.2}", effect, volume);
    }
}

/// Routes event cues to a sound player
pub struct AudioCues<P> {
    player: P,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<P: SoundPlayer> AudioCues<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the cues for a batch of events, in order
    pub fn handle(&mut self, events: &[GameEvent]) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.player.play(effect, vol);
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }
}
