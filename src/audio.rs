//! Audio cues
//!
//! The simulation raises events; this module turns them into sound effect
//! cues and hands them to a backend. Playback is fire-and-forget.

use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Regular enemy or bullet-impact explosion
    ExplosionLight,
    /// Heavy enemy explosion
    ExplosionHeavy,
    /// Power-up collected
    PowerUp,
    /// Level timer ran out
    LevelUp,
    /// Health reached zero
    GameOver,
}

impl SoundEffect {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Shot { .. } => Some(SoundEffect::Shoot),
            GameEvent::Explosion { heavy: true, .. } => Some(SoundEffect::ExplosionHeavy),
            GameEvent::Explosion { heavy: false, .. } => Some(SoundEffect::ExplosionLight),
            GameEvent::PowerUpCollected { .. } => Some(SoundEffect::PowerUp),
            GameEvent::PhaseChanged {
                to: GamePhase::LevelComplete,
                ..
            } => Some(SoundEffect::LevelUp),
            GameEvent::PhaseChanged {
                to: GamePhase::GameOver,
                ..
            } => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

/// Something that can actually make noise
pub trait AudioBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Backend that only logs cues (headless runs)
#[derive(Debug, Default)]
pub struct LogBackend;

impl AudioBackend for LogBackend {
    fn play(&mut self, effect: SoundEffect, volume: f32) {
        log::debug!("sfx {:?} at volume {:.2}", effect, volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<B: AudioBackend> {
    backend: B,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager<LogBackend> {
    fn default() -> Self {
        Self::new(LogBackend)
    }
}

impl<B: AudioBackend> AudioManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Take volumes and mute from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.backend.play(effect, vol);
    }

    /// Play the cues for a batch of tick events
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PowerUpKind;
    use glam::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<(SoundEffect, f32)>);

    impl AudioBackend for Recorder {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.0.push((effect, volume));
        }
    }

    #[test]
    fn test_event_cues() {
        let mut audio = AudioManager::new(Recorder::default());
        audio.handle_events(&[
            GameEvent::Shot { bullets: 3 },
            GameEvent::Explosion {
                pos: Vec2::ZERO,
                heavy: true,
                shake: 10.0,
            },
            GameEvent::PowerUpCollected {
                kind: PowerUpKind::Shield,
            },
            GameEvent::ShieldAbsorbed,
            GameEvent::PhaseChanged {
                from: GamePhase::Playing,
                to: GamePhase::LevelComplete,
            },
        ]);
        let cues: Vec<_> = audio.backend().0.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            cues,
            vec![
                SoundEffect::Shoot,
                SoundEffect::ExplosionHeavy,
                SoundEffect::PowerUp,
                SoundEffect::LevelUp
            ]
        );
    }

    #[test]
    fn test_mute_and_volume() {
        let mut audio = AudioManager::new(Recorder::default());
        let settings = Settings {
            master_volume: 0.5,
            sfx_volume: 0.5,
            ..Default::default()
        };
        audio.apply_settings(&settings);
        audio.play(SoundEffect::Shoot);
        assert_eq!(audio.backend().0, vec![(SoundEffect::Shoot, 0.25)]);

        audio.set_muted(true);
        audio.play(SoundEffect::Shoot);
        assert_eq!(audio.backend().0.len(), 1);
    }
}
