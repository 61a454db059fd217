//! Feedback sounds
//!
//! The level plays one of two named sound files; the backend decides how.

use crate::peripherals::{Audio, best_effort};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Correct button pressed
    Positive,
    /// Wrong button pressed
    Error,
}

impl SoundEffect {
    /// Sound file name known to the audio backend
    pub fn sound_name(&self) -> &'static str {
        match self {
            SoundEffect::Positive => "PI_Positive01",
            SoundEffect::Error => "PI_Error",
        }
    }
}

/// Audio manager for the level
pub struct AudioManager {
    backend: Option<Box<dyn Audio>>,
    muted: bool,
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn Audio>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self {
            backend,
            muted: false,
        }
    }

    /// An audio manager with no backend
    pub fn silent() -> Self {
        Self {
            backend: None,
            muted: false,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play a sound effect once
    pub fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        let Some(backend) = self.backend.as_mut() else { return };
        best_effort(effect.sound_name(), backend.play(effect.sound_name(), 0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::peripherals::{PeripheralError, PeripheralResult};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Audio for Recorder {
        fn play(&mut self, sound_name: &str, _loops: u32) -> PeripheralResult {
            self.0.borrow_mut().push(sound_name.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl Audio for Broken {
        fn play(&mut self, _sound_name: &str, _loops: u32) -> PeripheralResult {
            Err(PeripheralError::Unavailable)
        }
    }

    #[test]
    fn test_play_uses_sound_names() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Some(Box::new(Recorder(played.clone()))));
        audio.play(SoundEffect::Positive);
        audio.play(SoundEffect::Error);
        assert_eq!(*played.borrow(), vec!["PI_Positive01", "PI_Error"]);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let played = Rc::new(RefCell::new(Vec::new()));
        let mut audio = AudioManager::new(Some(Box::new(Recorder(played.clone()))));
        audio.set_muted(true);
        audio.play(SoundEffect::Positive);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn test_backend_failure_is_swallowed() {
        let mut audio = AudioManager::new(Some(Box::new(Broken)));
        audio.play(SoundEffect::Error);
        AudioManager::silent().play(SoundEffect::Error);
    }
}
