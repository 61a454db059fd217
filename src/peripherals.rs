//! Presentation and I/O peripherals
//!
//! A level talks to three peripherals: a display surface, an LED output board and
//! an audio player. All of them are best effort: a failing or missing peripheral
//! is logged and ignored, gameplay never depends on it.

use std::collections::BTreeMap;

use glam::Vec2;
use thiserror::Error;

use crate::audio::AudioManager;

/// Failure reported by a peripheral backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeripheralError {
    #[error("peripheral unavailable")]
    Unavailable,
    #[error("request rejected: {0}")]
    Rejected(String),
    #[error("backend error: {0}")]
    Backend(String),
}

pub type PeripheralResult = Result<(), PeripheralError>;

/// Display surface the level draws its target images and text on
pub trait Display {
    /// Clear a surface region
    fn clear(&mut self, region: &str) -> PeripheralResult;
    /// Draw an asset (extension-less key) into a region
    fn draw_asset(
        &mut self,
        region: &str,
        asset_key: &str,
        position: Vec2,
        centered: bool,
        scale: f32,
    ) -> PeripheralResult;
    /// Set a text label
    fn set_text(&mut self, label: &str, text: &str) -> PeripheralResult;
}

/// Digital output board driving the button LEDs
pub trait Outputs {
    /// Set output levels by output id
    fn set_outputs(&mut self, levels: &BTreeMap<u32, u8>) -> PeripheralResult;
}

/// Sound playback backend
pub trait Audio {
    /// Play a named sound `loops` extra times (0 = once)
    fn play(&mut self, sound_name: &str, loops: u32) -> PeripheralResult;
}

/// Run a peripheral call, logging and discarding any failure.
pub fn best_effort(what: &str, result: PeripheralResult) {
    if let Err(e) = result {
        log::debug!("{what} failed (ignored): {e}");
    }
}

/// The peripherals a level is wired to
pub struct Peripherals {
    pub display: Box<dyn Display>,
    /// LED board; `None` when no board is attached
    pub outputs: Option<Box<dyn Outputs>>,
    pub audio: AudioManager,
}

impl Peripherals {
    /// Peripherals that only log what they are asked to do
    pub fn logging() -> Self {
        Self {
            display: Box::new(LogDisplay),
            outputs: Some(Box::new(LogOutputs)),
            audio: AudioManager::new(Some(Box::new(LogAudio))),
        }
    }

    /// Switch every listed output to `level` in one call
    pub fn set_all_outputs(&mut self, ids: impl IntoIterator<Item = u32>, level: u8) {
        let Some(outputs) = self.outputs.as_mut() else {
            return;
        };
        let levels: BTreeMap<u32, u8> = ids.into_iter().map(|id| (id, level)).collect();
        best_effort("set_outputs", outputs.set_outputs(&levels));
    }
}

/// Display that writes draw calls to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDisplay;

impl Display for LogDisplay {
    fn clear(&mut self, region: &str) -> PeripheralResult {
        log::trace!("display: clear {region}");
        Ok(())
    }

    fn draw_asset(
        &mut self,
        region: &str,
        asset_key: &str,
        position: Vec2,
        centered: bool,
        scale: f32,
    ) -> PeripheralResult {
        log::info!(
            "display: {region} <- {asset_key} at ({}, {}) scale {scale}{}",
            position.x,
            position.y,
            if centered { " centered" } else { "" }
        );
        Ok(())
    }

    fn set_text(&mut self, label: &str, text: &str) -> PeripheralResult {
        log::info!("display: [{label}] {text}");
        Ok(())
    }
}

/// Output board that writes levels to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogOutputs;

impl Outputs for LogOutputs {
    fn set_outputs(&mut self, levels: &BTreeMap<u32, u8>) -> PeripheralResult {
        log::debug!("outputs: {levels:?}");
        Ok(())
    }
}

/// Audio backend that writes sound names to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl Audio for LogAudio {
    fn play(&mut self, sound_name: &str, loops: u32) -> PeripheralResult {
        log::info!("audio: {sound_name} (loops {loops})");
        Ok(())
    }
}
