//! Level configuration
//!
//! Static wiring and tuning for one Boxes level, loaded from JSON.
//! Every key has a default, so a partial (or missing) file still yields a playable level.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::consts::*;
use crate::sim::SensorId;

/// Failure to read or parse a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where and how one box's target image is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    pub position: Vec2,
    pub scale: f32,
    pub centered: bool,
}

/// Drawing surface layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Layout {
    /// Surface region the level draws into
    pub region: String,
    /// Text label used for the debug overlay
    pub info_label: String,
    pub large_image: ImagePlacement,
    pub small_image: ImagePlacement,
}

const CONTENT_SURFACE_WIDTH: f32 = 1280.0;

impl Default for Layout {
    fn default() -> Self {
        Self {
            region: "contentsurface".to_string(),
            info_label: "Info".to_string(),
            large_image: ImagePlacement {
                position: Vec2::new(CONTENT_SURFACE_WIDTH / 2.0, 220.0),
                scale: 1.0,
                centered: true,
            },
            small_image: ImagePlacement {
                position: Vec2::new(260.0, 520.0),
                scale: 0.5,
                centered: true,
            },
        }
    }
}

/// Static configuration of a Boxes level
///
/// Serializes with the same key names [`LevelConfig::from_json_str`] reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    // === Sensor wiring ===
    pub small_box_sensors: Vec<SensorId>,
    pub large_box_sensors: Vec<SensorId>,

    // === Assets ===
    pub button_symbol_images: Vec<String>,
    pub button_color_images: Vec<String>,
    /// Placeholder shown when a box has been solved
    pub start_image: String,

    // Per-button index into the asset tables
    pub small_box_symbol_map: Vec<usize>,
    pub small_box_color_map: Vec<usize>,
    pub large_box_symbol_map: Vec<usize>,
    pub large_box_color_map: Vec<usize>,

    // === LED outputs ===
    pub small_box_led_outputs: Vec<u32>,
    pub large_box_led_outputs: Vec<u32>,

    // === Rules ===
    /// Number of sensor latch slots
    pub sensor_flags: usize,
    /// Score that ends the session
    pub max_points: i64,
    #[serde(rename = "debug_text_on_screen")]
    pub debug_text_on_screen: bool,

    // === Timing (seconds) ===
    pub first_generation_delay_s: u64,
    pub time_between_buttons: u64,
    pub solved_grace_s: u64,

    pub layout: Layout,
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            small_box_sensors: vec![1, 2, 3, 4, 5],
            large_box_sensors: vec![6, 7, 8, 9, 10],

            button_symbol_images: strings(&[
                "pi_cube_circle.png",
                "pi_cube_triangle.png",
                "pi_cube_square.png",
                "pi_cube_pentagon.png",
                "pi_cube_hexagon.png",
            ]),
            button_color_images: strings(&[
                "pi_cube_red.png",
                "pi_cube_green.png",
                "pi_cube_blue.png",
                "pi_cube_yellow.png",
                "pi_cube_orange.png",
            ]),
            start_image: "pi_cube.png".to_string(),

            small_box_symbol_map: vec![4, 1, 2, 3, 0],
            small_box_color_map: vec![0, 1, 2, 3, 4],
            large_box_symbol_map: vec![1, 2, 3, 4, 0],
            large_box_color_map: vec![0, 1, 2, 3, 4],

            // DO1 is the door lock; DO2-DO11 light SB1-SB10
            small_box_led_outputs: vec![2, 3, 4, 5, 6],
            large_box_led_outputs: vec![7, 8, 9, 10, 11],

            sensor_flags: DEFAULT_SENSOR_FLAGS,
            max_points: DEFAULT_MAX_POINTS,
            debug_text_on_screen: false,

            first_generation_delay_s: FIRST_GENERATION_DELAY_S,
            time_between_buttons: TIME_BETWEEN_BUTTONS_S,
            solved_grace_s: SOLVED_GRACE_S,

            layout: Layout::default(),
        }
    }
}

/// Overwrite `$field` from `$key` when present; a value of the wrong shape keeps the default
macro_rules! read_keys {
    ($map:expr, $config:expr, { $($key:literal => $field:ident),* $(,)? }) => {
        $(
            if let Some(value) = $map.get($key) {
                match serde_json::from_value(value.clone()) {
                    Ok(parsed) => $config.$field = parsed,
                    Err(e) => log::warn!("Config key {:?} ignored ({e}); using default", $key),
                }
            }
        )*
    };
}

impl LevelConfig {
    /// Parse a configuration from JSON text.
    ///
    /// The text must be a JSON object. Each key is read on its own: a missing key or a
    /// value of the wrong type takes that key's default without affecting the others.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let map: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::from_map(&map))
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        let mut config = Self::default();
        read_keys!(map, config, {
            "smallBoxSensors" => small_box_sensors,
            "largeBoxSensors" => large_box_sensors,
            "buttonSymbolImages" => button_symbol_images,
            "buttonColorImages" => button_color_images,
            "startImage" => start_image,
            "smallBoxSymbolMap" => small_box_symbol_map,
            "smallBoxColorMap" => small_box_color_map,
            "largeBoxSymbolMap" => large_box_symbol_map,
            "largeBoxColorMap" => large_box_color_map,
            "smallBoxLedOutputs" => small_box_led_outputs,
            "largeBoxLedOutputs" => large_box_led_outputs,
            "sensorFlags" => sensor_flags,
            "maxPoints" => max_points,
            "debug_text_on_screen" => debug_text_on_screen,
            "firstGenerationDelayS" => first_generation_delay_s,
            "timeBetweenButtons" => time_between_buttons,
            "solvedGraceS" => solved_grace_s,
            "layout" => layout,
        });
        config
    }

    /// Load a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded level config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default level config");
                Self::default()
            }
        }
    }

    /// All button LED output ids, small box first
    pub fn led_outputs(&self) -> impl Iterator<Item = u32> + '_ {
        self.small_box_led_outputs
            .iter()
            .chain(self.large_box_led_outputs.iter())
            .copied()
    }
}
