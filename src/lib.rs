//! Boxes - a two-panel button reaction level
//!
//! Core modules:
//! - `sim`: The level state machine (targets, debounce latches, scoring, schedule)
//! - `host`: Capabilities the surrounding game framework provides (clock, score, phase)
//! - `peripherals`: Display, LED output and audio capabilities (best effort)
//! - `settings`: Static level configuration (sensor wiring, asset tables, tuning)

pub mod audio;
pub mod host;
pub mod peripherals;
pub mod settings;
pub mod sim;

pub use host::{GameHost, GamePhase, SimHost};
pub use peripherals::{Audio, Display, Outputs, PeripheralError, Peripherals};
pub use settings::LevelConfig;
pub use sim::Level;

/// Game configuration constants
pub mod consts {
    /// Delay before the first target appears after level start (seconds)
    pub const FIRST_GENERATION_DELAY_S: u64 = 2;
    /// Steady-state interval between target generations (seconds)
    pub const TIME_BETWEEN_BUTTONS_S: u64 = 6;
    /// Grace interval once both boxes are solved (seconds)
    pub const SOLVED_GRACE_S: u64 = 1;

    /// Score awarded for a correct press
    pub const POINTS_PER_HIT: i64 = 2;
    /// Score removed for a wrong press
    pub const POINTS_PER_MISS: i64 = 2;

    /// Score at which targets switch from symbols to colors
    pub const COLOR_TIER_SCORE: i64 = 25;
    /// Score at which targets switch to mixed symbols/colors
    pub const MIXED_TIER_SCORE: i64 = 50;

    /// Default win threshold
    pub const DEFAULT_MAX_POINTS: i64 = 100;
    /// Default number of sensor latch slots
    pub const DEFAULT_SENSOR_FLAGS: usize = 10;

    /// Reason passed to the host when the win threshold is reached
    pub const MAX_POINTS_REASON: &str = "Max points reached";
}

/// Strip a trailing filename extension to get a display asset key.
///
/// `"pi_cube_red.png"` becomes `"pi_cube_red"`; names without a dot pass through.
#[inline]
pub fn strip_ext(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    }
}
