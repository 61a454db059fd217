//! Level state machine
//!
//! All gameplay logic lives here. This module is purely reactive:
//! - The host calls in; nothing here spawns work or blocks
//! - Seeded RNG only, so a seed replays a session
//! - Peripherals are reached through the best-effort capability traits

pub mod boxes;
pub mod input;
pub mod latch;
pub mod level;
pub mod schedule;
pub mod target;

/// Stable identifier of a physical sensor (button)
pub type SensorId = i32;

pub use boxes::{BoxSize, Button, ButtonBox};
pub use input::{SensorEvent, SensorValue};
pub use latch::SensorLatches;
pub use level::{IgnoreReason, Level, PressOutcome};
pub use schedule::GenerationSchedule;
pub use target::{AssetVariant, Generation, GeneratedTarget, PresentationMode};
