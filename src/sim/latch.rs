//! Per-sensor press latches
//!
//! A sensor scores at most once per generation cycle. The first press sets its latch;
//! later presses (held buttons, contact bounce) are ignored until the next generation
//! clears all latches.

use super::SensorId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensorLatches {
    flags: Vec<bool>,
}

impl SensorLatches {
    /// `slots` latches, all clear
    pub fn new(slots: usize) -> Self {
        Self {
            flags: vec![false; slots],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Latch slot for a raw sensor id.
    ///
    /// Slots are `sensor_id - 1`. The range check compares the raw id, not the slot,
    /// against the slot count: ids `>= len` are rejected (so the highest slot is only
    /// reachable through id 0, which wraps to the last slot).
    pub fn slot(&self, sensor_id: SensorId) -> Option<usize> {
        let len = self.flags.len();
        if sensor_id < 0 || sensor_id as usize >= len {
            return None;
        }
        match sensor_id {
            0 => Some(len - 1),
            id => Some(id as usize - 1),
        }
    }

    pub fn is_set(&self, sensor_id: SensorId) -> bool {
        self.slot(sensor_id).is_some_and(|i| self.flags[i])
    }

    /// Set the latch for a sensor. Returns false if the id is out of range or
    /// the latch was already set.
    pub fn try_latch(&mut self, sensor_id: SensorId) -> bool {
        let Some(i) = self.slot(sensor_id) else {
            return false;
        };
        if self.flags[i] {
            return false;
        }
        self.flags[i] = true;
        true
    }

    /// Clear every latch
    pub fn reset(&mut self) {
        self.flags.fill(false);
    }
}
