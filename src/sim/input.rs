//! Raw sensor events from the I/O boards

use serde::Deserialize;

use super::SensorId;

/// A raw sensor reading as delivered by the board driver
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SensorValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl SensorValue {
    /// Coerce to a pressed signal.
    ///
    /// Numbers are pressed when their integer part is positive. Anything that
    /// does not read as an integer falls back to truthiness (non-empty text,
    /// non-finite floats); a missing value is never pressed.
    pub fn is_pressed(&self) -> bool {
        match self {
            SensorValue::Bool(b) => *b,
            SensorValue::Int(i) => *i > 0,
            SensorValue::Float(f) if f.is_finite() => f.trunc() > 0.0,
            SensorValue::Float(_) => true,
            SensorValue::Text(s) => match s.trim().parse::<i64>() {
                Ok(i) => i > 0,
                Err(_) => !s.is_empty(),
            },
            SensorValue::Missing => false,
        }
    }
}

impl From<i64> for SensorValue {
    fn from(v: i64) -> Self {
        SensorValue::Int(v)
    }
}

impl From<bool> for SensorValue {
    fn from(v: bool) -> Self {
        SensorValue::Bool(v)
    }
}

impl From<f64> for SensorValue {
    fn from(v: f64) -> Self {
        SensorValue::Float(v)
    }
}

impl From<&str> for SensorValue {
    fn from(v: &str) -> Self {
        SensorValue::Text(v.to_string())
    }
}

/// One sensor change. `board_id` and `value_type` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorEvent {
    #[serde(default)]
    pub board_id: u32,
    #[serde(default)]
    pub value_type: String,
    pub sensor_id: SensorId,
    #[serde(default = "missing")]
    pub value: SensorValue,
}

fn missing() -> SensorValue {
    SensorValue::Missing
}

impl SensorEvent {
    /// A digital reading from board 0
    pub fn digital(sensor_id: SensorId, value: impl Into<SensorValue>) -> Self {
        Self {
            board_id: 0,
            value_type: "DI".to_string(),
            sensor_id,
            value: value.into(),
        }
    }
}
