//! Errors surfaced to JavaScript by the bridge entry points

use std::fmt;
use wasm_bindgen::prelude::*;

/// Errors that can occur at the JS boundary
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeError {
    InvalidLandmarkCount(usize),
    UnknownExercise(String),
    InvalidThresholds { down: f32, up: f32 },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::InvalidLandmarkCount(len) => write!(
                f,
                "Invalid landmark data length: {} (expected {} or 0)",
                len,
                super::landmarks::LANDMARK_FLOATS
            ),
            BridgeError::UnknownExercise(name) => {
                write!(f, "Unknown exercise '{}' (expected squats or push-ups)", name)
            }
            BridgeError::InvalidThresholds { down, up } => write!(
                f,
                "Invalid thresholds: down={} up={} (need 0 <= down < up <= 180)",
                down, up
            ),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
