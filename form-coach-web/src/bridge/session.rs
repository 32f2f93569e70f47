//! Session integration - owns the workout session and exposes counters to JS
//!
//! One `WorkoutSession` per page. `update_landmarks` feeds it; the HUD
//! reads it back through the getters below.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::counter::{ExerciseKind, Thresholds, WorkoutSession};
use crate::geometry::PoseSignals;
use super::errors::BridgeError;

thread_local! {
    static SESSION: RefCell<WorkoutSession> = RefCell::new(WorkoutSession::new());
}

/// Run one frame through the active counter (called from update_landmarks)
pub fn process_pose(signals: &PoseSignals) {
    SESSION.with(|session_cell| {
        session_cell.borrow_mut().process(signals);
    });
}

fn parse_kind(name: &str) -> Result<ExerciseKind, BridgeError> {
    ExerciseKind::parse(name).ok_or_else(|| BridgeError::UnknownExercise(name.to_string()))
}

/// Thresholds for `kind` with the given phase angles and hold length
pub fn build_thresholds(
    kind: ExerciseKind,
    down: f32,
    up: f32,
    min_hold_frames: u32,
) -> Result<Thresholds, BridgeError> {
    let thresholds = Thresholds {
        down_threshold: down,
        up_threshold: up,
        ..kind.default_thresholds()
    }
    .with_min_down_hold_frames(min_hold_frames);

    if thresholds.is_valid() {
        Ok(thresholds)
    } else {
        Err(BridgeError::InvalidThresholds { down, up })
    }
}

/// HUD text for the active exercise
pub fn overlay_text(session: &WorkoutSession) -> String {
    let state = session.active();
    format!(
        "Mode: {}\n\
         Reps: {}  (Good: {})\n\
         {}",
        session.mode().label(),
        state.reps,
        state.good_reps,
        state.feedback_text(),
    )
}

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Switch the active exercise ("squats" / "push-ups", or hotkeys "1" / "2")
#[wasm_bindgen]
pub fn set_exercise_mode(name: &str) -> Result<(), JsValue> {
    let kind = parse_kind(name)?;
    SESSION.with(|session_cell| session_cell.borrow_mut().set_mode(kind));
    web_sys::console::log_1(&format!("🏋️ Mode: {}", kind.label()).into());
    Ok(())
}

#[wasm_bindgen]
pub fn get_exercise_mode() -> String {
    SESSION.with(|session_cell| session_cell.borrow().mode().label().to_string())
}

/// Rebuild one exercise's counter with new thresholds (its reps start over)
#[wasm_bindgen]
pub fn configure_exercise(name: &str, down: f32, up: f32, min_hold_frames: u32) -> Result<(), JsValue> {
    let kind = parse_kind(name)?;
    let thresholds = build_thresholds(kind, down, up, min_hold_frames)?;
    SESSION.with(|session_cell| session_cell.borrow_mut().configure(kind, thresholds));
    web_sys::console::log_1(
        &format!(
            "⚙️ {} thresholds: down≤{:.0}° up≥{:.0}° hold={}",
            kind.label(), down, up, min_hold_frames
        )
        .into(),
    );
    Ok(())
}

#[wasm_bindgen]
pub fn get_reps() -> u32 {
    SESSION.with(|session_cell| session_cell.borrow().active().reps)
}

#[wasm_bindgen]
pub fn get_good_reps() -> u32 {
    SESSION.with(|session_cell| session_cell.borrow().active().good_reps)
}

/// "not_ready", "up" or "down"
#[wasm_bindgen]
pub fn get_phase() -> String {
    SESSION.with(|session_cell| session_cell.borrow().active().phase.name().to_string())
}

#[wasm_bindgen]
pub fn get_feedback() -> String {
    SESSION.with(|session_cell| session_cell.borrow().active().feedback_text().to_string())
}

/// Formatted HUD text (called from JS to update HTML)
#[wasm_bindgen]
pub fn get_counter_overlay_text() -> String {
    SESSION.with(|session_cell| overlay_text(&session_cell.borrow()))
}

#[wasm_bindgen]
pub fn get_workout_summary() -> String {
    SESSION.with(|session_cell| session_cell.borrow().summary().to_string())
}

/// Overall good-rep percentage, undefined until a rep is counted
#[wasm_bindgen]
pub fn get_form_quality() -> Option<u32> {
    SESSION.with(|session_cell| session_cell.borrow().summary().form_quality_percent())
}

/// Clear both counters (mode and thresholds are kept)
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|session_cell| session_cell.borrow_mut().reset());
    web_sys::console::log_1(&"🔄 Workout session reset".into());
}
