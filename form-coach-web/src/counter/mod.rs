//! Counter module - rep detection and form validation
//!
//! Re-exports only. All logic in submodules.

mod thresholds;
mod state;
mod posture;
mod machine;
mod validator;
mod profile;
mod summary;
mod session;

pub use thresholds::{
    Thresholds, SQUAT_DOWN_ANGLE, SQUAT_UP_ANGLE, PUSHUP_DOWN_ANGLE, PUSHUP_UP_ANGLE,
    MIN_DOWN_HOLD_FRAMES, DEFAULT_MIN_RANGE_OF_MOTION, DEFAULT_MIN_REP_FRAMES,
    MIN_HIP_DROP, MIN_SHOULDER_DROP, MIN_SQUAT_TORSO_ANGLE,
};
pub use state::{CounterState, Feedback, Phase};
pub use posture::{pushup_torso_check, squat_torso_check, PostureGate, PostureRange};
pub use machine::{CompletedRep, PhaseEvent, RepPhaseStateMachine};
pub use validator::{DepthValidator, DisplacementExtremes, TorsoValidator};
pub use profile::{ExerciseKind, ExerciseProfile, FrameSignals};
pub use summary::{form_quality_percent, ExerciseTally, WorkoutSummary};
pub use session::WorkoutSession;
