//! Geometry module - joint angles and per-frame pose signals
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod signals;

pub use angles::{angle_at, angle_between};
pub use signals::{
    min_available, FrameSize, PoseSignals, POSE_LANDMARK_COUNT,
    LEFT_SHOULDER, RIGHT_SHOULDER, LEFT_ELBOW, RIGHT_ELBOW, LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP, LEFT_KNEE, RIGHT_KNEE, LEFT_ANKLE, RIGHT_ANKLE,
};
