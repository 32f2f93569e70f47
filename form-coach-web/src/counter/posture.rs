//! Torso orientation predicates
//!
//! Used as phase-entry gates (push-ups) or kept available for post-hoc
//! checks. A missing angle never passes.

/// Signature of a pluggable posture gate
pub type PostureGate = fn(Option<f32>) -> bool;

/// Inclusive range of acceptable torso angles (degrees)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PostureRange {
    pub min: f32,
    pub max: f32,
}

/// Squat torso should be upright
pub const SQUAT_TORSO_RANGE: PostureRange = PostureRange { min: 160.0, max: 180.0 };

/// Push-up torso should be a plank
pub const PUSHUP_TORSO_RANGE: PostureRange = PostureRange { min: 150.0, max: 180.0 };

impl PostureRange {
    pub fn accepts(&self, angle: Option<f32>) -> bool {
        angle.is_some_and(|a| a >= self.min && a <= self.max)
    }
}

/// Upright torso check. Not wired as the squat entry gate.
pub fn squat_torso_check(angle: Option<f32>) -> bool {
    SQUAT_TORSO_RANGE.accepts(angle)
}

/// Plank-ish torso check, the push-up entry gate
pub fn pushup_torso_check(angle: Option<f32>) -> bool {
    PUSHUP_TORSO_RANGE.accepts(angle)
}
