//! Per-frame signal extraction from MediaPipe Pose landmarks
//!
//! Turns the 33 normalized pose landmarks into the angles and vertical
//! positions the rep counters consume.

use super::angles::angle_between;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const POSE_LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Pixel dimensions used to scale normalized landmarks before angles are taken
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Every signal the exercise counters can consume for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseSignals {
    /// Minimum of left/right hip-knee-ankle angles (degrees)
    pub knee_angle: Option<f32>,
    /// Minimum of left/right shoulder-elbow-wrist angles (degrees)
    pub elbow_angle: Option<f32>,
    /// Left shoulder-hip-knee (degrees)
    pub squat_torso_angle: Option<f32>,
    /// Left shoulder-hip-ankle (degrees)
    pub pushup_torso_angle: Option<f32>,
    /// Mean hip y, normalized (smaller = higher in frame)
    pub hip_y: Option<f32>,
    /// Mean shoulder y, normalized
    pub shoulder_y: Option<f32>,
}

impl PoseSignals {
    /// Signals for a frame where no pose was detected
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// Extract all signals from normalized (x, y) landmarks
    pub fn extract(points: &[(f32, f32); POSE_LANDMARK_COUNT], size: FrameSize) -> Self {
        let px = |idx: usize| (points[idx].0 * size.width, points[idx].1 * size.height);
        let joint = |a: usize, b: usize, c: usize| angle_between(px(a), px(b), px(c));

        let knee_angle = min_available(
            joint(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
            joint(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
        );
        let elbow_angle = min_available(
            joint(LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST),
            joint(RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST),
        );

        Self {
            knee_angle,
            elbow_angle,
            squat_torso_angle: joint(LEFT_SHOULDER, LEFT_HIP, LEFT_KNEE),
            pushup_torso_angle: joint(LEFT_SHOULDER, LEFT_HIP, LEFT_ANKLE),
            hip_y: mean_y(points[LEFT_HIP], points[RIGHT_HIP]),
            shoulder_y: mean_y(points[LEFT_SHOULDER], points[RIGHT_SHOULDER]),
        }
    }
}

/// Minimum of the readings that resolved, `None` if neither did
pub fn min_available(left: Option<f32>, right: Option<f32>) -> Option<f32> {
    match (left, right) {
        (Some(l), Some(r)) => Some(l.min(r)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    }
}

fn mean_y(a: (f32, f32), b: (f32, f32)) -> Option<f32> {
    let y = (a.1 + b.1) / 2.0;
    y.is_finite().then_some(y)
}
