//! Counter thresholds and their defaults
//!
//! Angles are in degrees, hold/timing limits in frames, drops in
//! normalized frame-height units.

/// Knee angle at or below which a squat is "down"
pub const SQUAT_DOWN_ANGLE: f32 = 95.0;
/// Knee angle at or above which a squat is "up" (standing)
pub const SQUAT_UP_ANGLE: f32 = 165.0;

/// Elbow angle at or below which a push-up is "down"
pub const PUSHUP_DOWN_ANGLE: f32 = 95.0;
/// Elbow angle at or above which a push-up is "up" (plank)
pub const PUSHUP_UP_ANGLE: f32 = 165.0;

/// Frames to remain down for the rep to count as good depth (anti-bounce)
pub const MIN_DOWN_HOLD_FRAMES: u32 = 3;

/// Minimum swing between the down sample and the up threshold
pub const DEFAULT_MIN_RANGE_OF_MOTION: f32 = 40.0;

/// Minimum frames between entering down and coming back up
pub const DEFAULT_MIN_REP_FRAMES: u32 = 10;

/// Hip must drop this far (squat) between standing and the bottom
pub const MIN_HIP_DROP: f32 = 0.2;

/// Shoulders must drop this far (push-up) between plank and the bottom
pub const MIN_SHOULDER_DROP: f32 = 0.15;

/// Torso angle a completed squat must exceed
pub const MIN_SQUAT_TORSO_ANGLE: f32 = 150.0;

/// Phase thresholds for one counter, fixed at construction
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thresholds {
    pub down_threshold: f32,
    pub up_threshold: f32,
    pub min_down_hold_frames: u32,
    pub min_range_of_motion: f32,
    pub min_rep_frames: u32,
}

impl Thresholds {
    pub fn new(down_threshold: f32, up_threshold: f32) -> Self {
        Self {
            down_threshold,
            up_threshold,
            min_down_hold_frames: MIN_DOWN_HOLD_FRAMES,
            min_range_of_motion: DEFAULT_MIN_RANGE_OF_MOTION,
            min_rep_frames: DEFAULT_MIN_REP_FRAMES,
        }
    }

    /// Knee-angle preset
    pub fn for_squat() -> Self {
        Self::new(SQUAT_DOWN_ANGLE, SQUAT_UP_ANGLE)
    }

    /// Elbow-angle preset
    pub fn for_pushup() -> Self {
        Self::new(PUSHUP_DOWN_ANGLE, PUSHUP_UP_ANGLE)
    }

    pub fn with_min_down_hold_frames(mut self, frames: u32) -> Self {
        self.min_down_hold_frames = frames;
        self
    }

    pub fn with_min_range_of_motion(mut self, degrees: f32) -> Self {
        self.min_range_of_motion = degrees;
        self
    }

    pub fn with_min_rep_frames(mut self, frames: u32) -> Self {
        self.min_rep_frames = frames;
        self
    }

    /// Down must sit strictly below up, both within [0, 180]
    pub fn is_valid(&self) -> bool {
        let in_range = |a: f32| (0.0..=180.0).contains(&a);
        in_range(self.down_threshold)
            && in_range(self.up_threshold)
            && self.down_threshold < self.up_threshold
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::for_squat()
    }
}
