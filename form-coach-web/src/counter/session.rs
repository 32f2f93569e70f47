//! Workout session - one counter per exercise plus the active mode

use crate::geometry::PoseSignals;

use super::profile::{ExerciseKind, ExerciseProfile, FrameSignals};
use super::state::CounterState;
use super::summary::{ExerciseTally, WorkoutSummary};
use super::thresholds::Thresholds;

/// Independent squat and push-up counters; only the active one is fed
#[derive(Clone, Debug)]
pub struct WorkoutSession {
    mode: ExerciseKind,
    squats: ExerciseProfile,
    pushups: ExerciseProfile,
}

impl WorkoutSession {
    pub fn new() -> Self {
        Self {
            mode: ExerciseKind::Squat,
            squats: ExerciseProfile::squat(),
            pushups: ExerciseProfile::pushup(),
        }
    }

    pub fn mode(&self) -> ExerciseKind {
        self.mode
    }

    /// Switch the active exercise. Both counters keep their totals.
    pub fn set_mode(&mut self, mode: ExerciseKind) {
        self.mode = mode;
    }

    pub fn profile(&self, kind: ExerciseKind) -> &ExerciseProfile {
        match kind {
            ExerciseKind::Squat => &self.squats,
            ExerciseKind::Pushup => &self.pushups,
        }
    }

    fn profile_mut(&mut self, kind: ExerciseKind) -> &mut ExerciseProfile {
        match kind {
            ExerciseKind::Squat => &mut self.squats,
            ExerciseKind::Pushup => &mut self.pushups,
        }
    }

    pub fn active(&self) -> &CounterState {
        self.profile(self.mode).state()
    }

    /// Feed one frame to the active counter
    pub fn process(&mut self, pose: &PoseSignals) -> &CounterState {
        let mode = self.mode;
        let signals = FrameSignals::from_pose(mode, pose);
        self.profile_mut(mode).update(&signals)
    }

    /// Replace one exercise's counter with a freshly configured one
    pub fn configure(&mut self, kind: ExerciseKind, thresholds: Thresholds) {
        *self.profile_mut(kind) = ExerciseProfile::with_thresholds(kind, thresholds);
    }

    /// Clear both counters, keeping mode and configuration
    pub fn reset(&mut self) {
        self.squats.reset();
        self.pushups.reset();
    }

    pub fn summary(&self) -> WorkoutSummary {
        let tallies = ExerciseKind::ALL
            .iter()
            .map(|&kind| {
                let state = self.profile(kind).state();
                ExerciseTally {
                    kind,
                    reps: state.reps,
                    good_reps: state.good_reps,
                }
            })
            .collect();
        WorkoutSummary::new(tallies)
    }
}

impl Default for WorkoutSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::state::Phase;

    fn squat_pose(knee: f32, hip_y: f32) -> PoseSignals {
        PoseSignals {
            knee_angle: Some(knee),
            squat_torso_angle: Some(170.0),
            hip_y: Some(hip_y),
            ..PoseSignals::default()
        }
    }

    fn one_squat(session: &mut WorkoutSession) {
        session.process(&squat_pose(170.0, 0.4));
        for _ in 0..11 {
            session.process(&squat_pose(80.0, 0.7));
        }
        session.process(&squat_pose(170.0, 0.4));
    }

    #[test]
    fn test_only_active_counter_moves() {
        let mut session = WorkoutSession::new();
        one_squat(&mut session);
        assert_eq!(session.active().reps, 1);
        assert_eq!(session.profile(ExerciseKind::Pushup).state().phase, Phase::NotReady);

        session.set_mode(ExerciseKind::Pushup);
        // Squat-only pose has no elbow angle
        let state = *session.process(&squat_pose(170.0, 0.4));
        assert_eq!(state.last_feedback.text(), "Move into frame");
        assert_eq!(session.profile(ExerciseKind::Squat).state().reps, 1);
    }

    #[test]
    fn test_summary_and_reset() {
        let mut session = WorkoutSession::new();
        one_squat(&mut session);
        one_squat(&mut session);
        let summary = session.summary();
        assert_eq!(summary.total_reps(), 2);
        assert_eq!(summary.form_quality_percent(), Some(100));

        session.set_mode(ExerciseKind::Pushup);
        session.reset();
        assert_eq!(session.mode(), ExerciseKind::Pushup);
        assert_eq!(session.summary().total_reps(), 0);
    }

    #[test]
    fn test_configure_replaces_counter() {
        let mut session = WorkoutSession::new();
        one_squat(&mut session);
        session.configure(ExerciseKind::Squat, Thresholds::new(100.0, 160.0));
        let squat = session.profile(ExerciseKind::Squat);
        assert_eq!(squat.state().reps, 0);
        assert_eq!(squat.thresholds().up_threshold, 160.0);
    }

    #[test]
    fn test_unavailable_pose_is_idempotent() {
        let mut session = WorkoutSession::new();
        one_squat(&mut session);
        let before = *session.active();
        for _ in 0..25 {
            session.process(&PoseSignals::unavailable());
        }
        let after = session.active();
        assert_eq!((after.reps, after.good_reps, after.phase), (before.reps, before.good_reps, before.phase));
    }
}
