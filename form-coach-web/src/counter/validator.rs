//! Secondary validators - post-hoc quality checks on a counted rep
//!
//! The phase machine only looks at the primary angle. These checks look
//! at the other signals and can take a rep back after it was counted.

use super::machine::PhaseEvent;
use super::state::{Feedback, Phase};

/// Vertical extremes of one up→down→up excursion
///
/// y grows downward, so `reference_high` is the minimum y seen while up
/// and `reference_low` the maximum y seen while down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DisplacementExtremes {
    pub reference_high: Option<f32>,
    pub reference_low: Option<f32>,
}

impl DisplacementExtremes {
    /// Fold one displacement sample in, according to the current phase
    pub fn observe(&mut self, phase: Phase, y: f32) {
        match phase {
            Phase::Up => {
                self.reference_high = Some(self.reference_high.map_or(y, |h| h.min(y)));
                self.reference_low = None;
            }
            Phase::Down => {
                self.reference_low = Some(self.reference_low.map_or(y, |l| l.max(y)));
            }
            Phase::NotReady => {}
        }
    }

    /// How far the tracked point dropped, if both extremes are known
    pub fn vertical_drop(&self) -> Option<f32> {
        Some(self.reference_low? - self.reference_high?)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Requires the tracked point (hips, shoulders) to drop far enough
#[derive(Clone, Debug)]
pub struct DepthValidator {
    min_drop: f32,
    extremes: DisplacementExtremes,
}

impl DepthValidator {
    pub fn new(min_drop: f32) -> Self {
        Self {
            min_drop,
            extremes: DisplacementExtremes::default(),
        }
    }

    pub fn extremes(&self) -> &DisplacementExtremes {
        &self.extremes
    }

    /// Drop of the excursion tracked so far, before the current frame is folded in
    pub fn pending_drop(&self) -> Option<f32> {
        self.extremes.vertical_drop()
    }

    pub fn check(&self, drop: f32) -> Result<(), Feedback> {
        if drop >= self.min_drop {
            Ok(())
        } else {
            Err(Feedback::BadRepDepth)
        }
    }

    /// Track the frame after the machine classified it
    ///
    /// Extremes start over whenever the phase re-enters `up`.
    pub fn observe(&mut self, event: &PhaseEvent, phase: Phase, displacement: Option<f32>) {
        if event.returned_up() {
            self.extremes.reset();
        }
        if let Some(y) = displacement.filter(|y| y.is_finite()) {
            self.extremes.observe(phase, y);
        }
    }

    pub fn reset(&mut self) {
        self.extremes.reset();
    }
}

/// Requires the torso to stay upright at the moment the rep completes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TorsoValidator {
    min_torso_angle: f32,
}

impl TorsoValidator {
    pub fn new(min_torso_angle: f32) -> Self {
        Self { min_torso_angle }
    }

    pub fn check(&self, torso_angle: Option<f32>) -> Result<(), Feedback> {
        match torso_angle {
            Some(angle) if angle > self.min_torso_angle => Ok(()),
            _ => Err(Feedback::BadRepLeaning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extremes_track_min_up_and_max_down() {
        let mut ex = DisplacementExtremes::default();
        ex.observe(Phase::Up, 0.40);
        ex.observe(Phase::Up, 0.38);
        ex.observe(Phase::Up, 0.41);
        ex.observe(Phase::Down, 0.55);
        ex.observe(Phase::Down, 0.62);
        ex.observe(Phase::Down, 0.60);
        assert_eq!(ex.reference_high, Some(0.38));
        assert_eq!(ex.reference_low, Some(0.62));
        assert!((ex.vertical_drop().unwrap() - 0.24).abs() < 1e-6);
    }

    #[test]
    fn test_up_sample_clears_low() {
        let mut ex = DisplacementExtremes::default();
        ex.observe(Phase::Down, 0.7);
        ex.observe(Phase::Up, 0.4);
        assert_eq!(ex.reference_low, None);
        assert_eq!(ex.vertical_drop(), None);
    }

    #[test]
    fn test_not_ready_is_ignored() {
        let mut ex = DisplacementExtremes::default();
        ex.observe(Phase::NotReady, 0.5);
        assert_eq!(ex, DisplacementExtremes::default());
    }

    #[test]
    fn test_depth_check() {
        let v = DepthValidator::new(0.2);
        assert_eq!(v.check(0.25), Ok(()));
        assert_eq!(v.check(0.2), Ok(()));
        assert_eq!(v.check(0.1), Err(Feedback::BadRepDepth));
    }

    #[test]
    fn test_return_to_up_starts_a_new_excursion() {
        let mut v = DepthValidator::new(0.2);
        v.observe(&PhaseEvent::EnteredUp, Phase::Up, Some(0.40));
        v.observe(&PhaseEvent::EnteredDown, Phase::Down, Some(0.65));
        assert!((v.pending_drop().unwrap() - 0.25).abs() < 1e-6);

        v.observe(&PhaseEvent::RepRejected, Phase::Up, Some(0.45));
        assert_eq!(v.extremes().reference_high, Some(0.45));
        assert_eq!(v.extremes().reference_low, None);
    }

    #[test]
    fn test_missing_displacement_is_skipped() {
        let mut v = DepthValidator::new(0.2);
        v.observe(&PhaseEvent::EnteredUp, Phase::Up, None);
        v.observe(&PhaseEvent::AwaitingDepth, Phase::Up, Some(f32::NAN));
        assert_eq!(v.extremes().reference_high, None);
    }

    #[test]
    fn test_torso_check_is_strict() {
        let v = TorsoValidator::new(150.0);
        assert_eq!(v.check(Some(170.0)), Ok(()));
        assert_eq!(v.check(Some(150.0)), Err(Feedback::BadRepLeaning));
        assert_eq!(v.check(None), Err(Feedback::BadRepLeaning));
    }
}
