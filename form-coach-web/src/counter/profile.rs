//! Exercise profiles - squat and push-up counters
//!
//! A profile composes the phase machine with an optional posture entry
//! gate and the secondary validators for its exercise. Adding an exercise
//! means choosing thresholds, a displacement signal and a gate; the phase
//! logic stays untouched.

use crate::geometry::PoseSignals;

use super::machine::{PhaseEvent, RepPhaseStateMachine};
use super::posture::pushup_torso_check;
use super::state::CounterState;
use super::thresholds::{Thresholds, MIN_HIP_DROP, MIN_SHOULDER_DROP, MIN_SQUAT_TORSO_ANGLE};
use super::validator::{DepthValidator, TorsoValidator};

/// Supported exercises
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExerciseKind {
    #[default]
    Squat,
    Pushup,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 2] = [ExerciseKind::Squat, ExerciseKind::Pushup];

    /// Accepts the HUD labels, their singulars, and the mode hotkeys
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "squats" | "squat" | "1" => Some(ExerciseKind::Squat),
            "push-ups" | "pushups" | "push-up" | "pushup" | "2" => Some(ExerciseKind::Pushup),
            _ => None,
        }
    }

    /// HUD label
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseKind::Squat => "Squats",
            ExerciseKind::Pushup => "Push-ups",
        }
    }

    pub fn default_thresholds(&self) -> Thresholds {
        match self {
            ExerciseKind::Squat => Thresholds::for_squat(),
            ExerciseKind::Pushup => Thresholds::for_pushup(),
        }
    }
}

/// Inputs one profile consumes for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSignals {
    /// Knee angle for squats, elbow angle for push-ups
    pub primary_angle: Option<f32>,
    /// Torso angle
    pub posture_angle: Option<f32>,
    /// Hip y for squats, shoulder y for push-ups
    pub displacement: Option<f32>,
}

impl FrameSignals {
    pub fn new(primary_angle: Option<f32>, posture_angle: Option<f32>, displacement: Option<f32>) -> Self {
        Self {
            primary_angle,
            posture_angle,
            displacement,
        }
    }

    /// Pick the signals `kind` is driven by
    pub fn from_pose(kind: ExerciseKind, pose: &PoseSignals) -> Self {
        match kind {
            ExerciseKind::Squat => Self::new(pose.knee_angle, pose.squat_torso_angle, pose.hip_y),
            ExerciseKind::Pushup => {
                Self::new(pose.elbow_angle, pose.pushup_torso_angle, pose.shoulder_y)
            }
        }
    }
}

/// Rep counter for one exercise
#[derive(Clone, Debug)]
pub struct ExerciseProfile {
    kind: ExerciseKind,
    machine: RepPhaseStateMachine,
    /// Checked first when a rep completes
    torso: Option<TorsoValidator>,
    depth: DepthValidator,
}

impl ExerciseProfile {
    /// Squat: no entry gate, torso then hip-drop checks on completion
    pub fn squat() -> Self {
        Self::with_thresholds(ExerciseKind::Squat, Thresholds::for_squat())
    }

    /// Push-up: plank entry gate, shoulder-drop check on completion
    pub fn pushup() -> Self {
        Self::with_thresholds(ExerciseKind::Pushup, Thresholds::for_pushup())
    }

    pub fn with_thresholds(kind: ExerciseKind, thresholds: Thresholds) -> Self {
        let machine = RepPhaseStateMachine::new(thresholds);
        match kind {
            ExerciseKind::Squat => Self {
                kind,
                machine,
                torso: Some(TorsoValidator::new(MIN_SQUAT_TORSO_ANGLE)),
                depth: DepthValidator::new(MIN_HIP_DROP),
            },
            ExerciseKind::Pushup => Self {
                kind,
                machine: machine.with_posture_gate(pushup_torso_check),
                torso: None,
                depth: DepthValidator::new(MIN_SHOULDER_DROP),
            },
        }
    }

    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn state(&self) -> &CounterState {
        self.machine.state()
    }

    pub fn thresholds(&self) -> &Thresholds {
        self.machine.thresholds()
    }

    /// Advance one frame and return the resulting snapshot
    pub fn update(&mut self, signals: &FrameSignals) -> &CounterState {
        let event = self
            .machine
            .update(signals.primary_angle, signals.posture_angle);

        if let PhaseEvent::RepCounted(rep) = event {
            // Only validated when the finished excursion was tracked end to end
            if let Some(drop) = self.depth.pending_drop() {
                let verdict = match &self.torso {
                    Some(torso) => torso.check(signals.posture_angle),
                    None => Ok(()),
                }
                .and_then(|_| self.depth.check(drop));

                if let Err(reason) = verdict {
                    self.machine.revoke(rep, reason);
                }
            }
        }

        self.depth
            .observe(&event, self.machine.phase(), signals.displacement);
        self.machine.state()
    }

    /// Start over with the same configuration
    pub fn reset(&mut self) {
        *self = Self::with_thresholds(self.kind, *self.machine.thresholds());
    }
}
