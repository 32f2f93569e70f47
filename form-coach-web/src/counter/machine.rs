//! Rep phase state machine
//!
//! Exercise-agnostic classifier driven by one primary joint angle:
//!
//! ```text
//! not_ready --(angle >= up, posture ok)--> up
//! up        --(angle <= down)-----------> down
//! down      --(angle >= up)-------------> up   (rep counted or rejected)
//! ```
//!
//! Whether a return to `up` counts is decided by three independent gates:
//! range of motion and timing decide if a rep happened, the hold gate
//! decides if it was good.

use super::posture::PostureGate;
use super::state::{CounterState, Feedback, Phase};
use super::thresholds::Thresholds;

/// Margin below the down threshold that earns "Good depth"
const GOOD_DEPTH_MARGIN: f32 = 5.0;

/// History of the current phase visit, replaced whole at every phase entry
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Excursion {
    /// Angle seen at the most recent at-or-below-down sample
    last_down_angle: Option<f32>,
    /// Updates since the phase was entered
    frames_since_entry: u32,
}

/// A repetition the machine has just counted
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletedRep {
    /// Whether `good_reps` was incremented for it (hold gate passed)
    pub good: bool,
    pub bottom_angle: f32,
    /// Updates between entering down and crossing back up
    pub frames: u32,
    pub down_frames: u32,
}

/// What a single update did
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PhaseEvent {
    /// Primary angle unavailable, nothing changed
    NoSignal,
    /// Still not ready
    Waiting,
    EnteredUp,
    /// Up, but not deep enough yet
    AwaitingDepth,
    EnteredDown,
    /// Down, between thresholds or still deep
    Holding,
    RepCounted(CompletedRep),
    /// Returned up but failed range of motion or timing
    RepRejected,
}

impl PhaseEvent {
    /// True for every update that moved the phase into `up`
    pub fn returned_up(&self) -> bool {
        matches!(
            self,
            PhaseEvent::EnteredUp | PhaseEvent::RepCounted(_) | PhaseEvent::RepRejected
        )
    }
}

/// Finite-state rep classifier
#[derive(Clone, Debug)]
pub struct RepPhaseStateMachine {
    thresholds: Thresholds,
    posture_gate: Option<PostureGate>,
    state: CounterState,
    excursion: Excursion,
}

impl RepPhaseStateMachine {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            posture_gate: None,
            state: CounterState::new(),
            excursion: Excursion::default(),
        }
    }

    /// Require `gate` to accept the posture angle before entering `up`
    pub fn with_posture_gate(mut self, gate: PostureGate) -> Self {
        self.posture_gate = Some(gate);
        self
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Advance one frame
    pub fn update(&mut self, primary_angle: Option<f32>, posture_angle: Option<f32>) -> PhaseEvent {
        self.excursion.frames_since_entry = self.excursion.frames_since_entry.saturating_add(1);

        let Some(angle) = primary_angle.filter(|a| a.is_finite()) else {
            self.state.last_feedback = Feedback::MoveIntoFrame;
            return PhaseEvent::NoSignal;
        };

        let (event, feedback) = match self.state.phase {
            Phase::NotReady => self.step_not_ready(angle, posture_angle),
            Phase::Up => self.step_up(angle),
            Phase::Down => self.step_down(angle),
        };
        self.state.last_feedback = feedback;
        event
    }

    /// Cancel a rep this machine counted, e.g. after a failed depth check
    ///
    /// `good_reps` is only taken back if the rep had added to it.
    pub fn revoke(&mut self, rep: CompletedRep, reason: Feedback) {
        self.state.reps = self.state.reps.saturating_sub(1);
        if rep.good {
            self.state.good_reps = self.state.good_reps.saturating_sub(1);
        }
        self.state.good_reps = self.state.good_reps.min(self.state.reps);
        self.state.last_feedback = reason;
    }

    fn step_not_ready(&mut self, angle: f32, posture_angle: Option<f32>) -> (PhaseEvent, Feedback) {
        if angle < self.thresholds.up_threshold {
            return (PhaseEvent::Waiting, Feedback::GetIntoPosition);
        }
        if let Some(gate) = self.posture_gate {
            if !gate(posture_angle) {
                return (PhaseEvent::Waiting, Feedback::AdjustOrientation);
            }
        }
        self.enter_up();
        (PhaseEvent::EnteredUp, Feedback::Ready)
    }

    fn step_up(&mut self, angle: f32) -> (PhaseEvent, Feedback) {
        let down = self.thresholds.down_threshold;
        if angle > down {
            return (PhaseEvent::AwaitingDepth, Feedback::GoLower);
        }

        self.state.phase = Phase::Down;
        self.state.down_frames = 1;
        self.excursion = Excursion {
            last_down_angle: Some(angle),
            frames_since_entry: 0,
        };

        let feedback = if angle < down - GOOD_DEPTH_MARGIN {
            Feedback::GoodDepth
        } else {
            Feedback::GoABitLower
        };
        (PhaseEvent::EnteredDown, feedback)
    }

    fn step_down(&mut self, angle: f32) -> (PhaseEvent, Feedback) {
        if angle <= self.thresholds.down_threshold {
            self.state.down_frames = self.state.down_frames.saturating_add(1);
            self.excursion.last_down_angle = Some(angle);
        }

        if angle < self.thresholds.up_threshold {
            return (PhaseEvent::Holding, Feedback::HoldThenExtend);
        }

        let outcome = self.close_excursion();
        self.enter_up();
        outcome
    }

    /// Apply the range-of-motion, timing and hold gates
    fn close_excursion(&mut self) -> (PhaseEvent, Feedback) {
        let t = &self.thresholds;
        let frames = self.excursion.frames_since_entry;
        let down_frames = self.state.down_frames;

        let bottom = self.excursion.last_down_angle;
        let rom_ok = bottom.is_some_and(|a| (t.up_threshold - a).abs() >= t.min_range_of_motion);
        let time_ok = frames >= t.min_rep_frames;
        let hold_ok = down_frames >= t.min_down_hold_frames;

        match bottom {
            Some(bottom_angle) if rom_ok && time_ok => {
                self.state.reps += 1;
                if hold_ok {
                    self.state.good_reps += 1;
                }
                let rep = CompletedRep {
                    good: hold_ok,
                    bottom_angle,
                    frames,
                    down_frames,
                };
                (PhaseEvent::RepCounted(rep), Feedback::RepCounted)
            }
            _ => (PhaseEvent::RepRejected, Feedback::BadRepShallowOrFast),
        }
    }

    fn enter_up(&mut self) {
        self.state.phase = Phase::Up;
        self.state.down_frames = 0;
        self.excursion = Excursion::default();
    }
}
