//! Counter state - the per-frame snapshot handed back to the caller

/// Classified posture phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotReady,
    Up,
    Down,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::NotReady => "not_ready",
            Phase::Up => "up",
            Phase::Down => "down",
        }
    }
}

/// Fixed set of user-facing status messages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Feedback {
    MoveIntoFrame,
    #[default]
    GetIntoPosition,
    AdjustOrientation,
    Ready,
    GoodDepth,
    GoABitLower,
    GoLower,
    RepCounted,
    BadRepShallowOrFast,
    HoldThenExtend,
    BadRepLeaning,
    BadRepDepth,
}

impl Feedback {
    /// Display text, shown as-is on the HUD
    pub fn text(&self) -> &'static str {
        match self {
            Feedback::MoveIntoFrame => "Move into frame",
            Feedback::GetIntoPosition => "Get into starting position...",
            Feedback::AdjustOrientation => "Adjust body orientation",
            Feedback::Ready => "Ready ✅ Start exercise",
            Feedback::GoodDepth => "Good depth",
            Feedback::GoABitLower => "Go a bit lower",
            Feedback::GoLower => "Go lower",
            Feedback::RepCounted => "Rep counted ✅",
            Feedback::BadRepShallowOrFast => "Bad rep (too shallow/too fast)",
            Feedback::HoldThenExtend => "Hold… then extend",
            Feedback::BadRepLeaning => "Bad rep (leaning forward)",
            Feedback::BadRepDepth => "Bad rep (not enough depth)",
        }
    }
}

/// Counted-and-annotated state of one exercise counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Accepted repetitions
    pub reps: u32,
    /// Accepted repetitions that also passed every quality check (<= reps)
    pub good_reps: u32,
    pub phase: Phase,
    /// Frames spent at or below the down threshold in the current excursion
    pub down_frames: u32,
    pub last_feedback: Feedback,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback_text(&self) -> &'static str {
        self.last_feedback.text()
    }
}
