//! End-of-session workout summary

use std::fmt;

use super::profile::ExerciseKind;

/// Final counts for one exercise
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExerciseTally {
    pub kind: ExerciseKind,
    pub reps: u32,
    pub good_reps: u32,
}

/// Per-exercise tallies plus overall form quality
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub tallies: Vec<ExerciseTally>,
}

impl WorkoutSummary {
    pub fn new(tallies: Vec<ExerciseTally>) -> Self {
        Self { tallies }
    }

    pub fn total_reps(&self) -> u32 {
        self.tallies.iter().map(|t| t.reps).sum()
    }

    pub fn total_good_reps(&self) -> u32 {
        self.tallies.iter().map(|t| t.good_reps).sum()
    }

    /// `round(100 * good / max(1, reps))`, only once at least one rep happened
    pub fn form_quality_percent(&self) -> Option<u32> {
        form_quality_percent(self.total_good_reps(), self.total_reps())
    }
}

pub fn form_quality_percent(good_reps: u32, reps: u32) -> Option<u32> {
    if reps == 0 {
        return None;
    }
    let ratio = good_reps as f64 / reps.max(1) as f64;
    Some((100.0 * ratio).round() as u32)
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== Workout Summary =====")?;
        for tally in &self.tallies {
            writeln!(
                f,
                "{}: {}  (Good: {})",
                tally.kind.label(),
                tally.reps,
                tally.good_reps
            )?;
        }
        if let Some(pct) = self.form_quality_percent() {
            writeln!(f, "Overall form quality: {}%", pct)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(squat: (u32, u32), pushup: (u32, u32)) -> WorkoutSummary {
        WorkoutSummary::new(vec![
            ExerciseTally { kind: ExerciseKind::Squat, reps: squat.0, good_reps: squat.1 },
            ExerciseTally { kind: ExerciseKind::Pushup, reps: pushup.0, good_reps: pushup.1 },
        ])
    }

    #[test]
    fn test_totals_and_quality() {
        let s = summary((5, 4), (3, 1));
        assert_eq!(s.total_reps(), 8);
        assert_eq!(s.total_good_reps(), 5);
        // 62.5 rounds up
        assert_eq!(s.form_quality_percent(), Some(63));
    }

    #[test]
    fn test_no_reps_has_no_quality() {
        let s = summary((0, 0), (0, 0));
        assert_eq!(s.form_quality_percent(), None);
        assert!(!s.to_string().contains("form quality"));
    }

    #[test]
    fn test_display() {
        let text = summary((2, 2), (1, 0)).to_string();
        assert!(text.starts_with("===== Workout Summary ====="));
        assert!(text.contains("Squats: 2  (Good: 2)"));
        assert!(text.contains("Push-ups: 1  (Good: 0)"));
        assert!(text.contains("Overall form quality: 67%"));
    }
}
