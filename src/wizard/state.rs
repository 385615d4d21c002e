//! Wizard state owned by a guide screen
//!
//! Created fresh when a guide screen mounts, discarded on unmount. Nothing
//! here is ever persisted.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

/// Duration of the progress-fill animation
pub const PROGRESS_ANIMATION: Duration = Duration::from_millis(600);

/// Pause after marking a step complete, before advancing or opening the
/// completion gate. Decoupled from the animation duration.
pub const SETTLE_DELAY: Duration = Duration::from_millis(800);

/// A pending step transition: the settle delay plus the animation window
///
/// Held inside [`WizardState`] and resolved only by an explicit tick, so a
/// dropped screen can never be advanced by a stray timer.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    /// The step whose completion started this transition
    pub step: usize,
    /// When the completion was recorded
    pub started_at: Instant,
    /// Progress percentage the animation eases from
    pub percent_from: f64,
    /// Progress percentage the animation eases to
    pub percent_to: f64,
}

impl Transition {
    /// When the settle delay elapses and the transition resolves
    pub fn resolve_at(&self) -> Instant {
        self.started_at + SETTLE_DELAY
    }

    /// The animated percentage at `now`, eased linearly over the
    /// animation window
    pub fn percent_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let fraction =
            (elapsed.as_secs_f64() / PROGRESS_ANIMATION.as_secs_f64()).clamp(0.0, 1.0);
        self.percent_from + (self.percent_to - self.percent_from) * fraction
    }
}

/// Mutable per-screen wizard state
#[derive(Debug, Default)]
pub struct WizardState {
    /// The step currently shown, `0..step_count`
    pub current_step: usize,
    /// Indices completed this session; entries are never removed
    pub completed: BTreeSet<usize>,
    /// The pending transition, if a completion is settling
    pub transition: Option<Transition>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_easing() {
        let start = Instant::now();
        let transition = Transition {
            step: 0,
            started_at: start,
            percent_from: 20.0,
            percent_to: 40.0,
        };

        assert_eq!(transition.percent_at(start), 20.0);
        let halfway = transition.percent_at(start + PROGRESS_ANIMATION / 2);
        assert!((halfway - 30.0).abs() < 1e-9);
        assert_eq!(transition.percent_at(start + PROGRESS_ANIMATION), 40.0);
        // Holds at the target once the animation window has passed.
        assert_eq!(transition.percent_at(start + SETTLE_DELAY), 40.0);
    }

    #[test]
    fn test_settle_delay_outlasts_animation() {
        assert!(SETTLE_DELAY > PROGRESS_ANIMATION);
    }
}
