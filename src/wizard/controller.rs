//! The step-progression core
//!
//! One controller per guide screen. It owns the wizard state, mediates all
//! progress changes, and serializes transitions between steps: a completion
//! records immediately, the progress bar animates toward the new percentage,
//! and after the settle delay the wizard either advances or opens the
//! completion gate.
//!
//! Time never comes from inside the controller. Callers pass `Instant`s and
//! drive pending transitions through [`WizardController::tick`], which keeps
//! transitions deterministic under test and cancellable on teardown.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::debug;

use crate::error::{AgriError, AgriResult};

use super::gate::CompletionGate;
use super::state::{Transition, WizardState};

/// What a resolved transition did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardEvent {
    /// A non-final completion settled and the wizard moved to this step
    Advanced { to: usize },
    /// The final completion settled and the completion gate opened
    GuideComplete,
}

/// Owns a [`WizardState`] and mediates all progress changes
#[derive(Debug)]
pub struct WizardController {
    /// Guide slug, for errors and logs
    guide: &'static str,
    step_count: usize,
    state: WizardState,
    gate: CompletionGate,
}

impl WizardController {
    /// Create a fresh controller for a guide with `step_count` steps
    ///
    /// Panics if `step_count` is zero; an empty guide is a catalog defect
    /// that load-time validation already rejects.
    pub fn new(guide: &'static str, step_count: usize) -> Self {
        assert!(step_count > 0, "guide '{guide}' has no steps");
        Self {
            guide,
            step_count,
            state: WizardState::default(),
            gate: CompletionGate::default(),
        }
    }

    /// Number of steps in this guide
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// The step currently shown
    pub fn current_step(&self) -> usize {
        self.state.current_step
    }

    /// Indices completed so far this session
    pub fn completed_steps(&self) -> &BTreeSet<usize> {
        &self.state.completed
    }

    /// Whether a step has been completed
    pub fn is_completed(&self, index: usize) -> bool {
        self.state.completed.contains(&index)
    }

    /// Whether a completion is still settling; the completion control is
    /// inert while this holds
    pub fn is_transitioning(&self) -> bool {
        self.state.transition.is_some()
    }

    /// The completion gate for this wizard
    pub fn gate(&self) -> &CompletionGate {
        &self.gate
    }

    /// Close the completion modal after the user acknowledges it
    pub fn acknowledge_completion(&mut self) {
        self.gate.acknowledge();
    }

    /// Jump directly to a step without marking anything complete
    pub fn select_step(&mut self, index: usize) -> AgriResult<()> {
        if index >= self.step_count {
            return Err(AgriError::invalid_step(self.guide, index, self.step_count));
        }
        self.state.current_step = index;
        Ok(())
    }

    /// Mark a step complete and begin its transition
    ///
    /// Idempotent: an already-completed index is a no-op, as is any call
    /// while a previous completion is still settling. An out-of-range index
    /// is rejected with no state change.
    pub fn complete_step(&mut self, index: usize, now: Instant) -> AgriResult<()> {
        if index >= self.step_count {
            return Err(AgriError::invalid_step(self.guide, index, self.step_count));
        }
        if self.is_transitioning() || self.state.completed.contains(&index) {
            return Ok(());
        }

        let percent_from = self.progress_percent() as f64;
        self.state.completed.insert(index);
        let percent_to = self.progress_percent() as f64;
        self.state.transition = Some(Transition {
            step: index,
            started_at: now,
            percent_from,
            percent_to,
        });
        debug!(
            guide = self.guide,
            step = index,
            percent = percent_to,
            "step completed, transition pending"
        );
        Ok(())
    }

    /// Resolve the pending transition once its settle delay has elapsed
    ///
    /// Call from the host event loop on every tick. Returns what happened,
    /// or `None` while nothing is due.
    pub fn tick(&mut self, now: Instant) -> Option<WizardEvent> {
        let transition = self.state.transition?;
        if now < transition.resolve_at() {
            return None;
        }
        self.state.transition = None;

        if transition.step == self.step_count - 1 {
            self.gate.open();
            debug!(guide = self.guide, "guide complete, gate opened");
            Some(WizardEvent::GuideComplete)
        } else {
            self.state.current_step = transition.step + 1;
            debug!(guide = self.guide, to = self.state.current_step, "advanced");
            Some(WizardEvent::Advanced {
                to: self.state.current_step,
            })
        }
    }

    /// Drop the pending transition, if any
    ///
    /// Invoked when the hosting screen is torn down mid-delay; the recorded
    /// completion stays, but nothing advances or opens afterwards.
    pub fn cancel_transition(&mut self) {
        if self.state.transition.take().is_some() {
            debug!(guide = self.guide, "pending transition cancelled");
        }
    }

    /// Completion percentage, derived on every read
    pub fn progress_percent(&self) -> u8 {
        (self.state.completed.len() * 100 / self.step_count) as u8
    }

    /// The percentage the progress bar should render at `now`
    ///
    /// Eases through the animation window while a transition is pending;
    /// otherwise equals [`Self::progress_percent`].
    pub fn display_percent(&self, now: Instant) -> f64 {
        match self.state.transition {
            Some(transition) => transition.percent_at(now),
            None => self.progress_percent() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::{PROGRESS_ANIMATION, SETTLE_DELAY};
    use std::time::Duration;

    fn controller() -> WizardController {
        WizardController::new("harvest-timing", 5)
    }

    /// Complete a step and resolve its settle delay in one go
    fn complete_and_settle(wizard: &mut WizardController, index: usize, at: Instant) -> WizardEvent {
        wizard.complete_step(index, at).unwrap();
        wizard.tick(at + SETTLE_DELAY).unwrap()
    }

    #[test]
    fn test_fresh_state() {
        let wizard = controller();
        assert_eq!(wizard.current_step(), 0);
        assert!(wizard.completed_steps().is_empty());
        assert_eq!(wizard.progress_percent(), 0);
        assert!(!wizard.is_transitioning());
        assert!(!wizard.gate().is_open());
    }

    #[test]
    fn test_sequential_walkthrough() {
        // Five steps, completed in order: percents 20/40/60/80 then 100
        // with the gate open.
        let mut wizard = controller();
        let mut now = Instant::now();

        for step in 0..4 {
            wizard.complete_step(step, now).unwrap();
            assert_eq!(wizard.progress_percent(), (step as u8 + 1) * 20);
            assert!(wizard.is_transitioning());
            assert!(!wizard.gate().is_open());

            // Not due yet.
            assert_eq!(wizard.tick(now + SETTLE_DELAY - Duration::from_millis(1)), None);
            assert_eq!(
                wizard.tick(now + SETTLE_DELAY),
                Some(WizardEvent::Advanced { to: step + 1 })
            );
            assert_eq!(wizard.current_step(), step + 1);
            now += SETTLE_DELAY;
        }

        assert_eq!(complete_and_settle(&mut wizard, 4, now), WizardEvent::GuideComplete);
        assert_eq!(wizard.progress_percent(), 100);
        assert_eq!(wizard.completed_steps().len(), 5);
        assert!(wizard.gate().is_open());
    }

    #[test]
    fn test_complete_step_is_idempotent() {
        let mut wizard = controller();
        let now = Instant::now();

        assert_eq!(complete_and_settle(&mut wizard, 0, now), WizardEvent::Advanced { to: 1 });
        assert_eq!(wizard.progress_percent(), 20);

        // Second completion of the same index changes nothing and starts
        // no transition.
        wizard.complete_step(0, now + SETTLE_DELAY).unwrap();
        assert!(!wizard.is_transitioning());
        assert_eq!(wizard.completed_steps().len(), 1);
        assert_eq!(wizard.progress_percent(), 20);
    }

    #[test]
    fn test_complete_ignored_while_transitioning() {
        let mut wizard = controller();
        let now = Instant::now();

        wizard.complete_step(0, now).unwrap();
        // Re-entrant completion during the settle delay is swallowed by the
        // transitioning guard.
        wizard.complete_step(1, now + Duration::from_millis(100)).unwrap();
        assert_eq!(wizard.completed_steps().len(), 1);
        assert!(!wizard.is_completed(1));

        assert_eq!(
            wizard.tick(now + SETTLE_DELAY),
            Some(WizardEvent::Advanced { to: 1 })
        );
        // Free to complete step 1 once settled.
        wizard.complete_step(1, now + SETTLE_DELAY).unwrap();
        assert!(wizard.is_completed(1));
    }

    #[test]
    fn test_select_step_never_completes() {
        let mut wizard = controller();
        wizard.select_step(3).unwrap();
        assert_eq!(wizard.current_step(), 3);
        assert!(wizard.completed_steps().is_empty());
        assert_eq!(wizard.progress_percent(), 0);

        // Random access backwards is allowed too.
        wizard.select_step(1).unwrap();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_out_of_range_indices_rejected() {
        let mut wizard = controller();
        let now = Instant::now();

        assert!(wizard.select_step(5).unwrap_err().is_invalid_step());
        assert_eq!(wizard.current_step(), 0);

        assert!(wizard.complete_step(9, now).unwrap_err().is_invalid_step());
        assert!(wizard.completed_steps().is_empty());
        assert!(!wizard.is_transitioning());
    }

    #[test]
    fn test_out_of_order_completion_advances_from_completed_step() {
        let mut wizard = controller();
        let now = Instant::now();

        wizard.select_step(2).unwrap();
        assert_eq!(complete_and_settle(&mut wizard, 2, now), WizardEvent::Advanced { to: 3 });
        assert_eq!(wizard.current_step(), 3);
        assert_eq!(wizard.progress_percent(), 20);
    }

    #[test]
    fn test_final_step_alone_does_not_fill_progress() {
        let mut wizard = controller();
        let now = Instant::now();

        wizard.select_step(4).unwrap();
        assert_eq!(complete_and_settle(&mut wizard, 4, now), WizardEvent::GuideComplete);
        assert!(wizard.gate().is_open());
        assert_eq!(wizard.progress_percent(), 20);
        assert_eq!(wizard.current_step(), 4);
    }

    #[test]
    fn test_cancel_transition_keeps_completion_but_never_advances() {
        let mut wizard = controller();
        let now = Instant::now();

        wizard.complete_step(0, now).unwrap();
        wizard.cancel_transition();
        assert!(!wizard.is_transitioning());

        // A tick long after the would-be deadline does nothing.
        assert_eq!(wizard.tick(now + SETTLE_DELAY * 10), None);
        assert_eq!(wizard.current_step(), 0);
        assert!(wizard.is_completed(0));
        assert!(!wizard.gate().is_open());
    }

    #[test]
    fn test_cancelled_final_transition_leaves_gate_closed() {
        let mut wizard = controller();
        let now = Instant::now();
        for step in 0..4 {
            complete_and_settle(&mut wizard, step, now);
        }

        wizard.complete_step(4, now).unwrap();
        wizard.cancel_transition();
        assert_eq!(wizard.tick(now + SETTLE_DELAY * 2), None);
        assert!(!wizard.gate().is_open());
        assert_eq!(wizard.progress_percent(), 100);
    }

    #[test]
    fn test_display_percent_eases_to_target() {
        let mut wizard = controller();
        let now = Instant::now();

        assert_eq!(wizard.display_percent(now), 0.0);
        wizard.complete_step(0, now).unwrap();

        assert_eq!(wizard.display_percent(now), 0.0);
        let halfway = wizard.display_percent(now + PROGRESS_ANIMATION / 2);
        assert!((halfway - 10.0).abs() < 1e-9);
        assert_eq!(wizard.display_percent(now + PROGRESS_ANIMATION), 20.0);

        // The settled value matches the derived percentage.
        wizard.tick(now + SETTLE_DELAY);
        assert_eq!(wizard.display_percent(now + SETTLE_DELAY), 20.0);
    }

    #[test]
    fn test_gate_acknowledge_closes_once() {
        let mut wizard = controller();
        let now = Instant::now();
        for step in 0..5 {
            complete_and_settle(&mut wizard, step, now);
        }
        assert!(wizard.gate().is_open());

        // No auto-dismiss: further ticks leave it open.
        assert_eq!(wizard.tick(now + SETTLE_DELAY * 4), None);
        assert!(wizard.gate().is_open());

        wizard.acknowledge_completion();
        assert!(!wizard.gate().is_open());
    }

    #[test]
    fn test_progress_percent_bounds() {
        let mut wizard = WizardController::new("weed-control", 3);
        let now = Instant::now();
        assert_eq!(wizard.progress_percent(), 0);
        complete_and_settle(&mut wizard, 0, now);
        assert_eq!(wizard.progress_percent(), 33);
        complete_and_settle(&mut wizard, 1, now);
        assert_eq!(wizard.progress_percent(), 66);
        complete_and_settle(&mut wizard, 2, now);
        assert_eq!(wizard.progress_percent(), 100);
    }
}
