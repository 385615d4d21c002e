//! One guide screen's session
//!
//! Binds a validated guide, the active locale, and a wizard controller.
//! Every guide screen instantiates the same session type; dropping it
//! discards all wizard state, pending transition included.

use std::time::Instant;

use crate::content::{Guide, ResolvedStep, StepDefinition};
use crate::error::AgriResult;
use crate::locale::{Locale, LocaleSelector};

use super::controller::{WizardController, WizardEvent};
use super::gate::CompletionGate;

/// A mounted guide screen: content view plus wizard progress
pub struct GuideSession<'a> {
    guide: &'a Guide,
    locale: LocaleSelector,
    controller: WizardController,
}

impl<'a> GuideSession<'a> {
    /// Mount a guide with fresh wizard state
    pub fn new(guide: &'a Guide, locale: Locale) -> Self {
        Self {
            guide,
            locale: LocaleSelector::new(locale),
            controller: WizardController::new(guide.id().slug(), guide.step_count()),
        }
    }

    /// The guide being presented
    pub fn guide(&self) -> &'a Guide {
        self.guide
    }

    /// The active locale
    pub fn locale(&self) -> Locale {
        self.locale.active()
    }

    /// Switch locale; wizard progress is untouched since steps are
    /// tracked by index and catalogs are index-aligned
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale.set_locale(locale);
    }

    /// Flip between English and Tagalog
    pub fn toggle_locale(&mut self) -> Locale {
        self.locale.toggle()
    }

    /// Localized guide title
    pub fn title(&self) -> &'static str {
        self.guide.title(self.locale())
    }

    /// Ordered step definitions in the active locale
    pub fn steps(&self) -> &[StepDefinition] {
        self.guide.steps(self.locale())
    }

    /// Resolve the current step's content in the active locale
    pub fn current_content(&self) -> AgriResult<ResolvedStep> {
        self.guide
            .resolve(self.locale(), self.controller.current_step())
    }

    /// The wizard controller, read-only
    pub fn wizard(&self) -> &WizardController {
        &self.controller
    }

    /// The completion gate
    pub fn gate(&self) -> &CompletionGate {
        self.controller.gate()
    }

    /// Jump to a step tab
    pub fn select_step(&mut self, index: usize) -> AgriResult<()> {
        self.controller.select_step(index)
    }

    /// Complete the step currently shown
    pub fn complete_current_step(&mut self, now: Instant) -> AgriResult<()> {
        let index = self.controller.current_step();
        self.controller.complete_step(index, now)
    }

    /// Drive the pending transition
    pub fn tick(&mut self, now: Instant) -> Option<WizardEvent> {
        self.controller.tick(now)
    }

    /// Cancel the pending transition on back-out
    pub fn cancel_transition(&mut self) {
        self.controller.cancel_transition();
    }

    /// Close the completion modal
    pub fn acknowledge_completion(&mut self) {
        self.controller.acknowledge_completion();
    }
}
