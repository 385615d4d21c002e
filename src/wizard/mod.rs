//! The guided step-wizard core
//!
//! Progress tracking, step navigation, completion gating, and the settle
//! delay between completing a step and moving on. One controller instance
//! per guide screen; all timing is driven externally through ticks.

pub mod controller;
pub mod gate;
pub mod session;
pub mod state;

pub use controller::{WizardController, WizardEvent};
pub use gate::CompletionGate;
pub use session::GuideSession;
pub use state::{WizardState, PROGRESS_ANIMATION, SETTLE_DELAY};
