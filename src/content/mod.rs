//! Bilingual educational content
//!
//! Static guide and FAQ tables plus the validated catalog built from them.

pub mod catalog;
pub mod faq;
pub mod guides;
pub mod model;

pub use catalog::{Catalog, Guide};
pub use model::{GuideId, ResolvedStep, StepDefinition, ALL_GUIDES};
