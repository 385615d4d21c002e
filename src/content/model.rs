//! Core data model for guide content
//!
//! Raw tables are hand-authored statics, one source file per guide. The
//! catalog turns them into validated structures at load time; nothing here
//! is mutable afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Identifies one educational guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuideId {
    HarvestTiming,
    PestManagement,
    SoilMoisture,
    WeedControl,
    FertilizerUse,
    CropRotation,
}

/// All guides in presentation order
pub const ALL_GUIDES: &[GuideId] = &[
    GuideId::HarvestTiming,
    GuideId::PestManagement,
    GuideId::SoilMoisture,
    GuideId::WeedControl,
    GuideId::FertilizerUse,
    GuideId::CropRotation,
];

impl GuideId {
    /// Stable slug used on the CLI and in logs
    pub const fn slug(self) -> &'static str {
        match self {
            Self::HarvestTiming => "harvest-timing",
            Self::PestManagement => "pest-management",
            Self::SoilMoisture => "soil-moisture",
            Self::WeedControl => "weed-control",
            Self::FertilizerUse => "fertilizer-use",
            Self::CropRotation => "crop-rotation",
        }
    }

    /// Parse a slug back into a guide id
    pub fn parse(slug: &str) -> Option<Self> {
        let normalized = slug.trim().to_ascii_lowercase();
        ALL_GUIDES
            .iter()
            .copied()
            .find(|g| g.slug() == normalized)
    }
}

impl std::fmt::Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// One hand-authored locale table: guide title, ordered steps as
/// `(title, content_key)`, and the `content_key -> body` entries
pub struct RawLocaleTable {
    pub title: &'static str,
    pub steps: &'static [(&'static str, &'static str)],
    pub content: &'static [(&'static str, &'static str)],
}

/// The raw static definition of a guide across all locales
pub struct RawGuide {
    pub id: GuideId,
    pub en: RawLocaleTable,
    pub tl: RawLocaleTable,
}

impl RawGuide {
    /// The table for a locale
    pub fn table(&self, locale: Locale) -> &RawLocaleTable {
        match locale {
            Locale::En => &self.en,
            Locale::Tl => &self.tl,
        }
    }
}

/// One step of a guide, ordered by `index`; immutable after catalog load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDefinition {
    /// Position within the guide, `0..step_count`
    pub index: usize,
    /// Localized step title
    pub title: &'static str,
    /// Key into the step-content table
    pub content_key: &'static str,
}

/// A guide's validated view in a single locale
#[derive(Debug)]
pub struct LocalizedGuide {
    /// Localized guide title
    pub title: &'static str,
    /// Ordered step definitions
    pub steps: Vec<StepDefinition>,
    /// Localized body text per content key
    pub content: HashMap<&'static str, &'static str>,
}

/// A step definition paired with its resolved body text
#[derive(Debug, Clone, Copy)]
pub struct ResolvedStep {
    pub definition: StepDefinition,
    pub body: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for &guide in ALL_GUIDES {
            assert_eq!(GuideId::parse(guide.slug()), Some(guide));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(GuideId::parse("Soil-Moisture"), Some(GuideId::SoilMoisture));
        assert_eq!(GuideId::parse(" weed-control "), Some(GuideId::WeedControl));
        assert_eq!(GuideId::parse("irrigation"), None);
    }
}
