//! Catalog loading and lookup
//!
//! The catalog assembles the static guide tables and checks them once, at
//! load time. Every locale of a guide must carry the same step count, the
//! same content-key sequence, and a body for every key. A violation is a
//! content-authoring defect and fails the load; lookups afterwards only
//! fail on a bad index or locale.

use std::collections::HashMap;

use crate::error::{AgriError, AgriResult};
use crate::locale::{Locale, SUPPORTED_LOCALES};

use super::guides;
use super::model::{GuideId, LocalizedGuide, RawGuide, ResolvedStep, StepDefinition};

/// One validated guide, resolvable in every supported locale
#[derive(Debug)]
pub struct Guide {
    id: GuideId,
    step_count: usize,
    locales: HashMap<Locale, LocalizedGuide>,
}

impl Guide {
    /// The guide's identifier
    pub fn id(&self) -> GuideId {
        self.id
    }

    /// Number of steps (identical across locales)
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Localized guide title
    pub fn title(&self, locale: Locale) -> &'static str {
        self.view(locale).title
    }

    /// Ordered step definitions for a locale
    pub fn steps(&self, locale: Locale) -> &[StepDefinition] {
        &self.view(locale).steps
    }

    /// Pure lookup: the step definition and its body for `(locale, index)`
    pub fn resolve(&self, locale: Locale, index: usize) -> AgriResult<ResolvedStep> {
        let view = self.view(locale);
        let definition = *view.steps.get(index).ok_or_else(|| {
            AgriError::invalid_step(self.id.slug(), index, self.step_count)
        })?;
        let body = view.content.get(definition.content_key).copied().ok_or_else(|| {
            AgriError::content_not_found(self.id.slug(), locale.code(), definition.content_key)
        })?;
        Ok(ResolvedStep { definition, body })
    }

    fn view(&self, locale: Locale) -> &LocalizedGuide {
        // Every supported locale is present by construction (load-time check).
        &self.locales[&locale]
    }
}

/// The full validated content catalog
pub struct Catalog {
    guides: Vec<Guide>,
}

impl Catalog {
    /// Build and validate the catalog from the static tables
    pub fn load() -> AgriResult<Self> {
        let mut validated = Vec::new();
        for raw in guides::all() {
            validated.push(validate_guide(raw)?);
        }
        Ok(Self { guides: validated })
    }

    /// All guides in presentation order
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Look up a guide by id
    pub fn guide(&self, id: GuideId) -> &Guide {
        self.guides
            .iter()
            .find(|g| g.id == id)
            .expect("all GuideId variants are loaded")
    }

    /// Look up a guide by CLI slug
    pub fn find(&self, slug: &str) -> AgriResult<&Guide> {
        let id = GuideId::parse(slug).ok_or_else(|| AgriError::GuideNotFound(slug.to_string()))?;
        Ok(self.guide(id))
    }
}

/// Validate one raw guide into its per-locale views
fn validate_guide(raw: &RawGuide) -> AgriResult<Guide> {
    let slug = raw.id.slug();
    let step_count = raw.en.steps.len();
    if step_count == 0 {
        return Err(AgriError::Catalog(format!("guide '{slug}' has no steps")));
    }

    let mut locales = HashMap::new();
    for &locale in SUPPORTED_LOCALES {
        let table = raw.table(locale);
        let code = locale.code();

        if table.steps.len() != step_count {
            return Err(AgriError::Catalog(format!(
                "guide '{slug}': locale '{code}' has {} steps, expected {step_count}",
                table.steps.len()
            )));
        }

        let mut content: HashMap<&'static str, &'static str> = HashMap::new();
        for &(key, body) in table.content {
            if content.insert(key, body).is_some() {
                return Err(AgriError::Catalog(format!(
                    "guide '{slug}': locale '{code}' duplicates content key '{key}'"
                )));
            }
        }

        let mut steps = Vec::with_capacity(step_count);
        for (index, &(title, content_key)) in table.steps.iter().enumerate() {
            // Content keys must line up index-for-index across locales, since
            // wizard progress follows indices, not content identity.
            let reference_key = raw.en.steps[index].1;
            if content_key != reference_key {
                return Err(AgriError::Catalog(format!(
                    "guide '{slug}': step {index} key '{content_key}' in locale '{code}' \
                     does not match '{reference_key}'"
                )));
            }
            if !content.contains_key(content_key) {
                return Err(AgriError::Catalog(format!(
                    "guide '{slug}': locale '{code}' is missing body for key '{content_key}'"
                )));
            }
            steps.push(StepDefinition {
                index,
                title,
                content_key,
            });
        }

        if content.len() != step_count {
            return Err(AgriError::Catalog(format!(
                "guide '{slug}': locale '{code}' has {} content entries for {step_count} steps",
                content.len()
            )));
        }

        locales.insert(
            locale,
            LocalizedGuide {
                title: table.title,
                steps,
                content,
            },
        );
    }

    Ok(Guide {
        id: raw.id,
        step_count,
        locales,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{RawLocaleTable, ALL_GUIDES};

    #[test]
    fn test_shipped_catalog_is_valid() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.guides().len(), ALL_GUIDES.len());
        for guide in catalog.guides() {
            assert!(guide.step_count() > 0);
            for &locale in SUPPORTED_LOCALES {
                assert_eq!(guide.steps(locale).len(), guide.step_count());
                assert!(!guide.title(locale).is_empty());
            }
        }
    }

    #[test]
    fn test_resolve_every_step_in_every_locale() {
        let catalog = Catalog::load().unwrap();
        for guide in catalog.guides() {
            for &locale in SUPPORTED_LOCALES {
                for index in 0..guide.step_count() {
                    let step = guide.resolve(locale, index).unwrap();
                    assert_eq!(step.definition.index, index);
                    assert!(!step.body.is_empty());
                    assert!(!step.definition.title.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_resolve_out_of_bounds() {
        let catalog = Catalog::load().unwrap();
        let guide = catalog.guide(GuideId::HarvestTiming);
        let err = guide.resolve(Locale::En, guide.step_count()).unwrap_err();
        assert!(err.is_invalid_step());
    }

    #[test]
    fn test_find_by_slug() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(
            catalog.find("pest-management").unwrap().id(),
            GuideId::PestManagement
        );
        let err = catalog.find("irrigation").unwrap_err();
        assert!(matches!(err, AgriError::GuideNotFound(_)));
    }

    #[test]
    fn test_step_count_mismatch_rejected() {
        let raw = RawGuide {
            id: GuideId::HarvestTiming,
            en: RawLocaleTable {
                title: "Harvest",
                steps: &[("One", "k.one"), ("Two", "k.two")],
                content: &[("k.one", "a"), ("k.two", "b")],
            },
            tl: RawLocaleTable {
                title: "Pag-ani",
                steps: &[("Isa", "k.one")],
                content: &[("k.one", "a")],
            },
        };
        let err = validate_guide(&raw).unwrap_err();
        assert!(matches!(err, AgriError::Catalog(_)));
    }

    #[test]
    fn test_missing_body_rejected() {
        let raw = RawGuide {
            id: GuideId::HarvestTiming,
            en: RawLocaleTable {
                title: "Harvest",
                steps: &[("One", "k.one")],
                content: &[("k.one", "a")],
            },
            tl: RawLocaleTable {
                title: "Pag-ani",
                steps: &[("Isa", "k.one")],
                content: &[("k.wrong", "a")],
            },
        };
        let err = validate_guide(&raw).unwrap_err();
        assert!(matches!(err, AgriError::Catalog(_)));
    }

    #[test]
    fn test_misaligned_keys_rejected() {
        let raw = RawGuide {
            id: GuideId::HarvestTiming,
            en: RawLocaleTable {
                title: "Harvest",
                steps: &[("One", "k.one"), ("Two", "k.two")],
                content: &[("k.one", "a"), ("k.two", "b")],
            },
            tl: RawLocaleTable {
                title: "Pag-ani",
                steps: &[("Isa", "k.two"), ("Dalawa", "k.one")],
                content: &[("k.one", "a"), ("k.two", "b")],
            },
        };
        let err = validate_guide(&raw).unwrap_err();
        assert!(matches!(err, AgriError::Catalog(_)));
    }
}
