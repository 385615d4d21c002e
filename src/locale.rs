//! Supported display locales
//!
//! AgriSense content ships in English and Tagalog. The locale set is a closed
//! enum so every catalog table is checked against it at load time.

use serde::{Deserialize, Serialize};

use crate::error::{AgriError, AgriResult};

/// A supported display language for catalog content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (default)
    #[default]
    En,
    /// Tagalog
    Tl,
}

/// Ordered list of supported locales
pub const SUPPORTED_LOCALES: &[Locale] = &[Locale::En, Locale::Tl];

impl Locale {
    /// The canonical locale code
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tl => "tl",
        }
    }

    /// The language name as shown to the user, in that language
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Tl => "Tagalog",
        }
    }

    /// Parse a locale code (case-insensitive, tolerant of region tags
    /// like `tl-PH` or `en_US`)
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Self::En),
            "tl" | "fil" => Some(Self::Tl),
            _ => None,
        }
    }

    /// The other supported locale
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Tl,
            Self::Tl => Self::En,
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = AgriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AgriError::locale_not_found(s))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Holds the active locale for a screen or CLI invocation
///
/// Switching locale never touches wizard progress: steps are tracked by
/// index, and catalogs are index-aligned across locales.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleSelector {
    active: Locale,
}

impl LocaleSelector {
    /// Create a selector with the given starting locale
    pub fn new(locale: Locale) -> Self {
        Self { active: locale }
    }

    /// The currently active locale
    pub fn active(&self) -> Locale {
        self.active
    }

    /// Switch to a locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.active = locale;
    }

    /// Switch using a raw code; an unknown code is rejected and the
    /// previous locale is retained
    pub fn set_from_code(&mut self, code: &str) -> AgriResult<Locale> {
        match Locale::parse(code) {
            Some(locale) => {
                self.active = locale;
                Ok(locale)
            }
            None => Err(AgriError::locale_not_found(code)),
        }
    }

    /// Flip between English and Tagalog
    pub fn toggle(&mut self) -> Locale {
        self.active = self.active.toggled();
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("TL"), Some(Locale::Tl));
        assert_eq!(Locale::parse("tl-PH"), Some(Locale::Tl));
        assert_eq!(Locale::parse("en_US"), Some(Locale::En));
        assert_eq!(Locale::parse("fil"), Some(Locale::Tl));
        assert_eq!(Locale::parse("es"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_unknown_code_retains_previous() {
        let mut selector = LocaleSelector::new(Locale::Tl);
        let err = selector.set_from_code("de").unwrap_err();
        assert!(matches!(err, AgriError::LocaleNotFound { .. }));
        assert_eq!(selector.active(), Locale::Tl);
    }

    #[test]
    fn test_toggle() {
        let mut selector = LocaleSelector::default();
        assert_eq!(selector.active(), Locale::En);
        assert_eq!(selector.toggle(), Locale::Tl);
        assert_eq!(selector.toggle(), Locale::En);
    }

    #[test]
    fn test_serde_codes() {
        let json = serde_json::to_string(&Locale::Tl).unwrap();
        assert_eq!(json, "\"tl\"");
        let back: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(back, Locale::En);
    }
}
