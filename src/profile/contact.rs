//! Contact-support deep links
//!
//! Opaque side-effecting openers: the app hands the URI to the platform
//! and consumes no result beyond success or failure.

use tracing::warn;

use crate::error::{AgriError, AgriResult};
use crate::locale::Locale;

/// A way to reach support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    Phone,
    Facebook,
}

impl ContactKind {
    /// Localized label shown in the profile view
    pub const fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Email, Locale::En) => "Email support",
            (Self::Email, Locale::Tl) => "Mag-email sa suporta",
            (Self::Phone, Locale::En) => "Call the helpline",
            (Self::Phone, Locale::Tl) => "Tumawag sa helpline",
            (Self::Facebook, Locale::En) => "Visit our Facebook page",
            (Self::Facebook, Locale::Tl) => "Bisitahin ang aming Facebook page",
        }
    }
}

/// One contact entry in the profile section
#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub uri: &'static str,
}

/// Contact entries in presentation order
pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        uri: "mailto:support@agrisense.ph",
    },
    ContactLink {
        kind: ContactKind::Phone,
        uri: "tel:+6328123456",
    },
    ContactLink {
        kind: ContactKind::Facebook,
        uri: "https://facebook.com/agrisenseph",
    },
];

/// Hand a contact URI to the platform opener
pub fn open_link(link: &ContactLink) -> AgriResult<()> {
    open::that(link.uri).map_err(|e| {
        warn!(uri = link.uri, error = %e, "failed to open contact link");
        AgriError::Io(format!("Failed to open {}: {}", link.uri, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::SUPPORTED_LOCALES;

    #[test]
    fn test_links_have_schemes() {
        for link in CONTACT_LINKS {
            assert!(link.uri.contains(':'), "no scheme in {}", link.uri);
        }
    }

    #[test]
    fn test_labels_for_every_locale() {
        for link in CONTACT_LINKS {
            for &locale in SUPPORTED_LOCALES {
                assert!(!link.kind.label(locale).is_empty());
            }
        }
    }
}
