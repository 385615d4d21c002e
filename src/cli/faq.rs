//! FAQ and support contact commands

use crate::content::faq;
use crate::locale::Locale;
use crate::profile::CONTACT_LINKS;

/// Handle `agrisense faq`: print the FAQ followed by support contacts
pub fn handle_faq_command(locale: Locale) {
    let heading = match locale {
        Locale::En => "Frequently asked questions",
        Locale::Tl => "Mga madalas itanong",
    };
    println!("{heading}");
    println!("{}", "=".repeat(heading.chars().count()));
    println!();

    for entry in faq::entries(locale) {
        println!("Q: {}", entry.question);
        println!("A: {}", entry.answer);
        println!();
    }

    let support = match locale {
        Locale::En => "Contact support:",
        Locale::Tl => "Makipag-ugnayan sa suporta:",
    };
    println!("{support}");
    for link in CONTACT_LINKS {
        println!("  {:<10} {}", link.kind.label(locale), link.uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_prints_in_both_locales() {
        handle_faq_command(Locale::En);
        handle_faq_command(Locale::Tl);
    }
}
