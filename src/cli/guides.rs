//! Guide listing and display commands

use crate::content::Catalog;
use crate::error::{AgriError, AgriResult};
use crate::locale::Locale;

/// Handle `agrisense guides`: list every guide with its slug and step count
pub fn handle_guides_command(catalog: &Catalog, locale: Locale) {
    let heading = match locale {
        Locale::En => "Available guides:",
        Locale::Tl => "Mga gabay na makukuha:",
    };
    println!("{heading}");
    println!();
    for guide in catalog.guides() {
        let steps_word = match locale {
            Locale::En => "steps",
            Locale::Tl => "hakbang",
        };
        println!(
            "  {:<18} {} ({} {})",
            guide.id().slug(),
            guide.title(locale),
            guide.step_count(),
            steps_word
        );
    }
    println!();
    let hint = match locale {
        Locale::En => "Run 'agrisense show <guide>' to read a guide.",
        Locale::Tl => "Patakbuhin ang 'agrisense show <guide>' para basahin ang gabay.",
    };
    println!("{hint}");
}

/// Handle `agrisense show`: print a whole guide, or one step of it
///
/// `step` is the 1-based step number from the command line.
pub fn handle_show_command(
    catalog: &Catalog,
    slug: &str,
    locale: Locale,
    step: Option<usize>,
) -> AgriResult<()> {
    let guide = catalog.find(slug)?;

    println!("{}", guide.title(locale));
    println!("{}", "=".repeat(guide.title(locale).chars().count()));
    println!();

    match step {
        Some(number) => {
            // Step numbers are 1-based on the command line.
            let index = number
                .checked_sub(1)
                .ok_or_else(|| AgriError::invalid_step(guide.id().slug(), number, guide.step_count()))?;
            let resolved = guide.resolve(locale, index)?;
            print_step(locale, index, guide.step_count(), resolved.definition.title, resolved.body);
        }
        None => {
            for index in 0..guide.step_count() {
                let resolved = guide.resolve(locale, index)?;
                print_step(locale, index, guide.step_count(), resolved.definition.title, resolved.body);
            }
        }
    }

    Ok(())
}

fn print_step(locale: Locale, index: usize, step_count: usize, title: &str, body: &str) {
    let step_word = match locale {
        Locale::En => "Step",
        Locale::Tl => "Hakbang",
    };
    println!("{step_word} {} / {step_count}: {title}", index + 1);
    println!("{body}");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rejects_unknown_guide() {
        let catalog = Catalog::load().unwrap();
        let err = handle_show_command(&catalog, "irrigation", Locale::En, None).unwrap_err();
        assert!(err.to_string().contains("irrigation"));
    }

    #[test]
    fn test_show_rejects_out_of_range_step() {
        let catalog = Catalog::load().unwrap();
        let err = handle_show_command(&catalog, "harvest-timing", Locale::En, Some(99)).unwrap_err();
        assert!(err.is_invalid_step());
    }

    #[test]
    fn test_show_step_zero_is_invalid() {
        let catalog = Catalog::load().unwrap();
        let err = handle_show_command(&catalog, "harvest-timing", Locale::En, Some(0)).unwrap_err();
        assert!(err.is_invalid_step());
    }

    #[test]
    fn test_show_whole_guide_in_tagalog() {
        let catalog = Catalog::load().unwrap();
        handle_show_command(&catalog, "soil-moisture", Locale::Tl, None).unwrap();
    }
}
