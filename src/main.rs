use anyhow::Result;
use clap::{Parser, Subcommand};

use agrisense::cli::{handle_faq_command, handle_guides_command, handle_show_command};
use agrisense::config::{AgriPaths, Settings};
use agrisense::content::Catalog;
use agrisense::locale::Locale;
use agrisense::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "agrisense",
    version,
    about = "Bilingual step-by-step farming guides for the terminal",
    long_about = "AgriSense brings practical farming guides to the terminal: \
                  harvest timing, pest management, soil moisture, weed control \
                  and more, in English and Tagalog. Each guide is a short \
                  step-by-step wizard you work through at your own pace."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// List the available guides
    Guides {
        /// Display language (en or tl)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Print a guide, or a single step of it
    Show {
        /// Guide slug, e.g. 'harvest-timing' (see 'guides')
        guide: String,

        /// Display language (en or tl)
        #[arg(short, long)]
        lang: Option<Locale>,

        /// Print only this step (1-based)
        #[arg(short, long)]
        step: Option<usize>,
    },

    /// Print the FAQ and support contacts
    Faq {
        /// Display language (en or tl)
        #[arg(short, long)]
        lang: Option<Locale>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AgriPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    let _logging = init_logging(&paths, &settings, is_tui)?;

    // The catalog is static content, validated once here.
    let catalog = Catalog::load()?;

    // CLI language: flag wins, then the saved preference.
    let lang = |flag: Option<Locale>| flag.unwrap_or(settings.locale);

    match cli.command {
        None | Some(Commands::Tui) => {
            agrisense::tui::run_tui(&catalog, &settings)?;
        }
        Some(Commands::Guides { lang: flag }) => {
            handle_guides_command(&catalog, lang(flag));
        }
        Some(Commands::Show { guide, lang: flag, step }) => {
            handle_show_command(&catalog, &guide, lang(flag), step)?;
        }
        Some(Commands::Faq { lang: flag }) => {
            handle_faq_command(lang(flag));
        }
        Some(Commands::Config) => {
            println!("AgriSense Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Logs directory:   {}", paths.logs_dir().display());
            println!();
            println!("Settings:");
            println!("  Language:     {}", settings.locale);
            println!("  Tick rate:    {} ms", settings.tick_rate_ms);
            println!("  File logging: {}", settings.log_to_file);
            println!("  Log level:    {}", settings.log_level);
        }
    }

    Ok(())
}
