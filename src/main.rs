use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use donate_cli::config::{DonatePaths, Settings};
use donate_cli::display::{format_box_list, format_center_list};
use donate_cli::models::catalog::{box_specs, NEARBY_CENTERS};
use donate_cli::services::InMemorySubmitService;

#[derive(Parser)]
#[command(
    name = "donate",
    version,
    about = "Terminal-based used-clothes donation intake",
    long_about = "Donation intake for Akhuwat USA. Walks donors through a \
                  multi-step wizard covering what they are donating, drop-off \
                  or pickup, contact details, and an optional contribution, \
                  then submits the donation for processing."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive donation wizard
    #[command(alias = "wizard")]
    Tui,

    /// List nearby drop-off collection centers
    Centers,

    /// List the shipping box sizes and prices for pickups
    Boxes,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DonatePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            // The submission service is an in-memory mock; there is no
            // backend in this repository
            let submitter = Arc::new(InMemorySubmitService::new());
            donate_cli::tui::run_tui(settings, submitter)?;
        }
        Some(Commands::Centers) => {
            println!("Collection centers near you:");
            println!();
            println!("{}", format_center_list(&NEARBY_CENTERS));
        }
        Some(Commands::Boxes) => {
            println!("Shipping boxes for pickup donations:");
            println!();
            println!("{}", format_box_list(&box_specs()));
        }
        Some(Commands::Config) => {
            println!("donate-cli Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!();
            println!("Settings:");
            println!("  Organization: {}", settings.organization);
            println!("  Tagline:      {}", settings.tagline);
            println!(
                "  Contribution presets: {}",
                settings
                    .contribution_presets
                    .iter()
                    .map(|d| format!("${}", d))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        None => {
            println!("donate-cli - {}", settings.organization);
            println!();
            println!("Run 'donate --help' for usage information.");
            println!("Run 'donate tui' to start a donation.");
        }
    }

    Ok(())
}
