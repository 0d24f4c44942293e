use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_planner::cli::{handle_calc, handle_save, handle_show, RecordArgs};
use budget_planner::config::{PlannerPaths, Settings, ThemeMode};
use budget_planner::logging::{init_logging, LogTarget};

#[derive(Parser)]
#[command(
    name = "budget",
    author = "Kaylee Beyene",
    version,
    about = "Personal budget planner",
    long_about = "Enter your monthly income and expenses to see your total spending, \
                  your surplus or deficit, and tips for keeping rent and food within \
                  rule-of-thumb limits. Run without a command to open the interactive form."
)]
struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive budget form
    #[command(alias = "ui")]
    Tui {
        /// File to save to and load from
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Calculate totals, balance and tips
    Calc {
        #[command(flatten)]
        record: RecordArgs,
        /// Also show each category's share of income
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Save the values to a CSV file
    Save {
        #[command(flatten)]
        record: RecordArgs,
        /// Destination file (defaults to the configured save path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a saved budget and show its summary
    Show {
        /// Saved budget file (defaults to the configured save path)
        file: Option<PathBuf>,
        /// Also show each category's share of income
        #[arg(short, long)]
        breakdown: bool,
    },

    /// Show or set the theme the form starts in
    Theme {
        /// New startup theme
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Tui { file: None });

    let paths = PlannerPaths::new()?;
    let log_file = paths.log_file();
    let log_target = match command {
        // The form owns the terminal
        Commands::Tui { .. } => LogTarget::File(&log_file),
        _ => LogTarget::Stderr,
    };
    init_logging(cli.verbose, log_target)?;

    match command {
        Commands::Tui { file } => {
            let settings = Settings::load_or_default(&paths);
            let save_path = file.unwrap_or_else(|| settings.save_path.clone());
            budget_planner::tui::run_tui(&settings, save_path)?;
        }
        Commands::Calc { record, breakdown } => {
            let settings = Settings::load_or_default(&paths);
            handle_calc(&settings, &record, breakdown)?;
        }
        Commands::Save { record, output } => {
            let settings = Settings::load_or_default(&paths);
            handle_save(&settings, &record, output)?;
        }
        Commands::Show { file, breakdown } => {
            let settings = Settings::load_or_default(&paths);
            handle_show(&settings, file.as_deref(), breakdown)?;
        }
        Commands::Theme { mode: Some(mode) } => {
            // Don't overwrite a settings file we failed to read
            let mut settings = Settings::load_or_create(&paths)?;
            settings.theme = mode;
            settings.save(&paths)?;
            println!("Startup theme set to {}", mode);
        }
        Commands::Theme { mode: None } => {
            let settings = Settings::load_or_default(&paths);
            println!("{}", settings.theme);
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Budget Planner Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Theme:           {}", settings.theme);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Save path:       {}", settings.save_path.display());
            println!(
                "  Rent limit:      {}% of income",
                settings.thresholds.rent_bps as f64 / 100.0
            );
            println!(
                "  Food limit:      {}% of income",
                settings.thresholds.food_bps as f64 / 100.0
            );
        }
    }

    Ok(())
}
