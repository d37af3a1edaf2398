//! CLI entry point.
//!
//! # Responsibility
//! - Parse run flags and hand an explicit root to `storyshelf_core`.
//! - Print a human confirmation, the planned moves, or a JSON report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use storyshelf_core::{default_log_level, init_logging, IndexOptions, MonthOrder, Organizer};

#[derive(Parser)]
#[command(name = "storyshelf")]
#[command(version)]
#[command(about = "Sort dated Markdown notes into month folders and regenerate README.md")]
struct Cli {
    /// Notes root containing year folders
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Order of month sections within a year
    #[arg(long, value_enum, default_value_t = MonthOrderArg::Chronological)]
    month_order: MonthOrderArg,

    /// Index heading line
    #[arg(long)]
    heading: Option<String>,

    /// Line printed under the heading
    #[arg(long)]
    tagline: Option<String>,

    /// Print planned moves only; change nothing
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum MonthOrderArg {
    Chronological,
    Lexical,
}

impl From<MonthOrderArg> for MonthOrder {
    fn from(value: MonthOrderArg) -> Self {
        match value {
            MonthOrderArg::Chronological => MonthOrder::Chronological,
            MonthOrderArg::Lexical => MonthOrder::Lexical,
        }
    }
}

impl Cli {
    fn index_options(&self) -> IndexOptions {
        let defaults = IndexOptions::default();
        IndexOptions {
            heading: self.heading.clone().unwrap_or(defaults.heading),
            tagline: self.tagline.clone().unwrap_or(defaults.tagline),
            month_order: self.month_order.into(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;

    let organizer = Organizer::new(&cli.root, cli.index_options());

    if cli.dry_run {
        let plan = organizer
            .plan()
            .with_context(|| format!("failed to plan moves under {}", cli.root.display()))?;
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else if plan.is_empty() {
            println!("No loose documents to move.");
        } else {
            for relocation in &plan {
                println!(
                    "would move {} -> {}",
                    relocation.from.display(),
                    relocation.to.display()
                );
            }
        }
        return Ok(());
    }

    let report = organizer
        .run()
        .with_context(|| format!("failed to organize {}", cli.root.display()))?;
    log::debug!(
        "event=cli_done module=cli status=ok relocated={}",
        report.relocations.len()
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "README.md generated successfully at {}",
            report.index_path.display()
        );
    }
    Ok(())
}
