use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use photo_date_renamer_core::{
    app_paths, apply_plan, generate_plan, load_config, ApplyResult, OutputFormat, PlannedAction,
    RenamePlan, RenameStatus,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "photo-date-renamer")]
#[command(about = "Renames JPEG files to \"NN - DDMMMYYYY.jpg\" in capture-time order")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    rename: RenameArgs,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Debug, Subcommand)]
enum ConfigAction {
    Show,
    Path,
}

#[derive(Debug, Args)]
struct RenameArgs {
    /// Directory to process (defaults to the current directory)
    dir: Option<PathBuf>,
    /// Print what would be renamed without touching any file
    #[arg(long, conflicts_with = "apply")]
    dry_run: bool,
    /// Rename even if the config file enables dry_run
    #[arg(long)]
    apply: bool,
    #[arg(long, value_enum)]
    output: Option<OutputArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputArg {
    Text,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Serialize)]
struct ApplyReport<'a> {
    plan: &'a RenamePlan,
    result: &'a ApplyResult,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config(config)) => match config.action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Path => cmd_config_path(),
        },
        None => cmd_rename(cli.rename),
    }
}

fn cmd_rename(args: RenameArgs) -> Result<()> {
    let config = load_config()?;
    let dry_run = if args.apply {
        false
    } else {
        args.dry_run || config.dry_run
    };
    let output = args.output.map(OutputFormat::from).unwrap_or(config.output);

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine the current directory")?,
    };

    let plan = generate_plan(&dir)?;

    if dry_run {
        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            OutputFormat::Text => {
                print_unresolved(&plan);
                print_preview(&plan);
            }
        }
        return Ok(());
    }

    let result = apply_plan(&plan);
    match output {
        OutputFormat::Json => {
            let report = ApplyReport {
                plan: &plan,
                result: &result,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            print_unresolved(&plan);
            print_result(&result);
        }
    }

    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = load_config()?;
    let paths = app_paths()?;
    println!("# {}", paths.config_path.display());
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn cmd_config_path() -> Result<()> {
    let paths = app_paths()?;
    println!("{}", paths.config_path.display());
    Ok(())
}

fn print_unresolved(plan: &RenamePlan) {
    for entry in &plan.unresolved {
        if let Some(message) = entry.read_error() {
            println!(
                "Error reading EXIF data from {}: {}",
                entry.source_path.display(),
                message
            );
        }
        println!("Date taken not found for: {}", entry.original_name);
    }
}

fn print_preview(plan: &RenamePlan) {
    for candidate in &plan.candidates {
        match candidate.action {
            PlannedAction::Rename => println!(
                "Would rename: {} -> {}",
                candidate.original_name, candidate.target_name
            ),
            PlannedAction::SkipExisting => println!(
                "Would skip rename, {} already exists",
                candidate.target_name
            ),
        }
    }
    println!(
        "dry run: {} to rename, {} to skip, {} without date; nothing was changed",
        plan.stats.planned_renames, plan.stats.planned_skips, plan.stats.unresolved
    );
}

fn print_result(result: &ApplyResult) {
    for outcome in &result.outcomes {
        match &outcome.status {
            RenameStatus::Renamed => println!(
                "Renamed: {} -> {}",
                outcome.original_name, outcome.target_name
            ),
            RenameStatus::SkippedExisting => {
                println!("Skipping rename, {} already exists", outcome.target_name)
            }
            RenameStatus::Failed { message } => println!(
                "Failed to rename {} -> {}: {}",
                outcome.original_name, outcome.target_name, message
            ),
        }
    }
}
