//! oas-delta: normalized distance between two API documents
//!
//! Scores how far a revision of an `OpenAPI` or Swagger document has moved
//! from its base, as a number between 0 and 1.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use oas_delta::{
    cli,
    config::{AppConfig, ConfigOverrides, ConfigPreset, DeltaCommandConfig},
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported Formats:",
        "\n  OpenAPI: 3.0, 3.1 (JSON, YAML)",
        "\n  Swagger: 2.0 (JSON, YAML)",
        "\n\nOutput Formats:",
        "\n  text, json, yaml"
    )
}

#[derive(Parser)]
#[command(name = "oas-delta")]
#[command(version, long_version = build_long_version())]
#[command(about = "Normalized distance between two API documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Delta computed (whatever its value)
    1  Error occurred

EXAMPLES:
    # Symmetric distance
    oas-delta delta base.yaml revision.yaml

    # Ignore additions, charge modifications at half rate
    oas-delta delta base.yaml revision.yaml --asymmetric

    # JSON report with a per-endpoint breakdown
    oas-delta delta base.yaml revision.yaml -o json --explain

    # Compare versioned prefixes
    oas-delta delta v1.yaml v2.yaml --strip-prefix-base /v1 --strip-prefix-revision /v2")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "OAS_DELTA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `delta` subcommand
#[derive(Parser)]
struct DeltaArgs {
    /// Path to the base document
    base: PathBuf,

    /// Path to the revised document
    revision: PathBuf,

    /// Ignore additions and charge modifications at half rate
    #[arg(long, conflicts_with = "symmetric")]
    asymmetric: bool,

    /// Score symmetrically even if the config file enables asymmetric mode
    #[arg(long)]
    symmetric: bool,

    /// Output format [default: text]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Include a per-endpoint breakdown of the score
    #[arg(long, conflicts_with = "no_explain")]
    explain: bool,

    /// Omit the breakdown even if the config file asks for it
    #[arg(long)]
    no_explain: bool,

    /// Only compare paths matching this regular expression
    #[arg(long, value_name = "REGEX")]
    match_path: Option<String>,

    /// Prefix stripped from base paths before matching
    #[arg(long, value_name = "PREFIX")]
    strip_prefix_base: Option<String>,

    /// Prefix stripped from revision paths before matching
    #[arg(long, value_name = "PREFIX")]
    strip_prefix_revision: Option<String>,

    /// Match path templates literally (`/a/{id}` differs from `/a/{key}`)
    #[arg(long, conflicts_with = "normalize_path_params")]
    no_normalize_path_params: bool,

    /// Normalize path parameter names even if the config file turns it off
    #[arg(long)]
    normalize_path_params: bool,

    /// Number of modified endpoints from which scoring runs in parallel
    #[arg(long, value_name = "N")]
    parallel_threshold: Option<usize>,

    /// Start from a named preset (default, breaking, ci-cd)
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the delta between a base and a revised API document
    Delta(DeltaArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .oas-delta.yaml in the current directory
    Init,
}

fn parse_preset(name: &str) -> Result<ConfigPreset, String> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}

/// Collapse an `--x`/`--no-x` flag pair: `None` when neither was given.
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays a clean report
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) if code != exit_codes::SUCCESS => std::process::exit(code),
        Ok(_) => {}
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Delta(args) => {
            let (mut app, loaded_from) =
                oas_delta::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            if let Some(preset) = args.preset {
                app.merge(&AppConfig::from_preset(preset));
            }

            app.apply_overrides(&ConfigOverrides {
                asymmetric: flag_pair(args.asymmetric, args.symmetric),
                parallel_threshold: args.parallel_threshold,
                match_path: args.match_path,
                strip_prefix_base: args.strip_prefix_base,
                strip_prefix_revision: args.strip_prefix_revision,
                normalize_path_params: flag_pair(
                    args.normalize_path_params,
                    args.no_normalize_path_params,
                ),
                format: args.output,
                output_file: args.output_file,
                explain: flag_pair(args.explain, args.no_explain),
                quiet: cli.quiet.then_some(true),
            });

            let config = DeltaCommandConfig::from_app_config(app, args.base, args.revision);
            cli::run_delta(config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "oas-delta", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = oas_delta::config::generate_json_schema()
                .context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(action, cli.config),
    }
}

fn run_config(action: ConfigAction, explicit: Option<PathBuf>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = oas_delta::config::load_or_default(explicit.as_deref());
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                dirs::config_dir().map(|p| p.join("oas-delta").display().to_string()),
                dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in oas_delta::config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match oas_delta::config::discover_config_file(explicit.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".oas-delta.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = oas_delta::config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}
