//! maturity-roadmap: security maturity scoring and roadmap tool
//!
//! Scores DSOMM-style questionnaire answers and derives a phased improvement
//! roadmap.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use maturity_roadmap::{
    cli,
    config::{
        self, AppConfig, AssessmentSource, RoadmapConfig, ScoreConfig, Validatable,
        DEFAULT_CONFIG_FILE_NAME,
    },
    model::MaturityLevel,
    pipeline::{exit_code_for_error, exit_codes},
    reports::ReportFormat,
};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "maturity-roadmap")]
#[command(version)]
#[command(about = "Security maturity scoring and improvement roadmaps", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall maturity below --min-level
    2  No scored answers for the product/user
    3  Error occurred

EXAMPLES:
    # Score an assessment
    maturity-roadmap score answers.yaml --product web-shop --user alice

    # Markdown roadmap with a custom recommendation table
    maturity-roadmap roadmap answers.yaml -p web-shop -u alice \\
        --recommendations recs.yaml -o markdown -O roadmap.md

    # CI gate: fail below level 3
    maturity-roadmap roadmap answers.yaml -p web-shop -u alice --min-level 3 -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments selecting one assessment
#[derive(Parser)]
struct AssessmentArgs {
    /// Answer file (JSON or YAML)
    answers: PathBuf,

    /// Product identifier
    #[arg(short, long)]
    product: String,

    /// User identifier
    #[arg(short, long)]
    user: String,

    /// Accept legacy 20-100 scores (divided by 20)
    #[arg(long)]
    percent_scale: bool,
}

/// Output arguments shared by report-producing commands
#[derive(Parser)]
struct OutputArgs {
    /// Output format [default: summary, or the config file setting]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    #[command(flatten)]
    assessment: AssessmentArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `roadmap` subcommand
#[derive(Parser)]
struct RoadmapArgs {
    #[command(flatten)]
    assessment: AssessmentArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Recommendation table (YAML) layered over the built-in table
    #[arg(long, value_name = "FILE")]
    recommendations: Option<PathBuf>,

    /// Do not start from the built-in recommendation table
    #[arg(long)]
    no_builtin_recommendations: bool,

    /// Exit with code 1 if the overall level is below this level
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    min_level: Option<u8>,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate answers into dimension and overall maturity scores
    Score(ScoreArgs),

    /// Build the phased improvement roadmap for an assessment
    Roadmap(RoadmapArgs),

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
    /// Generate an example .maturity-roadmap.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
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
        Ok(code) => {
            if code != exit_codes::SUCCESS {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for_error(&e));
        }
    }
}

/// Load the config file and layer global CLI flags over it
fn effective_config(cli: &Cli) -> AppConfig {
    let overrides = AppConfig::builder()
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .build();
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}

fn apply_output_args(config: &mut AppConfig, args: OutputArgs) {
    if let Some(format) = args.output {
        config.output.format = format;
    }
    if args.output_file.is_some() {
        config.output.file = args.output_file;
    }
}

fn assessment_source(args: AssessmentArgs, config: &mut AppConfig) -> AssessmentSource {
    if args.percent_scale {
        config.scoring.accept_percent_scale = true;
    }
    AssessmentSource {
        answers_path: args.answers,
        product_id: args.product,
        user_id: args.user,
    }
}

fn warn_invalid(config: &AppConfig) {
    for error in config.validate() {
        tracing::warn!("Config: {error}");
    }
}

fn run(cli: Cli) -> Result<i32> {
    let mut app = effective_config(&cli);
    let quiet = app.behavior.quiet;

    match cli.command {
        Commands::Score(args) => {
            apply_output_args(&mut app, args.output);
            let source = assessment_source(args.assessment, &mut app);
            warn_invalid(&app);

            cli::run_score(
                ScoreConfig {
                    source,
                    scoring: app.scoring,
                    output: app.output,
                },
                quiet,
            )
        }

        Commands::Roadmap(args) => {
            apply_output_args(&mut app, args.output);
            let source = assessment_source(args.assessment, &mut app);
            if args.recommendations.is_some() {
                app.recommendations.table_file = args.recommendations;
            }
            if args.no_builtin_recommendations {
                app.recommendations.use_builtin = false;
            }
            if args.min_level.is_some() {
                app.behavior.min_overall_level = args.min_level;
            }
            warn_invalid(&app);

            let min_level = app
                .behavior
                .min_overall_level
                .map(|n| {
                    MaturityLevel::from_number(n)
                        .with_context(|| format!("invalid minimum level {n}, expected 1-5"))
                })
                .transpose()?;

            cli::run_roadmap(
                RoadmapConfig {
                    source,
                    scoring: app.scoring,
                    recommendations: app.recommendations,
                    output: app.output,
                    min_level,
                },
                quiet,
            )
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "maturity-roadmap", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config_action(action, cli.config.as_deref())?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                config::user_config_dir(),
                dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(DEFAULT_CONFIG_FILE_NAME);
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, config::generate_full_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(())
}
