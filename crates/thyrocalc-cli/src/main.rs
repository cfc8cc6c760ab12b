//! thyrocalc
//!
//! Levothyroxine dose and TSH target calculator.
//!
//! Usage:
//!   thyrocalc calculate [--profile <file|->] [--format text|json] [--template <file>]
//!   thyrocalc tablet <mcg> [--format text|json]
//!   thyrocalc config show
//!   thyrocalc config init [--path <file>] [--force]

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eyre::Result;
use thyrocalc_core::config::DosingConfig;
use thyrocalc_core::models::patient::PatientProfile;
use tracing_subscriber::EnvFilter;

mod config;

use config::Preset;

#[derive(Parser)]
#[command(name = "thyrocalc")]
#[command(version)]
#[command(about = "Thyroid hormone dose and TSH target decision support", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (defaults to the per-user config when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in threshold set used when no config file is found
    #[arg(long, value_enum, default_value = "canonical", global = true)]
    preset: Preset,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate dose, target range and next titration step for a patient
    Calculate {
        /// Patient profile JSON file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        profile: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Tera template overriding the built-in text summary
        #[arg(long)]
        template: Option<PathBuf>,
    },

    /// Snap a dose to the nearest manufactured tablet strength
    Tablet {
        /// Target dose in mcg/day
        dose_mcg: f64,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration as JSON
    Show,

    /// Write the selected preset to disk
    Init {
        /// Destination (defaults to the per-user config path)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Commands::Calculate {
            profile,
            format,
            template,
        } => {
            let config = config::load_config(cli.config.as_deref(), cli.preset)?;
            let profile = read_profile(&profile)?;
            let result = thyrocalc_engine::calculate(&profile, &config)?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Text => {
                    let text = match template {
                        Some(path) => {
                            let content = std::fs::read_to_string(&path).map_err(|e| {
                                eyre::eyre!("failed to read template {}: {e}", path.display())
                            })?;
                            thyrocalc_report::render::render_template(
                                "custom.txt",
                                &content,
                                &result,
                                &config,
                            )?
                        }
                        None => thyrocalc_report::render::render_summary(&result, &config)?,
                    };
                    print!("{text}");
                }
            }
        }

        Commands::Tablet { dose_mcg, format } => {
            if !(dose_mcg.is_finite() && dose_mcg >= 0.0) {
                return Err(eyre::eyre!("dose must be a non-negative number, got {dose_mcg}"));
            }
            let config = config::load_config(cli.config.as_deref(), cli.preset)?;
            let rec = thyrocalc_engine::tablet::nearest_tablet(dose_mcg, &config.tablets)
                .ok_or_else(|| eyre::eyre!("no tablet strengths configured"))?;

            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rec)?),
                OutputFormat::Text => {
                    println!("{}", thyrocalc_report::context::tablet_advice(&rec))
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config(cli.config.as_deref(), cli.preset)?;
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { path, force } => {
                let path = match path.or(cli.config) {
                    Some(p) => p,
                    None => config::default_config_path()?,
                };
                let config: DosingConfig = cli.preset.config();
                config::save_config(&config, &path, force)?;
                eprintln!("wrote {}", path.display());
            }
        },
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_profile(source: &str) -> Result<PatientProfile> {
    let contents = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| eyre::eyre!("failed to read profile {source}: {e}"))?
    };
    serde_json::from_str(&contents).map_err(|e| eyre::eyre!("invalid patient profile: {e}"))
}
