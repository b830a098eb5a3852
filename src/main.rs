use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vcf_secrets::Context;
use vcf_secrets::commands::{CheckCommand, ConfigCommand, ConfigFormat};

#[derive(Parser)]
#[command(name = "vcf-secrets")]
#[command(about = "Resolve VCF lab credentials from environment, secrets file, config or prompt", long_about = None)]
#[command(version)]
struct Cli {
    /// Project root containing the config/ directory (defaults to current directory)
    #[arg(long, global = true, env = "VCF_PROJECT_DIR")]
    project_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which secret sources are available (never prints values)
    Check,

    /// Load the main config with all credentials resolved
    Config {
        /// Path to the YAML config file (defaults to config/vcf-config.yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Summary)]
        format: ConfigFormat,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::new();
    if let Err(err) = run(&ctx, cli) {
        ctx.output.error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(ctx: &Context, cli: Cli) -> Result<()> {
    let project_dir = cli.project_dir.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Check => {
            CheckCommand::execute(ctx, &project_dir)?;
        }
        Commands::Config { config, format } => {
            ConfigCommand::execute(ctx, &project_dir, config.as_deref(), format)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `VCF_LOG` (default `warn`, `--verbose` forces `debug`)
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("VCF_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
