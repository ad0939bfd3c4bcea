use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hukam")]
#[command(about = "Daily hukamnama acquisition and bilingual alignment tool")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_HASH"), ")"))]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "info", value_enum)]
    log_level: LogLevel,

    /// Use UTC timestamps instead of local time
    #[arg(long, global = true)]
    utc: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Acquire the raw hukamnama page and extracted fields
    Acquire {
        /// Page URL to fetch
        #[arg(short, long, default_value = hukam_acquire::sgpc::HUKAMNAMA_URL)]
        url: String,

        /// Output directory for acquisition files
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,
    },

    /// Align an acquisition directory into a transcript JSON
    Align {
        /// Input directory containing hukamnama.json
        #[arg(short, long)]
        input: String,

        /// Output file path for the transcript JSON
        #[arg(short, long, default_value = "transcript.json")]
        output: String,
    },

    /// Acquire and align in one pass (the daily-use path)
    Fetch {
        /// Page URL to fetch
        #[arg(short, long, default_value = hukam_acquire::sgpc::HUKAMNAMA_URL)]
        url: String,

        /// Output directory for acquisition + transcript files
        #[arg(short = 'O', long, default_value = ".")]
        output_dir: String,
    },

    /// Validate a transcript JSON file
    Validate {
        /// Path to the transcript file
        file: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // scraper's selector and html5ever internals flood debug output,
    // so they stay capped at warn even when everything else is verbose
    let level = match cli.log_level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
        LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Millisecond timestamps with the zone offset spelled out
    let time_format = "%Y-%m-%d %H:%M:%S%.3f %:z";

    if cli.utc {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoUtc::new(time_format.to_string()))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_timer(tracing_subscriber::fmt::time::ChronoLocal::new(time_format.to_string()))
            .init();
    }

    match cli.command {
        Commands::Acquire { url, output_dir } => {
            hukam_acquire::sgpc::acquire(&url, &output_dir).await?;
        }
        Commands::Align { input, output } => {
            tracing::info!(input = %input, output = %output, "Aligning acquisition");
            hukam_align::parse(&input, &output)?;
        }
        Commands::Fetch { url, output_dir } => {
            hukam_acquire::sgpc::acquire(&url, &output_dir).await?;
            let output = std::path::Path::new(&output_dir)
                .join("transcript.json")
                .display()
                .to_string();
            hukam_align::parse(&output_dir, &output)?;
        }
        Commands::Validate { file } => {
            tracing::info!(file = %file, "Validating transcript");
            let errors = hukam_validate::validate(&file)?;
            if !errors.is_empty() {
                anyhow::bail!("{} validation errors", errors.len());
            }
        }
    }

    Ok(())
}
