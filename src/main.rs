use anyhow::Result;
use clap::{Parser, ValueEnum};
use daos_test_config::render::{render_json, render_properties, render_text};
use daos_test_config::{ConfigLoader, MapSource, Resolved};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Resolve DAOS test pool and container identifiers
///
/// Prints the identifiers integration tests should use, after applying
/// overrides from the command line, the environment and an override file.
#[derive(Parser, Debug)]
#[command(name = "daos-test-config")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print only the value of this key (pool_id, cont_id, object_cont_id)
    key: Option<String>,

    /// Override a key, like a -Dkey=value system property (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    defines: Vec<String>,

    /// Override file to read instead of searching the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (not combinable with KEY, which prints the bare value)
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, conflicts_with = "key")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    ///
    /// Defaults to the override file's `settings.log_level`, then `warn`.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `key = value (origin)` lines
    Text,
    /// JSON array of resolved entries
    Json,
    /// `key=value` lines
    Properties,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn render(resolved: &[Resolved], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(resolved),
        OutputFormat::Properties => render_properties(resolved),
        OutputFormat::Json => render_json(resolved)?,
    };

    Ok(rendered)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load the file first so its log level can apply
    let loader = match &args.config {
        Some(path) => ConfigLoader::from_path(path)?,
        None => ConfigLoader::new()?,
    };

    let log_level = args
        .log_level
        .clone()
        .or_else(|| {
            loader
                .user_config()
                .and_then(|c| c.log_level())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "warn".to_string());
    setup_logging(&log_level, args.log_file)?;

    info!("Starting daos-test-config v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = loader.config_path() {
        info!("Override file: {}", path.display());
    }

    let cli = MapSource::parse_overrides("cli", &args.defines)?;
    debug!("{} command-line overrides", cli.len());

    let provider = loader.into_provider(cli);

    let mut stdout = std::io::stdout().lock();
    match args.key {
        Some(key) => {
            let resolved = provider.resolve_key(&key)?;
            writeln!(stdout, "{}", resolved.value)?;
        }
        None => {
            let output = render(&provider.resolve_all(), args.format)?;
            stdout.write_all(output.as_bytes())?;
        }
    }

    Ok(())
}
