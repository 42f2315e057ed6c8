use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use lumina::ReadingLevel;
use lumina::core::config::{self, CliOverrides};
use lumina::core::state::ReportInput;
use lumina::explain::{ExplanationClient, HttpExplanationClient};
use lumina::headless::{self, HeadlessError};
use simplelog::{ConfigBuilder, WriteLogger};

#[derive(Parser)]
#[command(name = "lumina", about = "Radiology reports in plain language")]
struct Args {
    /// Reading level for the explanation
    #[arg(short = 'l', long, value_enum)]
    reading_level: Option<ReadingLevel>,

    /// Base URL of the explanation service
    #[arg(long)]
    api_url: Option<String>,

    /// Preload the report from a file ("-" reads stdin)
    #[arg(short, long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Submit once, print the result and exit
    #[arg(long)]
    once: bool,
}

fn read_report(path: Option<&PathBuf>) -> std::io::Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Held until the logger exists so the failure gets logged
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::LuminaConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        api_url: args.api_url.clone(),
        reading_level: args.reading_level,
    };
    let resolved = config::resolve(&file_config, &cli);

    // Initialize file logger - writes to lumina.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("lumina.log") {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
    if let Some(e) = &config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    log::info!(
        "Lumina starting up: api_url={}, reading_level={}",
        resolved.api_url,
        resolved.reading_level.as_str()
    );

    let client: Arc<dyn ExplanationClient> = Arc::new(HttpExplanationClient::with_timeout(
        resolved.api_url.clone(),
        resolved.timeout,
    ));

    if args.once {
        let text = read_report(args.report.as_ref())?;
        let input = ReportInput::new(text, resolved.reading_level);
        return match headless::run_once(client.as_ref(), &input, &mut std::io::stdout()).await {
            Ok(()) => Ok(()),
            Err(HeadlessError::Validation(e)) => {
                eprintln!("{e}");
                std::process::exit(2);
            }
            Err(HeadlessError::Io(e)) => Err(e),
        };
    }

    let initial_report = match &args.report {
        Some(path) => read_report(Some(path))?,
        None => String::new(),
    };
    lumina::tui::run(&resolved, client, initial_report)
}
