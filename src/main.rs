use clap::Parser;
use miette::{IntoDiagnostic, Result};
use skyfare::application::engine::BookingSummaryEngine;
use skyfare::domain::booking::PageContext;
use skyfare::domain::ports::{FareSource, FareSourceBox};
use skyfare::infrastructure::http::HttpFareSource;
use skyfare::infrastructure::memory::RecordingSink;
use skyfare::interfaces::csv::command_reader::CommandReader;
use skyfare::interfaces::csv::summary_writer::SummaryWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page context JSON (prices, roster, initial selections)
    context: PathBuf,

    /// Input commands CSV file
    input: PathBuf,

    /// Backend base URL for autofill lookups (optional)
    #[arg(long)]
    backend_url: Option<String>,

    /// Flight number whose fare should prefill the base cost
    #[arg(long, requires = "backend_url")]
    flight_no: Option<String>,

    /// Cookie header carrying the backend's CSRF token
    #[arg(long)]
    cookie: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let context_file = File::open(&cli.context).into_diagnostic()?;
    let mut context = PageContext::from_json(context_file).into_diagnostic()?;

    // Prefill the base fare from the backend when asked, keeping the
    // embedded value on any failure.
    if let (Some(url), Some(flight_no)) = (&cli.backend_url, &cli.flight_no) {
        let source: FareSourceBox = Box::new(HttpFareSource::new(url.clone(), cli.cookie.as_deref()));
        match source.flight_price(flight_no).await {
            Ok(price) => context.prices.base_flight_cost = price,
            Err(e) => error!("Error fetching flight price: {e}"),
        }
    }

    let mut engine = BookingSummaryEngine::initialize(context, Box::new(RecordingSink::new()));

    // Process commands
    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command_result in reader.commands() {
        match command_result {
            Ok(command) => {
                if let Err(e) = engine.apply(command) {
                    eprintln!("Error processing command: {e}");
                }
            }
            Err(e) => {
                eprintln!("Error reading command: {e}");
            }
        }
    }

    // Output final state
    let summary = engine.into_summary();
    let stdout = io::stdout();
    let mut writer = SummaryWriter::new(stdout.lock());
    writer.write_summary(summary).into_diagnostic()?;

    Ok(())
}
