mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use excuses_lib::DEFAULT_URL;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::output::OutputFormat;

#[derive(Copy, Clone, ValueEnum)]
enum CliOutput {
    Text,
    Json,
}

impl From<CliOutput> for OutputFormat {
    fn from(output: CliOutput) -> Self {
        match output {
            CliOutput::Text => OutputFormat::Text,
            CliOutput::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(name = "excuse", version)]
#[command(about = "Print the latest excuse from developerexcuses.com")]
struct Cli {
    /// Page to fetch the excuse from
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Request timeout in seconds; 0 waits indefinitely
    #[arg(long, default_value = "0")]
    timeout: u64,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    output: CliOutput,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::OFF.into())
                .from_env()?,
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    install_panic_hook();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    fetch_and_print_excuse(&cli.url, cli.timeout(), &cli.output.into()).await;
    Ok(())
}

/// Routes panic reports through tracing so a panicking fetch still prints
/// only its `Exception fetching excuse:` line.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic during fetch: {}", info);
    }));
}

/// Prints exactly one line: the excuse, the extraction miss, or the failure.
async fn fetch_and_print_excuse(url: &str, timeout: Option<Duration>, format: &OutputFormat) {
    let rendered = match excuses_lib::fetch_excuse(url, timeout).await {
        Ok(outcome) => output::render_outcome(&outcome, format),
        Err(failure) => output::render_failure(&failure, format),
    };
    output::emit(&rendered);
}
