use anyhow::Result;
use clap::Parser;
use portfolio_generator::{start_web_server, ConfigManager};
use std::path::PathBuf;
use tracing::info;

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

#[derive(Parser)]
#[command(name = "portfolio-generator")]
#[command(about = "Generate downloadable static portfolio sites from GitHub profiles")]
struct Cli {
    /// Port to listen on (overrides ROCKET_PORT / PORT)
    #[arg(long)]
    port: Option<u16>,

    /// YAML configuration file
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding one sub-directory per template
    #[arg(long)]
    templates_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

/// JSON lines carrying the fields of the current span (request id, template).
fn json_layer<S, W>(writer: W) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(writer)
        .boxed()
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_generator=info,rocket::server=off"));

    if json {
        Registry::default()
            .with(filter)
            .with(json_layer(std::io::stdout))
            .init();
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    let mut config = ConfigManager::load(cli.config.as_deref())?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(templates_dir) = cli.templates_dir {
        config.environment.templates_path = templates_dir;
    }

    info!(
        "{} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(config).await
}
