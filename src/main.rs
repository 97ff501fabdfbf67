use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use proc_tabulator::{config::Config, web::WebServer};

#[derive(Parser)]
#[command(name = "proc-tabulator")]
#[command(version)]
#[command(about = "Live process monitor rendered with Tabulator tables")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("proc_tabulator={},tower_http=trace", cli.log_level)
    } else {
        format!("proc_tabulator={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting proc-tabulator v{}", env!("CARGO_PKG_VERSION"));

    let mut config = Config::load_from_file(&cli.config)?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    info!(
        command = %config.processes.command,
        args = ?config.processes.args,
        markdown_root = %config.content.markdown_root.display(),
        "Process listing and content configured"
    );

    let web_server = WebServer::new(config)?;
    info!(
        "Web server starting on http://{}:{}",
        web_server.host(),
        web_server.port()
    );

    web_server.serve().await?;

    Ok(())
}
