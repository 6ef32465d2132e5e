use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pagelinks::config::Config;
use pagelinks::pagination::{Pagination, StaticRequest};
use pagelinks::render::HtmlRenderer;
use pagelinks::state::AppState;
use pagelinks::{build_router, web};

#[derive(Parser)]
#[command(name = "pagelinks", version, about = "Pagination link strips")]
struct Cli {
    /// Path to config file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Render the strip for this request URL (path and query) and exit
    #[arg(long, value_name = "URL")]
    render: Option<String>,

    /// Record count for --render (defaults to the configured demo list)
    #[arg(long, requires = "render")]
    records: Option<u64>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {e}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };

    // Setup tracing/logging
    let filter =
        EnvFilter::try_new(&config.server.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let renderer = HtmlRenderer::new(config.style.clone(), config.labels.clone())
        .unwrap_or_else(|e| {
            tracing::error!("Failed to load pagination template: {e}");
            std::process::exit(1);
        });

    // One-shot render mode
    if let Some(url) = &cli.render {
        let records = cli.records.unwrap_or_else(|| config.demo_records());
        let request = StaticRequest::from_url(url);
        let plan = Pagination::new(config.pagination.clone(), &request)
            .map(|p| p.with_records(records))
            .and_then(|mut p| p.plan());
        let plan = plan.unwrap_or_else(|e| {
            tracing::error!("Invalid pagination settings: {e}");
            std::process::exit(1);
        });
        match renderer.render(&plan) {
            Ok(html) => println!("{html}"),
            Err(e) => {
                tracing::error!("Render failed: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // Server mode
    let tera = web::load_templates().unwrap_or_else(|e| {
        tracing::error!("Failed to load templates: {e}");
        std::process::exit(1);
    });

    let addr = SocketAddr::new(
        config.server.host.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid host '{}', falling back to 0.0.0.0",
                config.server.host
            );
            std::net::Ipv4Addr::UNSPECIFIED.into()
        }),
        config.server.port,
    );

    tracing::info!("pagelinks v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Demo list: {} items at {}",
        config.demo.total_items,
        config.demo.base_path
    );
    tracing::info!("Listening on {addr}");

    let state = AppState::new(config, tera, renderer);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
