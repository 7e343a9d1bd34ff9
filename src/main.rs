use cinex_api::{AppState, RestApi};
use cinex_core::Engine;
use cinex_dataset::load_movies;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// An in-memory movie catalog and recommendation service
#[derive(Parser, Debug)]
#[command(name = "cinex")]
#[command(about = "Movie catalog lookups and content-based recommendations", long_about = None)]
struct Args {
    /// Path to the movie dataset CSV
    #[arg(short, long, default_value = "./movies.csv")]
    data_file: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting cinex v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.data_file);

    let movies = load_movies(&args.data_file)?;
    info!("Dataset loaded: {} movies", movies.len());

    let engine = Engine::build(movies)?;
    info!(
        "Index built: {} titles, {} vocabulary terms",
        engine.catalog().len(),
        engine.recommender().vocabulary().len()
    );

    let state = Arc::new(AppState::new(engine, args.data_file));

    let state_http = state.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("cinex started successfully");
    info!("HTTP API: http://localhost:{}/", http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
