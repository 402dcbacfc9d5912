use clap::Parser;
use dagcheck_api::config::{DEFAULT_HOST, DEFAULT_HTTP_PORT, DEFAULT_MAX_PAYLOAD_BYTES};
use dagcheck_api::{AllowedOrigins, CorsConfig, RestApi, ServerConfig};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Tells you whether a pipeline graph is a DAG
#[derive(Parser, Debug)]
#[command(name = "dagcheck")]
#[command(about = "Pipeline DAG validation service", long_about = None)]
struct Args {
    /// Address to bind the HTTP API to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// HTTP API port
    #[arg(long, default_value_t = DEFAULT_HTTP_PORT)]
    http_port: u16,

    /// Number of HTTP worker threads (defaults to one per physical core)
    #[arg(long)]
    workers: Option<usize>,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_PAYLOAD_BYTES)]
    max_payload_bytes: usize,

    /// Origin allowed by CORS; repeat for several. Omit or pass `*` for any
    #[arg(long = "allowed-origin")]
    allowed_origins: Vec<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.http_port,
            workers: self.workers,
            max_payload_bytes: self.max_payload_bytes,
            cors: CorsConfig {
                allowed_origins: AllowedOrigins::from_list(self.allowed_origins.clone()),
                ..CorsConfig::default()
            },
        }
    }
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

    // try_init also routes `log` records (actix's request logger) into tracing
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    let config = args.server_config();

    info!("Starting dagcheck v{}", env!("CARGO_PKG_VERSION"));
    info!("HTTP API: http://{}:{}/", config.host, config.port);
    info!("Max payload: {} bytes", config.max_payload_bytes);
    info!("CORS origins: {:?}", config.cors.allowed_origins);

    let http_handle = std::thread::spawn(move || {
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(config).await {
                error!("HTTP server error: {}", e);
            }
        })
    });

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
