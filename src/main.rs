use std::net::IpAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xss_board::config::{BoardConfig, CspScope, DEFAULT_PORT};
use xss_board::{api, store::CommentStore};

#[derive(Parser)]
#[command(name = "xss-board")]
#[command(about = "Stored XSS demo: a raw comment board next to a sanitized one")]
struct Cli {
    /// Port for the HTTP server
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind to
    #[arg(long, env = "XSS_BOARD_HOST", default_value = "127.0.0.1")]
    host: IpAddr,

    /// Which routes carry the Content-Security-Policy header
    #[arg(long, env = "XSS_BOARD_CSP_SCOPE", value_enum, default_value_t = CspScope::Global)]
    csp_scope: CspScope,

    /// Strip names posted to /safe to plain text before storing them
    #[arg(long, env = "XSS_BOARD_SANITIZE_ON_STORE")]
    sanitize_on_store: bool,
}

impl From<Cli> for BoardConfig {
    fn from(cli: Cli) -> Self {
        Self {
            host: cli.host,
            port: cli.port,
            csp_scope: cli.csp_scope,
            sanitize_on_store: cli.sanitize_on_store,
        }
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "xss_board=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = BoardConfig::from(Cli::parse());
    let addr = config.socket_addr();
    tracing::info!(
        csp_scope = config.csp_scope.as_str(),
        sanitize_on_store = config.sanitize_on_store,
        "Starting XSS board"
    );

    // Lives for the whole process; every handler gets a clone of the handle.
    let store = CommentStore::new();
    let app = api::create_router_with_config(store, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("XSS board listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
