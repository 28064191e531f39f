//! Transport selection and serving
//!
//! Servers run either over stdio (spawned by the client) or as a
//! network-reachable streamable HTTP endpoint mounted at `/mcp`.

use std::net::{Ipv4Addr, SocketAddr};

use clap::{Args, ValueEnum};
use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServerHandler, ServiceExt,
};

/// Path the HTTP service is mounted under
pub const MCP_PATH: &str = "/mcp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransportKind {
    /// stdin/stdout, one client per process
    Stdio,
    /// Streamable HTTP (server-sent events for responses)
    #[value(alias = "sse")]
    Http,
}

/// Transport flags shared by every server binary
#[derive(Debug, Clone, Args)]
pub struct TransportArgs {
    /// Transport type
    #[arg(long, value_enum, default_value_t = TransportKind::Stdio, env = "MCP_TRANSPORT")]
    pub transport: TransportKind,

    /// TCP port for the HTTP transport
    #[arg(long, default_value_t = 8080, env = "MCP_PORT")]
    pub port: u16,

    /// Absolute base URL to announce; defaults to http://localhost:<port>
    #[arg(long, env = "MCP_BASE_URL")]
    pub base_url: Option<String>,
}

impl Default for TransportArgs {
    fn default() -> Self {
        Self {
            transport: TransportKind::Stdio,
            port: 8080,
            base_url: None,
        }
    }
}

impl TransportArgs {
    pub fn base_url(&self) -> String {
        match self.base_url.as_deref().map(str::trim).filter(|url| !url.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("http://localhost:{}", self.port),
        }
    }

    /// Full URL clients connect to in HTTP mode
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.base_url(), MCP_PATH)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

/// Serve the server produced by `factory` on the selected transport until shutdown
///
/// In HTTP mode `factory` is called once per client session.
pub async fn serve<S, F>(factory: F, args: &TransportArgs) -> anyhow::Result<()>
where
    S: ServerHandler,
    F: Fn() -> S + Send + Sync + 'static,
{
    match args.transport {
        TransportKind::Stdio => serve_stdio(factory()).await,
        TransportKind::Http => serve_http(factory, args).await,
    }
}

async fn serve_stdio<S: ServerHandler>(server: S) -> anyhow::Result<()> {
    tracing::info!("Serving over stdio");

    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

async fn serve_http<S, F>(factory: F, args: &TransportArgs) -> anyhow::Result<()>
where
    S: ServerHandler,
    F: Fn() -> S + Send + Sync + 'static,
{
    let service = StreamableHttpService::new(
        move || Ok(factory()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(MCP_PATH, service);

    let listener = tokio::net::TcpListener::bind(args.bind_addr()).await?;
    tracing::info!(
        addr = %args.bind_addr(),
        endpoint = %args.endpoint_url(),
        "Serving over streamable HTTP"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}
