mod mcp_http;

use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use log::{info, warn};
use random_mcp_core::{OsEntropy, ToolServer};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const SERVER_NAME: &str = "random-number-mcp";

/// MCP server exposing cryptographically secure random-value tools.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Listen address
    #[arg(long, default_value = "127.0.0.1")]
    addr: String,

    /// Listen port
    #[arg(long, default_value_t = 6767)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let args = Args::parse();

    let addr: SocketAddr = format!("{}:{}", args.addr, args.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    let server = Arc::new(ToolServer::new(
        SERVER_NAME,
        env!("CARGO_PKG_VERSION"),
        OsEntropy,
    ));

    info!("MCP server listening on http://{}/mcp", addr);
    info!("Press Ctrl+C to stop the server");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
            accepted = listener.accept() => {
                let (stream, peer) = accepted?;
                let server = server.clone();
                tokio::spawn(async move {
                    let service = service_fn(move |request| {
                        mcp_http::serve_request(server.clone(), request)
                    });
                    if let Err(err) = http1::Builder::new()
                        .serve_connection(TokioIo::new(stream), service)
                        .await
                    {
                        warn!("connection from {} failed: {}", peer, err);
                    }
                });
            }
        }
    }

    Ok(())
}
