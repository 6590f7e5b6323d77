//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use media_gateway::storage::MemoryStore;
use media_gateway::{GatewayConfig, HttpServer};

/// Start a gateway on a loopback port with the given config and store.
///
/// The server runs until the test process exits.
pub async fn start_gateway(mut config: GatewayConfig, store: Arc<MemoryStore>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let server = HttpServer::new(config, store).expect("validated config");
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}
