//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mindvault::ai::{AssistService, ModelCandidates, ModelDispatcher};
use mindvault::config::{empty_env, AiConfig};
use mindvault::server::{AppServer, ServerHandle};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// AI config pointed at a mock provider with a fixed key.
pub fn ai_config(base_url: &str, model: Option<&str>) -> AiConfig {
    AiConfig {
        base_url: base_url.to_string(),
        api_key: Some("test-key".to_string()),
        model: model.map(String::from),
        connect_timeout_seconds: 2,
    }
}

/// Dispatcher over the default candidate list, or just `model` when given.
pub fn dispatcher(config: &AiConfig) -> ModelDispatcher {
    let candidates = ModelCandidates::from_model(config.model.clone());
    ModelDispatcher::new(config, candidates).expect("Failed to create dispatcher")
}

/// Create a temporary config file with the given TOML body.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Start the real server on an ephemeral port.
///
/// Key and model come from `ai` only; the process environment is not consulted.
pub async fn spawn_server(ai: AiConfig) -> (SocketAddr, ServerHandle) {
    let assist = AssistService::with_env(ai, empty_env()).expect("Failed to create assist service");
    let mut server = AppServer::with_assist(Arc::new(assist));
    let addr = server.try_bind("127.0.0.1:0").await.expect("Failed to bind");
    let handle = server.handle();

    tokio::spawn(async move {
        let _ = server.run().await;
    });

    assert!(wait_for_server(addr, Duration::from_secs(2)).await);
    (addr, handle)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}
