//! Common test utilities

#![allow(dead_code)]

pub mod backend_mock;

pub use backend_mock::MockHomeBackend;

use home_controller_rust::{ClientConfig, HomeHttpClient};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Client pointing at a mock backend, with a short timeout so failures surface quickly
pub fn test_client(base_url: &str) -> HomeHttpClient {
    client_with_timeout(base_url, Duration::from_secs(5))
}

pub fn client_with_timeout(base_url: &str, timeout: Duration) -> HomeHttpClient {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        timeout: Some(timeout),
    };
    HomeHttpClient::new(&config).expect("test client should build")
}

/// Backend that sends the status line, headers and part of the body, then goes silent
pub async fn stalled_body_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut request = [0u8; 1024];
                let _ = socket.read(&mut request).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"succ",
                    )
                    .await;
                let _ = socket.flush().await;
                tokio::time::sleep(Duration::from_secs(30)).await;
            });
        }
    });

    format!("http://{addr}")
}

/// A local address nothing is listening on
pub fn unused_local_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
