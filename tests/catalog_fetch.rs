// SPDX-License-Identifier: MPL-2.0
//! Remote manifest fetches against a throwaway local HTTP responder.

use swatchbook::catalog::{self, Loader, Location};
use swatchbook::error::CatalogError;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Serves exactly one HTTP/1.1 response and returns the request head.
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    serve_when(None, status, body).await
}

/// Like [`serve_once`], but holds the response back until `release` fires.
async fn serve_when(
    release: Option<oneshot::Receiver<()>>,
    status: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }

        if let Some(release) = release {
            release.await.ok();
        }

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write");
        socket.shutdown().await.ok();
        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{addr}/pillowcases.json"), handle)
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let (url, server) = serve_once("500 Internal Server Error", "oops").await;

    let result = catalog::load(Location::parse(&url)).await;
    assert_eq!(result, Err(CatalogError::HttpStatus(500)));
    server.await.expect("server task");
}

#[tokio::test]
async fn remote_array_is_parsed_and_bypasses_caches() {
    let (url, server) = serve_once(
        "200 OK",
        r#"[{"filename": "a.jpg", "name": "Gingham", "quantity": 2}]"#,
    )
    .await;

    let entries = catalog::load(Location::parse(&url))
        .await
        .expect("manifest loads");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].quantity, 2);

    let request = server.await.expect("server task").to_ascii_lowercase();
    assert!(request.contains("cache-control: no-store"));
}

#[tokio::test]
async fn remote_non_array_is_rejected() {
    let (url, server) = serve_once("200 OK", r#"{"filename": "a.jpg"}"#).await;

    let result = catalog::load(Location::parse(&url)).await;
    assert_eq!(result, Err(CatalogError::NotAnArray));
    server.await.expect("server task");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let result = catalog::load(Location::parse(&format!("http://{addr}/x.json"))).await;
    assert!(matches!(result, Err(CatalogError::Transport(_))));
}

#[tokio::test]
async fn teardown_before_response_discards_completion() {
    let (release, gate) = oneshot::channel();
    let (url, server) = serve_when(
        Some(gate),
        "200 OK",
        r#"[{"filename": "a.jpg", "name": "A", "quantity": 1}]"#,
    )
    .await;

    let mut loader = Loader::new();
    let ticket = loader.begin().expect("first fetch starts");
    let fetch = tokio::spawn(catalog::load(Location::parse(&url)));

    // The server has not answered yet.
    loader.teardown();
    assert!(!fetch.is_finished());
    assert_eq!(loader.in_flight(), None);

    release.send(()).expect("server still waiting");
    let result = fetch.await.expect("fetch task");
    assert_eq!(result.map(|entries| entries.len()), Ok(1));

    assert!(!loader.accept(ticket));
    assert!(loader.begin().is_none(), "a torn down loader never refetches");
    server.await.expect("server task");
}
