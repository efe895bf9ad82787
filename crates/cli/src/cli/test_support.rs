//! Local fixture server for op tests

use async_compression::tokio::bufread::GzipEncoder;
use axum::routing::get;
use axum::Router;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use url::Url;

use super::op::OpContext;

/// Serve `value` as gzip JSON at `/api{path}` and return a context
/// pointed at `/api`.
pub async fn context_serving(path: &str, value: serde_json::Value) -> OpContext {
    let mut body = Vec::new();
    GzipEncoder::new(serde_json::to_vec(&value).unwrap().as_slice())
        .read_to_end(&mut body)
        .await
        .unwrap();

    let router = Router::new().route(
        &format!("/api{path}"),
        get(move || {
            let body = body.clone();
            async move { body }
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let remote = Url::parse(&format!("http://{addr}/api")).unwrap();
    OpContext::new(remote, None).unwrap()
}
