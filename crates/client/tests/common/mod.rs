//! Shared helpers for client integration tests
#![allow(dead_code)]

use std::io::Cursor;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use async_compression::tokio::bufread::GzipEncoder;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};

use client::prelude::*;

pub const API_BASE: &str = "http://media.local:8096/mediabrowser";

/// gzip `bytes` the way the server does
pub async fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    GzipEncoder::new(bytes).read_to_end(&mut out).await.unwrap();
    out
}

pub async fn gzip_json<T: Serialize>(value: &T) -> Vec<u8> {
    gzip(&serde_json::to_vec(value).unwrap()).await
}

enum Reply {
    Body(Vec<u8>),
    Refused,
}

/// In-memory transport. Serves one canned reply for every request and
/// records the urls it was asked for.
#[derive(Clone)]
pub struct FakeTransport {
    reply: Arc<Reply>,
    requested: Arc<Mutex<Vec<String>>>,
}

impl FakeTransport {
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            reply: Arc::new(Reply::Body(body)),
            requested: Arc::default(),
        }
    }

    pub fn refusing() -> Self {
        Self {
            reply: Arc::new(Reply::Refused),
            requested: Arc::default(),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str) -> Result<BodyStream, TransportError> {
        self.requested.lock().unwrap().push(url.to_string());
        match self.reply.as_ref() {
            Reply::Body(body) => Ok(Box::pin(Cursor::new(body.clone()))),
            Reply::Refused => Err(TransportError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
                url.to_string(),
            )),
        }
    }
}

/// Client over a transport serving `value` as gzip JSON
pub async fn client_serving<T: Serialize>(value: &T) -> (ApiClient<FakeTransport>, FakeTransport) {
    let transport = FakeTransport::serving(gzip_json(value).await);
    (
        ApiClient::with_transport(API_BASE, transport.clone()),
        transport,
    )
}

/// Body that never yields a byte, like a server that stops mid-response.
struct Stalled;

impl AsyncRead for Stalled {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Poll::Pending
    }
}

/// Body wrapper that records when it is dropped.
struct Tracked {
    inner: BodyStream,
    dropped: Arc<AtomicBool>,
}

impl AsyncRead for Tracked {
    fn poll_read(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        self.inner.as_mut().poll_read(cx, buf)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.dropped.store(true, Ordering::SeqCst);
    }
}

/// Transport whose body reports when the client releases it.
#[derive(Clone)]
pub struct TrackingTransport {
    body: Option<Vec<u8>>,
    dropped: Arc<AtomicBool>,
}

impl TrackingTransport {
    pub fn serving(body: Vec<u8>) -> Self {
        Self {
            body: Some(body),
            dropped: Arc::default(),
        }
    }

    pub fn stalled() -> Self {
        Self {
            body: None,
            dropped: Arc::default(),
        }
    }

    pub fn body_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Transport for TrackingTransport {
    async fn get(&self, _url: &str) -> Result<BodyStream, TransportError> {
        let inner: BodyStream = match &self.body {
            Some(body) => Box::pin(Cursor::new(body.clone())),
            None => Box::pin(Stalled),
        };
        Ok(Box::pin(Tracked {
            inner,
            dropped: self.dropped.clone(),
        }))
    }
}
