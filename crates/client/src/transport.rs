use std::pin::Pin;

use futures::TryStreamExt;
use reqwest::Client;
use tokio::io::AsyncRead;
use tokio_util::io::StreamReader;
use url::Url;

use crate::error::TransportError;

/// Raw response body as handed back by a transport. Still compressed.
pub type BodyStream = Pin<Box<dyn AsyncRead + Send>>;

const USER_AGENT: &str = concat!("mbrowse/", env!("CARGO_PKG_VERSION"));

/// Issues GET requests and hands back the response body as a byte stream.
///
/// Implementations must return `Err` for anything that is not a successful
/// response; the client never inspects status codes itself.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<BodyStream, TransportError>;
}

/// reqwest backed transport.
///
/// reqwest is built without its `gzip` feature so bodies arrive exactly as
/// the server sent them; decompression is the client's job.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    pub fn http_client(&self) -> &Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<BodyStream, TransportError> {
        let parsed = Url::parse(url)?;
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        tracing::debug!(url, %status, "GET");
        if !status.is_success() {
            tracing::warn!(url, %status, "request failed");
            return Err(TransportError::HttpStatus(status, url.to_string()));
        }

        let stream = response.bytes_stream().map_err(std::io::Error::other);
        Ok(Box::pin(StreamReader::new(stream)))
    }
}
