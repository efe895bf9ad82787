use async_compression::tokio::bufread::GzipDecoder;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncReadExt, BufReader};

use crate::error::DecodeError;
use crate::transport::BodyStream;

/// Decompressing view over a response body.
pub type GzipBody = GzipDecoder<BufReader<BodyStream>>;

/// Wrap a body in a gzip decoder. Headers are never consulted: the server
/// always compresses.
pub fn gunzip(body: BodyStream) -> GzipBody {
    GzipDecoder::new(BufReader::new(body))
}

/// Decompress `body` and parse the result as JSON.
///
/// The body and the decoder are dropped before this returns, whichever way
/// it returns.
pub async fn decode_json<T: DeserializeOwned>(body: BodyStream) -> Result<T, DecodeError> {
    let mut decoder = gunzip(body);
    let mut buf = Vec::new();
    decoder.read_to_end(&mut buf).await?;
    Ok(serde_json::from_slice(&buf)?)
}
