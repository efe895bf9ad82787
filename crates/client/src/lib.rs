/**
 * The API client itself: owns the base url and a
 *  transport, and exposes one method per server
 *  operation.
 */
pub mod client;
/**
 * Gzip + JSON body decoding. Every response body
 *  from the server is gzip compressed.
 */
pub mod decode;
pub mod error;
/**
 * Wire models returned by the server.
 */
pub mod models;
/**
 * Query string construction from ordered,
 *  optionally-present parameters.
 */
pub mod query;
/**
 * Request types, one per server operation, each
 *  knowing how to render its own url.
 */
pub mod requests;
/**
 * The seam between the client and the network.
 *  `HttpTransport` is the reqwest implementation.
 */
pub mod transport;

pub mod prelude {
    pub use crate::client::{ApiClient, ImageStream};
    pub use crate::error::{ApiError, DecodeError, TransportError};
    pub use crate::models::{
        ApiBaseItem, ApiBaseItemWrapper, CategoryInfo, Genre, ImageOptions, ImageType, Studio,
        User, UserConfiguration, UserItemData,
    };
    pub use crate::requests::ApiRequest;
    pub use crate::transport::{BodyStream, HttpTransport, Transport};
}
