use std::pin::Pin;

use serde::de::DeserializeOwned;
use tokio::io::AsyncRead;
use url::Url;
use uuid::Uuid;

use crate::decode::{decode_json, gunzip};
use crate::error::ApiError;
use crate::models::{
    ApiBaseItem, ApiBaseItemWrapper, CategoryInfo, Genre, ImageOptions, ImageType, Studio, User,
    UserConfiguration,
};
use crate::requests::{
    ApiRequest, GetGenre, GetGenres, GetImage, GetItem, GetStudio, GetStudios,
    GetUserConfiguration, GetUsers,
};
use crate::transport::{HttpTransport, Transport};

/// Decompressed image bytes. Dropping it closes the underlying connection.
pub type ImageStream = Pin<Box<dyn AsyncRead + Send>>;

/// Client for the media browser API.
///
/// Holds nothing but the base url and the transport, so clones are cheap
/// and calls from different tasks never interact.
#[derive(Debug, Clone)]
pub struct ApiClient<T = HttpTransport> {
    api_base: String,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new(api_base: &Url) -> Result<Self, ApiError> {
        Ok(Self::with_transport(
            api_base.as_str(),
            HttpTransport::new()?,
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(api_base: impl Into<String>, transport: T) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            api_base,
            transport,
        }
    }

    /// Base url every request url starts with, without a trailing `/`.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Url for downloading an image. Builds a string only; nothing is sent.
    pub fn image_url(&self, item_id: Uuid, image_type: ImageType, options: ImageOptions) -> String {
        GetImage {
            item_id,
            image_type,
            options,
        }
        .url(&self.api_base)
    }

    /// GET `url`, gunzip the body and parse it as JSON.
    ///
    /// A transport failure is returned before any decoding starts.
    pub async fn fetch_and_decode<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        let body = self.transport.get(url).await?;
        let value: R = decode_json(body).await.inspect_err(|e| {
            tracing::debug!(url, error = %e, "failed to decode response");
        })?;
        Ok(value)
    }

    /// GET `url` and hand back the decompressed body unparsed.
    pub async fn get_image_stream(&self, url: &str) -> Result<ImageStream, ApiError> {
        let body = self.transport.get(url).await?;
        Ok(Box::pin(gunzip(body)))
    }

    pub async fn get_image(
        &self,
        item_id: Uuid,
        image_type: ImageType,
        options: ImageOptions,
    ) -> Result<ImageStream, ApiError> {
        let url = self.image_url(item_id, image_type, options);
        self.get_image_stream(&url).await
    }

    pub async fn call<R: ApiRequest>(&self, request: R) -> Result<R::Response, ApiError> {
        let url = request.url(&self.api_base);
        self.fetch_and_decode(&url).await
    }

    /// Get an item. With `id` omitted (or nil) the server returns the
    /// user's root folder.
    pub async fn get_item(
        &self,
        id: Option<Uuid>,
        user_id: Uuid,
    ) -> Result<ApiBaseItemWrapper<ApiBaseItem>, ApiError> {
        self.call(GetItem { id, user_id }).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        self.call(GetUsers).await
    }

    pub async fn get_all_genres(&self, user_id: Uuid) -> Result<Vec<CategoryInfo<Genre>>, ApiError> {
        self.call(GetGenres { user_id }).await
    }

    pub async fn get_genre(&self, name: &str, user_id: Uuid) -> Result<CategoryInfo<Genre>, ApiError> {
        self.call(GetGenre {
            name: name.to_string(),
            user_id,
        })
        .await
    }

    pub async fn get_all_studios(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CategoryInfo<Studio>>, ApiError> {
        self.call(GetStudios { user_id }).await
    }

    pub async fn get_studio(
        &self,
        name: &str,
        user_id: Uuid,
    ) -> Result<CategoryInfo<Studio>, ApiError> {
        self.call(GetStudio {
            name: name.to_string(),
            user_id,
        })
        .await
    }

    /// Get the user's personal configuration.
    pub async fn get_user_configuration(&self, user_id: Uuid) -> Result<UserConfiguration, ApiError> {
        self.call(GetUserConfiguration { user_id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::transport::BodyStream;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn get(&self, _url: &str) -> Result<BodyStream, TransportError> {
            unreachable!("image_url must not touch the network")
        }
    }

    fn client(base: &str) -> ApiClient<Unreachable> {
        ApiClient::with_transport(base, Unreachable)
    }

    #[test]
    fn test_image_url_max_width_only() {
        let id = Uuid::parse_str("a1b2c3d4-e5f6-4711-8899-aabbccddeeff").unwrap();
        let url = client("http://server/api").image_url(
            id,
            ImageType::Primary,
            ImageOptions::default().max_width(200),
        );

        assert_eq!(
            url,
            "http://server/api/image?id=a1b2c3d4-e5f6-4711-8899-aabbccddeeff&type=Primary&maxWidth=200"
        );
        for key in ["index=", "width=", "height=", "maxHeight=", "quality="] {
            assert!(!url.contains(&format!("&{key}")), "unexpected {key} in {url}");
        }
    }

    #[test]
    fn test_image_url_is_deterministic() {
        let id = Uuid::new_v4();
        let c = client("http://server/api/");
        let options = ImageOptions::default().size(100, 150).quality(75);

        let first = c.image_url(id, ImageType::Logo, options);
        for _ in 0..10 {
            assert_eq!(c.image_url(id, ImageType::Logo, options), first);
        }
    }

    #[test]
    fn test_image_url_key_present_iff_value_present() {
        let id = Uuid::new_v4();
        let c = client("http://server/api");
        let keys = ["index", "width", "height", "maxWidth", "maxHeight", "quality"];

        // walk every subset of the six optional parameters
        for mask in 0u32..64 {
            let set = |bit: u32| mask & (1 << bit) != 0;
            let options = ImageOptions {
                index: set(0).then_some(1),
                width: set(1).then_some(2),
                height: set(2).then_some(3),
                max_width: set(3).then_some(4),
                max_height: set(4).then_some(5),
                quality: set(5).then_some(6),
            };
            let url = c.image_url(id, ImageType::Primary, options);
            let query = url.split_once('?').unwrap().1;
            let present: Vec<&str> = query
                .split('&')
                .map(|pair| pair.split_once('=').unwrap().0)
                .collect();

            let mut expected = vec!["id", "type"];
            expected.extend(
                keys.iter()
                    .enumerate()
                    .filter(|(bit, _)| set(*bit as u32))
                    .map(|(_, key)| *key),
            );
            assert_eq!(present, expected, "mask {mask:#08b}");
        }
    }

    #[test]
    fn test_api_base_trailing_slash_trimmed() {
        assert_eq!(client("http://server/api/").api_base(), "http://server/api");
    }
}
