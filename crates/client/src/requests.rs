use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::models::{
    ApiBaseItem, ApiBaseItemWrapper, CategoryInfo, Genre, ImageOptions, ImageType, Studio, User,
    UserConfiguration,
};
use crate::query::QueryUrl;

/// A GET operation whose gzip+JSON response decodes into `Response`.
pub trait ApiRequest {
    type Response: DeserializeOwned;

    fn query(&self) -> QueryUrl;

    fn url(&self, api_base: &str) -> String {
        self.query().render(api_base)
    }
}

/// Fetch a single item, or the user's root folder when `id` is omitted.
#[derive(Debug, Clone)]
pub struct GetItem {
    pub id: Option<Uuid>,
    pub user_id: Uuid,
}

impl ApiRequest for GetItem {
    type Response = ApiBaseItemWrapper<ApiBaseItem>;

    fn query(&self) -> QueryUrl {
        // the nil id means "no id" for this endpoint only
        let id = self.id.filter(|id| !id.is_nil());
        QueryUrl::new("/item")
            .param("userId", self.user_id)
            .opt_param("id", id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetUsers;

impl ApiRequest for GetUsers {
    type Response = Vec<User>;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/users")
    }
}

#[derive(Debug, Clone)]
pub struct GetGenres {
    pub user_id: Uuid,
}

impl ApiRequest for GetGenres {
    type Response = Vec<CategoryInfo<Genre>>;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/genres").param("userId", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct GetGenre {
    pub name: String,
    pub user_id: Uuid,
}

impl ApiRequest for GetGenre {
    type Response = CategoryInfo<Genre>;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/genre")
            .param("userId", self.user_id)
            .param("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct GetStudios {
    pub user_id: Uuid,
}

impl ApiRequest for GetStudios {
    type Response = Vec<CategoryInfo<Studio>>;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/studios").param("userId", self.user_id)
    }
}

#[derive(Debug, Clone)]
pub struct GetStudio {
    pub name: String,
    pub user_id: Uuid,
}

impl ApiRequest for GetStudio {
    type Response = CategoryInfo<Studio>;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/studio")
            .param("userId", self.user_id)
            .param("name", &self.name)
    }
}

#[derive(Debug, Clone)]
pub struct GetUserConfiguration {
    pub user_id: Uuid,
}

impl ApiRequest for GetUserConfiguration {
    type Response = UserConfiguration;

    fn query(&self) -> QueryUrl {
        QueryUrl::new("/userconfiguration").param("userId", self.user_id)
    }
}

/// Image download. The response is raw image bytes, so this is not an
/// [`ApiRequest`].
#[derive(Debug, Clone)]
pub struct GetImage {
    pub item_id: Uuid,
    pub image_type: ImageType,
    pub options: ImageOptions,
}

impl GetImage {
    pub fn query(&self) -> QueryUrl {
        let o = &self.options;
        QueryUrl::new("/image")
            .param("id", self.item_id)
            .param("type", self.image_type)
            .opt_param("index", o.index)
            .opt_param("width", o.width)
            .opt_param("height", o.height)
            .opt_param("maxWidth", o.max_width)
            .opt_param("maxHeight", o.max_height)
            .opt_param("quality", o.quality)
    }

    pub fn url(&self, api_base: &str) -> String {
        self.query().render(api_base)
    }
}
