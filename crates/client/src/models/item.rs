use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A library item as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiBaseItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premiere_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taglines: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub studios: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub community_rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_index_number: Option<i32>,
    /// Runtime in 100ns ticks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_time_ticks: Option<i64>,

    // image paths on the server's filesystem; fetch through the image endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backdrop_image_paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub art_image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_image_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_image_path: Option<String>,
}

/// What the requesting user has done with an item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserItemData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default)]
    pub playback_position_ticks: i64,
    #[serde(default)]
    pub play_count: u32,
    #[serde(default)]
    pub is_favorite: bool,
}

/// An item plus the user-scoped and hierarchy information the server
/// attaches to it. Folders carry their children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiBaseItemWrapper<T> {
    pub item: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_item_data: Option<UserItemData>,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ApiBaseItemWrapper<T>>,
    #[serde(default)]
    pub is_folder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    /// Server-side type name, e.g. `Movie` or `Folder`.
    #[serde(rename = "Type", default)]
    pub item_type: String,
}

impl<T> ApiBaseItemWrapper<T> {
    pub fn is_type(&self, name: &str) -> bool {
        self.item_type.eq_ignore_ascii_case(name)
    }
}
