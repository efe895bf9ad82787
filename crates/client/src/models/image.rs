use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which image of an item to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageType {
    Primary,
    Art,
    Backdrop,
    Banner,
    Logo,
    Thumbnail,
}

impl ImageType {
    pub const ALL: [ImageType; 6] = [
        ImageType::Primary,
        ImageType::Art,
        ImageType::Backdrop,
        ImageType::Banner,
        ImageType::Logo,
        ImageType::Thumbnail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Primary => "Primary",
            ImageType::Art => "Art",
            ImageType::Backdrop => "Backdrop",
            ImageType::Banner => "Banner",
            ImageType::Logo => "Logo",
            ImageType::Thumbnail => "Thumbnail",
        }
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown image type: {0}")]
pub struct UnknownImageType(String);

impl FromStr for ImageType {
    type Err = UnknownImageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownImageType(s.to_string()))
    }
}

/// Optional sizing and selection parameters for an image request.
///
/// Every field is independent: fixed and max dimensions may be combined.
/// Aspect ratio is preserved server side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageOptions {
    /// Which image when an item has several (backdrops). `None` or 0 is the first.
    pub index: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// 0-100, only honoured for JPEG output.
    pub quality: Option<u8>,
}

impl ImageOptions {
    pub fn index(mut self, index: u32) -> Self {
        self.index = Some(index);
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn max_size(mut self, max_width: u32, max_height: u32) -> Self {
        self.max_width = Some(max_width);
        self.max_height = Some(max_height);
        self
    }

    pub fn max_width(mut self, max_width: u32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn max_height(mut self, max_height: u32) -> Self {
        self.max_height = Some(max_height);
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality);
        self
    }
}
