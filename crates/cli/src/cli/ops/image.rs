use std::path::PathBuf;

use clap::{Args, Subcommand};
use uuid::Uuid;

use client::prelude::{ApiError, ImageOptions, ImageType};

use crate::cli::op::{Op, OpContext};

crate::command_enum! {
    (Url, Url),
    (Fetch, Fetch),
}

pub type ImageCommand = Command;

/// Item images
#[derive(Args, Debug, Clone)]
pub struct Image {
    #[command(subcommand)]
    pub command: ImageCommand,
}

#[async_trait::async_trait]
impl Op for Image {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[derive(Args, Debug, Clone)]
pub struct ImageArgs {
    /// Item ID
    #[arg(long)]
    pub id: Uuid,

    /// Image type (primary, art, backdrop, banner, logo, thumbnail)
    #[arg(long = "type", default_value = "primary")]
    pub image_type: ImageType,

    /// Image index, for items with several backdrops
    #[arg(long)]
    pub index: Option<u32>,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long)]
    pub max_width: Option<u32>,

    #[arg(long)]
    pub max_height: Option<u32>,

    /// JPEG quality, 0-100
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: Option<u8>,
}

impl ImageArgs {
    fn options(&self) -> ImageOptions {
        ImageOptions {
            index: self.index,
            width: self.width,
            height: self.height,
            max_width: self.max_width,
            max_height: self.max_height,
            quality: self.quality,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// Print the download url for an image
#[derive(Args, Debug, Clone)]
pub struct Url {
    #[command(flatten)]
    pub image: ImageArgs,
}

#[async_trait::async_trait]
impl Op for Url {
    type Error = ImageError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        Ok(ctx
            .client
            .image_url(self.image.id, self.image.image_type, self.image.options()))
    }
}

/// Download an image to a file
#[derive(Args, Debug, Clone)]
pub struct Fetch {
    #[command(flatten)]
    pub image: ImageArgs,

    /// Where to write the image
    #[arg(long, short)]
    pub output: PathBuf,
}

#[async_trait::async_trait]
impl Op for Fetch {
    type Error = ImageError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let mut stream = ctx
            .client
            .get_image(self.image.id, self.image.image_type, self.image.options())
            .await?;

        let mut file = tokio::fs::File::create(&self.output).await?;
        let written = tokio::io::copy(&mut stream, &mut file).await?;
        tracing::debug!(bytes = written, path = %self.output.display(), "image saved");

        Ok(format!("Wrote {} bytes to {}", written, self.output.display()))
    }
}
