use clap::{Args, Subcommand};
use uuid::Uuid;

use client::prelude::ApiError;

use crate::cli::op::{to_pretty_json, Op, OpContext};

crate::command_enum! {
    (List, List),
    (Get, Get),
}

pub type GenreCommand = Command;

/// Genres visible to a user
#[derive(Args, Debug, Clone)]
pub struct Genre {
    #[command(subcommand)]
    pub command: GenreCommand,
}

#[async_trait::async_trait]
impl Op for Genre {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenreError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// List all genres with their item counts
#[derive(Args, Debug, Clone)]
pub struct List {
    #[arg(long)]
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl Op for List {
    type Error = GenreError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let genres = ctx.client.get_all_genres(self.user_id).await?;
        Ok(to_pretty_json(&genres)?)
    }
}

/// Show one genre by name
#[derive(Args, Debug, Clone)]
pub struct Get {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl Op for Get {
    type Error = GenreError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let genre = ctx.client.get_genre(&self.name, self.user_id).await?;
        Ok(to_pretty_json(&genre)?)
    }
}
