use clap::{Args, Subcommand};
use uuid::Uuid;

use client::prelude::ApiError;

use crate::cli::op::{to_pretty_json, Op, OpContext};

crate::command_enum! {
    (List, List),
    (Get, Get),
}

pub type StudioCommand = Command;

/// Studios visible to a user
#[derive(Args, Debug, Clone)]
pub struct Studio {
    #[command(subcommand)]
    pub command: StudioCommand,
}

#[async_trait::async_trait]
impl Op for Studio {
    type Error = OpError;
    type Output = OpOutput;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        self.command.execute(ctx).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// List all studios with their item counts
#[derive(Args, Debug, Clone)]
pub struct List {
    #[arg(long)]
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl Op for List {
    type Error = StudioError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let studios = ctx.client.get_all_studios(self.user_id).await?;
        Ok(to_pretty_json(&studios)?)
    }
}

/// Show one studio by name
#[derive(Args, Debug, Clone)]
pub struct Get {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub user_id: Uuid,
}

#[async_trait::async_trait]
impl Op for Get {
    type Error = StudioError;
    type Output = String;

    async fn execute(&self, ctx: &OpContext) -> Result<Self::Output, Self::Error> {
        let studio = ctx.client.get_studio(&self.name, self.user_id).await?;
        Ok(to_pretty_json(&studio)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::test_support::context_serving;

    #[tokio::test]
    async fn test_list_prints_json() {
        let fixture = serde_json::json!([
            { "Item": { "Id": Uuid::nil(), "Name": "Pixar" }, "ItemCount": 4 }
        ]);
        let ctx = context_serving("/studios", fixture.clone()).await;

        let output = List {
            user_id: Uuid::new_v4(),
        }
        .execute(&ctx)
        .await
        .unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed, fixture);
    }

    #[tokio::test]
    async fn test_empty_list_prints_empty_array() {
        let ctx = context_serving("/studios", serde_json::json!([])).await;

        let output = List {
            user_id: Uuid::new_v4(),
        }
        .execute(&ctx)
        .await
        .unwrap();

        assert_eq!(output, "[]");
    }
}
