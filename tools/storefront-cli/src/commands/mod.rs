//! CLI command implementations.

pub mod browse;
pub mod categories;
pub mod config;
pub mod shop;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use storefront_core::Session;
use storefront_feed::FeedClient;

use crate::context::Context;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Only show products whose title contains this text (any case).
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show this category ("all" for every category).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Read commands from this file instead of the terminal.
    #[arg(short, long)]
    pub script: Option<PathBuf>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Print the path of the config file in use.
    Path,
    /// Write a default storefront.toml in the current directory.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Start a session and load the catalog from the configured feed.
///
/// A failed load is reported as a warning; the session carries on with an
/// empty catalog.
pub async fn open_session(ctx: &Context) -> Result<Session> {
    let feed = ctx.config.feed_config(ctx.feed_url.as_deref());
    let client = FeedClient::new(feed)?;
    let mut session = Session::new();
    ctx.output
        .debug(&format!("Session {} reading {}", session.id(), client.url()));

    let spinner = ctx.output.spinner(&format!("Loading {}", client.url()));
    let result = session.load(&client).await;
    spinner.finish_and_clear();

    match result {
        Ok(report) if report.is_empty_feed() => {
            ctx.output.warn("The feed returned no products.");
        }
        Ok(report) => {
            ctx.output.debug(&format!(
                "Loaded {} products in {} categories",
                report.products, report.categories
            ));
        }
        Err(e) => {
            ctx.output
                .warn(&format!("Could not load the catalog: {}", e));
        }
    }

    Ok(session)
}
