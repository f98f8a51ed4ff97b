//! Config command implementation.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Path => show_path(ctx),
        ConfigCommand::Init { force } => init_config(ctx, force),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let feed = &ctx.config.feed;
    ctx.output.header("Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("File", &path.display().to_string()),
        None => ctx.output.kv("File", "(defaults)"),
    }

    ctx.output.header("Feed");
    ctx.output.kv("URL", ctx.feed_url.as_deref().unwrap_or(&feed.url));
    match feed.timeout_secs {
        Some(secs) => ctx.output.kv("Timeout", &format!("{}s", secs)),
        None => ctx.output.kv("Timeout", "none"),
    }
    if let Some(ref agent) = feed.user_agent {
        ctx.output.kv("User-Agent", agent);
    }

    ctx.output.header("Display");
    ctx.output
        .kv("Title width", &ctx.config.display.title_width.to_string());
    ctx.output
        .kv("Show images", &ctx.config.display.show_images.to_string());
    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    let path = ctx.config_path.as_ref().map(|p| p.display().to_string());
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "path": path }));
        return Ok(());
    }
    match path {
        Some(path) => ctx.output.line(&path),
        None => ctx.output.info("No config file found; using defaults."),
    }
    Ok(())
}

fn init_config(ctx: &Context, force: bool) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));
    Ok(())
}
