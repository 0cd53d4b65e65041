//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("timeout_ms", &config.api.timeout_ms.to_string());

    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &config.catalog.page_size.to_string());
    ctx.output.kv("currency", config.catalog.currency.code());

    ctx.output.info("[cart]");
    ctx.output.kv(
        "rollback_on_failure",
        &config.cart.rollback_on_failure.to_string(),
    );

    ctx.output.info("[log]");
    ctx.output.kv("level", &config.log.level);
    ctx.output.kv("format", &format!("{:?}", config.log.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("grocer.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    // Loading already rejected hard errors; only warnings remain.
    let mut warnings: Vec<String> = Vec::new();

    let base_url = &ctx.config.api.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        warnings.push(format!("api.base_url '{}' has no http(s) scheme", base_url));
    }
    if ctx.config.api.timeout_ms == 0 {
        warnings.push("api.timeout_ms is 0; every request will time out".to_string());
    }
    if ctx.config.catalog.page_size > 100 {
        warnings.push(format!(
            "catalog.page_size {} is unusually large",
            ctx.config.catalog.page_size
        ));
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
