//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod config;
pub mod profile;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use grocer_commerce::cart::CartEntry;
use grocer_commerce::catalog::Product;
use grocer_commerce::profile::UserProfile;
use grocer_data::{HttpStorefrontApi, InMemoryStorefront, ReqwestTransport, StorefrontApi};
use grocer_views::{Session, ViewContext};
use serde::Deserialize;

use crate::context::Context;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Category tag (e.g. beverages, fruit, spices).
    pub category: String,

    /// Read products from a JSON fixture instead of the API.
    #[arg(short, long)]
    pub fixture: Option<String>,

    /// Extra pages to reveal after the first.
    #[arg(short, long, default_value = "0")]
    pub pages: usize,

    /// Only list products whose name contains this text.
    #[arg(short, long)]
    pub search: Option<String>,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Read the cart from a JSON fixture instead of the API.
    #[arg(short, long)]
    pub fixture: Option<String>,

    /// Session token.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Remove every line for this product before printing.
    #[arg(long)]
    pub remove: Option<String>,
}

/// Arguments for the profile command.
#[derive(Args)]
pub struct ProfileArgs {
    /// Primary phone number.
    #[arg(long)]
    pub phone: String,

    /// Secondary phone number.
    #[arg(long)]
    pub phone2: Option<String>,

    /// City.
    #[arg(long)]
    pub city: String,

    /// Street.
    #[arg(long)]
    pub street: String,

    /// House number.
    #[arg(long)]
    pub house: Option<String>,

    /// Submit for this user id after validation (needs --token).
    #[arg(long, requires = "token")]
    pub user: Option<String>,

    /// Session token.
    #[arg(short, long)]
    pub token: Option<String>,

    /// Submit to a JSON fixture store instead of the API.
    #[arg(short, long)]
    pub fixture: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Offline data for the in-memory store.
#[derive(Debug, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub cart: Vec<CartEntry>,
    #[serde(default)]
    pub users: Vec<UserProfile>,
}

impl Fixture {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture: {}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse fixture: {}", path))
    }

    pub fn into_store(self) -> InMemoryStorefront {
        self.users.into_iter().fold(
            InMemoryStorefront::new()
                .with_products(self.products)
                .with_cart(self.cart),
            InMemoryStorefront::with_user,
        )
    }
}

/// Shared handle to whichever storefront backs a command.
pub type Api = Arc<dyn StorefrontApi>;

/// The fixture store when a fixture is given, the HTTP API otherwise.
pub fn connect(fixture: Option<&str>, ctx: &Context) -> Result<Api> {
    if let Some(path) = fixture {
        let path = ctx.resolve_path(path);
        ctx.output.debug(&format!("Using fixture {}", path.display()));
        let store = Fixture::load(&path.to_string_lossy())?.into_store();
        return Ok(Arc::new(store));
    }

    let api = &ctx.config.api;
    ctx.output.debug(&format!("Using storefront API at {}", api.base_url));
    let transport =
        ReqwestTransport::new(api.timeout()).context("Failed to create HTTP client")?;
    Ok(Arc::new(HttpStorefrontApi::new(transport, &api.base_url)))
}

/// Controller context for a command run.
pub fn view_context(api: Api, session: Session, ctx: &Context) -> ViewContext<Api> {
    ViewContext::new(api)
        .with_session(session)
        .with_config(ctx.config.view_config())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses_service_shapes() {
        let fixture: Fixture = serde_json::from_str(
            r#"{
                "products": [{"product_name": "Cola", "price": 6.9, "quantity_in_stock": 4, "category": "beverages"}],
                "cart": [{"_id": "c1", "products": [{"product_name": "Cola", "product_price": 6.9}]}],
                "users": [{"_id": "u1", "role": "admin"}]
            }"#,
        )
        .unwrap();

        assert_eq!(fixture.products.len(), 1);
        assert_eq!(fixture.cart[0].products[0].quantity, 1);
        let store = fixture.into_store();
        assert_eq!(store.products().len(), 1);
    }
}
