//! Cart listing and removal.

use anyhow::{bail, Result};
use grocer_commerce::ids::ProductName;
use grocer_data::AuthToken;
use grocer_views::{CartView, Session};
use serde_json::json;

use super::{connect, view_context, CartArgs};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let session = match args.token {
        Some(token) => Session::with_token(AuthToken::new(token)),
        None => Session::anonymous(),
    };
    let signed_in = session.is_signed_in();
    if !signed_in {
        ctx.output.warn("Not signed in; pass --token to see your cart");
    }

    let api = connect(args.fixture.as_deref(), ctx)?;
    let mut view = CartView::new(view_context(api, session, ctx));
    view.load().await?;

    if let Some(name) = args.remove.as_deref() {
        if !signed_in {
            bail!("Removing from the cart needs --token");
        }
        match view.remove(&ProductName::new(name)).await {
            Ok(()) => ctx.output.success(&format!("Removed {}", name)),
            Err(e) => ctx.output.warn(&format!("Remove failed: {}", e)),
        }
    }

    let total = view.total()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "entries": view.entries(),
            "lines": view.line_count(),
            "total": total.to_decimal(),
            "currency": total.currency,
            "can_checkout": view.can_checkout(),
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    if view.line_count() == 0 {
        ctx.output.info("Your cart is empty.");
        return Ok(());
    }

    for line in view.entries().iter().flat_map(|e| e.products.iter()) {
        let subtotal = line
            .subtotal()
            .map(|m| m.display())
            .unwrap_or_else(|| "overflow".to_string());
        ctx.output.list_item(&format!(
            "{} x{} @ {} = {}",
            line.name,
            line.quantity,
            line.unit_price.display(),
            subtotal
        ));
    }
    ctx.output.kv("total", &total.display());
    if !view.can_checkout() {
        ctx.output.warn("Nothing to pay for; checkout is disabled");
    }

    Ok(())
}
