//! Category browsing.

use anyhow::Result;
use grocer_commerce::catalog::{Category, Product};
use grocer_views::{CategoryView, Session};
use serde_json::json;

use super::{connect, view_context, BrowseArgs};
use crate::context::Context;
use crate::output::{price_label, stock_badge};

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let api = connect(args.fixture.as_deref(), ctx)?;
    let category = Category::new(args.category.trim());
    let mut view = CategoryView::new(view_context(api, Session::anonymous(), ctx), category)?;

    view.load().await?;
    for _ in 0..args.pages {
        if !view.window().has_more {
            break;
        }
        view.show_more();
    }

    let products: Vec<&Product> = match args.search.as_deref() {
        Some(query) => {
            view.set_search(query);
            view.search_results()
        }
        None => view.visible().iter().collect(),
    };
    let window = view.window();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "category": view.category(),
            "window": window,
            "products": products,
        }));
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} ({} of {})",
        view.category(),
        window.visible,
        window.total
    ));

    if products.is_empty() {
        ctx.output.info("No products found.");
        return Ok(());
    }

    let width = products
        .iter()
        .map(|p| p.name.as_str().chars().count())
        .max()
        .unwrap_or(0)
        .max(7);
    ctx.output.table_row(&["PRODUCT", "PRICE", "STOCK"], &[width, 24, 12]);
    for product in &products {
        ctx.output.table_row(
            &[
                product.name.as_str(),
                &price_label(product),
                &stock_badge(product),
            ],
            &[width, 24, 12],
        );
    }

    if args.search.is_none() && window.has_more {
        ctx.output.info(&format!(
            "{} more; use --pages to show them",
            window.total - window.visible
        ));
    }

    Ok(())
}
