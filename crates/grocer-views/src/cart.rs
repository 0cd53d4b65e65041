//! Cart page.

use grocer_commerce::cart::{cart_total, line_count, remove_line, CartEntry};
use grocer_commerce::ids::ProductName;
use grocer_commerce::money::Money;
use grocer_data::StorefrontApi;

use crate::context::ViewContext;
use crate::error::ViewResult;
use crate::state::LoadState;

/// State for one mounted cart page.
pub struct CartView<A> {
    ctx: ViewContext<A>,
    entries: Vec<CartEntry>,
    state: LoadState,
}

impl<A: StorefrontApi> CartView<A> {
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            entries: Vec::new(),
            state: LoadState::Loading,
        }
    }

    /// Fetch the persisted cart. Anonymous sessions see an empty cart and
    /// make no call.
    pub async fn load(&mut self) -> ViewResult<()> {
        let Some(token) = self.ctx.session.token() else {
            self.entries.clear();
            self.state = LoadState::Ready;
            return Ok(());
        };

        self.state = LoadState::Loading;
        match self.ctx.api.fetch_cart_entries(token).await {
            Ok(entries) => {
                let lines = line_count(&entries);
                tracing::info!(lines, "cart loaded");
                self.ctx.badge.set(lines);
                self.entries = entries;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load cart");
                self.entries.clear();
                self.state = LoadState::Failed;
                Err(e.into())
            }
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn line_count(&self) -> usize {
        line_count(&self.entries)
    }

    /// Sum of every line's unit price times its quantity.
    pub fn total(&self) -> ViewResult<Money> {
        cart_total(&self.entries, self.ctx.config.currency).map_err(|e| {
            tracing::error!(error = %e, "cart total could not be computed");
            e.into()
        })
    }

    /// Checkout is offered only for a positive total.
    pub fn can_checkout(&self) -> bool {
        self.total().map(|t| t.is_positive()).unwrap_or(false)
    }

    /// Remove every line for `name`.
    ///
    /// The lines disappear locally before the service is asked. If the call
    /// fails the user is notified, and the lines come back only when
    /// `rollback_on_failure` is set.
    pub async fn remove(&mut self, name: &ProductName) -> ViewResult<()> {
        let token = self.ctx.session.require_token()?.clone();

        let previous = std::mem::take(&mut self.entries);
        self.entries = remove_line(&previous, name);
        let removed = line_count(&previous) - line_count(&self.entries);
        self.ctx.badge.decrement(removed);

        match self.ctx.api.delete_cart_line(&token, name).await {
            Ok(()) => {
                tracing::info!(product = %name, removed, "removed from cart");
                self.ctx
                    .notifier
                    .success(&format!("{} removed from cart", name));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(
                    product = %name,
                    error = %e,
                    rollback = self.ctx.config.rollback_on_failure,
                    "remove from cart failed"
                );
                if self.ctx.config.rollback_on_failure {
                    self.entries = previous;
                    self.ctx.badge.increment(removed);
                }
                self.ctx
                    .notifier
                    .error(&format!("Could not remove {} from cart", name));
                Err(e.into())
            }
        }
    }
}
