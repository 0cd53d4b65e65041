//! Category page: a paged product grid with per-product quantity controls.

use std::collections::HashSet;

use grocer_commerce::browse::{Paginator, ProductSearch, WindowState};
use grocer_commerce::cart::{Adjustment, CartLine, QuantityLedger};
use grocer_commerce::catalog::{Category, Product};
use grocer_commerce::ids::ProductName;
use grocer_commerce::CommerceError;
use grocer_data::StorefrontApi;

use crate::context::ViewContext;
use crate::error::{ViewError, ViewResult};
use crate::guard::PendingGuard;
use crate::state::LoadState;

/// State for one mounted category page.
pub struct CategoryView<A> {
    ctx: ViewContext<A>,
    category: Category,
    products: Paginator<Product>,
    ledger: QuantityLedger,
    search: ProductSearch,
    pending: HashSet<ProductName>,
    state: LoadState,
}

impl<A: StorefrontApi> CategoryView<A> {
    /// Mount a view for `category`. Nothing is fetched until [`load`](Self::load).
    pub fn new(ctx: ViewContext<A>, category: Category) -> ViewResult<Self> {
        let products = Paginator::with_page_size(ctx.config.page_size)?;
        Ok(Self {
            ctx,
            category,
            products,
            ledger: QuantityLedger::new(),
            search: ProductSearch::default(),
            pending: HashSet::new(),
            state: LoadState::Loading,
        })
    }

    /// Fetch the category and reset the window and the quantities.
    ///
    /// On failure the view is left empty in the `Failed` state.
    pub async fn load(&mut self) -> ViewResult<()> {
        self.state = LoadState::Loading;
        let fetched = self.ctx.api.fetch_products_by_category(&self.category).await;

        match fetched {
            Ok(products) => {
                tracing::info!(category = %self.category, count = products.len(), "category loaded");
                self.ledger.initialize(&products);
                self.products.load(products);
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(category = %self.category, error = %e, "failed to load category");
                self.ledger.initialize(&[]);
                self.products.load(Vec::new());
                self.state = LoadState::Failed;
                Err(e.into())
            }
        }
    }

    pub fn show_more(&mut self) -> usize {
        self.products.show_more()
    }

    pub fn window(&self) -> WindowState {
        self.products.state()
    }

    pub fn visible(&self) -> &[Product] {
        self.products.visible()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn quantity(&self, name: &ProductName) -> Option<u32> {
        self.ledger.quantity(name)
    }

    /// Whether an add-to-cart for `name` is in flight.
    pub fn is_pending(&self, name: &ProductName) -> bool {
        self.pending.contains(name)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search.set_query(query);
    }

    /// Fetched products matching the search box, hidden pages included.
    pub fn search_results(&self) -> Vec<&Product> {
        self.search.filter(self.products.all())
    }

    /// Apply a +/- control to a product's chosen quantity.
    pub fn adjust(&mut self, name: &ProductName, direction: Adjustment) -> ViewResult<u32> {
        let product = self.product(name)?;
        if product.is_out_of_stock() {
            return Err(ViewError::OutOfStock(name.to_string()));
        }
        Ok(self.ledger.adjust(name, direction)?)
    }

    /// Persist a line for `name` at its chosen quantity.
    ///
    /// Bumps the cart badge on success; notifies the user on failure.
    pub async fn add_to_cart(&mut self, name: &ProductName) -> ViewResult<CartLine> {
        let token = self.ctx.session.require_token()?.clone();
        if self.pending.contains(name) {
            return Err(ViewError::Pending(name.to_string()));
        }

        let product = self.product(name)?;
        if product.is_out_of_stock() {
            return Err(ViewError::OutOfStock(name.to_string()));
        }
        let line = self.ledger.commit(product)?;

        let persisted = {
            let _pending = PendingGuard::insert(&mut self.pending, name.clone());
            self.ctx.api.persist_cart_line(&token, &line).await
        };

        match persisted {
            Ok(()) => {
                let count = self.ctx.badge.increment(1);
                tracing::info!(product = %name, quantity = line.quantity, cart_count = count, "added to cart");
                self.ctx.notifier.success(&format!("{} added to cart", name));
                Ok(line)
            }
            Err(e) => {
                tracing::warn!(product = %name, error = %e, "add to cart failed");
                self.ctx
                    .notifier
                    .error(&format!("Could not add {} to cart", name));
                Err(e.into())
            }
        }
    }

    /// Delete a product from the catalog; staff only.
    ///
    /// The product leaves the grid only once the service confirms.
    pub async fn delete_product(&mut self, name: &ProductName) -> ViewResult<()> {
        if !self.ctx.session.role().can_manage_products() {
            return Err(ViewError::Forbidden);
        }
        let token = self.ctx.session.require_token()?.clone();
        self.product(name)?;

        match self.ctx.api.delete_product(&token, name).await {
            Ok(()) => {
                self.products.remove_where(|p| &p.name == name);
                tracing::info!(product = %name, category = %self.category, "product deleted");
                self.ctx.notifier.success(&format!("{} deleted", name));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(product = %name, error = %e, "delete product failed");
                self.ctx
                    .notifier
                    .error(&format!("Could not delete {}", name));
                Err(e.into())
            }
        }
    }

    fn product(&self, name: &ProductName) -> ViewResult<&Product> {
        self.products
            .all()
            .iter()
            .find(|p| &p.name == name)
            .ok_or_else(|| {
                tracing::error!(product = %name, category = %self.category, "unknown product");
                CommerceError::ProductNotFound(name.to_string()).into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;
    use crate::session::Session;
    use grocer_commerce::ids::UserId;
    use grocer_commerce::money::{Currency, Money};
    use grocer_commerce::profile::Role;
    use grocer_data::{AuthToken, InMemoryStorefront, Operation};
    use std::sync::Arc;
    use std::time::Duration;

    fn product(name: &str, stock: i64) -> Product {
        Product::new(name, Money::new(1000, Currency::ILS), stock).with_category("dairy")
    }

    fn store() -> Arc<InMemoryStorefront> {
        Arc::new(InMemoryStorefront::new().with_products(vec![
            product("Milk", 4),
            product("Butter", 0),
            product("Yogurt", 2),
        ]))
    }

    fn signed_in(role: Role) -> Session {
        Session::signed_in(AuthToken::new("t"), UserId::new("u1"), role)
    }

    async fn mounted(
        store: &Arc<InMemoryStorefront>,
        session: Session,
    ) -> (CategoryView<Arc<InMemoryStorefront>>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let ctx = ViewContext::new(store.clone())
            .with_session(session)
            .with_notifier(notifier.clone());
        let mut view = CategoryView::new(ctx, Category::new("dairy")).unwrap();
        view.load().await.unwrap();
        (view, notifier)
    }

    #[tokio::test]
    async fn test_load_initializes_quantities() {
        let (view, _) = mounted(&store(), Session::anonymous()).await;
        assert_eq!(view.state(), LoadState::Ready);
        assert_eq!(view.visible().len(), 3);
        assert_eq!(view.quantity(&ProductName::new("Milk")), Some(1));
    }

    #[tokio::test]
    async fn test_failed_load_leaves_empty_view() {
        let store = store();
        store.fail(Operation::FetchProductsByCategory);
        let ctx = ViewContext::new(store.clone());
        let mut view = CategoryView::new(ctx, Category::new("dairy")).unwrap();

        assert!(view.load().await.is_err());
        assert_eq!(view.state(), LoadState::Failed);
        assert!(view.visible().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_stock_controls_disabled() {
        let (mut view, _) = mounted(&store(), signed_in(Role::Customer)).await;
        let butter = ProductName::new("Butter");

        assert_eq!(
            view.adjust(&butter, Adjustment::Increment),
            Err(ViewError::OutOfStock("Butter".into()))
        );
        assert!(matches!(
            view.add_to_cart(&butter).await,
            Err(ViewError::OutOfStock(_))
        ));
    }

    #[tokio::test]
    async fn test_add_to_cart_commits_chosen_quantity() {
        let store = store();
        let (mut view, notifier) = mounted(&store, signed_in(Role::Customer)).await;
        let milk = ProductName::new("Milk");

        view.adjust(&milk, Adjustment::Increment).unwrap();
        view.adjust(&milk, Adjustment::Increment).unwrap();
        let line = view.add_to_cart(&milk).await.unwrap();

        assert_eq!(line.quantity, 3);
        assert_eq!(view.ctx.badge.count(), 1);
        assert_eq!(store.cart()[0].products, vec![line]);
        assert_eq!(notifier.successes().len(), 1);
        assert!(!view.is_pending(&milk));
    }

    #[tokio::test]
    async fn test_cancelled_add_does_not_block_retry() {
        let store = store();
        store.stall(Operation::PersistCartLine);
        let (mut view, _) = mounted(&store, signed_in(Role::Customer)).await;
        let milk = ProductName::new("Milk");

        let first = tokio::time::timeout(Duration::from_millis(50), view.add_to_cart(&milk)).await;
        assert!(first.is_err());
        assert!(!view.is_pending(&milk));

        let line = view.add_to_cart(&milk).await.unwrap();
        assert_eq!(store.cart()[0].products, vec![line]);
        assert_eq!(view.ctx.badge.count(), 1);
    }

    #[tokio::test]
    async fn test_add_to_cart_failure_notifies() {
        let store = store();
        store.fail(Operation::PersistCartLine);
        let (mut view, notifier) = mounted(&store, signed_in(Role::Customer)).await;

        let result = view.add_to_cart(&ProductName::new("Milk")).await;
        assert!(matches!(result, Err(ViewError::Service(_))));
        assert_eq!(view.ctx.badge.count(), 0);
        assert_eq!(notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_product_is_an_error() {
        let (mut view, _) = mounted(&store(), Session::anonymous()).await;
        assert!(matches!(
            view.adjust(&ProductName::new("Cheese"), Adjustment::Increment),
            Err(ViewError::Commerce(CommerceError::ProductNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn test_delete_requires_staff_role() {
        let store = store();
        let (mut view, _) = mounted(&store, signed_in(Role::Customer)).await;
        assert_eq!(
            view.delete_product(&ProductName::new("Milk")).await,
            Err(ViewError::Forbidden)
        );
        assert!(!store.calls().contains(&Operation::DeleteProduct));
    }

    #[tokio::test]
    async fn test_delete_removes_after_confirmation() {
        let store = store();
        let (mut view, _) = mounted(&store, signed_in(Role::Moderator)).await;
        let milk = ProductName::new("Milk");

        store.fail(Operation::DeleteProduct);
        assert!(view.delete_product(&milk).await.is_err());
        assert_eq!(view.visible().len(), 3);

        store.recover(Operation::DeleteProduct);
        view.delete_product(&milk).await.unwrap();
        assert_eq!(view.visible().len(), 2);
        assert!(view.visible().iter().all(|p| p.name != milk));
    }

    #[tokio::test]
    async fn test_search_covers_hidden_pages() {
        let products: Vec<Product> = (0..20)
            .map(|i| product(&format!("Cheese {i}"), 1))
            .collect();
        let store = Arc::new(InMemoryStorefront::new().with_products(products));
        let (mut view, _) = mounted(&store, Session::anonymous()).await;

        view.set_search("cheese 19");
        assert_eq!(view.visible().len(), 16);
        assert_eq!(view.search_results().len(), 1);
    }
}
