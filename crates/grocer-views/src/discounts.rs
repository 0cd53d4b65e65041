//! Discounts carousel.

use grocer_commerce::catalog::Product;
use grocer_commerce::ids::ProductName;
use grocer_commerce::promo::ImageLoadTracker;
use grocer_data::StorefrontApi;

use crate::context::ViewContext;
use crate::error::ViewResult;
use crate::state::LoadState;

/// State for the carousel of products on sale.
pub struct DiscountsView<A> {
    ctx: ViewContext<A>,
    products: Vec<Product>,
    images: ImageLoadTracker,
    state: LoadState,
}

impl<A: StorefrontApi> DiscountsView<A> {
    pub fn new(ctx: ViewContext<A>) -> Self {
        Self {
            ctx,
            products: Vec::new(),
            images: ImageLoadTracker::new(),
            state: LoadState::Loading,
        }
    }

    pub async fn load(&mut self) -> ViewResult<()> {
        self.state = LoadState::Loading;
        self.images.reset();

        match self.ctx.api.fetch_products_in_discount().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "discounts loaded");
                self.products = products;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load discounts");
                self.products.clear();
                self.state = LoadState::Failed;
                Err(e.into())
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Record that a slide's image finished loading.
    pub fn image_loaded(&mut self, name: &ProductName) -> bool {
        self.images.mark_loaded(name)
    }

    /// Slides paired with whether their image is ready; the rest show a
    /// placeholder.
    pub fn slides(&self) -> impl Iterator<Item = (&Product, bool)> {
        self.products
            .iter()
            .map(|p| (p, self.images.is_loaded(&p.name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_commerce::money::{Currency, DiscountPercent, Money};
    use grocer_data::InMemoryStorefront;

    #[tokio::test]
    async fn test_only_sale_products_and_image_tracking() {
        let store = InMemoryStorefront::new().with_products(vec![
            Product::new("Salmon", Money::new(8990, Currency::ILS), 3)
                .with_sale(DiscountPercent::new(15).unwrap()),
            Product::new("Rice", Money::new(990, Currency::ILS), 9),
        ]);
        let mut view = DiscountsView::new(ViewContext::new(store));
        view.load().await.unwrap();

        assert_eq!(view.products().len(), 1);
        let salmon = ProductName::new("Salmon");
        assert!(view.slides().all(|(_, loaded)| !loaded));
        assert!(view.image_loaded(&salmon));
        assert!(!view.image_loaded(&salmon));
        assert!(view.slides().all(|(_, loaded)| loaded));
    }
}
