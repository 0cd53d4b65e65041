//! In-memory storefront services (for development, fixtures and tests).

use crate::api::{AuthToken, StorefrontApi};
use crate::ServiceError;
use async_trait::async_trait;
use grocer_commerce::cart::{remove_line, CartEntry, CartLine};
use grocer_commerce::catalog::{Category, Product};
use grocer_commerce::ids::{ProductName, UserId};
use grocer_commerce::profile::{ProfileForm, UserProfile, ValidatedProfile};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

/// A collaborator call, used to inject failures and inspect traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchProductsByCategory,
    FetchProductsInDiscount,
    DeleteProduct,
    FetchCartEntries,
    DeleteCartLine,
    PersistCartLine,
    FetchUser,
    SubmitProfile,
}

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    cart: Vec<CartEntry>,
    users: HashMap<UserId, UserProfile>,
    submitted: Vec<(UserId, ProfileForm)>,
    failing: HashSet<Operation>,
    stalled: HashSet<Operation>,
    calls: Vec<Operation>,
}

/// Storefront services backed by in-process collections.
///
/// When a token is configured, authenticated calls with any other token are
/// rejected with [`ServiceError::Unauthorized`].
#[derive(Debug, Default)]
pub struct InMemoryStorefront {
    state: Mutex<State>,
    token: Option<AuthToken>,
}

impl InMemoryStorefront {
    /// Create an empty store that accepts any token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only accept this token on authenticated calls.
    pub fn with_token(mut self, token: AuthToken) -> Self {
        self.token = Some(token);
        self
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.lock().products = products;
        self
    }

    pub fn with_cart(self, cart: Vec<CartEntry>) -> Self {
        self.lock().cart = cart;
        self
    }

    pub fn with_user(self, user: UserProfile) -> Self {
        self.lock().users.insert(user.id.clone(), user);
        self
    }

    /// Make every later call of `operation` fail until [`recover`](Self::recover).
    pub fn fail(&self, operation: Operation) {
        self.lock().failing.insert(operation);
    }

    pub fn recover(&self, operation: Operation) {
        self.lock().failing.remove(&operation);
    }

    /// Make the next call of `operation` never resolve. Later calls behave
    /// normally.
    pub fn stall(&self, operation: Operation) {
        self.lock().stalled.insert(operation);
    }

    /// Operations called so far, in order.
    pub fn calls(&self) -> Vec<Operation> {
        self.lock().calls.clone()
    }

    /// Snapshot of the persisted cart.
    pub fn cart(&self) -> Vec<CartEntry> {
        self.lock().cart.clone()
    }

    /// Snapshot of the catalog.
    pub fn products(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Profiles submitted so far.
    pub fn submitted_profiles(&self) -> Vec<(UserId, ProfileForm)> {
        self.lock().submitted.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means a test panicked mid-call; the data is
        // still usable.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn settle(&self, operation: Operation) {
        let stalled = {
            let mut state = self.lock();
            let stalled = state.stalled.remove(&operation);
            if stalled {
                state.calls.push(operation);
            }
            stalled
        };
        if stalled {
            std::future::pending::<()>().await;
        }
    }

    fn enter(&self, operation: Operation) -> Result<MutexGuard<'_, State>, ServiceError> {
        let mut state = self.lock();
        state.calls.push(operation);
        if state.failing.contains(&operation) {
            return Err(ServiceError::HttpError {
                status: 503,
                message: format!("{:?} unavailable", operation),
            });
        }
        Ok(state)
    }

    fn enter_authenticated(
        &self,
        operation: Operation,
        token: &AuthToken,
    ) -> Result<MutexGuard<'_, State>, ServiceError> {
        let state = self.enter(operation)?;
        match &self.token {
            Some(expected) if expected != token => Err(ServiceError::Unauthorized),
            _ => Ok(state),
        }
    }
}

#[async_trait]
impl StorefrontApi for InMemoryStorefront {
    async fn fetch_products_by_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, ServiceError> {
        self.settle(Operation::FetchProductsByCategory).await;
        let state = self.enter(Operation::FetchProductsByCategory)?;
        Ok(state
            .products
            .iter()
            .filter(|p| &p.category == category)
            .cloned()
            .collect())
    }

    async fn fetch_products_in_discount(&self) -> Result<Vec<Product>, ServiceError> {
        self.settle(Operation::FetchProductsInDiscount).await;
        let state = self.enter(Operation::FetchProductsInDiscount)?;
        Ok(state.products.iter().filter(|p| p.sale).cloned().collect())
    }

    async fn delete_product(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        self.settle(Operation::DeleteProduct).await;
        let mut state = self.enter_authenticated(Operation::DeleteProduct, token)?;
        let before = state.products.len();
        state.products.retain(|p| &p.name != product);
        if state.products.len() == before {
            return Err(ServiceError::NotFound(product.to_string()));
        }
        Ok(())
    }

    async fn fetch_cart_entries(&self, token: &AuthToken) -> Result<Vec<CartEntry>, ServiceError> {
        self.settle(Operation::FetchCartEntries).await;
        let state = self.enter_authenticated(Operation::FetchCartEntries, token)?;
        Ok(state.cart.clone())
    }

    async fn delete_cart_line(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        self.settle(Operation::DeleteCartLine).await;
        let mut state = self.enter_authenticated(Operation::DeleteCartLine, token)?;
        state.cart = remove_line(&state.cart, product);
        Ok(())
    }

    async fn persist_cart_line(
        &self,
        token: &AuthToken,
        line: &CartLine,
    ) -> Result<(), ServiceError> {
        self.settle(Operation::PersistCartLine).await;
        let mut state = self.enter_authenticated(Operation::PersistCartLine, token)?;
        match state.cart.first_mut() {
            Some(entry) => entry.products.push(line.clone()),
            None => state.cart.push(CartEntry::new(vec![line.clone()])),
        }
        Ok(())
    }

    async fn fetch_user(
        &self,
        token: &AuthToken,
        user: &UserId,
    ) -> Result<UserProfile, ServiceError> {
        self.settle(Operation::FetchUser).await;
        let state = self.enter_authenticated(Operation::FetchUser, token)?;
        state
            .users
            .get(user)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(user.to_string()))
    }

    async fn submit_profile(
        &self,
        token: &AuthToken,
        user: &UserId,
        profile: &ValidatedProfile,
    ) -> Result<(), ServiceError> {
        self.settle(Operation::SubmitProfile).await;
        let mut state = self.enter_authenticated(Operation::SubmitProfile, token)?;
        state.submitted.push((user.clone(), profile.form().clone()));
        Ok(())
    }
}
