//! Collaborator contract for the storefront's remote services.

use crate::ServiceError;
use async_trait::async_trait;
use grocer_commerce::cart::{CartEntry, CartLine};
use grocer_commerce::catalog::{Category, Product};
use grocer_commerce::ids::{ProductName, UserId};
use grocer_commerce::profile::{UserProfile, ValidatedProfile};
use std::fmt;
use std::sync::Arc;

/// An opaque session token sent as a bearer credential.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Tokens end up in logs through Debug; never print the secret.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

/// The catalog, cart and user services the storefront talks to.
///
/// Every call may fail; callers decide how to surface it.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Products listed under a category.
    async fn fetch_products_by_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, ServiceError>;

    /// Products currently on sale.
    async fn fetch_products_in_discount(&self) -> Result<Vec<Product>, ServiceError>;

    /// Remove a product from the catalog (staff only).
    async fn delete_product(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError>;

    /// The signed-in user's persisted cart.
    async fn fetch_cart_entries(&self, token: &AuthToken) -> Result<Vec<CartEntry>, ServiceError>;

    /// Delete every cart line for a product.
    async fn delete_cart_line(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError>;

    /// Add a committed line to the cart.
    async fn persist_cart_line(&self, token: &AuthToken, line: &CartLine)
        -> Result<(), ServiceError>;

    /// Load a user record.
    async fn fetch_user(&self, token: &AuthToken, user: &UserId)
        -> Result<UserProfile, ServiceError>;

    /// Save completed profile fields for a user.
    async fn submit_profile(
        &self,
        token: &AuthToken,
        user: &UserId,
        profile: &ValidatedProfile,
    ) -> Result<(), ServiceError>;
}

#[async_trait]
impl<T: StorefrontApi + ?Sized> StorefrontApi for Arc<T> {
    async fn fetch_products_by_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, ServiceError> {
        (**self).fetch_products_by_category(category).await
    }

    async fn fetch_products_in_discount(&self) -> Result<Vec<Product>, ServiceError> {
        (**self).fetch_products_in_discount().await
    }

    async fn delete_product(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        (**self).delete_product(token, product).await
    }

    async fn fetch_cart_entries(&self, token: &AuthToken) -> Result<Vec<CartEntry>, ServiceError> {
        (**self).fetch_cart_entries(token).await
    }

    async fn delete_cart_line(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        (**self).delete_cart_line(token, product).await
    }

    async fn persist_cart_line(
        &self,
        token: &AuthToken,
        line: &CartLine,
    ) -> Result<(), ServiceError> {
        (**self).persist_cart_line(token, line).await
    }

    async fn fetch_user(
        &self,
        token: &AuthToken,
        user: &UserId,
    ) -> Result<UserProfile, ServiceError> {
        (**self).fetch_user(token, user).await
    }

    async fn submit_profile(
        &self,
        token: &AuthToken,
        user: &UserId,
        profile: &ValidatedProfile,
    ) -> Result<(), ServiceError> {
        (**self).submit_profile(token, user, profile).await
    }
}
