//! Storefront services over HTTP.

use crate::api::{AuthToken, StorefrontApi};
use crate::request::{encode_segment, Method, Request};
use crate::transport::Transport;
use crate::ServiceError;
use async_trait::async_trait;
use grocer_commerce::cart::{CartEntry, CartLine};
use grocer_commerce::catalog::{Category, Product};
use grocer_commerce::ids::{ProductName, UserId};
use grocer_commerce::profile::{UserProfile, ValidatedProfile};
use serde::de::DeserializeOwned;

/// [`StorefrontApi`] that maps each call to one JSON request.
///
/// | call | request |
/// |---|---|
/// | products by category | `GET /products/category/{category}` |
/// | products in discount | `GET /products/discounts` |
/// | delete product | `DELETE /products/{name}` |
/// | cart entries | `GET /carts` |
/// | persist line | `POST /carts` |
/// | delete line | `DELETE /carts/{name}` |
/// | user | `GET /users/{id}` |
/// | submit profile | `PATCH /users/{id}` |
pub struct HttpStorefrontApi<T: Transport> {
    transport: T,
    base_url: String,
}

impl<T: Transport> HttpStorefrontApi<T> {
    /// Create an adapter rooted at `base_url`.
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, request: Request) -> Result<crate::Response, ServiceError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = method.as_str(), %url, "storefront request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), %url, error = %e, "storefront request failed");
            e
        })?;

        response.error_for_status().map_err(|e| {
            tracing::warn!(method = method.as_str(), %url, error = %e, "storefront error status");
            e
        })
    }

    async fn get_json<R: DeserializeOwned>(&self, request: Request) -> Result<R, ServiceError> {
        self.execute(request.accept("application/json"))
            .await?
            .json()
    }
}

#[async_trait]
impl<T: Transport> StorefrontApi for HttpStorefrontApi<T> {
    async fn fetch_products_by_category(
        &self,
        category: &Category,
    ) -> Result<Vec<Product>, ServiceError> {
        let path = format!("/products/category/{}", encode_segment(category.as_str()));
        self.get_json(Request::new(Method::Get, self.url(&path)))
            .await
    }

    async fn fetch_products_in_discount(&self) -> Result<Vec<Product>, ServiceError> {
        self.get_json(Request::new(Method::Get, self.url("/products/discounts")))
            .await
    }

    async fn delete_product(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        let path = format!("/products/{}", encode_segment(product.as_str()));
        let request = Request::new(Method::Delete, self.url(&path)).bearer_auth(token);
        self.execute(request).await.map(|_| ())
    }

    async fn fetch_cart_entries(&self, token: &AuthToken) -> Result<Vec<CartEntry>, ServiceError> {
        let request = Request::new(Method::Get, self.url("/carts")).bearer_auth(token);
        self.get_json(request).await
    }

    async fn delete_cart_line(
        &self,
        token: &AuthToken,
        product: &ProductName,
    ) -> Result<(), ServiceError> {
        let path = format!("/carts/{}", encode_segment(product.as_str()));
        let request = Request::new(Method::Delete, self.url(&path)).bearer_auth(token);
        self.execute(request).await.map(|_| ())
    }

    async fn persist_cart_line(
        &self,
        token: &AuthToken,
        line: &CartLine,
    ) -> Result<(), ServiceError> {
        let request = Request::new(Method::Post, self.url("/carts"))
            .bearer_auth(token)
            .json(line)?;
        self.execute(request).await.map(|_| ())
    }

    async fn fetch_user(
        &self,
        token: &AuthToken,
        user: &UserId,
    ) -> Result<UserProfile, ServiceError> {
        let path = format!("/users/{}", encode_segment(user.as_str()));
        let request = Request::new(Method::Get, self.url(&path)).bearer_auth(token);
        self.get_json(request).await
    }

    async fn submit_profile(
        &self,
        token: &AuthToken,
        user: &UserId,
        profile: &ValidatedProfile,
    ) -> Result<(), ServiceError> {
        let path = format!("/users/{}", encode_segment(user.as_str()));
        let request = Request::new(Method::Patch, self.url(&path))
            .bearer_auth(token)
            .json(profile)?;
        self.execute(request).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Response;
    use grocer_commerce::money::{Currency, DiscountPercent, Money};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Replies with a canned response and remembers what was sent.
    struct CannedTransport {
        status: u16,
        body: Vec<u8>,
        sent: Mutex<Vec<Request>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.as_bytes().to_vec(),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn last(&self) -> Request {
            self.sent.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait]
    impl Transport for CannedTransport {
        async fn send(&self, request: Request) -> Result<Response, ServiceError> {
            self.sent.lock().unwrap().push(request);
            Ok(Response::new(self.status, HashMap::new(), self.body.clone()))
        }
    }

    fn token() -> AuthToken {
        AuthToken::new("secret")
    }

    #[tokio::test]
    async fn test_fetch_category_builds_encoded_url() {
        let api = HttpStorefrontApi::new(
            CannedTransport::new(200, r#"[{"product_name":"Cola","price":6.9,"quantity_in_stock":3}]"#),
            "http://api.local/",
        );

        let products = api
            .fetch_products_by_category(&Category::new("soft drinks"))
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price, Money::new(690, Currency::ILS));
        let sent = api.transport.last();
        assert_eq!(sent.method, Method::Get);
        assert_eq!(sent.url, "http://api.local/products/category/soft%20drinks");
    }

    #[tokio::test]
    async fn test_persist_line_posts_json_with_token() {
        let api = HttpStorefrontApi::new(CannedTransport::new(201, ""), "http://api.local");
        let line = CartLine {
            name: ProductName::new("Cola"),
            quantity: 2,
            unit_price: Money::new(621, Currency::ILS),
            image: "cola.jpg".to_string(),
            sale: true,
            discount: DiscountPercent::new(10).unwrap(),
        };

        api.persist_cart_line(&token(), &line).await.unwrap();

        let sent = api.transport.last();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url, "http://api.local/carts");
        assert_eq!(sent.header_value("Authorization"), Some("Bearer secret"));
        let body: serde_json::Value = serde_json::from_slice(sent.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["product_name"], "Cola");
        assert_eq!(body["quantity"], 2);
        assert_eq!(body["product_price"], 6.21);
    }

    #[tokio::test]
    async fn test_delete_line_maps_status() {
        let api = HttpStorefrontApi::new(CannedTransport::new(401, ""), "http://api.local");
        let err = api
            .delete_cart_line(&token(), &ProductName::new("Cola"))
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::Unauthorized);
        assert_eq!(api.transport.last().method, Method::Delete);
    }

    #[tokio::test]
    async fn test_bad_body_is_parse_error() {
        let api = HttpStorefrontApi::new(CannedTransport::new(200, "<html>"), "http://api.local");
        let err = api.fetch_cart_entries(&token()).await.unwrap_err();
        assert!(matches!(err, ServiceError::ParseError(_)));
    }
}
