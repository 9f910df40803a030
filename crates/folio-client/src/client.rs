//! Typed methods for every gateway endpoint.

use std::time::Duration;

use folio_core::normalize::{
    normalize_book, normalize_category, normalize_inventory, normalize_page, normalize_price,
    normalize_review, normalize_user,
};
use folio_core::{Book, Category, GatewayConfig, Inventory, PageEnvelope, Price, Review, UserProfile};
use folio_session::{LoginResponse, SessionStore};
use reqwest::{Method, RequestBuilder, StatusCode, redirect};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ApiError;
use crate::requests::{
    BookDetails, CategoryRequest, InventoryRequest, LoginRequest, NewBook, PriceRequest,
    ProfileUpdate, RegisterRequest, ReviewQuery, ReviewRequest,
};
use crate::response::handle_response;

/// Redirect statuses that registration must never follow.
const REDIRECT_STATUSES: [StatusCode; 5] = [
    StatusCode::MOVED_PERMANENTLY,
    StatusCode::FOUND,
    StatusCode::SEE_OTHER,
    StatusCode::TEMPORARY_REDIRECT,
    StatusCode::PERMANENT_REDIRECT,
];

/// Client for the bookstore API gateway.
///
/// Holds no state of its own beyond the injected [`SessionStore`], whose
/// token is attached as a bearer credential when present.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    /// Used for registration, which must not follow redirects.
    http_no_redirect: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    /// Create a client for the configured gateway.
    pub fn new(config: &GatewayConfig, session: SessionStore) -> Result<Self, ApiError> {
        let base_url = config.resolve_base_url();
        // Validate once so later joins only fail on bad paths
        Url::parse(&base_url)?;

        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let http_no_redirect = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self {
            base_url,
            http,
            http_no_redirect,
            session,
        })
    }

    /// Create a client for a fixed base URL.
    pub fn with_base_url(base_url: &str, session: SessionStore) -> Result<Self, ApiError> {
        Self::new(&GatewayConfig::with_base_url(base_url), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    fn build(
        &self,
        http: &reqwest::Client,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%method, path, "gateway request");
        let mut builder = http.request(method, url);
        if let Some(token) = self.session.token() {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        self.build(&self.http, method, path)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        handle_response(status, &body, &self.session)
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.request(Method::GET, path)?).await
    }

    async fn get_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<Value, ApiError> {
        self.send(self.request(Method::GET, path)?.query(query)).await
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(self.request(Method::POST, path)?.json(body)).await
    }

    async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        self.send(self.request(Method::PUT, path)?.json(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.request(Method::DELETE, path)?).await
    }

    // ==================== AUTHENTICATION ====================

    /// Exchange credentials for a token. The caller stores the result with
    /// [`SessionStore::set_auth_data`].
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let value = self.post("/api/v1/auth/login", &body).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Where to send the browser to start a Google login. No request is made.
    pub fn oauth2_login_url(&self) -> String {
        format!("{}/api/v1/oauth2/login/google", self.base_url)
    }

    /// Create an account. A redirect answer is treated as an error.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Value, ApiError> {
        let builder = self
            .build(&self.http_no_redirect, Method::POST, "/api/v1/user")?
            .json(request);
        let response = builder.send().await?;
        let status = response.status();
        if REDIRECT_STATUSES.contains(&status) {
            tracing::warn!(status = status.as_u16(), "registration answered with a redirect");
            return Err(ApiError::UnexpectedRedirect {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        handle_response(status, &body, &self.session)
    }

    pub async fn verify_email(&self, token: &str) -> Result<Value, ApiError> {
        self.get_query("/api/v1/auth/verify", &[("token", token)]).await
    }

    pub async fn resend_verification(&self, email: &str) -> Result<Value, ApiError> {
        let builder = self
            .request(Method::POST, "/api/v1/auth/resend-verification")?
            .query(&[("email", email)]);
        self.send(builder).await
    }

    // ==================== USER MANAGEMENT ====================

    pub async fn get_current_user(&self) -> Result<UserProfile, ApiError> {
        self.session.require_auth()?;
        let value = self.get("/api/v1/user/me").await?;
        Ok(normalize_user(&value))
    }

    pub async fn update_current_user(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.session.require_auth()?;
        let value = self.put("/api/v1/user/me", update).await?;
        Ok(normalize_user(&value))
    }

    pub async fn delete_current_user(&self) -> Result<Value, ApiError> {
        self.session.require_auth()?;
        self.delete("/api/v1/user/me").await
    }

    pub async fn list_users(&self, page: u32, size: u32) -> Result<PageEnvelope<UserProfile>, ApiError> {
        self.session.require_admin()?;
        let value = self.get_query("/api/v1/user", &page_params(page, size)).await?;
        Ok(normalize_page(&value, normalize_user))
    }

    pub async fn get_user(&self, user_id: i64) -> Result<UserProfile, ApiError> {
        self.session.require_admin()?;
        let value = self.get(&format!("/api/v1/user/{user_id}")).await?;
        Ok(normalize_user(&value))
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<Value, ApiError> {
        self.session.require_admin()?;
        self.delete(&format!("/api/v1/user/{user_id}")).await
    }

    // ==================== BOOKS ====================

    /// List books, optionally restricted to one category.
    pub async fn list_books(
        &self,
        page: u32,
        size: u32,
        category_id: Option<i64>,
    ) -> Result<PageEnvelope<Book>, ApiError> {
        let mut params = page_params(page, size).to_vec();
        if let Some(category_id) = category_id {
            params.push(("categoryId", category_id.to_string()));
        }
        let value = self.get_query("/api/v1/books", &params).await?;
        Ok(normalize_page(&value, normalize_book))
    }

    pub async fn get_book(&self, book_id: i64) -> Result<Book, ApiError> {
        let value = self.get(&format!("/api/v1/books/{book_id}")).await?;
        Ok(normalize_book(&value))
    }

    /// Create a book together with its price and stock entry.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        self.session.require_admin()?;
        let value = self.post("/api/v1/books", book).await?;
        Ok(normalize_book(&value))
    }

    pub async fn update_book(&self, book_id: i64, details: &BookDetails) -> Result<Book, ApiError> {
        self.session.require_admin()?;
        let value = self.put(&format!("/api/v1/books/{book_id}"), details).await?;
        Ok(normalize_book(&value))
    }

    pub async fn delete_book(&self, book_id: i64) -> Result<Value, ApiError> {
        self.session.require_admin()?;
        self.delete(&format!("/api/v1/books/{book_id}")).await
    }

    // ==================== CATEGORIES ====================

    pub async fn list_categories(&self, page: u32, size: u32) -> Result<PageEnvelope<Category>, ApiError> {
        let value = self.get_query("/api/v1/category", &page_params(page, size)).await?;
        Ok(normalize_page(&value, normalize_category))
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Category, ApiError> {
        let value = self.get(&format!("/api/v1/category/{category_id}")).await?;
        Ok(normalize_category(&value))
    }

    pub async fn create_category(&self, category_name: &str) -> Result<Category, ApiError> {
        self.session.require_admin()?;
        let body = CategoryRequest {
            category_name: category_name.to_string(),
        };
        let value = self.post("/api/v1/category", &body).await?;
        Ok(normalize_category(&value))
    }

    pub async fn update_category(&self, category_id: i64, category_name: &str) -> Result<Category, ApiError> {
        self.session.require_admin()?;
        let body = CategoryRequest {
            category_name: category_name.to_string(),
        };
        let value = self.put(&format!("/api/v1/category/{category_id}"), &body).await?;
        Ok(normalize_category(&value))
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<Value, ApiError> {
        self.session.require_admin()?;
        self.delete(&format!("/api/v1/category/{category_id}")).await
    }

    // ==================== PRICE ====================

    pub async fn get_price_by_book(&self, book_id: i64) -> Result<Price, ApiError> {
        let value = self.get(&format!("/api/v1/price/book/{book_id}")).await?;
        Ok(normalize_price(&value))
    }

    pub async fn create_price(&self, price: &PriceRequest) -> Result<Price, ApiError> {
        self.session.require_admin()?;
        let value = self.post("/api/v1/price", price).await?;
        Ok(normalize_price(&value))
    }

    pub async fn update_price(&self, price_id: i64, price: &PriceRequest) -> Result<Price, ApiError> {
        self.session.require_admin()?;
        let value = self.put(&format!("/api/v1/price/{price_id}"), price).await?;
        Ok(normalize_price(&value))
    }

    pub async fn delete_price_by_book(&self, book_id: i64) -> Result<Value, ApiError> {
        self.session.require_admin()?;
        self.delete(&format!("/api/v1/price/book/{book_id}")).await
    }

    // ==================== INVENTORY ====================

    pub async fn get_inventory_by_book(&self, book_id: i64) -> Result<Inventory, ApiError> {
        let value = self.get(&format!("/api/v1/inventory/book/{book_id}")).await?;
        Ok(normalize_inventory(&value))
    }

    pub async fn list_inventory(&self, page: u32, size: u32) -> Result<PageEnvelope<Inventory>, ApiError> {
        let value = self.get_query("/api/v1/inventory", &page_params(page, size)).await?;
        Ok(normalize_page(&value, normalize_inventory))
    }

    /// Create a stock entry; availability follows the quantity.
    pub async fn create_inventory(&self, book_id: i64, quantity: i64) -> Result<Inventory, ApiError> {
        self.session.require_admin()?;
        let body = InventoryRequest::for_quantity(book_id, quantity);
        let value = self.post("/api/v1/inventory", &body).await?;
        Ok(normalize_inventory(&value))
    }

    pub async fn update_inventory(
        &self,
        inventory_id: i64,
        inventory: &InventoryRequest,
    ) -> Result<Inventory, ApiError> {
        self.session.require_admin()?;
        let value = self
            .put(&format!("/api/v1/inventory/{inventory_id}"), inventory)
            .await?;
        Ok(normalize_inventory(&value))
    }

    pub async fn delete_inventory_by_book(&self, book_id: i64) -> Result<Value, ApiError> {
        self.session.require_admin()?;
        self.delete(&format!("/api/v1/inventory/book/{book_id}")).await
    }

    // ==================== REVIEWS ====================

    pub async fn list_reviews_by_book(
        &self,
        book_id: i64,
        query: &ReviewQuery,
    ) -> Result<PageEnvelope<Review>, ApiError> {
        let value = self
            .get_query(&format!("/api/v1/review/book/{book_id}"), &query.params())
            .await?;
        Ok(normalize_page(&value, normalize_review))
    }

    pub async fn list_my_reviews(&self, query: &ReviewQuery) -> Result<PageEnvelope<Review>, ApiError> {
        self.session.require_auth()?;
        let value = self.get_query("/api/v1/review/me", &query.params()).await?;
        Ok(normalize_page(&value, normalize_review))
    }

    pub async fn create_review(&self, review: &ReviewRequest) -> Result<Review, ApiError> {
        self.session.require_auth()?;
        let value = self.post("/api/v1/review", review).await?;
        Ok(normalize_review(&value))
    }

    pub async fn update_review(&self, review_id: i64, review: &ReviewRequest) -> Result<Review, ApiError> {
        self.session.require_auth()?;
        let value = self.put(&format!("/api/v1/review/{review_id}"), review).await?;
        Ok(normalize_review(&value))
    }

    pub async fn delete_review(&self, review_id: i64) -> Result<Value, ApiError> {
        self.session.require_auth()?;
        self.delete(&format!("/api/v1/review/{review_id}")).await
    }
}

fn page_params(page: u32, size: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("size", size.to_string())]
}
