//! Normalized records consumed by the front end.
//!
//! Each record has one stable shape regardless of which backend service
//! produced it. See [`crate::normalize`] for the field fallback chains.

use serde::{Deserialize, Serialize};

/// A book as shown in listings and detail views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub description: String,
    pub publisher: String,
    pub publication_year: String,
    pub category_id: Option<i64>,
    pub category_name: String,
    pub book_cover_image: String,
    pub price_excl_vat: f64,
    pub price_inc_vat: f64,
    /// Currency code or symbol; empty when the backend sent none.
    pub currency: String,
    /// Units in stock.
    pub stock_status: i64,
    pub availability_status: bool,
    pub number_of_reviews: i64,
}

impl Book {
    /// Whether the book can be ordered right now.
    pub fn in_stock(&self) -> bool {
        self.availability_status && self.stock_status > 0
    }

    /// Whether a price has been set.
    pub fn has_price(&self) -> bool {
        self.price_inc_vat > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Option<i64>,
    pub book_id: Option<i64>,
    pub book_name: String,
    /// 0-5, where 0 means no rating.
    pub rating: i64,
    pub review: String,
    pub created_at: String,
    pub updated_at: String,
    pub reviewer_name: String,
}

/// Account details returned by the auth service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    /// Email verified.
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: Option<i64>,
    pub book_id: Option<i64>,
    pub price_excl_vat: f64,
    pub price_incl_vat: f64,
    pub tax_amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub id: Option<i64>,
    pub book_id: Option<i64>,
    pub stock_quantity: i64,
    pub availability_status: bool,
}
