//! Request bodies and query parameters, in the gateway's wire format.

use folio_core::RegistrationForm;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<&RegistrationForm> for RegisterRequest {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            username: form.username.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            confirm_password: form.confirm_password.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
}

/// Descriptive fields of a book. Also the body of a book update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetails {
    pub name: String,
    pub description: String,
    pub book_cover_image: String,
    pub unique_product_code: String,
    pub category_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub price_excl_vat: f64,
    pub tax_amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryData {
    pub stock_quantity: i64,
    pub availability_status: bool,
}

/// A book created together with its price and stock.
#[derive(Debug, Clone, Serialize)]
pub struct NewBook {
    #[serde(rename = "bookRequestDTO")]
    pub book: BookDetails,
    #[serde(rename = "priceDataDTO")]
    pub price: PriceData,
    #[serde(rename = "inventoryDataDTO")]
    pub inventory: InventoryData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRequest {
    pub book_id: i64,
    pub price_excl_vat: f64,
    pub tax_amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    pub book_id: i64,
    pub stock_quantity: i64,
    pub availability_status: bool,
}

impl InventoryRequest {
    /// Stock entry that is available exactly when the quantity is positive.
    pub fn for_quantity(book_id: i64, stock_quantity: i64) -> Self {
        Self {
            book_id,
            stock_quantity,
            availability_status: stock_quantity > 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub book_id: i64,
    pub rating: i64,
    pub review: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Paging and ordering of review listings.
#[derive(Debug, Clone)]
pub struct ReviewQuery {
    pub page: u32,
    pub size: u32,
    /// Backend field to sort by: `createdAt`, `updatedAt` or `rating`.
    pub sort_by: String,
    pub sort_dir: SortDirection,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_string(),
            sort_dir: SortDirection::Desc,
        }
    }
}

impl ReviewQuery {
    pub fn page(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            ..Self::default()
        }
    }

    pub(crate) fn params(&self) -> [(&'static str, String); 4] {
        [
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ]
    }
}
