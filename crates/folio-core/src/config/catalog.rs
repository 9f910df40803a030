//! Catalog listing configuration.
//!
//! Page sizes used by listings when the caller does not pass one.

use serde::{Deserialize, Serialize};

/// Default page sizes for catalog listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Books per page when browsing.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Categories fetched for filter menus.
    #[serde(default = "default_category_page_size")]
    pub category_page_size: u32,

    /// Reviews per page.
    #[serde(default = "default_review_page_size")]
    pub review_page_size: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            category_page_size: default_category_page_size(),
            review_page_size: default_review_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    9
}

fn default_category_page_size() -> u32 {
    100
}

fn default_review_page_size() -> u32 {
    10
}
