//! # folio-core
//!
//! Shared types for the Folio bookstore client.
//!
//! - Configuration (`folio.yaml`)
//! - Normalized records and the field normalizer that produces them
//! - Page envelopes and pagination bookkeeping
//! - Client-side form validation
//! - Display formatting and per-page UI state

// Configuration types shared across all Folio crates
pub mod config;

pub mod format;
pub mod models;
pub mod normalize;
pub mod page;
pub mod ui;
pub mod validation;

pub use config::{CatalogConfig, ConfigError, FolioConfig, GatewayConfig, SessionConfig};
pub use models::{Book, Category, Inventory, Price, Review, UserProfile};
pub use page::PageEnvelope;
pub use ui::EditState;
pub use validation::{FieldError, RegistrationForm, ValidationErrors};
