//! Field normalization for backend JSON.
//!
//! The book, category and review services do not agree on field names
//! (`name` vs `title`, `review` vs `comment`, ...), and some send numbers as
//! strings. Every function here resolves each field through a short chain of
//! candidate keys and falls back to a literal default, so the functions are
//! total: a missing or mistyped field degrades to its placeholder instead of
//! failing. An explicit JSON `null` counts as absent.

use serde_json::Value;

use crate::models::{Book, Category, Inventory, Price, Review, UserProfile};
use crate::page::PageEnvelope;

/// Title used when the backend sends neither `name` nor `title`.
pub const UNTITLED: &str = "Untitled";
/// Product code placeholder.
pub const NO_ISBN: &str = "N/A";
pub const UNKNOWN_CATEGORY: &str = "Unknown";
pub const UNKNOWN_BOOK: &str = "Unknown Book";
pub const ANONYMOUS: &str = "Anonymous";

pub fn normalize_book(book: &Value) -> Book {
    Book {
        id: id(book, &["bookId", "id"]),
        title: text(book, &["name", "title"], UNTITLED),
        author: text(book, &["author"], ""),
        isbn: text(book, &["uniqueProductCode", "isbn"], NO_ISBN),
        description: text(book, &["description"], ""),
        publisher: text(book, &["publisher"], ""),
        publication_year: text(book, &["publicationYear"], ""),
        category_id: id(book, &["categoryId"]),
        category_name: text(book, &["categoryName"], ""),
        book_cover_image: text(book, &["bookCoverImage"], ""),
        price_excl_vat: number(book, &["priceExclVat"]),
        price_inc_vat: number(book, &["priceIncVat", "priceInclVat"]),
        currency: text(book, &["currency"], ""),
        stock_status: integer(book, &["stockStatus", "stockQuantity"]),
        availability_status: flag(book, &["availabilityStatus"]),
        number_of_reviews: integer(book, &["numberOfReviews"]),
    }
}

pub fn normalize_category(category: &Value) -> Category {
    Category {
        id: id(category, &["id", "categoryId"]),
        name: text(category, &["categoryName", "name"], UNKNOWN_CATEGORY),
        description: text(category, &["description"], ""),
    }
}

pub fn normalize_review(review: &Value) -> Review {
    Review {
        id: id(review, &["id", "reviewId"]),
        book_id: id(review, &["bookId"]),
        book_name: text(review, &["bookName"], UNKNOWN_BOOK),
        rating: integer(review, &["rating"]),
        review: text(review, &["review", "comment"], ""),
        created_at: text(review, &["createdAt"], ""),
        updated_at: text(review, &["updatedAt"], ""),
        reviewer_name: text(review, &["reviewerName", "username"], ANONYMOUS),
    }
}

pub fn normalize_user(user: &Value) -> UserProfile {
    UserProfile {
        id: id(user, &["id", "userId"]),
        username: text(user, &["username"], ""),
        email: text(user, &["email"], ""),
        roles: strings(user, &["roles", "role"]),
        enabled: flag(user, &["enabled"]),
    }
}

pub fn normalize_price(price: &Value) -> Price {
    Price {
        id: id(price, &["id", "priceId"]),
        book_id: id(price, &["bookId"]),
        price_excl_vat: number(price, &["priceExclVat"]),
        price_incl_vat: number(price, &["priceInclVat", "priceIncVat"]),
        tax_amount: number(price, &["taxAmount"]),
        currency: text(price, &["currency"], ""),
    }
}

pub fn normalize_inventory(inventory: &Value) -> Inventory {
    Inventory {
        id: id(inventory, &["id", "inventoryId"]),
        book_id: id(inventory, &["bookId"]),
        stock_quantity: integer(inventory, &["stockQuantity", "stockStatus"]),
        availability_status: flag(inventory, &["availabilityStatus"]),
    }
}

pub fn normalize_books_list(books: &[Value]) -> Vec<Book> {
    books.iter().map(normalize_book).collect()
}

pub fn normalize_categories_list(categories: &[Value]) -> Vec<Category> {
    categories.iter().map(normalize_category).collect()
}

pub fn normalize_reviews_list(reviews: &[Value]) -> Vec<Review> {
    reviews.iter().map(normalize_review).collect()
}

/// Read a page envelope and normalize each item with `f`.
pub fn normalize_page<T>(value: &Value, f: impl Fn(&Value) -> T) -> PageEnvelope<T> {
    PageEnvelope::from_value(value).map(|item| f(&item))
}

/// First candidate key whose value is present and not null.
fn field<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| value.get(*key))
        .find(|v| !v.is_null())
}

fn text(value: &Value, keys: &[&str], default: &str) -> String {
    match field(value, keys) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => default.to_string(),
    }
}

fn number(value: &Value, keys: &[&str]) -> f64 {
    match field(value, keys) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn integer(value: &Value, keys: &[&str]) -> i64 {
    match field(value, keys) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn id(value: &Value, keys: &[&str]) -> Option<i64> {
    match field(value, keys)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn flag(value: &Value, keys: &[&str]) -> bool {
    match field(value, keys) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

fn strings(value: &Value, keys: &[&str]) -> Vec<String> {
    match field(value, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_book_gets_placeholders() {
        let book = normalize_book(&json!({}));
        assert_eq!(
            book,
            Book {
                id: None,
                title: "Untitled".into(),
                author: String::new(),
                isbn: "N/A".into(),
                description: String::new(),
                publisher: String::new(),
                publication_year: String::new(),
                category_id: None,
                category_name: String::new(),
                book_cover_image: String::new(),
                price_excl_vat: 0.0,
                price_inc_vat: 0.0,
                currency: String::new(),
                stock_status: 0,
                availability_status: false,
                number_of_reviews: 0,
            }
        );
    }

    #[test]
    fn test_non_object_input_never_fails() {
        assert_eq!(normalize_book(&json!(null)).title, UNTITLED);
        assert_eq!(normalize_category(&json!("oops")).name, UNKNOWN_CATEGORY);
        assert_eq!(normalize_review(&json!([1, 2])).reviewer_name, ANONYMOUS);
    }

    #[test]
    fn test_book_service_shape() {
        let book = normalize_book(&json!({
            "bookId": 7,
            "name": "A Light in the Attic",
            "description": "Poems",
            "bookCoverImage": "https://img/7.jpg",
            "uniqueProductCode": "a897fe39b1053632",
            "categoryId": 3,
            "categoryName": "Poetry",
            "priceId": 11,
            "priceExclVat": "42.91",
            "priceIncVat": "51.77",
            "currency": "£",
            "stockStatus": 22,
            "availabilityStatus": true,
            "numberOfReviews": 4
        }));
        assert_eq!(book.id, Some(7));
        assert_eq!(book.title, "A Light in the Attic");
        assert_eq!(book.isbn, "a897fe39b1053632");
        assert_eq!(book.category_id, Some(3));
        assert_eq!(book.price_excl_vat, 42.91);
        assert_eq!(book.price_inc_vat, 51.77);
        assert_eq!(book.currency, "£");
        assert!(book.in_stock());
        assert!(book.has_price());
    }

    #[test]
    fn test_name_preferred_over_title() {
        let book = normalize_book(&json!({"name": "From name", "title": "From title", "id": 2}));
        assert_eq!(book.title, "From name");
        assert_eq!(book.id, Some(2));
    }

    #[test]
    fn test_null_counts_as_absent() {
        let book = normalize_book(&json!({"name": null, "title": "Fallback", "bookId": null, "id": 5}));
        assert_eq!(book.title, "Fallback");
        assert_eq!(book.id, Some(5));
    }

    #[test]
    fn test_legacy_and_alternate_names_agree_for_list_view() {
        let legacy = normalize_book(&json!({
            "name": "Dune",
            "priceIncVat": 0,
            "stockStatus": 0
        }));
        let alternate = normalize_book(&json!({"title": "Dune"}));

        assert_eq!(legacy.title, alternate.title);
        assert_eq!(legacy.price_inc_vat, alternate.price_inc_vat);
        assert_eq!(legacy.stock_status, alternate.stock_status);
        assert_eq!(legacy.category_name, alternate.category_name);
        assert_eq!(legacy, alternate);
    }

    #[test]
    fn test_unparseable_numbers_default_to_zero() {
        let book = normalize_book(&json!({"priceIncVat": "twelve", "stockStatus": "lots"}));
        assert_eq!(book.price_inc_vat, 0.0);
        assert_eq!(book.stock_status, 0);
    }

    #[test]
    fn test_category_shapes() {
        assert_eq!(normalize_category(&json!({"id": 1, "categoryName": "Travel"})).name, "Travel");
        assert_eq!(normalize_category(&json!({"id": 1, "name": "Travel"})).name, "Travel");
        assert_eq!(normalize_category(&json!({"id": 1})).name, "Unknown");
    }

    #[test]
    fn test_review_comment_fallback() {
        let review = normalize_review(&json!({"id": 3, "bookId": 9, "comment": "Loved it", "rating": 4}));
        assert_eq!(review.review, "Loved it");
        assert_eq!(review.rating, 4);
        assert_eq!(review.book_name, UNKNOWN_BOOK);
        assert_eq!(review.reviewer_name, ANONYMOUS);
    }

    #[test]
    fn test_user_role_set() {
        let user = normalize_user(&json!({
            "id": 12,
            "username": "reader",
            "email": "reader@example.com",
            "role": ["ROLE_USER"],
            "enabled": true
        }));
        assert_eq!(user.roles, vec!["ROLE_USER".to_string()]);
        assert!(user.enabled);
    }

    #[test]
    fn test_price_and_inventory() {
        let price = normalize_price(&json!({
            "id": 4, "bookId": 7, "priceExclVat": 10.0, "priceInclVat": 12.0,
            "taxAmount": 2.0, "currency": "GBP"
        }));
        assert_eq!(price.price_incl_vat, 12.0);
        assert_eq!(price.currency, "GBP");

        let inventory = normalize_inventory(&json!({"id": 2, "bookId": 7, "stockQuantity": 3}));
        assert_eq!(inventory.stock_quantity, 3);
        assert!(!inventory.availability_status);
    }

    #[test]
    fn test_normalize_page() {
        let page = normalize_page(
            &json!({
                "content": [{"bookId": 1, "name": "One"}, {"bookId": 2}],
                "totalPages": 2,
                "number": 0,
                "totalElements": 11
            }),
            normalize_book,
        );
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[1].title, UNTITLED);
        assert_eq!(page.total_elements, 11);
    }
}
