//! Client-side form validation.
//!
//! Checks run before any request is sent. Every check of a form is
//! evaluated and all failures are reported together.

use std::fmt;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_REVIEW_LEN: usize = 10;
pub const MIN_CATEGORY_NAME_LEN: usize = 2;
pub const MAX_RATING: i64 = 5;

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All failed checks of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

#[derive(Default)]
struct Collector {
    errors: Vec<FieldError>,
}

impl Collector {
    fn check(&mut self, ok: bool, field: &'static str, message: &str) {
        if !ok {
            self.errors.push(FieldError {
                field,
                message: message.to_string(),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors {
                errors: self.errors,
            })
        }
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Account registration form.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accepted_terms: bool,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut c = Collector::default();
        c.check(
            char_len(&self.username) >= MIN_USERNAME_LEN,
            "username",
            "Username must be at least 3 characters long",
        );
        c.check(
            self.email.contains('@'),
            "email",
            "Please enter a valid email address",
        );
        c.check(
            char_len(&self.password) >= MIN_PASSWORD_LEN,
            "password",
            "Password must be at least 6 characters long",
        );
        c.check(
            self.password == self.confirm_password,
            "confirm_password",
            "Passwords do not match",
        );
        c.check(
            self.accepted_terms,
            "accepted_terms",
            "You must agree to the Terms of Service",
        );
        c.finish()
    }
}

pub fn validate_review(rating: i64, comment: &str) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.check(
        (0..=MAX_RATING).contains(&rating),
        "rating",
        "Rating must be between 0 and 5",
    );
    c.check(
        char_len(comment.trim()) >= MIN_REVIEW_LEN,
        "review",
        "Please write at least 10 characters in your review",
    );
    c.finish()
}

pub fn validate_profile(username: &str) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.check(!username.trim().is_empty(), "username", "Username is required");
    c.finish()
}

pub fn validate_category_name(name: &str) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.check(
        char_len(name.trim()) >= MIN_CATEGORY_NAME_LEN,
        "category_name",
        "Category name is required (minimum 2 characters)",
    );
    c.finish()
}

/// Required fields of the book form.
pub fn validate_book_fields(
    name: &str,
    description: &str,
    unique_product_code: &str,
    book_cover_image: &str,
) -> Result<(), ValidationErrors> {
    let all_present = [name, description, unique_product_code, book_cover_image]
        .iter()
        .all(|s| !s.trim().is_empty());
    let mut c = Collector::default();
    c.check(all_present, "book", "Please fill in all required fields");
    c.finish()
}

/// Account deletion requires typing the current username.
pub fn confirm_account_deletion(current: &str, typed: &str) -> Result<(), ValidationErrors> {
    let mut c = Collector::default();
    c.check(
        !current.is_empty() && current == typed,
        "confirmation",
        "Username does not match. Deletion cancelled.",
    );
    c.finish()
}
