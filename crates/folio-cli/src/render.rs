//! Plain-text rendering of normalized records for the terminal.

use folio_core::format::{average_rating, format_currency, format_date, render_star_rating, truncate};
use folio_core::{Book, Category, Inventory, PageEnvelope, Price, Review, UserProfile};

const MAX_RATING: i64 = 5;
const SUMMARY_LEN: usize = 60;

pub fn book_line(book: &Book) -> String {
    let price = if book.has_price() {
        format_currency(book.price_inc_vat, &book.currency)
    } else {
        "no price".to_string()
    };
    format!(
        "#{:<5} {:<40} {:>10}  {}",
        id_label(book.id),
        truncate(&book.title, 37),
        price,
        stock_label(book)
    )
}

pub fn book_detail(book: &Book) -> String {
    let mut lines = vec![
        format!("{} (#{})", book.title, id_label(book.id)),
        format!("  Code:        {}", book.isbn),
    ];
    if !book.author.is_empty() {
        lines.push(format!("  Author:      {}", book.author));
    }
    if !book.category_name.is_empty() {
        lines.push(format!("  Category:    {}", book.category_name));
    }
    if book.has_price() {
        lines.push(format!(
            "  Price:       {} ({} excl. VAT)",
            format_currency(book.price_inc_vat, &book.currency),
            format_currency(book.price_excl_vat, &book.currency)
        ));
    }
    lines.push(format!("  Stock:       {}", stock_label(book)));
    lines.push(format!("  Reviews:     {}", book.number_of_reviews));
    if !book.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("  {}", book.description));
    }
    lines.join("\n")
}

fn stock_label(book: &Book) -> String {
    if book.in_stock() {
        format!("In stock ({})", book.stock_status)
    } else {
        "Out of stock".to_string()
    }
}

pub fn category_line(category: &Category) -> String {
    format!("#{:<5} {}", id_label(category.id), category.name)
}

pub fn review_line(review: &Review) -> String {
    let mut line = format!(
        "{}  {} on {}",
        render_star_rating(review.rating, MAX_RATING),
        review.reviewer_name,
        review.book_name
    );
    if !review.created_at.is_empty() {
        line.push_str(&format!(" ({})", format_date(&review.created_at)));
    }
    line.push_str(&format!(
        "\n  [#{}] {}",
        id_label(review.id),
        truncate(&review.review, SUMMARY_LEN)
    ));
    line
}

/// Average rating line for a page of reviews, if it has any.
pub fn rating_summary(reviews: &[Review]) -> Option<String> {
    average_rating(reviews).map(|avg| format!("Average rating: {avg:.1} / {MAX_RATING}"))
}

pub fn user_line(user: &UserProfile) -> String {
    let status = if user.enabled { "verified" } else { "unverified" };
    format!(
        "#{:<5} {:<20} {:<30} {} [{}]",
        id_label(user.id),
        user.username,
        user.email,
        user.roles.join(", "),
        status
    )
}

pub fn price_line(price: &Price) -> String {
    format!(
        "#{} book #{}: {} ({} excl. VAT, tax {})",
        id_label(price.id),
        id_label(price.book_id),
        format_currency(price.price_incl_vat, &price.currency),
        format_currency(price.price_excl_vat, &price.currency),
        format_currency(price.tax_amount, &price.currency)
    )
}

pub fn inventory_line(inventory: &Inventory) -> String {
    let availability = if inventory.availability_status {
        "available"
    } else {
        "unavailable"
    };
    format!(
        "#{} book #{}: {} units, {}",
        id_label(inventory.id),
        id_label(inventory.book_id),
        inventory.stock_quantity,
        availability
    )
}

/// Pagination footer, e.g. "Page 1 of 3 (25 total)".
pub fn page_footer<T>(page: &PageEnvelope<T>) -> String {
    format!("{} ({} total)", page.label(), page.total_elements)
}

fn id_label(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "?".to_string())
}
