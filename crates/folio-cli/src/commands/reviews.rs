//! Review commands.

use folio_client::{ReviewQuery, ReviewRequest, SortDirection};
use folio_core::EditState;
use folio_core::validation::validate_review;

use super::Context;
use crate::render;

pub async fn list(ctx: &Context, book_id: i64, query: ReviewQuery) -> anyhow::Result<()> {
    let reviews = ctx.client.list_reviews_by_book(book_id, &query).await?;
    if reviews.is_empty() {
        println!("No reviews yet. Be the first to review this book!");
        return Ok(());
    }
    if let Some(summary) = render::rating_summary(&reviews.content) {
        println!("{summary}");
    }
    for review in &reviews.content {
        println!("{}", render::review_line(review));
    }
    println!("{}", render::page_footer(&reviews));
    Ok(())
}

pub async fn mine(ctx: &Context, page: u32, size: Option<u32>) -> anyhow::Result<()> {
    let size = size.unwrap_or(ctx.config.catalog.review_page_size);
    let reviews = ctx.client.list_my_reviews(&ReviewQuery::page(page, size)).await?;
    if reviews.is_empty() {
        println!("You haven't written any reviews yet.");
        return Ok(());
    }
    for review in &reviews.content {
        println!("{}", render::review_line(review));
    }
    println!("{}", render::page_footer(&reviews));
    Ok(())
}

/// Write a new review, or edit review `id`.
pub async fn save(
    ctx: &Context,
    id: Option<i64>,
    book_id: i64,
    rating: i64,
    comment: &str,
) -> anyhow::Result<()> {
    ctx.session.require_auth()?;
    validate_review(rating, comment)?;

    let request = ReviewRequest {
        book_id,
        rating,
        review: comment.trim().to_string(),
    };
    match EditState::for_target(id) {
        EditState::Editing(id) => {
            ctx.client.update_review(id, &request).await?;
            println!("Review updated!");
        }
        _ => {
            ctx.client.create_review(&request).await?;
            println!("Review submitted successfully!");
        }
    }
    Ok(())
}

pub async fn delete(ctx: &Context, review_id: i64) -> anyhow::Result<()> {
    ctx.client.delete_review(review_id).await?;
    println!("Review deleted!");
    Ok(())
}

/// Parse a `--sort` value: `newest`, `oldest`, `highest` or `lowest`.
pub fn parse_sort(sort: &str) -> anyhow::Result<(String, SortDirection)> {
    let (field, dir) = match sort {
        "newest" => ("createdAt", SortDirection::Desc),
        "oldest" => ("createdAt", SortDirection::Asc),
        "highest" => ("rating", SortDirection::Desc),
        "lowest" => ("rating", SortDirection::Asc),
        other => anyhow::bail!("Unknown sort order '{other}' (newest, oldest, highest, lowest)"),
    };
    Ok((field.to_string(), dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_sort("highest").unwrap(),
            ("rating".to_string(), SortDirection::Desc)
        );
        assert_eq!(
            parse_sort("oldest").unwrap(),
            ("createdAt".to_string(), SortDirection::Asc)
        );
        assert!(parse_sort("random").is_err());
    }
}
