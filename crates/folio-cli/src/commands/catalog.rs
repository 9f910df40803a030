//! Book and category commands.

use clap::Args;
use folio_client::{BookDetails, InventoryData, NewBook, PriceData, ReviewQuery};
use folio_core::EditState;
use folio_core::validation::{validate_book_fields, validate_category_name};

use super::Context;
use crate::render;

// ==================== BOOKS ====================

pub async fn list_books(
    ctx: &Context,
    page: u32,
    size: Option<u32>,
    category: Option<i64>,
) -> anyhow::Result<()> {
    let size = size.unwrap_or(ctx.config.catalog.page_size);
    let books = ctx.client.list_books(page, size, category).await?;

    if books.is_empty() {
        println!("No books found.");
        return Ok(());
    }
    for book in &books.content {
        println!("{}", render::book_line(book));
    }
    println!("{}", render::page_footer(&books));
    Ok(())
}

/// Show one book, optionally followed by its first page of reviews.
pub async fn show_book(ctx: &Context, book_id: i64, with_reviews: bool) -> anyhow::Result<()> {
    let book = ctx.client.get_book(book_id).await?;
    println!("{}", render::book_detail(&book));

    if with_reviews {
        let query = ReviewQuery::page(0, ctx.config.catalog.review_page_size);
        let reviews = ctx.client.list_reviews_by_book(book_id, &query).await?;
        println!();
        if reviews.is_empty() {
            println!("No reviews yet.");
        } else {
            if let Some(summary) = render::rating_summary(&reviews.content) {
                println!("{summary}");
            }
            for review in &reviews.content {
                println!("{}", render::review_line(review));
            }
            println!("{}", render::page_footer(&reviews));
        }
    }
    Ok(())
}

/// Fields of the create-book form. Defaults match the admin form.
#[derive(Debug, Args)]
pub struct NewBookArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Unique product code (ISBN)
    #[arg(long)]
    pub code: String,
    /// Cover image URL
    #[arg(long)]
    pub cover: String,
    #[arg(long)]
    pub category: i64,
    /// Price excluding VAT
    #[arg(long, default_value_t = 19.99)]
    pub price: f64,
    #[arg(long, default_value_t = 3.99)]
    pub tax: f64,
    #[arg(long, default_value = "£")]
    pub currency: String,
    #[arg(long, default_value_t = 100)]
    pub stock: i64,
    /// Create the book as not available for sale
    #[arg(long, default_value_t = false)]
    pub unavailable: bool,
}

pub async fn create_book(ctx: &Context, args: NewBookArgs) -> anyhow::Result<()> {
    validate_book_fields(&args.name, &args.description, &args.code, &args.cover)?;
    if args.price <= 0.0 {
        anyhow::bail!("Price must be greater than zero");
    }
    if args.stock < 0 {
        anyhow::bail!("Stock quantity cannot be negative");
    }

    let body = NewBook {
        book: BookDetails {
            name: args.name,
            description: args.description,
            book_cover_image: args.cover,
            unique_product_code: args.code,
            category_id: args.category,
        },
        price: PriceData {
            price_excl_vat: args.price,
            tax_amount: args.tax,
            currency: args.currency,
        },
        inventory: InventoryData {
            stock_quantity: args.stock,
            availability_status: !args.unavailable,
        },
    };
    let name = body.book.name.clone();
    let book = ctx.client.create_book(&body).await?;
    println!(
        "Book '{name}' created{}.",
        book.id.map(|id| format!(" as #{id}")).unwrap_or_default()
    );
    Ok(())
}

/// Fields of the edit-book form. Omitted fields keep their current value.
#[derive(Debug, Args)]
pub struct BookEditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub cover: Option<String>,
    #[arg(long)]
    pub category: Option<i64>,
}

pub async fn update_book(ctx: &Context, book_id: i64, args: BookEditArgs) -> anyhow::Result<()> {
    ctx.session.require_admin()?;
    let current = ctx.client.get_book(book_id).await?;

    let details = BookDetails {
        name: args.name.unwrap_or(current.title),
        description: args.description.unwrap_or(current.description),
        book_cover_image: args.cover.unwrap_or(current.book_cover_image),
        unique_product_code: args.code.unwrap_or(current.isbn),
        category_id: match args.category.or(current.category_id) {
            Some(id) => id,
            None => anyhow::bail!("Book #{book_id} has no category; pass --category"),
        },
    };
    validate_book_fields(
        &details.name,
        &details.description,
        &details.unique_product_code,
        &details.book_cover_image,
    )?;

    let book = ctx.client.update_book(book_id, &details).await?;
    println!("Book '{}' updated.", book.title);
    Ok(())
}

pub async fn delete_book(ctx: &Context, book_id: i64) -> anyhow::Result<()> {
    ctx.client.delete_book(book_id).await?;
    println!("Book #{book_id} deleted.");
    Ok(())
}

// ==================== CATEGORIES ====================

pub async fn list_categories(ctx: &Context) -> anyhow::Result<()> {
    let categories = ctx
        .client
        .list_categories(0, ctx.config.catalog.category_page_size)
        .await?;
    if categories.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }
    for category in &categories.content {
        println!("{}", render::category_line(category));
    }
    Ok(())
}

pub async fn show_category(ctx: &Context, category_id: i64) -> anyhow::Result<()> {
    let category = ctx.client.get_category(category_id).await?;
    println!("{}", render::category_line(&category));
    if !category.description.is_empty() {
        println!("  {}", category.description);
    }
    Ok(())
}

/// Create a category, or rename it when `id` is given.
pub async fn save_category(ctx: &Context, id: Option<i64>, name: &str) -> anyhow::Result<()> {
    validate_category_name(name)?;
    let name = name.trim();

    let state = EditState::for_target(id);
    let category = match state {
        EditState::Editing(id) => ctx.client.update_category(id, name).await?,
        _ => ctx.client.create_category(name).await?,
    };
    let verb = if matches!(state, EditState::Creating) {
        "created"
    } else {
        "updated"
    };

    println!("Category '{}' {verb}.", category.name);
    Ok(())
}

pub async fn delete_category(ctx: &Context, category_id: i64) -> anyhow::Result<()> {
    ctx.client.delete_category(category_id).await?;
    println!("Category #{category_id} deleted.");
    Ok(())
}
