//! Price and inventory commands (admin).

use clap::Args;
use folio_client::{InventoryRequest, PriceRequest};

use super::Context;
use crate::render;

#[derive(Debug, Args)]
pub struct PriceArgs {
    #[arg(long)]
    pub book: i64,
    /// Price excluding VAT
    #[arg(long)]
    pub price: f64,
    #[arg(long, default_value_t = 0.0)]
    pub tax: f64,
    #[arg(long, default_value = "£")]
    pub currency: String,
}

impl PriceArgs {
    fn into_request(self) -> anyhow::Result<PriceRequest> {
        if self.price <= 0.0 {
            anyhow::bail!("Price must be greater than zero");
        }
        if self.tax < 0.0 {
            anyhow::bail!("Tax amount cannot be negative");
        }
        Ok(PriceRequest {
            book_id: self.book,
            price_excl_vat: self.price,
            tax_amount: self.tax,
            currency: self.currency,
        })
    }
}

// ==================== PRICE ====================

pub async fn show_price(ctx: &Context, book_id: i64) -> anyhow::Result<()> {
    let price = ctx.client.get_price_by_book(book_id).await?;
    println!("{}", render::price_line(&price));
    Ok(())
}

pub async fn create_price(ctx: &Context, args: PriceArgs) -> anyhow::Result<()> {
    let price = ctx.client.create_price(&args.into_request()?).await?;
    println!("Price set: {}", render::price_line(&price));
    Ok(())
}

pub async fn update_price(ctx: &Context, price_id: i64, args: PriceArgs) -> anyhow::Result<()> {
    let price = ctx.client.update_price(price_id, &args.into_request()?).await?;
    println!("Price updated: {}", render::price_line(&price));
    Ok(())
}

pub async fn delete_price(ctx: &Context, book_id: i64) -> anyhow::Result<()> {
    ctx.client.delete_price_by_book(book_id).await?;
    println!("Price of book #{book_id} deleted.");
    Ok(())
}

// ==================== INVENTORY ====================

pub async fn show_inventory(ctx: &Context, book_id: i64) -> anyhow::Result<()> {
    let inventory = ctx.client.get_inventory_by_book(book_id).await?;
    println!("{}", render::inventory_line(&inventory));
    Ok(())
}

pub async fn list_inventory(ctx: &Context, page: u32, size: u32) -> anyhow::Result<()> {
    let entries = ctx.client.list_inventory(page, size).await?;
    if entries.is_empty() {
        println!("No inventory entries.");
        return Ok(());
    }
    for entry in &entries.content {
        println!("{}", render::inventory_line(entry));
    }
    println!("{}", render::page_footer(&entries));
    Ok(())
}

pub async fn create_inventory(ctx: &Context, book_id: i64, quantity: i64) -> anyhow::Result<()> {
    check_quantity(quantity)?;
    let inventory = ctx.client.create_inventory(book_id, quantity).await?;
    println!("Inventory created: {}", render::inventory_line(&inventory));
    Ok(())
}

/// Set the stock of an entry. Availability follows the quantity unless
/// given explicitly.
pub async fn update_inventory(
    ctx: &Context,
    inventory_id: i64,
    book_id: i64,
    quantity: i64,
    available: Option<bool>,
) -> anyhow::Result<()> {
    check_quantity(quantity)?;
    let mut request = InventoryRequest::for_quantity(book_id, quantity);
    if let Some(available) = available {
        request.availability_status = available;
    }
    let inventory = ctx.client.update_inventory(inventory_id, &request).await?;
    println!("Inventory updated: {}", render::inventory_line(&inventory));
    Ok(())
}

pub async fn delete_inventory(ctx: &Context, book_id: i64) -> anyhow::Result<()> {
    ctx.client.delete_inventory_by_book(book_id).await?;
    println!("Inventory of book #{book_id} deleted.");
    Ok(())
}

fn check_quantity(quantity: i64) -> anyhow::Result<()> {
    if quantity < 0 {
        anyhow::bail!("Stock quantity cannot be negative");
    }
    Ok(())
}
