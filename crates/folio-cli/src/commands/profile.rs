//! Account commands for the logged-in user.

use folio_client::ProfileUpdate;
use folio_core::validation::{confirm_account_deletion, validate_profile};

use super::Context;

pub async fn show(ctx: &Context) -> anyhow::Result<()> {
    let user = ctx.client.get_current_user().await?;
    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("Roles:    {}", user.roles.join(", "));
    println!(
        "Status:   {}",
        if user.enabled { "verified" } else { "email not verified" }
    );
    Ok(())
}

/// Update username and/or email. Fields left out keep their current value.
pub async fn update(
    ctx: &Context,
    username: Option<String>,
    email: Option<String>,
) -> anyhow::Result<()> {
    ctx.session.require_auth()?;
    if username.is_none() && email.is_none() {
        anyhow::bail!("Nothing to update: pass --username and/or --email");
    }
    if let Some(name) = &username {
        validate_profile(name)?;
    }

    let current = ctx.client.get_current_user().await?;
    let update = ProfileUpdate {
        username: username.unwrap_or(current.username),
        email: email.unwrap_or(current.email),
    };
    validate_profile(&update.username)?;

    let user = ctx.client.update_current_user(&update).await?;
    println!("Profile updated: {} <{}>", user.username, user.email);
    Ok(())
}

/// Delete the account. `confirm` must repeat the current username.
pub async fn delete(ctx: &Context, confirm: &str) -> anyhow::Result<()> {
    ctx.session.require_auth()?;
    let current = ctx.session.username().unwrap_or_default();
    confirm_account_deletion(&current, confirm)?;

    ctx.client.delete_current_user().await?;
    ctx.session.logout();
    println!("Account deleted.");
    Ok(())
}
