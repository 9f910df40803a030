//! User administration commands (admin).

use super::Context;
use crate::render;

pub async fn list(ctx: &Context, page: u32, size: u32) -> anyhow::Result<()> {
    let users = ctx.client.list_users(page, size).await?;
    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }
    let own_id = ctx.session.user_id();
    for user in &users.content {
        let marker = if user.id.is_some() && user.id == own_id { "  (you)" } else { "" };
        println!("{}{marker}", render::user_line(user));
    }
    println!("{}", render::page_footer(&users));
    Ok(())
}

pub async fn show(ctx: &Context, user_id: i64) -> anyhow::Result<()> {
    let user = ctx.client.get_user(user_id).await?;
    println!("{}", render::user_line(&user));
    Ok(())
}

/// Delete another user's account. Admins cannot delete themselves here.
pub async fn delete(ctx: &Context, user_id: i64) -> anyhow::Result<()> {
    if ctx.session.user_id() == Some(user_id) {
        anyhow::bail!("You cannot delete your own account here; use `folio profile delete`");
    }
    ctx.client.delete_user(user_id).await?;
    println!("User #{user_id} deleted.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stub::{StubGateway, session_as};
    use serde_json::Value;

    #[tokio::test]
    async fn test_admin_cannot_delete_own_account() {
        let gateway = StubGateway::start().await;
        let ctx = gateway.context(session_as("admin", &["ROLE_ADMIN"], 3));

        let err = delete(&ctx, 3).await.unwrap_err();
        assert!(err.to_string().contains("folio profile delete"));
        assert!(gateway.requests().is_empty());
        assert!(ctx.session.is_authenticated());
    }

    #[tokio::test]
    async fn test_admin_deletes_other_account() {
        let gateway = StubGateway::start().await;
        gateway.respond("DELETE", "/api/v1/user/9", 204, Value::Null);
        let ctx = gateway.context(session_as("admin", &["ROLE_ADMIN"], 3));

        delete(&ctx, 9).await.unwrap();
        assert_eq!(gateway.requests(), vec!["DELETE /api/v1/user/9"]);
    }
}
