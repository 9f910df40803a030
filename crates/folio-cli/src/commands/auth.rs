//! Authentication commands.
//!
//! `folio login` - Log in with email and password.
//! `folio logout` - Forget the stored session.
//! `folio whoami` - Show the current session.
//! `folio oauth-url` - Print the Google login URL.
//! `folio oauth-callback` - Complete a Google login from its redirect URL.
//! `folio register` - Create an account.
//! `folio verify` / `folio resend-verification` - Email verification.

use anyhow::Context as _;
use folio_client::RegisterRequest;
use folio_core::RegistrationForm;
use folio_session::{FederatedCallback, LoginResponse, decode_payload_unverified, strip_query};

use super::Context;

pub async fn login(ctx: &Context, email: &str, password: &str) -> anyhow::Result<()> {
    if email.trim().is_empty() || password.is_empty() {
        anyhow::bail!("Please enter both email and password");
    }

    let login = ctx.client.login(email, password).await?;
    establish(ctx, &login);

    let name = login.username.as_deref().unwrap_or(email);
    println!("Welcome back, {name}!");
    if ctx.session.is_admin() {
        println!("Admin access granted.");
    }
    Ok(())
}

fn establish(ctx: &Context, login: &LoginResponse) {
    if let Err(e) = ctx.session.set_auth_data(login) {
        eprintln!("Logged in, but the token payload could not be read ({e}); admin commands are unavailable.");
    }
}

pub fn logout(ctx: &Context) {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.session.logout();
    if was_logged_in {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
}

pub fn whoami(ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.session.snapshot();
    let Some(token) = session.token() else {
        println!("Not logged in.");
        return Ok(());
    };

    println!("Username: {}", session.username().unwrap_or("(unknown)"));
    if let Some(user_id) = session.user_id() {
        println!("User id:  {user_id}");
    }
    let roles = if session.roles().is_empty() {
        "(none)".to_string()
    } else {
        session.roles().join(", ")
    };
    println!("Roles:    {roles}");
    println!("Admin:    {}", if session.is_admin() { "yes" } else { "no" });

    // Advisory only
    if let Ok(claims) = decode_payload_unverified(token)
        && let Some(expires_at) = claims.expires_at()
    {
        let note = if claims.is_expired() { " (expired)" } else { "" };
        println!("Expires:  {}{note}", expires_at.format("%Y-%m-%d %H:%M UTC"));
    }
    Ok(())
}

pub fn oauth_url(ctx: &Context) {
    println!("{}", ctx.client.oauth2_login_url());
}

/// Complete a federated login from the URL the browser was redirected to.
pub fn oauth_callback(ctx: &Context, url: &str) -> anyhow::Result<()> {
    let callback = FederatedCallback::from_url(url)
        .or_else(|| FederatedCallback::from_query(url))
        .context("URL does not carry token, username and email parameters")?;

    let login = callback.into_login_response();
    establish(ctx, &login);

    println!(
        "Logged in with Google as {}.",
        login.username.as_deref().unwrap_or("(unknown)")
    );
    if url.contains("://") {
        println!("Continue at: {}", strip_query(url));
    }
    Ok(())
}

pub async fn register(ctx: &Context, form: RegistrationForm) -> anyhow::Result<()> {
    form.validate()?;

    let value = ctx.client.register(&RegisterRequest::from(&form)).await?;
    let message = value
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Registration successful! Please check your email to verify your account.");
    println!("{message}");
    Ok(())
}

pub async fn verify(ctx: &Context, token: &str) -> anyhow::Result<()> {
    ctx.client.verify_email(token.trim()).await?;
    println!("Email verified. You can now log in.");
    Ok(())
}

pub async fn resend_verification(ctx: &Context, email: &str) -> anyhow::Result<()> {
    if !email.contains('@') {
        anyhow::bail!("Please enter a valid email address");
    }
    ctx.client.resend_verification(email.trim()).await?;
    println!("Verification email sent to {email}.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::stub::{StubGateway, token};
    use folio_session::SessionStore;

    #[tokio::test]
    async fn test_oauth_callback_accepts_bare_query() {
        let gateway = StubGateway::start().await;
        let ctx = gateway.context(SessionStore::new());
        let token = token(&["ROLE_USER"], 12);

        oauth_callback(
            &ctx,
            &format!("?token={token}&username=reader&email=reader%40example.com"),
        )
        .unwrap();

        assert_eq!(ctx.session.token(), Some(token));
        assert_eq!(ctx.session.username().as_deref(), Some("reader"));
        assert_eq!(ctx.session.user_id(), Some(12));
        assert!(!ctx.session.is_admin());
        assert!(gateway.requests().is_empty());
    }

    #[tokio::test]
    async fn test_oauth_callback_from_redirect_url() {
        let gateway = StubGateway::start().await;
        let ctx = gateway.context(SessionStore::new());
        let token = token(&["ROLE_ADMIN"], 1);

        oauth_callback(
            &ctx,
            &format!("http://localhost:8501/?token={token}&username=admin&email=a%40example.com"),
        )
        .unwrap();
        assert!(ctx.session.is_admin());
    }

    #[tokio::test]
    async fn test_oauth_callback_without_token_is_rejected() {
        let gateway = StubGateway::start().await;
        let ctx = gateway.context(SessionStore::new());

        assert!(oauth_callback(&ctx, "?username=reader&email=reader%40example.com").is_err());
        assert!(!ctx.session.is_authenticated());
    }
}
