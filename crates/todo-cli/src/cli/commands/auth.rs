//! Auth command handlers.

use anyhow::{Context, Result};
use todo_core::config::Config;
use todo_core::features::auth;
use todo_types::LoginParams;

use super::session::Session;

pub async fn whoami(config: &Config) -> Result<()> {
    let session = Session::initialize(config).await?;
    if session.is_logged_in() {
        println!("Logged in");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

/// Merges command-line credentials with the configured ones (flags win).
pub fn login_params(
    config: &Config,
    email: Option<String>,
    password: Option<String>,
    remember_me: bool,
) -> Result<LoginParams> {
    let stored = config.credentials();
    let email = email
        .or_else(|| stored.as_ref().map(|c| c.email.clone()))
        .context("No email given: pass --email or set [account].email")?;
    let password = password
        .or_else(|| stored.as_ref().map(|c| c.password.clone()))
        .context("No password given: pass --password or set [account].password")?;
    Ok(LoginParams {
        email,
        password,
        remember_me: remember_me || config.account.remember_me,
        captcha: None,
    })
}

pub async fn login(config: &Config, params: &LoginParams) -> Result<()> {
    let session = Session::initialize(config).await?;
    auth::login(&session.api, &session.store, params).await;
    session.check()?;
    println!("Logged in as {}", params.email);
    Ok(())
}

pub async fn logout(config: &Config) -> Result<()> {
    let session = Session::bootstrap(config).await?;
    auth::logout(&session.api, &session.store).await;
    session.check()?;
    println!("Logged out");
    Ok(())
}
