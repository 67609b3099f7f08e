//! Session commands - login, logout, whoami

use crate::session_store;
use anyhow::{Context, Result, bail};
use owo_colors::OwoColorize;
use skillswap_api_client::endpoints::auth::LoginRequest;
use std::env;

/// Log in and persist the session token
pub async fn login(email: &str, password: Option<&str>, format: &str) -> Result<()> {
    let password = match password {
        Some(p) => p.to_string(),
        None => match env::var("SKILLSWAP_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => bail!("No password given; pass --password or set SKILLSWAP_PASSWORD"),
        },
    };

    let client = super::client()?;
    let response = client
        .auth()
        .login(&LoginRequest {
            email: email.to_string(),
            password,
        })
        .await
        .context("Login failed")?;

    session_store::save(&response.token)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&response.user)?);
        return Ok(());
    }

    println!(
        "{} Logged in as {} ({})",
        "✓".green(),
        response.user.display_name.bold(),
        response.user.email
    );
    Ok(())
}

/// Clear the stored session token
pub fn logout(format: &str) -> Result<()> {
    session_store::clear()?;

    if format == "json" {
        println!("{}", serde_json::json!({"logged_out": true}));
        return Ok(());
    }

    println!("{} Logged out", "✓".green());
    Ok(())
}

/// Validate the stored session and show the current user
pub async fn whoami(format: &str) -> Result<()> {
    let client = super::client()?;

    if !client.session().is_authenticated() {
        bail!("No stored session; run `skillswap-api login` first");
    }

    let profile = match client.auth().validate().await {
        Ok(profile) => profile,
        Err(e) => {
            // The client already dropped the in-memory token; drop the file too.
            session_store::clear()?;
            return Err(e).context("Session is no longer valid");
        }
    };

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!(
        "{} {} ({})",
        "✓".green(),
        profile.display_name.bold(),
        profile.email
    );
    if let Some(bio) = &profile.bio {
        println!("  {bio}");
    }
    println!("  Skills: {}", format_ids(&profile.skill_ids));
    Ok(())
}

fn format_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        "none".to_string()
    } else {
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
