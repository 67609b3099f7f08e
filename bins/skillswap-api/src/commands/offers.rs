//! Exchange offer commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use skillswap_api_client::endpoints::exchange_offers::ExchangeOfferFilters;

/// List exchange offers
pub async fn list(search: Option<&str>, active: Option<bool>, format: &str) -> Result<()> {
    let client = super::client()?;

    let mut filters = ExchangeOfferFilters::new();
    if let Some(search) = search {
        filters = filters.with_search_text(search);
    }
    if let Some(active) = active {
        filters = filters.with_active(active);
    }

    let offers = client
        .exchange_offers()
        .list(&filters)
        .await
        .context("Failed to list exchange offers")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&offers)?);
        return Ok(());
    }

    if offers.is_empty() {
        println!("No offers found");
        return Ok(());
    }

    println!("{} offer(s)", offers.len().to_string().bold());
    for offer in &offers {
        let state = if offer.is_active {
            "active".green().to_string()
        } else {
            "inactive".red().to_string()
        };
        println!("  #{:<5} {} [{}]", offer.id, offer.title, state);
        if let Some(description) = &offer.description {
            println!("         {description}");
        }
    }
    Ok(())
}

/// Delete an exchange offer
pub async fn delete(id: i64, format: &str) -> Result<()> {
    let client = super::client()?;
    client
        .exchange_offers()
        .delete(id)
        .await
        .with_context(|| format!("Failed to delete offer {id}"))?;

    if format == "json" {
        println!("{}", serde_json::json!({"deleted": id}));
        return Ok(());
    }

    println!("{} Deleted offer #{id}", "✓".green());
    Ok(())
}
