//! Mind content commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use skillswap_api_client::endpoints::mind_content::MindContentFilters;

/// Search mind content
pub async fn search(query: &str, format: &str) -> Result<()> {
    let client = super::client()?;
    let items = client
        .mind_content()
        .list(&MindContentFilters::new().with_search(query))
        .await
        .context("Failed to search mind content")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No content found");
        return Ok(());
    }

    println!("{} item(s)", items.len().to_string().bold());
    for item in &items {
        println!("  #{:<5} {} [{}]", item.id, item.title, item.category.blue());
        if let Some(summary) = &item.summary {
            println!("         {summary}");
        }
    }
    Ok(())
}
