//! Practice challenge commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use skillswap_api_client::endpoints::challenges::{ChallengeSubmission, ChallengeTemplateFilters};

/// List challenge templates
pub async fn templates(skill: Option<i64>, difficulty: Option<&str>, format: &str) -> Result<()> {
    let client = super::client()?;

    let mut filters = ChallengeTemplateFilters::new();
    if let Some(skill) = skill {
        filters = filters.with_skill(skill);
    }
    if let Some(difficulty) = difficulty {
        filters = filters.with_difficulty(difficulty);
    }

    let templates = client
        .challenges()
        .templates(&filters)
        .await
        .context("Failed to list challenge templates")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&templates)?);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No templates found");
        return Ok(());
    }

    println!("{} template(s)", templates.len().to_string().bold());
    for template in &templates {
        println!(
            "  #{:<5} {} [{}]",
            template.id,
            template.title,
            template.difficulty.yellow()
        );
    }
    Ok(())
}

/// Submit a challenge completion
pub async fn complete(
    id: i64,
    solution: &str,
    minutes: Option<u32>,
    format: &str,
) -> Result<()> {
    let client = super::client()?;
    let completion = client
        .challenges()
        .complete(&ChallengeSubmission {
            challenge_id: id,
            solution: solution.to_string(),
            minutes_spent: minutes,
        })
        .await
        .with_context(|| format!("Failed to submit completion for challenge {id}"))?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&completion)?);
        return Ok(());
    }

    println!(
        "{} Completed challenge #{} at {}",
        "✓".green(),
        completion.challenge_id,
        completion.completed_at
    );
    if let Some(points) = completion.points {
        println!("  Points: {}", points.to_string().green());
    }
    Ok(())
}
