//! Skillswap API CLI - diagnostics and management for the Skillswap backend
//!
//! A developer-facing consumer of `skillswap-api-client`: log in, inspect
//! the current session, and poke the resource endpoints from a terminal.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::process::ExitCode;

mod commands;
mod session_store;

use commands::{auth, challenges, content, offers};

/// Diagnostics and management CLI for the Skillswap API
#[derive(Parser)]
#[command(name = "skillswap-api")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        /// Account email
        email: String,

        /// Password (falls back to the SKILLSWAP_PASSWORD environment variable)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Clear the stored session token
    Logout,

    /// Validate the stored session and show the current user
    Whoami,

    /// Exchange offer operations
    Offers {
        #[command(subcommand)]
        action: OfferAction,
    },

    /// Practice challenge operations
    Challenges {
        #[command(subcommand)]
        action: ChallengeAction,
    },

    /// Search mind content
    Content {
        /// Search term
        query: String,
    },
}

#[derive(Subcommand)]
enum OfferAction {
    /// List exchange offers
    List {
        /// Free-text search over offers
        #[arg(short, long)]
        search: Option<String>,

        /// Only active (true) or inactive (false) offers
        #[arg(short, long)]
        active: Option<bool>,
    },

    /// Delete an exchange offer
    Delete {
        /// Offer ID
        id: i64,
    },
}

#[derive(Subcommand)]
enum ChallengeAction {
    /// List challenge templates
    Templates {
        /// Filter by associated skill ID
        #[arg(short, long)]
        skill: Option<i64>,

        /// Filter by difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<String>,
    },

    /// Submit a challenge completion
    Complete {
        /// Challenge template ID
        id: i64,

        /// Written solution text
        #[arg(short, long)]
        solution: String,

        /// Minutes spent
        #[arg(short, long)]
        minutes: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("skillswap_api=debug,skillswap_api_client=debug")
            .init();
    }

    let result = match cli.command {
        Commands::Login { email, password } => {
            auth::login(&email, password.as_deref(), &cli.format).await
        }

        Commands::Logout => auth::logout(&cli.format),

        Commands::Whoami => auth::whoami(&cli.format).await,

        Commands::Offers { action } => match action {
            OfferAction::List { search, active } => {
                offers::list(search.as_deref(), active, &cli.format).await
            }
            OfferAction::Delete { id } => offers::delete(id, &cli.format).await,
        },

        Commands::Challenges { action } => match action {
            ChallengeAction::Templates { skill, difficulty } => {
                challenges::templates(skill, difficulty.as_deref(), &cli.format).await
            }
            ChallengeAction::Complete {
                id,
                solution,
                minutes,
            } => challenges::complete(id, &solution, minutes, &cli.format).await,
        },

        Commands::Content { query } => content::search(&query, &cli.format).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
