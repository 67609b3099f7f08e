//! CLI command implementations

pub mod auth;
pub mod challenges;
pub mod content;
pub mod offers;

use crate::session_store;
use anyhow::{Context, Result};
use skillswap_api_client::{ClientConfig, Session, SkillswapClient};

/// Build a client with the stored session token restored, if one exists
pub(crate) fn client() -> Result<SkillswapClient> {
    let config = ClientConfig::from_env().context("Failed to load client configuration")?;
    let session = Session::new();
    if let Some(token) = session_store::load() {
        tracing::debug!("Restored stored session token");
        session.set_token(Some(token));
    }
    SkillswapClient::with_session(config, session).context("Failed to build API client")
}
