//! Typed API client for the Skillswap backend
//!
//! This crate provides the authenticated request pipeline the Skillswap
//! clients are built on: request materialization (URL, headers, Bearer
//! token overlay, JSON body), single-shot dispatch, and response
//! normalization into a typed result, plus a facade per backend resource.
//!
//! # Features
//!
//! - **Injected session state**: the token lives in a cloneable [`Session`]
//!   handle, set by login and cleared by logout or a failed validation
//! - **Deterministic request building**: headers and body are fixed at
//!   prepare time and inspectable before dispatch
//! - **Structured failures**: non-2xx responses become
//!   [`ApiError::Status`] with status, message, and the raw error body;
//!   transport faults stay a distinct variant
//! - **Typed facades**: one module per resource with ordered,
//!   definedness-gated query filters
//!
//! # Example
//!
//! ```rust,no_run
//! use skillswap_api_client::{SkillswapClient, ClientConfig};
//! use skillswap_api_client::endpoints::auth::LoginRequest;
//! use skillswap_api_client::endpoints::challenges::ChallengeTemplateFilters;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SkillswapClient::with_config(ClientConfig::from_env()?)?;
//!
//!     client.auth().login(&LoginRequest {
//!         email: "mara@example.com".into(),
//!         password: "hunter2".into(),
//!     }).await?;
//!
//!     let templates = client
//!         .challenges()
//!         .templates(&ChallengeTemplateFilters::new().with_difficulty("medium"))
//!         .await?;
//!     println!("{} templates", templates.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
mod query;
pub mod request;
pub mod session;

pub use client::SkillswapClient;
pub use config::{ClientConfig, Environment};
pub use error::{ApiError, ApiResult};
pub use request::{PreparedRequest, RequestOptions};
pub use session::Session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SkillswapClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{
        AuthApi, ChallengesApi, EndorsementsApi, ExchangeOffersApi, MindContentApi, UsersApi,
    };
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::request::{PreparedRequest, RequestOptions};
    pub use crate::session::Session;
}
