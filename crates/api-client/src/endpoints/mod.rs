//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one resource domain of the
//! Skillswap backend. Facades add no behavior of their own: every function
//! wraps exactly one client call and passes failures straight through.
//!
//! | Module | Backend resource | Description |
//! |--------|-----------------|-------------|
//! | `auth` | `/sessions`, `/users/me` | Session lifecycle (login, logout, validate) |
//! | `exchange_offers` | `/exchange_offers` | Skill exchange offer CRUD |
//! | `challenges` | `/practice_challenges` | Challenge templates and completions |
//! | `mind_content` | `/mind_content` | Curated learning content |
//! | `endorsements` | `/endorsements` | Skill endorsements |
//! | `users` | `/users` | User profiles |

pub mod auth;
pub mod challenges;
pub mod endorsements;
pub mod exchange_offers;
pub mod mind_content;
pub mod users;

pub use auth::AuthApi;
pub use challenges::ChallengesApi;
pub use endorsements::EndorsementsApi;
pub use exchange_offers::ExchangeOffersApi;
pub use mind_content::MindContentApi;
pub use users::UsersApi;
