//! # SpaceX Launch Portal
//!
//! A server-rendered catalog of SpaceX launches built with Axum, reading
//! from a public GraphQL API.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Launch entities, repository trait and the paginated feed
//! - **Application Layer** ([`application`]) - Page-level fallbacks and feed sessions
//! - **Infrastructure Layer** ([`infrastructure`]) - GraphQL client and response cache
//! - **API Layer** ([`api`]) - JSON API handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML pages rendered with Askama
//!
//! ## Features
//!
//! - Home page with launch statistics and recent launches
//! - Infinite-scroll catalog with a video-only filter
//! - Launch detail pages with video embed and image gallery
//! - Optional Redis caching of GraphQL responses
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! export GRAPHQL_ENDPOINT="https://spacex-production.up.railway.app/"  # Optional
//! export REDIS_URL="redis://localhost:6379"                           # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{FeedRegistry, LaunchService};
    pub use crate::domain::entities::{Launch, LaunchStats, LaunchStatus};
    pub use crate::domain::feed::{FeedParams, FetchOutcome, LaunchFeed, LaunchFilter};
    pub use crate::domain::repositories::LaunchRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
