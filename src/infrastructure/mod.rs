//! Infrastructure layer for external integrations.
//!
//! - [`cache`] - Response caching (Redis and no-op implementations)
//! - [`graphql`] - GraphQL client and the launch repository built on it

pub mod cache;
pub mod graphql;
