//! GraphQL access to the public SpaceX launch API.
//!
//! - [`GraphqlClient`] - HTTP transport, envelope decoding and response caching
//! - [`GraphqlLaunchRepository`] - [`crate::domain::repositories::LaunchRepository`] over the fixed queries

mod client;
mod launch_repository;
pub mod queries;
mod records;

pub use client::{FetchPolicy, GraphqlClient, GraphqlError};
pub use launch_repository::{GraphqlLaunchRepository, page_variables};
