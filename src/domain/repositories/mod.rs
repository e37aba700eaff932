//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for reading launch data; the GraphQL
//! implementation lives in `crate::infrastructure::graphql`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod launch_repository;

pub use launch_repository::LaunchRepository;

#[cfg(test)]
pub use launch_repository::MockLaunchRepository;
