//! Domain layer containing the launch model and the feed accumulator.
//!
//! # Architecture
//!
//! - [`entities`] - Launch record, derived status, aggregate stats
//! - [`repositories`] - Data access trait definitions
//! - [`feed`] - Incremental page loading with de-duplication and cancellation
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits are implemented by [`crate::infrastructure`].

pub mod entities;
pub mod feed;
pub mod repositories;
