//! Business logic services for the application layer.

pub mod feed_registry;
pub mod launch_service;

pub use feed_registry::{FeedRegistry, run_session_sweeper};
pub use launch_service::{HomeOverview, LaunchService};
