//! Application layer services.
//!
//! Services consume repository traits and give handlers a small API with the
//! error policy of each view already applied.
//!
//! # Available Services
//!
//! - [`services::launch_service::LaunchService`] - Launch lists, stats and details with fallbacks
//! - [`services::feed_registry::FeedRegistry`] - Live catalog feed sessions

pub mod services;
