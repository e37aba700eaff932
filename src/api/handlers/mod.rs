//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod launches;
pub mod stats;

pub use health::health_handler;
pub use launches::{launch_handler, launch_list_handler};
pub use stats::stats_handler;
