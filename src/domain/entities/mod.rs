//! Core domain entities representing the launch data model.
//!
//! Entities are plain data structures. Everything shown on a page that is not
//! stored upstream (status, cover image, video flag) is derived here.
//!
//! # Entity Types
//!
//! - [`Launch`] - A launch record with its links and rocket summary
//! - [`LaunchStatus`] - Display status derived from success flag and date
//! - [`LaunchStats`] - Aggregate totals for the home page

pub mod launch;
pub mod stats;
pub mod status;

pub use launch::{Launch, LaunchLinks, RocketInfo, non_blank};
pub use stats::LaunchStats;
pub use status::LaunchStatus;
