//! Helpers shared by the web pages, the JSON API and the admin CLI.
//!
//! - [`format`] - pt-BR number and date formatting
//! - [`launch_id`] - Launch id validation
//! - [`session_id`] - Feed session id generation
//! - [`video`] - YouTube embed URL rewriting

pub mod format;
pub mod launch_id;
pub mod session_id;
pub mod video;
