//! Server-rendered portal pages.
//!
//! Uses Askama templates from `templates/`. Handlers build view models from
//! [`view`] so templates only print prepared values.
//!
//! # Modules
//!
//! - [`handlers`] - Page and feed handlers
//! - [`routes`] - Page route configuration
//! - [`view`] - View models shared by templates

pub mod handlers;
pub mod routes;
pub mod view;
