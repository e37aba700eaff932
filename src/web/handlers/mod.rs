//! HTML rendering handlers for the portal pages.

mod catalog;
mod detail;
mod feed;
mod home;
mod not_found;
mod pages;

pub use catalog::{CatalogQuery, catalog_handler};
pub use detail::detail_handler;
pub use feed::{FeedResponse, feed_close_handler, feed_next_handler, feed_reset_handler};
pub use home::{HOME_CARD_LIMIT, home_handler};
pub use not_found::{not_found_handler, not_found_page};
pub use pages::{about_handler, privacy_handler};
