//! Static content pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use chrono::Utc;

use crate::utils::format::card_date;
use crate::web::view::{Layout, NavItem};

#[derive(Template, WebTemplate)]
#[template(path = "about.html")]
pub struct AboutTemplate {
    pub layout: Layout,
}

#[derive(Template, WebTemplate)]
#[template(path = "privacy.html")]
pub struct PrivacyTemplate {
    pub layout: Layout,
    /// Date shown as "Última atualização", `dd/mm/yyyy`.
    pub updated: String,
}

/// `GET /about`
pub async fn about_handler() -> impl IntoResponse {
    AboutTemplate {
        layout: Layout::new(NavItem::About),
    }
}

/// `GET /privacy`
pub async fn privacy_handler() -> impl IntoResponse {
    PrivacyTemplate {
        layout: Layout::privacy(),
        updated: card_date(Utc::now()),
    }
}
