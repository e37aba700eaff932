//! View models shared by the page templates.
//!
//! Templates only print fields; every label, date and fallback text is
//! resolved here.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Launch, LaunchStatus};
use crate::utils::format::{card_date, current_year, full_date, iso_datetime};
use crate::utils::video::embed_url;

pub const UNAVAILABLE: &str = "Indisponível";
pub const NO_DETAILS: &str = "Sem descrição disponível para este lançamento.";
pub const SITE_NAME: &str = "SpaceX Launch Portal";

/// Navigation entry highlighted in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Catalog,
    About,
    None,
}

impl NavItem {
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Catalog => "catalog",
            Self::About => "about",
            Self::None => "",
        }
    }
}

/// Values used by `base.html` on every page.
#[derive(Debug, Clone)]
pub struct Layout {
    pub nav: NavItem,
    pub year: i32,
    pub on_privacy: bool,
}

impl Layout {
    pub fn new(nav: NavItem) -> Self {
        Self {
            nav,
            year: current_year(),
            on_privacy: false,
        }
    }

    pub fn privacy() -> Self {
        Self {
            on_privacy: true,
            ..Self::new(NavItem::None)
        }
    }

    /// True if the nav link named `key` points at the current page.
    pub fn is_current(&self, key: &str) -> bool {
        !key.is_empty() && self.nav.key() == key
    }
}

/// One step of the breadcrumb trail; the last step has no link.
#[derive(Debug, Clone)]
pub struct Crumb {
    pub label: String,
    pub href: Option<&'static str>,
}

impl Crumb {
    fn link(label: &str, href: &'static str) -> Self {
        Self {
            label: label.to_string(),
            href: Some(href),
        }
    }

    fn current(label: &str) -> Self {
        Self {
            label: label.to_string(),
            href: None,
        }
    }
}

/// Início › Lançamentos
pub fn catalog_breadcrumbs() -> Vec<Crumb> {
    vec![Crumb::link("Início", "/"), Crumb::current("Lançamentos")]
}

/// Início › Lançamentos › mission
pub fn detail_breadcrumbs(mission_name: &str) -> Vec<Crumb> {
    vec![
        Crumb::link("Início", "/"),
        Crumb::link("Lançamentos", "/launches"),
        Crumb::current(mission_name),
    ]
}

#[derive(Debug, Clone)]
pub struct StatusBadge {
    pub label: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub icon_alt: &'static str,
    pub css_class: &'static str,
}

impl From<LaunchStatus> for StatusBadge {
    fn from(status: LaunchStatus) -> Self {
        Self {
            label: status.label(),
            description: status.description(),
            icon: status.icon(),
            icon_alt: status.icon_alt(),
            css_class: status.css_class(),
        }
    }
}

fn rocket_text(launch: &Launch) -> String {
    let name = if launch.rocket.name.is_empty() {
        UNAVAILABLE
    } else {
        launch.rocket.name.as_str()
    };
    if launch.rocket.kind.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, launch.rocket.kind)
    }
}

/// One launch card in a grid.
#[derive(Debug, Clone)]
pub struct LaunchCardView {
    pub id: String,
    pub href: String,
    pub mission_name: String,
    pub image: Option<String>,
    pub date_text: String,
    pub date_iso: Option<String>,
    pub rocket: String,
    pub site: String,
    pub status: StatusBadge,
    pub has_video: bool,
    pub details: Option<String>,
}

impl LaunchCardView {
    pub fn new(launch: &Launch, now: DateTime<Utc>) -> Self {
        Self {
            id: launch.id.clone(),
            href: format!("/launches/{}", launch.id),
            mission_name: launch.mission_name.clone(),
            image: launch.cover_image().map(str::to_string),
            date_text: launch
                .launch_date
                .map(card_date)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            date_iso: launch.launch_date.map(iso_datetime),
            rocket: rocket_text(launch),
            site: launch.site.clone().unwrap_or_else(|| UNAVAILABLE.to_string()),
            status: launch.status_at(now).into(),
            has_video: launch.has_video(),
            details: launch.details.clone(),
        }
    }

    pub fn from_launches(launches: &[Launch]) -> Vec<Self> {
        let now = Utc::now();
        launches.iter().map(|l| Self::new(l, now)).collect()
    }
}

#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub anchor: String,
    pub src: String,
    pub alt: String,
}

/// Everything shown on the launch detail page.
#[derive(Debug, Clone)]
pub struct LaunchDetailView {
    pub id: String,
    pub mission_name: String,
    pub page_title: String,
    pub meta_description: String,
    pub og_image: Option<String>,
    pub cover: Option<String>,
    pub status: StatusBadge,
    pub wikipedia: Option<String>,
    pub article: Option<String>,
    pub date_text: String,
    pub date_iso: Option<String>,
    pub rocket: String,
    pub site: String,
    pub details: String,
    pub video_embed: Option<String>,
    pub gallery: Vec<GalleryImage>,
}

impl LaunchDetailView {
    pub fn new(launch: &Launch, now: DateTime<Utc>) -> Self {
        let links = &launch.links;
        let cover = links
            .mission_patch
            .clone()
            .or_else(|| links.flickr_images.first().cloned());

        let gallery = links
            .flickr_images
            .iter()
            .enumerate()
            .map(|(i, src)| GalleryImage {
                anchor: format!("imagem-{}", i + 1),
                src: src.clone(),
                alt: format!("Imagem {} do lançamento {}", i + 1, launch.mission_name),
            })
            .collect();

        Self {
            id: launch.id.clone(),
            mission_name: launch.mission_name.clone(),
            page_title: format!("{} — {}", launch.mission_name, SITE_NAME),
            meta_description: launch.details.clone().unwrap_or_else(|| {
                format!(
                    "Detalhes do lançamento {} no {}.",
                    launch.mission_name, SITE_NAME
                )
            }),
            og_image: links.mission_patch.clone(),
            cover,
            status: launch.status_at(now).into(),
            wikipedia: links.wikipedia.clone(),
            article: links.article_link.clone(),
            date_text: launch
                .launch_date
                .map(full_date)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
            date_iso: launch.launch_date.map(iso_datetime),
            rocket: rocket_text(launch),
            site: launch.site.clone().unwrap_or_else(|| UNAVAILABLE.to_string()),
            details: launch.details.clone().unwrap_or_else(|| NO_DETAILS.to_string()),
            video_embed: if launch.has_video() {
                links.video_link.as_deref().map(embed_url)
            } else {
                None
            },
            gallery,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn launch() -> Launch {
        let mut l = Launch::fallback();
        l.id = "42".to_string();
        l.mission_name = "CRS-20".to_string();
        l.launch_date = Some(Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap());
        l.site = None;
        l.details = None;
        l
    }

    #[test]
    fn test_card_defaults() {
        let card = LaunchCardView::new(&launch(), Utc::now());
        assert_eq!(card.href, "/launches/42");
        assert_eq!(card.date_text, "01/01/2023");
        assert_eq!(card.site, UNAVAILABLE);
        assert_eq!(card.rocket, "Falcon 9 (FT)");
        assert_eq!(card.status.label, "Lançado com Sucesso");
        assert!(card.image.is_none());
    }

    #[test]
    fn test_detail_defaults_and_embed() {
        let mut l = launch();
        l.links.video_link = Some("https://www.youtube.com/watch?v=abc123".to_string());
        l.links.flickr_images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        l.links.mission_patch_small = Some("small.png".to_string());

        let view = LaunchDetailView::new(&l, Utc::now());
        assert_eq!(view.page_title, "CRS-20 — SpaceX Launch Portal");
        assert_eq!(view.details, NO_DETAILS);
        assert_eq!(view.site, UNAVAILABLE);
        assert_eq!(view.cover.as_deref(), Some("a.jpg"));
        assert_eq!(view.og_image, None);
        assert_eq!(
            view.video_embed.as_deref(),
            Some("https://www.youtube.com/embed/abc123")
        );
        assert_eq!(view.gallery.len(), 2);
        assert_eq!(view.gallery[1].alt, "Imagem 2 do lançamento CRS-20");
        assert!(view.date_text.contains("janeiro"));
    }

    #[test]
    fn test_undated_launch_shows_unavailable() {
        let mut l = launch();
        l.launch_date = None;

        let card = LaunchCardView::new(&l, Utc::now());
        assert_eq!(card.date_text, UNAVAILABLE);
        assert!(card.date_iso.is_none());

        let view = LaunchDetailView::new(&l, Utc::now());
        assert_eq!(view.date_text, UNAVAILABLE);
        assert!(view.date_iso.is_none());
    }

    #[test]
    fn test_rocket_without_type() {
        let mut l = launch();
        l.rocket.kind = String::new();
        assert_eq!(LaunchCardView::new(&l, Utc::now()).rocket, "Falcon 9");
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs = detail_breadcrumbs("CRS-20");
        let labels: Vec<_> = crumbs.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Início", "Lançamentos", "CRS-20"]);
        assert_eq!(crumbs[1].href, Some("/launches"));
        assert!(crumbs[2].href.is_none());
        assert!(catalog_breadcrumbs()[1].href.is_none());
    }

    #[test]
    fn test_layout_marks_current_nav() {
        let layout = Layout::new(NavItem::Catalog);
        assert!(layout.is_current("catalog"));
        assert!(!layout.is_current("home"));
        assert!(!Layout::new(NavItem::None).is_current(""));
        assert!(Layout::privacy().on_privacy);
    }
}
