//! Launch entity representing one SpaceX mission record.

use chrono::{DateTime, Utc};

use super::status::LaunchStatus;

/// 2024-01-01T00:00:00Z
const FALLBACK_LAUNCH_TIMESTAMP: i64 = 1_704_067_200;

/// Media and reference links attached to a launch.
///
/// Optional fields are normalized on construction: blank strings from the
/// upstream API are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchLinks {
    pub mission_patch: Option<String>,
    pub mission_patch_small: Option<String>,
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub wikipedia: Option<String>,
    pub flickr_images: Vec<String>,
}

/// Rocket summary as exposed by the launch queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RocketInfo {
    pub name: String,
    pub kind: String,
}

/// A single launch record.
///
/// Records are fetched on render, held in transient view state and dropped
/// afterwards; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launch {
    pub id: String,
    pub mission_name: String,
    /// `None` when the upstream record carries no date.
    pub launch_date: Option<DateTime<Utc>>,
    pub success: Option<bool>,
    pub site: Option<String>,
    pub details: Option<String>,
    pub links: LaunchLinks,
    pub rocket: RocketInfo,
}

impl Launch {
    /// Derives the display status relative to `now`.
    ///
    /// An undated launch is never `Scheduled`.
    pub fn status_at(&self, now: DateTime<Utc>) -> LaunchStatus {
        LaunchStatus::derive(self.success, self.launch_date.unwrap_or(now), now)
    }

    /// Derives the display status relative to the current instant.
    pub fn status(&self) -> LaunchStatus {
        self.status_at(Utc::now())
    }

    /// Returns true if the launch has a non-blank video link.
    pub fn has_video(&self) -> bool {
        self.links
            .video_link
            .as_deref()
            .is_some_and(|link| !link.trim().is_empty())
    }

    /// Picks the image shown on cards and as the detail page cover.
    ///
    /// Preference order: mission patch, first gallery image, small patch.
    pub fn cover_image(&self) -> Option<&str> {
        self.links
            .mission_patch
            .as_deref()
            .or_else(|| {
                self.links
                    .flickr_images
                    .iter()
                    .map(String::as_str)
                    .find(|src| !src.is_empty())
            })
            .or(self.links.mission_patch_small.as_deref())
    }

    /// Static record served when the launch list cannot be fetched.
    pub fn fallback() -> Self {
        Self {
            id: "fallback-1".to_string(),
            mission_name: "Falcon 9 Test Flight".to_string(),
            launch_date: DateTime::from_timestamp(FALLBACK_LAUNCH_TIMESTAMP, 0),
            success: Some(true),
            site: Some("Cape Canaveral".to_string()),
            details: Some("Mission demonstration flight".to_string()),
            links: LaunchLinks::default(),
            rocket: RocketInfo {
                name: "Falcon 9".to_string(),
                kind: "FT".to_string(),
            },
        }
    }
}

/// Converts blank strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn launch() -> Launch {
        Launch {
            id: "abc".to_string(),
            mission_name: "Demo".to_string(),
            launch_date: Some(Utc::now() - Duration::days(10)),
            success: None,
            site: None,
            details: None,
            links: LaunchLinks::default(),
            rocket: RocketInfo::default(),
        }
    }

    #[test]
    fn test_has_video_ignores_blank_links() {
        let mut l = launch();
        assert!(!l.has_video());

        l.links.video_link = Some("   ".to_string());
        assert!(!l.has_video());

        l.links.video_link = Some("https://youtu.be/abc".to_string());
        assert!(l.has_video());
    }

    #[test]
    fn test_cover_image_preference() {
        let mut l = launch();
        assert!(l.cover_image().is_none());

        l.links.mission_patch_small = Some("small.png".to_string());
        assert_eq!(l.cover_image(), Some("small.png"));

        l.links.flickr_images = vec!["flickr.jpg".to_string()];
        assert_eq!(l.cover_image(), Some("flickr.jpg"));

        l.links.mission_patch = Some("patch.png".to_string());
        assert_eq!(l.cover_image(), Some("patch.png"));
    }

    #[test]
    fn test_fallback_record() {
        let l = Launch::fallback();
        assert_eq!(l.id, "fallback-1");
        assert_eq!(l.rocket.name, "Falcon 9");
        assert_eq!(l.status(), LaunchStatus::Succeeded);
    }

    #[test]
    fn test_undated_launch_is_never_scheduled() {
        let mut l = launch();
        l.launch_date = None;
        assert_eq!(l.status(), LaunchStatus::Indeterminate);

        l.success = Some(false);
        assert_eq!(l.status(), LaunchStatus::Failed);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("".to_string())), None);
        assert_eq!(non_blank(Some(" ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("x".to_string())), Some("x".to_string()));
    }
}
