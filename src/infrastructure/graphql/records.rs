//! Wire shapes of the launch API responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::domain::entities::{Launch, LaunchLinks, RocketInfo, non_blank};

/// `data` of `GetLaunches` and `GetLaunchesSimple`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct LaunchesData {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub launches: Vec<Option<LaunchRecord>>,
}

impl LaunchesData {
    /// Converts the records, skipping `null` entries.
    pub fn into_launches(self) -> Vec<Launch> {
        self.launches.into_iter().flatten().map(Launch::from).collect()
    }
}

/// `data` of `GetLaunchDetails`. `launch` is `null` for unknown ids.
#[derive(Debug, Deserialize)]
pub struct LaunchData {
    #[serde(default)]
    pub launch: Option<LaunchRecord>,
}

#[derive(Debug, Deserialize)]
pub struct LaunchRecord {
    pub id: String,
    #[serde(default)]
    pub mission_name: Option<String>,
    #[serde(default)]
    pub launch_date_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    pub launch_success: Option<bool>,
    #[serde(default)]
    pub launch_site: Option<LaunchSiteRecord>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub links: Option<LinksRecord>,
    #[serde(default)]
    pub rocket: Option<RocketRecord>,
}

/// The site arrives either as a bare name or as `{ site_name_long }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LaunchSiteRecord {
    Name(String),
    Site { site_name_long: Option<String> },
}

impl LaunchSiteRecord {
    fn into_name(self) -> Option<String> {
        match self {
            Self::Name(name) => Some(name),
            Self::Site { site_name_long } => site_name_long,
        }
    }
}

#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct LinksRecord {
    #[serde(default)]
    pub mission_patch: Option<String>,
    #[serde(default)]
    pub mission_patch_small: Option<String>,
    #[serde(default)]
    pub article_link: Option<String>,
    #[serde(default)]
    pub video_link: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub flickr_images: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RocketRecord {
    #[serde(default)]
    pub rocket_name: Option<String>,
    #[serde(default)]
    pub rocket_type: Option<String>,
}

impl From<LinksRecord> for LaunchLinks {
    fn from(links: LinksRecord) -> Self {
        Self {
            mission_patch: non_blank(links.mission_patch),
            mission_patch_small: non_blank(links.mission_patch_small),
            article_link: non_blank(links.article_link),
            video_link: non_blank(links.video_link),
            wikipedia: non_blank(links.wikipedia),
            flickr_images: links
                .flickr_images
                .into_iter()
                .filter(|src| !src.trim().is_empty())
                .collect(),
        }
    }
}

impl From<LaunchRecord> for Launch {
    fn from(record: LaunchRecord) -> Self {
        let rocket = record.rocket.unwrap_or_default();
        Self {
            id: record.id,
            mission_name: record.mission_name.unwrap_or_default(),
            launch_date: record.launch_date_utc,
            success: record.launch_success,
            site: non_blank(record.launch_site.and_then(LaunchSiteRecord::into_name)),
            details: non_blank(record.details),
            links: record.links.unwrap_or_default().into(),
            rocket: RocketInfo {
                name: rocket.rocket_name.unwrap_or_default(),
                kind: rocket.rocket_type.unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_record_with_site_object() {
        let data: LaunchData = serde_json::from_value(json!({
            "launch": {
                "id": "109",
                "mission_name": "Starlink-15",
                "launch_date_utc": "2020-10-24T15:31:00.000Z",
                "launch_success": true,
                "details": "",
                "links": {
                    "mission_patch": "",
                    "mission_patch_small": null,
                    "article_link": null,
                    "video_link": "https://youtu.be/J442-ti-Dhg",
                    "wikipedia": "https://en.wikipedia.org/wiki/Starlink",
                    "flickr_images": null
                },
                "rocket": { "rocket_name": "Falcon 9", "rocket_type": "FT" },
                "launch_site": { "site_name_long": "Cape Canaveral Air Force Station" }
            }
        }))
        .unwrap();

        let launch: Launch = data.launch.unwrap().into();
        assert_eq!(launch.id, "109");
        assert_eq!(launch.site.as_deref(), Some("Cape Canaveral Air Force Station"));
        assert_eq!(launch.details, None);
        assert_eq!(launch.links.mission_patch, None);
        assert!(launch.links.flickr_images.is_empty());
        assert!(launch.has_video());
        assert_eq!(launch.rocket.kind, "FT");
    }

    #[test]
    fn test_site_as_plain_string() {
        let record: LaunchRecord = serde_json::from_value(json!({
            "id": "1",
            "mission_name": "FalconSat",
            "launch_date_utc": "2006-03-24T22:30:00.000Z",
            "launch_site": "Kwajalein Atoll"
        }))
        .unwrap();

        let launch = Launch::from(record);
        assert_eq!(launch.site.as_deref(), Some("Kwajalein Atoll"));
        assert_eq!(launch.success, None);
        assert_eq!(launch.rocket, RocketInfo::default());
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let data: LaunchesData = serde_json::from_value(json!({
            "launches": [
                null,
                { "id": "2", "launch_date_utc": "2007-03-21T01:10:00.000Z", "launch_success": false }
            ]
        }))
        .unwrap();

        let launches = data.into_launches();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].id, "2");
    }

    #[test]
    fn test_missing_date_keeps_record() {
        let data: LaunchesData = serde_json::from_value(json!({
            "launches": [
                { "id": "1", "launch_date_utc": null },
                { "id": "2" },
                { "id": "3", "launch_date_utc": "2007-03-21T01:10:00.000Z" }
            ]
        }))
        .unwrap();

        let launches = data.into_launches();
        assert_eq!(launches.len(), 3);
        assert_eq!(launches[0].launch_date, None);
        assert_eq!(launches[1].launch_date, None);
        assert!(launches[2].launch_date.is_some());
    }

    #[test]
    fn test_null_launch_list_is_empty() {
        let data: LaunchesData = serde_json::from_value(json!({ "launches": null })).unwrap();
        assert!(data.into_launches().is_empty());
    }
}
