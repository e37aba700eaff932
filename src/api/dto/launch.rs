//! DTOs for launch records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Launch;

#[derive(Debug, Serialize)]
pub struct RocketDto {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct LinksDto {
    pub mission_patch: Option<String>,
    pub mission_patch_small: Option<String>,
    pub article_link: Option<String>,
    pub video_link: Option<String>,
    pub wikipedia: Option<String>,
    pub flickr_images: Vec<String>,
}

/// A launch as returned by the JSON API.
///
/// `status` is derived at response time: `scheduled`, `succeeded`, `failed`
/// or `indeterminate`.
#[derive(Debug, Serialize)]
pub struct LaunchDto {
    pub id: String,
    pub mission_name: String,
    pub launch_date_utc: Option<DateTime<Utc>>,
    pub launch_success: Option<bool>,
    pub status: &'static str,
    pub has_video: bool,
    pub site: Option<String>,
    pub details: Option<String>,
    pub rocket: RocketDto,
    pub links: LinksDto,
}

impl LaunchDto {
    pub fn new(launch: Launch, now: DateTime<Utc>) -> Self {
        let status = launch.status_at(now).code();
        let has_video = launch.has_video();
        let links = launch.links;

        Self {
            id: launch.id,
            mission_name: launch.mission_name,
            launch_date_utc: launch.launch_date,
            launch_success: launch.success,
            status,
            has_video,
            site: launch.site,
            details: launch.details,
            rocket: RocketDto {
                name: launch.rocket.name,
                kind: launch.rocket.kind,
            },
            links: LinksDto {
                mission_patch: links.mission_patch,
                mission_patch_small: links.mission_patch_small,
                article_link: links.article_link,
                video_link: links.video_link,
                wikipedia: links.wikipedia,
                flickr_images: links.flickr_images,
            },
        }
    }
}

/// Response of `GET /api/launches`.
#[derive(Debug, Serialize)]
pub struct LaunchListResponse {
    pub items: Vec<LaunchDto>,
    pub count: usize,
}

impl LaunchListResponse {
    pub fn new(launches: Vec<Launch>) -> Self {
        let now = Utc::now();
        let items: Vec<LaunchDto> = launches
            .into_iter()
            .map(|launch| LaunchDto::new(launch, now))
            .collect();

        Self {
            count: items.len(),
            items,
        }
    }
}
