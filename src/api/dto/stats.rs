//! DTO for aggregate launch statistics.

use serde::Serialize;

use crate::domain::entities::LaunchStats;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: u64,
    pub successful: u64,
}

impl From<LaunchStats> for StatsResponse {
    fn from(stats: LaunchStats) -> Self {
        Self {
            total: stats.total,
            successful: stats.successful,
        }
    }
}
