//! Aggregate launch statistics.

use super::launch::Launch;

/// Totals shown on the home page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchStats {
    pub total: u64,
    pub successful: u64,
}

impl LaunchStats {
    /// Computes totals over a list of launches.
    ///
    /// Only records with an explicit `success == true` count as successful.
    pub fn from_launches(launches: &[Launch]) -> Self {
        Self {
            total: launches.len() as u64,
            successful: launches.iter().filter(|l| l.success == Some(true)).count() as u64,
        }
    }
}
