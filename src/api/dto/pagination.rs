//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

/// Query parameters of `GET /api/launches`.
///
/// Uses `serde_with` to parse numbers from query strings. Both values are
/// optional and forwarded upstream only when present.
#[serde_as]
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LaunchListQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<usize>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub offset: Option<usize>,
}
