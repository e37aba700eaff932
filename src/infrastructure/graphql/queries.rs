//! The fixed GraphQL documents sent to the launch API.

/// A named GraphQL operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub operation: &'static str,
    pub document: &'static str,
}

/// Paged launch list with every field shown on a card.
pub const GET_LAUNCHES: Query = Query {
    operation: "GetLaunches",
    document: r#"query GetLaunches($limit: Int, $offset: Int) {
  launches(limit: $limit, offset: $offset) {
    id
    mission_name
    launch_date_utc
    launch_success
    details
    links {
      mission_patch
      mission_patch_small
      article_link
      video_link
      wikipedia
      flickr_images
    }
    rocket {
      rocket_name
      rocket_type
    }
  }
}"#,
};

/// Minimal listing used for aggregate statistics.
pub const GET_LAUNCHES_SIMPLE: Query = Query {
    operation: "GetLaunchesSimple",
    document: r#"query GetLaunchesSimple($limit: Int) {
  launches(limit: $limit) {
    id
    mission_name
    launch_date_utc
    launch_success
  }
}"#,
};

/// One launch with the launch site included.
pub const GET_LAUNCH_DETAILS: Query = Query {
    operation: "GetLaunchDetails",
    document: r#"query GetLaunchDetails($id: ID!) {
  launch(id: $id) {
    id
    mission_name
    launch_date_utc
    launch_success
    details
    links {
      mission_patch
      mission_patch_small
      article_link
      video_link
      wikipedia
      flickr_images
    }
    rocket {
      rocket_name
      rocket_type
    }
    launch_site {
      site_name_long
    }
  }
}"#,
};

/// Cheapest possible round trip, used by health checks.
pub const PING: Query = Query {
    operation: "Ping",
    document: "query Ping { __typename }",
};
