//! Video link helpers.

use url::Url;

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

/// Rewrites YouTube watch and short links to their embeddable form.
///
/// `youtube.com/watch?v=ID` and `youtu.be/ID` become
/// `https://www.youtube.com/embed/ID`. Anything else, including links that
/// fail to parse, is returned unchanged.
pub fn embed_url(link: &str) -> String {
    let Ok(url) = Url::parse(link) else {
        return link.to_string();
    };
    let host = url.host_str().unwrap_or_default();

    if host.contains("youtube.com") {
        return match url.query_pairs().find(|(key, _)| key == "v") {
            Some((_, id)) if !id.is_empty() => format!("{YOUTUBE_EMBED}{id}"),
            _ => link.to_string(),
        };
    }

    if host.contains("youtu.be") {
        let id = url.path().trim_start_matches('/');
        if !id.is_empty() {
            return format!("{YOUTUBE_EMBED}{id}");
        }
    }

    link.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_link() {
        assert_eq!(
            embed_url("https://www.youtube.com/watch?v=0a_00nJ_Y88"),
            "https://www.youtube.com/embed/0a_00nJ_Y88"
        );
    }

    #[test]
    fn test_short_link() {
        assert_eq!(
            embed_url("https://youtu.be/Lk4zQ2wP-Nc"),
            "https://www.youtube.com/embed/Lk4zQ2wP-Nc"
        );
    }

    #[test]
    fn test_youtube_without_id_is_unchanged() {
        let link = "https://www.youtube.com/channel/spacex";
        assert_eq!(embed_url(link), link);
        assert_eq!(embed_url("https://youtu.be/"), "https://youtu.be/");
    }

    #[test]
    fn test_other_links_are_unchanged() {
        assert_eq!(embed_url("https://vimeo.com/1234"), "https://vimeo.com/1234");
        assert_eq!(embed_url("not a url"), "not a url");
    }
}
