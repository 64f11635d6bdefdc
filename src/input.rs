// this_file: fontresolve/src/input.rs
//
// Extraction of a font name from a bare name or a Fontsource catalog URL

use crate::{FontResolveError, Result};
use log::debug;
use url::Url;

/// Prefix of a font page on the Fontsource catalog
pub const CATALOG_PREFIX: &str = "https://fontsource.org/fonts/";

/// Hosts whose URLs are treated as catalog links
const CATALOG_HOSTS: &[&str] = &["fontsource.org", "www.fontsource.org"];

/// Path segment that precedes the font name in a catalog URL
const MARKER_SEGMENT: &str = "fonts";

/// Check whether the input looks like a link into the font catalog
pub fn is_catalog_url(raw: &str) -> bool {
    if raw.starts_with(CATALOG_PREFIX) {
        return true;
    }

    match Url::parse(raw) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url
                    .host_str()
                    .is_some_and(|host| CATALOG_HOSTS.contains(&host))
        }
        Err(_) => false,
    }
}

/// Extract the font name from the raw input.
///
/// Bare names, and URLs that are not catalog links, come back unchanged. For
/// a catalog URL the path segment following `/fonts/` is returned; query
/// strings and fragments are ignored. A catalog URL without a `fonts`
/// segment is also returned unchanged.
///
/// # Errors
///
/// [`FontResolveError::UnparseableUrl`] when a catalog URL cannot be parsed,
/// or when nothing follows the `fonts` segment (`https://fontsource.org/fonts`).
pub fn extract_font_name(raw: &str) -> Result<String> {
    if !is_catalog_url(raw) {
        return Ok(raw.to_string());
    }

    let url = Url::parse(raw)
        .map_err(|e| FontResolveError::UnparseableUrl(format!("{}: {}", raw, e)))?;
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.collect())
        .unwrap_or_default();
    debug!("catalog URL path segments: {:?}", segments);

    let Some(marker) = segments.iter().position(|s| *s == MARKER_SEGMENT) else {
        return Ok(raw.to_string());
    };

    match segments.get(marker + 1) {
        Some(name) if !name.is_empty() => Ok((*name).to_string()),
        _ => Err(FontResolveError::UnparseableUrl(format!(
            "{} does not name a font",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_catalog_url() {
        assert_eq!(
            extract_font_name("https://fontsource.org/fonts/noto-sans-mono").unwrap(),
            "noto-sans-mono"
        );
        assert_eq!(
            extract_font_name("https://fontsource.org/fonts/roboto/install").unwrap(),
            "roboto"
        );
        assert_eq!(
            extract_font_name("https://fontsource.org/fonts/inter/").unwrap(),
            "inter"
        );
    }

    #[test]
    fn test_extract_ignores_query_and_fragment() {
        assert_eq!(
            extract_font_name("https://fontsource.org/fonts/lato?subset=latin#preview").unwrap(),
            "lato"
        );
    }

    #[test]
    fn test_extract_accepts_other_catalog_forms() {
        assert_eq!(
            extract_font_name("http://www.fontsource.org/fonts/open-sans").unwrap(),
            "open-sans"
        );
        assert_eq!(
            extract_font_name("https://FontSource.org/fonts/open-sans").unwrap(),
            "open-sans"
        );
    }

    #[test]
    fn test_bare_names_pass_through() {
        assert_eq!(extract_font_name("Noto Sans JP").unwrap(), "Noto Sans JP");
        assert_eq!(extract_font_name("open-sans").unwrap(), "open-sans");
        assert_eq!(extract_font_name("").unwrap(), "");
    }

    #[test]
    fn test_foreign_urls_pass_through() {
        let raw = "https://fonts.google.com/specimen/Roboto";
        assert!(!is_catalog_url(raw));
        assert_eq!(extract_font_name(raw).unwrap(), raw);
    }

    #[test]
    fn test_catalog_url_without_marker_passes_through() {
        let raw = "https://fontsource.org/docs/getting-started";
        assert!(is_catalog_url(raw));
        assert_eq!(extract_font_name(raw).unwrap(), raw);
    }

    #[test]
    fn test_catalog_url_without_font_is_rejected() {
        for raw in [
            "https://fontsource.org/fonts",
            "https://fontsource.org/fonts/",
            "https://fontsource.org/fonts?q=sans",
        ] {
            match extract_font_name(raw) {
                Err(FontResolveError::UnparseableUrl(msg)) => assert!(msg.contains(raw)),
                other => panic!("Expected UnparseableUrl for {raw}, got {other:?}"),
            }
        }
    }
}
