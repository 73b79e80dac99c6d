/// Page wiring and endpoint settings. `Default` matches the catalog page
/// served alongside the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Origin prepended to relative paths, e.g. `https://example.org`.
    /// Empty keeps every url relative.
    pub origin: String,
    pub search_path: String,
    pub manga_path: String,
    pub favorites_key: String,
    pub debounce_ms: u32,
    pub input_selector: String,
    pub list_id: String,
}

pub const DEFAULT_DEBOUNCE_MS: u32 = 400;
pub const FAVORITES_KEY: &str = "mangaFavorites";

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: String::new(),
            search_path: "/search".to_string(),
            manga_path: "/manga".to_string(),
            favorites_key: FAVORITES_KEY.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            input_selector: "input[name=\"q\"]".to_string(),
            list_id: "mangas-list".to_string(),
        }
    }
}

impl Config {
    pub fn with_origin(self, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            ..self
        }
    }
}

/// Picks the origin search requests go to: a non-empty override, else the
/// page location, else nothing.
pub fn resolve_origin(
    override_origin: Option<String>,
    location_origin: Option<String>,
) -> String {
    override_origin
        .filter(|origin| !origin.is_empty())
        .or(location_origin)
        .unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_resolve_origin_prefers_override() {
        let origin = resolve_origin(
            Some("http://localhost:5000".to_string()),
            Some("https://example.org".to_string()),
        );

        assert_eq!(origin, "http://localhost:5000");
    }

    #[test]
    fn test_resolve_origin_ignores_missing_override() {
        let location = Some("https://example.org".to_string());

        assert_eq!(resolve_origin(None, location.clone()), "https://example.org");
        assert_eq!(
            resolve_origin(Some("".to_string()), location),
            "https://example.org"
        );
    }

    #[test]
    fn test_with_origin_trims_trailing_slash() {
        let config = Config::default().with_origin("https://example.org/");

        assert_eq!(config.origin, "https://example.org");
    }
}
