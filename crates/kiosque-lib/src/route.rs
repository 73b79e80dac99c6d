use crate::config::Config;

/// Builds the urls the page talks to and links to.
#[derive(Debug, Clone)]
pub struct Routes {
    origin: String,
    search_path: String,
    manga_path: String,
}

impl Routes {
    pub fn new(config: &Config) -> Self {
        Self {
            origin: config.origin.clone(),
            search_path: config.search_path.clone(),
            manga_path: config.manga_path.clone(),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}{}?q={}",
            self.origin,
            self.search_path,
            urlencoding::encode(query)
        )
    }

    /// Detail page link, relative to the current page.
    pub fn manga_url(&self, name: &str) -> String {
        [self.manga_path.clone(), urlencoding::encode(name).into_owned()].join("/")
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
