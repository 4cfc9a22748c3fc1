use std::env;

pub const OUTPUT_DIR: &str = "public";

// Site-wide metadata shared by every page.
pub const SITE_NAME: &str = "Код Воробья";
pub const SITE_BASE_URL: &str = "https://sparrowcode.io/";
pub const SITE_LANG: &str = "ru";
pub const TELEGRAM_LINK: &str = "https://t.me/ivanvorobei";

/// Read-only configuration handed to the renderers at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub telegram_link: String,
    pub base_url: String,
    pub output_dir: String,
    pub minify: bool,
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        site_name: SITE_NAME.to_string(),
        telegram_link: TELEGRAM_LINK.to_string(),
        base_url: SITE_BASE_URL.trim_end_matches('/').to_string(),
        output_dir: OUTPUT_DIR.to_string(),
        minify: false,
    }
}

impl SiteConfig {
    /// Defaults overridden by `PAGES_OUTPUT_DIR`, `PAGES_BASE_URL` and
    /// `PAGES_MINIFY`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = site_config();

        if let Some(dir) = lookup("PAGES_OUTPUT_DIR").filter(|d| !d.trim().is_empty()) {
            config.output_dir = dir;
        }
        if let Some(url) = lookup("PAGES_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(flag) = lookup("PAGES_MINIFY") {
            config.minify = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Absolute URL of a site route, e.g. `ru/contribute`.
    pub fn url(&self, route: &str) -> String {
        format!("{}/{}", self.base_url, route.trim_start_matches('/'))
    }
}
