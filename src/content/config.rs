use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://192.168.0.106:1337";

const GLOBAL_CONTENT_PATH: &str = "/api/global?populate=deep";

/// Where the content service lives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(alias = "baseUrl")]
    pub base_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ContentConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Uses `CONTENT_BASE_URL` from the build environment when it was set.
    ///
    /// Read at compile time so the server and the wasm bundle agree.
    pub fn from_build_env() -> Self {
        match option_env!("CONTENT_BASE_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}{GLOBAL_CONTENT_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_url_and_path() {
        assert_eq!(
            ContentConfig::default().endpoint(),
            "http://192.168.0.106:1337/api/global?populate=deep"
        );
        assert_eq!(
            ContentConfig::new("https://cms.example.org//").endpoint(),
            "https://cms.example.org/api/global?populate=deep"
        );
    }

    #[test]
    fn camel_case_key_is_accepted() {
        let config: ContentConfig =
            serde_json::from_str(r#"{"baseUrl":"http://localhost:1337"}"#).unwrap();
        assert_eq!(config, ContentConfig::new("http://localhost:1337"));

        let config: ContentConfig =
            serde_json::from_str(r#"{"base_url":"http://localhost:1337"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:1337");
    }
}
