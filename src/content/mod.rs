//! Page text served by the headless CMS, with a built-in fallback when the
//! CMS is unreachable or answers with something unexpected.

use serde::{Deserialize, Serialize};

mod config;
mod diagnostics;
mod error;
mod lifecycle;
mod source;

pub use config::*;
pub use diagnostics::*;
pub use error::*;
pub use lifecycle::*;
pub use source::*;

const FALLBACK_TITLE: &str = "David Hoffert";
const FALLBACK_DESCRIPTION: &str = "Ich bin David Hoffert, Softwareentwickler aus Berlin. \
Aktuell befinde ich mich im Abschlussjahr meiner Umschulung und arbeite an spannenden \
Projekten im Bereich Webentwicklung. Meine Leidenschaft gilt der Erstellung moderner, \
nutzerfreundlicher Anwendungen mit aktuellen Technologien.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPayload {
    pub title: String,
    pub description: String,
}

impl ContentPayload {
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
        }
    }
}

/// Fetches and decodes the content document once.
pub async fn load_content<S: ContentSource>(
    source: &S,
    config: &ContentConfig,
) -> Result<ContentPayload, ContentError> {
    let response = source.get(&config.endpoint()).await?;
    if !response.is_success() {
        return Err(ContentError::Status(response.status));
    }
    extract_content(&response.body)
}

/// Pulls the content object out of a `{"data": {...}}` document.
///
/// Strapi v4 nests the fields one level deeper under `attributes`, that
/// layout is only consulted when `data` itself has no usable fields.
/// Anything else counts as no content.
pub fn extract_content(body: &str) -> Result<ContentPayload, ContentError> {
    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ContentError::Malformed(e.to_string()))?;

    let Some(data) = document.get("data") else {
        return Err(ContentError::MissingContent);
    };
    if let Ok(content) = ContentPayload::deserialize(data) {
        return Ok(content);
    }
    data.get("attributes")
        .and_then(|attributes| ContentPayload::deserialize(attributes).ok())
        .ok_or(ContentError::MissingContent)
}

/// Loads the content, reporting failures to `diagnostics` instead of
/// returning them. `None` means the fallback should be shown.
pub async fn resolve_content<S: ContentSource, D: Diagnostics>(
    source: &S,
    config: &ContentConfig,
    diagnostics: &D,
) -> Option<ContentPayload> {
    match load_content(source, config).await {
        Ok(content) => Some(content),
        Err(e) => {
            if let Some(level) = e.severity() {
                diagnostics.report(level, &e);
            }
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    pub struct StubSource {
        pub response: Result<RawResponse, ContentError>,
        pub requested: RefCell<Vec<String>>,
    }

    impl StubSource {
        pub fn status(status: u16, body: &str) -> Self {
            Self {
                response: Ok(RawResponse {
                    status,
                    body: body.to_string(),
                }),
                requested: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(reason: &str) -> Self {
            Self {
                response: Err(ContentError::Transport(reason.to_string())),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl ContentSource for StubSource {
        async fn get(&self, url: &str) -> Result<RawResponse, ContentError> {
            self.requested.borrow_mut().push(url.to_string());
            self.response.clone()
        }
    }

    #[derive(Default)]
    pub struct RecordingDiagnostics {
        pub reports: RefCell<Vec<(log::Level, ContentError)>>,
    }

    impl Diagnostics for RecordingDiagnostics {
        fn report(&self, level: log::Level, error: &ContentError) {
            self.reports.borrow_mut().push((level, error.clone()));
        }
    }
}
