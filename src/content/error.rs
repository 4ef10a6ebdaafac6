/// Why a content load produced no payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentError {
    /// The request never got an HTTP response (network, DNS, CORS, ...).
    Transport(String),
    /// Any non-2xx status.
    Status(u16),
    /// The body was not JSON.
    Malformed(String),
    /// Valid JSON, but no usable content object in it.
    MissingContent,
}

impl ContentError {
    /// Log level for the diagnostics sink, `None` for errors that are not
    /// reported at all.
    pub fn severity(&self) -> Option<log::Level> {
        match self {
            Self::Transport(_) => Some(log::Level::Error),
            Self::Malformed(_) => Some(log::Level::Warn),
            Self::MissingContent => Some(log::Level::Debug),
            Self::Status(_) => None,
        }
    }
}

impl std::fmt::Display for ContentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(s) => write!(f, "Request failed: {s}"),
            Self::Status(code) => write!(f, "Content service answered with status {code}"),
            Self::Malformed(s) => write!(f, "Response is not valid JSON: {s}"),
            Self::MissingContent => write!(f, "Response contains no content object"),
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_status_errors_go_unreported() {
        assert_eq!(ContentError::Status(503).severity(), None);
        assert_eq!(
            ContentError::Transport(String::new()).severity(),
            Some(log::Level::Error)
        );
        assert_eq!(
            ContentError::MissingContent.severity(),
            Some(log::Level::Debug)
        );
    }

    #[test]
    fn display_names_the_status_code() {
        assert_eq!(
            ContentError::Status(502).to_string(),
            "Content service answered with status 502"
        );
    }
}
