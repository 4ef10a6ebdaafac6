use super::ContentError;

/// Status and body of an HTTP response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs the GET request against the content service.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError>;
}

/// `fetch`-backed source used in the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpContentSource;

impl ContentSource for HttpContentSource {
    #[cfg(any(feature = "hydrate", feature = "csr"))]
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError> {
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        let status = response.status();
        // the body of a failed response is never looked at
        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| ContentError::Transport(e.to_string()))?
        } else {
            String::new()
        };

        Ok(RawResponse { status, body })
    }

    #[cfg(not(any(feature = "hydrate", feature = "csr")))]
    async fn get(&self, url: &str) -> Result<RawResponse, ContentError> {
        Err(ContentError::Transport(format!(
            "no HTTP client outside the browser, cannot fetch {url}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_counts_as_success() {
        let response = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }
}
