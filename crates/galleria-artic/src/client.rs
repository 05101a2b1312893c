use std::time::Duration;

use crate::{ArticError, ArtworkPage, parse};

/// Public listing root of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const DEFAULT_USER_AGENT: &str = "galleria/0.1";

/// Client for the artworks listing endpoint. Holds no state beyond the
/// shared HTTP connection pool; every call is a pure request/response.
pub struct ArticClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ArticClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different listing root (e.g. a local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fetch one page (1-based) of the artworks listing.
    ///
    /// `fields` selects which payload attributes the API populates; pass
    /// [`FIELDS_ID`](crate::FIELDS_ID) when only identifiers are needed.
    /// Failures are propagated unmodified and never retried here.
    pub async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
        fields: &[&str],
    ) -> Result<ArtworkPage, ArticError> {
        let url = self.listing_url(page, page_size, fields);
        tracing::debug!(page, page_size, "fetching artworks page");

        let resp = self
            .http
            .get(&url)
            .header("User-Agent", &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%status, url = %url, "listing request rejected");
            return Err(ArticError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: serde_json::Value = resp.json().await?;
        parse::parse_page(&body)
    }

    fn listing_url(&self, page: u32, page_size: u32, fields: &[&str]) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.base_url,
            page,
            page_size,
            fields.join(",")
        )
    }
}

impl Default for ArticClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FIELDS_FULL, FIELDS_ID};

    #[test]
    fn listing_url_joins_fields_as_csv() {
        let client = ArticClient::new();
        assert_eq!(
            client.listing_url(3, 12, FIELDS_ID),
            "https://api.artic.edu/api/v1/artworks?page=3&limit=12&fields=id"
        );
        assert!(
            client
                .listing_url(1, 12, FIELDS_FULL)
                .ends_with("fields=id,title,place_of_origin,artist_display,inscriptions,date_start,date_end")
        );
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = ArticClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(
            client.listing_url(1, 5, FIELDS_ID),
            "http://localhost:8080/api/artworks?page=1&limit=5&fields=id"
        );
    }
}
