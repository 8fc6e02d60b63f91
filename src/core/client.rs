use crate::core::topics::Topic;
use crate::core::urls::{form_curated_url, form_url, normalize_base_url, DEFAULT_BASE_URL};
use crate::domain::model::{Page, QueryOptions, SearchQuery};
use crate::domain::ports::{ConfigProvider, PhotoSource};
use crate::utils::error::{PexelsError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::fmt;

/// Environment variable the API key is read from by default.
pub const API_KEY_ENV: &str = "PexelsAPIKey";

/// A Pexels API key, sent verbatim as the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_env_var(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(value) if !value.trim().is_empty() => Ok(Self(value)),
            _ => Err(PexelsError::MissingApiKeyError {
                var: var.to_string(),
            }),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    fn header_value(&self) -> Result<HeaderValue> {
        let mut value =
            HeaderValue::from_str(&self.0).map_err(|e| PexelsError::InvalidApiKeyError {
                message: e.to_string(),
            })?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ApiKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

#[derive(Debug, Clone)]
pub struct PexelsClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl PexelsClient {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    pub fn with_base_url(api_key: impl Into<ApiKey>, base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: normalize_base_url(base_url),
            api_key: api_key.into(),
        })
    }

    /// Reads the key from `PexelsAPIKey`.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(API_KEY_ENV)
    }

    pub fn from_env_var(var: &str) -> Result<Self> {
        Ok(Self::new(ApiKey::from_env_var(var)?))
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("base_url", config.base_url())?;

        let api_key = match config.api_key() {
            Some(key) => ApiKey::new(key),
            None => ApiKey::from_env_var(config.api_key_env())?,
        };

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        Ok(Self {
            client: builder.build()?,
            base_url: normalize_base_url(config.base_url()),
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one GET. Only `200 OK` counts as success; the body is returned untouched.
    async fn generic_search(&self, url: &str, api_key: &ApiKey) -> Result<String> {
        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, api_key.header_value()?)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            tracing::warn!("Request to {} failed with status {}", url, status);
            return Err(PexelsError::StatusError {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches a complete API URL, e.g. `https://api.pexels.com/v1/curated?per_page=20&page=1`.
    pub async fn search_for(&self, url: &str) -> Result<String> {
        self.generic_search(url, &self.api_key).await
    }

    /// Like [`search_for`](Self::search_for) but authorizes with `key` instead of the client key.
    pub async fn search_with_key(&self, url: &str, key: &ApiKey) -> Result<String> {
        self.generic_search(url, key).await
    }

    pub async fn search(&self, term: &str, per_page: u32, page: u32) -> Result<String> {
        let url = form_url(&self.base_url, term, per_page, page);
        self.generic_search(&url, &self.api_key).await
    }

    pub async fn query(&self, query: &SearchQuery) -> Result<String> {
        self.query_with_key(query, &self.api_key).await
    }

    pub async fn query_with_key(&self, query: &SearchQuery, key: &ApiKey) -> Result<String> {
        let (term, page) = query.resolve();
        let term = term.ok_or(PexelsError::MissingSearchTermError)?;
        let url = form_url(&self.base_url, term, page.per_page, page.page);
        self.generic_search(&url, key).await
    }

    pub async fn get_curated(&self) -> Result<String> {
        self.curated_photos(Page::FIRST).await
    }

    pub async fn query_curated(&self, options: QueryOptions) -> Result<String> {
        self.curated_photos(options.resolve()).await
    }

    pub async fn get_topic(&self, topic: Topic) -> Result<String> {
        self.search_photos(topic.term(), Page::FIRST).await
    }

    pub async fn query_topic(&self, topic: Topic, options: QueryOptions) -> Result<String> {
        self.search_photos(topic.term(), options.resolve()).await
    }
}

#[async_trait]
impl PhotoSource for PexelsClient {
    async fn search_photos(&self, term: &str, page: Page) -> Result<String> {
        self.search(term, page.per_page, page.page).await
    }

    async fn curated_photos(&self, page: Page) -> Result<String> {
        let url = form_curated_url(&self.base_url, page.per_page, page.page);
        self.generic_search(&url, &self.api_key).await
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        self.search_for(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
        assert_eq!(key.expose(), "super-secret");
    }

    #[test]
    fn test_api_key_rejects_header_breaking_values() {
        let key = ApiKey::new("bad\nkey");
        assert!(matches!(
            key.header_value(),
            Err(PexelsError::InvalidApiKeyError { .. })
        ));
    }

    #[test]
    fn test_api_key_from_missing_env_var() {
        let err = ApiKey::from_env_var("PEXELS_CLIENT_TEST_UNSET_KEY").unwrap_err();
        assert!(matches!(err, PexelsError::MissingApiKeyError { var } if var == "PEXELS_CLIENT_TEST_UNSET_KEY"));
    }

    #[test]
    fn test_api_key_from_blank_env_var() {
        std::env::set_var("PEXELS_CLIENT_TEST_BLANK_KEY", "  ");
        assert!(ApiKey::from_env_var("PEXELS_CLIENT_TEST_BLANK_KEY").is_err());
        std::env::remove_var("PEXELS_CLIENT_TEST_BLANK_KEY");
    }

    #[test]
    fn test_with_base_url_normalizes() {
        let client = PexelsClient::with_base_url("key", "http://localhost:9000/v1").unwrap();
        assert_eq!(client.base_url(), "http://localhost:9000/v1/");
        assert!(PexelsClient::with_base_url("key", "not a url").is_err());
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(PexelsClient::new("key").base_url(), DEFAULT_BASE_URL);
    }
}
