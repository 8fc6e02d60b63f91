use crate::domain::model::{Page, QueryOptions};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Anything that can answer photo requests with a raw JSON body.
#[async_trait]
pub trait PhotoSource: Send + Sync {
    async fn search_photos(&self, term: &str, page: Page) -> Result<String>;
    async fn curated_photos(&self, page: Page) -> Result<String>;
    async fn fetch(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    /// Inline key, takes precedence over `api_key_env`.
    fn api_key(&self) -> Option<&str>;
    fn api_key_env(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn user_agent(&self) -> Option<&str>;
    fn default_options(&self) -> QueryOptions;
}
