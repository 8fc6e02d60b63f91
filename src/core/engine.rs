use crate::domain::model::{Page, PhotoRequest, QueryOptions};
use crate::domain::ports::PhotoSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};

pub struct PhotoEngine<S: PhotoSource> {
    source: S,
    defaults: QueryOptions,
}

impl<S: PhotoSource> PhotoEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            defaults: QueryOptions::default(),
        }
    }

    /// Configured pagination used when a request leaves a field unset.
    pub fn with_defaults(mut self, defaults: QueryOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn resolve(&self, options: Option<QueryOptions>) -> Result<Page> {
        let page = match options {
            None => Page::FIRST,
            Some(options) => options.or(self.defaults).resolve(),
        };
        page.validate()?;
        Ok(page)
    }

    pub async fn run(&self, request: PhotoRequest) -> Result<String> {
        let body = match request {
            PhotoRequest::Search { term, options } => {
                validate_non_empty_string("term", &term)?;
                let page = self.resolve(Some(options))?;
                tracing::info!(
                    "Searching '{}' (per_page={}, page={})",
                    term,
                    page.per_page,
                    page.page
                );
                self.source.search_photos(&term, page).await?
            }
            PhotoRequest::Curated { options } => {
                let page = self.resolve(options)?;
                tracing::info!(
                    "Fetching curated photos (per_page={}, page={})",
                    page.per_page,
                    page.page
                );
                self.source.curated_photos(page).await?
            }
            PhotoRequest::Topic { topic, options } => {
                let page = self.resolve(options)?;
                tracing::info!(
                    "Fetching topic '{}' (per_page={}, page={})",
                    topic,
                    page.per_page,
                    page.page
                );
                self.source.search_photos(topic.term(), page).await?
            }
            PhotoRequest::Url(url) => {
                crate::utils::validation::validate_url("url", &url)?;
                tracing::info!("Fetching {}", url);
                self.source.fetch(&url).await?
            }
        };

        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }
}
