pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::{client::ApiKey, client::PexelsClient, engine::PhotoEngine, topics::Topic};
pub use crate::domain::model::{Page, PhotoRequest, QueryOptions, SearchQuery};
pub use crate::utils::error::{PexelsError, Result};
