pub mod client;
pub mod engine;
pub mod topics;
pub mod urls;

pub use crate::domain::model::{Page, PhotoRequest, QueryOptions, SearchQuery};
pub use crate::domain::ports::{ConfigProvider, PhotoSource};
pub use crate::utils::error::Result;
