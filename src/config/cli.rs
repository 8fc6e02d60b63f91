use crate::config::toml_config::TomlConfig;
use crate::core::topics::Topic;
use crate::domain::model::{PhotoRequest, QueryOptions};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pexels")]
#[command(about = "Search the Pexels photo API and print the raw JSON response")]
pub struct CliConfig {
    #[arg(long, global = true, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Environment variable holding the API key")]
    pub api_key_env: Option<String>,

    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Args)]
pub struct PageArgs {
    #[arg(long)]
    pub per_page: Option<u32>,

    #[arg(long)]
    pub page: Option<u32>,
}

impl PageArgs {
    fn options(&self) -> QueryOptions {
        QueryOptions::new(self.per_page, self.page)
    }

    /// No flags means the fixed first page, like the `get_*` shortcuts.
    fn optional(&self) -> Option<QueryOptions> {
        let options = self.options();
        (!options.is_empty()).then_some(options)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Search photos by free-form term
    Search {
        term: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Editorially curated photos
    Curated {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Photos for one of the built-in topics
    Topic {
        name: Topic,
        #[command(flatten)]
        page: PageArgs,
    },
    /// List the built-in topics
    Topics,
    /// Fetch a complete API URL
    Url { url: String },
}

impl CliConfig {
    /// Loads the TOML file (if any) and applies command line overrides on top.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.client.base_url = Some(base_url.clone());
        }
        if let Some(var) = &self.api_key_env {
            config.client.api_key_env = Some(var.clone());
            // 明確指定環境變數時忽略檔案中的 api_key
            config.client.api_key = None;
        }
        if let Some(timeout) = self.timeout {
            config.client.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }

    /// `None` for commands that need no API call.
    pub fn request(&self) -> Option<PhotoRequest> {
        match &self.command {
            Command::Search { term, page } => Some(PhotoRequest::Search {
                term: term.clone(),
                options: page.options(),
            }),
            Command::Curated { page } => Some(PhotoRequest::Curated {
                options: page.optional(),
            }),
            Command::Topic { name, page } => Some(PhotoRequest::Topic {
                topic: *name,
                options: page.optional(),
            }),
            Command::Topics => None,
            Command::Url { url } => Some(PhotoRequest::Url(url.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_search_command() {
        let cli = CliConfig::parse_from(["pexels", "search", "beach", "--per-page", "5"]);
        assert_eq!(
            cli.request(),
            Some(PhotoRequest::Search {
                term: "beach".to_string(),
                options: QueryOptions::new(Some(5), None),
            })
        );
    }

    #[test]
    fn test_topic_without_flags_uses_fixed_page() {
        let cli = CliConfig::parse_from(["pexels", "topic", "Wedding"]);
        assert_eq!(
            cli.request(),
            Some(PhotoRequest::Topic {
                topic: Topic::Wedding,
                options: None,
            })
        );

        let cli = CliConfig::parse_from(["pexels", "curated", "--page", "2"]);
        assert_eq!(
            cli.request(),
            Some(PhotoRequest::Curated {
                options: Some(QueryOptions::new(None, Some(2))),
            })
        );
    }

    #[test]
    fn test_unknown_topic_is_rejected() {
        assert!(CliConfig::try_parse_from(["pexels", "topic", "volcano"]).is_err());
    }

    #[test]
    fn test_topics_command_needs_no_request() {
        let cli = CliConfig::parse_from(["pexels", "topics"]);
        assert_eq!(cli.request(), None);
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                b"[client]\nbase_url = \"https://api.example.com/v1/\"\napi_key = \"from-file\"\ntimeout_seconds = 30\n",
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "pexels",
            "--config",
            path.as_str(),
            "--api-key-env",
            "OTHER_KEY",
            "--timeout",
            "5",
            "curated",
        ]);
        let config = cli.load_config().unwrap();

        assert_eq!(config.base_url(), "https://api.example.com/v1/");
        assert_eq!(config.api_key(), None);
        assert_eq!(config.api_key_env(), "OTHER_KEY");
        assert_eq!(config.timeout(), Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn test_invalid_base_url_override() {
        let cli = CliConfig::parse_from(["pexels", "--base-url", "nope", "curated"]);
        assert!(cli.load_config().is_err());
    }
}
