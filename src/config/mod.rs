pub mod cli;

use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "post-client")]
#[command(about = "A small client for the jsonplaceholder posts API")]
pub struct CliConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com")]
    pub api_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub action: ActionCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ActionCommand {
    /// Fetch post 1 over the pooled transport
    Fetch,
    /// Fetch post 2 over the one-shot transport
    FetchAlt,
    /// Create a post from the given title and body
    Create {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        body: String,
    },
    /// Update a post; the id is required before any request is issued
    Update {
        #[arg(long, default_value = "")]
        id: String,

        #[arg(long, default_value = "")]
        title: String,

        #[arg(long, default_value = "")]
        body: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_valid() {
        let config = CliConfig::parse_from(["post-client", "fetch"]);
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, "https://jsonplaceholder.typicode.com");
    }

    #[test]
    fn test_bad_base_url_fails_validation() {
        let config =
            CliConfig::parse_from(["post-client", "--api-base-url", "not a url", "fetch"]);
        assert!(config.validate().is_err());
    }
}
