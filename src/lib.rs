pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::ConsoleOutput, CliConfig};

pub use config::cli::MemorySink;
pub use core::{actions::ActionRunner, client::RemoteResourceClient};
pub use utils::error::{ClientError, Result};
