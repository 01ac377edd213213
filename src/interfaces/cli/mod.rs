//! CLI interface module
//!
//! Wires a [`RecordStore`] and a [`ShortenerService`] built from the
//! configuration into the command implementations.

pub mod commands;

use std::fmt;
use std::path::PathBuf;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::errors::LocalShortError;
use crate::services::ShortenerService;
use crate::storage::StorageFactory;
use crate::store::RecordStore;
use commands::{clear_urls, config_generate, delete_url, list_urls, shorten_url};

#[derive(Debug)]
pub enum CliError {
    ValidationError(String),
    StorageError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ValidationError(msg) => msg.clone(),
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ValidationError(msg) => {
                format!("{} {}", "✗".red().bold(), msg.white())
            }
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<LocalShortError> for CliError {
    fn from(err: LocalShortError) -> Self {
        if err.is_user_facing() {
            return CliError::ValidationError(err.message().to_string());
        }
        match err {
            LocalShortError::Storage(_)
            | LocalShortError::Serialization(_)
            | LocalShortError::DateParse(_) => CliError::StorageError(err.to_string()),
            other => CliError::CommandError(other.to_string()),
        }
    }
}

/// Store and shortener for one CLI invocation
pub struct CliContext {
    pub store: RecordStore,
    pub shortener: ShortenerService,
}

impl CliContext {
    /// Build the context and hydrate the store
    pub fn from_config(config: &StaticConfig, data_dir: Option<PathBuf>) -> Self {
        let mut storage_config = config.storage.clone();
        if let Some(dir) = data_dir {
            storage_config.data_dir = dir;
        }

        let backend = StorageFactory::create(&storage_config);
        let mut store = RecordStore::new(backend, storage_config.key);
        store.load();

        Self {
            store,
            shortener: ShortenerService::new(&config.shortener),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(
    cmd: Option<Commands>,
    config: &StaticConfig,
    data_dir: Option<PathBuf>,
) -> Result<(), CliError> {
    // Generate doesn't need the store
    if let Some(Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    }) = cmd
    {
        return config_generate(output_path, force);
    }

    let mut ctx = CliContext::from_config(config, data_dir);

    match cmd.unwrap_or(Commands::List { json: false }) {
        Commands::Shorten { url } => shorten_url(&mut ctx, &url).await,
        Commands::List { json } => list_urls(&ctx.store, json),
        Commands::Delete { id } => delete_url(&mut ctx.store, &id),
        Commands::Clear => clear_urls(&mut ctx.store),
        Commands::Config { .. } => unreachable!("handled above"),
    }
}
