//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// localshort - a local-only URL shortener
#[derive(Parser, Debug)]
#[command(name = "localshort")]
#[command(version)]
#[command(about = "Shorten URLs into a list kept on this machine", long_about = None)]
pub struct Cli {
    /// Configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the configuration
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Defaults to `list`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Shorten a URL and add it to the list
    ///
    /// A missing scheme gets https:// prepended.
    #[command(visible_alias = "add")]
    Shorten {
        /// URL to shorten
        url: String,
    },

    /// List shortened URLs, most recent first
    #[command(visible_alias = "ls")]
    List {
        /// Print the stored JSON instead of the table
        #[arg(long)]
        json: bool,
    },

    /// Delete a shortened URL by id
    #[command(visible_alias = "rm")]
    Delete {
        /// Short id to delete
        id: String,
    },

    /// Delete every shortened URL
    Clear,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
