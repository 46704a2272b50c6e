use clap::{Parser, Subcommand};

pub mod error;
pub mod handler;
pub mod output;

/// fsutil - path canonicalization and secure file shredding
#[derive(Parser, Debug)]
#[command(name = "fsutil")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Override config directory path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a path to its absolute, cleaned form
    Resolve {
        /// Path to resolve (may start with ~)
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Overwrite a file with random data, then delete it
    Shred {
        /// File to destroy
        path: String,

        /// Number of overwrite passes (default from config)
        #[arg(long, short)]
        passes: Option<u32>,

        /// Stop waiting after this many seconds
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,
    },

    /// Check whether a path is a directory
    IsDir {
        path: String,
    },

    /// Check whether a path is a regular file
    IsFile {
        path: String,
    },

    /// Check whether a directory tree contains no regular files
    IsEmptyDir {
        path: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace characters that are unsafe in filenames
    CleanFilename {
        name: String,
    },

    /// Copy a regular file
    Copy {
        from: String,
        to: String,

        /// Remove an existing destination first
        #[arg(long)]
        force: bool,
    },

    /// Check whether any line of a file contains a string
    Contains {
        path: String,
        needle: String,
    },

    /// Manage configuration
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (e.g., shred.passes)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., shred.passes)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Show all configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the path of settings.toml
    Path,

    /// Write default settings.toml if none exists
    Init,
}
