//! Command-line arguments for the remindmarks client.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "remindmarks",
    version,
    about = "Save bookmarks with a remember date and see what is due today"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Root URL of the bookmark service (overrides REMINDMARKS_API_URL and the settings file).
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Settings file to use instead of the platform default.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List bookmarks sorted by remember date.
    List {
        /// Only show bookmarks due today.
        #[arg(long)]
        today: bool,
    },

    /// Save a new bookmark.
    Add(AddArgs),

    /// Delete every bookmark with the given title.
    Delete {
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Inspect or edit the settings file.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub url: String,

    /// Remember date as YYYY-MM-DD.
    #[arg(long = "date", value_name = "YYYY-MM-DD")]
    pub remember_date: String,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the current settings.
    Show,

    /// Set one setting (api_url, request_timeout_secs, default_tab).
    Set {
        key: String,
        /// JSON value; bare words are taken as strings.
        value: String,
    },

    /// Restore default settings.
    Reset,
}
