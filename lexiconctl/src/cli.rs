use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use lexicon_model::DisplayToggle;

#[derive(Debug, Parser)]
#[command(
    name = "lexiconctl",
    version,
    about = "Browse a vocabulary catalog and manage favorites"
)]
pub struct Cli {
    /// Configuration file (TOML or JSON); overrides $LEXICON_CONFIG_PATH
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the catalog
    Browse(BrowseArgs),
    /// Toggle or list a user's favorites
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },
    /// Show or change display preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
    /// Inspect or scaffold the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against words and translations
    #[arg(long)]
    pub search: Option<String>,
    /// Only words starting with this letter (ignored while searching)
    #[arg(long)]
    pub letter: Option<String>,
    /// Only the signed-in user's favorites
    #[arg(long, requires = "user")]
    pub favorites: bool,
    /// Page to show; clamped to the available range
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Entries per page (saved as the new preference)
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Browse as this user so favorites are marked
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum FavoriteAction {
    /// Add the entry to the user's favorites, or remove it if present
    Toggle {
        #[arg(long)]
        user: String,
        entry_id: u32,
    },
    /// List the user's favorite entries
    List {
        #[arg(long)]
        user: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum PrefsAction {
    /// Print all stored preferences
    Show,
    /// Flip one display switch
    Toggle {
        #[arg(value_enum)]
        which: ToggleArg,
    },
    /// Set the number of entries per page
    PageSize { size: usize },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ToggleArg {
    Examples,
    Speaker,
    Translation,
    AutoScroll,
}

impl From<ToggleArg> for DisplayToggle {
    fn from(value: ToggleArg) -> Self {
        match value {
            ToggleArg::Examples => DisplayToggle::Examples,
            ToggleArg::Speaker => DisplayToggle::Speaker,
            ToggleArg::Translation => DisplayToggle::Translation,
            ToggleArg::AutoScroll => DisplayToggle::AutoScroll,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration and where it came from
    Show,
    /// Write a configuration file populated with defaults
    Init {
        #[arg(long, default_value = "lexicon.toml")]
        path: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
