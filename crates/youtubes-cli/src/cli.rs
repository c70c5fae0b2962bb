//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use youtubes_core::Privacy;

use crate::logging::LogRotation;

/// Manage YouTube playlists from the command line.
#[derive(Debug, Parser)]
#[command(name = "youtubes", version, about, long_about = None)]
pub struct Cli {
    /// OAuth 2.0 access token with a YouTube scope.
    #[arg(long, env = "YOUTUBE_ACCESS_TOKEN", hide_env_values = true, global = true)]
    pub access_token: Option<String>,

    /// Path to a JSON config file (defaults to the user config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output, including raw API payloads that fail validation.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs into the user data directory.
    #[arg(long, global = true)]
    pub log_file: bool,

    /// Write JSON logs into this directory instead (implies --log-file).
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// How often log files rotate.
    #[arg(long, value_enum, default_value_t = LogRotation::Daily, global = true)]
    pub log_rotation: LogRotation,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work with playlists.
    #[command(subcommand)]
    Playlists(PlaylistsCommand),

    /// Work with the videos in a playlist.
    #[command(subcommand)]
    Items(ItemsCommand),
}

/// Paging options of list commands.
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Fetch every page. Each page costs quota.
    #[arg(long)]
    pub all: bool,

    /// Fetch the page with this token.
    #[arg(long, conflicts_with = "all")]
    pub page_token: Option<String>,
}

/// Playlist commands.
#[derive(Debug, Subcommand)]
pub enum PlaylistsCommand {
    /// List your playlists.
    Mine {
        /// Paging options.
        #[command(flatten)]
        page: PageArgs,
    },

    /// List the playlists of a channel.
    Channel {
        /// Channel ID (UC...).
        channel_id: String,
        /// Paging options.
        #[command(flatten)]
        page: PageArgs,
    },

    /// Show playlists by ID.
    Show {
        /// Playlist IDs.
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Create a playlist.
    Create {
        /// Title of the playlist.
        #[arg(long)]
        title: String,
        /// Description of the playlist.
        #[arg(long)]
        description: Option<String>,
        /// public, unlisted or private.
        #[arg(long)]
        privacy: Option<Privacy>,
    },

    /// Delete a playlist.
    Delete {
        /// Playlist ID.
        id: String,
    },
}

/// Playlist item commands.
#[derive(Debug, Subcommand)]
pub enum ItemsCommand {
    /// List the videos of a playlist.
    List {
        /// Playlist ID.
        playlist_id: String,
        /// Paging options.
        #[command(flatten)]
        page: PageArgs,
    },

    /// Add a video to a playlist.
    Add {
        /// Playlist ID.
        playlist_id: String,
        /// Video ID.
        video_id: String,
        /// Zero-based position; appended at the end when omitted.
        #[arg(long)]
        position: Option<u32>,
    },

    /// Remove an item from its playlist.
    Remove {
        /// Playlist item ID (not the video ID).
        item_id: String,
    },
}
