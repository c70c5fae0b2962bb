//! `Youtubes` Core Library
//!
//! A typed client for the playlist endpoints of the `YouTube` Data API v3:
//! - Validated entities ([`Playlist`], [`PlaylistItem`], [`Thumbnails`], [`Privacy`])
//!   built from loosely-typed API records
//! - Token-based [`Pagination`] with `prev`, `next` and `all` traversal
//! - [`PlaylistManager`] and [`PlaylistItemManager`] for list, create, update
//!   and delete calls
//! - A pluggable [`YouTubeTransport`] with a `reqwest` implementation
//! - Client configuration stored as JSON
//!
//! # Error Handling
//!
//! Every fallible call returns [`Result`], whose error is one of two kinds:
//! [`LikelyBugError`] when the API returned something this library cannot
//! make sense of, and [`YouTubeApiError`] when the API rejected the call.
//! See the [`error`] module for details.
//!
//! ```rust,ignore
//! use youtubes_core::{Error, Result};
//!
//! async fn count_playlists(client: &ApiClient) -> Result<usize> {
//!     let playlists = client.playlists().get_mine(None).await?;
//!     Ok(playlists.all_items().await?.len())
//! }
//! ```
//!
//! # Logging
//!
//! Components log through a [`Logger`] built from a root and passed down
//! explicitly. Messages are forwarded to `tracing`; install a subscriber to
//! see them.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod managers;
pub mod oauth;
pub mod pagination;
pub mod playlist;
pub mod playlist_item;
pub mod privacy;
pub mod thumbnails;
pub mod transport;
pub mod validation;
pub mod wire;

pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{
    Error, ErrorKind, LikelyBugError, Result, UNEXPECTED_API_FAILURE, YouTubeApiError,
};
pub use http::HttpTransport;
pub use logger::{DEFAULT_ROOT_NAME, LogLevel, Logger};
pub use managers::{
    CreatePlaylistItemOptions, CreatePlaylistOptions, Localization, MISSING_ITEMS_MESSAGE,
    PlaylistItemManager, PlaylistManager, UpdatePlaylistItemOptions, UpdatePlaylistOptions,
};
pub use oauth::{OAuthProvider, StaticOAuthProvider};
pub use pagination::{
    FetchPage, MISSING_PAGE_INFO_MESSAGE, PageFuture, Pagination, PaginationOptions,
    REPEATED_PAGE_TOKEN_MESSAGE,
};
pub use playlist::Playlist;
pub use playlist_item::{
    AvailablePlaylistItem, PlaylistItem, playlist_item_from, playlist_item_from_many,
};
pub use privacy::{ParsePrivacyError, Privacy, convert_to_privacy};
pub use thumbnails::{Resolution, Thumbnail, Thumbnails};
pub use transport::{
    MAX_RESULTS_LIMIT, PlaylistFilter, PlaylistItemListQuery, PlaylistListQuery, TransportFault,
    TransportResult, YouTubeTransport, call_api,
};
pub use validation::{RequiredFields, is_nullish};
