//! Transport boundary to the `YouTube` Data API.
//!
//! [`YouTubeTransport`] performs authenticated calls and hands back wire
//! records or a [`TransportFault`]. [`call_api`] is the single place where a
//! fault is turned into the crate's [`Error`](crate::error::Error) taxonomy;
//! nothing above it ever sees a transport fault.

use std::future::Future;

use async_trait::async_trait;
use thiserror::Error;

use crate::error::{Error, Result, UNEXPECTED_API_FAILURE, YouTubeApiError};
use crate::logger::Logger;
use crate::wire::{RawListResponse, RawPlaylist, RawPlaylistItem};

/// Maximum page size the API accepts.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Parts requested for playlist resources.
pub const PLAYLIST_PARTS: &[&str] = &["id", "contentDetails", "snippet", "status"];

/// Parts requested for playlist item resources.
pub const PLAYLIST_ITEM_PARTS: &[&str] = &["contentDetails", "id", "snippet", "status"];

/// A failed transport call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportFault {
    /// HTTP status code, when the failure carried one.
    pub code: Option<u16>,
    /// Description of the failure.
    pub message: String,
}

impl TransportFault {
    /// A fault reported with an HTTP status.
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// A fault without a recognizable status (connection, decoding, ...).
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }
}

/// Result of a raw transport call.
pub type TransportResult<T> = std::result::Result<T, TransportFault>;

/// Which playlists a list call selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistFilter {
    /// Playlists owned by the authenticated user.
    Mine,
    /// Playlists with the given IDs.
    Ids(Vec<String>),
    /// Playlists of a channel.
    ChannelId(String),
}

/// Parameters of `playlists.list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistListQuery {
    /// Selection filter.
    pub filter: PlaylistFilter,
    /// Page size.
    pub max_results: u32,
    /// Token of the page to fetch.
    pub page_token: Option<String>,
}

/// Parameters of `playlistItems.list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItemListQuery {
    /// Playlist whose items to list.
    pub playlist_id: String,
    /// Page size.
    pub max_results: u32,
    /// Token of the page to fetch.
    pub page_token: Option<String>,
}

/// Authenticated access to the playlist endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait YouTubeTransport: Send + Sync {
    /// `GET /playlists`
    async fn list_playlists(
        &self,
        query: &PlaylistListQuery,
    ) -> TransportResult<RawListResponse<RawPlaylist>>;

    /// `POST /playlists`
    async fn insert_playlist(&self, body: &RawPlaylist) -> TransportResult<RawPlaylist>;

    /// `PUT /playlists`
    async fn update_playlist(&self, body: &RawPlaylist) -> TransportResult<RawPlaylist>;

    /// `DELETE /playlists`
    async fn delete_playlist(&self, id: &str) -> TransportResult<()>;

    /// `GET /playlistItems`
    async fn list_playlist_items(
        &self,
        query: &PlaylistItemListQuery,
    ) -> TransportResult<RawListResponse<RawPlaylistItem>>;

    /// `POST /playlistItems`
    async fn insert_playlist_item(&self, body: &RawPlaylistItem)
    -> TransportResult<RawPlaylistItem>;

    /// `PUT /playlistItems`
    async fn update_playlist_item(&self, body: &RawPlaylistItem)
    -> TransportResult<RawPlaylistItem>;

    /// `DELETE /playlistItems`
    async fn delete_playlist_item(&self, id: &str) -> TransportResult<()>;
}

/// Await a transport call and normalize its outcome.
///
/// A fault with a status code becomes a [`YouTubeApiError`] carrying that
/// code. A fault without one becomes a likely-bug error; its message is only
/// logged at debug level.
pub async fn call_api<T, F>(logger: &Logger, call: F) -> Result<T>
where
    F: Future<Output = TransportResult<T>>,
{
    match call.await {
        Ok(payload) => Ok(payload),
        Err(fault) => Err(classify_fault(logger, fault)),
    }
}

fn classify_fault(logger: &Logger, fault: TransportFault) -> Error {
    match fault.code {
        Some(code) => YouTubeApiError::new(code, fault.message).into(),
        None => {
            logger
                .child("call_api")
                .debug(format!("Transport failed without a status code: {}", fault.message));
            Error::likely_bug(UNEXPECTED_API_FAILURE)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;

    fn logger() -> Logger {
        Logger::new("TransportTest", LogLevel::Debug)
    }

    #[tokio::test]
    async fn test_call_api_unwraps_success() {
        let result = call_api(&logger(), async { Ok::<_, TransportFault>(42) }).await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_call_api_keeps_status_code() {
        let result: Result<()> = call_api(&logger(), async {
            Err(TransportFault::status(403, "The request cannot be completed because you have exceeded your quota."))
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(
            err.message(),
            "The request cannot be completed because you have exceeded your quota."
        );
    }

    #[tokio::test]
    async fn test_call_api_without_status_is_likely_bug() {
        let result: Result<()> =
            call_api(&logger(), async { Err(TransportFault::other("connection reset")) }).await;

        assert_eq!(result, Err(Error::likely_bug(UNEXPECTED_API_FAILURE)));
    }

    #[tokio::test]
    async fn test_mock_transport_delete() {
        let mut mock = MockYouTubeTransport::new();
        mock.expect_delete_playlist()
            .withf(|id| id == "PL123")
            .times(1)
            .returning(|_| Err(TransportFault::status(404, "playlistNotFound")));

        let result = call_api(&logger(), mock.delete_playlist("PL123")).await;
        assert_eq!(result, Err(Error::youtube_api(404, "playlistNotFound")));
    }
}
