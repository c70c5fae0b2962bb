//! Playlist and playlist item managers.
//!
//! Each manager owns a shared transport, a child logger and the page size it
//! requests. List calls resolve to a [`Pagination`] whose fetch closure runs
//! the same query again with another page token.

use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::FutureExt;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::pagination::{FetchPage, PageFuture, Pagination, PaginationOptions};
use crate::playlist::Playlist;
use crate::playlist_item::PlaylistItem;
use crate::privacy::Privacy;
use crate::transport::{
    MAX_RESULTS_LIMIT, PlaylistFilter, PlaylistItemListQuery, PlaylistListQuery, YouTubeTransport,
    call_api,
};
use crate::validation::reject;
use crate::wire::{
    RawListResponse, RawLocalization, RawPlaylist, RawPlaylistItem, RawPlaylistItemSnippet,
    RawPlaylistSnippet, RawResourceId, RawStatus,
};

/// Message of the error returned when a list response has no `items`.
pub const MISSING_ITEMS_MESSAGE: &str = "The raw data is missing items.";

const VIDEO_KIND: &str = "youtube#video";

/// Localized title and description of a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localization {
    /// Localized title.
    pub title: String,
    /// Localized description.
    pub description: String,
}

/// Options for [`PlaylistManager::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePlaylistOptions {
    /// Title of the playlist.
    pub title: String,
    /// Description of the playlist.
    pub description: Option<String>,
    /// Privacy status; the API defaults to private.
    pub privacy: Option<Privacy>,
    /// Language of the title and description.
    pub default_language: Option<String>,
    /// Localized metadata keyed by BCP-47 language code.
    pub localizations: Option<BTreeMap<String, Localization>>,
}

impl CreatePlaylistOptions {
    /// Options for a playlist with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Options for [`PlaylistManager::update`].
///
/// The API replaces the playlist's metadata, so fields left empty are
/// cleared. Privacy is the exception: when it is `None` the current privacy
/// is looked up and sent back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlaylistOptions {
    /// ID of the playlist to update.
    pub id: String,
    /// New title.
    pub title: String,
    /// New description.
    pub description: Option<String>,
    /// New privacy status. The current one is kept when `None`.
    pub privacy: Option<Privacy>,
    /// New default language.
    pub default_language: Option<String>,
    /// New localized metadata.
    pub localizations: Option<BTreeMap<String, Localization>>,
}

/// Options for [`PlaylistItemManager::create`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreatePlaylistItemOptions {
    /// Playlist to add the video to.
    pub playlist_id: String,
    /// Video to add.
    pub video_id: String,
    /// Zero-based position; appended at the end when absent.
    pub position: Option<u32>,
}

/// Options for [`PlaylistItemManager::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePlaylistItemOptions {
    /// ID of the playlist item.
    pub id: String,
    /// Playlist containing the item.
    pub playlist_id: String,
    /// Video referenced by the item.
    pub video_id: String,
    /// New zero-based position.
    pub position: Option<u32>,
}

/// Operations on playlists.
#[derive(Clone)]
pub struct PlaylistManager {
    transport: Arc<dyn YouTubeTransport>,
    logger: Logger,
    max_results: u32,
}

impl PlaylistManager {
    /// Create a manager. `max_results` is clamped to what the API accepts.
    pub fn new(transport: Arc<dyn YouTubeTransport>, logger: &Logger, max_results: u32) -> Self {
        Self {
            transport,
            logger: logger.child("PlaylistManager"),
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
        }
    }

    /// Page size requested by list calls.
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Playlists owned by the authenticated user.
    ///
    /// Costs 1 quota unit per page.
    pub fn get_mine(&self, page_token: Option<String>) -> PageFuture<Vec<Playlist>> {
        self.list(PlaylistFilter::Mine, page_token)
    }

    /// Playlists with the given IDs.
    pub fn get_by_ids(
        &self,
        ids: Vec<String>,
        page_token: Option<String>,
    ) -> PageFuture<Vec<Playlist>> {
        self.list(PlaylistFilter::Ids(ids), page_token)
    }

    /// Playlists of a channel.
    pub fn get_by_channel_id(
        &self,
        channel_id: impl Into<String>,
        page_token: Option<String>,
    ) -> PageFuture<Vec<Playlist>> {
        self.list(PlaylistFilter::ChannelId(channel_id.into()), page_token)
    }

    fn list(&self, filter: PlaylistFilter, page_token: Option<String>) -> PageFuture<Vec<Playlist>> {
        let manager = self.clone();
        async move {
            let query = PlaylistListQuery {
                filter,
                max_results: manager.max_results,
                page_token,
            };
            let response =
                call_api(&manager.logger, manager.transport.list_playlists(&query)).await?;
            let items = required_items(&manager.logger, &response)?;
            let data = Playlist::from_many(items, &manager.logger)?;

            let fetch: FetchPage<Vec<Playlist>> = {
                let manager = manager.clone();
                let filter = query.filter;
                Arc::new(move |token: String| manager.list(filter.clone(), Some(token)))
            };
            into_page(&manager.logger, &response, data, fetch)
        }
        .boxed()
    }

    /// Create a playlist.
    ///
    /// Costs 50 quota units.
    ///
    /// # Errors
    ///
    /// Returns the API error, or a likely-bug error if the created resource
    /// fails validation.
    pub async fn create(&self, options: CreatePlaylistOptions) -> Result<Playlist> {
        let body = playlist_body(
            None,
            options.title,
            options.description,
            options.privacy,
            options.default_language,
            options.localizations,
        );
        let raw = call_api(&self.logger, self.transport.insert_playlist(&body)).await?;
        Playlist::from_raw(&raw, &self.logger).map_err(Into::into)
    }

    /// Update a playlist's metadata.
    ///
    /// Costs 50 quota units, plus one unit to look up the current privacy
    /// when `options.privacy` is `None`.
    ///
    /// # Errors
    ///
    /// Returns the API error, or a likely-bug error if the updated resource
    /// fails validation.
    pub async fn update(&self, options: UpdatePlaylistOptions) -> Result<Playlist> {
        let privacy = match options.privacy {
            Some(privacy) => privacy,
            None => self.current_privacy(&options.id).await?,
        };
        let body = playlist_body(
            Some(options.id),
            options.title,
            options.description,
            Some(privacy),
            options.default_language,
            options.localizations,
        );
        let raw = call_api(&self.logger, self.transport.update_playlist(&body)).await?;
        Playlist::from_raw(&raw, &self.logger).map_err(Into::into)
    }

    async fn current_privacy(&self, id: &str) -> Result<Privacy> {
        let page = self.get_by_ids(vec![id.to_string()], None).await?;
        page.data()
            .iter()
            .find(|playlist| playlist.id == id)
            .map(|playlist| playlist.privacy)
            .ok_or_else(|| Error::youtube_api(404, format!("playlistNotFound: {id}")))
    }

    /// Delete a playlist.
    ///
    /// Costs 50 quota units.
    ///
    /// # Errors
    ///
    /// Returns the API error.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        call_api(&self.logger, self.transport.delete_playlist(id)).await
    }
}

/// Operations on playlist items.
#[derive(Clone)]
pub struct PlaylistItemManager {
    transport: Arc<dyn YouTubeTransport>,
    logger: Logger,
    max_results: u32,
}

impl PlaylistItemManager {
    /// Create a manager. `max_results` is clamped to what the API accepts.
    pub fn new(transport: Arc<dyn YouTubeTransport>, logger: &Logger, max_results: u32) -> Self {
        Self {
            transport,
            logger: logger.child("PlaylistItemManager"),
            max_results: max_results.clamp(1, MAX_RESULTS_LIMIT),
        }
    }

    /// Page size requested by list calls.
    pub const fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Items of a playlist.
    ///
    /// Costs 1 quota unit per page. Videos the caller cannot see come back as
    /// [`PlaylistItem::Unavailable`].
    pub fn get_by_playlist_id(
        &self,
        playlist_id: impl Into<String>,
        page_token: Option<String>,
    ) -> PageFuture<Vec<PlaylistItem>> {
        self.list(playlist_id.into(), page_token)
    }

    fn list(&self, playlist_id: String, page_token: Option<String>) -> PageFuture<Vec<PlaylistItem>> {
        let manager = self.clone();
        async move {
            let query = PlaylistItemListQuery {
                playlist_id,
                max_results: manager.max_results,
                page_token,
            };
            let response =
                call_api(&manager.logger, manager.transport.list_playlist_items(&query)).await?;
            let items = required_items(&manager.logger, &response)?;
            let data = PlaylistItem::from_many(items, &manager.logger)?;

            let fetch: FetchPage<Vec<PlaylistItem>> = {
                let manager = manager.clone();
                let playlist_id = query.playlist_id;
                Arc::new(move |token: String| manager.list(playlist_id.clone(), Some(token)))
            };
            into_page(&manager.logger, &response, data, fetch)
        }
        .boxed()
    }

    /// Add a video to a playlist.
    ///
    /// Costs 50 quota units.
    ///
    /// # Errors
    ///
    /// Returns the API error, or a likely-bug error if the created resource
    /// fails validation.
    pub async fn create(&self, options: CreatePlaylistItemOptions) -> Result<PlaylistItem> {
        let body = playlist_item_body(None, options.playlist_id, options.video_id, options.position);
        let raw = call_api(&self.logger, self.transport.insert_playlist_item(&body)).await?;
        PlaylistItem::from_raw(&raw, &self.logger).map_err(Into::into)
    }

    /// Change the video or position of a playlist item.
    ///
    /// Costs 50 quota units.
    ///
    /// # Errors
    ///
    /// Returns the API error, or a likely-bug error if the updated resource
    /// fails validation.
    pub async fn update(&self, options: UpdatePlaylistItemOptions) -> Result<PlaylistItem> {
        let body = playlist_item_body(
            Some(options.id),
            options.playlist_id,
            options.video_id,
            options.position,
        );
        let raw = call_api(&self.logger, self.transport.update_playlist_item(&body)).await?;
        PlaylistItem::from_raw(&raw, &self.logger).map_err(Into::into)
    }

    /// Remove an item from its playlist.
    ///
    /// Costs 50 quota units.
    ///
    /// # Errors
    ///
    /// Returns the API error.
    pub async fn delete_by_id(&self, id: &str) -> Result<()> {
        call_api(&self.logger, self.transport.delete_playlist_item(id)).await
    }
}

fn required_items<'a, R: Serialize>(
    logger: &Logger,
    response: &'a RawListResponse<R>,
) -> Result<&'a [R]> {
    response.items.as_deref().ok_or_else(|| {
        reject(
            &logger.child("Pagination"),
            "Pagination",
            response,
            &["items"],
            MISSING_ITEMS_MESSAGE,
        )
        .into()
    })
}

fn into_page<R, T>(
    logger: &Logger,
    response: &RawListResponse<R>,
    data: T,
    fetch: FetchPage<T>,
) -> Result<Pagination<T>> {
    let page_info = response.page_info.unwrap_or_default();
    Pagination::new(PaginationOptions {
        data,
        logger: logger.clone(),
        prev_token: response.prev_page_token.clone(),
        next_token: response.next_page_token.clone(),
        results_per_page: page_info.results_per_page,
        total_results: page_info.total_results,
        fetch,
    })
    .map_err(Into::into)
}

fn playlist_body(
    id: Option<String>,
    title: String,
    description: Option<String>,
    privacy: Option<Privacy>,
    default_language: Option<String>,
    localizations: Option<BTreeMap<String, Localization>>,
) -> RawPlaylist {
    RawPlaylist {
        id,
        snippet: Some(RawPlaylistSnippet {
            title: Some(title),
            description,
            default_language,
            ..RawPlaylistSnippet::default()
        }),
        status: privacy.map(|p| RawStatus {
            privacy_status: Some(p.as_str().to_string()),
        }),
        localizations: localizations.map(|l| {
            l.into_iter()
                .map(|(lang, l)| {
                    (
                        lang,
                        RawLocalization {
                            title: Some(l.title),
                            description: Some(l.description),
                        },
                    )
                })
                .collect()
        }),
        ..RawPlaylist::default()
    }
}

fn playlist_item_body(
    id: Option<String>,
    playlist_id: String,
    video_id: String,
    position: Option<u32>,
) -> RawPlaylistItem {
    RawPlaylistItem {
        id,
        snippet: Some(RawPlaylistItemSnippet {
            playlist_id: Some(playlist_id),
            position,
            resource_id: Some(RawResourceId {
                kind: Some(VIDEO_KIND.to_string()),
                video_id: Some(video_id),
            }),
            ..RawPlaylistItemSnippet::default()
        }),
        ..RawPlaylistItem::default()
    }
}
