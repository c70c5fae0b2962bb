//! Playlist entity.
//!
//! [YouTube Data API Reference](https://developers.google.com/youtube/v3/docs/playlists#resource)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LikelyBugError;
use crate::logger::Logger;
use crate::privacy::{Privacy, convert_to_privacy};
use crate::thumbnails::Thumbnails;
use crate::validation::{RequiredFields, reject};
use crate::wire::RawPlaylist;

const MISSING_FIELDS_MESSAGE: &str = "The raw data is missing required fields. playlist raw data must include id, snippet.title, snippet.description, snippet.thumbnails, status.privacyStatus, contentDetails.itemCount, snippet.publishedAt, snippet.channelId, and snippet.channelTitle.";

/// A `YouTube` playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// The ID that `YouTube` uses to uniquely identify the playlist.
    pub id: String,
    /// The title of the playlist.
    pub title: String,
    /// The description of the playlist.
    pub description: String,
    /// The thumbnails of the playlist.
    pub thumbnails: Thumbnails,
    /// The privacy status of the playlist.
    pub privacy: Privacy,
    /// The number of videos in the playlist.
    pub count: u32,
    /// When the playlist was created.
    pub published_at: DateTime<Utc>,
    /// The ID of the channel the playlist belongs to.
    pub channel_id: String,
    /// The name of the channel the playlist belongs to.
    pub channel_name: String,
}

impl Playlist {
    /// Validate a raw playlist resource.
    ///
    /// Nested thumbnail and privacy failures are returned unchanged.
    pub fn from_raw(raw: &RawPlaylist, logger: &Logger) -> Result<Self, LikelyBugError> {
        let logger = logger.child("Playlist::from_raw");
        let snippet = raw.snippet.as_ref();

        let mut required = RequiredFields::new();
        let fields = (
            required.take("id", raw.id.as_ref()),
            required.take("snippet.title", snippet.and_then(|s| s.title.as_ref())),
            required.take(
                "snippet.description",
                snippet.and_then(|s| s.description.as_ref()),
            ),
            required.take(
                "snippet.thumbnails",
                snippet.and_then(|s| s.thumbnails.as_ref()),
            ),
            required.take(
                "status.privacyStatus",
                raw.status.as_ref().and_then(|s| s.privacy_status.as_ref()),
            ),
            required.take(
                "contentDetails.itemCount",
                raw.content_details.as_ref().and_then(|c| c.item_count.as_ref()),
            ),
            required.take(
                "snippet.publishedAt",
                snippet.and_then(|s| s.published_at.as_ref()),
            ),
            required.take("snippet.channelId", snippet.and_then(|s| s.channel_id.as_ref())),
            required.take(
                "snippet.channelTitle",
                snippet.and_then(|s| s.channel_title.as_ref()),
            ),
        );
        let (
            Some(id),
            Some(title),
            Some(description),
            Some(thumbnails),
            Some(privacy_status),
            Some(&count),
            Some(published_at),
            Some(channel_id),
            Some(channel_title),
        ) = fields
        else {
            return Err(reject(
                &logger,
                "Playlist",
                raw,
                required.missing(),
                MISSING_FIELDS_MESSAGE,
            ));
        };

        let thumbnails = Thumbnails::from_raw(thumbnails, &logger)?;
        let privacy = convert_to_privacy(Some(privacy_status.as_str()))?;
        let published_at = DateTime::parse_from_rfc3339(published_at)
            .map_err(|e| {
                reject(
                    &logger,
                    "Playlist",
                    raw,
                    &[],
                    format!("snippet.publishedAt is not an RFC 3339 timestamp: {e}"),
                )
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: id.clone(),
            title: title.clone(),
            description: description.clone(),
            thumbnails,
            privacy,
            count,
            published_at,
            channel_id: channel_id.clone(),
            channel_name: channel_title.clone(),
        })
    }

    /// Validate a sequence of raw playlists, stopping at the first failure.
    pub fn from_many(raw: &[RawPlaylist], logger: &Logger) -> Result<Vec<Self>, LikelyBugError> {
        raw.iter().map(|item| Self::from_raw(item, logger)).collect()
    }
}
