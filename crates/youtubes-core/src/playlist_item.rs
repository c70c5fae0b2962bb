//! Playlist item entity.
//!
//! A playlist item is either available, carrying the full set of fields, or
//! unavailable. The API redacts items whose video the caller cannot see (for
//! example a private video owned by someone else). It does not flag them
//! explicitly; such items come back as `private` with an empty thumbnail set:
//!
//! ```json
//! {
//!     "kind": "youtube#playlistItem",
//!     "snippet": {
//!         "title": "Private video",
//!         "description": "This video is private.",
//!         "thumbnails": {},
//!         "position": 3,
//!         "resourceId": { "kind": "youtube#video", "videoId": "GKkd7IDPwfE" }
//!     },
//!     "status": { "privacyStatus": "private" }
//! }
//! ```
//!
//! [YouTube Data API Reference](https://developers.google.com/youtube/v3/docs/playlistItems#resource)

use serde::{Deserialize, Serialize};

use crate::error::LikelyBugError;
use crate::logger::Logger;
use crate::privacy::{Privacy, convert_to_privacy};
use crate::thumbnails::Thumbnails;
use crate::validation::{RequiredFields, reject};
use crate::wire::RawPlaylistItem;

const MISSING_FIELDS_MESSAGE: &str = "The raw data is missing required fields. playlist item raw data must include id, snippet.title, snippet.description, snippet.thumbnails, snippet.channelId, snippet.channelTitle, snippet.resourceId.videoId, snippet.position, status.privacyStatus, snippet.videoOwnerChannelId, and snippet.videoOwnerChannelTitle.";

/// An item of a playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "availability", rename_all = "lowercase")]
pub enum PlaylistItem {
    /// A video the caller can see.
    Available(AvailablePlaylistItem),
    /// A video the API redacted, e.g. a private video owned by someone else.
    Unavailable,
}

impl PlaylistItem {
    /// Whether the item carries content.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// The item's content, if available.
    pub const fn as_available(&self) -> Option<&AvailablePlaylistItem> {
        match self {
            Self::Available(item) => Some(item),
            Self::Unavailable => None,
        }
    }

    /// Validate a raw playlist item resource.
    ///
    /// Redacted items are recognized before any required-field check, so they
    /// are never reported as malformed.
    pub fn from_raw(raw: &RawPlaylistItem, logger: &Logger) -> Result<Self, LikelyBugError> {
        if is_redacted(raw) {
            return Ok(Self::Unavailable);
        }

        let logger = logger.child("PlaylistItem::from_raw");
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
            required.take("snippet.channelId", snippet.and_then(|s| s.channel_id.as_ref())),
            required.take(
                "snippet.channelTitle",
                snippet.and_then(|s| s.channel_title.as_ref()),
            ),
            required.take(
                "snippet.resourceId.videoId",
                snippet
                    .and_then(|s| s.resource_id.as_ref())
                    .and_then(|r| r.video_id.as_ref()),
            ),
            required.take("snippet.position", snippet.and_then(|s| s.position.as_ref())),
            required.take(
                "status.privacyStatus",
                raw.status.as_ref().and_then(|s| s.privacy_status.as_ref()),
            ),
            required.take(
                "snippet.videoOwnerChannelId",
                snippet.and_then(|s| s.video_owner_channel_id.as_ref()),
            ),
            required.take(
                "snippet.videoOwnerChannelTitle",
                snippet.and_then(|s| s.video_owner_channel_title.as_ref()),
            ),
        );
        let (
            Some(id),
            Some(title),
            Some(description),
            Some(thumbnails),
            Some(channel_id),
            Some(channel_title),
            Some(video_id),
            Some(&position),
            Some(privacy_status),
            Some(video_owner_channel_id),
            Some(video_owner_channel_title),
        ) = fields
        else {
            return Err(reject(
                &logger,
                "PlaylistItem",
                raw,
                required.missing(),
                MISSING_FIELDS_MESSAGE,
            ));
        };

        let thumbnails = Thumbnails::from_raw(thumbnails, &logger)?;
        let privacy = convert_to_privacy(Some(privacy_status.as_str()))?;

        Ok(Self::Available(AvailablePlaylistItem {
            id: id.clone(),
            playlist_id: snippet.and_then(|s| s.playlist_id.clone()),
            title: title.clone(),
            description: description.clone(),
            thumbnails,
            privacy,
            channel_id: channel_id.clone(),
            channel_name: channel_title.clone(),
            video_id: video_id.clone(),
            video_owner_channel_id: video_owner_channel_id.clone(),
            video_owner_channel_name: video_owner_channel_title.clone(),
            position,
        }))
    }

    /// Validate a sequence of raw playlist items, stopping at the first failure.
    pub fn from_many(raw: &[RawPlaylistItem], logger: &Logger) -> Result<Vec<Self>, LikelyBugError> {
        raw.iter().map(|item| Self::from_raw(item, logger)).collect()
    }
}

/// `private` with no thumbnails is how the API marks a redacted item.
fn is_redacted(raw: &RawPlaylistItem) -> bool {
    let private = raw
        .status
        .as_ref()
        .and_then(|s| s.privacy_status.as_deref())
        == Some(Privacy::Private.as_str());
    let no_thumbnails = raw
        .snippet
        .as_ref()
        .and_then(|s| s.thumbnails.as_ref())
        .is_none_or(|t| t.is_empty());
    private && no_thumbnails
}

/// Validate one raw playlist item. See [`PlaylistItem::from_raw`].
pub fn playlist_item_from(
    raw: &RawPlaylistItem,
    logger: &Logger,
) -> Result<PlaylistItem, LikelyBugError> {
    PlaylistItem::from_raw(raw, logger)
}

/// Validate raw playlist items in order. See [`PlaylistItem::from_many`].
pub fn playlist_item_from_many(
    raw: &[RawPlaylistItem],
    logger: &Logger,
) -> Result<Vec<PlaylistItem>, LikelyBugError> {
    PlaylistItem::from_many(raw, logger)
}

/// A playlist item whose video the caller can see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailablePlaylistItem {
    /// The ID that `YouTube` uses to uniquely identify the playlist item.
    pub id: String,
    /// The ID of the playlist containing the item, when the API reports it.
    pub playlist_id: Option<String>,
    /// The item's title.
    pub title: String,
    /// The item's description.
    pub description: String,
    /// The item's thumbnails.
    pub thumbnails: Thumbnails,
    /// The item's privacy status.
    pub privacy: Privacy,
    /// The ID of the user that added the item to the playlist.
    pub channel_id: String,
    /// The name of the channel the playlist item belongs to.
    pub channel_name: String,
    /// The ID of the referenced video.
    pub video_id: String,
    /// The ID of the channel that uploaded the video.
    pub video_owner_channel_id: String,
    /// The name of the channel that uploaded the video.
    pub video_owner_channel_name: String,
    /// Zero-based position of the item in the playlist.
    pub position: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;
    use crate::thumbnails::Thumbnail;

    fn logger() -> Logger {
        Logger::new("playlistItemFrom", LogLevel::Error)
    }

    fn parse(json: serde_json::Value) -> RawPlaylistItem {
        serde_json::from_value(json).unwrap()
    }

    fn available_json() -> serde_json::Value {
        serde_json::json!({
            "kind": "youtube#playlistItem",
            "etag": "sample-etag",
            "id": "sample-id",
            "snippet": {
                "publishedAt": "2024-10-29T18:48:11Z",
                "channelId": "sample-channel-id",
                "title": "sample-title",
                "description": "sample-description",
                "thumbnails": {
                    "default": {
                        "url": "https://i.ytimg.com/vi/sample/default.jpg",
                        "width": 120,
                        "height": 90
                    },
                    "maxres": {
                        "url": "https://i.ytimg.com/vi/sample/maxresdefault.jpg",
                        "width": 1280,
                        "height": 720
                    }
                },
                "channelTitle": "sample-channel-title",
                "playlistId": "sample-playlist-id",
                "position": 0,
                "resourceId": {
                    "kind": "youtube#video",
                    "videoId": "sample-video-id"
                },
                "videoOwnerChannelTitle": "sample-video-owner-channel-title",
                "videoOwnerChannelId": "sample-video-owner-channel-id"
            },
            "contentDetails": {
                "videoId": "sample-video-id",
                "videoPublishedAt": "2021-06-11T04:05:37Z"
            },
            "status": { "privacyStatus": "public" }
        })
    }

    #[test]
    fn test_available_item_maps_every_field() {
        let item = PlaylistItem::from_raw(&parse(available_json()), &logger()).unwrap();

        assert_eq!(
            item,
            PlaylistItem::Available(AvailablePlaylistItem {
                id: "sample-id".to_string(),
                playlist_id: Some("sample-playlist-id".to_string()),
                title: "sample-title".to_string(),
                description: "sample-description".to_string(),
                thumbnails: Thumbnails {
                    default: Some(Thumbnail {
                        url: "https://i.ytimg.com/vi/sample/default.jpg".to_string(),
                        width: 120,
                        height: 90,
                    }),
                    maxres: Some(Thumbnail {
                        url: "https://i.ytimg.com/vi/sample/maxresdefault.jpg".to_string(),
                        width: 1280,
                        height: 720,
                    }),
                    ..Thumbnails::default()
                },
                privacy: Privacy::Public,
                channel_id: "sample-channel-id".to_string(),
                channel_name: "sample-channel-title".to_string(),
                video_id: "sample-video-id".to_string(),
                video_owner_channel_id: "sample-video-owner-channel-id".to_string(),
                video_owner_channel_name: "sample-video-owner-channel-title".to_string(),
                position: 0,
            })
        );
        assert!(item.is_available());
    }

    #[test]
    fn test_minimal_available_item() {
        let raw = parse(serde_json::json!({
            "id": "x",
            "snippet": {
                "title": "t",
                "description": "d",
                "thumbnails": { "default": { "url": "u", "width": 1, "height": 1 } },
                "channelId": "c",
                "channelTitle": "ct",
                "resourceId": { "videoId": "v" },
                "position": 0,
                "videoOwnerChannelId": "o",
                "videoOwnerChannelTitle": "ot"
            },
            "status": { "privacyStatus": "public" }
        }));

        let item = playlist_item_from(&raw, &logger()).unwrap();
        let available = item.as_available().unwrap();
        assert_eq!(available.id, "x");
        assert_eq!(available.playlist_id, None);
        assert_eq!(available.title, "t");
        assert_eq!(available.description, "d");
        assert_eq!(available.thumbnails.default.as_ref().unwrap().url, "u");
        assert_eq!(available.channel_id, "c");
        assert_eq!(available.channel_name, "ct");
        assert_eq!(available.video_id, "v");
        assert_eq!(available.position, 0);
        assert_eq!(available.video_owner_channel_id, "o");
        assert_eq!(available.video_owner_channel_name, "ot");
        assert_eq!(available.privacy, Privacy::Public);
    }

    #[test]
    fn test_redacted_item_is_unavailable() {
        let raw = parse(serde_json::json!({
            "status": { "privacyStatus": "private" },
            "snippet": { "thumbnails": {} }
        }));
        assert_eq!(playlist_item_from(&raw, &logger()), Ok(PlaylistItem::Unavailable));
    }

    #[test]
    fn test_redacted_item_as_returned_by_the_api() {
        let raw = parse(serde_json::json!({
            "kind": "youtube#playlistItem",
            "etag": "ylzee7oXd2oBrFvIgtU1NxswXHg",
            "id": "UExMdC1zVVB4NmphTjhXbVhXT1JLemFULVZKbnp3NnpnRi41MjE1MkI0OTQ2QzJGNzNG",
            "snippet": {
                "publishedAt": "2025-01-20T07:17:50Z",
                "channelId": "UCBZaV3lYDMKM7Y0PF46ON0Q",
                "title": "Private video",
                "description": "This video is private.",
                "thumbnails": {},
                "channelTitle": "owner",
                "playlistId": "PLLt-sUPx6jaN8WmXWORKzaT-VJnzw6zgF",
                "position": 3,
                "resourceId": { "kind": "youtube#video", "videoId": "GKkd7IDPwfE" }
            },
            "contentDetails": { "videoId": "GKkd7IDPwfE" },
            "status": { "privacyStatus": "private" }
        }));
        let item = PlaylistItem::from_raw(&raw, &logger()).unwrap();
        assert!(!item.is_available());
        assert!(item.as_available().is_none());
    }

    #[test]
    fn test_private_item_without_snippet_is_unavailable() {
        let raw = parse(serde_json::json!({ "status": { "privacyStatus": "private" } }));
        assert_eq!(playlist_item_from(&raw, &logger()), Ok(PlaylistItem::Unavailable));
    }

    #[test]
    fn test_private_item_with_thumbnails_is_available() {
        let mut json = available_json();
        json["status"]["privacyStatus"] = "private".into();
        let item = PlaylistItem::from_raw(&parse(json), &logger()).unwrap();
        assert_eq!(item.as_available().unwrap().privacy, Privacy::Private);
    }

    #[test]
    fn test_public_item_with_empty_thumbnails_is_not_redacted() {
        let mut json = available_json();
        json["snippet"]["thumbnails"] = serde_json::json!({});
        // Not redacted, and every present thumbnail is complete.
        let item = PlaylistItem::from_raw(&parse(json), &logger()).unwrap();
        assert!(item.as_available().unwrap().thumbnails.is_empty());
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let removals: [(&str, &str); 10] = [
            ("", "id"),
            ("snippet", "title"),
            ("snippet", "description"),
            ("snippet", "thumbnails"),
            ("snippet", "channelId"),
            ("snippet", "channelTitle"),
            ("snippet", "resourceId"),
            ("snippet", "position"),
            ("snippet", "videoOwnerChannelId"),
            ("snippet", "videoOwnerChannelTitle"),
        ];

        for (parent, field) in removals {
            let mut json = available_json();
            let target = if parent.is_empty() {
                &mut json
            } else {
                &mut json[parent]
            };
            target.as_object_mut().unwrap().remove(field);

            let err = PlaylistItem::from_raw(&parse(json), &logger()).unwrap_err();
            assert_eq!(err.message, MISSING_FIELDS_MESSAGE, "removed {parent}.{field}");
        }

        let mut json = available_json();
        json["status"] = serde_json::json!({});
        assert!(PlaylistItem::from_raw(&parse(json), &logger()).is_err());
    }

    #[test]
    fn test_nested_failures_are_propagated() {
        let mut json = available_json();
        json["snippet"]["thumbnails"]["default"]
            .as_object_mut()
            .unwrap()
            .remove("height");
        let err = PlaylistItem::from_raw(&parse(json), &logger()).unwrap_err();
        assert!(err.message.contains("Each thumbnail"));

        let mut json = available_json();
        json["status"]["privacyStatus"] = "secret".into();
        let err = PlaylistItem::from_raw(&parse(json), &logger()).unwrap_err();
        assert!(err.message.contains("\"secret\""));
    }

    #[test]
    fn test_from_many_keeps_order_and_fails_fast() {
        let redacted = parse(serde_json::json!({
            "status": { "privacyStatus": "private" },
            "snippet": { "thumbnails": {} }
        }));
        let available = parse(available_json());
        let mut broken = parse(available_json());
        broken.id = None;

        let items =
            playlist_item_from_many(&[available.clone(), redacted.clone()], &logger()).unwrap();
        assert!(items[0].is_available());
        assert_eq!(items[1], PlaylistItem::Unavailable);

        let err = playlist_item_from_many(&[available, broken, redacted], &logger()).unwrap_err();
        assert_eq!(err.message, MISSING_FIELDS_MESSAGE);
    }
}
