//! Wire-format records of the `YouTube` Data API v3.
//!
//! These mirror the API's documented JSON schema literally. Every field is
//! optional because the API omits fields depending on the requested `part`s,
//! the caller's permissions, and the state of the resource. Nothing here is
//! validated; the entity constructors do that.
//!
//! The same records are serialized as request bodies for `insert` and
//! `update` calls, so absent fields are skipped when serializing.
//!
//! [YouTube Data API Reference](https://developers.google.com/youtube/v3/docs)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single thumbnail image (`youtube#thumbnail`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawThumbnail {
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// The named resolutions of a resource's thumbnails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawThumbnailDetails {
    /// 120x90 for videos, 88x88 for channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<RawThumbnail>,
    /// 320x180 for videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<RawThumbnail>,
    /// 480x360 for videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<RawThumbnail>,
    /// 640x480, only for some videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard: Option<RawThumbnail>,
    /// 1280x720, only for some videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxres: Option<RawThumbnail>,
}

impl RawThumbnailDetails {
    /// Whether no resolution is present at all.
    ///
    /// The API returns an empty object for redacted playlist items.
    pub const fn is_empty(&self) -> bool {
        self.default.is_none()
            && self.medium.is_none()
            && self.high.is_none()
            && self.standard.is_none()
            && self.maxres.is_none()
    }
}

/// Localized title and description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLocalization {
    /// Localized title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Localized description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `snippet` of a playlist resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylistSnippet {
    /// RFC 3339 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// Owning channel ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Playlist title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Playlist description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Playlist thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<RawThumbnailDetails>,
    /// Owning channel title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// Language of the default metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
}

/// `status` of a playlist or playlist item resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatus {
    /// `public`, `unlisted` or `private`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_status: Option<String>,
}

/// `contentDetails` of a playlist resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylistContentDetails {
    /// Number of videos in the playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u32>,
}

/// A playlist resource (`youtube#playlist`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylist {
    /// Resource kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Entity tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Playlist ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Basic details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<RawPlaylistSnippet>,
    /// Privacy details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RawStatus>,
    /// Content details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_details: Option<RawPlaylistContentDetails>,
    /// Localized metadata keyed by language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localizations: Option<BTreeMap<String, RawLocalization>>,
}

/// `snippet.resourceId` of a playlist item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResourceId {
    /// Kind of the referenced resource, `youtube#video` for videos.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Referenced video ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// `snippet` of a playlist item resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylistItemSnippet {
    /// RFC 3339 timestamp of when the item was added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    /// ID of the user that added the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Item title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Item description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Item thumbnails.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnails: Option<RawThumbnailDetails>,
    /// Title of the channel the item belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_title: Option<String>,
    /// Channel ID of the video's uploader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_owner_channel_id: Option<String>,
    /// Channel title of the video's uploader.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_owner_channel_title: Option<String>,
    /// Containing playlist ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
    /// Zero-based position in the playlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Referenced resource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<RawResourceId>,
}

/// `contentDetails` of a playlist item resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylistItemContentDetails {
    /// Referenced video ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    /// RFC 3339 publish timestamp of the video.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_published_at: Option<String>,
    /// Author note on the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// A playlist item resource (`youtube#playlistItem`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlaylistItem {
    /// Resource kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Entity tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Playlist item ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Basic details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<RawPlaylistItemSnippet>,
    /// Content details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_details: Option<RawPlaylistItemContentDetails>,
    /// Privacy details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RawStatus>,
}

/// `pageInfo` of a list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageInfo {
    /// Total number of results in the result set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u32>,
    /// Number of results included in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_per_page: Option<u32>,
}

/// A list response (`youtube#playlistListResponse`, `youtube#playlistItemListResponse`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListResponse<T> {
    /// Resource kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Entity tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    /// Token of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
    /// Token of the previous page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_page_token: Option<String>,
    /// Paging details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_info: Option<RawPageInfo>,
    /// Resources of this page.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<T>>,
}

impl<T> Default for RawListResponse<T> {
    fn default() -> Self {
        Self {
            kind: None,
            etag: None,
            next_page_token: None,
            prev_page_token: None,
            page_info: None,
            items: None,
        }
    }
}

/// Body of an API error response: `{"error": {"code": 403, "message": "..."}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawErrorResponse {
    /// The error details.
    #[serde(default)]
    pub error: Option<RawErrorBody>,
}

/// Details of an API error response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawErrorBody {
    /// HTTP status code.
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_are_both_absent() {
        let raw: RawPlaylistItem = serde_json::from_str(
            r#"{"id": null, "snippet": {"title": "t"}, "status": {"privacyStatus": "public"}}"#,
        )
        .unwrap();

        assert!(raw.id.is_none());
        let snippet = raw.snippet.unwrap();
        assert_eq!(snippet.title.as_deref(), Some("t"));
        assert!(snippet.description.is_none());
        assert!(snippet.thumbnails.is_none());
    }

    #[test]
    fn test_empty_thumbnails_object() {
        let raw: RawThumbnailDetails = serde_json::from_str("{}").unwrap();
        assert!(raw.is_empty());

        let raw: RawThumbnailDetails =
            serde_json::from_str(r#"{"high": {"url": "hq.jpg"}}"#).unwrap();
        assert!(!raw.is_empty());
    }

    #[test]
    fn test_list_response_camel_case() {
        let raw: RawListResponse<RawPlaylist> = serde_json::from_str(
            r#"{
                "kind": "youtube#playlistListResponse",
                "nextPageToken": "CDIQAA",
                "pageInfo": {"totalResults": 120, "resultsPerPage": 50},
                "items": []
            }"#,
        )
        .unwrap();

        assert_eq!(raw.next_page_token.as_deref(), Some("CDIQAA"));
        assert!(raw.prev_page_token.is_none());
        assert_eq!(
            raw.page_info,
            Some(RawPageInfo {
                total_results: Some(120),
                results_per_page: Some(50),
            })
        );
        assert_eq!(raw.items, Some(vec![]));
    }

    #[test]
    fn test_request_body_skips_absent_fields() {
        let body = RawPlaylist {
            snippet: Some(RawPlaylistSnippet {
                title: Some("Road trip".to_string()),
                ..RawPlaylistSnippet::default()
            }),
            status: Some(RawStatus {
                privacy_status: Some("unlisted".to_string()),
            }),
            ..RawPlaylist::default()
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "snippet": {"title": "Road trip"},
                "status": {"privacyStatus": "unlisted"}
            })
        );
    }
}
