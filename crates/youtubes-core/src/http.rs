//! HTTP implementation of [`YouTubeTransport`] on top of `reqwest`.
//!
//! Timeouts belong here: the client is built with the configured request
//! timeout, and nothing above the transport knows about it.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::oauth::OAuthProvider;
use crate::transport::{
    PLAYLIST_ITEM_PARTS, PLAYLIST_PARTS, PlaylistFilter, PlaylistItemListQuery, PlaylistListQuery,
    TransportFault, TransportResult, YouTubeTransport,
};
use crate::wire::{RawErrorResponse, RawListResponse, RawPlaylist, RawPlaylistItem};

const PLAYLISTS_PATH: &str = "playlists";
const PLAYLIST_ITEMS_PATH: &str = "playlistItems";

/// `reqwest`-backed transport.
pub struct HttpTransport {
    client: Client,
    base_url: String,
    oauth: Arc<dyn OAuthProvider>,
}

impl HttpTransport {
    /// Build a transport from configuration.
    pub fn new(oauth: Arc<dyn OAuthProvider>, config: &ClientConfig) -> TransportResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportFault::other(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config.api_base_url.clone(), oauth))
    }

    /// Use an existing `reqwest` client.
    pub fn with_client(client: Client, base_url: String, oauth: Arc<dyn OAuthProvider>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            oauth,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{path}", self.base_url))
            .bearer_auth(self.oauth.access_token())
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> TransportResult<T> {
        let response = send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| fault_from_reqwest(&e, "Failed to decode API response"))
    }

    async fn write<B, T>(
        &self,
        method: Method,
        path: &str,
        parts: &[&str],
        body: &B,
    ) -> TransportResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        self.fetch(self.write_request(method, path, parts, body)).await
    }

    fn write_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        parts: &[&str],
        body: &B,
    ) -> RequestBuilder {
        self.request(method, path)
            .query(&[("part", parts.join(","))])
            .json(body)
    }

    async fn delete(&self, path: &str, id: &str) -> TransportResult<()> {
        let request = self.request(Method::DELETE, path).query(&[("id", id)]);
        send(request).await.map(|_| ())
    }
}

#[async_trait]
impl YouTubeTransport for HttpTransport {
    async fn list_playlists(
        &self,
        query: &PlaylistListQuery,
    ) -> TransportResult<RawListResponse<RawPlaylist>> {
        let request = self
            .request(Method::GET, PLAYLISTS_PATH)
            .query(&playlist_list_params(query));
        self.fetch(request).await
    }

    async fn insert_playlist(&self, body: &RawPlaylist) -> TransportResult<RawPlaylist> {
        self.write(Method::POST, PLAYLISTS_PATH, &playlist_write_parts(body), body)
            .await
    }

    async fn update_playlist(&self, body: &RawPlaylist) -> TransportResult<RawPlaylist> {
        self.write(Method::PUT, PLAYLISTS_PATH, &playlist_write_parts(body), body)
            .await
    }

    async fn delete_playlist(&self, id: &str) -> TransportResult<()> {
        self.delete(PLAYLISTS_PATH, id).await
    }

    async fn list_playlist_items(
        &self,
        query: &PlaylistItemListQuery,
    ) -> TransportResult<RawListResponse<RawPlaylistItem>> {
        let request = self
            .request(Method::GET, PLAYLIST_ITEMS_PATH)
            .query(&playlist_item_list_params(query));
        self.fetch(request).await
    }

    async fn insert_playlist_item(
        &self,
        body: &RawPlaylistItem,
    ) -> TransportResult<RawPlaylistItem> {
        self.write(Method::POST, PLAYLIST_ITEMS_PATH, PLAYLIST_ITEM_PARTS, body)
            .await
    }

    async fn update_playlist_item(
        &self,
        body: &RawPlaylistItem,
    ) -> TransportResult<RawPlaylistItem> {
        self.write(Method::PUT, PLAYLIST_ITEMS_PATH, PLAYLIST_ITEM_PARTS, body)
            .await
    }

    async fn delete_playlist_item(&self, id: &str) -> TransportResult<()> {
        self.delete(PLAYLIST_ITEMS_PATH, id).await
    }
}

async fn send(request: RequestBuilder) -> TransportResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| fault_from_reqwest(&e, "Failed to call the YouTube API"))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!("API call failed with {}: {}", status, body);
    Err(fault_from_error_body(status, &body))
}

fn fault_from_reqwest(err: &reqwest::Error, context: &str) -> TransportFault {
    TransportFault {
        code: err.status().map(|s| s.as_u16()),
        message: format!("{context}: {err}"),
    }
}

/// Build a fault from a non-success response body.
///
/// The API reports `{"error": {"code": 403, "message": "..."}}`; when the body
/// is something else the HTTP status and its reason phrase are used.
fn fault_from_error_body(status: StatusCode, body: &str) -> TransportFault {
    let parsed = serde_json::from_str::<RawErrorResponse>(body)
        .ok()
        .and_then(|r| r.error);

    let code = parsed
        .as_ref()
        .and_then(|e| e.code)
        .unwrap_or_else(|| status.as_u16());
    let message = parsed
        .and_then(|e| e.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    TransportFault::status(code, message)
}

/// Parts of a playlist write.
///
/// The API replaces every listed part, so `status` and `localizations` are
/// only listed when the body carries them. `id` and `contentDetails` are
/// read-only and shape the response.
fn playlist_write_parts(body: &RawPlaylist) -> Vec<&'static str> {
    let mut parts = vec!["id", "contentDetails"];
    if body.snippet.is_some() {
        parts.push("snippet");
    }
    if body.status.is_some() {
        parts.push("status");
    }
    if body.localizations.is_some() {
        parts.push("localizations");
    }
    parts
}

fn playlist_list_params(query: &PlaylistListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("part", PLAYLIST_PARTS.join(",")),
        ("maxResults", query.max_results.to_string()),
    ];
    match &query.filter {
        PlaylistFilter::Mine => params.push(("mine", "true".to_string())),
        PlaylistFilter::Ids(ids) => params.push(("id", ids.join(","))),
        PlaylistFilter::ChannelId(id) => params.push(("channelId", id.clone())),
    }
    if let Some(token) = &query.page_token {
        params.push(("pageToken", token.clone()));
    }
    params
}

fn playlist_item_list_params(query: &PlaylistItemListQuery) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("part", PLAYLIST_ITEM_PARTS.join(",")),
        ("maxResults", query.max_results.to_string()),
        ("playlistId", query.playlist_id.clone()),
    ];
    if let Some(token) = &query.page_token {
        params.push(("pageToken", token.clone()));
    }
    params
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::oauth::StaticOAuthProvider;
    use crate::wire::{RawLocalization, RawPlaylistSnippet, RawStatus};

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_playlist_list_params_mine() {
        let params = playlist_list_params(&PlaylistListQuery {
            filter: PlaylistFilter::Mine,
            max_results: 50,
            page_token: None,
        });

        assert_eq!(param(&params, "part"), Some("id,contentDetails,snippet,status"));
        assert_eq!(param(&params, "mine"), Some("true"));
        assert_eq!(param(&params, "maxResults"), Some("50"));
        assert_eq!(param(&params, "pageToken"), None);
    }

    #[test]
    fn test_playlist_list_params_ids_and_token() {
        let params = playlist_list_params(&PlaylistListQuery {
            filter: PlaylistFilter::Ids(vec!["PL1".to_string(), "PL2".to_string()]),
            max_results: 10,
            page_token: Some("CAoQAA".to_string()),
        });

        assert_eq!(param(&params, "id"), Some("PL1,PL2"));
        assert_eq!(param(&params, "mine"), None);
        assert_eq!(param(&params, "pageToken"), Some("CAoQAA"));
    }

    #[test]
    fn test_playlist_list_params_channel() {
        let params = playlist_list_params(&PlaylistListQuery {
            filter: PlaylistFilter::ChannelId("UC123".to_string()),
            max_results: 50,
            page_token: None,
        });
        assert_eq!(param(&params, "channelId"), Some("UC123"));
    }

    #[test]
    fn test_playlist_item_list_params() {
        let params = playlist_item_list_params(&PlaylistItemListQuery {
            playlist_id: "PL1".to_string(),
            max_results: 50,
            page_token: Some("next".to_string()),
        });

        assert_eq!(param(&params, "part"), Some("contentDetails,id,snippet,status"));
        assert_eq!(param(&params, "playlistId"), Some("PL1"));
        assert_eq!(param(&params, "pageToken"), Some("next"));
    }

    fn transport() -> HttpTransport {
        HttpTransport::with_client(
            Client::new(),
            "https://example.test/youtube/v3".to_string(),
            Arc::new(StaticOAuthProvider::new("token")),
        )
    }

    fn part_of(request: &reqwest::Request) -> Option<String> {
        request
            .url()
            .query_pairs()
            .find(|(k, _)| k == "part")
            .map(|(_, v)| v.into_owned())
    }

    #[test]
    fn test_playlist_write_parts_follow_body() {
        let body = RawPlaylist {
            id: Some("PL1".to_string()),
            snippet: Some(RawPlaylistSnippet {
                title: Some("Renamed".to_string()),
                ..RawPlaylistSnippet::default()
            }),
            localizations: Some(BTreeMap::from([(
                "fr".to_string(),
                RawLocalization {
                    title: Some("Renomme".to_string()),
                    description: Some(String::new()),
                },
            )])),
            ..RawPlaylist::default()
        };
        let request = transport()
            .write_request(
                Method::PUT,
                PLAYLISTS_PATH,
                &playlist_write_parts(&body),
                &body,
            )
            .build()
            .unwrap();

        assert_eq!(*request.method(), Method::PUT);
        assert_eq!(request.url().path(), "/youtube/v3/playlists");
        assert_eq!(
            part_of(&request).as_deref(),
            Some("id,contentDetails,snippet,localizations")
        );
    }

    #[test]
    fn test_playlist_write_parts_with_status() {
        let body = RawPlaylist {
            snippet: Some(RawPlaylistSnippet::default()),
            status: Some(RawStatus {
                privacy_status: Some("unlisted".to_string()),
            }),
            ..RawPlaylist::default()
        };
        assert_eq!(
            playlist_write_parts(&body),
            vec!["id", "contentDetails", "snippet", "status"]
        );
    }

    #[test]
    fn test_playlist_item_write_keeps_fixed_parts() {
        let body = RawPlaylistItem::default();
        let request = transport()
            .write_request(Method::POST, PLAYLIST_ITEMS_PATH, PLAYLIST_ITEM_PARTS, &body)
            .build()
            .unwrap();
        assert_eq!(
            part_of(&request).as_deref(),
            Some("contentDetails,id,snippet,status")
        );
    }

    #[test]
    fn test_fault_from_api_error_body() {
        let body = r#"{"error": {"code": 403, "message": "quotaExceeded", "errors": []}}"#;
        let fault = fault_from_error_body(StatusCode::FORBIDDEN, body);
        assert_eq!(fault, TransportFault::status(403, "quotaExceeded"));
    }

    #[test]
    fn test_fault_from_unparseable_body_uses_status() {
        let fault = fault_from_error_body(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        assert_eq!(fault, TransportFault::status(502, "Bad Gateway"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let transport = HttpTransport::with_client(
            Client::new(),
            "https://example.test/youtube/v3/".to_string(),
            Arc::new(StaticOAuthProvider::new("token")),
        );
        assert_eq!(transport.base_url, "https://example.test/youtube/v3");
    }
}
