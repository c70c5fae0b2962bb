//! Entry point of the library.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::http::HttpTransport;
use crate::logger::{DEFAULT_ROOT_NAME, Logger};
use crate::managers::{PlaylistItemManager, PlaylistManager};
use crate::oauth::OAuthProvider;
use crate::transport::YouTubeTransport;

/// Client for the `YouTube` Data API.
///
/// ```no_run
/// # async fn run() -> youtubes_core::Result<()> {
/// use std::sync::Arc;
/// use youtubes_core::{ApiClient, ClientConfig, StaticOAuthProvider};
///
/// let oauth = Arc::new(StaticOAuthProvider::new("ACCESS_TOKEN"));
/// let client = ApiClient::new(oauth, &ClientConfig::default())?;
///
/// let page = client.playlists().get_mine(None).await?;
/// for playlist in page.data() {
///     println!("{} ({} videos)", playlist.title, playlist.count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ApiClient {
    logger: Logger,
    playlists: PlaylistManager,
    playlist_items: PlaylistItemManager,
}

impl ApiClient {
    /// Build a client that talks to the API over HTTP.
    ///
    /// # Errors
    ///
    /// Returns a likely-bug error if the HTTP client cannot be created.
    pub fn new(oauth: Arc<dyn OAuthProvider>, config: &ClientConfig) -> Result<Self> {
        let logger = Logger::new(DEFAULT_ROOT_NAME, config.log_level);
        let transport = HttpTransport::new(oauth, config).map_err(|fault| {
            logger.child("ApiClient::new").debug(fault.message);
            Error::likely_bug("Failed to create the HTTP client.")
        })?;

        Ok(Self::with_transport(
            Arc::new(transport),
            logger,
            config.max_results,
        ))
    }

    /// Build a client on top of any transport.
    pub fn with_transport(
        transport: Arc<dyn YouTubeTransport>,
        logger: Logger,
        max_results: u32,
    ) -> Self {
        Self {
            playlists: PlaylistManager::new(Arc::clone(&transport), &logger, max_results),
            playlist_items: PlaylistItemManager::new(transport, &logger, max_results),
            logger,
        }
    }

    /// Playlist operations.
    pub const fn playlists(&self) -> &PlaylistManager {
        &self.playlists
    }

    /// Playlist item operations.
    pub const fn playlist_items(&self) -> &PlaylistItemManager {
        &self.playlist_items
    }

    /// Root logger of this client.
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::logger::LogLevel;
    use crate::oauth::StaticOAuthProvider;
    use crate::transport::MockYouTubeTransport;

    #[test]
    fn test_new_uses_config() {
        let config = ClientConfig {
            max_results: 20,
            log_level: LogLevel::Info,
            ..ClientConfig::default()
        };
        let client = ApiClient::new(Arc::new(StaticOAuthProvider::new("token")), &config).unwrap();

        assert_eq!(client.logger().name(), DEFAULT_ROOT_NAME);
        assert_eq!(client.logger().level(), LogLevel::Info);
        assert_eq!(client.playlists().max_results(), 20);
        assert_eq!(client.playlist_items().max_results(), 20);
    }

    #[tokio::test]
    async fn test_managers_share_transport() {
        let mut mock = MockYouTubeTransport::new();
        mock.expect_delete_playlist().times(1).returning(|_| Ok(()));
        mock.expect_delete_playlist_item()
            .times(1)
            .returning(|_| Ok(()));

        let client =
            ApiClient::with_transport(Arc::new(mock), Logger::new("test", LogLevel::Error), 50);
        client.playlists().delete_by_id("PL1").await.unwrap();
        client.playlist_items().delete_by_id("item").await.unwrap();
    }
}
