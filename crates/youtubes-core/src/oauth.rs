//! OAuth credentials for authenticated API calls.

use std::fmt;

/// Supplies the bearer token for API calls.
pub trait OAuthProvider: Send + Sync {
    /// The current access token.
    fn access_token(&self) -> String;
}

/// An OAuth provider that never refreshes its token.
#[derive(Clone)]
pub struct StaticOAuthProvider {
    access_token: String,
}

impl StaticOAuthProvider {
    /// Create a provider for a fixed access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }
}

impl OAuthProvider for StaticOAuthProvider {
    fn access_token(&self) -> String {
        self.access_token.clone()
    }
}

// Tokens stay out of debug output.
impl fmt::Debug for StaticOAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticOAuthProvider")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_returns_token() {
        let provider = StaticOAuthProvider::new("ya29.token");
        assert_eq!(provider.access_token(), "ya29.token");
    }

    #[test]
    fn test_debug_redacts_token() {
        let provider = StaticOAuthProvider::new("ya29.secret");
        let debug = format!("{provider:?}");
        assert!(!debug.contains("ya29.secret"));
        assert!(debug.contains("redacted"));
    }
}
