//! Privacy status of playlists and playlist items.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::LikelyBugError;

/// Privacy status of a playlist or playlist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Visible to everyone.
    Public,
    /// Visible to anyone with the link.
    Unlisted,
    /// Visible only to the owner.
    Private,
}

impl Privacy {
    /// The literal the API uses for this status.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Unlisted => "unlisted",
            Self::Private => "private",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Privacy {
    type Error = LikelyBugError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        convert_to_privacy(Some(value))
    }
}

/// A privacy status typed by a user did not name a known status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown privacy \"{input}\". Use public, unlisted or private.")]
pub struct ParsePrivacyError {
    /// What was typed.
    pub input: String,
}

/// Parses user input, ignoring case and surrounding whitespace.
///
/// API values go through [`convert_to_privacy`] instead.
impl std::str::FromStr for Privacy {
    type Err = ParsePrivacyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        convert_to_privacy(Some(s.trim().to_ascii_lowercase().as_str())).map_err(|_| {
            ParsePrivacyError {
                input: s.to_string(),
            }
        })
    }
}

/// Convert a raw `privacyStatus` value into a [`Privacy`].
///
/// Total over its input: exactly `public`, `unlisted` and `private` succeed.
/// Anything else, including an absent value, is an error that names what was
/// received.
pub fn convert_to_privacy(raw: Option<&str>) -> Result<Privacy, LikelyBugError> {
    match raw {
        Some("public") => Ok(Privacy::Public),
        Some("unlisted") => Ok(Privacy::Unlisted),
        Some("private") => Ok(Privacy::Private),
        Some(other) => Err(LikelyBugError::new(format!(
            "The raw privacy status has an unexpected format. Expected \"public\", \"unlisted\", or \"private\", but received \"{other}\"."
        ))),
        None => Err(LikelyBugError::new(
            "The raw privacy status is undefined. Expected \"public\", \"unlisted\", or \"private\".",
        )),
    }
}
