//! Thumbnails of videos and playlists.
//!
//! Each named resolution is individually optional; the API only returns the
//! sizes that exist for a resource. A resolution that *is* present must carry
//! its url, width and height.
//!
//! [YouTube Data API Reference](https://developers.google.com/youtube/v3/docs/thumbnails)

use serde::{Deserialize, Serialize};

use crate::error::LikelyBugError;
use crate::logger::Logger;
use crate::validation::{RequiredFields, reject};
use crate::wire::{RawThumbnail, RawThumbnailDetails};

const MISSING_FIELDS_MESSAGE: &str = "The raw data is missing required fields. Each thumbnail (default, medium, high, standard, maxres) must include url, width, and height.";

/// A single thumbnail image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Thumbnail {
    /// The URL of the image.
    pub url: String,
    /// The width of the image in pixels.
    pub width: u32,
    /// The height of the image in pixels.
    pub height: u32,
}

/// Named thumbnail resolutions, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// `default`
    Default,
    /// `medium`
    Medium,
    /// `high`
    High,
    /// `standard`
    Standard,
    /// `maxres`
    Maxres,
}

impl Resolution {
    /// All resolutions, lowest first.
    pub const ASCENDING: [Self; 5] = [
        Self::Default,
        Self::Medium,
        Self::High,
        Self::Standard,
        Self::Maxres,
    ];

    /// The key the API uses for this resolution.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Standard => "standard",
            Self::Maxres => "maxres",
        }
    }
}

/// The thumbnails of a video or playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnails {
    /// `default` resolution.
    pub default: Option<Thumbnail>,
    /// `medium` resolution.
    pub medium: Option<Thumbnail>,
    /// `high` resolution.
    pub high: Option<Thumbnail>,
    /// `standard` resolution.
    pub standard: Option<Thumbnail>,
    /// `maxres` resolution.
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// Validate raw thumbnail details.
    ///
    /// Absent resolutions are fine. A present resolution missing any of url,
    /// width or height is rejected.
    pub fn from_raw(raw: &RawThumbnailDetails, logger: &Logger) -> Result<Self, LikelyBugError> {
        let mut required = RequiredFields::new();
        let mut convert = |path: [&'static str; 3], thumbnail: Option<&RawThumbnail>| {
            let thumbnail = thumbnail?;
            let url = required.take(path[0], thumbnail.url.as_ref());
            let width = required.take(path[1], thumbnail.width.as_ref());
            let height = required.take(path[2], thumbnail.height.as_ref());
            match (url, width, height) {
                (Some(url), Some(&width), Some(&height)) => Some(Thumbnail {
                    url: url.clone(),
                    width,
                    height,
                }),
                _ => None,
            }
        };

        let thumbnails = Self {
            default: convert(
                ["default.url", "default.width", "default.height"],
                raw.default.as_ref(),
            ),
            medium: convert(
                ["medium.url", "medium.width", "medium.height"],
                raw.medium.as_ref(),
            ),
            high: convert(["high.url", "high.width", "high.height"], raw.high.as_ref()),
            standard: convert(
                ["standard.url", "standard.width", "standard.height"],
                raw.standard.as_ref(),
            ),
            maxres: convert(
                ["maxres.url", "maxres.width", "maxres.height"],
                raw.maxres.as_ref(),
            ),
        };

        if !required.is_satisfied() {
            let logger = logger.child("Thumbnails::from_raw");
            return Err(reject(
                &logger,
                "Thumbnails",
                raw,
                required.missing(),
                MISSING_FIELDS_MESSAGE,
            ));
        }

        Ok(thumbnails)
    }

    /// The thumbnail at a given resolution, if present.
    pub const fn get(&self, resolution: Resolution) -> Option<&Thumbnail> {
        match resolution {
            Resolution::Default => self.default.as_ref(),
            Resolution::Medium => self.medium.as_ref(),
            Resolution::High => self.high.as_ref(),
            Resolution::Standard => self.standard.as_ref(),
            Resolution::Maxres => self.maxres.as_ref(),
        }
    }

    /// Present thumbnails, lowest resolution first.
    pub fn iter(&self) -> impl Iterator<Item = (Resolution, &Thumbnail)> {
        Resolution::ASCENDING
            .into_iter()
            .filter_map(|resolution| self.get(resolution).map(|t| (resolution, t)))
    }

    /// Whether no resolution is present.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// The highest resolution present: `maxres > standard > high > medium > default`.
    pub fn highest_resolution(&self) -> Option<&Thumbnail> {
        self.iter().last().map(|(_, thumbnail)| thumbnail)
    }

    /// The lowest resolution present: `default > medium > high > standard > maxres`.
    pub fn lowest_resolution(&self) -> Option<&Thumbnail> {
        self.iter().next().map(|(_, thumbnail)| thumbnail)
    }
}
