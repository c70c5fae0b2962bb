//! Presence checks for loosely-typed API records.
//!
//! Every field of a wire record is optional: a missing key and an explicit
//! `null` both deserialize to `None`. Entity constructors use
//! [`RequiredFields`] to pull the fields they need and to remember which ones
//! were absent.

use serde::Serialize;

use crate::error::LikelyBugError;
use crate::logger::{LogLevel, Logger};

/// Whether a wire value is absent (missing key or explicit `null`).
pub const fn is_nullish<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_none()
}

/// Collects the paths of required fields that turned out to be absent.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Start a new check.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as missing if `value` is nullish, and pass the value through.
    pub fn take<'a, T: ?Sized>(
        &mut self,
        path: &'static str,
        value: Option<&'a T>,
    ) -> Option<&'a T> {
        if is_nullish(value) {
            self.missing.push(path);
        }
        value
    }

    /// Paths of the required fields that were absent, in check order.
    pub fn missing(&self) -> &[&'static str] {
        &self.missing
    }

    /// Whether every checked field was present.
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Dump a rejected raw record at debug level and build the error for it.
///
/// The payload may contain user content, so it is never logged above debug.
pub fn reject<R: Serialize>(
    logger: &Logger,
    entity: &str,
    raw: &R,
    missing: &[&str],
    message: impl Into<String>,
) -> LikelyBugError {
    if logger.enabled(LogLevel::Debug) {
        logger.debug(format!("Generating {entity} instance from raw data."));
        if !missing.is_empty() {
            logger.debug(format!("Missing fields: {}", missing.join(", ")));
        }
        logger.debug("Raw data:");
        match serde_json::to_string_pretty(raw) {
            Ok(dump) => logger.debug(dump),
            Err(e) => logger.debug(format!("<failed to serialize raw data: {e}>")),
        }
    }
    LikelyBugError::new(message)
}
