//! Remote word acquisition
//!
//! Two chained lookups produce a playable word: a random-word service
//! picks a candidate, a dictionary service supplies its definitions. The
//! HTTP side sits behind [`WordLookup`] so the retry policy in
//! [`WordSource`] is tested against scripted fakes.

use std::fmt;

use crate::core::Meaning;

mod http;
mod source;

pub use http::HttpWordLookup;
pub use source::{AcquisitionError, Backoff, SleepBackoff, WordSource};

/// A failed upstream call.
///
/// Dictionary misses are not errors; they surface as `Ok(None)` from
/// [`WordLookup::definitions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The service answered with a non-success status.
    Status(u16),
    /// The call never produced a status: connection failure, timeout, or
    /// an unreadable body.
    Transport(String),
}

impl LookupError {
    pub(crate) fn transport(err: impl fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "status {code}"),
            Self::Transport(message) => write!(f, "transport error: {message}"),
        }
    }
}

impl std::error::Error for LookupError {}

/// The two remote lookups, consumed read-only.
pub trait WordLookup {
    /// Fetch a candidate word from the random-word service.
    ///
    /// # Errors
    ///
    /// Any non-success status or transport failure.
    fn random_word(&self) -> Result<String, LookupError>;

    /// Fetch the dictionary meanings for a candidate.
    ///
    /// Returns `Ok(None)` when the dictionary has no entry for the word —
    /// an expected miss for random candidates, not an error.
    ///
    /// # Errors
    ///
    /// Any non-success status other than "not found", or a transport
    /// failure.
    fn definitions(&self, word: &str) -> Result<Option<Vec<Meaning>>, LookupError>;
}
