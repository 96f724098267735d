//! Word source with bounded retry
//!
//! `WordSource::acquire` chains the two lookups until a candidate with a
//! dictionary entry turns up. Upstream errors are recorded against a fixed
//! budget; dictionary misses just trigger a fresh candidate. Between
//! attempts it pauses for a fixed courtesy delay so the services are not
//! hammered in a tight loop.

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::config::GameConfig;
use crate::core::Word;
use crate::lookup::{LookupError, WordLookup};

/// Suspends between retry cycles. Injected so tests run without sleeping.
pub trait Backoff {
    fn pause(&self, delay: Duration);
}

/// Production backoff: block the thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepBackoff;

impl Backoff for SleepBackoff {
    fn pause(&self, delay: Duration) {
        thread::sleep(delay);
    }
}

/// Acquisition gave up after exhausting the upstream error budget.
///
/// Terminal for the process: there is no playable word, so the caller
/// stops the program and shows the recorded errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcquisitionError {
    errors: Vec<LookupError>,
}

impl AcquisitionError {
    /// The recorded upstream errors, in the order they happened.
    #[must_use]
    pub fn errors(&self) -> &[LookupError] {
        &self.errors
    }
}

impl fmt::Display for AcquisitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "too many upstream errors while fetching a word (")?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{err}")?;
        }
        write!(f, ")")
    }
}

impl std::error::Error for AcquisitionError {}

/// Acquires a playable word from the two remote lookups.
pub struct WordSource<L, B = SleepBackoff> {
    lookup: L,
    backoff: B,
    config: GameConfig,
}

impl<L: WordLookup> WordSource<L> {
    #[must_use]
    pub fn new(lookup: L, config: GameConfig) -> Self {
        Self::with_backoff(lookup, SleepBackoff, config)
    }
}

impl<L: WordLookup, B: Backoff> WordSource<L, B> {
    #[must_use]
    pub fn with_backoff(lookup: L, backoff: B, config: GameConfig) -> Self {
        Self {
            lookup,
            backoff,
            config,
        }
    }

    /// Fetch a word with definitions, retrying within the error budget.
    ///
    /// The first candidate that both services answer for wins. A
    /// dictionary miss costs nothing and just picks a new candidate on
    /// the next cycle.
    ///
    /// # Errors
    ///
    /// `AcquisitionError` with the recorded upstream errors once the
    /// budget is spent.
    pub fn acquire(&self) -> Result<Word, AcquisitionError> {
        let mut errors: Vec<LookupError> = Vec::new();
        let mut first_attempt = true;

        while errors.len() < self.config.max_upstream_errors {
            if !first_attempt {
                log::debug!(
                    "waiting {:?} between lookup cycles",
                    self.config.api_retry_delay
                );
                self.backoff.pause(self.config.api_retry_delay);
            }
            first_attempt = false;

            let candidate = match self.lookup.random_word() {
                Ok(word) => word,
                Err(err) => {
                    log::debug!("random-word lookup failed: {err}");
                    errors.push(err);
                    continue;
                }
            };
            log::debug!("candidate word: {candidate:?}");

            match self.lookup.definitions(&candidate) {
                Ok(Some(meanings)) => {
                    log::debug!("found a definition for {candidate:?}");
                    return Ok(Word::new(candidate, meanings));
                }
                Ok(None) => {
                    log::debug!("no dictionary entry for {candidate:?}, picking a new word");
                }
                Err(err) => {
                    log::debug!("definition lookup failed: {err}");
                    errors.push(err);
                }
            }
        }

        Err(AcquisitionError { errors })
    }
}
