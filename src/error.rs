//! Error taxonomy for the focus timer
//!
//! Only two failure modes exist: a duration the user must fix, and an
//! alarm that failed to play. Neither is fatal.

use thiserror::Error;

/// The minutes field held something that cannot start a session.
///
/// The Display text is the user-facing requirement message shown as the
/// blocking notification; state is never mutated when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Wprowadź poprawną liczbę minut (powyżej 0).")]
pub struct InvalidDurationError;

/// The completion sound could not be played.
///
/// Recovered locally: logged and discarded, never surfaced to the client,
/// and the Finished state is unaffected.
#[derive(Debug, Clone, Error)]
#[error("alarm playback failed: {0}")]
pub struct MediaPlaybackError(pub String);
