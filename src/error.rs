//! Error types for card resolution.

use alloc::string::String;

use thiserror::Error;

/// A value that cannot be resolved to a card code.
///
/// Raised by [`value_of`](crate::codec::value_of) and by every operation that
/// resolves its input through it. The offending input is carried along so the
/// caller can report which element was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum InvalidCard {
    /// Integer outside `0..=51` that is not the no-card marker.
    #[error("invalid card code {0}")]
    Code(i64),
    /// String that is not a rank followed by a suit.
    #[error("invalid card name {0:?}")]
    Name(String),
}
