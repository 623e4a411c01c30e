//! Poker card collections with per-card visibility and optional `no_std` support.
//!
//! The crate provides a [`PokerCards`] type holding an ordered list of cards,
//! each tagged visible or hidden, and a [`codec`] translating between integer
//! codes, two-character names such as `"Ah"`, and the [`NOCARD`] marker used
//! for cards whose identity is withheld.
//!
//! # Example
//!
//! ```
//! use pokercards::{NOCARD, PokerCards};
//!
//! let mut hole = PokerCards::try_new(["Ah", "Kc"])?;
//! hole.set_visible(37, false);
//! assert_eq!(hole.to_list(false), [12, NOCARD]);
//! assert_eq!(hole.to_list(true), [12, 37]);
//! # Ok::<(), pokercards::InvalidCard>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod cards;
pub mod codec;
pub mod error;

// Re-export main types
pub use cards::{Card, PokerCards, Source};
pub use codec::{CardValue, DECK_SIZE, NOCARD, Rank, Suit};
pub use error::InvalidCard;
