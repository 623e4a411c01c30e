//! Card codes and their two-character names.
//!
//! A card is identified by a code in `0..=51`, computed as
//! `suit_index * 13 + rank_index`. Suits are ordered hearts, diamonds, clubs,
//! spades and ranks run from two up to ace, so `"Ah"` is 12 and `"3s"` is 40.
//! The reserved code [`NOCARD`] stands for a card whose identity is withheld.

use alloc::string::{String, ToString};
use core::fmt;

use crate::error::InvalidCard;

/// Code of a card whose identity is not known to the observer.
pub const NOCARD: u8 = 255;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const RANK_COUNT: u8 = 13;
const LAST_CODE: u8 = 51;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in code order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Position of the suit in code order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lower-case letter used in card names.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    /// Parses a suit letter.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'h' => Some(Self::Hearts),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            's' => Some(Self::Spades),
            _ => None,
        }
    }

    const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Hearts),
            1 => Some(Self::Diamonds),
            2 => Some(Self::Clubs),
            3 => Some(Self::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, from two up to ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten, written `T`.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in code order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Position of the rank in code order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Character used in card names.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    /// Parses a rank character.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    const fn from_index(index: u8) -> Option<Self> {
        if index < RANK_COUNT {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Raw input that can be resolved to a card code.
///
/// Integers and strings convert into it with [`From`], so most APIs accept
/// `impl Into<CardValue>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardValue<'a> {
    /// A numeric code, possibly out of range.
    Code(i64),
    /// A two-character name such as `"Ah"`.
    Name(&'a str),
}

impl From<u8> for CardValue<'_> {
    fn from(code: u8) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<i32> for CardValue<'_> {
    fn from(code: i32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<i64> for CardValue<'_> {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl<'a> From<&'a str> for CardValue<'a> {
    fn from(name: &'a str) -> Self {
        Self::Name(name)
    }
}

impl<'a> From<&'a String> for CardValue<'a> {
    fn from(name: &'a String) -> Self {
        Self::Name(name)
    }
}

/// Returns the code of the card with the given rank and suit.
///
/// # Example
///
/// ```
/// use pokercards::codec::{Rank, Suit, encode};
///
/// assert_eq!(encode(Rank::King, Suit::Clubs), 37);
/// ```
#[must_use]
pub const fn encode(rank: Rank, suit: Suit) -> u8 {
    suit.index() * RANK_COUNT + rank.index()
}

/// Splits a code back into rank and suit.
///
/// Returns `None` for [`NOCARD`] and for codes past the end of the deck.
#[must_use]
pub const fn decode(code: u8) -> Option<(Rank, Suit)> {
    if code > LAST_CODE {
        return None;
    }
    match (Rank::from_index(code % RANK_COUNT), Suit::from_index(code / RANK_COUNT)) {
        (Some(rank), Some(suit)) => Some((rank, suit)),
        _ => None,
    }
}

/// Returns the two-character name of a code, e.g. `"Ah"` for 12.
#[must_use]
pub fn name_of(code: u8) -> Option<String> {
    decode(code).map(|(rank, suit)| {
        let mut name = String::with_capacity(2);
        name.push(rank.symbol());
        name.push(suit.symbol());
        name
    })
}

/// Returns the no-card marker.
#[must_use]
pub const fn nocard() -> u8 {
    NOCARD
}

/// Resolves a raw value to a card code.
///
/// Codes already in `0..=51`, and [`NOCARD`] itself, resolve to themselves.
///
/// # Errors
///
/// Returns [`InvalidCard`] for integers outside `0..=51` other than
/// [`NOCARD`], and for strings that are not a rank character followed by a
/// suit letter.
///
/// # Example
///
/// ```
/// use pokercards::codec::{NOCARD, value_of};
///
/// assert_eq!(value_of("Ah"), Ok(12));
/// assert_eq!(value_of(40), Ok(40));
/// assert_eq!(value_of(NOCARD), Ok(255));
/// assert!(value_of(52).is_err());
/// ```
pub fn value_of<'a>(value: impl Into<CardValue<'a>>) -> Result<u8, InvalidCard> {
    match value.into() {
        CardValue::Code(code) => match u8::try_from(code) {
            Ok(valid) if valid <= LAST_CODE || valid == NOCARD => Ok(valid),
            _ => Err(InvalidCard::Code(code)),
        },
        CardValue::Name(name) => parse_name(name).ok_or_else(|| InvalidCard::Name(name.to_string())),
    }
}

fn parse_name(name: &str) -> Option<u8> {
    let mut chars = name.chars();
    let rank = Rank::from_symbol(chars.next()?)?;
    let suit = Suit::from_symbol(chars.next()?)?;
    chars.next().is_none().then_some(encode(rank, suit))
}
