//! Ordered card collections with per-card visibility.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::codec::{CardValue, NOCARD, value_of};
use crate::error::InvalidCard;

/// A card held in a [`PokerCards`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Card code, or [`NOCARD`].
    code: u8,
    /// Whether observers may see the code.
    visible: bool,
}

impl Card {
    // Every entry is created here: an unknown card cannot be visible.
    const fn new(code: u8, visible: bool) -> Self {
        Self {
            code,
            visible: visible && code != NOCARD,
        }
    }

    fn resolve<'a>(value: impl Into<CardValue<'a>>, visible: bool) -> Result<Self, InvalidCard> {
        value_of(value).map(|code| Self::new(code, visible))
    }

    /// Returns the stored code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        self.code
    }

    /// Returns whether the card is exposed to observers.
    ///
    /// Always `false` for [`NOCARD`] entries.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible && self.code != NOCARD
    }

    /// Returns whether the identity of the card is unknown.
    #[must_use]
    pub const fn is_nocard(&self) -> bool {
        self.code == NOCARD
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let visibility = if self.is_visible() {
            "visible"
        } else {
            "not visible"
        };
        write!(f, "Card({}, {visibility})", self.code)
    }
}

/// Input accepted by [`PokerCards::try_new`].
#[derive(Debug, Clone, Default)]
pub enum Source<'a> {
    /// No cards.
    #[default]
    Empty,
    /// A single card, visible unless it resolves to [`NOCARD`].
    Single(CardValue<'a>),
    /// One card per element, in order, each visible unless it resolves to
    /// [`NOCARD`].
    List(Vec<CardValue<'a>>),
    /// A copy of another collection, visibility included.
    Cards(&'a PokerCards),
}

impl<'a> From<CardValue<'a>> for Source<'a> {
    fn from(value: CardValue<'a>) -> Self {
        Self::Single(value)
    }
}

impl From<u8> for Source<'_> {
    fn from(code: u8) -> Self {
        Self::Single(code.into())
    }
}

impl From<i32> for Source<'_> {
    fn from(code: i32) -> Self {
        Self::Single(code.into())
    }
}

impl From<i64> for Source<'_> {
    fn from(code: i64) -> Self {
        Self::Single(code.into())
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(name: &'a str) -> Self {
        Self::Single(name.into())
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(name: &'a String) -> Self {
        Self::Single(name.into())
    }
}

impl<'a, T: Into<CardValue<'a>>> From<Vec<T>> for Source<'a> {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<CardValue<'a>>, const N: usize> From<[T; N]> for Source<'a> {
    fn from(values: [T; N]) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<CardValue<'a>> + Copy> From<&'a [T]> for Source<'a> {
    fn from(values: &'a [T]) -> Self {
        Self::List(values.iter().copied().map(Into::into).collect())
    }
}

impl<'a> From<&'a PokerCards> for Source<'a> {
    fn from(cards: &'a PokerCards) -> Self {
        Self::Cards(cards)
    }
}

/// An ordered collection of cards, each either visible or hidden.
///
/// Insertion order is kept for listing and display, but equality only
/// compares the multiset of codes: order and visibility are ignored.
///
/// # Example
///
/// ```
/// use pokercards::{NOCARD, PokerCards};
///
/// let mut cards = PokerCards::new();
/// cards.add("Ah", true)?;
/// cards.add("3s", false)?;
/// assert_eq!(cards.raw_list(), [12, 40]);
/// assert_eq!(cards.to_list(false), [12, NOCARD]);
///
/// cards.lose_not_visible();
/// assert_eq!(cards.raw_list(), [12, NOCARD]);
/// # Ok::<(), pokercards::InvalidCard>(())
/// ```
#[derive(Clone, Default)]
pub struct PokerCards {
    /// Cards in insertion order.
    cards: Vec<Card>,
}

impl PokerCards {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a collection from a code, a name, a list of either, or
    /// another collection.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] for the first element that does not resolve to
    /// a card code. No collection is built in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use pokercards::PokerCards;
    /// use pokercards::codec::CardValue;
    ///
    /// let cards = PokerCards::try_new([CardValue::from("Ah"), 25.into(), "Kc".into()])?;
    /// assert_eq!(cards.raw_list(), [12, 25, 37]);
    /// assert!(cards.are_visible());
    /// # Ok::<(), pokercards::InvalidCard>(())
    /// ```
    pub fn try_new<'a>(source: impl Into<Source<'a>>) -> Result<Self, InvalidCard> {
        let cards = match source.into() {
            Source::Empty => Ok(Vec::new()),
            Source::Single(value) => Card::resolve(value, true).map(|card| alloc::vec![card]),
            Source::List(values) => values
                .into_iter()
                .map(|value| Card::resolve(value, true))
                .collect(),
            Source::Cards(other) => Ok(other.cards.clone()),
        };
        cards
            .map(|cards| {
                for card in &cards {
                    log::trace!("adding {card}");
                }
                Self { cards }
            })
            .inspect_err(|err| log::debug!("discarding cards: {err}"))
    }

    /// Appends a card.
    ///
    /// A card resolving to [`NOCARD`] is stored hidden whatever `visible` is.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCard`] if `value` does not resolve to a card code. The
    /// collection is left untouched.
    pub fn add<'a>(&mut self, value: impl Into<CardValue<'a>>, visible: bool) -> Result<(), InvalidCard> {
        let card = Card::resolve(value, visible)?;
        log::trace!("adding {card} (requested visible: {visible})");
        self.cards.push(card);
        Ok(())
    }

    /// Sets the visibility of every card with the given code.
    ///
    /// Does nothing when no card matches or when `code` is [`NOCARD`].
    pub fn set_visible(&mut self, code: u8, visible: bool) {
        if code == NOCARD {
            return;
        }
        for card in self.cards.iter_mut().filter(|card| card.code == code) {
            card.visible = visible;
        }
    }

    /// Marks every card visible.
    ///
    /// [`NOCARD`] entries stay hidden.
    pub fn all_visible(&mut self) {
        for card in &mut self.cards {
            *card = Card::new(card.code, true);
        }
    }

    /// Marks every card hidden.
    pub fn all_hidden(&mut self) {
        for card in &mut self.cards {
            card.visible = false;
        }
    }

    /// Forgets the identity of every hidden card by replacing its code with
    /// [`NOCARD`].
    ///
    /// Visible cards keep their code. Calling this twice has the same effect
    /// as calling it once.
    pub fn lose_not_visible(&mut self) {
        let mut lost = 0_usize;
        for card in self
            .cards
            .iter_mut()
            .filter(|card| !card.is_visible() && !card.is_nocard())
        {
            *card = Card::new(NOCARD, false);
            lost += 1;
        }
        if lost > 0 {
            log::debug!("lost {lost} hidden card(s)");
        }
    }

    /// Returns whether the collection holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether any card has the given code, visible or not.
    #[must_use]
    pub fn has_card(&self, code: u8) -> bool {
        self.cards.iter().any(|card| card.code == code)
    }

    /// Returns every stored code in insertion order.
    #[must_use]
    pub fn raw_list(&self) -> Vec<u8> {
        self.cards.iter().map(Card::code).collect()
    }

    /// Returns the codes of the visible cards in insertion order.
    #[must_use]
    pub fn visible_list(&self) -> Vec<u8> {
        self.cards
            .iter()
            .filter(|card| card.is_visible())
            .map(Card::code)
            .collect()
    }

    /// Returns the codes as seen by an observer.
    ///
    /// Hidden cards show as [`NOCARD`] unless `expose_all` is set. The result
    /// always has one element per card.
    #[must_use]
    pub fn to_list(&self, expose_all: bool) -> Vec<u8> {
        self.cards
            .iter()
            .map(|card| {
                if expose_all || card.is_visible() {
                    card.code
                } else {
                    NOCARD
                }
            })
            .collect()
    }

    /// Returns whether every card is visible.
    #[must_use]
    pub fn are_visible(&self) -> bool {
        self.cards.iter().all(Card::is_visible)
    }

    /// Returns whether every card is hidden.
    #[must_use]
    pub fn are_hidden(&self) -> bool {
        self.cards.iter().all(|card| !card.is_visible())
    }

    /// Returns whether every stored code is [`NOCARD`].
    #[must_use]
    pub fn are_all_nocard(&self) -> bool {
        self.cards.iter().all(Card::is_nocard)
    }

    /// Returns an independent copy of the collection.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns the cards in insertion order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    fn sorted_codes(&self) -> Vec<u8> {
        let mut codes = self.raw_list();
        codes.sort_unstable();
        codes
    }
}

impl PartialEq for PokerCards {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len() && self.sorted_codes() == other.sorted_codes()
    }
}

impl Eq for PokerCards {}

impl Hash for PokerCards {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_codes().hash(state);
    }
}

impl fmt::Debug for PokerCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PokerCards({:?})", self.raw_list())
    }
}

/// Formats the cards as a list of quoted `Card(<code>, visible)` or
/// `Card(<code>, not visible)` strings, e.g. `["Card(12, visible)"]`.
impl fmt::Display for PokerCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.cards.iter().map(ToString::to_string))
            .finish()
    }
}

/// Parses whitespace-separated card names, each added visible.
impl FromStr for PokerCards {
    type Err = InvalidCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s.split_whitespace().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a PokerCards {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
