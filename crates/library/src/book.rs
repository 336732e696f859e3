use core::num::NonZeroU32;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use tallybook_core::{DomainError, DomainResult, Entity, ValueObject};

/// Identity of a book: exact, case-sensitive title + author.
///
/// `"Dune"` and `"dune "` are different books.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BookKey {
    pub title: String,
    pub author: String,
}

impl BookKey {
    /// Separator used when a key is rendered as a single string.
    pub const SEPARATOR: &'static str = " - ";

    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }
}

impl core::fmt::Display for BookKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}{}", self.title, Self::SEPARATOR, self.author)
    }
}

/// A positive number of copies moved by one add / borrow / return.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    pub fn new(value: i64) -> DomainResult<Self> {
        if value <= 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }
        match u32::try_from(value).ok().and_then(NonZeroU32::new) {
            Some(quantity) => Ok(Self(quantity)),
            None => Err(DomainError::validation(format!(
                "quantity {value} is too large"
            ))),
        }
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        u64::from(quantity.get())
    }
}

/// `Parse` for text that is not a whole number in `u32` range, `Validation`
/// for whole numbers that are not positive.
impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Ok(value) = s.parse::<i64>() else {
            return Err(DomainError::parse(format!("`{s}` is not a whole number")));
        };
        if value > i64::from(u32::MAX) {
            return Err(DomainError::parse(format!("`{s}` is out of range")));
        }
        Self::new(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}

/// Entity: one catalog entry and the number of copies on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(flatten)]
    key: BookKey,
    quantity: u64,
}

impl BookRecord {
    pub fn new(key: BookKey, quantity: Quantity) -> Self {
        Self {
            key,
            quantity: quantity.into(),
        }
    }

    pub fn key(&self) -> &BookKey {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.key.title
    }

    pub fn author(&self) -> &str {
        &self.key.author
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub(crate) fn deposit(&mut self, quantity: Quantity) -> DomainResult<()> {
        self.quantity = self
            .quantity
            .checked_add(quantity.into())
            .ok_or_else(|| DomainError::invariant("stock quantity overflow"))?;
        Ok(())
    }

    /// Take copies off the shelf. On failure the record is left untouched.
    pub(crate) fn withdraw(&mut self, quantity: Quantity) -> DomainResult<()> {
        let requested = u64::from(quantity);
        if requested > self.quantity {
            return Err(DomainError::insufficient_stock(requested, self.quantity));
        }
        self.quantity -= requested;
        Ok(())
    }
}

impl Entity for BookRecord {
    type Id = BookKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}

impl core::fmt::Display for BookRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Quantity: {}",
            self.key.title, self.key.author, self.quantity
        )
    }
}
