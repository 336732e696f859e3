//! Library catalog domain module.
//!
//! Book stock keyed by title + author, with add / borrow / return rules
//! implemented as deterministic domain logic (no IO, no console).

pub mod book;
pub mod catalog;

pub use book::{BookKey, BookRecord, Quantity};
pub use catalog::{Library, Stocked};
