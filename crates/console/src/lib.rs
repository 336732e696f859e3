//! Interactive console front-ends.
//!
//! Each session owns its state and a [`Console`] and runs an iterative menu
//! loop until the user quits or input ends.

pub mod config;
pub mod library;
pub mod prompt;
pub mod stocks;

pub use config::ConsoleConfig;
pub use library::LibrarySession;
pub use prompt::{Console, Reply};
pub use stocks::StockPriceSession;
