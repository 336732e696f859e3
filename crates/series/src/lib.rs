//! Numeric series statistics.
//!
//! Pure computation over user-supplied price series: average, maximum,
//! occurrence count and stepwise-rounded cumulative sums. No IO.

pub mod parse;
pub mod rounding;
pub mod series;

pub use parse::{parse_decimal, parse_series};
pub use rounding::{PRICE_DECIMAL_PLACES, round_half_up};
pub use series::{CumulativeSeries, NumericSeries};
