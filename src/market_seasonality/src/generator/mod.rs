//! Synthetic market data.
//!
//! The two generators are deliberately different in kind:
//! - [`daily::generate_daily`] is a pure function of the calendar date, so the
//!   calendar grid shows the same numbers every time a month is revisited.
//! - [`intraday::generate_intraday`] draws from the thread RNG and yields a new
//!   walk on every call.

pub mod daily;
pub mod intraday;

pub use daily::generate_daily;
pub use intraday::{DEFAULT_START_PRICE, generate_intraday};
