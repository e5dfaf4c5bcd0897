//! A month's worth of daily records keyed by day-of-month.

use indexmap::IndexMap;

use crate::models::daily_record::DailyRecord;

/// Day-of-month (1-based) to record. Insertion order is day order, but
/// nothing downstream depends on it.
pub type MonthData = IndexMap<u32, DailyRecord>;
