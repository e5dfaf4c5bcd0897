//! The payload written when a user exports the displayed month.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    aggregate::summarize,
    calendar::MonthView,
    models::{month::MonthData, summary::MonthlySummary},
};

/// A month's records together with their summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthExport {
    /// `YYYY-MM`.
    pub month: String,
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub records: MonthData,
    /// `None` when `records` is empty.
    pub summary: Option<MonthlySummary>,
}

impl MonthExport {
    /// Builds the export for `view` from already generated records.
    pub fn new(view: &MonthView, records: MonthData) -> Self {
        let summary = summarize(records.values());
        Self {
            month: view.key(),
            title: view.title(),
            generated_at: Utc::now(),
            records,
            summary,
        }
    }

    /// Generates the month's records and builds the export.
    pub fn generate(view: &MonthView) -> Self {
        Self::new(view, view.generate())
    }
}
