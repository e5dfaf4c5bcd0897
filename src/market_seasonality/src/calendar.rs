//! Month navigation and calendar-grid layout.
//!
//! A [`MonthView`] is the (year, month) the dashboard is showing. It knows how
//! many days the month has, how many blank cells precede the 1st in a
//! Sunday-first grid, and how to build the month's records by calling
//! [`generate_daily`] once per day.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    analysis::{PerformanceIndicator, VolatilityLevel},
    errors::Error,
    generator::generate_daily,
    models::{daily_record::DailyRecord, month::MonthData, view::ViewMode},
};

/// The month currently on screen. Always holds the 1st of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    first: NaiveDate,
}

/// One day cell of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub label: String,
    pub record: DailyRecord,
    pub volatility: VolatilityLevel,
    pub indicator: PerformanceIndicator,
    /// Liquidity rounded to one decimal, used as the cell pattern's opacity.
    pub liquidity_opacity: f64,
    pub is_today: bool,
    pub is_selected: bool,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Result<Self, Error> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(Error::InvalidDate { year, month, day: 1 })
    }

    /// The month `date` falls in.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            // December of the last representable year.
            None => 31,
        }
    }

    /// Empty cells before the 1st in a grid whose weeks start on Sunday.
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Moves `delta` months forward (negative: backward), rolling the year.
    ///
    /// Stays put if the target month falls outside chrono's date range.
    pub fn navigate(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        Self {
            first: moved.unwrap_or(self.first),
        }
    }

    /// e.g. `"October 2026"`.
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// `YYYY-MM`, used for file names.
    pub fn key(&self) -> String {
        self.first.format("%Y-%m").to_string()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (1..=self.days_in_month()).filter_map(|day| self.date(day))
    }

    /// Generates one record per day of the month.
    pub fn generate(&self) -> MonthData {
        self.dates()
            .map(|date| (date.day(), generate_daily(date)))
            .collect()
    }

    /// Lays out the day cells of the grid (blank cells are not included; see
    /// [`leading_blanks`](Self::leading_blanks)).
    pub fn cells(
        &self,
        month: &MonthData,
        view: ViewMode,
        today: NaiveDate,
        selected: Option<NaiveDate>,
    ) -> Vec<CalendarCell> {
        self.dates()
            .map(|date| {
                let day = date.day();
                let record = month
                    .get(&day)
                    .copied()
                    .unwrap_or_else(|| generate_daily(date));
                CalendarCell {
                    date,
                    day,
                    label: cell_label(date, view),
                    record,
                    volatility: VolatilityLevel::classify(record.volatility),
                    indicator: PerformanceIndicator::classify(record.performance),
                    liquidity_opacity: (record.liquidity * 10.0).round() / 10.0,
                    is_today: date == today,
                    is_selected: selected == Some(date),
                }
            })
            .collect()
    }
}

/// Cell caption for the given view: day number, week-of-month, or short month name.
pub fn cell_label(date: NaiveDate, view: ViewMode) -> String {
    match view {
        ViewMode::Daily => date.day().to_string(),
        ViewMode::Weekly => format!("W{}", date.day().div_ceil(7)),
        ViewMode::Monthly => date.format("%b").to_string(),
    }
}
