use chrono::NaiveDate;
use market_seasonality::{
    analysis::VolatilityLevel,
    calendar::MonthView,
    generate_daily,
    models::{daily_record::DailyRecord, month::MonthData},
    summarize,
};
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn revisiting_a_month_reproduces_it() {
    let view = MonthView::new(2025, 6).unwrap();
    let first = view.generate();
    let again = view.navigate(3).navigate(-3).generate();
    assert_eq!(first, again);
    assert_eq!(summarize(first.values()), summarize(again.values()));
}

#[test]
fn summary_matches_manual_counts() {
    let view = MonthView::new(2024, 7).unwrap();
    let month = view.generate();
    let s = summarize(month.values()).expect("non-empty month");

    let values: Vec<&DailyRecord> = month.values().collect();
    assert_eq!(s.total_days, 31);
    assert_eq!(
        s.positive_days,
        values.iter().filter(|r| r.performance > 0.0).count()
    );
    assert_eq!(
        s.negative_days,
        values.iter().filter(|r| r.performance < 0.0).count()
    );
    assert_eq!(s.positive_days + s.negative_days + s.neutral_days, 31);
    assert_eq!(
        s.high_vol_days,
        values
            .iter()
            .filter(|r| VolatilityLevel::classify(r.volatility) == VolatilityLevel::High)
            .count()
    );
    assert_eq!(s.high_vol_days + s.medium_vol_days + s.low_vol_days, 31);

    let max_high = values.iter().map(|r| r.high).fold(f64::MIN, f64::max);
    let min_low = values.iter().map(|r| r.low).fold(f64::MAX, f64::min);
    assert_eq!(s.price_range.high, max_high);
    assert_eq!(s.price_range.low, min_low);
    assert!(s.worst_day <= s.avg_performance && s.avg_performance <= s.best_day);
}

#[test]
fn a_single_day_summary() {
    let record = generate_daily(ymd(2026, 10, 18));
    let mut month = MonthData::new();
    month.insert(18, record);

    let s = summarize(month.values()).unwrap();
    assert_eq!(s.total_days, 1);
    assert_eq!(s.avg_price, record.close);
    assert_eq!(s.best_day, s.worst_day);
    assert_eq!(s.price_range.high, record.high);
    assert_eq!(s.price_range.low, record.low);
    assert_eq!(s.share(s.total_days), 100.0);
}

#[test]
fn summary_serializes_in_camel_case() {
    let month = MonthView::new(2024, 2).unwrap().generate();
    let json = serde_json::to_value(summarize(month.values()).unwrap()).unwrap();
    for key in [
        "totalDays",
        "totalVolume",
        "avgVolume",
        "avgVolatility",
        "avgPerformance",
        "bestDay",
        "worstDay",
        "positiveDays",
        "negativeDays",
        "neutralDays",
        "highVolDays",
        "mediumVolDays",
        "lowVolDays",
        "avgPrice",
        "priceRange",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
}

proptest! {
    #[test]
    fn every_month_partitions_cleanly(year in 1900i32..2200, month in 1u32..=12) {
        let view = MonthView::new(year, month).unwrap();
        let data = view.generate();
        prop_assert_eq!(data.len() as u32, view.days_in_month());
        prop_assert!(view.leading_blanks() < 7);

        let s = summarize(data.values()).unwrap();
        prop_assert_eq!(s.positive_days + s.negative_days + s.neutral_days, s.total_days);
        prop_assert_eq!(s.high_vol_days + s.medium_vol_days + s.low_vol_days, s.total_days);
        prop_assert!(s.avg_volume >= 1_000_000.0 && s.avg_volume <= 10_000_000.0);
    }
}
