#![cfg(feature = "cli")]
use std::process::Command;
use std::str;

use tempfile::TempDir;

fn seasonality() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seasonality"));
    cmd.env_remove("SEASONALITY_CONFIG")
        .env_remove("SEASONALITY_REFRESH_MS");
    cmd
}

#[test]
fn test_day_command_is_deterministic() -> Result<(), Box<dyn std::error::Error>> {
    let run = || seasonality().args(["day", "--date", "2024-02-15"]).output();
    let a = run()?;
    let b = run()?;
    assert!(a.status.success(), "stderr: {}", str::from_utf8(&a.stderr)?);
    assert_eq!(a.stdout, b.stdout);

    let value: serde_json::Value = serde_json::from_slice(&a.stdout)?;
    assert_eq!(value["date"], "2024-02-15");
    assert!(value["record"]["volatility"].is_number());
    assert!(value["analysis"]["volatility_level"].is_string());
    Ok(())
}

#[test]
fn test_month_command() -> Result<(), Box<dyn std::error::Error>> {
    let output = seasonality()
        .args(["month", "--year", "2024", "--month", "2", "--view", "weekly"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", str::from_utf8(&output.stderr)?);

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["title"], "February 2024");
    assert_eq!(value["leadingBlanks"], 4);
    assert_eq!(value["cells"].as_array().map(Vec::len), Some(29));
    assert_eq!(value["cells"][0]["label"], "W1");
    assert_eq!(value["summary"]["totalDays"], 29);
    Ok(())
}

#[test]
fn test_invalid_month_fails() -> Result<(), Box<dyn std::error::Error>> {
    let output = seasonality()
        .args(["month", "--year", "2024", "--month", "13"])
        .output()?;
    assert!(!output.status.success());
    Ok(())
}

#[test]
fn test_intraday_command() -> Result<(), Box<dyn std::error::Error>> {
    let output = seasonality()
        .args(["intraday", "--start-price", "30000"])
        .output()?;
    assert!(output.status.success());

    let points: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout)?;
    assert_eq!(points.len(), 24);
    assert_eq!(points[0]["price"], 30000.0);
    assert_eq!(points[0]["change"], 0.0);
    Ok(())
}

#[test]
fn test_live_command_with_fast_refresh() -> Result<(), Box<dyn std::error::Error>> {
    let output = seasonality()
        .env("SEASONALITY_REFRESH_MS", "10")
        .args(["live", "--ticks", "3"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", str::from_utf8(&output.stderr)?);

    let stdout = str::from_utf8(&output.stdout)?;
    assert_eq!(stdout.lines().count(), 3);
    assert!(str::from_utf8(&output.stderr)?.contains("SUMMARY: 25 points"));
    Ok(())
}

#[test]
fn test_export_command() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let output = seasonality()
        .args(["export", "--year", "2025", "--month", "1", "--out"])
        .arg(dir.path())
        .output()?;
    assert!(output.status.success(), "stderr: {}", str::from_utf8(&output.stderr)?);

    let path = str::from_utf8(&output.stdout)?.trim().to_string();
    assert!(path.ends_with(".json"));
    let exported: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    assert_eq!(exported["month"], "2025-01");
    assert_eq!(exported["summary"]["totalDays"], 31);
    Ok(())
}
