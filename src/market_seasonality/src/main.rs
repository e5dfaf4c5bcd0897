use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use market_seasonality::{
    analysis::DayAnalysis,
    cli::{
        commands::{Cli, Commands},
        params::{parse_date, parse_month, parse_optional_date},
    },
    config::load_config,
    generator::{generate_daily, generate_intraday},
    io::{
        export::MonthExport,
        sink::{DataSink, JsonFileSink},
    },
    live::{IntradayWindow, LiveFeed, TickSettings},
    models::view::ViewMode,
    summarize,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logs go to stderr so stdout stays machine-readable JSON.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref()).context("failed to load config")?;

    match cli.command {
        Commands::Day { date } => {
            let date = parse_date(&date)?;
            let record = generate_daily(date);
            print_json(&json!({
                "date": date,
                "record": record,
                "analysis": DayAnalysis::from_record(&record),
            }))?;
        }

        Commands::Month {
            year,
            month,
            view,
            selected,
        } => {
            let month_view = parse_month(year, month)?;
            let view: ViewMode = view.parse()?;
            let selected = parse_optional_date(selected.as_deref())?;
            let records = month_view.generate();
            let cells = month_view.cells(&records, view, Local::now().date_naive(), selected);
            print_json(&json!({
                "title": month_view.title(),
                "view": view,
                "leadingBlanks": month_view.leading_blanks(),
                "cells": cells,
                "summary": summarize(records.values()),
            }))?;
        }

        Commands::Intraday { start_price } => {
            let start = start_price.unwrap_or(config.intraday.start_price);
            print_json(&generate_intraday(start))?;
        }

        Commands::Live { ticks } => {
            let window = IntradayWindow::new(config.intraday.start_price, config.live.capacity);
            let feed = LiveFeed::start(window, TickSettings::from(&config));
            let mut rx = feed.subscribe();

            let mut seen = 0;
            while seen < ticks {
                tokio::select! {
                    changed = rx.changed() => {
                        changed.context("live feed stopped unexpectedly")?;
                        seen = *rx.borrow_and_update();
                        let snapshot = feed.snapshot();
                        if let Some(point) = snapshot.latest() {
                            println!("{}", serde_json::to_string(point)?);
                        }
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("interrupted");
                        break;
                    }
                }
            }

            let window = feed.stop().await;
            eprintln!(
                "SUMMARY: {} points, high {:.2}, low {:.2}, change {:+.2}%",
                window.len(),
                window.high().unwrap_or_default(),
                window.low().unwrap_or_default(),
                window.last_change()
            );
        }

        Commands::Export { year, month, out } => {
            let view = parse_month(year, month)?;
            let sink = out.map(JsonFileSink::new).unwrap_or_else(JsonFileSink::in_temp_dir);
            let path = sink.write(&MonthExport::generate(&view)).await?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
