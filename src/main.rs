//! # Sky Clock Entry Point
//!
//! Plays the part of the watch face: reads the local clock, runs the daily
//! almanac for the configured location and prints the display fields either
//! as an ASCII panel or as JSON.


mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use sky_clock_lib::{config::Config, renderer::draw_ascii, Almanac, AlmanacText, CalendarDate};

use crate::cli::Cli;

#[derive(Serialize)]
struct Report<'a> {
    location: &'a str,
    almanac: &'a Almanac,
    text: &'a AlmanacText,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Resolve the moment to display: CLI overrides first, then the local clock.
fn resolve_now(cli: &Cli, local_now: NaiveDateTime) -> NaiveDateTime {
    let date = cli.date.unwrap_or_else(|| local_now.date());
    let time = cli.time.unwrap_or_else(|| local_now.time());
    date.and_time(time)
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from_path(&cli.config);
    let mode = cli.mode.map(Into::into).unwrap_or(config.display.time_mode);

    let now = resolve_now(&cli, Local::now().naive_local());
    let date = CalendarDate::from(now);
    info!(%now, ?mode, "rendering almanac");

    let almanac = Almanac::compute(&date, &config.location);
    let time = date
        .time()
        .context("local time is outside the 24-hour day")?;
    let text = almanac.text(time, mode, &config.display.range_separator);

    if cli.json {
        let report = Report {
            location: &config.location.name,
            almanac: &almanac,
            text: &text,
        };
        let json = serde_json::to_string_pretty(&report).context("serializing almanac")?;
        println!("{json}");
    } else {
        draw_ascii(&almanac, &text, &config);
    }

    Ok(())
}
