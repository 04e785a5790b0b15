use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, ValueEnum};
use sky_clock_lib::DisplayTimeMode;

/// Moon phase, sunrise/sunset and clock text for a watch face.
#[derive(Parser, Debug)]
#[command(name = "sky-clock", version, about = "Watch-face almanac in the terminal")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = sky_clock_lib::config::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Local date (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Local time (HH:MM); defaults to now.
    #[arg(short, long, value_parser = parse_time)]
    pub time: Option<NaiveTime>,

    /// Override the configured clock style.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Print JSON instead of the ASCII panel.
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    TwelveHour,
    TwentyFourHour,
}

impl From<ModeArg> for DisplayTimeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::TwelveHour => DisplayTimeMode::TwelveHour,
            ModeArg::TwentyFourHour => DisplayTimeMode::TwentyFourHour,
        }
    }
}

fn parse_time(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M")
}
