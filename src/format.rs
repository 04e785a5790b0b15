//! # Time Formatting
//!
//! Renders decimal hours and wall-clock times as short strings for the
//! watch face under the host's 12-hour or 24-hour preference.
//!
//! ## Minute rounding
//! Minutes are rounded half-up from the fractional hour. A result of 60 wraps
//! to `00` **without** carrying into the hour, so 13.999 renders as `13:00`.
//!
//! ## Suffixes
//! 12-hour output uses single-letter suffixes (`A`/`P`) on decimal-hour
//! fields. The wall clock uses `AM`/`PM` on a separate field.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::solar::SolarEvent;

/// Shown in place of a time when the sun does not rise or set.
pub const NO_EVENT_PLACEHOLDER: &str = "--:--";

/// Host clock-format preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayTimeMode {
    #[default]
    TwelveHour,
    TwentyFourHour,
}

impl DisplayTimeMode {
    pub fn from_24h_style(is_24h: bool) -> Self {
        if is_24h {
            DisplayTimeMode::TwentyFourHour
        } else {
            DisplayTimeMode::TwelveHour
        }
    }
}

/// Wall-clock text: the time itself and the separate AM/PM field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClockText {
    pub time: String,
    /// `"AM"`/`"PM"` in 12-hour mode, empty in 24-hour mode
    pub ampm: String,
}

/// Split decimal hours into (hour, minute) with the no-carry minute wrap.
fn split_hours(decimal_hours: f64) -> (u32, u32) {
    let hour = decimal_hours.floor();
    let mut minute = ((decimal_hours - hour) * 60.0 + 0.5).floor() as u32;
    if minute >= 60 {
        minute = 0;
    }
    ((hour as i64).rem_euclid(24) as u32, minute)
}

fn twelve_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn suffix_letter(hour: u32) -> char {
    if hour >= 12 {
        'P'
    } else {
        'A'
    }
}

/// Format one decimal-hour value.
///
/// ```
/// use sky_clock_lib::format::{format_single, DisplayTimeMode};
///
/// assert_eq!(format_single(13.0 + 5.0 / 60.0, DisplayTimeMode::TwentyFourHour, true), "13:05");
/// assert_eq!(format_single(13.0 + 5.0 / 60.0, DisplayTimeMode::TwelveHour, true), "1:05P");
/// ```
pub fn format_single(decimal_hours: f64, mode: DisplayTimeMode, want_ampm_suffix: bool) -> String {
    let (hour, minute) = split_hours(decimal_hours);
    match mode {
        DisplayTimeMode::TwentyFourHour => format!("{}:{:02}", hour, minute),
        DisplayTimeMode::TwelveHour if want_ampm_suffix => {
            format!("{}:{:02}{}", twelve_hour(hour), minute, suffix_letter(hour))
        }
        DisplayTimeMode::TwelveHour => format!("{}:{:02}", twelve_hour(hour), minute),
    }
}

/// Format two times as one string, `A<separator>B`.
///
/// In 12-hour mode each side carries the letter of its own half of the day:
///
/// | left ≥ 12 | right ≥ 12 | left | right |
/// |-----------|------------|------|-------|
/// | no        | no         | A    | A     |
/// | yes       | no         | P    | A     |
/// | no        | yes        | A    | P     |
/// | yes       | yes        | P    | P     |
pub fn format_range(
    decimal_hours_a: f64,
    decimal_hours_b: f64,
    separator: &str,
    mode: DisplayTimeMode,
) -> String {
    let (hour_a, minute_a) = split_hours(decimal_hours_a);
    let (hour_b, minute_b) = split_hours(decimal_hours_b);

    if mode == DisplayTimeMode::TwentyFourHour {
        return format!(
            "{}:{:02}{}{}:{:02}",
            hour_a, minute_a, separator, hour_b, minute_b
        );
    }

    let (left, right) = match (hour_a >= 12, hour_b >= 12) {
        (true, true) => ('P', 'P'),
        (true, false) => ('P', 'A'),
        (false, true) => ('A', 'P'),
        (false, false) => ('A', 'A'),
    };

    format!(
        "{}:{:02}{}{}{}:{:02}{}",
        twelve_hour(hour_a),
        minute_a,
        left,
        separator,
        twelve_hour(hour_b),
        minute_b,
        right
    )
}

/// Sunrise–sunset pair, or placeholders on both sides for polar days.
pub fn format_solar_events(event: &SolarEvent, separator: &str, mode: DisplayTimeMode) -> String {
    match *event {
        SolarEvent::Occurs { sunrise, sunset } => format_range(sunrise, sunset, separator, mode),
        SolarEvent::DoesNotOccur => {
            format!("{NO_EVENT_PLACEHOLDER}{separator}{NO_EVENT_PLACEHOLDER}")
        }
    }
}

/// Single solar time with suffix, or the placeholder for the sentinel.
pub fn format_event_time(decimal_hours: f64, mode: DisplayTimeMode) -> String {
    if (0.0..24.0).contains(&decimal_hours) {
        format_single(decimal_hours, mode, true)
    } else {
        NO_EVENT_PLACEHOLDER.to_string()
    }
}

/// Wall-clock text for the main time display.
///
/// 24-hour mode keeps the leading zero (`08:05`); 12-hour mode drops it
/// (`8:05`) and fills the AM/PM field.
pub fn format_clock(time: NaiveTime, mode: DisplayTimeMode) -> ClockText {
    match mode {
        DisplayTimeMode::TwentyFourHour => ClockText {
            time: time.format("%H:%M").to_string(),
            ampm: String::new(),
        },
        DisplayTimeMode::TwelveHour => ClockText {
            time: time.format("%-I:%M").to_string(),
            ampm: time.format("%p").to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H13_05: f64 = 13.0 + 5.0 / 60.0;

    #[test]
    fn test_single_24h() {
        assert_eq!(format_single(H13_05, DisplayTimeMode::TwentyFourHour, true), "13:05");
        assert_eq!(format_single(0.0, DisplayTimeMode::TwentyFourHour, false), "0:00");
    }

    #[test]
    fn test_single_12h() {
        assert_eq!(format_single(H13_05, DisplayTimeMode::TwelveHour, true), "1:05P");
        assert_eq!(format_single(H13_05, DisplayTimeMode::TwelveHour, false), "1:05");
        assert_eq!(format_single(0.0, DisplayTimeMode::TwelveHour, true), "12:00A");
        assert_eq!(format_single(12.5, DisplayTimeMode::TwelveHour, true), "12:30P");
        assert_eq!(format_single(11.75, DisplayTimeMode::TwelveHour, true), "11:45A");
    }

    #[test]
    fn test_minute_wrap_does_not_carry() {
        assert_eq!(format_single(13.999, DisplayTimeMode::TwentyFourHour, false), "13:00");
        assert_eq!(format_single(13.999, DisplayTimeMode::TwelveHour, true), "1:00P");
    }

    #[test]
    fn test_minute_round_half_up() {
        // 0.125 h = 7.5 min exactly
        assert_eq!(format_single(6.125, DisplayTimeMode::TwentyFourHour, false), "6:08");
        assert_eq!(format_single(6.375, DisplayTimeMode::TwentyFourHour, false), "6:23");
        assert_eq!(format_single(6.0 + 10.4 / 60.0, DisplayTimeMode::TwentyFourHour, false), "6:10");
    }

    #[test]
    fn test_range_truth_table() {
        let mode = DisplayTimeMode::TwelveHour;
        assert_eq!(format_range(5.5, 11.25, " - ", mode), "5:30A - 11:15A");
        assert_eq!(format_range(22.0, 6.0, " - ", mode), "10:00P - 6:00A");
        assert_eq!(format_range(6.0, 20.5, " - ", mode), "6:00A - 8:30P");
        assert_eq!(format_range(12.0, 23.75, " - ", mode), "12:00P - 11:45P");
    }

    #[test]
    fn test_range_24h() {
        assert_eq!(
            format_range(6.0, 20.5, "-", DisplayTimeMode::TwentyFourHour),
            "6:00-20:30"
        );
    }

    #[test]
    fn test_solar_placeholder() {
        assert_eq!(
            format_solar_events(&SolarEvent::DoesNotOccur, " - ", DisplayTimeMode::TwelveHour),
            "--:-- - --:--"
        );
        let event = SolarEvent::Occurs {
            sunrise: 5.0,
            sunset: 20.25,
        };
        assert_eq!(
            format_solar_events(&event, " - ", DisplayTimeMode::TwelveHour),
            "5:00A - 8:15P"
        );
        assert_eq!(format_event_time(99.0, DisplayTimeMode::TwelveHour), "--:--");
        assert_eq!(format_event_time(20.25, DisplayTimeMode::TwelveHour), "8:15P");
    }

    #[test]
    fn test_clock_24h_keeps_leading_zero() {
        let time = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
        let text = format_clock(time, DisplayTimeMode::TwentyFourHour);
        assert_eq!(text.time, "08:05");
        assert_eq!(text.ampm, "");
    }

    #[test]
    fn test_clock_12h() {
        let morning = format_clock(NaiveTime::from_hms_opt(8, 5, 0).unwrap(), DisplayTimeMode::TwelveHour);
        assert_eq!(morning.time, "8:05");
        assert_eq!(morning.ampm, "AM");

        let midnight = format_clock(NaiveTime::from_hms_opt(0, 0, 0).unwrap(), DisplayTimeMode::TwelveHour);
        assert_eq!(midnight.time, "12:00");
        assert_eq!(midnight.ampm, "AM");

        let evening = format_clock(NaiveTime::from_hms_opt(23, 59, 0).unwrap(), DisplayTimeMode::TwelveHour);
        assert_eq!(evening.time, "11:59");
        assert_eq!(evening.ampm, "PM");
    }

    #[test]
    fn test_mode_from_host_flag() {
        assert_eq!(DisplayTimeMode::from_24h_style(true), DisplayTimeMode::TwentyFourHour);
        assert_eq!(DisplayTimeMode::from_24h_style(false), DisplayTimeMode::TwelveHour);
    }
}
