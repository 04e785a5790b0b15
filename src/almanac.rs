//! Daily almanac snapshot.
//!
//! Runs the day-rollover pipeline once: calendar date → Julian Day Number →
//! moon phase and sunrise/sunset for the configured location. The snapshot is
//! then formatted on every minute tick with the current wall-clock time.

use chrono::NaiveTime;
use serde::Serialize;
use tracing::debug;

use crate::calendar::CalendarDate;
use crate::format::{format_clock, format_event_time, format_solar_events, DisplayTimeMode};
use crate::lunar::{lunar_phase, LunarPhase};
use crate::solar::{solar_events, GeoConfig, SolarEvent};

/// Everything that changes once per calendar day.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Almanac {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub jdn: i64,
    pub moon: LunarPhase,
    pub sun: SolarEvent,
}

/// Display strings for one tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AlmanacText {
    pub clock: String,
    pub ampm: String,
    pub sunrise: String,
    pub sunset: String,
    /// Sunrise and sunset in one field
    pub sun_range: String,
    pub moon_glyph: char,
    pub moon_illumination: String,
}

impl Almanac {
    /// Compute the day's moon phase and solar events for `geo`.
    pub fn compute(date: &CalendarDate, geo: &GeoConfig) -> Self {
        let jdn = date.julian_day_number();
        let moon = lunar_phase(jdn, geo.hemisphere());
        let sun = solar_events(jdn, geo);

        debug!(
            jdn,
            glyph = moon.glyph_index,
            illumination = moon.illumination,
            sunrise = sun.sunrise(),
            sunset = sun.sunset(),
            "computed daily almanac"
        );

        Almanac {
            year: date.year,
            month: date.month,
            day: date.day,
            jdn,
            moon,
            sun,
        }
    }

    /// True when `date` falls on a different day and the snapshot is stale.
    pub fn is_stale_for(&self, date: &CalendarDate) -> bool {
        (self.year, self.month, self.day) != (date.year, date.month, date.day)
    }

    /// Format the snapshot together with the wall-clock `time`.
    pub fn text(&self, time: NaiveTime, mode: DisplayTimeMode, separator: &str) -> AlmanacText {
        let clock = format_clock(time, mode);
        AlmanacText {
            clock: clock.time,
            ampm: clock.ampm,
            sunrise: format_event_time(self.sun.sunrise(), mode),
            sunset: format_event_time(self.sun.sunset(), mode),
            sun_range: format_solar_events(&self.sun, separator, mode),
            moon_glyph: self.moon.glyph(),
            moon_illumination: self.moon.illumination_label(),
        }
    }
}
