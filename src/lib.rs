//! # Sky Clock Core Library
//!
//! Astronomical time computations behind a watch face: Julian Day Numbers,
//! moon phase, sunrise/sunset and clock-string formatting. Everything here is
//! a pure function over plain values; there is no shared state, no I/O in the
//! math, and every call returns a freshly owned result.
//!
//! ## Data Flow
//! Once per calendar day:
//! 1. [`calendar::to_julian_day_number`] turns the local date into a JDN
//! 2. [`lunar::lunar_phase`] gives the moon glyph and illumination
//! 3. [`solar::solar_events`] gives sunrise and sunset for the configured location
//!
//! On every minute tick, [`format`] renders the wall clock and the
//! sunrise/sunset pair under the 12-hour or 24-hour preference.
//!
//! ## Edge signal
//! The only out-of-band value is [`solar::NO_EVENT`] (99.0), returned for
//! sunrise and sunset on polar-day and polar-night dates. The formatter turns
//! it into [`format::NO_EVENT_PLACEHOLDER`].
//!
//! # Example
//! ```
//! use sky_clock_lib::{lunar_phase, solar_events, to_julian_day_number, format_range};
//! use sky_clock_lib::{DisplayTimeMode, GeoConfig};
//!
//! let geo = GeoConfig::new(0.0, 51.48, 0.0);
//! let jdn = to_julian_day_number(2015, 6, 21);
//! let moon = lunar_phase(jdn, geo.hemisphere());
//! let sun = solar_events(jdn, &geo);
//!
//! assert!(moon.fraction >= 0.0 && moon.fraction < 1.0);
//! let range = format_range(sun.sunrise(), sun.sunset(), " - ", DisplayTimeMode::TwelveHour);
//! assert!(range.contains("A - ") && range.ends_with('P'));
//! ```

// Module declarations
pub mod almanac;
pub mod calendar;
pub mod config;
pub mod format;
pub mod lunar;
pub mod renderer;
pub mod solar;

pub use almanac::{Almanac, AlmanacText};
pub use calendar::{to_julian_day_number, CalendarDate};
pub use format::{format_range, format_single, DisplayTimeMode};
pub use lunar::{lunar_phase, Hemisphere, LunarPhase};
pub use solar::{solar_events, GeoConfig, SolarEvent, NO_EVENT};
