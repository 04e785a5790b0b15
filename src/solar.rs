//! # Sunrise and Sunset
//!
//! Low-precision sunrise/sunset times after the US Naval Observatory
//! "Almanac for Computers" (1990) procedure:
//!
//! 1. Approximate event time `t` from the day of year and longitude
//! 2. Sun's mean anomaly `M`, true longitude `L`, right ascension `RA`
//! 3. Declination from `L`, local hour angle `H` from latitude and zenith
//! 4. Local mean time → UT → local clock time via the timezone offset
//!
//! Accuracy is about a minute between the polar circles. When the sun never
//! crosses the chosen zenith (polar day or polar night) the event does not
//! occur and [`SolarEvent::DoesNotOccur`] is returned, reported as the
//! [`NO_EVENT`] sentinel by the accessors.

use crate::calendar::{day_of_year, from_julian_day_number};
use crate::lunar::Hemisphere;
use serde::{Deserialize, Serialize};

/// Out-of-band decimal hour meaning "no sunrise/sunset on this date".
pub const NO_EVENT: f64 = 99.0;

/// Geographic location and clock offset used for solar events.
///
/// Longitude is positive **west** of Greenwich. The timezone offset is added
/// as given; no daylight-saving rules are applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Human-readable place name
    #[serde(default)]
    pub name: String,
    /// Hours from UTC (e.g. -5.0 for US Eastern standard time)
    pub timezone_offset: f64,
    /// Degrees, positive north
    pub latitude: f64,
    /// Degrees, positive west
    pub longitude: f64,
}

impl GeoConfig {
    pub fn new(timezone_offset: f64, latitude: f64, longitude: f64) -> Self {
        Self {
            name: String::new(),
            timezone_offset,
            latitude,
            longitude,
        }
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_latitude(self.latitude)
    }
}

/// Which crossing of the horizon to compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolarEventKind {
    Sunrise,
    Sunset,
}

/// Zenith angle that counts as "on the horizon".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    /// Upper limb touching the horizon, refraction included (90°50′)
    #[default]
    Official,
    Civil,
    Nautical,
    Astronomical,
}

impl Horizon {
    pub fn zenith_degrees(self) -> f64 {
        match self {
            Horizon::Official => 90.833,
            Horizon::Civil => 96.0,
            Horizon::Nautical => 102.0,
            Horizon::Astronomical => 108.0,
        }
    }
}

/// Sunrise and sunset for one day, in local decimal hours [0, 24).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolarEvent {
    Occurs { sunrise: f64, sunset: f64 },
    /// Polar day or polar night
    DoesNotOccur,
}

impl SolarEvent {
    pub fn occurs(&self) -> bool {
        matches!(self, SolarEvent::Occurs { .. })
    }

    /// Sunrise in decimal hours, or [`NO_EVENT`].
    pub fn sunrise(&self) -> f64 {
        match *self {
            SolarEvent::Occurs { sunrise, .. } => sunrise,
            SolarEvent::DoesNotOccur => NO_EVENT,
        }
    }

    /// Sunset in decimal hours, or [`NO_EVENT`].
    pub fn sunset(&self) -> f64 {
        match *self {
            SolarEvent::Occurs { sunset, .. } => sunset,
            SolarEvent::DoesNotOccur => NO_EVENT,
        }
    }

    /// Hours of daylight, wrapping past local midnight.
    pub fn day_length(&self) -> Option<f64> {
        match *self {
            SolarEvent::Occurs { sunrise, sunset } => Some((sunset - sunrise).rem_euclid(24.0)),
            SolarEvent::DoesNotOccur => None,
        }
    }
}

/// Sunrise and sunset at the official horizon.
///
/// ```
/// use sky_clock_lib::solar::{solar_events, GeoConfig, NO_EVENT};
///
/// // Svalbard at the December solstice: polar night
/// let event = solar_events(2_457_378, &GeoConfig::new(1.0, 78.2, -15.6));
/// assert_eq!(event.sunrise(), NO_EVENT);
/// assert_eq!(event.sunset(), NO_EVENT);
/// ```
pub fn solar_events(jdn: i64, geo: &GeoConfig) -> SolarEvent {
    solar_events_for_horizon(jdn, geo, Horizon::Official)
}

/// Sunrise and sunset for an arbitrary [`Horizon`]. If either crossing is
/// missing, both are reported as not occurring.
pub fn solar_events_for_horizon(jdn: i64, geo: &GeoConfig, horizon: Horizon) -> SolarEvent {
    let sunrise = solar_event_time(jdn, geo, SolarEventKind::Sunrise, horizon);
    let sunset = solar_event_time(jdn, geo, SolarEventKind::Sunset, horizon);

    match (sunrise, sunset) {
        (Some(sunrise), Some(sunset)) => SolarEvent::Occurs { sunrise, sunset },
        _ => SolarEvent::DoesNotOccur,
    }
}

/// Local decimal hour of a single event, `None` if the sun does not cross
/// the horizon that day.
pub fn solar_event_time(
    jdn: i64,
    geo: &GeoConfig,
    kind: SolarEventKind,
    horizon: Horizon,
) -> Option<f64> {
    let (year, month, day) = from_julian_day_number(jdn);
    let n = day_of_year(year, month, day) as f64;

    // Longitude in hours, east positive for the almanac formulas
    let lng_hour = -geo.longitude / 15.0;

    let t = match kind {
        SolarEventKind::Sunrise => n + (6.0 - lng_hour) / 24.0,
        SolarEventKind::Sunset => n + (18.0 - lng_hour) / 24.0,
    };

    let mean_anomaly = 0.9856 * t - 3.289;
    let true_longitude = normalize_degrees(
        mean_anomaly
            + 1.916 * sin_deg(mean_anomaly)
            + 0.020 * sin_deg(2.0 * mean_anomaly)
            + 282.634,
    );

    // Right ascension must sit in the same quadrant as the true longitude
    let mut right_ascension = normalize_degrees(atan_deg(0.91764 * tan_deg(true_longitude)));
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (right_ascension / 90.0).floor() * 90.0;
    right_ascension = (right_ascension + l_quadrant - ra_quadrant) / 15.0;

    let sin_dec = 0.39782 * sin_deg(true_longitude);
    let cos_dec = sin_dec.asin().cos();

    let cos_h = (cos_deg(horizon.zenith_degrees()) - sin_dec * sin_deg(geo.latitude))
        / (cos_dec * cos_deg(geo.latitude));
    // Also rejects NaN from a zero divisor
    if !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }

    let hour_angle = match kind {
        SolarEventKind::Sunrise => 360.0 - cos_h.acos().to_degrees(),
        SolarEventKind::Sunset => cos_h.acos().to_degrees(),
    } / 15.0;

    let local_mean_time = hour_angle + right_ascension - 0.06571 * t - 6.622;
    let ut = (local_mean_time - lng_hour).rem_euclid(24.0);
    Some(normalize_hours(ut + geo.timezone_offset))
}

fn normalize_degrees(degrees: f64) -> f64 {
    let d = degrees.rem_euclid(360.0);
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

fn normalize_hours(hours: f64) -> f64 {
    let h = hours.rem_euclid(24.0);
    if h >= 24.0 {
        0.0
    } else {
        h
    }
}

fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

fn tan_deg(degrees: f64) -> f64 {
    degrees.to_radians().tan()
}

fn atan_deg(value: f64) -> f64 {
    value.atan().to_degrees()
}
