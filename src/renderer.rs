//! # Terminal Rendering
//!
//! Lays the almanac out as a small ASCII panel for development on a desktop,
//! mirroring the watch-face fields: clock with AM/PM, sunrise and sunset,
//! moon glyph and illumination.

use crate::almanac::{Almanac, AlmanacText};
use crate::config::Config;

const PANEL_WIDTH: usize = 30;

/// Build the panel as a string, one line per field.
pub fn ascii_panel(almanac: &Almanac, text: &AlmanacText, config: &Config) -> String {
    let rule = "-".repeat(PANEL_WIDTH);
    let clock = if text.ampm.is_empty() {
        text.clock.clone()
    } else {
        format!("{} {}", text.clock, text.ampm)
    };

    let mut lines = vec![
        rule.clone(),
        format!("{:^width$}", clock, width = PANEL_WIDTH),
        format!(
            "{:^width$}",
            format!("{:04}-{:02}-{:02}", almanac.year, almanac.month, almanac.day),
            width = PANEL_WIDTH
        ),
        rule.clone(),
    ];

    if !config.location.name.is_empty() {
        lines.push(format!(" Location  {}", config.location.name));
    }
    lines.push(format!(" Sunrise   {}", text.sunrise));
    lines.push(format!(" Sunset    {}", text.sunset));
    lines.push(format!(" Daylight  {}", text.sun_range));
    lines.push(format!(
        " Moon      [{}] {}",
        text.moon_glyph, text.moon_illumination
    ));
    lines.push(format!(" JDN       {}", almanac.jdn));
    lines.push(rule);

    lines.join("\n")
}

/// Print the panel to stdout.
pub fn draw_ascii(almanac: &Almanac, text: &AlmanacText, config: &Config) {
    println!("{}", ascii_panel(almanac, text, config));
}
