//! Moon phase from a Julian Day Number.
//!
//! The phase fraction is the position inside the mean synodic month measured
//! from a known new moon (JD 2451550.1, 2000-01-06). It is turned into a glyph
//! index for the 28-character moon-phase font and an illuminated percentage.
//!
//! Accuracy: ±1 day for the glyph, which is all a watch face can show.

use core::f64::consts::TAU;
use serde::{Deserialize, Serialize};

/// Mean synodic month length in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Reference new moon, 2000-01-06 14:24 UT.
const NEW_MOON_EPOCH_JD: f64 = 2_451_550.1;

/// Highest glyph index; the alphabet holds indices 0..=27.
pub const MAX_GLYPH_INDEX: u8 = 27;

/// Glyph for index 0 (new moon).
pub const NEW_MOON_GLYPH: char = '0';
/// Glyph for index 14 (full moon).
pub const FULL_MOON_GLYPH: char = '1';

// Indices 1..=13 land on 'A'..='M', 15..=27 on 'N'..='Z'. The offsets differ
// by one because index 14 is pulled out of the letter range.
const WAXING_GLYPH_OFFSET: u8 = 64;
const WANING_GLYPH_OFFSET: u8 = 63;

/// Which way the glyph is mirrored. The moon's lit limb is on the opposite
/// side south of the equator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Negative latitudes are southern; the equator counts as northern.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude < 0.0 {
            Hemisphere::Southern
        } else {
            Hemisphere::Northern
        }
    }
}

/// Moon phase for one calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LunarPhase {
    /// Position in the synodic month, [0, 1). 0 = new, 0.5 = full.
    pub fraction: f64,
    /// Glyph index 0–27 after hemisphere mirroring.
    pub glyph_index: u8,
    /// Illuminated percentage, 0–100.
    pub illumination: u8,
}

impl LunarPhase {
    /// Waxing while the fraction is below one half.
    pub fn is_waxing(&self) -> bool {
        self.fraction < 0.5
    }

    /// Font character for [`Self::glyph_index`].
    pub fn glyph(&self) -> char {
        glyph_for_index(self.glyph_index)
    }

    /// Illumination with a trend marker, e.g. `"37%+"` (waxing) or `"64%-"`.
    pub fn illumination_label(&self) -> String {
        let sign = if self.is_waxing() { '+' } else { '-' };
        format!("{}%{}", self.illumination, sign)
    }
}

/// Compute the moon phase for `jdn` as seen from `hemisphere`.
///
/// ```
/// use sky_clock_lib::lunar::{lunar_phase, Hemisphere};
///
/// let full = lunar_phase(2_451_565, Hemisphere::Northern);
/// assert_eq!(full.glyph_index, 14);
/// assert_eq!(full.illumination, 100);
/// ```
pub fn lunar_phase(jdn: i64, hemisphere: Hemisphere) -> LunarPhase {
    let fraction = phase_fraction(jdn);

    let mut glyph_index = ((fraction * MAX_GLYPH_INDEX as f64) + 0.5).floor() as u8;
    if hemisphere == Hemisphere::Southern && glyph_index != 0 {
        glyph_index = 28 - glyph_index;
    }

    let illumination = (100.0 * (1.0 - (1.0 + (fraction * TAU).cos()) / 2.0) + 0.5).floor() as u8;

    LunarPhase {
        fraction,
        glyph_index,
        illumination,
    }
}

/// Fraction of the synodic month elapsed at `jdn`, always in [0, 1).
pub fn phase_fraction(jdn: i64) -> f64 {
    let cycles = (jdn as f64 - NEW_MOON_EPOCH_JD) / SYNODIC_MONTH;
    let mut fraction = cycles - cycles.trunc();
    // trunc() rounds toward zero, so dates before the epoch leave a negative remainder
    if fraction < 0.0 {
        fraction += 1.0;
    }
    if fraction >= 1.0 {
        fraction = 0.0;
    }
    fraction
}

/// Map a glyph index to its moon-font character.
pub fn glyph_for_index(index: u8) -> char {
    let code = match index {
        0 => return NEW_MOON_GLYPH,
        14 => return FULL_MOON_GLYPH,
        1..=13 => index + WAXING_GLYPH_OFFSET,
        _ => index.min(MAX_GLYPH_INDEX) + WANING_GLYPH_OFFSET,
    };
    char::from(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2451580: ~0.37 d after the first new moon following the epoch
    const NEW_MOON_JDN: i64 = 2_451_580;
    // 2451565: ~14.9 d after the epoch
    const FULL_MOON_JDN: i64 = 2_451_565;

    #[test]
    fn test_fraction_always_in_unit_interval() {
        for jdn in (2_400_000..2_500_000).step_by(97) {
            let f = phase_fraction(jdn);
            assert!((0.0..1.0).contains(&f), "fraction {f} out of range at {jdn}");
        }
    }

    #[test]
    fn test_fraction_before_epoch_is_positive() {
        // One day before the reference new moon is late in the previous cycle
        let f = phase_fraction(2_451_549);
        assert!(f > 0.95 && f < 1.0, "got {f}");
    }

    #[test]
    fn test_new_moon() {
        let phase = lunar_phase(NEW_MOON_JDN, Hemisphere::Northern);
        assert_eq!(phase.glyph_index, 0);
        assert_eq!(phase.glyph(), NEW_MOON_GLYPH);
        assert_eq!(phase.illumination, 0);
        assert!(phase.is_waxing());
    }

    #[test]
    fn test_full_moon() {
        let phase = lunar_phase(FULL_MOON_JDN, Hemisphere::Northern);
        assert!((phase.fraction - 0.5).abs() < 0.02);
        assert_eq!(phase.glyph_index, 14);
        assert_eq!(phase.glyph(), FULL_MOON_GLYPH);
        assert_eq!(phase.illumination, 100);
        assert_eq!(phase.illumination_label(), "100%-");
    }

    #[test]
    fn test_southern_hemisphere_mirrors_index() {
        for jdn in 2_457_000..2_457_060 {
            let north = lunar_phase(jdn, Hemisphere::Northern);
            let south = lunar_phase(jdn, Hemisphere::Southern);
            if north.glyph_index == 0 {
                assert_eq!(south.glyph_index, 0);
            } else {
                assert_eq!(south.glyph_index, 28 - north.glyph_index, "jdn {jdn}");
            }
            assert_eq!(north.fraction, south.fraction);
            assert_eq!(north.illumination, south.illumination);
        }
    }

    #[test]
    fn test_mirror_example() {
        // 4.9 d after the epoch: fraction 0.166 -> index 4
        assert_eq!(lunar_phase(2_451_555, Hemisphere::Northern).glyph_index, 4);
        assert_eq!(lunar_phase(2_451_555, Hemisphere::Southern).glyph_index, 24);
    }

    #[test]
    fn test_glyph_table_is_contiguous() {
        let letters: String = (1..=27u8).filter(|&i| i != 14).map(glyph_for_index).collect();
        assert_eq!(letters, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(glyph_for_index(0), '0');
        assert_eq!(glyph_for_index(14), '1');
    }

    #[test]
    fn test_illumination_label_waxing() {
        let phase = LunarPhase {
            fraction: 0.2,
            glyph_index: 5,
            illumination: 35,
        };
        assert_eq!(phase.illumination_label(), "35%+");
    }

    #[test]
    fn test_hemisphere_from_latitude() {
        assert_eq!(Hemisphere::from_latitude(43.6), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(0.0), Hemisphere::Northern);
        assert_eq!(Hemisphere::from_latitude(-33.9), Hemisphere::Southern);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            lunar_phase(2_457_195, Hemisphere::Southern),
            lunar_phase(2_457_195, Hemisphere::Southern)
        );
    }
}
