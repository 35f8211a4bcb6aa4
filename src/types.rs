//! Shared constants and small value types for the orrery.

use std::fmt;

use bevy::prelude::*;

/// Rotation added to the Sun every frame, in radians.
pub const SUN_SPIN_STEP: f64 = 0.001;

/// Angular speed step per planet index, in radians per millisecond.
/// Planet `i` moves at `ORBIT_SPEED_STEP * (i + 1)`.
pub const ORBIT_SPEED_STEP: f64 = 0.001;

/// Scale from a NEO's semi-major axis (AU) to scene units.
pub const NEO_ORBIT_SCALE: f64 = 10.0;

/// A packed 0xRRGGBB color, as the body registry stores it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Red, green and blue channels in 0..=255.
    pub fn channels(self) -> (u8, u8, u8) {
        (
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        )
    }

    /// Convert to a Bevy sRGB color.
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.channels();
        Color::srgb_u8(r, g, b)
    }
}

/// A calendar date (proleptic Gregorian), as used by the NEO feed query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Parse a `YYYY-MM-DD` string. Returns `None` for anything else,
    /// including dates that do not exist (e.g. 2023-02-29).
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().splitn(3, '-');
        let year_str = parts.next()?;
        let month_str = parts.next()?;
        let day_str = parts.next()?;
        if year_str.len() != 4 || month_str.len() != 2 || day_str.len() != 2 {
            return None;
        }

        let date = Self {
            year: year_str.parse().ok()?,
            month: month_str.parse().ok()?,
            day: day_str.parse().ok()?,
        };

        // Round-tripping through the day count rejects out-of-range days
        if date.month == 0 || date.month > 12 || date.day == 0 {
            return None;
        }
        (Self::from_days(date.to_days()) == date).then_some(date)
    }

    /// Days since the Unix epoch (1970-01-01).
    pub fn to_days(self) -> i64 {
        ymd_to_days(self.year, self.month, self.day)
    }

    /// Date for a day count since the Unix epoch.
    pub fn from_days(days: i64) -> Self {
        let (year, month, day) = days_to_ymd(days);
        Self { year, month, day }
    }

    /// The date `days` days later (or earlier, if negative).
    pub fn add_days(self, days: i64) -> Self {
        Self::from_days(self.to_days() + days)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert days since Unix epoch to year, month, day
fn days_to_ymd(days: i64) -> (i32, u32, u32) {
    // Algorithm for Gregorian calendar
    let remaining_days = days + 719468; // Days from year 0 to 1970

    let era = if remaining_days >= 0 {
        remaining_days / 146097
    } else {
        (remaining_days - 146096) / 146097
    };

    let day_of_era = (remaining_days - era * 146097) as u32;
    let year_of_era = (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146096) / 365;
    let year = (year_of_era as i64 + era * 400) as i32;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = if month <= 2 { year + 1 } else { year };

    (year, month, day)
}

/// Convert year, month, day to days since Unix epoch (inverse of `days_to_ymd`)
fn ymd_to_days(year: i32, month: u32, day: u32) -> i64 {
    let year = if month <= 2 { year as i64 - 1 } else { year as i64 };
    let era = if year >= 0 { year / 400 } else { (year - 399) / 400 };
    let year_of_era = year - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let day_of_year = (153 * mp + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * 146097 + day_of_era - 719468
}
