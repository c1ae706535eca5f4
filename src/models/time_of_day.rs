use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wall-clock time of a shift boundary.
///
/// The rota endpoints encode `shiftstart`/`shiftend` as `hour * 100 + minute`
/// integers (930 ⇔ 09:30). Decoding happens once, at deserialization time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidShiftTime(
                i64::from(hour) * 100 + i64::from(minute),
            ));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    /// Decode an HHMM integer.
    pub fn from_hhmm(value: i64) -> AppResult<Self> {
        if !(0..=2359).contains(&value) || value % 100 > 59 {
            return Err(AppError::InvalidShiftTime(value));
        }
        Ok(Self {
            hour: (value / 100) as u8,
            minute: (value % 100) as u8,
        })
    }

    pub fn to_hhmm(self) -> i64 {
        self.hour as i64 * 100 + self.minute as i64
    }

    /// Parse "HH:MM".
    pub fn parse(s: &str) -> AppResult<Self> {
        let t = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| AppError::InvalidTime(s.to_string()))?;
        Ok(Self::from(t))
    }

    pub fn hour(self) -> u32 {
        self.hour as u32
    }

    pub fn minute(self) -> u32 {
        self.minute as u32
    }

    pub fn minutes_since_midnight(self) -> i64 {
        self.hour as i64 * 60 + self.minute as i64
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // hour/minute are range-checked on construction
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
        }
    }
}

impl TryFrom<i64> for TimeOfDay {
    type Error = AppError;

    fn try_from(value: i64) -> AppResult<Self> {
        Self::from_hhmm(value)
    }
}

impl From<TimeOfDay> for i64 {
    fn from(t: TimeOfDay) -> Self {
        t.to_hhmm()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
