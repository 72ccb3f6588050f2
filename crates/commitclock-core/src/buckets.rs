//! Time-of-day buckets.

use std::fmt;

use chrono::{DateTime, Local, Timelike};
use chrono_tz::Tz;

use crate::{DomainError, Result};

/// One of six fixed 4-hour ranges of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeBucket {
    /// 00:00 - 04:00
    Dawn,
    /// 04:00 - 08:00
    Daybreak,
    /// 08:00 - 12:00
    Morning,
    /// 12:00 - 16:00
    Daytime,
    /// 16:00 - 20:00
    Evening,
    /// 20:00 - 24:00
    Night,
}

impl TimeBucket {
    /// All buckets, in display order.
    pub const ALL: [TimeBucket; 6] = [
        Self::Dawn,
        Self::Daybreak,
        Self::Morning,
        Self::Daytime,
        Self::Evening,
        Self::Night,
    ];

    /// Classify a 24-hour wall-clock hour.
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            0..=3 => Some(Self::Dawn),
            4..=7 => Some(Self::Daybreak),
            8..=11 => Some(Self::Morning),
            12..=15 => Some(Self::Daytime),
            16..=19 => Some(Self::Evening),
            20..=23 => Some(Self::Night),
            _ => None,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Self::Dawn => "dawn",
            Self::Daybreak => "daybreak",
            Self::Morning => "morning",
            Self::Daytime => "daytime",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Dawn => "🌙",
            Self::Daybreak => "🌞",
            Self::Morning => "🌇",
            Self::Daytime => "🏙",
            Self::Evening => "🌃",
            Self::Night => "🌌",
        }
    }

    /// Report label, emoji first.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji(), self.to_str())
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Commit counts per bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BucketCounts {
    pub dawn: u64,
    pub daybreak: u64,
    pub morning: u64,
    pub daytime: u64,
    pub evening: u64,
    pub night: u64,
}

impl BucketCounts {
    pub fn get(&self, bucket: TimeBucket) -> u64 {
        match bucket {
            TimeBucket::Dawn => self.dawn,
            TimeBucket::Daybreak => self.daybreak,
            TimeBucket::Morning => self.morning,
            TimeBucket::Daytime => self.daytime,
            TimeBucket::Evening => self.evening,
            TimeBucket::Night => self.night,
        }
    }

    pub fn increment(&mut self, bucket: TimeBucket) {
        let counter = match bucket {
            TimeBucket::Dawn => &mut self.dawn,
            TimeBucket::Daybreak => &mut self.daybreak,
            TimeBucket::Morning => &mut self.morning,
            TimeBucket::Daytime => &mut self.daytime,
            TimeBucket::Evening => &mut self.evening,
            TimeBucket::Night => &mut self.night,
        };

        *counter += 1;
    }

    /// Sum of all six buckets.
    pub fn total(&self) -> u64 {
        TimeBucket::ALL.iter().map(|b| self.get(*b)).sum()
    }

    /// Morning to night, dawn and daybreak excluded.
    pub fn active_total(&self) -> u64 {
        self.morning + self.daytime + self.evening + self.night
    }

    /// Daybreak, morning and daytime.
    pub fn early_total(&self) -> u64 {
        self.daybreak + self.morning + self.daytime
    }

    /// Evening, night and dawn.
    pub fn late_total(&self) -> u64 {
        self.evening + self.night + self.dawn
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    Local,
    Named(Tz),
}

/// Classifies commit timestamps in a target timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBucketer {
    zone: Zone,
}

impl TimeBucketer {
    /// Use an IANA timezone name, or the local timezone when unset.
    pub fn new(timezone: Option<&str>) -> Result<Self> {
        let zone = match timezone {
            Some(name) => Zone::Named(parse_timezone(name)?),
            None => Zone::Local,
        };

        Ok(Self { zone })
    }

    /// Wall-clock hour of an RFC 3339 timestamp.
    pub fn hour_of(&self, timestamp: &str) -> Result<u32> {
        let parsed = DateTime::parse_from_rfc3339(timestamp).map_err(|e| {
            DomainError::InvalidTimestamp {
                value: timestamp.into(),
                source: e,
            }
        })?;

        Ok(match self.zone {
            Zone::Local => parsed.with_timezone(&Local).hour(),
            Zone::Named(tz) => parsed.with_timezone(&tz).hour(),
        })
    }

    pub fn classify(&self, timestamp: &str) -> Result<TimeBucket> {
        let hour = self.hour_of(timestamp)?;
        TimeBucket::from_hour(hour).ok_or(DomainError::InvalidHour { hour })
    }

    /// Count every timestamp in its bucket.
    pub fn count<'t, I>(&self, timestamps: I) -> Result<BucketCounts>
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut counts = BucketCounts::default();
        for timestamp in timestamps {
            counts.increment(self.classify(timestamp)?);
        }

        Ok(counts)
    }
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone { value: name.into() })
}
