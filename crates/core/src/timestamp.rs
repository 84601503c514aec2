// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp values and their text encodings.
//!
//! A [`Timestamp`] is opaque to the store: it is only held and handed back.
//! Interpretation happens at the edges, through a [`TimeFormat`].
//!
//! Supported encodings:
//! - `time-only`: `HH:MM:SS`, parsed onto 1970-01-01 UTC
//! - `rfc3339`: `2024-01-01T00:00:00Z`, normalized to UTC

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::error::{Error, Result};

/// A point in time with at least second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current wall clock time.
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    /// Returns the Unix epoch, used as the zero/unset value.
    pub fn epoch() -> Self {
        Timestamp(DateTime::<Utc>::default())
    }

    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(datetime: DateTime<Utc>) -> Self {
        Timestamp(datetime)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&TimeFormat::Rfc3339.format(self))
    }
}

/// Text encoding used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    /// `HH:MM:SS`, 24-hour clock. Dates are discarded.
    TimeOnly,
    /// RFC 3339 in UTC, fractional seconds only when present.
    #[default]
    Rfc3339,
}

impl TimeFormat {
    const TIME_ONLY_PATTERN: &'static str = "%H:%M:%S";

    /// Returns the name accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFormat::TimeOnly => "time-only",
            TimeFormat::Rfc3339 => "rfc3339",
        }
    }

    /// Human-readable description of the expected input, for error messages.
    pub fn expected(&self) -> &'static str {
        match self {
            TimeFormat::TimeOnly => "HH:MM:SS",
            TimeFormat::Rfc3339 => "RFC 3339 (e.g. 2024-01-01T00:00:00Z)",
        }
    }

    /// Encodes a timestamp.
    pub fn format(&self, timestamp: &Timestamp) -> String {
        match self {
            TimeFormat::TimeOnly => timestamp.0.format(Self::TIME_ONLY_PATTERN).to_string(),
            TimeFormat::Rfc3339 => timestamp.0.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }

    /// Decodes a timestamp. Input must match exactly; whitespace is not trimmed.
    pub fn parse(&self, input: &str) -> Result<Timestamp> {
        let invalid = || Error::InvalidTimestamp { input: input.to_string(), expected: self.expected() };

        match self {
            TimeFormat::TimeOnly => {
                if !is_time_only_shape(input) {
                    return Err(invalid());
                }
                let time = NaiveTime::parse_from_str(input, Self::TIME_ONLY_PATTERN).map_err(|_| invalid())?;
                let naive = Timestamp::epoch().0.date_naive().and_time(time);
                Ok(Timestamp(Utc.from_utc_datetime(&naive)))
            }
            TimeFormat::Rfc3339 => DateTime::parse_from_rfc3339(input)
                .map(|dt| Timestamp(dt.with_timezone(&Utc)))
                .map_err(|_| invalid()),
        }
    }
}

/// Exactly `DD:DD:DD`. chrono alone skips whitespace and accepts unpadded fields.
fn is_time_only_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 8
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b':',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "time-only" | "time" => Ok(TimeFormat::TimeOnly),
            "rfc3339" => Ok(TimeFormat::Rfc3339),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Trait for getting the current wall clock time.
///
/// This allows injecting a fixed clock for testing.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// System clock implementation using `chrono::Utc::now`.
#[derive(Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

impl<C: ClockSource> ClockSource for &C {
    fn now(&self) -> Timestamp {
        (*self).now()
    }
}

/// Value a store holds before the first write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitialValue {
    /// The clock's time at store creation.
    #[default]
    Now,
    /// The Unix epoch.
    Epoch,
}

impl InitialValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            InitialValue::Now => "now",
            InitialValue::Epoch => "epoch",
        }
    }

    /// Resolves the policy to a concrete timestamp.
    pub fn resolve(&self, clock: &impl ClockSource) -> Timestamp {
        match self {
            InitialValue::Now => clock.now(),
            InitialValue::Epoch => Timestamp::epoch(),
        }
    }
}

impl fmt::Display for InitialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InitialValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "now" => Ok(InitialValue::Now),
            "epoch" | "zero" => Ok(InitialValue::Epoch),
            other => Err(Error::UnknownInitialValue(other.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
