use chrono::DateTime;
use derive_more::{Add, AddAssign, Display};
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// Float64
///
/// Finite f64 only; -0.0 canonically stored as 0.0
///

#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Display, Serialize)]
pub struct Float64(f64);

impl Float64 {
    /// Fallible constructor that rejects non-finite values and normalizes -0.0.
    #[must_use]
    pub fn try_new(v: f64) -> Option<Self> {
        if !v.is_finite() {
            return None;
        }

        // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
        Some(Self(if v == 0.0 { 0.0 } else { v }))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Eq for Float64 {}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        // finite-only invariant makes partial_cmp total
        self.0.partial_cmp(&other.0).unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Float64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl TryFrom<f64> for Float64 {
    type Error = FloatRangeError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::try_new(v).ok_or(FloatRangeError::NonFinite)
    }
}

// Manual impl so deserialized payloads cannot smuggle in NaN/inf.
impl<'de> Deserialize<'de> for Float64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;

        Self::try_new(raw).ok_or_else(|| serde::de::Error::custom("non-finite float64 value"))
    }
}

///
/// FloatRangeError
///

#[derive(Debug, ThisError)]
pub enum FloatRangeError {
    #[error("non-finite float64 value")]
    NonFinite,
}

///
/// Timestamp
/// (in seconds)
///

#[repr(transparent)]
#[derive(
    Add,
    AddAssign,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(u64::MIN);
    pub const MIN: Self = Self(u64::MIN);
    pub const MAX: Self = Self(u64::MAX);

    /// Construct from seconds.
    #[must_use]
    pub const fn from_seconds(secs: u64) -> Self {
        Self(secs)
    }

    /// Construct from milliseconds (truncate to seconds).
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms / 1_000)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Parse an RFC 3339 datetime into whole seconds since the epoch.
    ///
    /// Pre-epoch datetimes are rejected.
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| TimestampParseError::Format(e.to_string()))?;

        u64::try_from(dt.timestamp())
            .map(Self)
            .map_err(|_| TimestampParseError::PreEpoch)
    }

    /// Render as an RFC 3339 UTC datetime, or the raw second count when the
    /// value exceeds the chrono-representable range.
    #[must_use]
    pub fn to_rfc3339(self) -> String {
        i64::try_from(self.0)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .map_or_else(|| format!("{}s", self.0), |dt| dt.to_rfc3339())
    }
}

///
/// TimestampParseError
///

#[derive(Debug, ThisError)]
pub enum TimestampParseError {
    #[error("invalid RFC 3339 datetime: {0}")]
    Format(String),

    #[error("datetime precedes the unix epoch")]
    PreEpoch,
}
