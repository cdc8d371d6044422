use std::{fmt, str::FromStr};

use ::lazy_regex::{lazy_regex, Lazy, Regex};
use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::util::trim_quotes;

/// RFC3339 without the minutes of the timezone, e.g. `2020-01-01T10:00:00+01`.
static RE_HOUR_ONLY_OFFSET: Lazy<Regex> =
    lazy_regex!(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?)([+-]\d{2})$");

static RE_REL_TIME: Lazy<Regex> = lazy_regex!(r"^(-?)(\d{1,2}):(\d{2}):(\d{2})(?:\.(\d{3}))?$");

/// Largest magnitude `[-]H:MM:SS.mmm` can express with two hour digits.
const MAX_REL_TIME_MILLIS: u64 = 100 * 3_600_000 - 1;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Cannot parse as timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Cannot parse as relative time: '{0}'")]
    InvalidRelTime(String),
}

/// Absolute point in time as used by the CCS API.
///
/// The default value is the zero time, which is written as JSON `null`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiTime(Option<DateTime<FixedOffset>>);

impl ApiTime {
    pub fn new(t: DateTime<FixedOffset>) -> Self {
        Self(Some(t))
    }

    pub fn zero() -> Self {
        Self(None)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        self.0
    }

    pub fn before(&self, other: &ApiTime) -> bool {
        self < other
    }

    pub fn after(&self, other: &ApiTime) -> bool {
        self > other
    }

    /// Shifts a non-zero time by `d`. The zero time stays zero.
    pub fn add(&self, d: ApiRelTime) -> ApiTime {
        Self(self.0.map(|t| t + d.duration()))
    }
}

impl From<DateTime<FixedOffset>> for ApiTime {
    fn from(t: DateTime<FixedOffset>) -> Self {
        Self::new(t)
    }
}

impl FromStr for ApiTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = trim_quotes(s);
        if data == "null" {
            return Ok(Self::zero());
        }
        if let Ok(t) = DateTime::parse_from_rfc3339(data) {
            return Ok(Self::new(t));
        }
        RE_HOUR_ONLY_OFFSET
            .captures(data)
            .and_then(|caps| {
                DateTime::parse_from_rfc3339(&format!("{}{}:00", &caps[1], &caps[2])).ok()
            })
            .map(Self::new)
            .ok_or_else(|| Error::InvalidTimestamp(data.to_owned()))
    }
}

impl fmt::Display for ApiTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => write!(f, "<none>"),
        }
    }
}

impl Serialize for ApiTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(t) => serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ApiTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(de::Error::custom),
            None => Ok(Self::zero()),
        }
    }
}

/// Duration relative to the contest start, written as `[-]H:MM:SS[.mmm]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApiRelTime(chrono::Duration);

impl Default for ApiRelTime {
    fn default() -> Self {
        Self(chrono::Duration::zero())
    }
}

impl ApiRelTime {
    pub fn new(d: chrono::Duration) -> Self {
        Self(d)
    }

    pub fn from_millis(ms: i64) -> Self {
        Self(chrono::Duration::milliseconds(ms))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.0
    }
}

impl From<chrono::Duration> for ApiRelTime {
    fn from(d: chrono::Duration) -> Self {
        Self::new(d)
    }
}

impl FromStr for ApiRelTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = trim_quotes(s);
        if data == "null" {
            return Ok(Self::default());
        }
        let Some(caps) = RE_REL_TIME.captures(data) else {
            return Err(Error::InvalidRelTime(data.to_owned()));
        };
        // Every group is all-digits and at most three long
        let num = |i: usize| caps.get(i).map_or(0, |m| m.as_str().parse::<i64>().unwrap_or(0));
        let magnitude = ((num(2) * 60 + num(3)) * 60 + num(4)) * 1000 + num(5);
        let sign = if &caps[1] == "-" { -1 } else { 1 };
        Ok(Self::from_millis(sign * magnitude))
    }
}

impl fmt::Display for ApiRelTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let total = self.0.num_milliseconds();
        let sign = if total < 0 { "-" } else { "" };
        let ms = total.unsigned_abs();
        write!(
            f,
            "{}{}:{:02}:{:02}.{:03}",
            sign,
            ms / 3_600_000,
            ms / 60_000 % 60,
            ms / 1000 % 60,
            ms % 1000,
        )
    }
}

impl Serialize for ApiRelTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.num_milliseconds().unsigned_abs() > MAX_REL_TIME_MILLIS {
            return Err(ser::Error::custom(format!(
                "relative time {} does not fit in two hour digits",
                self
            )));
        }
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ApiRelTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(de::Error::custom),
            None => Ok(Self::default()),
        }
    }
}
