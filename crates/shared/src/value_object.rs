use serde::Serialize;
use std::fmt;

/// Number of people a plan is cooked for. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FamilySize(u32);

impl FamilySize {
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Parses the leading integer of a form field, so `"2.5"` is 2. Blank,
    /// non-numeric, negative and zero input yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        leading_int(raw)
            .filter(|value| *value >= 1)
            .map(|value| Self(u32::try_from(value).unwrap_or(u32::MAX)))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FamilySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Times per month a chosen dish is cooked. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Frequency(u32);

impl Frequency {
    pub const DEFAULT: Frequency = Frequency(1);

    /// Zero falls back to the default.
    pub fn new(value: u32) -> Self {
        if value == 0 {
            return Self::DEFAULT;
        }

        Self(value)
    }

    /// Non-positive values fall back to the default; values above `u32::MAX`
    /// saturate.
    pub fn from_signed(value: i64) -> Self {
        if value <= 0 {
            return Self::DEFAULT;
        }

        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Parses the leading integer of a form field, falling back to the default
    /// when there is none or it is not positive.
    pub fn parse(raw: &str) -> Self {
        leading_int(raw).map(Self::from_signed).unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Optional sign then the run of ASCII digits after leading whitespace.
/// Anything after the digits is ignored; overflow saturates.
fn leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (negative, rest) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);

    Some(if negative { -magnitude } else { magnitude })
}
