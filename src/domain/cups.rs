//! Cup counts and the policy that bounds them
//!
//! Stored orders carry whatever the document store holds for a participant's
//! cup count, so [`CupValue`] keeps the raw JSON value and parses it leniently
//! on read. Drafts work with plain integers and run every edit through a
//! [`CupPolicy`].

use nutype::nutype;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::validation_constants::cups;

/// A participant's cup count as stored on an order
#[nutype(derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, AsRef))]
pub struct CupValue(Value);

impl CupValue {
    /// Wrap an integer count
    pub fn from_count(count: u32) -> Self {
        Self::new(Value::from(count))
    }

    /// Parse the stored value, falling back to `default` when it is not numeric
    pub fn parse_or(&self, default: i64) -> i64 {
        parse_value(self.as_ref()).unwrap_or(default)
    }
}

impl From<u32> for CupValue {
    fn from(count: u32) -> Self {
        Self::from_count(count)
    }
}

/// Lenient integer parse of a JSON value
///
/// Numbers are truncated toward zero, strings contribute their leading
/// integer (`"2 cups"` parses as 2), everything else is not numeric.
pub fn parse_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(text) => parse_leading_int(text),
        _ => None,
    }
}

/// Parse the leading integer of `text`, ignoring leading whitespace
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Bounds applied to cup counts while composing an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CupPolicy {
    /// Counts are clamped into `[min, max]`
    Clamped { min: u32, max: u32 },
    /// Counts only have a lower bound
    Unbounded { min: u32 },
}

impl Default for CupPolicy {
    fn default() -> Self {
        Self::constrained()
    }
}

impl CupPolicy {
    /// One to three cups per person
    pub const fn constrained() -> Self {
        Self::Clamped {
            min: cups::DEFAULT_MIN,
            max: cups::DEFAULT_MAX,
        }
    }

    /// Any positive count
    pub const fn unbounded() -> Self {
        Self::Unbounded {
            min: cups::DEFAULT_MIN,
        }
    }

    /// Build a policy from configured bounds; a `max` of zero means unbounded
    pub fn from_bounds(min: u32, max: u32) -> Self {
        if max == cups::UNBOUNDED_MAX {
            Self::Unbounded { min }
        } else {
            Self::Clamped {
                min: min.min(max),
                max: max.max(min),
            }
        }
    }

    pub const fn min(&self) -> u32 {
        match self {
            Self::Clamped { min, .. } | Self::Unbounded { min } => *min,
        }
    }

    pub const fn max(&self) -> Option<u32> {
        match self {
            Self::Clamped { max, .. } => Some(*max),
            Self::Unbounded { .. } => None,
        }
    }

    /// Bring an arbitrary integer inside the policy's bounds
    pub fn apply(&self, value: i64) -> u32 {
        let upper = i64::from(self.max().unwrap_or(u32::MAX));
        let clamped = value.clamp(i64::from(self.min()), upper);
        u32::try_from(clamped).unwrap_or(u32::MAX)
    }

    /// Move `current` by `delta` cups
    pub fn step(&self, current: u32, delta: i64) -> u32 {
        self.apply(i64::from(current).saturating_add(delta))
    }

    /// Interpret free-text input, keeping `prior` (or the new-participant
    /// default) when the text is not numeric
    pub fn parse_text(&self, text: &str, prior: Option<u32>) -> u32 {
        match parse_leading_int(text) {
            Some(value) => self.apply(value),
            None => prior.unwrap_or_else(|| self.apply(i64::from(cups::NEW_PARTICIPANT))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_parse_as_integers() {
        assert_eq!(CupValue::new(json!(2)).parse_or(0), 2);
        assert_eq!(CupValue::new(json!(2.9)).parse_or(0), 2);
        assert_eq!(CupValue::new(json!(-1)).parse_or(0), -1);
    }

    #[test]
    fn strings_parse_their_leading_integer() {
        assert_eq!(CupValue::new(json!("3")).parse_or(0), 3);
        assert_eq!(CupValue::new(json!(" 2 cups")).parse_or(0), 2);
        assert_eq!(CupValue::new(json!("+4")).parse_or(0), 4);
    }

    #[test]
    fn non_numeric_values_fall_back_to_default() {
        assert_eq!(CupValue::new(json!("lots")).parse_or(0), 0);
        assert_eq!(CupValue::new(json!("")).parse_or(0), 0);
        assert_eq!(CupValue::new(json!(null)).parse_or(0), 0);
        assert_eq!(CupValue::new(json!(true)).parse_or(7), 7);
        assert_eq!(CupValue::new(json!([1])).parse_or(0), 0);
    }

    #[test]
    fn cup_values_serialize_as_plain_numbers() {
        let value = CupValue::from_count(2);
        assert_eq!(serde_json::to_string(&value).unwrap(), "2");
    }

    #[test]
    fn clamped_policy_stays_within_bounds() {
        let policy = CupPolicy::constrained();
        assert_eq!(policy.step(1, -1), 1);
        assert_eq!(policy.step(3, 1), 3);
        assert_eq!(policy.step(2, 1), 3);
        assert_eq!(policy.apply(-40), 1);
        assert_eq!(policy.apply(40), 3);
    }

    #[test]
    fn unbounded_policy_only_enforces_minimum() {
        let policy = CupPolicy::unbounded();
        assert_eq!(policy.step(3, 5), 8);
        assert_eq!(policy.step(1, -3), 1);
        assert_eq!(policy.apply(i64::MAX), u32::MAX);
    }

    #[test]
    fn free_text_keeps_prior_value_when_not_numeric() {
        let policy = CupPolicy::unbounded();
        assert_eq!(policy.parse_text("12", Some(2)), 12);
        assert_eq!(policy.parse_text("abc", Some(2)), 2);
        assert_eq!(policy.parse_text("abc", None), 1);
        assert_eq!(CupPolicy::constrained().parse_text("9", Some(2)), 3);
    }

    #[test]
    fn configured_bounds_select_the_policy() {
        assert_eq!(CupPolicy::from_bounds(1, 3), CupPolicy::constrained());
        assert_eq!(CupPolicy::from_bounds(1, 0), CupPolicy::unbounded());
        assert_eq!(
            CupPolicy::from_bounds(4, 2),
            CupPolicy::Clamped { min: 2, max: 4 }
        );
    }
}
