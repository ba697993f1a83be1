//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an inventory item.
///
/// Assigned by the store at insertion time; strictly increasing and never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Parses a path segment into an id.
///
/// A segment that is not an integer cannot name any stored record, so it is reported
/// as `NotFound` rather than as a validation failure.
impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_segments() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::new(42));
        assert_eq!(" 7 ".parse::<ItemId>().unwrap().get(), 7);
    }

    #[test]
    fn non_integer_segment_names_no_record() {
        assert_eq!("abc".parse::<ItemId>().unwrap_err(), DomainError::NotFound);
        assert_eq!("1.5".parse::<ItemId>().unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ItemId = serde_json::from_str("3").unwrap();
        assert_eq!(back, ItemId::new(3));
    }
}
