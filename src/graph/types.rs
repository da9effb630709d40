//! User and pair types shared by the detector and the wire formats.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// User identifier for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user entry as published by the dataset endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,

    /// Display name. Not used by pair detection.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Ids this user follows. `null` or missing decodes as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub follows: Vec<UserId>,
}

impl User {
    pub fn new(id: i64, follows: &[i64]) -> Self {
        Self {
            id: UserId(id),
            name: String::new(),
            follows: follows.iter().copied().map(UserId).collect(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Two distinct users that follow each other.
///
/// Serialises as a two-element array `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MutualPair(UserId, UserId);

impl MutualPair {
    /// Build a pair in canonical order. Returns `None` when both ids are equal.
    pub fn new(a: UserId, b: UserId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self(a, b)),
            std::cmp::Ordering::Greater => Some(Self(b, a)),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> UserId {
        self.0
    }

    pub fn high(&self) -> UserId {
        self.1
    }
}

impl fmt::Display for MutualPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_canonical() {
        let pair = MutualPair::new(UserId(7), UserId(3)).unwrap();
        assert_eq!(pair.low(), UserId(3));
        assert_eq!(pair.high(), UserId(7));
        assert_eq!(pair, MutualPair::new(UserId(3), UserId(7)).unwrap());
    }

    #[test]
    fn test_pair_rejects_self() {
        assert!(MutualPair::new(UserId(4), UserId(4)).is_none());
    }

    #[test]
    fn test_pair_serializes_as_array() {
        let pair = MutualPair::new(UserId(2), UserId(1)).unwrap();
        assert_eq!(serde_json::to_string(&pair).unwrap(), "[1,2]");
    }

    #[test]
    fn test_user_null_follows() {
        let user: User = serde_json::from_str(r#"{"id": 5, "name": "e", "follows": null}"#).unwrap();
        assert_eq!(user.id, UserId(5));
        assert!(user.follows.is_empty());

        let user: User = serde_json::from_str(r#"{"id": 6, "name": null}"#).unwrap();
        assert!(user.follows.is_empty());
        assert!(user.name.is_empty());
    }

    #[test]
    fn test_user_malformed_entries_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"name": "x", "follows": [1]}"#).is_err());
        assert!(serde_json::from_str::<User>(r#"{"id": 1, "follows": [2, null]}"#).is_err());
        assert!(serde_json::from_str::<User>(r#"{"id": 1, "follows": ["2"]}"#).is_err());
    }
}
