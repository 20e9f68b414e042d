//! Insertion-ordered profile mapping.
//!
//! A profile is one extracted record: canonical field key to free-text
//! value. Key order mirrors the order labels were first seen in the source
//! document, which matters for readable JSON and stable CSV columns.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// What to do when the same label occurs twice within one profile.
///
/// Source documents sometimes legitimately repeat a label (two CONTACT
/// entries for two parents). The scanner routes every duplicate through
/// this policy so the accumulation strategy can change without touching
/// the scan loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later occurrence replaces the earlier value. Matches the historical
    /// behavior of the source format's tooling; earlier values are lost.
    #[default]
    Overwrite,
    /// Later occurrence is appended to the earlier value, space-joined.
    Append,
}

/// One extracted record of field/value pairs.
///
/// Behaves like a map with insertion-ordered keys: inserting an existing
/// key updates the value in place, keeping the key's original position.
/// Serializes to a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    entries: Vec<(String, String)>,
}

impl Profile {
    /// Create an empty profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, overwriting any existing value for the key.
    pub fn insert(&mut self, key: String, value: String) {
        self.insert_with(key, value, DuplicatePolicy::Overwrite);
    }

    /// Insert a value, resolving key collisions through `policy`.
    pub fn insert_with(&mut self, key: String, value: String, policy: DuplicatePolicy) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            match policy {
                DuplicatePolicy::Overwrite => *existing = value,
                DuplicatePolicy::Append => {
                    existing.push(' ');
                    existing.push_str(&value);
                }
            }
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the profile contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterate over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, String)> for Profile {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (k, v) in iter {
            profile.insert(k, v);
        }
        profile
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ProfileVisitor;

impl<'de> Visitor<'de> for ProfileVisitor {
    type Value = Profile;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of string keys to string values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut profile = Profile::new();
        while let Some((key, value)) = access.next_entry::<String, String>()? {
            profile.insert(key, value);
        }
        Ok(profile)
    }
}

impl<'de> Deserialize<'de> for Profile {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProfileVisitor)
    }
}
