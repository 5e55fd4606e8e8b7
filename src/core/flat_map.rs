//! The flattened output map.

use crate::error::ParseError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// A map key compared without regard to case.
///
/// Each character is folded to its single-character uppercase mapping; a
/// character whose uppercase form is not exactly one character (`ß`) is kept
/// as is. Folding never merges distinct code points that are already
/// uppercase, so `K` (U+212A KELVIN SIGN) and `k` stay different keys.
/// The original spelling is kept for display and iteration.
#[derive(Debug, Clone)]
struct CaselessKey(String);

impl CaselessKey {
    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().map(fold_char)
    }
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl PartialEq for CaselessKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CaselessKey {}

impl PartialOrd for CaselessKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CaselessKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded().cmp(other.folded())
    }
}

/// Canonical path to value mapping produced by the parser.
///
/// Lookups are case-insensitive and iteration runs in case-insensitive key
/// order, independent of the order leaves appeared in the document. Case is
/// folded one character at a time through its simple uppercase mapping.
///
/// # Examples
///
/// ```rust
/// let map = flatjson_config::parse(r#"{"Server": {"Port": 8080}}"#).unwrap();
///
/// assert_eq!(map.get("server:port"), Some("8080"));
/// assert_eq!(map.get("SERVER:PORT"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatMap {
    entries: BTreeMap<CaselessKey, String>,
}

impl FlatMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf, failing if the path is already present in any casing.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::DuplicateKey`] carrying the path already stored.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ParseError> {
        match self.entries.entry(CaselessKey(path.into())) {
            btree_map::Entry::Occupied(existing) => {
                Err(ParseError::duplicate_key(existing.key().0.clone()))
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                Ok(())
            }
        }
    }

    /// Look up a value by canonical path, ignoring case.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries
            .get(&CaselessKey(path.to_owned()))
            .map(String::as_str)
    }

    /// Whether a canonical path is present, ignoring case.
    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(&CaselessKey(path.to_owned()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(path, value)` pairs in case-insensitive key order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterate the canonical paths.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(|k| k.0.as_str())
    }

    /// Iterate the values.
    pub fn values(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.values().map(String::as_str)
    }

    /// Convert into an ordinary, case-sensitive `BTreeMap`.
    pub fn into_btree_map(self) -> BTreeMap<String, String> {
        self.into_iter().collect()
    }
}

/// Borrowing iterator over a [`FlatMap`].
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, CaselessKey, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.0.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FlatMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`FlatMap`].
pub struct IntoIter {
    inner: btree_map::IntoIter<CaselessKey, String>,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.0, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}

impl IntoIterator for FlatMap {
    type Item = (String, String);
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.entries.into_iter(),
        }
    }
}

impl Serialize for FlatMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
