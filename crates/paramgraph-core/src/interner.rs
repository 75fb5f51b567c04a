//! String interning for the graph's string table.
//!
//! Field names, enum names, and root keys are stored once and referred to
//! by `StringId`. Ids are handed out in first-seen order and never change,
//! so the table doubles as the serialized string list.

use std::collections::HashMap;

/// Index into the string table.
///
/// Ordering is insertion order, not lexicographic. Edge maps keyed by
/// `StringId` therefore iterate in the order names were first interned.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StringId(u32);

impl StringId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Create a StringId from a raw index. Use only for deserialization.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for StringId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// Deduplicating, insertion-ordered string table.
#[derive(Debug, Clone, Default)]
pub struct Interner {
    map: HashMap<String, StringId>,
    strings: Vec<String>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild an interner from a decoded string list.
    ///
    /// A repeated entry keeps the index of its first occurrence for lookups.
    pub fn from_strings(strings: Vec<String>) -> Self {
        let mut map = HashMap::with_capacity(strings.len());
        for (i, s) in strings.iter().enumerate() {
            map.entry(s.clone()).or_insert(StringId(i as u32));
        }
        Self { map, strings }
    }

    /// Intern a string, returning the existing id if it was seen before.
    pub fn intern(&mut self, s: &str) -> StringId {
        if let Some(&id) = self.map.get(s) {
            return id;
        }

        let id = StringId(self.strings.len() as u32);
        self.strings.push(s.to_owned());
        self.map.insert(s.to_owned(), id);
        id
    }

    /// Look up a string without interning it.
    #[inline]
    pub fn get(&self, s: &str) -> Option<StringId> {
        self.map.get(s).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Consume the interner, returning the table in id order.
    pub fn into_strings(self) -> Vec<String> {
        self.strings
    }
}
