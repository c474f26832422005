use std::{collections::HashSet, fmt, marker::PhantomData};

use serde::de::{self, Deserialize, MapAccess, Visitor};

/// Reads a JSON object into ordered `(key, value)` pairs, rejecting repeated keys.
///
/// Shared by table columns and metadata fields, which keep both key order and
/// key uniqueness.
pub(crate) struct UniqueMapVisitor<V> {
    what: &'static str,
    marker: PhantomData<V>,
}

impl<V> UniqueMapVisitor<V> {
    pub(crate) fn new(what: &'static str) -> Self {
        Self {
            what,
            marker: PhantomData,
        }
    }
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueMapVisitor<V> {
    type Value = Vec<(String, V)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a map of {} with unique keys", self.what)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(key) = map.next_key::<String>()? {
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate {} `{key}`", self.what)));
            }
            entries.push((key, map.next_value()?));
        }
        Ok(entries)
    }
}
