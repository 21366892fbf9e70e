//! In-memory enum-keyed mapping and its direct serde encoding.
//!
//! [`KeyedMap`] always serializes as a JSON object keyed by canonical labels,
//! whatever serializer drives it, and refuses to deserialize from anything
//! but an object. Embed it as a field to get the object shape through plain
//! `#[derive(Serialize, Deserialize)]`.

use crate::key::EnumKey;
use crate::value::whole;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// Mapping from an [`EnumKey`] to an ordered sequence of integers.
///
/// Derefs to the underlying `HashMap`, so the usual map API is available.
/// Equality ignores key order; each value's order is significant.
#[derive(Debug, Clone)]
pub struct KeyedMap<K>(HashMap<K, Vec<i64>>);

impl<K: EnumKey> KeyedMap<K> {
    /// Empty map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Empty map with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity(capacity))
    }

    /// Entries as `(label, values)` pairs, sorted by label.
    #[must_use]
    pub fn labeled(&self) -> Vec<(&'static str, &[i64])> {
        let mut entries: Vec<_> = self
            .0
            .iter()
            .map(|(k, v)| (k.label(), v.as_slice()))
            .collect();
        entries.sort_unstable_by_key(|(label, _)| *label);
        entries
    }

    /// Unwrap into the underlying `HashMap`.
    pub fn into_inner(self) -> HashMap<K, Vec<i64>> {
        self.0
    }
}

impl<K: EnumKey> Default for KeyedMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: EnumKey> PartialEq for KeyedMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: EnumKey> Eq for KeyedMap<K> {}

impl<K> Deref for KeyedMap<K> {
    type Target = HashMap<K, Vec<i64>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<K> DerefMut for KeyedMap<K> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<K: EnumKey> From<HashMap<K, Vec<i64>>> for KeyedMap<K> {
    fn from(map: HashMap<K, Vec<i64>>) -> Self {
        Self(map)
    }
}

impl<K: EnumKey, const N: usize> From<[(K, Vec<i64>); N]> for KeyedMap<K> {
    fn from(entries: [(K, Vec<i64>); N]) -> Self {
        Self(HashMap::from(entries))
    }
}

impl<K: EnumKey> FromIterator<(K, Vec<i64>)> for KeyedMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Vec<i64>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<K> IntoIterator for KeyedMap<K> {
    type Item = (K, Vec<i64>);
    type IntoIter = std::collections::hash_map::IntoIter<K, Vec<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

// ---- serde ------------------------------------------------------------------

impl<K: EnumKey> Serialize for KeyedMap<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.labeled();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (label, values) in entries {
            map.serialize_entry(label, values)?;
        }
        map.end()
    }
}

impl<'de, K: EnumKey> Deserialize<'de> for KeyedMap<K> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(KeyedMapVisitor(PhantomData))
    }
}

struct KeyedMapVisitor<K>(PhantomData<K>);

impl<'de, K: EnumKey> Visitor<'de> for KeyedMapVisitor<K> {
    type Value = KeyedMap<K>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object keyed by enum labels")
    }

    // Duplicate labels: last value wins.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = KeyedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(label) = access.next_key::<String>()? {
            let key = K::from_label(&label)
                .ok_or_else(|| de::Error::custom(format_args!("unknown key `{label}`")))?;
            let Integers(values) = access.next_value()?;
            out.insert(key, values);
        }
        Ok(out)
    }
}

/// A value sequence, read with the same integral rule as the codec: whole
/// floats such as `3.0` are accepted, fractions and out-of-range numbers are
/// not.
struct Integers(Vec<i64>);

impl<'de> Deserialize<'de> for Integers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(IntegersVisitor)
    }
}

struct IntegersVisitor;

impl<'de> Visitor<'de> for IntegersVisitor {
    type Value = Integers;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an array of integers")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(Integer(n)) = seq.next_element()? {
            values.push(n);
        }
        Ok(Integers(values))
    }
}

struct Integer(i64);

impl<'de> Deserialize<'de> for Integer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_i64(IntegerVisitor)
    }
}

struct IntegerVisitor;

impl<'de> Visitor<'de> for IntegerVisitor {
    type Value = Integer;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer that fits in i64")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Integer, E> {
        Ok(Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Integer, E> {
        i64::try_from(v)
            .map(Integer)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Integer, E> {
        whole(v)
            .map(Integer)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Float(v), &self))
    }
}
