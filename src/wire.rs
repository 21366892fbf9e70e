//! Shadow-DTO strategy.
//!
//! [`WireDocument`] mirrors the wire shape with plain `String` keys. Going
//! from the domain to the wire is total; coming back can fail on labels the
//! key domain doesn't know.

use crate::codec::MapCodec;
use crate::config::UnknownKeyPolicy;
use crate::error::{Error, Result};
use crate::key::EnumKey;
use crate::map::KeyedMap;
use crate::value::int_array;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// String-keyed staging form of an enum-keyed map, ordered by label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WireDocument {
    entries: BTreeMap<String, Vec<i64>>,
}

impl WireDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a JSON object, checking every value is an array of integers.
    /// Labels are not checked here.
    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        let entries = object
            .iter()
            .map(|(label, raw)| int_array(label, raw).map(|values| (label.clone(), values)))
            .collect::<Result<_>>()?;
        Ok(Self { entries })
    }

    /// JSON object form.
    pub fn into_object(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .map(|(label, values)| (label, Value::from(values)))
            .collect()
    }

    /// Convert to the domain mapping, applying `policy` to unknown labels.
    pub fn into_keyed<K: EnumKey>(self, policy: UnknownKeyPolicy) -> Result<KeyedMap<K>> {
        let mut out = KeyedMap::with_capacity(self.entries.len());
        for (label, values) in self.entries {
            match K::from_label(&label) {
                Some(key) => {
                    out.insert(key, values);
                }
                None if policy == UnknownKeyPolicy::Skip => {}
                None => return Err(Error::UnknownKey(label)),
            }
        }
        Ok(out)
    }

    /// Entries by label.
    pub fn entries(&self) -> &BTreeMap<String, Vec<i64>> {
        &self.entries
    }

    /// Values stored under `label`.
    pub fn get(&self, label: &str) -> Option<&[i64]> {
        self.entries.get(label).map(Vec::as_slice)
    }

    /// Insert raw values under `label`, returning the previous ones.
    pub fn insert(&mut self, label: impl Into<String>, values: Vec<i64>) -> Option<Vec<i64>> {
        self.entries.insert(label.into(), values)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: EnumKey> From<&KeyedMap<K>> for WireDocument {
    fn from(map: &KeyedMap<K>) -> Self {
        let entries = map
            .iter()
            .map(|(k, v)| (k.label().to_owned(), v.clone()))
            .collect();
        Self { entries }
    }
}

/// Strict conversion: unknown labels are rejected.
impl<K: EnumKey> TryFrom<WireDocument> for KeyedMap<K> {
    type Error = Error;

    fn try_from(wire: WireDocument) -> Result<Self> {
        wire.into_keyed(UnknownKeyPolicy::Reject)
    }
}

/// Stages every conversion through a [`WireDocument`].
pub struct ShadowCodec<K> {
    policy: UnknownKeyPolicy,
    _marker: PhantomData<fn() -> K>,
}

impl<K: EnumKey> ShadowCodec<K> {
    /// Codec applying `policy` to unknown labels.
    pub fn new(policy: UnknownKeyPolicy) -> Self {
        Self {
            policy,
            _marker: PhantomData,
        }
    }
}

impl<K: EnumKey> MapCodec<K> for ShadowCodec<K> {
    fn to_object(&self, map: &KeyedMap<K>) -> Map<String, Value> {
        WireDocument::from(map).into_object()
    }

    fn from_object(&self, object: &Map<String, Value>) -> Result<KeyedMap<K>> {
        WireDocument::from_object(object)?.into_keyed(self.policy)
    }
}

impl<K> std::fmt::Debug for ShadowCodec<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadowCodec")
            .field("policy", &self.policy)
            .finish()
    }
}
