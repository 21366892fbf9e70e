//! Direct-tagging strategy: labels resolve straight through the key type.

use crate::codec::MapCodec;
use crate::config::UnknownKeyPolicy;
use crate::error::{Error, Result};
use crate::key::EnumKey;
use crate::map::KeyedMap;
use crate::value::int_array;
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// Maps keys to labels with [`EnumKey::label`] and back with
/// [`EnumKey::from_label`], no intermediate type.
pub struct TaggedCodec<K> {
    policy: UnknownKeyPolicy,
    _marker: PhantomData<fn() -> K>,
}

impl<K: EnumKey> TaggedCodec<K> {
    /// Codec applying `policy` to unknown labels.
    pub fn new(policy: UnknownKeyPolicy) -> Self {
        Self {
            policy,
            _marker: PhantomData,
        }
    }
}

impl<K: EnumKey> MapCodec<K> for TaggedCodec<K> {
    fn to_object(&self, map: &KeyedMap<K>) -> Map<String, Value> {
        map.labeled()
            .into_iter()
            .map(|(label, values)| (label.to_owned(), Value::from(values)))
            .collect()
    }

    fn from_object(&self, object: &Map<String, Value>) -> Result<KeyedMap<K>> {
        let mut out = KeyedMap::with_capacity(object.len());
        for (label, raw) in object {
            let values = int_array(label, raw)?;
            match (K::from_label(label), self.policy) {
                (Some(key), _) => {
                    out.insert(key, values);
                }
                (None, UnknownKeyPolicy::Skip) => {}
                (None, UnknownKeyPolicy::Reject) => return Err(Error::UnknownKey(label.clone())),
            }
        }
        Ok(out)
    }
}

impl<K> std::fmt::Debug for TaggedCodec<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedCodec")
            .field("policy", &self.policy)
            .finish()
    }
}
