//! Closed key domains.
//!
//! A key domain is a fieldless enum whose variants each carry a canonical
//! wire label. Declare one with [`enum_key!`](crate::enum_key) or implement
//! [`EnumKey`] by hand.

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// A finite, closed set of named variants usable as a map key.
///
/// `label` must be injective: no two variants may share a label. Use
/// [`duplicate_label`] in a test to check a domain.
pub trait EnumKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every variant of the domain.
    const ALL: &'static [Self];

    /// Canonical wire label of this variant.
    fn label(self) -> &'static str;

    /// Resolve a wire label. Exact, case-sensitive match only.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.label() == label)
    }
}

/// First label shared by two variants of `K`, or `None` if the label
/// function is injective.
pub fn duplicate_label<K: EnumKey>() -> Option<&'static str> {
    let mut seen = std::collections::HashSet::with_capacity(K::ALL.len());
    K::ALL
        .iter()
        .map(|k| k.label())
        .find(|label| !seen.insert(*label))
}

/// Serialize a key as its label. Used by [`enum_key!`](crate::enum_key).
pub fn serialize_label<K, S>(key: &K, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    K: EnumKey,
    S: Serializer,
{
    serializer.serialize_str(key.label())
}

/// Deserialize a key from its label. Used by [`enum_key!`](crate::enum_key).
pub fn deserialize_label<'de, K, D>(deserializer: D) -> std::result::Result<K, D::Error>
where
    K: EnumKey,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(LabelVisitor(PhantomData))
}

struct LabelVisitor<K>(PhantomData<K>);

impl<'de, K: EnumKey> Visitor<'de> for LabelVisitor<K> {
    type Value = K;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("one of ")?;
        for (i, key) in K::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{}`", key.label())?;
        }
        Ok(())
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<K, E> {
        K::from_label(v).ok_or_else(|| E::custom(format_args!("unknown key `{v}`")))
    }
}

/// Declare a closed key domain.
///
/// Each variant's label defaults to its name; override it with
/// `Variant => "label"`. The generated enum derives `Debug`, `Clone`,
/// `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd` and `Ord`, and
/// implements [`EnumKey`], `Display`, `FromStr` and serde as its label.
///
/// ```
/// keyed_json::enum_key! {
///     /// Compass points.
///     pub enum Heading {
///         /// Up.
///         North => "N",
///         /// Down.
///         South => "S",
///     }
/// }
///
/// use keyed_json::EnumKey;
/// assert_eq!(Heading::North.label(), "N");
/// assert_eq!("S".parse::<Heading>().unwrap(), Heading::South);
/// ```
#[macro_export]
macro_rules! enum_key {
    (@label $variant:ident) => {
        stringify!($variant)
    };
    (@label $variant:ident, $label:literal) => {
        $label
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $(=> $label:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::EnumKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::enum_key!(@label $variant $(, $label)?),)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::EnumKey::label(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as $crate::EnumKey>::from_label(s)
                    .ok_or_else(|| $crate::Error::UnknownKey(s.to_owned()))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::key::serialize_label(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::key::deserialize_label(deserializer)
            }
        }
    };
}
