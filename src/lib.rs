//! JSON codec for maps keyed by closed enums.
//!
//! Generic serializers tend to fall back to an alternating `[key, value, ...]`
//! array once a map's key isn't a plain string. This crate pins the wire
//! shape instead: an enum-keyed map is always a JSON object whose property
//! names are the variants' canonical labels.
//!
//! ```rust
//! use keyed_json::{KeyedCodec, KeyedMap, Shape};
//!
//! let codec = KeyedCodec::<Shape>::new();
//! let map = KeyedMap::from([(Shape::Circle, vec![1, 2, 3])]);
//!
//! let bytes = codec.encode(&map);
//! assert_eq!(bytes, br#"{"objects":{"Circle":[1,2,3]}}"#);
//! assert_eq!(codec.decode(&bytes).unwrap(), map);
//! ```
//!
//! Decoding is strict by default: unknown labels, non-object fields and
//! non-integer values all come back as typed [`Error`]s. When a label
//! appears twice in one object, the last value wins.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod error;
pub mod game;
pub mod key;
pub mod map;
pub mod tagged;
pub mod value;
pub mod wire;

pub use codec::{KeyedCodec, KeyedCodecBuilder, MapCodec};
pub use config::{CodecConfig, Strategy, UnknownKeyPolicy};
pub use error::{Error, Result};
pub use game::{GameData, JsonGameData, Shape};
pub use key::EnumKey;
pub use map::KeyedMap;
pub use tagged::TaggedCodec;
pub use wire::{ShadowCodec, WireDocument};

/// Re-exports used by [`enum_key!`]. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use serde;
}
