//! The codec front: envelope handling, strategy dispatch, and the builder.

use crate::config::{CodecConfig, Strategy, UnknownKeyPolicy};
use crate::error::{Error, Result};
use crate::key::EnumKey;
use crate::map::KeyedMap;
use crate::tagged::TaggedCodec;
use crate::value;
use crate::wire::ShadowCodec;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Converts an enum-keyed map to and from the JSON object stored under the
/// designated field.
///
/// Implement this to plug in another strategy. `to_object` must be total and
/// `from_object` must accept everything `to_object` produces.
pub trait MapCodec<K>: Send + Sync {
    /// Object form of `map`, one property per key.
    fn to_object(&self, map: &KeyedMap<K>) -> Map<String, Value>;

    /// Rebuild a map from its object form.
    fn from_object(&self, object: &Map<String, Value>) -> Result<KeyedMap<K>>;
}

/// Stateless codec between [`KeyedMap<K>`] and JSON documents of the form
/// `{"<field>": {"<label>": [<int>, ...], ...}}`.
///
/// Safe to share between threads; nothing is mutated after construction.
pub struct KeyedCodec<K> {
    config: CodecConfig,
    inner: Box<dyn MapCodec<K>>,
}

impl<K: EnumKey> KeyedCodec<K> {
    /// Codec with the default configuration: field `objects`, compact output,
    /// unknown labels rejected, tagged strategy.
    pub fn new() -> Self {
        Self::with_valid_config(CodecConfig::default())
    }

    /// Start configuring a new codec. Call [`.build()`](KeyedCodecBuilder::build)
    /// when ready.
    pub fn builder() -> KeyedCodecBuilder<K> {
        KeyedCodecBuilder::new()
    }

    /// Codec from an explicit configuration.
    pub fn from_config(config: CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CodecConfig) -> Self {
        let inner: Box<dyn MapCodec<K>> = match config.strategy {
            Strategy::Tagged => Box::new(TaggedCodec::new(config.on_unknown_key)),
            Strategy::Shadow => Box::new(ShadowCodec::new(config.on_unknown_key)),
        };
        Self { config, inner }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode `map` as a document holding only the designated field. Never
    /// fails and always writes the field as an object.
    #[must_use]
    pub fn encode(&self, map: &KeyedMap<K>) -> Vec<u8> {
        let mut doc = Map::with_capacity(1);
        doc.insert(
            self.config.field.clone(),
            Value::Object(self.inner.to_object(map)),
        );
        value::render(&Value::Object(doc), self.config.pretty)
    }

    /// Decode the designated field of a document. Sibling fields are ignored.
    pub fn decode(&self, bytes: &[u8]) -> Result<KeyedMap<K>> {
        let doc = value::parse(bytes)?;
        self.decode_field(&doc)
    }

    /// Encode a whole containing structure, sibling fields included. The
    /// designated field must serialize as an object, which a
    /// [`KeyedMap`] always does.
    pub fn encode_document<T: Serialize>(&self, doc: &T) -> Result<Vec<u8>> {
        let tree = serde_json::to_value(doc).map_err(|e| Error::Serialize(e.to_string()))?;
        value::as_object(&self.config.field, value::project(&tree, &self.config.field)?)?;
        Ok(value::render(&tree, self.config.pretty))
    }

    /// Decode a whole containing structure. The designated field is checked
    /// and canonicalized exactly as [`decode`](Self::decode) does before the
    /// structure itself is built.
    pub fn decode_document<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let mut tree = value::parse(bytes)?;
        let map = self.decode_field(&tree)?;
        if let Value::Object(fields) = &mut tree {
            fields.insert(
                self.config.field.clone(),
                Value::Object(self.inner.to_object(&map)),
            );
        }
        serde_json::from_value(tree).map_err(Error::from)
    }

    fn decode_field(&self, doc: &Value) -> Result<KeyedMap<K>> {
        let field = value::project(doc, &self.config.field)?;
        let object = value::as_object(&self.config.field, field)?;
        self.inner.from_object(object)
    }
}

impl<K: EnumKey> Default for KeyedCodec<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> std::fmt::Debug for KeyedCodec<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedCodec")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures a [`KeyedCodec`].
///
/// ```
/// use keyed_json::{KeyedCodec, Shape, UnknownKeyPolicy};
///
/// let codec = KeyedCodec::<Shape>::builder()
///     .pretty(true)
///     .on_unknown_key(UnknownKeyPolicy::Skip)
///     .build()
///     .unwrap();
/// assert!(codec.config().pretty);
/// ```
pub struct KeyedCodecBuilder<K> {
    config: CodecConfig,
    _marker: std::marker::PhantomData<fn() -> K>,
}

impl<K: EnumKey> KeyedCodecBuilder<K> {
    fn new() -> Self {
        Self {
            config: CodecConfig::default(),
            _marker: std::marker::PhantomData,
        }
    }

    /// Replace every option with `config`.
    pub fn config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Name of the top-level field holding the map (default: `objects`).
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.config.field = name.into();
        self
    }

    /// Write indented JSON (default: compact).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.config.pretty = yes;
        self
    }

    /// Policy for unknown labels (default: [`UnknownKeyPolicy::Reject`]).
    pub fn on_unknown_key(mut self, policy: UnknownKeyPolicy) -> Self {
        self.config.on_unknown_key = policy;
        self
    }

    /// Encoding strategy (default: [`Strategy::Tagged`]).
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Validate the options and return the codec.
    pub fn build(self) -> Result<KeyedCodec<K>> {
        KeyedCodec::from_config(self.config)
    }
}

impl<K> std::fmt::Debug for KeyedCodecBuilder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedCodecBuilder")
            .field("config", &self.config)
            .finish()
    }
}
