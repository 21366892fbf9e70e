//! Codec configuration.
//!
//! Everything has a default, so `{}` is a valid configuration:
//!
//! ```json
//! { "field": "objects", "pretty": false, "onUnknownKey": "reject", "strategy": "tagged" }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Field name used when none is configured.
pub const DEFAULT_FIELD: &str = "objects";

/// What to do with a property whose name is not a known label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeyPolicy {
    /// Fail the whole decode with [`Error::UnknownKey`].
    #[default]
    Reject,
    /// Drop the entry and keep going.
    Skip,
}

/// How the codec gets from labels to keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Resolve labels directly through the key type.
    #[default]
    Tagged,
    /// Stage through a string-keyed [`WireDocument`](crate::WireDocument)
    /// and convert.
    Shadow,
}

/// Options for a [`KeyedCodec`](crate::KeyedCodec).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Top-level field holding the enum-keyed object.
    pub field: String,
    /// Indented output (default: compact). Never changes decoded content.
    pub pretty: bool,
    /// Unknown-label policy (default: reject).
    pub on_unknown_key: UnknownKeyPolicy,
    /// Encoding strategy (default: tagged).
    pub strategy: Strategy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            field: DEFAULT_FIELD.to_owned(),
            pretty: false,
            on_unknown_key: UnknownKeyPolicy::Reject,
            strategy: Strategy::Tagged,
        }
    }
}

impl CodecConfig {
    /// Load a configuration from JSON bytes and validate it.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let config: Self =
            serde_json::from_slice(bytes).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the options make sense together.
    pub fn validate(&self) -> Result<()> {
        if self.field.is_empty() {
            return Err(Error::Config("field name must not be empty".into()));
        }
        Ok(())
    }
}
