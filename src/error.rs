//! Unified error type for all codec operations.

/// Things that can go wrong when encoding or decoding an enum-keyed map.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input bytes are not valid JSON.
    #[error("malformed json: {0}")]
    MalformedJson(String),
    /// A value has the wrong JSON type. `field` is the designated field, or
    /// `$` for the top-level document.
    #[error("field `{field}` must be a JSON object, found {found}")]
    SchemaShapeMismatch {
        /// Field whose value had the wrong shape.
        field: String,
        /// JSON kind that was found instead (`"array"`, `"string"`, ...).
        found: &'static str,
    },
    /// The designated field is absent from the top-level object.
    #[error("missing field `{0}`")]
    MissingField(String),
    /// A property name matches no canonical label of the key domain.
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    /// A property value is not an array of integers.
    #[error("value for `{0}` must be an array of integers")]
    InvalidValueShape(String),
    /// A caller-owned structure could not be turned into JSON.
    #[error("serialization error: {0}")]
    Serialize(String),
    /// A caller-owned structure could not be built from JSON.
    #[error("deserialization error: {0}")]
    Deserialize(String),
    /// Bad configuration (empty field name, unknown option, etc.).
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            Error::MalformedJson(err.to_string())
        } else if err.is_data() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Serialize(err.to_string())
        }
    }
}

/// Result alias using our [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
