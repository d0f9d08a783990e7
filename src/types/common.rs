//! Miscellaneous common types used throughout the PAY.JP codebase.

/// Represents a key-value pair attached to SDK errors. The key is a `String`.
pub type Record<V> = std::collections::HashMap<String, V>;

/// Represents any JSON value. Used for serializing/deserializing arbitrary JSON data.
pub type AnyJson = serde_json::Value;
