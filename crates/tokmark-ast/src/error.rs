/// Node-model contract violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("Unrecognized attribute '{attribute}' for variant {variant}")]
    UnknownAttribute { variant: String, attribute: String },

    #[error("Unknown variant '{name}'")]
    UnknownVariant { name: String },

    #[error("Variant '{name}' is already declared")]
    DuplicateVariant { name: String },
}

/// Persistence failures
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to encode tree: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode tree: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
