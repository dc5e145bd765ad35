//! Feature schema errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown feature in schema: {name}")]
    UnknownFeature { name: String },

    #[error("schema omits declared feature: {name}")]
    MissingFeature { name: String },

    #[error("schema lists feature twice: {name}")]
    DuplicateFeature { name: String },

    #[error("no encoding for {category} value {value:?}")]
    MissingEncoding { category: String, value: String },

    #[error("schema parse error: {message}")]
    Parse { message: String },
}

impl ErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
