//! Registry load and validation errors.

use super::error_code::{self, BaselineErrorCode};

/// Errors raised while constructing a registry snapshot.
///
/// Every variant is a `RegistryLoadMalformed` from the caller's point of view;
/// the variants only narrow down what was wrong with the source.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("registry source is not valid JSON: {message}")]
    InvalidJson { message: String },

    #[error("duplicate feature id '{id}'")]
    DuplicateId { id: String },

    #[error("feature '{id}' declares no signatures")]
    EmptySignatures { id: String },

    #[error("feature entry has an empty id")]
    EmptyId,

    #[error("invalid registry date '{value}': {message}")]
    InvalidDate { value: String, message: String },
}

impl BaselineErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_LOAD_MALFORMED
    }
}
