use super::error_code::{self, BaselineErrorCode};

/// Errors that refuse a scan outright.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("no feature registry is loaded; refusing to scan")]
    RegistryNotLoaded,
}

impl BaselineErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RegistryNotLoaded => error_code::REGISTRY_NOT_LOADED,
        }
    }
}
