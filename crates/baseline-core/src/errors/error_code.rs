//! Stable error codes surfaced to callers across a process boundary.

pub const REGISTRY_NOT_LOADED: &str = "REGISTRY_NOT_LOADED";
pub const REGISTRY_LOAD_MALFORMED: &str = "REGISTRY_LOAD_MALFORMED";
pub const UNKNOWN_FEATURE_ID: &str = "UNKNOWN_FEATURE_ID";
pub const UNRESOLVABLE: &str = "UNRESOLVABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

/// Maps an error value to its stable code.
pub trait BaselineErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message` form used in log lines and transport payloads.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}
