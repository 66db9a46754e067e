//! Core types for the feature registry.
//!
//! These serde types define the JSON schema of a registry source.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level registry source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySource {
    /// Registry version string (e.g., "2024.1").
    pub version: String,
    /// ISO-8601 date the registry data was last updated.
    pub updated: String,
    /// Feature entries in registry order.
    #[serde(default)]
    pub features: Vec<FeatureDescriptor>,
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Unique, version-stable feature key (e.g., "optional-chaining").
    pub id: String,
    /// Human-readable label.
    #[serde(alias = "name", alias = "displayName")]
    pub display_name: String,
    pub category: Category,
    /// Textual signatures whose presence indicates usage. Case-sensitive.
    pub signatures: Vec<String>,
    pub status: SupportStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "docsUrl", skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

/// Language family a feature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Javascript,
    Css,
    Html,
    #[serde(other)]
    Other,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Self::Javascript => "javascript",
            Self::Css => "css",
            Self::Html => "html",
            Self::Other => "other",
        }
    }

    /// Identifier-continuation characters for this language family.
    ///
    /// A signature edge made of such a character must not touch another one
    /// in the scanned text.
    pub fn is_identifier_char(self, c: char) -> bool {
        if c.is_alphanumeric() || c == '_' {
            return true;
        }
        match self {
            Self::Javascript => c == '$',
            Self::Css | Self::Html => c == '-',
            Self::Other => false,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Browser-support maturity tier as recorded in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportStatus {
    #[serde(alias = "baseline", alias = "high", alias = "widely")]
    WidelyAvailable,
    #[serde(alias = "new", alias = "low", alias = "newly")]
    NewlyAvailable,
    #[serde(alias = "unsupported", alias = "limited")]
    LimitedAvailability,
}

impl SupportStatus {
    pub fn name(self) -> &'static str {
        match self {
            Self::WidelyAvailable => "widely_available",
            Self::NewlyAvailable => "newly_available",
            Self::LimitedAvailability => "limited_availability",
        }
    }
}

impl fmt::Display for SupportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
