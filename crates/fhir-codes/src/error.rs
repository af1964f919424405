//! Error types for code lookups and registry construction.

use thiserror::Error;

/// Errors returned by code-system lookups and registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TerminologyError {
    /// The named code system is not registered.
    #[error("Unknown code system: {system}")]
    UnknownSystem { system: String },

    /// No registered code system has this canonical URI.
    #[error("No code system is registered under canonical URI {uri}")]
    UnknownUri { uri: String },

    /// A FHIR release without compiled-in tables.
    #[error("Unknown FHIR release: {release}")]
    UnknownRelease { release: String },

    /// A symbol claims membership in a code system but is not declared there.
    #[error("Symbol '{symbol}' is not a member of code system {system}")]
    UnknownSymbol { system: String, symbol: String },

    /// A wire tag outside the closed set of the code system.
    #[error("Wire tag '{wire_tag}' is not defined by code system {system}")]
    UnknownWireTag { system: String, wire_tag: String },

    /// A code system with the same name is already registered.
    #[error("Code system {system} is already registered")]
    DuplicateSystem { system: String },

    /// Another registered code system already uses this canonical URI.
    #[error("Canonical URI {uri} of {system} is already registered by {existing}")]
    DuplicateUri {
        system: String,
        uri: String,
        existing: String,
    },

    /// Two members of one code system share a symbol.
    #[error("Code system {system} declares symbol '{symbol}' more than once")]
    DuplicateSymbol { system: String, symbol: String },

    /// Two members of one code system share a wire tag.
    #[error("Code system {system} declares wire tag '{wire_tag}' more than once")]
    DuplicateWireTag { system: String, wire_tag: String },
}

impl TerminologyError {
    pub(crate) fn unknown_system(system: &str) -> Self {
        Self::UnknownSystem {
            system: system.to_string(),
        }
    }

    pub(crate) fn unknown_symbol(system: &str, symbol: &str) -> Self {
        Self::UnknownSymbol {
            system: system.to_string(),
            symbol: symbol.to_string(),
        }
    }

    pub(crate) fn unknown_wire_tag(system: &str, wire_tag: &str) -> Self {
        Self::UnknownWireTag {
            system: system.to_string(),
            wire_tag: wire_tag.to_string(),
        }
    }

    /// Returns true for failures caused by untrusted input data.
    ///
    /// [`TerminologyError::UnknownWireTag`] and [`TerminologyError::UnknownUri`]
    /// (a `Coding.system` read from a payload) qualify. Every other variant
    /// points at a defect in the calling code, its configuration or a
    /// compiled-in table.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Self::UnknownWireTag { .. } | Self::UnknownUri { .. })
    }
}

/// Result type for terminology operations.
pub type Result<T> = std::result::Result<T, TerminologyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_payload_failures_are_data_errors() {
        assert!(TerminologyError::unknown_wire_tag("BundleType", "nope").is_data_error());
        assert!(
            TerminologyError::UnknownUri {
                uri: "http://example.org/none".to_string()
            }
            .is_data_error()
        );
        assert!(
            !TerminologyError::UnknownRelease {
                release: "R5".to_string()
            }
            .is_data_error()
        );
        assert!(!TerminologyError::unknown_symbol("BundleType", "Nope").is_data_error());
        assert!(!TerminologyError::unknown_system("Nope").is_data_error());
    }

    #[test]
    fn messages_name_system_and_value() {
        let err = TerminologyError::unknown_wire_tag("ValidationStatus", "Successful");
        assert_eq!(
            err.to_string(),
            "Wire tag 'Successful' is not defined by code system ValidationStatus"
        );
    }
}
