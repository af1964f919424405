//! Code system model.
//!
//! A FHIR code system is a closed set of coded values. Each member has:
//!
//! - a **symbol**: the in-memory identifier (the Rust variant name, e.g. `Deny`)
//! - a **wire tag**: the exact string used in serialized FHIR (e.g. `deny`)
//! - a **description**: the definition text from the FHIR specification
//!
//! # Example: `ConsentProvisionType`
//!
//! ```text
//! System:   ConsentProvisionType  (http://hl7.org/fhir/consent-provision-type)
//! Members:  Deny   <-> "deny"
//!           Permit <-> "permit"
//! ```
//!
//! All values here are `'static` and built at compile time. Lookup indexes
//! live in [`crate::index`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A single member of a code system.
///
/// Equality and hashing use only `(system, symbol)`. The wire tag and the
/// description do not take part, so two values naming the same member are
/// interchangeable.
///
/// # Example
///
/// ```
/// use fhir_codes::CodeValue;
///
/// let deny = CodeValue {
///     system: "ConsentProvisionType",
///     symbol: "Deny",
///     wire_tag: "deny",
///     description: "Consent is denied for actions meeting these rules.",
/// };
/// assert_eq!(deny.wire_tag, "deny");
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CodeValue {
    /// Name of the owning code system.
    pub system: &'static str,

    /// In-memory identifier, unique within the code system.
    pub symbol: &'static str,

    /// Serialized form, unique within the code system. Case-significant.
    pub wire_tag: &'static str,

    /// Definition from the FHIR specification (non-normative).
    pub description: &'static str,
}

impl PartialEq for CodeValue {
    fn eq(&self, other: &Self) -> bool {
        self.system == other.system && self.symbol == other.symbol
    }
}

impl Eq for CodeValue {}

impl Hash for CodeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.system.hash(state);
        self.symbol.hash(state);
    }
}

impl fmt::Display for CodeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.system, self.wire_tag)
    }
}

/// A code system definition with its members in declaration order.
///
/// Tables are usually declared with [`code_system!`](crate::code_system),
/// which also produces the matching enum.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CodeSystem {
    /// System identifier (e.g., "ConsentProvisionType").
    pub name: &'static str,

    /// Canonical URI (e.g., "http://hl7.org/fhir/consent-provision-type").
    pub canonical_uri: &'static str,

    /// Canonical URI of the value set binding this system, if published.
    pub value_set: Option<&'static str>,

    /// Definition of the code system.
    pub description: &'static str,

    /// FHIR release the table was generated from (e.g., "4.0.1").
    pub fhir_version: &'static str,

    /// Members in declaration order.
    #[serde(skip)]
    pub members: &'static [CodeValue],
}

impl CodeSystem {
    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the system declares no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at a declaration position.
    pub fn get(&self, position: usize) -> Option<&'static CodeValue> {
        self.members.get(position)
    }
}

impl PartialEq for CodeSystem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.canonical_uri == other.canonical_uri
    }
}

impl Eq for CodeSystem {}

impl fmt::Display for CodeSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.canonical_uri)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn equality_ignores_tag_and_description() {
        let a = CodeValue {
            system: "NarrativeStatus",
            symbol: "Generated",
            wire_tag: "generated",
            description: "one",
        };
        let b = CodeValue {
            description: "two",
            wire_tag: "other",
            ..a
        };
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
    }

    #[test]
    fn same_symbol_in_other_system_differs() {
        let a = CodeValue {
            system: "PublicationStatus",
            symbol: "Active",
            wire_tag: "active",
            description: "",
        };
        let b = CodeValue {
            system: "ConsentState",
            ..a
        };
        assert_ne!(a, b);
    }

    #[test]
    fn display_uses_system_and_wire_tag() {
        let value = CodeValue {
            system: "EncounterType",
            symbol: "BdBmClin",
            wire_tag: "BD/BM-clin",
            description: "",
        };
        assert_eq!(value.to_string(), "EncounterType#BD/BM-clin");
    }
}
