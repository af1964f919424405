//! Core trait shared by every typed code system enum.

use std::fmt::Debug;
use std::hash::Hash;

use crate::code::{CodeSystem, CodeValue};
use crate::error::Result;
use crate::index::CodeSystemIndex;

/// A Rust enum whose variants are the members of one FHIR code system.
///
/// Implementations are generated by [`code_system!`](crate::code_system);
/// variant `i` in declaration order corresponds to `SYSTEM.members[i]`.
///
/// # Example
///
/// ```
/// use fhir_codes::FhirCode;
/// use fhir_codes::r4::ConsentProvisionType;
///
/// let deny = ConsentProvisionType::from_wire_tag("deny").unwrap();
/// assert_eq!(deny, ConsentProvisionType::Deny);
/// assert_eq!(deny.wire_tag(), "deny");
/// assert_eq!(deny.symbol(), "Deny");
/// ```
pub trait FhirCode: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The code system table.
    const SYSTEM: &'static CodeSystem;

    /// Lookup index for [`Self::SYSTEM`], built once on first use.
    fn index() -> &'static CodeSystemIndex;

    /// All variants in declaration order.
    fn all() -> &'static [Self];

    /// Declaration position of this variant.
    fn position(self) -> usize;

    /// The member this variant stands for.
    fn code_value(self) -> &'static CodeValue {
        let members: &'static [CodeValue] = Self::SYSTEM.members;
        &members[self.position()]
    }

    /// Serialized form used in FHIR JSON/XML.
    fn wire_tag(self) -> &'static str {
        self.code_value().wire_tag
    }

    /// In-memory identifier (the variant name).
    fn symbol(self) -> &'static str {
        self.code_value().symbol
    }

    /// Definition from the FHIR specification.
    fn description(self) -> &'static str {
        self.code_value().description
    }

    /// Parse an exact wire tag.
    fn from_wire_tag(wire_tag: &str) -> Result<Self> {
        let position = Self::index().position_of_wire_tag(wire_tag)?;
        Ok(Self::all()[position])
    }

    /// Resolve a variant by symbol.
    fn from_symbol(symbol: &str) -> Result<Self> {
        let position = Self::index().position_of_symbol(symbol)?;
        Ok(Self::all()[position])
    }
}
