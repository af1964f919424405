//! FHIR code systems with a closed-set, bidirectional wire-tag registry.
//!
//! This crate provides:
//!
//! - **Typed code enums** for FHIR R4 and STU3 code systems (one enum per system)
//! - **Code registry** with exact lookup between symbols and wire tags
//! - **Serde support** serializing every code as its bare wire tag
//! - **Doctor report** checking the compiled-in tables for conflicts
//!
//! # Module Organization
//!
//! - [`code`]: `CodeValue` and `CodeSystem` table types
//! - [`index`]: per-system lookup index and table conflicts
//! - [`traits`]: the `FhirCode` trait implemented by every code enum
//! - [`registry`]: `CodeRegistry`, its configuration and the built-in instance
//! - [`wire`]: serde bridge through wire tags
//! - [`doctor`]: integrity report
//! - [`release`]: `FhirRelease`, which selects the table set a registry loads
//! - [`r4`]: FHIR 4.0.1 code system tables
//! - [`stu3`]: FHIR 3.0.1 tables that differ from R4
//!
//! # Example
//!
//! ```
//! use fhir_codes::{FhirCode, registry};
//! use fhir_codes::r4::EncounterType;
//!
//! // Typed
//! let code: EncounterType = "BD/BM-clin".parse().unwrap();
//! assert_eq!(code, EncounterType::BdBmClin);
//!
//! // By name
//! assert_eq!(registry::decode("EncounterType", "BD/BM-clin").unwrap(), "BdBmClin");
//! assert_eq!(
//!     registry::describe("EncounterType", "BdBmClin").unwrap(),
//!     code.description()
//! );
//! ```

pub mod code;
pub mod doctor;
pub mod error;
pub mod index;
mod macros;
pub mod r4;
pub mod registry;
pub mod release;
pub mod stu3;
pub mod traits;
pub mod wire;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use code::{CodeSystem, CodeValue};
pub use doctor::{DoctorCounts, DoctorReport, SystemSummary};
pub use error::{Result, TerminologyError};
pub use index::{CodeSystemIndex, Conflict, ConflictKind};
pub use registry::{CodeRegistry, Members, RegistryConfig, builtin};
pub use release::FhirRelease;
pub use traits::FhirCode;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
