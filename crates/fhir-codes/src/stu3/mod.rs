//! FHIR STU3 (3.0.1) code systems.
//!
//! Only the release-specific tables are shipped for STU3. They share names and
//! canonical URIs with their [`r4`](crate::r4) counterparts, so load them into
//! a registry of their own (see [`FhirRelease`](crate::FhirRelease)).

use crate::index::CodeSystemIndex;
use crate::traits::FhirCode;

mod data_type;
mod resource_type;

pub use data_type::DataType;
pub use resource_type::ResourceType;

/// FHIR release the tables were generated from.
pub const FHIR_VERSION: &str = "3.0.1";

/// Index accessors for every STU3 code system, in load order.
pub static INDEXES: &[fn() -> &'static CodeSystemIndex] = &[DataType::index, ResourceType::index];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_counts() {
        assert_eq!(ResourceType::ALL.len(), 119);
        assert_eq!(DataType::ALL.len(), 54);
    }

    #[test]
    fn release_specific_members() {
        assert_eq!(ResourceType::ALL[0].as_str(), "Account");
        assert_eq!(ResourceType::ProcedureRequest.as_str(), "ProcedureRequest");
        assert_eq!(ResourceType::DataElement.as_str(), "DataElement");
        assert_eq!(ResourceType::ALL.last(), Some(&ResourceType::VisionPrescription));
        assert!(ResourceType::from_wire_tag("ServiceRequest").is_err());
        assert_eq!(DataType::ALL.last().map(DataType::as_str), Some("xhtml"));
        assert!(DataType::from_wire_tag("canonical").is_err());
    }
}
