//! FHIR R4 (4.0.1) code systems.
//!
//! One module per code system. Each declares a typed enum through
//! [`code_system!`](crate::code_system) and is listed in [`INDEXES`], which
//! the built-in registry loads in order.

use crate::index::CodeSystemIndex;
use crate::traits::FhirCode;

mod administrative_gender;
mod bundle_type;
mod consent_data_meaning;
mod consent_provision_type;
mod consent_state;
mod contract_signer_type_codes;
mod data_type;
mod encounter_status;
mod encounter_type;
mod http_verb;
mod issue_severity;
mod issue_type;
mod narrative_status;
mod observation_status;
mod publication_status;
mod quantity_comparator;
mod resource_type;
mod validation_status;

pub use administrative_gender::AdministrativeGender;
pub use bundle_type::BundleType;
pub use consent_data_meaning::ConsentDataMeaning;
pub use consent_provision_type::ConsentProvisionType;
pub use consent_state::ConsentState;
pub use contract_signer_type_codes::ContractSignerTypeCodes;
pub use data_type::DataType;
pub use encounter_status::EncounterStatus;
pub use encounter_type::EncounterType;
pub use http_verb::HTTPVerb;
pub use issue_severity::IssueSeverity;
pub use issue_type::IssueType;
pub use narrative_status::NarrativeStatus;
pub use observation_status::ObservationStatus;
pub use publication_status::PublicationStatus;
pub use quantity_comparator::QuantityComparator;
pub use resource_type::ResourceType;
pub use validation_status::ValidationStatus;

/// FHIR release the tables were generated from.
pub const FHIR_VERSION: &str = "4.0.1";

/// Index accessors for every built-in code system, in load order.
pub static INDEXES: &[fn() -> &'static CodeSystemIndex] = &[
    AdministrativeGender::index,
    BundleType::index,
    ConsentDataMeaning::index,
    ConsentProvisionType::index,
    ConsentState::index,
    ContractSignerTypeCodes::index,
    DataType::index,
    EncounterStatus::index,
    EncounterType::index,
    HTTPVerb::index,
    IssueSeverity::index,
    IssueType::index,
    NarrativeStatus::index,
    ObservationStatus::index,
    PublicationStatus::index,
    QuantityComparator::index,
    ResourceType::index,
    ValidationStatus::index,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_is_tagged_with_the_release() {
        for index in INDEXES {
            assert_eq!(index().system().fhir_version, FHIR_VERSION);
        }
    }

    #[test]
    fn resource_types_keep_their_casing() {
        assert_eq!(ResourceType::Patient.as_str(), "Patient");
        assert_eq!(DataType::DateTime.as_str(), "dateTime");
        assert_eq!(DataType::Address.as_str(), "Address");
        assert_eq!(ResourceType::ALL.len(), 148);
        assert_eq!(DataType::ALL.len(), 63);
        assert_eq!(ContractSignerTypeCodes::ALL.len(), 48);
    }

    #[test]
    fn resource_type_boundaries() {
        assert_eq!(ResourceType::ALL.first(), Some(&ResourceType::Account));
        assert_eq!(
            ResourceType::ALL.last(),
            Some(&ResourceType::VisionPrescription)
        );
        for tag in [
            "Account",
            "ActivityDefinition",
            "Bundle",
            "ServiceRequest",
            "ValueSet",
            "VerificationResult",
            "VisionPrescription",
        ] {
            assert_eq!(ResourceType::from_wire_tag(tag).unwrap().as_str(), tag);
        }
        assert_eq!(
            ResourceType::VisionPrescription.description(),
            "An authorization for the provision of glasses and/or contact lenses to a patient."
        );
        assert!(ResourceType::from_wire_tag("ProcedureRequest").is_err());
    }
}
