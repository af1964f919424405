use super::FHIR_VERSION;

crate::code_system! {
    /// Lifecycle status of a conformance or knowledge artifact.
    pub enum PublicationStatus {
        uri: "http://hl7.org/fhir/publication-status",
        value_set: Some("http://hl7.org/fhir/ValueSet/publication-status"),
        version: FHIR_VERSION,
        description: "The lifecycle status of an artifact.",
        members {
            Draft = "draft" =>
                "This resource is still under development and is not yet considered to be ready for normal use.",
            Active = "active" => "This resource is ready for normal use.",
            Retired = "retired" =>
                "This resource has been withdrawn or superseded and should no longer be used.",
            Unknown = "unknown" =>
                "The authoring system does not know which of the status values currently applies for this resource. Note: This concept is not to be used for \"other\" - one of the listed statuses is presumed to apply, it's just not known which one.",
        }
    }
}
