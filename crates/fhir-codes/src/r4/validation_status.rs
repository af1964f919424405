use super::FHIR_VERSION;

crate::code_system! {
    /// Outcome of validating a target against its primary source.
    pub enum ValidationStatus {
        uri: "http://terminology.hl7.org/CodeSystem/validation-status",
        value_set: Some("http://hl7.org/fhir/ValueSet/verificationresult-validation-status"),
        version: FHIR_VERSION,
        description: "Status of the validation of the target against the primary source.",
        members {
            Successful = "successful" => "The validation was successful.",
            Failed = "failed" => "The validation failed.",
            Unknown = "unknown" => "The validation status is unknown.",
        }
    }
}
