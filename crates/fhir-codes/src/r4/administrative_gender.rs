use super::FHIR_VERSION;

crate::code_system! {
    /// Gender of a person used for administrative purposes.
    pub enum AdministrativeGender {
        uri: "http://hl7.org/fhir/administrative-gender",
        value_set: Some("http://hl7.org/fhir/ValueSet/administrative-gender"),
        version: FHIR_VERSION,
        description: "The gender of a person used for administrative purposes.",
        members {
            Male = "male" => "Male.",
            Female = "female" => "Female.",
            Other = "other" => "Other.",
            Unknown = "unknown" => "Unknown.",
        }
    }
}
