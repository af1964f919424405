use super::FHIR_VERSION;

crate::code_system! {
    /// Whether a consent rule permits or denies the actions it matches.
    pub enum ConsentProvisionType {
        uri: "http://hl7.org/fhir/consent-provision-type",
        value_set: Some("http://hl7.org/fhir/ValueSet/consent-provision-type"),
        version: FHIR_VERSION,
        description: "How a rule statement is applied, such as adding additional consent or removing consent.",
        members {
            Deny = "deny" => "Consent is denied for actions meeting these rules.",
            Permit = "permit" => "Consent is provided for actions meeting these rules.",
        }
    }
}
