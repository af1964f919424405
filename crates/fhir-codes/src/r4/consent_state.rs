use super::FHIR_VERSION;

crate::code_system! {
    /// Lifecycle state of a `Consent`.
    pub enum ConsentState {
        uri: "http://hl7.org/fhir/consent-state-codes",
        value_set: Some("http://hl7.org/fhir/ValueSet/consent-state-codes"),
        version: FHIR_VERSION,
        description: "Indicates the state of the consent.",
        members {
            Draft = "draft" =>
                "The consent is in development or awaiting use but is not yet intended to be acted upon.",
            Proposed = "proposed" =>
                "The consent has been proposed but not yet agreed to by all parties. The negotiation stage.",
            Active = "active" => "The consent is to be followed and enforced.",
            Rejected = "rejected" => "The consent has been rejected by one or more of the parties.",
            Inactive = "inactive" => "The consent is terminated or replaced.",
            EnteredInError = "entered-in-error" =>
                "The consent was created wrongly (e.g. wrong patient) and should be ignored.",
        }
    }
}
