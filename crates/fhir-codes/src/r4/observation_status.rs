use super::FHIR_VERSION;

crate::code_system! {
    /// Status of an `Observation` result.
    pub enum ObservationStatus {
        uri: "http://hl7.org/fhir/observation-status",
        value_set: Some("http://hl7.org/fhir/ValueSet/observation-status"),
        version: FHIR_VERSION,
        description: "Codes providing the status of an observation.",
        members {
            Registered = "registered" =>
                "The existence of the observation is registered, but there is no result yet available.",
            Preliminary = "preliminary" =>
                "This is an initial or interim observation: data may be incomplete or unverified.",
            Final = "final" =>
                "The observation is complete and there are no further actions needed.",
            Amended = "amended" =>
                "Subsequent to being Final, the observation has been modified subsequent. This includes updates/new information and corrections.",
            Corrected = "corrected" =>
                "Subsequent to being Final, the observation has been modified to correct an error in the test result.",
            Cancelled = "cancelled" =>
                "The observation is unavailable because the measurement was not started or not completed (also sometimes called \"aborted\").",
            EnteredInError = "entered-in-error" =>
                "The observation has been withdrawn following previous final release. This electronic record should never have existed, though it is possible that real-world decisions were based on it. (If real-world activity has occurred, the status should be \"cancelled\" rather than \"entered-in-error\".).",
            Unknown = "unknown" =>
                "The authoring/source system does not know which of the status values currently applies for this observation. Note: This concept is not to be used for \"other\" - one of the listed statuses is presumed to apply, but the authoring/source system does not know which.",
        }
    }
}
