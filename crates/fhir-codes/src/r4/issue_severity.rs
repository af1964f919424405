use super::FHIR_VERSION;

crate::code_system! {
    /// Severity of an `OperationOutcome` issue.
    pub enum IssueSeverity {
        uri: "http://hl7.org/fhir/issue-severity",
        value_set: Some("http://hl7.org/fhir/ValueSet/issue-severity"),
        version: FHIR_VERSION,
        description: "How the issue affects the success of the action.",
        members {
            Fatal = "fatal" =>
                "The issue caused the action to fail and no further checking could be performed.",
            Error = "error" => "The issue is sufficiently important to cause the action to fail.",
            Warning = "warning" =>
                "The issue is not important enough to cause the action to fail but may cause it to be performed suboptimally or in a way that is not as desired.",
            Information = "information" =>
                "The issue has no relation to the degree of success of the action.",
        }
    }
}
