use super::FHIR_VERSION;

crate::code_system! {
    /// Status of a resource narrative.
    pub enum NarrativeStatus {
        uri: "http://hl7.org/fhir/narrative-status",
        value_set: Some("http://hl7.org/fhir/ValueSet/narrative-status"),
        version: FHIR_VERSION,
        description: "The status of a resource narrative.",
        members {
            Generated = "generated" =>
                "The contents of the narrative are entirely generated from the core elements in the content.",
            Extensions = "extensions" =>
                "The contents of the narrative are entirely generated from the core elements in the content and some of the content is generated from extensions. The narrative SHALL reflect the impact of all modifier extensions.",
            Additional = "additional" =>
                "The contents of the narrative may contain additional information not found in the structured data. Note that there is no computable way to determine what the extra information is, other than by human inspection.",
            Empty = "empty" =>
                "The contents of the narrative are some equivalent of \"No human-readable text provided in this case\".",
        }
    }
}
