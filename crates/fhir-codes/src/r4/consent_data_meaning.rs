use super::FHIR_VERSION;

crate::code_system! {
    /// How a resource reference is interpreted when testing consent restrictions.
    pub enum ConsentDataMeaning {
        uri: "http://hl7.org/fhir/consent-data-meaning",
        value_set: Some("http://hl7.org/fhir/ValueSet/consent-data-meaning"),
        version: FHIR_VERSION,
        description: "How a resource reference is interpreted when testing consent restrictions.",
        members {
            Instance = "instance" =>
                "The consent applies directly to the instance of the resource.",
            Related = "related" =>
                "The consent applies directly to the instance of the resource and instances it refers to.",
            Dependents = "dependents" =>
                "The consent applies directly to the instance of the resource and instances that refer to it.",
            Authoredby = "authoredby" =>
                "The consent applies to instances of resources that are authored by.",
        }
    }
}
