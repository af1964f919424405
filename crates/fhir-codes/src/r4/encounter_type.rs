use super::FHIR_VERSION;

crate::code_system! {
    /// Example codes for the type of service provided during an encounter.
    ///
    /// Tags may carry punctuation (`BD/BM-clin`) and are matched as-is.
    pub enum EncounterType {
        uri: "http://terminology.hl7.org/CodeSystem/encounter-type",
        value_set: Some("http://hl7.org/fhir/ValueSet/encounter-type"),
        version: FHIR_VERSION,
        description: "This example value set defines a set of codes that can be used to indicate the type of encounter: a specific code indicating type of service provided.",
        members {
            Adms = "ADMS" => "Annual diagnostic.",
            BdBmClin = "BD/BM-clin" => "Bone drilling/bone marrow punction in clinic.",
            Ccs60 = "CCS60" => "Infant colon screening - 60 minutes.",
            Oki = "OKI" => "Outpatient Kenacort injection.",
        }
    }
}
