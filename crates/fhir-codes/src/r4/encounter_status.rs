use super::FHIR_VERSION;

crate::code_system! {
    /// Current state of an `Encounter`.
    pub enum EncounterStatus {
        uri: "http://hl7.org/fhir/encounter-status",
        value_set: Some("http://hl7.org/fhir/ValueSet/encounter-status"),
        version: FHIR_VERSION,
        description: "Current state of the encounter.",
        members {
            Planned = "planned" => "The Encounter has not yet started.",
            Arrived = "arrived" =>
                "The Patient is present for the encounter, however is not currently meeting with a practitioner.",
            Triaged = "triaged" =>
                "The patient has been assessed for the priority of their treatment based on the severity of their condition.",
            InProgress = "in-progress" =>
                "The Encounter has begun and the patient is present / the practitioner and the patient are meeting.",
            Onleave = "onleave" =>
                "The Encounter has begun, but the patient is temporarily on leave.",
            Finished = "finished" => "The Encounter has ended.",
            Cancelled = "cancelled" => "The Encounter has ended before it has begun.",
            EnteredInError = "entered-in-error" =>
                "This instance should not have been part of this patient's medical record.",
            Unknown = "unknown" =>
                "The encounter status is unknown. Note that \"unknown\" is a value of last resort and every attempt should be made to provide a meaningful value other than \"unknown\".",
        }
    }
}
