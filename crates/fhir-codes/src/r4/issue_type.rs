use super::FHIR_VERSION;

crate::code_system! {
    /// Type of an `OperationOutcome` issue.
    pub enum IssueType {
        uri: "http://hl7.org/fhir/issue-type",
        value_set: Some("http://hl7.org/fhir/ValueSet/issue-type"),
        version: FHIR_VERSION,
        description: "A code that describes the type of issue.",
        members {
            Invalid = "invalid" => "Content invalid against the specification or a profile.",
            Structure = "structure" =>
                "A structural issue in the content such as wrong namespace, unable to parse the content completely, invalid syntax, etc.",
            Required = "required" => "A required element is missing.",
            Value = "value" => "An element or header value is invalid.",
            Invariant = "invariant" => "A content validation rule failed - e.g. a schematron rule.",
            Security = "security" =>
                "An authentication/authorization/permissions issue of some kind.",
            Login = "login" => "The client needs to initiate an authentication process.",
            Unknown = "unknown" =>
                "The user or system was not able to be authenticated (either there is no process, or the proferred token is unacceptable).",
            Expired = "expired" => "User session expired; a login may be required.",
            Forbidden = "forbidden" => "The user does not have the rights to perform this action.",
            Suppressed = "suppressed" =>
                "Some information was not or might not have been returned due to business rules, consent or privacy rules, or access permission constraints. This information may be accessible through alternate processes.",
            Processing = "processing" =>
                "Processing issues. These are expected to be final e.g. there is no point resubmitting the same content unchanged.",
            NotSupported = "not-supported" =>
                "The interaction, operation, resource or profile is not supported.",
            Duplicate = "duplicate" => "An attempt was made to create a duplicate record.",
            MultipleMatches = "multiple-matches" =>
                "Multiple matching records were found when the operation required only one match.",
            NotFound = "not-found" =>
                "The reference provided was not found. In a pure RESTful environment, this would be an HTTP 404 error, but this code may be used where the content is not found further into the application architecture.",
            Deleted = "deleted" =>
                "The reference pointed to content (usually a resource) that has been deleted.",
            TooLong = "too-long" =>
                "Provided content is too long (typically, this is a denial of service protection type of error).",
            CodeInvalid = "code-invalid" =>
                "The code or system could not be understood, or it was not valid in the context of a particular ValueSet.code.",
            Extension = "extension" =>
                "An extension was found that was not acceptable, could not be resolved, or a modifierExtension was not recognized.",
            TooCostly = "too-costly" =>
                "The operation was stopped to protect server resources; e.g. a request for a value set expansion on all of SNOMED CT.",
            BusinessRule = "business-rule" =>
                "The content/operation failed to pass some business rule and so could not proceed.",
            Conflict = "conflict" =>
                "Content could not be accepted because of an edit conflict (i.e. version aware updates). (In a pure RESTful environment, this would be an HTTP 409 error, but this code may be used where the conflict is discovered further into the application architecture.).",
            Transient = "transient" =>
                "Transient processing issues. The system receiving the message may be able to resubmit the same content once an underlying issue is resolved.",
            LockError = "lock-error" =>
                "A resource/record locking failure (usually in an underlying database).",
            NoStore = "no-store" =>
                "The persistent store is unavailable; e.g. the database is down for maintenance or similar action, and the interaction or operation cannot be processed.",
            Exception = "exception" => "An unexpected internal error has occurred.",
            Timeout = "timeout" => "An internal timeout has occurred.",
            Incomplete = "incomplete" =>
                "Not all data sharing the same search parameters was returned.",
            Throttled = "throttled" =>
                "The system is not prepared to handle this request due to load management.",
            Informational = "informational" =>
                "A message unrelated to the processing success of the completed operation (examples of the latter include things like reminders of password expiry, system maintenance times, etc.).",
        }
    }
}
