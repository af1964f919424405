use super::FHIR_VERSION;

crate::code_system! {
    /// HTTP verb of a `Bundle.entry.request`.
    pub enum HTTPVerb {
        uri: "http://hl7.org/fhir/http-verb",
        value_set: Some("http://hl7.org/fhir/ValueSet/http-verb"),
        version: FHIR_VERSION,
        description: "HTTP verbs (in the HTTP command line). See the HTTP RFC for details.",
        members {
            Get = "GET" => "HTTP GET Command.",
            Head = "HEAD" => "HTTP HEAD Command.",
            Post = "POST" => "HTTP POST Command.",
            Put = "PUT" => "HTTP PUT Command.",
            Delete = "DELETE" => "HTTP DELETE Command.",
            Patch = "PATCH" => "HTTP PATCH Command.",
        }
    }
}
