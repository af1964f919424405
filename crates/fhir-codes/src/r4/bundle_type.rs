use super::FHIR_VERSION;

crate::code_system! {
    /// Purpose of a `Bundle`.
    pub enum BundleType {
        uri: "http://hl7.org/fhir/bundle-type",
        value_set: Some("http://hl7.org/fhir/ValueSet/bundle-type"),
        version: FHIR_VERSION,
        description: "Indicates the purpose of a bundle - how it is intended to be used.",
        members {
            Document = "document" =>
                "The bundle is a document. The first resource is a Composition.",
            Message = "message" =>
                "The bundle is a message. The first resource is a MessageHeader.",
            Transaction = "transaction" =>
                "The bundle is a transaction - intended to be processed by a server as an atomic commit.",
            TransactionResponse = "transaction-response" =>
                "The bundle is a transaction response. Because the response is a transaction response, the transaction has succeeded, and all responses are error free.",
            Batch = "batch" =>
                "The bundle is a set of actions - intended to be processed by a server as a group of independent actions.",
            BatchResponse = "batch-response" =>
                "The bundle is a batch response. Note that as a batch, some responses may indicate failure and others success.",
            History = "history" =>
                "The bundle is a list of resources from a history interaction on a server.",
            Searchset = "searchset" =>
                "The bundle is a list of resources returned as a result of a search/query interaction, operation, or message.",
            Collection = "collection" =>
                "The bundle is a set of resources collected into a single package for ease of distribution that imposes no processing obligations or behavioral rules beyond persistence.",
        }
    }
}
