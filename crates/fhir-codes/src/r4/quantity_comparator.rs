use super::FHIR_VERSION;

crate::code_system! {
    /// How a `Quantity` value should be understood.
    ///
    /// The wire tags are bare comparison operators.
    pub enum QuantityComparator {
        uri: "http://hl7.org/fhir/quantity-comparator",
        value_set: Some("http://hl7.org/fhir/ValueSet/quantity-comparator"),
        version: FHIR_VERSION,
        description: "How the Quantity should be understood and represented.",
        members {
            LessThan = "<" => "The actual value is less than the given value.",
            LessOrEqual = "<=" => "The actual value is less than or equal to the given value.",
            GreaterOrEqual = ">=" =>
                "The actual value is greater than or equal to the given value.",
            GreaterThan = ">" => "The actual value is greater than the given value.",
        }
    }
}
