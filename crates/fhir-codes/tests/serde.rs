#![allow(missing_docs)]

use fhir_codes::r4::{
    ConsentProvisionType, ConsentState, NarrativeStatus, ObservationStatus, QuantityComparator,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Provision {
    #[serde(rename = "type")]
    provision_type: ConsentProvisionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    provision: Vec<Provision>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Consent {
    resource_type: String,
    status: ConsentState,
    provision: Provision,
}

#[test]
fn codes_serialize_as_wire_tags() {
    let consent = Consent {
        resource_type: "Consent".to_string(),
        status: ConsentState::EnteredInError,
        provision: Provision {
            provision_type: ConsentProvisionType::Deny,
            provision: vec![Provision {
                provision_type: ConsentProvisionType::Permit,
                provision: vec![],
            }],
        },
    };

    let json = serde_json::to_value(&consent).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "resourceType": "Consent",
            "status": "entered-in-error",
            "provision": {
                "type": "deny",
                "provision": [{ "type": "permit" }]
            }
        })
    );

    let back: Consent = serde_json::from_value(json).unwrap();
    assert_eq!(back, consent);
}

#[test]
fn unknown_tag_is_a_hard_error() {
    let err = serde_json::from_str::<ConsentState>("\"Active\"").unwrap_err();
    assert!(
        err.to_string()
            .contains("Wire tag 'Active' is not defined by code system ConsentState"),
        "{err}"
    );

    let err = serde_json::from_str::<Consent>(
        r#"{"resourceType":"Consent","status":"active","provision":{"type":"maybe"}}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("maybe"), "{err}");
}

#[test]
fn non_string_input_is_rejected() {
    let err = serde_json::from_str::<NarrativeStatus>("3").unwrap_err();
    assert!(err.to_string().contains("a NarrativeStatus code"), "{err}");
}

#[test]
fn operator_tags_survive_json() {
    let json = serde_json::to_string(&QuantityComparator::LessOrEqual).unwrap();
    assert_eq!(json, "\"<=\"");
    let back: QuantityComparator = serde_json::from_str(&json).unwrap();
    assert_eq!(back, QuantityComparator::LessOrEqual);
}

#[derive(Debug, Serialize, Deserialize)]
struct Reading {
    #[serde(with = "fhir_codes::wire")]
    status: ObservationStatus,
}

#[test]
fn wire_module_works_as_field_adapter() {
    let reading: Reading = serde_json::from_str(r#"{"status":"preliminary"}"#).unwrap();
    assert_eq!(reading.status, ObservationStatus::Preliminary);
    assert_eq!(
        serde_json::to_string(&reading).unwrap(),
        r#"{"status":"preliminary"}"#
    );
}
