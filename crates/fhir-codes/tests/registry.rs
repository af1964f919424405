#![allow(missing_docs)]

use std::collections::HashSet;
use std::thread;

use fhir_codes::r4::{
    ConsentProvisionType, EncounterType, QuantityComparator, ResourceType, ValidationStatus,
};
use fhir_codes::{
    CodeRegistry, FhirCode, FhirRelease, RegistryConfig, TerminologyError, builtin, registry, stu3,
};

#[test]
fn consent_provision_type_deny() {
    assert_eq!(registry::decode("ConsentProvisionType", "deny").unwrap(), "Deny");
    assert_eq!(registry::encode("ConsentProvisionType", "Deny").unwrap(), "deny");
    assert_eq!(
        ConsentProvisionType::from_wire_tag("deny").unwrap(),
        ConsentProvisionType::Deny
    );
    assert_eq!(ConsentProvisionType::Deny.wire_tag(), "deny");
}

#[test]
fn encounter_type_keeps_punctuation() {
    assert_eq!(registry::decode("EncounterType", "BD/BM-clin").unwrap(), "BdBmClin");
    assert_eq!(registry::encode("EncounterType", "BdBmClin").unwrap(), "BD/BM-clin");
    assert_eq!(
        "BD/BM-clin".parse::<EncounterType>().unwrap(),
        EncounterType::BdBmClin
    );
    assert!(registry::decode("EncounterType", "BD BM clin").is_err());
    assert!(registry::decode("EncounterType", "BD/BM-clin ").is_err());
}

#[test]
fn validation_status_is_case_sensitive() {
    let err = registry::decode("ValidationStatus", "Successful").unwrap_err();
    assert_eq!(
        err,
        TerminologyError::UnknownWireTag {
            system: "ValidationStatus".to_string(),
            wire_tag: "Successful".to_string(),
        }
    );
    assert!(err.is_data_error());
    assert_eq!(
        ValidationStatus::from_wire_tag("successful").unwrap(),
        ValidationStatus::Successful
    );
}

#[test]
fn operator_tags_decode() {
    assert_eq!(registry::decode("QuantityComparator", "<=").unwrap(), "LessOrEqual");
    assert_eq!(QuantityComparator::GreaterThan.to_string(), ">");
    assert!(registry::decode("QuantityComparator", "=<").is_err());
}

#[test]
fn unknown_symbol_is_reported() {
    assert_eq!(
        registry::encode("ConsentProvisionType", "DENY").unwrap_err(),
        TerminologyError::UnknownSymbol {
            system: "ConsentProvisionType".to_string(),
            symbol: "DENY".to_string(),
        }
    );
    assert!(registry::describe("ConsentProvisionType", "Maybe").is_err());
}

#[test]
fn unknown_system_is_reported() {
    assert!(matches!(
        registry::decode("NoSuchSystem", "deny"),
        Err(TerminologyError::UnknownSystem { .. })
    ));
    assert!(registry::members("NoSuchSystem").is_err());
}

#[test]
fn every_builtin_table_loads() {
    let strict = CodeRegistry::load(&RegistryConfig::strict()).expect("strict load");
    assert_eq!(strict.len(), 18);
    assert_eq!(builtin().len(), 18);
    assert!(builtin().rejected().is_empty());
}

#[test]
fn round_trip_every_member() {
    let registry = builtin();
    for name in registry.system_names() {
        for member in registry.members(name).unwrap() {
            assert_eq!(member.system, name);
            let tag = registry.encode(name, member.symbol).unwrap();
            assert_eq!(registry.decode(name, tag).unwrap(), member.symbol);
            let symbol = registry.decode(name, member.wire_tag).unwrap();
            assert_eq!(registry.encode(name, symbol).unwrap(), member.wire_tag);
            assert_eq!(
                registry.describe(name, member.symbol).unwrap(),
                member.description
            );
        }
    }
}

#[test]
fn symbols_and_tags_are_pairwise_distinct() {
    let registry = builtin();
    for name in registry.system_names() {
        let members: Vec<_> = registry.members(name).unwrap().collect();
        let symbols: HashSet<_> = members.iter().map(|m| m.symbol).collect();
        let tags: HashSet<_> = members.iter().map(|m| m.wire_tag).collect();
        assert_eq!(symbols.len(), members.len(), "duplicate symbol in {name}");
        assert_eq!(tags.len(), members.len(), "duplicate wire tag in {name}");
        assert!(!members.is_empty(), "{name} has no members");
    }
}

#[test]
fn bogus_tag_fails_everywhere() {
    let registry = builtin();
    for name in registry.system_names() {
        let err = registry.decode(name, "not-a-real-tag").unwrap_err();
        assert!(
            matches!(err, TerminologyError::UnknownWireTag { .. }),
            "{name}: {err}"
        );
    }
}

#[test]
fn members_are_restartable_and_ordered() {
    let members = registry::members("ConsentState").unwrap();
    let first: Vec<_> = members.clone().map(|m| m.wire_tag).collect();
    let again: Vec<_> = members.map(|m| m.wire_tag).collect();
    assert_eq!(first, again);
    assert_eq!(
        first,
        vec!["draft", "proposed", "active", "rejected", "inactive", "entered-in-error"]
    );
}

#[test]
fn members_agree_across_threads() {
    let expected: Vec<_> = registry::members("IssueType").unwrap().collect();
    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| registry::members("IssueType").unwrap().collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn typed_enums_match_registry_order() {
    let tags: Vec<_> = EncounterType::all().iter().map(|c| c.wire_tag()).collect();
    let listed: Vec<_> = registry::members("EncounterType")
        .unwrap()
        .map(|m| m.wire_tag)
        .collect();
    assert_eq!(tags, listed);
    assert_eq!(EncounterType::Ccs60.position(), 2);
}

#[test]
fn system_metadata_resolves_by_uri() {
    let system = builtin()
        .system_by_uri("http://hl7.org/fhir/consent-provision-type")
        .unwrap();
    assert_eq!(system.name, "ConsentProvisionType");
    assert_eq!(
        system.value_set,
        Some("http://hl7.org/fhir/ValueSet/consent-provision-type")
    );
    assert_eq!(system.fhir_version, "4.0.1");
    assert!(matches!(
        builtin().system_by_uri("http://example.org/none"),
        Err(TerminologyError::UnknownUri { .. })
    ));
}

#[test]
fn lookups_return_shared_values() {
    let by_tag = builtin().lookup_wire_tag("EncounterType", "OKI").unwrap();
    let by_symbol = builtin().lookup_symbol("EncounterType", "Oki").unwrap();
    assert_eq!(by_tag, by_symbol);
    assert_eq!(by_tag, EncounterType::Oki.code_value());
    assert!(builtin().contains_wire_tag("EncounterType", "OKI"));
    assert!(!builtin().contains_wire_tag("EncounterType", "oki"));
}

#[test]
fn last_declared_resource_type_decodes() {
    assert_eq!(
        registry::decode("ResourceType", "VisionPrescription").unwrap(),
        "VisionPrescription"
    );
    let tags: Vec<_> = registry::members("ResourceType")
        .unwrap()
        .map(|m| m.wire_tag)
        .collect();
    assert_eq!(tags.len(), 148);
    assert_eq!(tags.first(), Some(&"Account"));
    assert_eq!(
        &tags[tags.len() - 3..],
        ["ValueSet", "VerificationResult", "VisionPrescription"]
    );
    assert_eq!(ResourceType::all().len(), tags.len());
}

#[test]
fn stu3_registry_decodes_its_own_tables() {
    let config = RegistryConfig::default().with_release(FhirRelease::Stu3);
    let registry = CodeRegistry::load(&config).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(
        registry.decode("ResourceType", "ReferralRequest").unwrap(),
        "ReferralRequest"
    );
    assert!(builtin().decode("ResourceType", "ReferralRequest").is_err());
    assert_eq!(
        "ReferralRequest".parse::<stu3::ResourceType>().unwrap(),
        stu3::ResourceType::ReferralRequest
    );
    assert_eq!(
        registry.system_by_uri("http://hl7.org/fhir/data-types").unwrap().fhir_version,
        "3.0.1"
    );

    // Round trip every STU3 member.
    for name in registry.system_names() {
        for member in registry.members(name).unwrap() {
            assert_eq!(registry.decode(name, member.wire_tag).unwrap(), member.symbol);
        }
    }
}
