#![allow(missing_docs)]

use fhir_codes::{ConflictKind, DoctorReport, FhirCode, builtin, r4, stu3};

fhir_codes::code_system! {
    enum Triage {
        uri: "urn:test:triage",
        value_set: None,
        version: "4.0.1",
        description: "Triage colour.",
        members {
            Red = "red" => "Immediate.",
            Green = "green" => "Minor.",
        }
    }
}

fhir_codes::code_system! {
    enum Flags {
        uri: "urn:test:flags",
        value_set: Some("urn:test:flags-vs"),
        version: "4.0.1",
        description: "Broken on purpose.",
        members {
            Up = "up" => "Up.",
            Down = "up" => "Down, but tagged up.",
            Padded = " pad" => "Tag with a leading space.",
        }
    }
}

#[test]
fn doctor_report_snapshot() {
    let report = DoctorReport::inspect([Triage::index(), Flags::index(), Triage::index()]);
    assert!(!report.is_clean());

    insta::assert_json_snapshot!(report, @r#"
    {
      "schema": "fhir-codes.registry-doctor",
      "schema_version": 1,
      "fhir_versions": [
        "4.0.1"
      ],
      "counts": {
        "systems": 3,
        "members": 7,
        "conflicts": 4
      },
      "systems": [
        {
          "name": "Triage",
          "canonical_uri": "urn:test:triage",
          "members": 2
        },
        {
          "name": "Flags",
          "canonical_uri": "urn:test:flags",
          "value_set": "urn:test:flags-vs",
          "members": 3
        },
        {
          "name": "Triage",
          "canonical_uri": "urn:test:triage",
          "members": 2
        }
      ],
      "conflicts": [
        {
          "system": "Flags",
          "kind": "duplicate_wire_tag",
          "value": "up",
          "positions": [
            0,
            1
          ]
        },
        {
          "system": "Flags",
          "kind": "untrimmed_wire_tag",
          "value": " pad",
          "positions": [
            2
          ]
        },
        {
          "system": "Triage",
          "kind": "duplicate_system",
          "value": "Triage",
          "positions": [
            0,
            2
          ]
        },
        {
          "system": "Triage",
          "kind": "duplicate_uri",
          "value": "urn:test:triage",
          "positions": [
            0,
            2
          ]
        }
      ]
    }
    "#);
}

#[test]
fn broken_table_is_indexed_first_wins() {
    assert_eq!(Flags::from_wire_tag("up").unwrap(), Flags::Up);
    assert_eq!(Flags::Down.wire_tag(), "up");
    assert!(Flags::index().check_bijection().is_err());
    assert!(
        Flags::index()
            .conflicts()
            .iter()
            .any(|c| c.kind == ConflictKind::DuplicateWireTag)
    );
}

#[test]
fn broken_table_is_refused_by_registry() {
    let mut registry = fhir_codes::CodeRegistry::new();
    registry.register::<Triage>().unwrap();
    assert!(registry.register::<Flags>().is_err());
    assert_eq!(registry.len(), 1);
}

#[test]
fn builtin_tables_are_clean() {
    let report = builtin().doctor();
    assert!(report.is_clean(), "{:?}", report.conflicts);
    assert_eq!(report.counts.systems, 18);
    assert_eq!(report.fhir_versions, vec!["4.0.1".to_string()]);
    assert_eq!(
        report.counts.members,
        report.systems.iter().map(|s| s.members).sum::<usize>()
    );
}

#[test]
fn mixed_releases_are_flagged() {
    let report = DoctorReport::inspect([r4::ResourceType::index(), stu3::ResourceType::index()]);
    assert_eq!(report.fhir_versions, vec!["3.0.1".to_string(), "4.0.1".to_string()]);
    assert_eq!(report.counts.members, 148 + 119);
    let kinds: Vec<_> = report.conflicts.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![ConflictKind::DuplicateSystem, ConflictKind::DuplicateUri]
    );
}
