use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::index::{CodeSystemIndex, Conflict, ConflictKind};

#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub fhir_versions: Vec<String>,
    pub counts: DoctorCounts,
    pub systems: Vec<SystemSummary>,
    pub conflicts: Vec<Conflict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorCounts {
    pub systems: usize,
    pub members: usize,
    pub conflicts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemSummary {
    pub name: String,
    pub canonical_uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,
    pub members: usize,
}

impl DoctorReport {
    /// Inspect indexed tables in the given order.
    ///
    /// Collects the per-table conflicts and adds cross-table ones: a system
    /// name or canonical URI seen more than once.
    pub fn inspect<'a, I>(indexes: I) -> Self
    where
        I: IntoIterator<Item = &'a CodeSystemIndex>,
    {
        let mut systems = Vec::new();
        let mut conflicts = Vec::new();
        let mut fhir_versions = BTreeSet::new();
        let mut names: HashMap<&str, usize> = HashMap::new();
        let mut uris: HashMap<&str, usize> = HashMap::new();

        for (position, index) in indexes.into_iter().enumerate() {
            let system = index.system();
            fhir_versions.insert(system.fhir_version.to_string());

            if let Some(first) = names.insert(system.name, position) {
                conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::DuplicateSystem,
                    value: system.name.to_string(),
                    positions: vec![first, position],
                });
            }
            if let Some(first) = uris.insert(system.canonical_uri, position) {
                conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::DuplicateUri,
                    value: system.canonical_uri.to_string(),
                    positions: vec![first, position],
                });
            }

            conflicts.extend(index.conflicts().iter().cloned());
            systems.push(SystemSummary {
                name: system.name.to_string(),
                canonical_uri: system.canonical_uri.to_string(),
                value_set: system.value_set.map(str::to_string),
                members: system.len(),
            });
        }

        Self {
            schema: "fhir-codes.registry-doctor".to_string(),
            schema_version: 1,
            fhir_versions: fhir_versions.into_iter().collect(),
            counts: DoctorCounts {
                systems: systems.len(),
                members: systems.iter().map(|s| s.members).sum(),
                conflicts: conflicts.len(),
            },
            systems,
            conflicts,
        }
    }

    /// Returns true if no table has a conflict.
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}
