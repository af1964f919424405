//! Bidirectional lookup index for one code system.
//!
//! The index holds two maps built once from the declared members:
//! symbol -> position and wire tag -> position. Every lookup is a single
//! hash probe; nothing is scanned per call.
//!
//! Building never fails. If a table breaks the symbol/wire-tag bijection the
//! first declaration wins and the clash is recorded as a [`Conflict`], which
//! the registry refuses to accept and the doctor report lists.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Serialize;

use crate::code::{CodeSystem, CodeValue};
use crate::error::{Result, TerminologyError};

/// Kind of integrity problem found in a code system table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Two members share a symbol.
    DuplicateSymbol,
    /// Two members share a wire tag.
    DuplicateWireTag,
    /// A member has an empty wire tag.
    EmptyWireTag,
    /// A wire tag has leading or trailing whitespace.
    UntrimmedWireTag,
    /// The system declares no members.
    EmptySystem,
    /// A second system with the same name.
    DuplicateSystem,
    /// A second system with the same canonical URI.
    DuplicateUri,
}

impl ConflictKind {
    /// Returns true if the conflict breaks the symbol/wire-tag bijection.
    pub fn breaks_bijection(&self) -> bool {
        matches!(self, Self::DuplicateSymbol | Self::DuplicateWireTag)
    }
}

/// An integrity problem found while indexing a code system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conflict {
    /// Code system the problem belongs to.
    pub system: String,
    /// What went wrong.
    pub kind: ConflictKind,
    /// The offending symbol, wire tag, name or URI.
    pub value: String,
    /// Declaration positions involved (first, then the clashing one).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
}

/// Precomputed lookup maps for one code system.
#[derive(Debug, Clone)]
pub struct CodeSystemIndex {
    system: &'static CodeSystem,
    by_symbol: HashMap<&'static str, usize>,
    by_wire_tag: HashMap<&'static str, usize>,
    conflicts: Vec<Conflict>,
}

impl CodeSystemIndex {
    /// Index a code system.
    pub fn new(system: &'static CodeSystem) -> Self {
        let mut by_symbol = HashMap::with_capacity(system.members.len());
        let mut by_wire_tag = HashMap::with_capacity(system.members.len());
        let mut conflicts = Vec::new();

        if system.members.is_empty() {
            conflicts.push(Conflict {
                system: system.name.to_string(),
                kind: ConflictKind::EmptySystem,
                value: system.name.to_string(),
                positions: Vec::new(),
            });
        }

        for (position, member) in system.members.iter().enumerate() {
            match by_symbol.entry(member.symbol) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(first) => conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::DuplicateSymbol,
                    value: member.symbol.to_string(),
                    positions: vec![*first.get(), position],
                }),
            }

            match by_wire_tag.entry(member.wire_tag) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(first) => conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::DuplicateWireTag,
                    value: member.wire_tag.to_string(),
                    positions: vec![*first.get(), position],
                }),
            }

            if member.wire_tag.is_empty() {
                conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::EmptyWireTag,
                    value: member.symbol.to_string(),
                    positions: vec![position],
                });
            } else if member.wire_tag.trim() != member.wire_tag {
                conflicts.push(Conflict {
                    system: system.name.to_string(),
                    kind: ConflictKind::UntrimmedWireTag,
                    value: member.wire_tag.to_string(),
                    positions: vec![position],
                });
            }
        }

        for conflict in &conflicts {
            tracing::warn!(
                system = %conflict.system,
                kind = ?conflict.kind,
                value = %conflict.value,
                "Code system table conflict"
            );
        }

        Self {
            system,
            by_symbol,
            by_wire_tag,
            conflicts,
        }
    }

    /// The indexed code system.
    pub fn system(&self) -> &'static CodeSystem {
        self.system
    }

    /// Name of the indexed code system.
    pub fn name(&self) -> &'static str {
        self.system.name
    }

    /// Problems found while indexing.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Fail if the table breaks the symbol/wire-tag bijection.
    pub fn check_bijection(&self) -> Result<()> {
        match self.conflicts.iter().find(|c| c.kind.breaks_bijection()) {
            None => Ok(()),
            Some(conflict) if conflict.kind == ConflictKind::DuplicateSymbol => {
                Err(TerminologyError::DuplicateSymbol {
                    system: conflict.system.clone(),
                    symbol: conflict.value.clone(),
                })
            }
            Some(conflict) => Err(TerminologyError::DuplicateWireTag {
                system: conflict.system.clone(),
                wire_tag: conflict.value.clone(),
            }),
        }
    }

    /// Declaration position of a symbol.
    pub fn position_of_symbol(&self, symbol: &str) -> Result<usize> {
        self.by_symbol
            .get(symbol)
            .copied()
            .ok_or_else(|| TerminologyError::unknown_symbol(self.system.name, symbol))
    }

    /// Declaration position of a wire tag (exact, case-sensitive match).
    pub fn position_of_wire_tag(&self, wire_tag: &str) -> Result<usize> {
        self.by_wire_tag
            .get(wire_tag)
            .copied()
            .ok_or_else(|| TerminologyError::unknown_wire_tag(self.system.name, wire_tag))
    }

    /// Member declared under a symbol.
    pub fn by_symbol(&self, symbol: &str) -> Result<&'static CodeValue> {
        let members: &'static [CodeValue] = self.system.members;
        Ok(&members[self.position_of_symbol(symbol)?])
    }

    /// Member carrying a wire tag.
    pub fn by_wire_tag(&self, wire_tag: &str) -> Result<&'static CodeValue> {
        let members: &'static [CodeValue] = self.system.members;
        Ok(&members[self.position_of_wire_tag(wire_tag)?])
    }

    /// Returns true if a member carries exactly this wire tag.
    pub fn contains_wire_tag(&self, wire_tag: &str) -> bool {
        self.by_wire_tag.contains_key(wire_tag)
    }

    /// Members in declaration order.
    pub fn members(&self) -> std::slice::Iter<'static, CodeValue> {
        let members: &'static [CodeValue] = self.system.members;
        members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn value(symbol: &'static str, wire_tag: &'static str) -> CodeValue {
        CodeValue {
            system: "Sample",
            symbol,
            wire_tag,
            description: "",
        }
    }

    const fn system(members: &'static [CodeValue]) -> CodeSystem {
        CodeSystem {
            name: "Sample",
            canonical_uri: "urn:test:sample",
            value_set: None,
            description: "",
            fhir_version: "4.0.1",
            members,
        }
    }

    static CLEAN_MEMBERS: [CodeValue; 2] = [value("Low", "low"), value("High", "HIGH")];
    static CLASHING_MEMBERS: [CodeValue; 3] = [
        value("Low", "low"),
        value("Lower", "low"),
        value("Low", "other"),
    ];
    static SLOPPY_MEMBERS: [CodeValue; 2] = [value("Blank", ""), value("Padded", " padded")];

    static CLEAN: CodeSystem = system(&CLEAN_MEMBERS);
    static CLASHING: CodeSystem = system(&CLASHING_MEMBERS);
    static SLOPPY: CodeSystem = system(&SLOPPY_MEMBERS);
    static EMPTY: CodeSystem = system(&[]);

    #[test]
    fn lookups_are_exact() {
        let index = CodeSystemIndex::new(&CLEAN);
        assert!(index.conflicts().is_empty());
        assert_eq!(index.position_of_wire_tag("HIGH").unwrap(), 1);
        assert_eq!(index.by_symbol("Low").unwrap().wire_tag, "low");
        assert!(index.position_of_wire_tag("high").is_err());
        assert!(index.position_of_wire_tag(" low").is_err());
        assert!(index.contains_wire_tag("low"));
        assert!(!index.contains_wire_tag("LOW"));
    }

    #[test]
    fn first_declaration_wins_on_clash() {
        let index = CodeSystemIndex::new(&CLASHING);
        assert_eq!(index.by_wire_tag("low").unwrap().symbol, "Low");
        assert_eq!(index.position_of_symbol("Low").unwrap(), 0);

        let kinds: Vec<_> = index.conflicts().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ConflictKind::DuplicateWireTag, ConflictKind::DuplicateSymbol]
        );
        assert_eq!(index.conflicts()[0].positions, vec![0, 1]);
        assert_eq!(
            index.check_bijection(),
            Err(TerminologyError::DuplicateWireTag {
                system: "Sample".to_string(),
                wire_tag: "low".to_string(),
            })
        );
    }

    #[test]
    fn hygiene_problems_do_not_break_bijection() {
        let index = CodeSystemIndex::new(&SLOPPY);
        let kinds: Vec<_> = index.conflicts().iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![ConflictKind::EmptyWireTag, ConflictKind::UntrimmedWireTag]
        );
        assert!(index.check_bijection().is_ok());
    }

    #[test]
    fn empty_system_is_reported() {
        let index = CodeSystemIndex::new(&EMPTY);
        assert_eq!(index.conflicts()[0].kind, ConflictKind::EmptySystem);
        assert_eq!(index.members().count(), 0);
    }
}
