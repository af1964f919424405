//! FHIR releases with compiled-in code system tables.
//!
//! Each release ships its own table set. Several systems exist in more than
//! one release under the same name and canonical URI (`ResourceType`,
//! `DataType`), so a registry holds the tables of exactly one release.

use std::fmt;
use std::str::FromStr;

use crate::error::TerminologyError;
use crate::index::CodeSystemIndex;
use crate::{r4, stu3};

/// A FHIR release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FhirRelease {
    /// FHIR STU3 (3.0.1).
    Stu3,
    /// FHIR R4 (4.0.1).
    #[default]
    R4,
}

impl FhirRelease {
    /// Every release, oldest first.
    pub const ALL: &'static [FhirRelease] = &[FhirRelease::Stu3, FhirRelease::R4];

    /// Short release name.
    pub fn as_str(&self) -> &'static str {
        match self {
            FhirRelease::Stu3 => "STU3",
            FhirRelease::R4 => "R4",
        }
    }

    /// Full version string recorded on every table of the release.
    pub fn version(&self) -> &'static str {
        match self {
            FhirRelease::Stu3 => stu3::FHIR_VERSION,
            FhirRelease::R4 => r4::FHIR_VERSION,
        }
    }

    /// Index accessors of the release's tables, in load order.
    pub fn indexes(&self) -> &'static [fn() -> &'static CodeSystemIndex] {
        match self {
            FhirRelease::Stu3 => stu3::INDEXES,
            FhirRelease::R4 => r4::INDEXES,
        }
    }
}

impl fmt::Display for FhirRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FhirRelease {
    type Err = TerminologyError;

    /// Accepts the short name (case-insensitive) or the full version.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "STU3" | "3.0.1" => Ok(FhirRelease::Stu3),
            "R4" | "4.0.1" => Ok(FhirRelease::R4),
            _ => Err(TerminologyError::UnknownRelease {
                release: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_versions() {
        assert_eq!("r4".parse::<FhirRelease>().unwrap(), FhirRelease::R4);
        assert_eq!(" STU3 ".parse::<FhirRelease>().unwrap(), FhirRelease::Stu3);
        assert_eq!("3.0.1".parse::<FhirRelease>().unwrap(), FhirRelease::Stu3);
        assert_eq!(
            "R5".parse::<FhirRelease>().unwrap_err(),
            TerminologyError::UnknownRelease {
                release: "R5".to_string()
            }
        );
    }

    #[test]
    fn tables_carry_their_release_version() {
        for release in FhirRelease::ALL {
            assert!(!release.indexes().is_empty());
            for index in release.indexes() {
                assert_eq!(index().system().fhir_version, release.version(), "{release}");
            }
        }
    }

    #[test]
    fn default_is_r4() {
        assert_eq!(FhirRelease::default(), FhirRelease::R4);
        assert_eq!(FhirRelease::default().to_string(), "R4");
    }
}
