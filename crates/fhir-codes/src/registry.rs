//! Code registry: bidirectional symbol / wire-tag lookup across code systems.
//!
//! The registry maps a system name to the shared [`CodeSystemIndex`] of that
//! system. It holds no per-call state and is safe to read from any number of
//! threads; the built-in instance is created once behind a [`LazyLock`].
//!
//! # Example
//!
//! ```
//! use fhir_codes::registry;
//!
//! assert_eq!(registry::decode("ConsentProvisionType", "deny").unwrap(), "Deny");
//! assert_eq!(registry::encode("EncounterType", "BdBmClin").unwrap(), "BD/BM-clin");
//! assert!(registry::decode("ValidationStatus", "Successful").is_err());
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::code::{CodeSystem, CodeValue};
use crate::doctor::DoctorReport;
use crate::error::{Result, TerminologyError};
use crate::index::CodeSystemIndex;
use crate::release::FhirRelease;
use crate::traits::FhirCode;

/// Members of a code system in declaration order.
///
/// The iterator is lazy and finite. Clone it to restart.
pub type Members = std::slice::Iter<'static, CodeValue>;

/// Configuration for loading the built-in tables.
#[derive(Debug, Clone, Default)]
pub struct RegistryConfig {
    /// Release whose tables are loaded.
    pub release: FhirRelease,
    /// Fail the load when a table is rejected instead of logging and skipping it.
    pub strict: bool,
    /// Only load these systems (by name). `None` loads every built-in table.
    pub systems: Option<Vec<String>>,
}

impl RegistryConfig {
    /// Strict configuration loading every built-in table.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Load the tables of another release.
    pub fn with_release(mut self, release: FhirRelease) -> Self {
        self.release = release;
        self
    }

    /// Restrict loading to the named systems.
    pub fn with_systems<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.systems = Some(names.into_iter().map(Into::into).collect());
        self
    }

    fn wants(&self, name: &str) -> bool {
        self.systems
            .as_ref()
            .is_none_or(|names| names.iter().any(|n| n == name))
    }
}

/// Registry of code systems keyed by system name.
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    /// Indexes by system name.
    systems: HashMap<&'static str, &'static CodeSystemIndex>,
    /// System name by canonical URI.
    by_uri: HashMap<&'static str, &'static str>,
    /// System names in registration order.
    order: Vec<&'static str>,
    /// Tables refused during a lenient load.
    rejected: Vec<&'static CodeSystemIndex>,
}

impl CodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the built-in tables of the configured release.
    ///
    /// With `strict` unset this is [`CodeRegistry::load_lenient`] and never
    /// fails. With `strict` set, an unknown allow-list name or a rejected
    /// table fails the load.
    pub fn load(config: &RegistryConfig) -> Result<Self> {
        if !config.strict {
            return Ok(Self::load_lenient(config));
        }

        let indexes = config.release.indexes();
        if let Some(names) = &config.systems {
            if let Some(name) = names.iter().find(|name| !is_known(indexes, name)) {
                return Err(TerminologyError::unknown_system(name));
            }
        }

        let mut registry = Self::new();
        for index in indexes {
            let index = index();
            if config.wants(index.name()) {
                registry.register_index(index)?;
            }
        }
        registry.log_loaded(config.release);
        Ok(registry)
    }

    /// Load the built-in tables of the configured release, skipping bad ones.
    ///
    /// The `strict` flag is ignored. An unknown allow-list name is logged. A
    /// rejected table is logged, kept for [`CodeRegistry::doctor`], and left
    /// out of the registry.
    pub fn load_lenient(config: &RegistryConfig) -> Self {
        let indexes = config.release.indexes();
        if let Some(names) = &config.systems {
            for name in names.iter().filter(|name| !is_known(indexes, name)) {
                tracing::warn!(
                    system = %name,
                    release = %config.release,
                    "Requested code system is not built in"
                );
            }
        }

        let mut registry = Self::new();
        for index in indexes {
            let index = index();
            if !config.wants(index.name()) {
                continue;
            }
            if let Err(err) = registry.register_index(index) {
                tracing::warn!(system = %index.name(), error = %err, "Rejected code system table");
                registry.rejected.push(index);
            }
        }
        registry.log_loaded(config.release);
        registry
    }

    fn log_loaded(&self, release: FhirRelease) {
        tracing::debug!(
            release = %release,
            systems = self.len(),
            rejected = self.rejected.len(),
            "Loaded code registry"
        );
    }

    /// Register a typed code system.
    pub fn register<T: FhirCode>(&mut self) -> Result<()> {
        self.register_index(T::index())
    }

    /// Register a code system index.
    ///
    /// Fails if the name or canonical URI is already taken, or if the table
    /// breaks the symbol/wire-tag bijection.
    pub fn register_index(&mut self, index: &'static CodeSystemIndex) -> Result<()> {
        let system = index.system();

        if self.systems.contains_key(system.name) {
            return Err(TerminologyError::DuplicateSystem {
                system: system.name.to_string(),
            });
        }
        if let Some(existing) = self.by_uri.get(system.canonical_uri) {
            return Err(TerminologyError::DuplicateUri {
                system: system.name.to_string(),
                uri: system.canonical_uri.to_string(),
                existing: (*existing).to_string(),
            });
        }
        index.check_bijection()?;

        self.systems.insert(system.name, index);
        self.by_uri.insert(system.canonical_uri, system.name);
        self.order.push(system.name);
        Ok(())
    }

    /// Index of a registered system.
    pub fn index(&self, system: &str) -> Result<&'static CodeSystemIndex> {
        self.systems
            .get(system)
            .copied()
            .ok_or_else(|| TerminologyError::unknown_system(system))
    }

    /// Metadata of a registered system.
    pub fn system(&self, name: &str) -> Result<&'static CodeSystem> {
        Ok(self.index(name)?.system())
    }

    /// Resolve a canonical URI (e.g. a `Coding.system` value) to its system.
    pub fn system_by_uri(&self, uri: &str) -> Result<&'static CodeSystem> {
        let name = self
            .by_uri
            .get(uri)
            .ok_or_else(|| TerminologyError::UnknownUri {
                uri: uri.to_string(),
            })?;
        self.system(name)
    }

    /// Wire tag of a symbol.
    pub fn encode(&self, system: &str, symbol: &str) -> Result<&'static str> {
        Ok(self.lookup_symbol(system, symbol)?.wire_tag)
    }

    /// Symbol carrying an exact wire tag.
    ///
    /// Comparison is byte-for-byte: no trimming, no case folding.
    pub fn decode(&self, system: &str, wire_tag: &str) -> Result<&'static str> {
        Ok(self.lookup_wire_tag(system, wire_tag)?.symbol)
    }

    /// Description of a symbol.
    pub fn describe(&self, system: &str, symbol: &str) -> Result<&'static str> {
        Ok(self.lookup_symbol(system, symbol)?.description)
    }

    /// Members of a system in declaration order.
    pub fn members(&self, system: &str) -> Result<Members> {
        Ok(self.index(system)?.members())
    }

    /// Member declared under a symbol.
    pub fn lookup_symbol(&self, system: &str, symbol: &str) -> Result<&'static CodeValue> {
        self.index(system)?.by_symbol(symbol)
    }

    /// Member carrying a wire tag.
    pub fn lookup_wire_tag(&self, system: &str, wire_tag: &str) -> Result<&'static CodeValue> {
        self.index(system)?.by_wire_tag(wire_tag)
    }

    /// Returns true if the system is registered and defines this wire tag.
    pub fn contains_wire_tag(&self, system: &str, wire_tag: &str) -> bool {
        self.index(system)
            .is_ok_and(|index| index.contains_wire_tag(wire_tag))
    }

    /// Registered system names in registration order.
    pub fn system_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }

    /// Number of registered systems.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tables refused during a lenient load.
    pub fn rejected(&self) -> &[&'static CodeSystemIndex] {
        &self.rejected
    }

    /// Integrity report over registered and rejected tables.
    pub fn doctor(&self) -> DoctorReport {
        let registered = self.order.iter().filter_map(|name| self.systems.get(name));
        DoctorReport::inspect(registered.chain(self.rejected.iter()).copied())
    }
}

static BUILTIN: LazyLock<CodeRegistry> =
    LazyLock::new(|| CodeRegistry::load_lenient(&RegistryConfig::default()));

/// The process-wide registry of every built-in FHIR R4 code system.
pub fn builtin() -> &'static CodeRegistry {
    &BUILTIN
}

fn is_known(indexes: &[fn() -> &'static CodeSystemIndex], name: &str) -> bool {
    indexes.iter().any(|index| index().name() == name)
}

/// [`CodeRegistry::encode`] on the built-in registry.
pub fn encode(system: &str, symbol: &str) -> Result<&'static str> {
    builtin().encode(system, symbol)
}

/// [`CodeRegistry::decode`] on the built-in registry.
pub fn decode(system: &str, wire_tag: &str) -> Result<&'static str> {
    builtin().decode(system, wire_tag)
}

/// [`CodeRegistry::describe`] on the built-in registry.
pub fn describe(system: &str, symbol: &str) -> Result<&'static str> {
    builtin().describe(system, symbol)
}

/// [`CodeRegistry::members`] on the built-in registry.
pub fn members(system: &str) -> Result<Members> {
    builtin().members(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r4::{BundleType, ConsentProvisionType, IssueSeverity};
    use crate::{r4, stu3};

    #[test]
    fn register_rejects_duplicate_name() {
        let mut registry = CodeRegistry::new();
        registry.register::<BundleType>().unwrap();
        let err = registry.register::<BundleType>().unwrap_err();
        assert_eq!(
            err,
            TerminologyError::DuplicateSystem {
                system: "BundleType".to_string()
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn unknown_system_is_reported() {
        let registry = CodeRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.decode("BundleType", "batch"),
            Err(TerminologyError::UnknownSystem { .. })
        ));
        assert!(!registry.contains_wire_tag("BundleType", "batch"));
    }

    #[test]
    fn registration_order_is_kept() {
        let mut registry = CodeRegistry::new();
        registry.register::<IssueSeverity>().unwrap();
        registry.register::<ConsentProvisionType>().unwrap();
        let names: Vec<_> = registry.system_names().collect();
        assert_eq!(names, vec!["IssueSeverity", "ConsentProvisionType"]);
    }

    #[test]
    fn config_filters_systems() {
        let config = RegistryConfig::strict().with_systems(["BundleType", "HTTPVerb"]);
        let registry = CodeRegistry::load(&config).unwrap();
        assert_eq!(registry.len(), 2);
        assert!(registry.system("HTTPVerb").is_ok());
        assert!(registry.system("ResourceType").is_err());
    }

    #[test]
    fn strict_config_rejects_unknown_names() {
        let config = RegistryConfig::strict().with_systems(["NoSuchSystem"]);
        assert_eq!(
            CodeRegistry::load(&config).unwrap_err(),
            TerminologyError::UnknownSystem {
                system: "NoSuchSystem".to_string()
            }
        );

        let lenient = RegistryConfig::default().with_systems(["NoSuchSystem"]);
        assert!(CodeRegistry::load(&lenient).unwrap().is_empty());
        assert!(CodeRegistry::load_lenient(&lenient).is_empty());
    }

    #[test]
    fn missing_uri_is_not_reported_as_a_system() {
        let err = builtin()
            .system_by_uri("http://example.org/none")
            .unwrap_err();
        assert_eq!(
            err,
            TerminologyError::UnknownUri {
                uri: "http://example.org/none".to_string()
            }
        );
        assert!(err.is_data_error());
    }

    #[test]
    fn release_selects_the_table_set() {
        let config = RegistryConfig::strict().with_release(FhirRelease::Stu3);
        let registry = CodeRegistry::load(&config).unwrap();
        assert_eq!(registry.system_names().collect::<Vec<_>>(), ["DataType", "ResourceType"]);
        assert_eq!(
            registry.decode("ResourceType", "ProcedureRequest").unwrap(),
            "ProcedureRequest"
        );
        assert!(registry.decode("ResourceType", "ServiceRequest").is_err());
        assert_eq!(registry.system("ResourceType").unwrap().fhir_version, "3.0.1");

        // R4-only systems are not part of STU3.
        let config = RegistryConfig::strict()
            .with_release(FhirRelease::Stu3)
            .with_systems(["BundleType"]);
        assert!(matches!(
            CodeRegistry::load(&config),
            Err(TerminologyError::UnknownSystem { .. })
        ));
    }

    #[test]
    fn releases_do_not_share_a_registry() {
        let mut registry = CodeRegistry::new();
        registry.register::<r4::ResourceType>().unwrap();
        assert_eq!(
            registry.register::<stu3::ResourceType>().unwrap_err(),
            TerminologyError::DuplicateSystem {
                system: "ResourceType".to_string()
            }
        );
    }

    #[test]
    fn builtin_registry_is_fully_loaded_r4() {
        assert_eq!(builtin().len(), r4::INDEXES.len());
        assert!(builtin().rejected().is_empty());
        assert_eq!(
            builtin().decode("ResourceType", "VisionPrescription").unwrap(),
            "VisionPrescription"
        );
    }
}
