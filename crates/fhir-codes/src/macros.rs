//! Declarative macro for code system tables.

/// Declare a code system as an enum plus its compiled-in table.
///
/// Each member line is `Variant = "wire-tag" => "description"`. The
/// description doubles as the variant's doc comment. The macro generates:
///
/// - the enum (`Debug`, `Clone`, `Copy`, `Eq`, `Hash`, `Ord` by declaration order)
/// - `ALL` and `as_str()`
/// - a [`FhirCode`](crate::FhirCode) impl with a lazily built index
/// - `Display` / `FromStr` / `AsRef<str>` through the wire tag
/// - serde `Serialize` / `Deserialize` as the bare wire tag
///
/// # Example
///
/// ```
/// use fhir_codes::{FhirCode, code_system};
///
/// code_system! {
///     /// Priority of a lab order.
///     pub enum LabPriority {
///         uri: "urn:example:lab-priority",
///         value_set: None,
///         version: "4.0.1",
///         description: "Priority of a lab order.",
///         members {
///             Routine = "routine" => "Normal turnaround.",
///             Stat = "stat" => "Immediately.",
///         }
///     }
/// }
///
/// assert_eq!(LabPriority::Stat.as_str(), "stat");
/// assert_eq!("routine".parse::<LabPriority>().unwrap(), LabPriority::Routine);
/// assert!(LabPriority::from_wire_tag("STAT").is_err());
/// ```
#[macro_export]
macro_rules! code_system {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            uri: $uri:expr,
            value_set: $value_set:expr,
            version: $version:expr,
            description: $description:expr,
            members {
                $( $variant:ident = $tag:literal => $doc:literal ),+ $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                #[doc = $doc]
                $variant,
            )+
        }

        impl $name {
            /// All members in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire tag used in serialized FHIR.
            pub fn as_str(&self) -> &'static str {
                <Self as $crate::FhirCode>::wire_tag(*self)
            }
        }

        impl $crate::FhirCode for $name {
            const SYSTEM: &'static $crate::CodeSystem = &$crate::CodeSystem {
                name: stringify!($name),
                canonical_uri: $uri,
                value_set: $value_set,
                description: $description,
                fhir_version: $version,
                members: &[$(
                    $crate::CodeValue {
                        system: stringify!($name),
                        symbol: stringify!($variant),
                        wire_tag: $tag,
                        description: $doc,
                    }
                ),+],
            };

            fn index() -> &'static $crate::CodeSystemIndex {
                static INDEX: ::std::sync::LazyLock<$crate::CodeSystemIndex> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::CodeSystemIndex::new(<$name as $crate::FhirCode>::SYSTEM)
                    });
                &INDEX
            }

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn position(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::TerminologyError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::FhirCode>::from_wire_tag(s)
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::wire::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::wire::deserialize(deserializer)
            }
        }
    };
}
