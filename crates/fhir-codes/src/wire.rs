//! Serde bridge between typed codes and their wire tags.
//!
//! Generated enums route their `Serialize`/`Deserialize` impls through here.
//! The functions also work with `#[serde(with = "fhir_codes::wire")]` on a
//! field of any [`FhirCode`] type.
//!
//! An unknown tag is a hard deserialization error. It is never mapped to a
//! fallback member.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

use crate::traits::FhirCode;

/// Serialize a code as its bare wire tag.
pub fn serialize<T, S>(code: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: FhirCode,
    S: Serializer,
{
    serializer.serialize_str(code.wire_tag())
}

/// Deserialize a code from its exact wire tag.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FhirCode,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(WireTagVisitor(PhantomData))
}

struct WireTagVisitor<T>(PhantomData<T>);

impl<T: FhirCode> Visitor<'_> for WireTagVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} code", T::SYSTEM.name)
    }

    fn visit_str<E>(self, value: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        T::from_wire_tag(value).map_err(E::custom)
    }
}
