//! Serde support for branded values (feature-gated).
//!
//! A `Branded<T, B>` serializes as its inner `T`. Deserializing runs the
//! brand's constructor, so a document can never produce a branded value its
//! constructor would have rejected. Only brands implementing [`Brand`] can be
//! deserialized; brands built at runtime have no constructor to consult.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Brand, Branded};

impl<T, B> Serialize for Branded<T, B>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, B> Deserialize<'de> for Branded<T, B>
where
    T: Deserialize<'de>,
    B: Brand<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Branded::new(value).map_err(serde::de::Error::custom)
    }
}
