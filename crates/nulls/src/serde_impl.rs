//! `serde` support: absent values serialize as none.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::nullable::{Nullable, Primitive};

impl<T: Primitive> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.valid {
            self.value.serialize_present(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Primitive> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(T::deserialize_option(deserializer)?.into())
    }
}
