//! Serialization of Decimal.
//! Serialization to a string keeps every digit of the number.

use crate::num::Decimal;
use serde::{Serialize, Serializer};

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
