//! Serialized form of a bit field.
//!
//! The field serializes through a manual [Serialize] impl so that the mode
//! configured at runtime decides the output shape. [JsonMode] itself derives
//! its serde impls in [crate::options] and round-trips as a `snake_case`
//! string, so the mode can live in a caller's configuration file.

use serde::{Serialize, Serializer};

use crate::{field::NamedBits, options::JsonMode};

impl Serialize for NamedBits {
    /// Serializes per the configured `json` option: a list of set names, a
    /// numeric value (the format's not-a-number convention when the field is
    /// wider than the exact-integer threshold), a comma-joined string, or the
    /// decimal digits of the full value.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.options().json {
            JsonMode::Array => self.to_array().serialize(serializer),
            JsonMode::Number => {
                let value = self.to_number();
                if value.is_nan() {
                    serializer.serialize_unit()
                } else {
                    serializer.serialize_u64(value as u64)
                }
            }
            JsonMode::StringList => serializer.collect_str(self),
            JsonMode::StringBigint => serializer.serialize_str(&self.to_decimal()),
        }
    }
}
