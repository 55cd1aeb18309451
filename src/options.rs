//! Serialization options for a bit field.
//!
//! Options only decide the shape a field takes when it is converted to an
//! external representation. They never touch the stored bits and can be
//! changed at any point after construction.

/// External representation used when a bit field is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum JsonMode {
    /// List of set bit names, in declaration order.
    Array,
    /// Numeric value of the packed bits, or the target format's not-a-number
    /// convention when the field is wider than the exact-integer threshold.
    Number,
    /// Set bit names joined by a comma.
    StringList,
    #[default]
    /// Decimal digits of the full field value.
    StringBigint,
}

/// Options controlling the serialized shape of a [crate::field::NamedBits].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Representation used by the serialized form.
    pub json: JsonMode,
}

/// Partial update for [Options]. Supplied fields override, omitted fields
/// keep their current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionsUpdate {
    pub json: Option<JsonMode>,
}

impl Options {
    /// Shallow-merges `update` into `self`.
    pub fn merge(&mut self, update: OptionsUpdate) {
        if let Some(json) = update.json {
            self.json = json;
        }
    }
}
