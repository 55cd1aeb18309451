//! The named bit field: packed storage plus a name-to-position index.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::{
    bits::{self, MAX_NUMBER_BITS},
    errors::{AccessError, BuildError},
    options::{Options, OptionsUpdate},
};

/// A fixed-size bit field whose bits are addressed by name.
///
/// The name list given at construction fixes the size of the field, the
/// enumeration order, and the bit index of every name: the name at index 0
/// maps to the least significant bit of the packed value. Storage is one
/// byte per eight names, rounded up; the unnamed high bits of the last byte
/// stay unreachable by name.
///
/// The field is a plain value with no interior mutability. Every mutation is
/// a non-atomic read-modify-write behind `&mut self`, so sharing across
/// threads needs external synchronization.
#[derive(Debug, Clone)]
pub struct NamedBits {
    names: Vec<String>,
    bits: Vec<u8>,
    positions: HashMap<String, (usize, u8)>,
    options: Options,
}

impl NamedBits {
    /// Builds a field from an ordered list of unique names. Every bit starts
    /// cleared.
    ///
    /// Fails if the list is empty or contains a duplicate name.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, BuildError> {
        Self::with_options(names, Options::default())
    }

    /// Builds a field with explicit serialization options.
    pub fn with_options<S: AsRef<str>>(names: &[S], options: Options) -> Result<Self, BuildError> {
        if names.is_empty() {
            return Err(BuildError::MissingNames);
        }

        let unique: HashSet<&str> = names.iter().map(|name| name.as_ref()).collect();
        if unique.len() != names.len() {
            return Err(BuildError::DuplicateNames);
        }

        let names: Vec<String> = names.iter().map(|name| name.as_ref().to_string()).collect();

        let mut positions = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            positions.insert(name.clone(), bits::bit_position(index));
        }

        Ok(Self {
            bits: vec![0u8; (names.len() + 7) / 8],
            positions,
            names,
            options,
        })
    }

    fn locate(&self, name: &str) -> Result<(usize, u8), AccessError> {
        self.positions
            .get(name)
            .copied()
            .ok_or(AccessError::UnknownName)
    }

    /// Sets a bit to true. Returns the previous value of the bit.
    pub fn set(&mut self, name: &str) -> Result<bool, AccessError> {
        self.set_value(name, true)
    }

    /// Sets a bit to a specific value. Returns the previous value of the bit.
    pub fn set_value(&mut self, name: &str, value: bool) -> Result<bool, AccessError> {
        let (byte, bit) = self.locate(name)?;
        Ok(bits::write_bit(&mut self.bits, byte, bit, value))
    }

    /// Clears a bit (sets it to false). Returns the previous value of the bit.
    pub fn clear(&mut self, name: &str) -> Result<bool, AccessError> {
        self.set_value(name, false)
    }

    /// Toggles a bit. Returns the previous value of the bit.
    pub fn toggle(&mut self, name: &str) -> Result<bool, AccessError> {
        let current = self.get(name)?;
        self.set_value(name, !current)
    }

    /// Returns the value of a bit.
    pub fn get(&self, name: &str) -> Result<bool, AccessError> {
        let (byte, bit) = self.locate(name)?;
        Ok(bits::read_bit(&self.bits, byte, bit))
    }

    /// Sets all bits to true.
    ///
    /// Writes whole bytes, so the unnamed high bits of the last byte are set
    /// as well. They remain unreachable by name but show up in
    /// [to_number](Self::to_number) and [to_decimal](Self::to_decimal).
    pub fn set_all(&mut self) {
        self.bits.fill(0xFF);
    }

    /// Sets all bits to false.
    pub fn clear_all(&mut self) {
        self.bits.fill(0);
    }

    /// Merges `update` into the current options: supplied fields override,
    /// omitted fields keep their value. Stored bits are unaffected.
    pub fn set_options(&mut self, update: OptionsUpdate) {
        self.options.merge(update);
    }

    /// Current serialization options.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Bit names in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of named bits.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no bit is currently set.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&byte| byte == 0)
    }

    /// Packed storage, least significant byte first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Names of the set bits, in declaration order.
    pub fn to_array(&self) -> Vec<&str> {
        self.names
            .iter()
            .enumerate()
            .filter(|(index, _)| {
                let (byte, bit) = bits::bit_position(*index);
                bits::read_bit(&self.bits, byte, bit)
            })
            .map(|(_, name)| name.as_str())
            .collect()
    }

    /// Value of the bit field as a number, or NaN if the field is wider than
    /// [MAX_NUMBER_BITS] bits and the value could round.
    pub fn to_number(&self) -> f64 {
        if self.names.len() > MAX_NUMBER_BITS {
            return f64::NAN;
        }

        bits::fold_number(&self.bits)
    }

    /// Exact value of the bit field in decimal, for any field width.
    pub fn to_decimal(&self) -> String {
        bits::fold_decimal(&self.bits)
    }
}

/// Set bit names separated by a comma; empty when no bit is set.
impl fmt::Display for NamedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_array().join(","))
    }
}
