//! # namedbits
//!
//! A library for fixed-size bit fields whose bits are addressed by stable
//! names instead of numeric indices.
//!
//! Pass an ordered list of unique names to allocate a packed, byte-backed
//! bit vector. Each name maps to one bit position, set/clear/toggle/get
//! operate by name, and the field converts to a name list, a joined string,
//! a number, or an exact decimal value. With the `serde` feature enabled the
//! field serializes in a configurable shape when embedded in structured
//! output.
//!
//! ## Example
//!
//! ```
//! use namedbits::field::NamedBits;
//!
//! let mut flags = NamedBits::new(&["read", "write", "exec"]).unwrap();
//! flags.set("read").unwrap();
//! flags.set("exec").unwrap();
//!
//! assert_eq!(flags.get("write"), Ok(false));
//! assert_eq!(flags.to_array(), vec!["read", "exec"]);
//! assert_eq!(flags.to_string(), "read,exec");
//! assert_eq!(flags.to_number(), 5.0);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod options;
#[cfg(feature = "serde")]
pub mod serde;
