//! Error types for field construction and named bit access.

/// Errors produced when building a [crate::field::NamedBits] from a name list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Name list is empty.
    MissingNames,
    /// Name list contains the same name more than once.
    DuplicateNames,
}

/// Errors produced when addressing a bit by name (e.g. during
/// [crate::field::NamedBits::set]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// Name was not part of the list the field was built from.
    UnknownName,
}
