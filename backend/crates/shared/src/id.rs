//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. The catalog entities carry
//! database-assigned numeric identities, so the wrapper is over `i64`
//! (`BIGSERIAL` on the Postgres side).

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type PaisId = Id<markers::Pais>;
/// let id = PaisId::new(1);
/// assert_eq!(id.value(), 1);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap an existing database identity
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying numeric value
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would put unnecessary bounds on the marker type.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Pais (country) IDs
    pub struct Pais;

    /// Marker for Ciudad (city) IDs
    pub struct Ciudad;

    /// Marker for login credential IDs
    pub struct Credential;
}

/// Type aliases for common IDs
pub type PaisId = Id<markers::Pais>;
pub type CiudadId = Id<markers::Ciudad>;
pub type CredentialId = Id<markers::Credential>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let pais_id: PaisId = Id::new(1);
        let ciudad_id: CiudadId = Id::new(1);

        // These are different types, cannot be mixed
        let _p: i64 = pais_id.into();
        let _c: i64 = ciudad_id.into();
    }

    #[test]
    fn test_id_roundtrip() {
        let id: PaisId = Id::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(PaisId::from(42), id);
    }

    #[test]
    fn test_id_ordering() {
        let a: CiudadId = Id::new(1);
        let b: CiudadId = Id::new(2);
        assert!(a < b);
        assert_eq!(a.max(b), b);
    }
}
