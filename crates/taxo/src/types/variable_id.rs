use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, serializable identifier for a taxonomy variable.
///
/// `VariableId` wraps a 64-bit FNV-1a hash of the variable name. The same
/// logical variable rendered in several channels and levels hashes to the
/// same id, which is what highlight correlation and configuration-row keys
/// compare instead of repeated string equality.
///
/// # Example
///
/// ```
/// use taxo::VariableId;
///
/// const PRODUCT: VariableId = VariableId::from_name("TAX_Product");
///
/// assert_eq!(VariableId::from_name("TAX_Product"), PRODUCT);
/// assert_ne!(VariableId::from_name("TAX_Location"), PRODUCT);
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct VariableId(u64);

impl VariableId {
    /// Create a VariableId from a variable name at compile time.
    pub const fn from_name(name: &str) -> Self {
        Self(fnv1a_hash_str_64(name))
    }

    /// Get the raw hash value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VariableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VariableId({:016x})", self.0)
    }
}
