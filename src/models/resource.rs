//! The generic resource abstraction shared by every managed entity.

use std::fmt::{Debug, Display};

/// A persisted record with a storage-assigned id and one unique key.
///
/// Implementations only describe their shape; creation, lookup, conflict
/// detection and patching are written once against this trait.
pub trait Resource: Clone + Debug + Send + Sync + 'static {
    /// Field set accepted on creation (everything except the id).
    type New: Clone + Debug + Send + Sync + 'static;
    /// Sparse field set accepted on update.
    type Patch: Patch<Self> + Debug + Send + 'static;
    /// Type of the unique key column.
    type Key: Clone + Debug + Display + PartialEq + Send + Sync + 'static;

    /// Singular, human readable name used in error messages and logs.
    const NAME: &'static str;
    /// Column holding the unique key.
    const KEY_FIELD: &'static str;

    fn id(&self) -> i32;

    fn key(&self) -> &Self::Key;

    fn new_key(new: &Self::New) -> &Self::Key;

    /// Builds the stored record from its creation fields and assigned id.
    fn from_new(id: i32, new: Self::New) -> Self;
}

/// A sparse update: only supplied fields are written to the target.
pub trait Patch<E> {
    fn apply_to(self, target: &mut E);
}

/// Overwrites `target` when a value was supplied.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
