use std::fmt::Debug;
use std::hash::Hash;

/// A row-level value with a stable identity.
///
/// Two items with the same `id` are the same logical row. Equality must
/// cover every field the view draws: an item whose id is unchanged but which
/// compares unequal to its previous value is reloaded in place rather than
/// removed and inserted.
///
/// # Example
///
/// ```
/// use rowsync_core::Item;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Contact {
///     id: u64,
///     name: String,
/// }
///
/// impl Item for Contact {
///     type Id = u64;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
/// }
///
/// let a = Contact { id: 1, name: "Ada".into() };
/// let b = Contact { id: 1, name: "Ada L.".into() };
/// assert_eq!(a.id(), b.id());
/// assert_ne!(a, b);
/// ```
pub trait Item: Clone + PartialEq {
    /// Identity key; must never change for the lifetime of the logical row
    type Id: Clone + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;
}
