//! Container element trait

use crate::traits::Printable;
use crate::types::Typed;

/// Values that can be stored in vectors, matrices and [`Any`](crate::any::Any)
///
/// `create` supplies the value that fills new slots when a container grows.
/// It is not always the type's `Default`: characters start as `'a'`.
pub trait Element: Clone + PartialEq + Printable + Typed + 'static {
    /// Returns the value used for freshly created slots
    fn create() -> Self;
}
