//! Functional record update.
//!
//! Produce a modified copy of a value without touching the original. Fields
//! that are not overridden are cloned, so `Rc`/`Arc` fields stay shared
//! between the original and the copy.

/// Copy-and-modify for any `Clone` value.
pub trait CopyWith: Clone {
    /// Clone `self`, apply `update` to the clone, and return it.
    #[must_use]
    fn copy_with(&self, update: impl FnOnce(&mut Self)) -> Self {
        let mut copy = self.clone();
        update(&mut copy);
        copy
    }
}

impl<T: Clone> CopyWith for T {}

/// Copy a value with named fields replaced.
///
/// ```
/// use lk_support::copy_with;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Field {
///     name: String,
///     nullable: bool,
/// }
///
/// let field = Field { name: "len".into(), nullable: false };
/// let nullable = copy_with!(field, nullable = true);
/// assert!(nullable.nullable);
/// assert!(!field.nullable);
/// ```
#[macro_export]
macro_rules! copy_with {
    ($value:expr, $($field:ident = $new:expr),+ $(,)?) => {{
        let mut copy = ::core::clone::Clone::clone(&$value);
        $(copy.$field = $new;)+
        copy
    }};
}
