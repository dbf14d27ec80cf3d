//! Opt-in structural equality.
//!
//! Value types declare their fields once (usually through
//! [`impl_struct_eq!`](crate::impl_struct_eq)) and get an equality that
//! compares a designated subset of those fields:
//!
//! - [`EqKeys::Only`]: exactly the listed fields
//! - [`EqKeys::Except`]: every declared field except the listed ones
//! - [`EqKeys::All`]: every declared field
//!
//! Instances of different concrete types never compare equal, even when
//! their fields happen to line up.
//!
//! # Example
//!
//! ```
//! use lk_support::impl_struct_eq;
//!
//! struct Rule {
//!     name: String,
//!     arity: usize,
//!     origin: u32,
//! }
//!
//! impl_struct_eq!(Rule { name, arity, origin } except [origin]);
//!
//! let a = Rule { name: "expr".into(), arity: 2, origin: 10 };
//! let b = Rule { name: "expr".into(), arity: 2, origin: 42 };
//! assert!(a == b);
//! ```

use std::any::Any;

/// Which declared fields participate in structural equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EqKeys {
    /// Compare every declared field.
    #[default]
    All,
    /// Compare exactly these fields.
    Only(&'static [&'static str]),
    /// Compare every declared field except these.
    Except(&'static [&'static str]),
}

/// A field value that can be compared against another, type-erased field.
///
/// Implemented for every `PartialEq + 'static` type. Fields of different
/// concrete types compare unequal.
pub trait FieldValue: Any {
    /// Type-erased view of the value.
    fn field_any(&self) -> &dyn Any;

    /// Compare against another field value.
    fn eq_field(&self, other: &dyn FieldValue) -> bool;
}

impl<T: PartialEq + Any> FieldValue for T {
    fn field_any(&self) -> &dyn Any {
        self
    }

    fn eq_field(&self, other: &dyn FieldValue) -> bool {
        other
            .field_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Structural equality capability.
///
/// Implementors enumerate their fields explicitly; nothing is discovered at
/// runtime. Types needing bespoke equality should implement `PartialEq`
/// directly instead.
pub trait StructEq: Any {
    /// All declared field names, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    /// Look up a declared field by name.
    fn field(&self, name: &str) -> Option<&dyn FieldValue>;

    /// Fields taking part in the comparison.
    fn eq_keys(&self) -> EqKeys {
        EqKeys::All
    }

    /// Type-erased view used for the concrete type check.
    fn as_any(&self) -> &dyn Any;
}

/// Compare two values structurally.
///
/// Returns `false` when the concrete types differ. A designated field that
/// is missing on either side makes the values unequal.
pub fn struct_eq(lhs: &dyn StructEq, rhs: &dyn StructEq) -> bool {
    if lhs.as_any().type_id() != rhs.as_any().type_id() {
        return false;
    }

    match lhs.eq_keys() {
        EqKeys::Only(keys) => keys.iter().all(|key| field_eq(lhs, rhs, key)),
        EqKeys::Except(excluded) => lhs
            .field_names()
            .iter()
            .filter(|name| !excluded.contains(*name))
            .all(|name| field_eq(lhs, rhs, name)),
        EqKeys::All => {
            lhs.field_names().len() == rhs.field_names().len()
                && lhs
                    .field_names()
                    .iter()
                    .all(|name| field_eq(lhs, rhs, name))
        }
    }
}

/// Whether `key` is one of `fields`. Usable in constant evaluation.
#[doc(hidden)]
pub const fn declares_field(fields: &[&str], key: &str) -> bool {
    let mut i = 0;
    while i < fields.len() {
        if const_str_eq(fields[i], key) {
            return true;
        }
        i += 1;
    }
    false
}

const fn const_str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[inline]
fn field_eq(lhs: &dyn StructEq, rhs: &dyn StructEq, name: &str) -> bool {
    match (lhs.field(name), rhs.field(name)) {
        (Some(a), Some(b)) => a.eq_field(b),
        _ => false,
    }
}

/// Implement [`StructEq`] and `PartialEq` for a struct from its field list.
///
/// ```text
/// impl_struct_eq!(Point { x, y });                         // all fields
/// impl_struct_eq!(Node { kind, span } only [kind]);        // inclusion set
/// impl_struct_eq!(Decl<T> { ty, text, loc } except [loc]); // exclusion set
/// ```
///
/// Generic parameters are bound by `PartialEq + 'static`. Keys named in
/// `only [..]` or `except [..]` must be declared fields; anything else is
/// rejected at compile time:
///
/// ```compile_fail
/// use lk_support::impl_struct_eq;
///
/// struct Node {
///     kind: u8,
/// }
///
/// impl_struct_eq!(Node { kind } only [knd]);
/// ```
#[macro_export]
macro_rules! impl_struct_eq {
    (@keys) => {
        $crate::struct_eq::EqKeys::All
    };
    (@keys only [$($key:ident),* $(,)?]) => {
        $crate::struct_eq::EqKeys::Only(&[$(stringify!($key)),*])
    };
    (@keys except [$($key:ident),* $(,)?]) => {
        $crate::struct_eq::EqKeys::Except(&[$(stringify!($key)),*])
    };
    (
        $name:ident $(<$($param:ident),+ $(,)?>)?
        { $($field:ident),+ $(,)? }
        $($mode:ident [$($key:ident),* $(,)?])?
    ) => {
        const _: () = {
            let declared: &[&str] = &[$(stringify!($field)),+];
            $($(
                assert!(
                    $crate::struct_eq::declares_field(declared, stringify!($key)),
                    concat!("`", stringify!($key), "` is not a declared field of `", stringify!($name), "`"),
                );
            )*)?
            let _ = declared;
        };

        impl $(<$($param: ::core::cmp::PartialEq + 'static),+>)? $crate::struct_eq::StructEq
            for $name $(<$($param),+>)?
        {
            fn field_names(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),+]
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::struct_eq::FieldValue> {
                match name {
                    $(stringify!($field) => ::core::option::Option::Some(
                        &self.$field as &dyn $crate::struct_eq::FieldValue,
                    ),)+
                    _ => ::core::option::Option::None,
                }
            }

            fn eq_keys(&self) -> $crate::struct_eq::EqKeys {
                $crate::impl_struct_eq!(@keys $($mode [$($key),*])?)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }

        impl $(<$($param: ::core::cmp::PartialEq + 'static),+>)? ::core::cmp::PartialEq
            for $name $(<$($param),+>)?
        {
            fn eq(&self, other: &Self) -> bool {
                $crate::struct_eq::struct_eq(self, other)
            }
        }
    };
}
