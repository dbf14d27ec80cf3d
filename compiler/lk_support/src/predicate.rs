//! Predicate constructors over a subtype relation.
//!
//! Code generation filters candidate types and values with small predicates
//! built once and reused many times. Both constructors capture the base type
//! and the relation by reference; the returned closures are pure.

use crate::hierarchy::{ClassHierarchy, ClassId};

/// A subtype relation over type handles.
pub trait Subtyping {
    /// Type handle.
    type Ty: Copy;

    /// Whether `sub` is `sup` or one of its subtypes.
    fn is_subtype(&self, sub: Self::Ty, sup: Self::Ty) -> bool;
}

impl Subtyping for ClassHierarchy {
    type Ty = ClassId;

    #[inline]
    fn is_subtype(&self, sub: ClassId, sup: ClassId) -> bool {
        self.is_subclass(sub, sup)
    }
}

/// A value that knows its runtime type.
pub trait Instance {
    /// Type handle.
    type Ty;

    /// The value's concrete type.
    fn class(&self) -> Self::Ty;
}

/// Predicate accepting `base` and its subtypes.
///
/// An absent candidate is rejected rather than treated as an error.
pub fn type_check<'a, S>(types: &'a S, base: S::Ty) -> impl Fn(Option<S::Ty>) -> bool + 'a
where
    S: Subtyping + ?Sized,
    S::Ty: 'a,
{
    move |candidate| candidate.is_some_and(|ty| types.is_subtype(ty, base))
}

/// Predicate accepting values whose type is `base` or one of its subtypes.
pub fn type_check_instance<'a, S, V>(types: &'a S, base: S::Ty) -> impl Fn(&V) -> bool + 'a
where
    S: Subtyping + ?Sized,
    S::Ty: 'a,
    V: Instance<Ty = S::Ty> + ?Sized + 'a,
{
    move |value| types.is_subtype(value.class(), base)
}
