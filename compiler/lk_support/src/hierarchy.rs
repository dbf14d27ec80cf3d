//! Class registry with precomputed linearizations.
//!
//! Generated node types form a class hierarchy with multiple inheritance.
//! Instead of querying a live object model, every class gets its
//! linearization computed once, when it is defined, using the C3 merge.
//! Ancestor queries and subtype checks then operate on these explicit lists.
//!
//! # Design
//!
//! - Dense `ClassId` handles (index into the class table)
//! - Name index via `FxHashMap` for O(1) lookup
//! - Linearizations stored most-specific first, like a method resolution order

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::ancestry::{self, AncestryError};

/// Handle to a class registered in a [`ClassHierarchy`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    /// The universal root every class derives from.
    pub const ROOT: Self = Self(0);

    /// Create a handle from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Linearization storage. Most hierarchies are shallow.
type Linearization = SmallVec<[ClassId; 8]>;

/// Error when defining a class.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// A class with this name already exists.
    #[error("class `{name}` is already defined")]
    DuplicateClass { name: String },
    /// A base handle does not belong to this hierarchy.
    #[error("class `{name}` derives from unknown base {base:?}")]
    UnknownBase { name: String, base: ClassId },
    /// The same base appears twice in the base list.
    #[error("class `{name}` lists base `{base}` more than once")]
    DuplicateBase { name: String, base: String },
    /// The C3 merge found no consistent ordering.
    #[error("cannot linearize `{name}`: inconsistent base class order")]
    InconsistentHierarchy { name: String },
    /// The class table exceeded `u32::MAX` entries.
    #[error("class table overflow while defining `{name}`")]
    Overflow { name: String },
}

/// A registered class.
#[derive(Clone, Debug)]
pub struct ClassInfo {
    name: String,
    bases: SmallVec<[ClassId; 2]>,
    mro: Linearization,
}

impl ClassInfo {
    /// The class name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct bases, in declaration order.
    #[inline]
    pub fn bases(&self) -> &[ClassId] {
        &self.bases
    }

    /// Linearization, most specific first. Starts with the class itself and
    /// ends with [`ClassId::ROOT`].
    #[inline]
    pub fn mro(&self) -> &[ClassId] {
        &self.mro
    }
}

/// Registry of classes and their linearizations.
#[derive(Clone, Debug)]
pub struct ClassHierarchy {
    classes: Vec<ClassInfo>,
    by_name: FxHashMap<String, ClassId>,
}

impl ClassHierarchy {
    /// Create a hierarchy containing only the universal root class.
    pub fn new(root_name: impl Into<String>) -> Self {
        let name = root_name.into();
        let mut by_name = FxHashMap::default();
        by_name.insert(name.clone(), ClassId::ROOT);

        let mut mro = Linearization::new();
        mro.push(ClassId::ROOT);

        Self {
            classes: vec![ClassInfo {
                name,
                bases: SmallVec::new(),
                mro,
            }],
            by_name,
        }
    }

    /// The universal root class.
    #[inline]
    pub fn root(&self) -> ClassId {
        ClassId::ROOT
    }

    /// Define a new class deriving from `bases`.
    ///
    /// An empty base list derives from the root. The linearization is
    /// computed here and never changes afterwards.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        bases: &[ClassId],
    ) -> Result<ClassId, HierarchyError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(HierarchyError::DuplicateClass { name });
        }

        let bases: SmallVec<[ClassId; 2]> = if bases.is_empty() {
            SmallVec::from_slice(&[ClassId::ROOT])
        } else {
            SmallVec::from_slice(bases)
        };

        for (i, &base) in bases.iter().enumerate() {
            let Some(info) = self.get(base) else {
                return Err(HierarchyError::UnknownBase { name, base });
            };
            if bases[..i].contains(&base) {
                return Err(HierarchyError::DuplicateBase {
                    name,
                    base: info.name.clone(),
                });
            }
        }

        let Ok(raw) = u32::try_from(self.classes.len()) else {
            return Err(HierarchyError::Overflow { name });
        };
        let id = ClassId(raw);

        let mut sequences: Vec<Vec<ClassId>> = bases
            .iter()
            .map(|&base| self.classes[base.index()].mro.to_vec())
            .collect();
        sequences.push(bases.to_vec());

        let Some(tail) = c3_merge(sequences) else {
            return Err(HierarchyError::InconsistentHierarchy { name });
        };
        let mut mro = Linearization::with_capacity(tail.len() + 1);
        mro.push(id);
        mro.extend(tail);

        tracing::debug!(class = %name, ?id, depth = mro.len(), "defined class");

        self.by_name.insert(name.clone(), id);
        self.classes.push(ClassInfo { name, bases, mro });
        Ok(id)
    }

    /// Look up a class by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    /// Get the class registered under `id`.
    #[inline]
    pub fn get(&self, id: ClassId) -> Option<&ClassInfo> {
        self.classes.get(id.index())
    }

    /// Class name, or `None` for a foreign handle.
    #[inline]
    pub fn name(&self, id: ClassId) -> Option<&str> {
        self.get(id).map(ClassInfo::name)
    }

    /// Direct bases of `id`, in declaration order.
    #[inline]
    pub fn bases(&self, id: ClassId) -> &[ClassId] {
        self.get(id).map_or(&[][..], ClassInfo::bases)
    }

    /// Linearization of `id`, most specific first. Empty for a foreign handle.
    #[inline]
    pub fn mro(&self, id: ClassId) -> &[ClassId] {
        self.get(id).map_or(&[][..], ClassInfo::mro)
    }

    /// Ancestry of `id`, root first, ending with `id` itself.
    pub fn ancestry(&self, id: ClassId) -> impl Iterator<Item = ClassId> + '_ {
        self.mro(id).iter().rev().copied()
    }

    /// Whether `sub` is `base` or derives from it.
    #[inline]
    pub fn is_subclass(&self, sub: ClassId, base: ClassId) -> bool {
        self.mro(sub).contains(&base)
    }

    /// Most specific class that every one of `ids` derives from (inclusive).
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn common_ancestor(&self, ids: &[ClassId]) -> Result<ClassId, AncestryError> {
        ancestry::common_ancestor(ids.iter().map(|&id| self.ancestry(id)))
    }

    /// Number of registered classes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always `false`: the root class is registered on creation.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over all classes in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &ClassInfo)> {
        (0u32..)
            .zip(&self.classes)
            .map(|(raw, info)| (ClassId(raw), info))
    }
}

/// C3 merge of the base linearizations plus the base list itself.
///
/// Repeatedly takes the first head that appears in no sequence's tail.
/// Returns `None` when no such head exists while sequences remain.
fn c3_merge(mut sequences: Vec<Vec<ClassId>>) -> Option<Vec<ClassId>> {
    let mut merged = Vec::new();
    loop {
        sequences.retain(|seq| !seq.is_empty());
        if sequences.is_empty() {
            return Some(merged);
        }

        let candidate = sequences
            .iter()
            .map(|seq| seq[0])
            .find(|head| !sequences.iter().any(|seq| seq[1..].contains(head)))?;

        merged.push(candidate);
        for seq in &mut sequences {
            if seq[0] == candidate {
                seq.remove(0);
            }
        }
    }
}
