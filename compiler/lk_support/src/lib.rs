//! Generic support algorithms for the code generation pipeline.
//!
//! Everything here is independent of the concrete node, grammar, or type
//! definitions flowing through the pipeline:
//!
//! - [`struct_eq`]: opt-in structural equality over a declared field list
//! - [`hierarchy`]: class registry with precomputed linearizations
//! - [`ancestry`]: nearest common ancestor over root-first linearizations
//! - [`memo`]: argument-keyed cache around a pure function
//! - [`predicate`]: subtype / instance predicate constructors
//! - [`record`]: functional record update
//!
//! # Threading
//!
//! The toolkit targets a single-threaded, batch generation run. [`Memoized`]
//! is deliberately `!Sync`; hosts that share it across threads must
//! serialize access themselves.

pub mod ancestry;
pub mod hierarchy;
pub mod memo;
mod paths;
pub mod predicate;
pub mod record;
pub mod struct_eq;
mod text;

pub use ancestry::{common_ancestor, AncestryError};
pub use hierarchy::{ClassHierarchy, ClassId, HierarchyError};
pub use memo::{CallKey, CacheStats, Memoized};
pub use paths::file_dir;
pub use predicate::{type_check, type_check_instance, Instance, Subtyping};
pub use record::CopyWith;
pub use struct_eq::{struct_eq, EqKeys, FieldValue, StructEq};
pub use text::unescape;
