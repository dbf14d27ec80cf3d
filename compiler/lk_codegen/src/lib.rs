//! Generated artifact model.
//!
//! A generation pass turns grammar rules and node types into source text by
//! rendering templates. The results are captured here as immutable values:
//!
//! - [`GeneratedFunction`]: one routine's declaration and implementation
//! - [`FieldAccessor`]: a routine reading one field of a generated structure
//! - [`TypeDeclaration`]: public and private parts of one type declaration
//! - [`GeneratedParser`]: parsing code generated for one grammar rule
//!
//! Rendering itself is delegated to a [`Renderer`]; this crate only fixes
//! how renders are sequenced and how their output is packaged. Documentation
//! chunks for the generated bindings are laid out by [`doc`].

mod artifact;
pub mod doc;
mod render;

pub use artifact::{
    ArtifactError, FieldAccessor, GeneratedFunction, GeneratedParser, TypeDeclaration,
};
pub use doc::{DocLang, DocPrinter};
pub use render::{ExtraArgs, Renderer, Visibility};
