//! Immutable holders for generated source text.
//!
//! All artifacts compare structurally (see [`lk_support::struct_eq`]) so the
//! pipeline can deduplicate identical output.

use std::ops::Deref;

use lk_support::impl_struct_eq;

use crate::render::{ExtraArgs, Renderer, Visibility};

/// Error when constructing an artifact.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    /// Generated routines must be named.
    #[error("generated function name must not be empty")]
    EmptyName,
}

/// Declaration and implementation text of one generated routine.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawGeneratedFunction")
)]
pub struct GeneratedFunction {
    name: String,
    declaration: Option<String>,
    implementation: Option<String>,
}

impl_struct_eq!(GeneratedFunction {
    name,
    declaration,
    implementation
});

impl GeneratedFunction {
    /// Package a routine's output. `declaration` is `None` for routines
    /// without a public declaration.
    pub fn new(
        name: impl Into<String>,
        declaration: Option<String>,
        implementation: Option<String>,
    ) -> Result<Self, ArtifactError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ArtifactError::EmptyName);
        }
        Ok(Self {
            name,
            declaration,
            implementation,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    #[inline]
    pub fn implementation(&self) -> Option<&str> {
        self.implementation.as_deref()
    }
}

/// Unvalidated wire form of [`GeneratedFunction`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeneratedFunction {
    name: String,
    declaration: Option<String>,
    implementation: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGeneratedFunction> for GeneratedFunction {
    type Error = ArtifactError;

    fn try_from(raw: RawGeneratedFunction) -> Result<Self, ArtifactError> {
        Self::new(raw.name, raw.declaration, raw.implementation)
    }
}

/// A generated routine giving read access to one structure field.
///
/// Derefs to the underlying [`GeneratedFunction`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldAccessor<T> {
    function: GeneratedFunction,
    field: String,
    field_type: T,
    c_declaration: String,
}

impl_struct_eq!(FieldAccessor<T> {
    function,
    field,
    field_type,
    c_declaration
});

impl<T> FieldAccessor<T> {
    pub fn new(
        function: GeneratedFunction,
        field: impl Into<String>,
        field_type: T,
        c_declaration: impl Into<String>,
    ) -> Self {
        Self {
            function,
            field: field.into(),
            field_type,
            c_declaration: c_declaration.into(),
        }
    }

    /// The accessor routine itself.
    #[inline]
    pub fn function(&self) -> &GeneratedFunction {
        &self.function
    }

    /// Name of the accessed field.
    #[inline]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Type descriptor of the accessed field.
    #[inline]
    pub fn field_type(&self) -> &T {
        &self.field_type
    }

    /// Low-level declaration used for interop signatures.
    #[inline]
    pub fn c_declaration(&self) -> &str {
        &self.c_declaration
    }
}

impl<T> Deref for FieldAccessor<T> {
    type Target = GeneratedFunction;

    fn deref(&self) -> &GeneratedFunction {
        &self.function
    }
}

/// Rendered declaration of one generated type.
///
/// Both parts come from the same template and environment and differ only
/// in the visibility flag, so the private part extends the public one.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDeclaration<T> {
    ty: T,
    public_part: String,
    private_part: String,
}

impl_struct_eq!(TypeDeclaration<T> {
    ty,
    public_part,
    private_part
});

impl<T> TypeDeclaration<T> {
    pub fn new(ty: T, public_part: impl Into<String>, private_part: impl Into<String>) -> Self {
        Self {
            ty,
            public_part: public_part.into(),
            private_part: private_part.into(),
        }
    }

    /// Render `template` once per visibility and package both parts.
    ///
    /// The public part is rendered first. Both calls receive the same
    /// template, environment and extra arguments. If either render fails,
    /// its error is returned as is and no declaration is built.
    pub fn render<R>(
        renderer: &R,
        template: &str,
        env: &R::Env,
        ty: T,
        extra: &ExtraArgs,
    ) -> Result<Self, R::Error>
    where
        R: Renderer + ?Sized,
    {
        let public_part = renderer.render(template, env, Visibility::Public, extra)?;
        let private_part = renderer.render(template, env, Visibility::Private, extra)?;

        tracing::debug!(
            template,
            public_len = public_part.len(),
            private_len = private_part.len(),
            "rendered type declaration"
        );

        Ok(Self {
            ty,
            public_part,
            private_part,
        })
    }

    /// The declared source type.
    #[inline]
    pub fn ty(&self) -> &T {
        &self.ty
    }

    #[inline]
    pub fn public_part(&self) -> &str {
        &self.public_part
    }

    #[inline]
    pub fn private_part(&self) -> &str {
        &self.private_part
    }
}

/// Parsing code generated for one grammar rule.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedParser<S> {
    name: String,
    spec: S,
    body: String,
}

impl_struct_eq!(GeneratedParser<S> { name, spec, body });

impl<S> GeneratedParser<S> {
    pub fn new(name: impl Into<String>, spec: S, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spec,
            body: body.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rule specification this parser was generated from.
    #[inline]
    pub fn spec(&self) -> &S {
        &self.spec
    }

    #[inline]
    pub fn body(&self) -> &str {
        &self.body
    }
}
