//! Interface to the external template renderer.

use std::collections::BTreeMap;
use std::fmt;

/// Which part of a declaration a render produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// The publicly exposed part.
    Public,
    /// The implementation-private part.
    Private,
}

impl Visibility {
    /// The template flag: `true` for the private part.
    #[inline]
    pub const fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => f.write_str("public"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

/// Additional named template arguments, sorted by name.
pub type ExtraArgs = BTreeMap<String, String>;

/// Turns a template name plus an environment into text.
///
/// Implementations may block on template I/O. Every call either returns the
/// complete text or fails; the error is handed back to the caller untouched.
pub trait Renderer {
    /// Template variable environment.
    type Env: ?Sized;
    /// Template resolution or rendering failure.
    type Error;

    /// Render `template` for the given part of a declaration.
    fn render(
        &self,
        template: &str,
        env: &Self::Env,
        visibility: Visibility,
        extra: &ExtraArgs,
    ) -> Result<String, Self::Error>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    type Env = R::Env;
    type Error = R::Error;

    #[inline]
    fn render(
        &self,
        template: &str,
        env: &Self::Env,
        visibility: Visibility,
        extra: &ExtraArgs,
    ) -> Result<String, Self::Error> {
        (**self).render(template, env, visibility, extra)
    }
}
