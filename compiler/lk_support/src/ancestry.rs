//! Nearest common ancestor over explicit linearizations.
//!
//! Every participating type supplies its ancestry root-first, ending with the
//! type itself. The resolver walks all sequences in lock-step and keeps the
//! last position where they still agree, which is the most specific type
//! that is an ancestor (inclusive) of every input.
//!
//! ```text
//! [Root, Shape, Circle]
//! [Root, Shape, Square]
//!        ^^^^^ common ancestor
//! ```

/// Error from [`common_ancestor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AncestryError {
    /// No types were supplied. Callers must guard against this.
    #[error("common ancestor requested for an empty set of types")]
    Empty,
    /// The linearizations disagree at the root position.
    #[error("types do not share a common root ancestor")]
    NoCommonRoot,
}

/// Return the most specific ancestor shared by every linearization.
///
/// Each item of `linearizations` is one type's ancestry, ordered root-first.
/// The walk stops at the first position where the sequences disagree or one
/// of them is exhausted.
pub fn common_ancestor<T, I, L>(linearizations: I) -> Result<T, AncestryError>
where
    T: PartialEq,
    I: IntoIterator<Item = L>,
    L: IntoIterator<Item = T>,
{
    let mut walkers: Vec<L::IntoIter> = linearizations
        .into_iter()
        .map(IntoIterator::into_iter)
        .collect();
    if walkers.is_empty() {
        return Err(AncestryError::Empty);
    }

    let mut common = None;
    let mut depth = 0_usize;
    loop {
        let mut heads = walkers.iter_mut().map(Iterator::next);
        let Some(Some(candidate)) = heads.next() else {
            break;
        };
        let agreed = heads.all(|head| head.is_some_and(|head| head == candidate));
        if !agreed {
            break;
        }
        common = Some(candidate);
        depth += 1;
    }

    tracing::trace!(inputs = walkers.len(), depth, "resolved common ancestor");
    common.ok_or(AncestryError::NoCommonRoot)
}

#[cfg(test)]
mod tests;
