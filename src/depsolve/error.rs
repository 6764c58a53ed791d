use thiserror::Error;

/// Everything [`crate::resolve`] can fail with.
///
/// Recoverable conflicts (a mismatched candidate, a missing child below
/// the root) never reach here; they're encoded as a conflict index and
/// recovered by the search driver. Only the genuinely fatal cases, and
/// whatever the host itself raises, surface to the caller.
#[derive(Debug, Error)]
pub enum ResolveError<E> {
    /// The root node (or, transitively under it, a package the root
    /// directly depends on) references a package with no known
    /// configurations at all. This is a malformed request and is fatal
    /// regardless of `throw_on_failure`.
    #[error("`{pack}` requires `{missing}`, which has no known configurations")]
    MissingRootConfigs { pack: String, missing: String },

    /// The search exhausted every combination in the discovered
    /// candidate table without finding one that satisfies every edge.
    /// The message is the *first* diagnostic observed during the
    /// search, not the last, so it stays stable under unrelated changes
    /// to candidate ordering further down the search.
    #[error("{0}")]
    Exhausted(String),

    /// A host operation (`all_configs`, `specific_configs`, `children`,
    /// or `matches`) returned an error; propagated unchanged.
    #[error(transparent)]
    Host(#[from] E),
}
