use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::error::ResolveError;
use crate::host::Host;
use crate::node::Node;
use crate::resolver::discover::discover;
use crate::resolver::validate::validate;
use crate::table::CandidateTable;

/// Selects exactly one configuration per package reachable from `root`
/// such that every parent→child edge is satisfied.
///
/// On success, the returned map has one entry per base package with a
/// non-empty candidate list that discovery found reachable from `root`;
/// `root` itself is not included unless it also turns up as someone's
/// dependency. Subpackages never appear separately; look their
/// configuration up under their base package's name.
///
/// On failure: if `throw_on_failure` is set, fails with
/// [`ResolveError::Exhausted`] carrying the first diagnostic observed
/// during the search; otherwise returns an empty map. Either way, a
/// root edge that names a package with *no* known configurations at all
/// is always fatal, a malformed request rather than an ordinary
/// resolution failure, and `throw_on_failure` has no bearing on it.
pub fn resolve<H: Host>(
    host: &H,
    root: Node<H::Config>,
    throw_on_failure: bool,
) -> Result<IndexMap<String, H::Config>, ResolveError<H::Error>> {
    let mut table = CandidateTable::new();
    let mut discovery_visited = FxHashSet::default();
    discover(host, &mut table, &mut discovery_visited, &root)?;

    let mut selection = vec![0usize; table.len()];
    let mut first_error: Option<String> = None;

    loop {
        let mut validation_visited = FxHashSet::default();
        let conflict_index = validate(
            host,
            &table,
            &selection,
            &mut validation_visited,
            &root,
            true,
            &mut first_error,
        )?;

        tracing::debug!(
            selection = %format_selection(&table, &selection, conflict_index),
            conflict_index,
            "resolver iteration"
        );

        if conflict_index < 0 {
            return Ok(collect_selection(&table, &selection));
        }

        advance(&mut selection, &table, conflict_index as usize);

        if selection.iter().all(|&i| i == 0) {
            let message = first_error
                .unwrap_or_else(|| "dependency graph has no consistent selection".to_string());
            return if throw_on_failure {
                Err(ResolveError::Exhausted(message))
            } else {
                Ok(IndexMap::new())
            };
        }
    }
}

/// The little-endian counter restricted to positions `<= conflict_index`,
/// with every position above it zeroed since those choices are
/// immaterial to the conflict just found and must be reconsidered from
/// scratch under whatever the lower positions settle on next.
///
/// A base package with an empty candidate list has no valid index at
/// all (not even `0`); such a position is always skipped (treated as an
/// immediate carry) rather than incremented, or it would count upward
/// forever and the search would never detect it has wrapped.
fn advance<C: Clone>(selection: &mut [usize], table: &CandidateTable<C>, conflict_index: usize) {
    for pi in (0..selection.len()).rev() {
        if pi > conflict_index {
            selection[pi] = 0;
            continue;
        }

        let len = table.len_at(pi);
        if len == 0 {
            continue;
        }

        selection[pi] += 1;
        if selection[pi] == len {
            selection[pi] = 0;
            continue;
        }
        break;
    }
}

fn collect_selection<C: Clone>(
    table: &CandidateTable<C>,
    selection: &[usize],
) -> IndexMap<String, C> {
    let mut out = IndexMap::with_capacity(table.len());
    for (i, (name, candidates)) in table.iter().enumerate() {
        if let Some(config) = candidates.get(selection[i]) {
            out.insert(name.to_owned(), config.clone());
        }
    }
    out
}

fn format_selection<C: Clone + std::fmt::Debug>(
    table: &CandidateTable<C>,
    selection: &[usize],
    conflict_index: isize,
) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    for (i, (name, candidates)) in table.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let marker = if conflict_index >= 0 && i as isize >= conflict_index {
            "*"
        } else {
            ""
        };
        match candidates.get(selection[i]) {
            Some(config) => {
                let _ = write!(out, "{marker}{name}={config:?}");
            }
            None => {
                let _ = write!(out, "{marker}{name}=<none>");
            }
        }
    }
    out
}
