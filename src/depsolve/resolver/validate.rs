use rustc_hash::FxHashSet;

use crate::error::ResolveError;
use crate::host::Host;
use crate::node::{base_package, Node};
use crate::table::CandidateTable;

/// Walks the dependency graph reachable from `node` under the current
/// `selection` and decides whether it's consistent.
///
/// Returns `-1` if every edge below `node` is satisfied, otherwise the
/// table index whose selection must advance to make progress. `visited`
/// is keyed on `(pack, config)` exactly like discovery's, but unlike
/// discovery's must be recreated fresh before *every* call from the
/// search driver; reusing it across iterations would make the walk
/// silently skip nodes whose consistency needs rechecking under the new
/// selection.
///
/// `is_root` is true only for the single call the search driver makes
/// directly on the caller's root node. An alternative would detect that
/// frame by comparing the parent node for value equality against the
/// root; an explicit flag gives the same behavior without relying on
/// `Node` equality (which, since nodes are `(pack, config)` pairs,
/// would happen to work here too, but a flag makes the root
/// frame unambiguous even if a future `Config` type's `Eq` impl were
/// ever looser than exact identity).
pub fn validate<H: Host>(
    host: &H,
    table: &CandidateTable<H::Config>,
    selection: &[usize],
    visited: &mut FxHashSet<(String, H::Config)>,
    node: &Node<H::Config>,
    is_root: bool,
    first_error: &mut Option<String>,
) -> Result<isize, ResolveError<H::Error>> {
    if !visited.insert((node.pack.clone(), node.config.clone())) {
        return Ok(-1);
    }

    let parentidx = table
        .index_of(base_package(&node.pack))
        .map(|i| i as isize)
        .unwrap_or(-1);

    let mut maxcpi: isize = -1;

    for edge in host.children(node)? {
        let base = base_package(&edge.pack);
        let childidx = table
            .index_of(base)
            .expect("every base reachable from the root was populated during discovery");
        let candidates = table.candidates_at(childidx);

        if candidates.is_empty() {
            if is_root {
                return Err(ResolveError::MissingRootConfigs {
                    pack: node.pack.clone(),
                    missing: edge.pack.clone(),
                });
            }
            record_first_error(
                first_error,
                format!(
                    "`{}` requires `{}`, which has no known configurations",
                    node.pack, edge.pack
                ),
            );
            maxcpi = maxcpi.max(parentidx);
            continue;
        }

        let config = &candidates[selection[childidx]];
        if !host.matches(&edge.configs, config)? {
            record_first_error(
                first_error,
                format!(
                    "`{}` requires `{}` matching {:?}, but `{:?}` is selected",
                    node.pack, edge.pack, edge.configs, config
                ),
            );
            if is_root {
                // The root's own selection is fixed by the caller and can
                // never be advanced, so the only way forward is the child.
                return Ok(childidx as isize);
            }
            maxcpi = maxcpi.max((childidx as isize).max(parentidx));
            continue;
        }

        let child = Node::new(edge.pack.clone(), config.clone());
        let r = validate(host, table, selection, visited, &child, false, first_error)?;
        maxcpi = maxcpi.max(r);
    }

    Ok(maxcpi)
}

fn record_first_error(first_error: &mut Option<String>, message: String) {
    if first_error.is_none() {
        *first_error = Some(message);
    }
}
