use rustc_hash::FxHashSet;

use crate::error::ResolveError;
use crate::host::Host;
use crate::node::{base_package, Node};
use crate::table::CandidateTable;

/// Fills `table` with the candidate list for every base package
/// transitively reachable from `node` under any candidate configuration
/// of any reachable package.
///
/// `visited` is keyed on `(pack, config)` and must *not* be reset
/// between calls within a single discovery pass; it's what keeps
/// cyclic graphs terminating, since a node can only ever be expanded
/// once regardless of how many parents reference it.
pub fn discover<H: Host>(
    host: &H,
    table: &mut CandidateTable<H::Config>,
    visited: &mut FxHashSet<(String, H::Config)>,
    node: &Node<H::Config>,
) -> Result<(), ResolveError<H::Error>> {
    if !visited.insert((node.pack.clone(), node.config.clone())) {
        return Ok(());
    }

    for edge in host.children(node)? {
        let base = base_package(&edge.pack).to_owned();

        if !table.contains(&base) {
            let all = host.all_configs(&base)?;
            table.insert(base.clone(), all);
        }

        let extra = host.specific_configs(&edge)?;
        let merged = if extra.is_empty() {
            table.get(&base).expect("just inserted above").to_vec()
        } else {
            let mut merged = extra;
            merged.extend(table.get(&base).expect("just inserted above").iter().cloned());
            table.insert(base.clone(), merged.clone());
            merged
        };

        for config in merged {
            discover(host, table, visited, &Node::new(edge.pack.clone(), config))?;
        }
    }

    Ok(())
}
