//! An independent brute-force checker, the same role cargo's own
//! `crates/resolver-tests/tests/validated.rs` gives a SAT encoding: a
//! second, structurally unrelated way to answer "is this selection
//! consistent" / "does any consistent selection exist at all", used to
//! cross-check `depsolve::resolve` in property tests.
//!
//! A SAT solver isn't the right tool here the way it is for cargo's own
//! resolver: cargo can translate semver ranges into boolean clauses,
//! but `Config`/`Configs` are opaque to this crate. Direct enumeration
//! is exact on the small graphs these tests build, since every
//! reachable package has a handful of candidates at most.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use depsolve::{base_package, Host, Node};

/// Reimplements discovery independently of `depsolve`'s own (private)
/// pass, so a bug shared between the two wouldn't be invisible to the
/// oracle.
fn discover_all<H: Host>(host: &H, root: &Node<H::Config>) -> IndexMap<String, Vec<H::Config>> {
    let mut table = IndexMap::new();
    let mut visited = FxHashSet::default();
    discover_into(host, &mut table, &mut visited, root);
    table
}

fn discover_into<H: Host>(
    host: &H,
    table: &mut IndexMap<String, Vec<H::Config>>,
    visited: &mut FxHashSet<(String, H::Config)>,
    node: &Node<H::Config>,
) {
    if !visited.insert((node.pack.clone(), node.config.clone())) {
        return;
    }
    let Ok(children) = host.children(node) else {
        return;
    };
    for edge in children {
        let base = base_package(&edge.pack).to_string();
        if !table.contains_key(&base) {
            let all = host.all_configs(&base).unwrap_or_default();
            table.insert(base.clone(), all);
        }
        let extra = host.specific_configs(&edge).unwrap_or_default();
        let merged = if extra.is_empty() {
            table[&base].clone()
        } else {
            let mut merged = extra;
            merged.extend(table[&base].iter().cloned());
            table.insert(base.clone(), merged.clone());
            merged
        };
        for config in merged {
            discover_into(host, table, visited, &Node::new(edge.pack.clone(), config));
        }
    }
}

fn is_consistent<H: Host>(
    host: &H,
    table: &IndexMap<String, Vec<H::Config>>,
    selection: &[usize],
    node: &Node<H::Config>,
    visited: &mut FxHashSet<(String, H::Config)>,
) -> bool {
    if !visited.insert((node.pack.clone(), node.config.clone())) {
        return true;
    }
    let Ok(children) = host.children(node) else {
        return false;
    };
    for edge in children {
        let base = base_package(&edge.pack);
        let Some(idx) = table.get_index_of(base) else {
            return false;
        };
        let candidates = &table[idx];
        if candidates.is_empty() {
            return false;
        }
        let config = &candidates[selection[idx]];
        if !matches!(host.matches(&edge.configs, config), Ok(true)) {
            return false;
        }
        let child = Node::new(edge.pack.clone(), config.clone());
        if !is_consistent(host, table, selection, &child, visited) {
            return false;
        }
    }
    true
}

/// Whether *any* combination of the discovered candidate table
/// satisfies every edge reachable from `root`. Exhaustive: every
/// package discovered reachable gets tried at every one of its
/// candidates.
pub fn exists_consistent_combination<H: Host>(host: &H, root: &Node<H::Config>) -> bool {
    let table = discover_all(host, root);
    let sizes: Vec<usize> = table.values().map(|v| v.len().max(1)).collect();
    let total: usize = sizes.iter().product();

    let mut selection = vec![0usize; table.len()];
    for _ in 0..total.max(1) {
        let mut visited = FxHashSet::default();
        if is_consistent(host, &table, &selection, root, &mut visited) {
            return true;
        }
        if !bump(&mut selection, &sizes) {
            break;
        }
    }
    false
}

/// Whether `selected` (one configuration per base package, as returned
/// by [`depsolve::resolve`]) satisfies every edge reachable from `root`:
/// soundness, checked independently of whatever internal state produced
/// `selected`.
pub fn selection_is_sound<H: Host>(
    host: &H,
    root: &Node<H::Config>,
    selected: &IndexMap<String, H::Config>,
) -> bool {
    let mut visited = FxHashSet::default();
    sound_from(host, selected, &mut visited, root)
}

fn sound_from<H: Host>(
    host: &H,
    selected: &IndexMap<String, H::Config>,
    visited: &mut FxHashSet<(String, H::Config)>,
    node: &Node<H::Config>,
) -> bool {
    if !visited.insert((node.pack.clone(), node.config.clone())) {
        return true;
    }
    let Ok(children) = host.children(node) else {
        return false;
    };
    for edge in children {
        let base = base_package(&edge.pack);
        let Some(config) = selected.get(base) else {
            return false;
        };
        if !matches!(host.matches(&edge.configs, config), Ok(true)) {
            return false;
        }
        let child = Node::new(edge.pack.clone(), config.clone());
        if !sound_from(host, selected, visited, &child) {
            return false;
        }
    }
    true
}

/// A mixed-radix increment over `sizes`; returns `false` once it wraps.
fn bump(selection: &mut [usize], sizes: &[usize]) -> bool {
    for i in (0..selection.len()).rev() {
        selection[i] += 1;
        if selection[i] < sizes[i] {
            return true;
        }
        selection[i] = 0;
    }
    false
}
