//! A tiny in-memory `Host` used to exercise `depsolve` the way cargo's
//! own `crates/resolver-tests` exercises its resolver in isolation,
//! without a real registry or version grammar behind it.
//!
//! Configurations are bare integers and a "configs" constraint is just
//! the set of integers it permits, written the same way as `b in [2, 1]`
//! in the scenarios below.

use std::convert::Infallible;
use std::sync::Once;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use depsolve::{base_package, Edge, Host, Node, ResolveError};

pub mod oracle;

static TRACING: Once = Once::new();

/// Installs a `tracing` subscriber once per test binary, so a run with
/// `RUST_LOG=depsolve=debug` surfaces the resolver's own per-iteration
/// diagnostics alongside the test output. Safe to call from every test;
/// only the first call does anything.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// One version of one package: its own number and its outgoing edges.
#[derive(Debug, Clone)]
struct Version {
    number: i64,
    deps: Vec<(String, Vec<i64>)>,
}

/// A small hand-built dependency graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    packages: FxHashMap<String, Vec<Version>>,
    overrides: FxHashMap<String, Vec<i64>>,
}

/// Builds a `(pack, configs)` pair for use in a package's dependency
/// list, reading as "depends on `pack`, requiring a config in `configs`".
pub fn dep(pack: &str, configs: &[i64]) -> (String, Vec<i64>) {
    (pack.to_string(), configs.to_vec())
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Registers one version of `name` with the given dependency edges.
    pub fn pkg(mut self, name: &str, version: i64, deps: Vec<(String, Vec<i64>)>) -> Self {
        self.packages
            .entry(name.to_string())
            .or_default()
            .push(Version {
                number: version,
                deps,
            });
        self
    }

    /// Registers a version of `name` with no dependencies.
    pub fn leaf(self, name: &str, version: i64) -> Self {
        self.pkg(name, version, Vec::new())
    }

    /// Makes `getSpecificConfigs` return `configs` whenever a `pack`
    /// edge is discovered, simulating a path-based override.
    pub fn specific(mut self, pack: &str, configs: &[i64]) -> Self {
        self.overrides.insert(pack.to_string(), configs.to_vec());
        self
    }
}

impl Host for Graph {
    type Config = i64;
    type Configs = Vec<i64>;
    type Error = Infallible;

    fn all_configs(&self, base: &str) -> Result<Vec<i64>, Infallible> {
        let mut versions: Vec<i64> = self
            .packages
            .get(base)
            .map(|versions| versions.iter().map(|v| v.number).collect())
            .unwrap_or_default();
        versions.sort_unstable_by(|a, b| b.cmp(a));
        Ok(versions)
    }

    fn specific_configs(&self, edge: &Edge<Vec<i64>>) -> Result<Vec<i64>, Infallible> {
        Ok(self.overrides.get(&edge.pack).cloned().unwrap_or_default())
    }

    fn children(&self, node: &Node<i64>) -> Result<Vec<Edge<Vec<i64>>>, Infallible> {
        let base = base_package(&node.pack);
        let deps = self
            .packages
            .get(base)
            .and_then(|versions| versions.iter().find(|v| v.number == node.config))
            .map(|v| v.deps.clone())
            .unwrap_or_default();
        Ok(deps
            .into_iter()
            .map(|(pack, configs)| Edge::new(pack, configs))
            .collect())
    }

    fn matches(&self, configs: &Vec<i64>, config: &i64) -> Result<bool, Infallible> {
        Ok(configs.contains(config))
    }
}

/// Runs `depsolve::resolve` against `graph`, rooted at `(root, root_version)`.
pub fn resolve(
    graph: &Graph,
    root: &str,
    root_version: i64,
    throw_on_failure: bool,
) -> Result<IndexMap<String, i64>, ResolveError<Infallible>> {
    init_tracing();
    depsolve::resolve(graph, Node::new(root, root_version), throw_on_failure)
}
