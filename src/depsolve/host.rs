use std::fmt;
use std::hash::Hash;

use crate::node::{Edge, Node};

/// The capability set a package ecosystem implements to plug its
/// package store, registry, and version semantics into the resolver.
///
/// The resolver depends on nothing else: it never reads a manifest,
/// never touches the network, and never interprets `Config` or
/// `Configs` beyond calling [`Host::matches`]. Everything ecosystem
/// specific, what a version string means, where candidates come from,
/// how a path override is expressed, lives behind this trait.
pub trait Host {
    /// A concrete, selectable configuration of a package (e.g. a version).
    ///
    /// Totally ordered and hashable per the host contract, even though
    /// the search itself only ever needs equality and hashing. The
    /// ordering is there for the host's own `all_configs` to build on
    /// (and for any consumer that wants to sort a returned selection).
    type Config: Clone + Eq + Ord + Hash + fmt::Debug;
    /// A constraint over configurations (e.g. a version range).
    type Configs: Clone + Eq + Ord + Hash + fmt::Debug;
    /// Any error a host operation can raise; propagated unchanged.
    type Error: std::error::Error + 'static;

    /// All known configurations of `base`, best-first (or whatever
    /// priority order the host wants candidates tried in).
    fn all_configs(&self, base: &str) -> Result<Vec<Self::Config>, Self::Error>;

    /// Extra configurations to try before [`Host::all_configs`]'s list,
    /// e.g. a path-based override visible only on this edge. May be empty.
    fn specific_configs(&self, edge: &Edge<Self::Configs>) -> Result<Vec<Self::Config>, Self::Error>;

    /// The outgoing dependency edges of a package at a chosen configuration.
    fn children(&self, node: &Node<Self::Config>) -> Result<Vec<Edge<Self::Configs>>, Self::Error>;

    /// Whether `config` satisfies `configs`.
    fn matches(&self, configs: &Self::Configs, config: &Self::Config) -> Result<bool, Self::Error>;
}
