use std::fmt;

/// The prefix of a package name before its first `:`, or the whole name
/// if no `:` is present.
///
/// Candidate configurations are tracked per base package; a subpackage
/// such as `"x:sub"` shares `"x"`'s candidate list.
pub fn base_package(pack: &str) -> &str {
    match pack.split_once(':') {
        Some((base, _)) => base,
        None => pack,
    }
}

/// A parent's outgoing dependency: a child package name together with
/// the parent's constraint over its configurations.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Edge<Configs> {
    pub pack: String,
    pub configs: Configs,
}

impl<Configs> Edge<Configs> {
    pub fn new(pack: impl Into<String>, configs: Configs) -> Self {
        Edge {
            pack: pack.into(),
            configs,
        }
    }
}

impl<Configs: fmt::Debug> fmt::Debug for Edge<Configs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("pack", &self.pack)
            .field("configs", &self.configs)
            .finish()
    }
}

/// A package at a concrete chosen configuration.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Node<Config> {
    pub pack: String,
    pub config: Config,
}

impl<Config> Node<Config> {
    pub fn new(pack: impl Into<String>, config: Config) -> Self {
        Node {
            pack: pack.into(),
            config,
        }
    }
}

impl<Config: fmt::Debug> fmt::Debug for Node<Config> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("pack", &self.pack)
            .field("config", &self.config)
            .finish()
    }
}
