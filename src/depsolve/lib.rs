//! A dependency version resolver, parameterized over a host.
//!
//! Given a root package at a chosen configuration and a [`Host`] that
//! can enumerate child dependencies, candidate configurations, and a
//! matching relation, [`resolve`] selects exactly one configuration per
//! reachable package such that every parent→child edge is satisfied.
//!
//! The crate is a pure function of the host's responses: it performs no
//! I/O, interprets no version syntax, and never negotiates "best"
//! versions under a cost function; those are all the host's concerns.
//! It only does three things: discover the full candidate table for
//! every transitively-referenced package, enumerate combinations of
//! that table with a backtracking search, and validate each combination
//! against every edge in the graph.

mod error;
mod host;
mod node;
mod resolver;
mod table;

pub use error::ResolveError;
pub use host::Host;
pub use node::{base_package, Edge, Node};
pub use resolver::resolve;
pub use table::CandidateTable;
