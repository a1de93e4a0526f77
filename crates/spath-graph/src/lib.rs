//! Weighted graphs for `spath` searches.

mod builder;
pub mod generate;
mod graph;

pub use self::builder::*;
pub use self::graph::*;
