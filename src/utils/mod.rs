/*!
# Utilities

Currently only the `NodeMapper`-framework, which records how sparse ids were
renumbered during compaction (see [`NodeMapSetter`] / [`NodeMapGetter`]).
*/

pub mod node_mapper;

pub use node_mapper::{NodeMapGetter, NodeMapSetter, NodeMapper};
