//! Command-line support for the `wgraph` binary.

pub mod commands;

pub use commands::{parse_edge_spec, EdgeSpec, GraphArgs};
