//! Rail network reference data.
//!
//! Holds the distance table supplied by the loader, the built-in Hankyu
//! topology, and the weighted graph built from both at start-up.

mod graph;
pub mod hankyu;
mod loader;
mod table;

pub use graph::{DEFAULT_EDGE_KM, MissingEdgePolicy, NetworkError, NetworkGraph};
pub use loader::{DistanceSource, LoadError, LoadMode, load_matrix, load_matrix_reader};
pub use table::DistanceTable;
