//! Implementations of various graph algorithms that can be run on the graph.
//!
//! The algorithms are grouped into modules based on what they measure.
//!
//! To run an algorithm simply import the module and call the function.
//!
//! # Examples
//!
//! ```rust
//! use costar::algorithms::centrality::degree_centrality::degree_centrality;
//! use costar::prelude::*;
//!
//! let mut g = Graph::new();
//! for name in ["LUKE", "LEIA", "HAN"] {
//!     g.add_node(name, NO_PROPS).unwrap();
//! }
//! g.add_edge("LUKE", "LEIA", 17.0).unwrap();
//! g.add_edge("LEIA", "HAN", 9.0).unwrap();
//!
//! let strength = degree_centrality(&g).unwrap();
//! assert_eq!(strength.get("LEIA"), Some(&26.0));
//! ```

pub mod centrality;
pub mod metrics;
pub mod pathing;

mod algorithm_result;

pub use algorithm_result::{AlgorithmRepr, AlgorithmResult, AsOrd};
