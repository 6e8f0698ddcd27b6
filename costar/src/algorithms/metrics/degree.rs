//! Varying degree calculations for the entire graph.
//! The degree of a node is the number of edges connected to it, ignoring
//! weights.
//!
//! This library provides the following degree calculations:
//! - max_degree - The maximum degree of any node in the graph.
//! - min_degree - The minimum degree of any node in the graph.
//! - average_degree - The average degree of all nodes in the graph.
//!
//! # Examples
//!
//! ```rust
//! use costar::algorithms::metrics::degree::*;
//! use costar::prelude::*;
//!
//! let mut g = Graph::new();
//! for name in ["LUKE", "LEIA", "HAN", "CHEWBACCA"] {
//!     g.add_node(name, NO_PROPS).unwrap();
//! }
//! let vs = vec![
//!     ("LUKE", "LEIA", 17.0),
//!     ("LUKE", "HAN", 9.0),
//!     ("HAN", "CHEWBACCA", 13.0),
//! ];
//! for (src, dst, weight) in vs {
//!     g.add_edge(src, dst, weight).unwrap();
//! }
//!
//! print!("Max degree: {:?}", max_degree(&g));
//! print!("Min degree: {:?}", min_degree(&g));
//! print!("Average degree: {:?}", average_degree(&g));
//! ```
use crate::graph::Graph;

/// The maximum degree of any node in the graph
pub fn max_degree(graph: &Graph) -> usize {
    graph.nodes().map(|node| node.degree()).max().unwrap_or(0)
}

/// The minimum degree of any node in the graph
pub fn min_degree(graph: &Graph) -> usize {
    graph.nodes().map(|node| node.degree()).min().unwrap_or(0)
}

/// The average degree of all nodes in the graph.
pub fn average_degree(graph: &Graph) -> f64 {
    let (deg_sum, count) = graph
        .nodes()
        .map(|node| node.degree())
        .fold((0usize, 0usize), |(deg_sum, count), deg| {
            (deg_sum + deg, count + 1)
        });
    if count == 0 {
        return 0.0;
    }

    deg_sum as f64 / count as f64
}
