//! Costar is a small toolkit for analysing co-appearance networks: undirected
//! graphs whose nodes are named entities and whose edges count how often two
//! entities turn up together.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure,
//! which is built by naming nodes and connecting them with positively
//! weighted edges. Once constructed, centrality rankings and whole-graph
//! metrics can be computed over it.
//!
//! ```rust
//! use costar::algorithms::centrality::betweenness::betweenness_centrality;
//! use costar::prelude::*;
//!
//! // Construct the graph instance.
//! let mut graph = Graph::new();
//!
//! // Entities appear as named nodes, with arbitrary attributes.
//! for name in ["LUKE", "HAN", "GREEDO"] {
//!     graph.add_node(name, NO_PROPS).unwrap();
//! }
//!
//! // Connecting the same pair again accumulates the weight.
//! graph.add_edge("LUKE", "HAN", 2.0).unwrap();
//! graph.add_edge("HAN", "GREEDO", 1.0).unwrap();
//! graph.add_edge("LUKE", "HAN", 3.0).unwrap();
//!
//! // Rank the nodes by how often they sit between the others.
//! let ranking = betweenness_centrality(&graph, false).unwrap();
//! assert_eq!(ranking.get("HAN"), Some(&1.0));
//! ```

pub mod algorithms;
pub mod datasets;
pub mod errors;
pub mod graph;
pub mod graphgen;

pub mod prelude {
    pub use crate::{
        errors::GraphError,
        graph::{EdgeView, Graph, NodeView},
    };
    pub use costar_api::core::{
        entities::{
            properties::{Prop, NO_PROPS},
            EID, VID,
        },
        storage::arc_str::ArcStr,
    };
}
