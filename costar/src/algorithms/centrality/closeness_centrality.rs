use crate::{
    algorithms::{algorithm_result::AlgorithmResult, pathing::dijkstra::dijkstra_distances},
    errors::GraphError,
    graph::Graph,
};
use costar_api::core::entities::VID;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use tracing::debug;

/// Computes the closeness centrality of all nodes in the graph: how near a
/// node is to every node it can reach, measured over weighted shortest
/// paths and normalized with the Wasserman-Faust correction so that nodes
/// in components of different sizes remain comparable. Nodes without edges
/// score 0.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
///
/// # Returns
///
/// An [AlgorithmResult] containing the closeness centrality of each node.
/// Fails with [`GraphError::EmptyGraphError`] if the graph has no nodes.
pub fn closeness_centrality(
    g: &Graph,
) -> Result<AlgorithmResult<'_, f64, OrderedFloat<f64>>, GraphError> {
    let n = g.count_nodes();
    if n == 0 {
        return Err(GraphError::EmptyGraphError);
    }
    debug!("Running closeness centrality over {} nodes", n);

    let values: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|v| {
            let dist = dijkstra_distances(g, VID(v));
            let mut reachable = 0usize;
            let mut total = 0.0;
            for (i, d) in dist.iter().enumerate() {
                if i != v && d.is_finite() {
                    reachable += 1;
                    total += d;
                }
            }
            if reachable == 0 {
                return 0.0;
            }
            let reachable = reachable as f64;
            // Wasserman-Faust correction: scale the raw closeness by the
            // fraction of the other nodes this node can actually reach.
            (reachable / total) * (reachable / (n as f64 - 1.0))
        })
        .collect();

    Ok(AlgorithmResult::new(
        g,
        "Closeness Centrality",
        std::any::type_name::<f64>(),
        values,
    ))
}
