use crate::{
    algorithms::{algorithm_result::AlgorithmResult, pathing::dijkstra::State},
    errors::GraphError,
    graph::Graph,
};
use costar_api::core::entities::VID;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use std::collections::BinaryHeap;
use tracing::debug;

/// One source pass of Brandes' algorithm, using Dijkstra so that shortest
/// paths are measured by total edge weight rather than hop count. Returns
/// the dependency of the source on every node, with the source itself
/// zeroed.
fn brandes_pass(g: &Graph, source: VID) -> Vec<f64> {
    let n = g.count_nodes();
    let mut stack: Vec<VID> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<VID>> = vec![Vec::new(); n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut dist: Vec<f64> = vec![f64::INFINITY; n];
    let mut heap = BinaryHeap::new();

    dist[source.index()] = 0.0;
    sigma[source.index()] = 1.0;
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost.into_inner() > dist[node.index()] {
            continue;
        }
        // nodes are settled in non-decreasing distance order, so the stack
        // pops in reverse topological order of the shortest-path DAG
        stack.push(node);
        for (nbr, weight) in g.neighbours_iter(node) {
            let next_cost = cost.into_inner() + weight;
            // Path discovery: a strictly shorter route replaces the counts.
            if next_cost < dist[nbr.index()] {
                dist[nbr.index()] = next_cost;
                sigma[nbr.index()] = sigma[node.index()];
                predecessors[nbr.index()] = vec![node];
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node: nbr,
                });
            } else if next_cost == dist[nbr.index()] {
                // Path counting: an equally short route joins the existing ones.
                sigma[nbr.index()] += sigma[node.index()];
                predecessors[nbr.index()].push(node);
            }
        }
    }

    // Accumulation
    let mut delta: Vec<f64> = vec![0.0; n];
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w.index()] {
            delta[v.index()] += (sigma[v.index()] / sigma[w.index()]) * (1.0 + delta[w.index()]);
        }
    }
    delta[source.index()] = 0.0;
    delta
}

/// Computes the betweenness centrality for nodes in a given graph: the
/// number of shortest paths between pairs of other nodes that pass through
/// each node, where shortest means smallest total edge weight. Pairs joined
/// by several equally short paths contribute fractionally to every node on
/// them.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
/// - `normalized`: If `true`, divide each value by the number of node pairs
///   that exclude that node, `(n - 1) * (n - 2) / 2`, so values fall in
///   `[0, 1]`.
///
/// # Returns
///
/// An [AlgorithmResult] containing the betweenness centrality of each node.
/// Fails with [`GraphError::EmptyGraphError`] if the graph has no nodes.
pub fn betweenness_centrality(
    g: &Graph,
    normalized: bool,
) -> Result<AlgorithmResult<'_, f64, OrderedFloat<f64>>, GraphError> {
    let n = g.count_nodes();
    if n == 0 {
        return Err(GraphError::EmptyGraphError);
    }
    debug!(
        "Running betweenness centrality over {} nodes and {} edges",
        n,
        g.count_edges()
    );

    let passes: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|source| brandes_pass(g, VID(source)))
        .collect();

    let mut betweenness: Vec<f64> = vec![0.0; n];
    for pass in passes {
        for (value, dependency) in betweenness.iter_mut().zip(pass) {
            *value += dependency;
        }
    }

    // The graph is undirected, so every pair of endpoints was visited once
    // from each side and every dependency is counted twice.
    for value in betweenness.iter_mut() {
        *value /= 2.0;
    }

    // Normalization; with fewer than three nodes no node can sit between a
    // pair, and the factor would divide by zero.
    if normalized && n > 2 {
        let factor = 2.0 / ((n as f64 - 1.0) * (n as f64 - 2.0));
        for value in betweenness.iter_mut() {
            *value *= factor;
        }
    }

    Ok(AlgorithmResult::new(
        g,
        "Betweenness Centrality",
        std::any::type_name::<f64>(),
        betweenness,
    ))
}
