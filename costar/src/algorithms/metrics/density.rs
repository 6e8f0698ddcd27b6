//! Graph density - measures how dense or sparse a graph is.
use crate::graph::Graph;

/// The ratio of the number of edges in the graph to the total number of
/// possible edges, given by `N * (N - 1) / 2` where `N` is the number of
/// nodes. Graphs with fewer than two nodes have a density of 0.
pub fn graph_density(graph: &Graph) -> f64 {
    let n = graph.count_nodes();
    if n < 2 {
        return 0.0;
    }
    let possible_edges = (n * (n - 1)) as f64 / 2.0;
    graph.count_edges() as f64 / possible_edges
}
