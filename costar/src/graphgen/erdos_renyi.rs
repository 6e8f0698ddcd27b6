//! Random co-occurrence networks drawn from the Erdős-Rényi G(n, p) model.
//!
//! # Examples
//!
//! ```
//! use costar::graphgen::erdos_renyi::erdos_renyi;
//! let graph = erdos_renyi(1000, 0.1, None).unwrap();
//! ```

use crate::{errors::GraphError, graph::Graph};
use costar_api::core::entities::properties::NO_PROPS;
use itertools::Itertools;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Draws a random undirected graph from the G(n, p) model.
///
/// Every one of the `n * (n - 1) / 2` node pairs is connected independently
/// with probability `p`, which makes the result a useful stand-in for a real
/// co-occurrence network in benchmarks and stress tests.
///
/// # Arguments
/// * `nodes_to_add` - How many nodes the graph gets, named "0" through
///   "n-1".
/// * `p` - Probability that any given pair of nodes is connected.
/// * `seed` - Seed for the random stream; pass `None` to draw one from OS
///   entropy.
///
/// # Returns
/// * `Result<Graph, GraphError>` - The sampled graph.
///
/// # Behavior
/// - Connected pairs get a whole-numbered weight drawn uniformly from 1 to
///   5, mimicking small co-occurrence counts.
/// - The same seed, node count and probability always produce the same
///   graph, edge weights included.
///
/// # Example
/// ```
/// use costar::graphgen::erdos_renyi::erdos_renyi;
///
/// // a 10-node network where a fifth of the pairs are connected, on average
/// let graph = erdos_renyi(10, 0.2, Some(42)).unwrap();
/// ```
pub fn erdos_renyi(nodes_to_add: usize, p: f64, seed: Option<u64>) -> Result<Graph, GraphError> {
    let mut graph = Graph::new();
    let mut rng;
    if let Some(seed_value) = seed {
        rng = StdRng::seed_from_u64(seed_value);
    } else {
        rng = StdRng::from_os_rng();
    }
    for i in 0..nodes_to_add {
        graph.add_node(i.to_string(), NO_PROPS)?;
    }
    for (i, j) in (0..nodes_to_add).tuple_combinations() {
        let create_edge = rng.random_bool(p);
        if create_edge {
            let weight = rng.random_range(1..=5) as f64;
            graph.add_edge(i.to_string(), j.to_string(), weight)?;
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use crate::graphgen::erdos_renyi::erdos_renyi;

    #[test]
    fn test_half_probability_stays_within_bounds() {
        let n_nodes = 20;
        let graph = erdos_renyi(n_nodes, 0.5, Some(42)).unwrap();
        assert_eq!(graph.count_nodes(), n_nodes);
        assert!(graph.count_edges() > 0);
        assert!(graph.count_edges() <= n_nodes * (n_nodes - 1) / 2);
    }

    #[test]
    fn test_zero_probability_gives_no_edges() {
        let graph = erdos_renyi(20, 0.0, Some(42)).unwrap();
        assert_eq!(graph.count_nodes(), 20);
        assert_eq!(graph.count_edges(), 0);
    }

    #[test]
    fn test_full_probability_gives_a_complete_graph() {
        let n_nodes = 20;
        let graph = erdos_renyi(n_nodes, 1.0, Some(42)).unwrap();
        assert_eq!(graph.count_nodes(), n_nodes);
        assert_eq!(graph.count_edges(), n_nodes * (n_nodes - 1) / 2);
    }

    #[test]
    fn test_same_seed_generates_the_same_graph() {
        let first = erdos_renyi(30, 0.3, Some(7)).unwrap();
        let second = erdos_renyi(30, 0.3, Some(7)).unwrap();
        assert_eq!(first.count_edges(), second.count_edges());

        let first_weights: Vec<f64> = first.edges().map(|e| e.weight()).collect();
        let second_weights: Vec<f64> = second.edges().map(|e| e.weight()).collect();
        assert_eq!(first_weights, second_weights);
    }
}
