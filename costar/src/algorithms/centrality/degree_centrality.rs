use crate::{algorithms::algorithm_result::AlgorithmResult, errors::GraphError, graph::Graph};
use costar_api::core::entities::VID;
use ordered_float::OrderedFloat;
use rayon::prelude::*;
use tracing::debug;

/// Computes the weighted degree centrality of all nodes in the graph, also
/// known as strength: the sum of the weights of the edges incident to each
/// node. Nodes without edges have a strength of 0.
///
/// # Arguments
///
/// - `g`: A reference to the graph.
///
/// # Returns
///
/// An [AlgorithmResult] containing the weighted degree of each node. Fails
/// with [`GraphError::EmptyGraphError`] if the graph has no nodes.
pub fn degree_centrality(
    g: &Graph,
) -> Result<AlgorithmResult<'_, f64, OrderedFloat<f64>>, GraphError> {
    let n = g.count_nodes();
    if n == 0 {
        return Err(GraphError::EmptyGraphError);
    }
    debug!("Running degree centrality over {} nodes", n);

    let values: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|i| g.neighbours_iter(VID(i)).map(|(_, weight)| weight).sum())
        .collect();

    Ok(AlgorithmResult::new(
        g,
        "Degree Centrality",
        std::any::type_name::<f64>(),
        values,
    ))
}

#[cfg(test)]
mod degree_centrality_test {
    use crate::{
        algorithms::centrality::degree_centrality::degree_centrality, errors::GraphError,
        graph::Graph,
    };
    use costar_api::core::entities::properties::NO_PROPS;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_degree_centrality() {
        let mut graph = Graph::new();
        for name in ["LUKE", "LEIA", "HAN"] {
            graph.add_node(name, NO_PROPS).unwrap();
        }
        let vs = vec![
            ("LUKE", "LEIA", 3.0),
            ("LUKE", "HAN", 2.0),
            ("LEIA", "HAN", 1.0),
        ];
        for (src, dst, weight) in vs {
            graph.add_edge(src, dst, weight).unwrap();
        }

        let mut expected: HashMap<String, f64> = HashMap::new();
        expected.insert("LUKE".to_string(), 5.0);
        expected.insert("LEIA".to_string(), 4.0);
        expected.insert("HAN".to_string(), 3.0);

        let res = degree_centrality(&graph).unwrap();
        assert_eq!(res.get_all_with_names(), expected);
    }

    #[test]
    fn test_single_edge_and_isolated_node() {
        let mut graph = Graph::new();
        for name in ["A", "B", "LONER"] {
            graph.add_node(name, NO_PROPS).unwrap();
        }
        graph.add_edge("A", "B", 2.5).unwrap();

        let res = degree_centrality(&graph).unwrap();
        assert_eq!(res.get("A"), Some(&2.5));
        assert_eq!(res.get("B"), Some(&2.5));
        assert_eq!(res.get("LONER"), Some(&0.0));
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        let graph = Graph::new();
        assert!(matches!(
            degree_centrality(&graph),
            Err(GraphError::EmptyGraphError)
        ));
    }
}
