use costar::{
    algorithms::centrality::{
        betweenness::betweenness_centrality, closeness_centrality::closeness_centrality,
        degree_centrality::degree_centrality,
    },
    datasets::star_wars::star_wars_graph,
    prelude::*,
};
use std::collections::HashMap;

fn load_graph(edges: Vec<(&str, &str, f64)>) -> Graph {
    let mut graph = Graph::new();
    for (src, dst, _) in &edges {
        for name in [src, dst] {
            if !graph.has_node(name) {
                graph.add_node(name, NO_PROPS).unwrap();
            }
        }
    }
    for (src, dst, weight) in edges {
        graph.add_edge(src, dst, weight).unwrap();
    }
    graph
}

#[test]
fn test_single_edge_scores() {
    let graph = load_graph(vec![("A", "B", 2.5)]);

    let strength = degree_centrality(&graph).unwrap();
    assert_eq!(strength.get("A"), Some(&2.5));
    assert_eq!(strength.get("B"), Some(&2.5));

    let betweenness = betweenness_centrality(&graph, false).unwrap();
    assert_eq!(betweenness.get("A"), Some(&0.0));
    assert_eq!(betweenness.get("B"), Some(&0.0));

    // with a unit weight the two endpoints are as close as possible
    let graph = load_graph(vec![("A", "B", 1.0)]);
    let closeness = closeness_centrality(&graph).unwrap();
    assert_eq!(closeness.get("A"), Some(&1.0));
    assert_eq!(closeness.get("B"), Some(&1.0));
}

#[test]
fn test_middle_of_a_path_carries_all_traffic() {
    let graph = load_graph(vec![("A", "B", 1.0), ("B", "C", 1.0)]);

    let mut expected: HashMap<String, f64> = HashMap::new();
    expected.insert("A".to_string(), 0.0);
    expected.insert("B".to_string(), 1.0);
    expected.insert("C".to_string(), 0.0);

    let res = betweenness_centrality(&graph, false).unwrap();
    assert_eq!(res.get_all_with_names(), expected);
}

#[test]
fn test_closeness_across_components() {
    let graph = load_graph(vec![("A", "B", 1.0), ("C", "D", 1.0)]);

    let res = closeness_centrality(&graph).unwrap();
    for name in ["A", "B", "C", "D"] {
        assert_eq!(res.get(name), Some(&(1.0 / 3.0)));
    }
}

#[test]
fn test_merging_parallel_edges_before_ranking() {
    let mut graph = Graph::new();
    graph.add_node("A", NO_PROPS).unwrap();
    graph.add_node("B", NO_PROPS).unwrap();
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("A", "B", 2.0).unwrap();

    assert_eq!(graph.count_edges(), 1);
    let strength = degree_centrality(&graph).unwrap();
    assert_eq!(strength.get("A"), Some(&3.0));
    assert_eq!(strength.get("B"), Some(&3.0));
}

#[test]
fn test_invalid_updates_leave_no_trace() {
    let mut graph = Graph::new();
    graph.add_node("A", NO_PROPS).unwrap();
    graph.add_node("B", NO_PROPS).unwrap();

    assert!(matches!(
        graph.add_edge("A", "B", 0.0),
        Err(GraphError::InvalidWeightError { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "B", -1.5),
        Err(GraphError::InvalidWeightError { .. })
    ));
    assert!(matches!(
        graph.add_edge("A", "A", 1.0),
        Err(GraphError::SelfLoopError(_))
    ));
    assert!(matches!(
        graph.add_edge("A", "VADER", 1.0),
        Err(GraphError::NodeMissingError(_))
    ));
    assert!(matches!(
        graph.add_node("A", NO_PROPS),
        Err(GraphError::NodeExistsError(_))
    ));

    assert_eq!(graph.count_nodes(), 2);
    assert_eq!(graph.count_edges(), 0);
}

#[test]
fn test_star_wars_strengths() {
    let graph = star_wars_graph();
    let strength = degree_centrality(&graph).unwrap();

    // LUKE shares the most scenes overall
    assert_eq!(strength.get("LUKE"), Some(&107.0));
    assert_eq!(strength.get("HAN"), Some(&52.0));
    assert_eq!(
        strength.max().map(|(node, _)| node.name().to_string()),
        Some("LUKE".to_string())
    );

    // every scene shared is counted once from each side
    let total: f64 = strength.get_all_values().iter().sum();
    assert_eq!(total, 510.0);
}

#[test]
fn test_star_wars_pendants() {
    let graph = star_wars_graph();

    // JABBA and GREEDO only ever talk to HAN, so nothing routes through them
    let betweenness = betweenness_centrality(&graph, true).unwrap();
    assert_eq!(betweenness.get("JABBA"), Some(&0.0));
    assert_eq!(betweenness.get("GREEDO"), Some(&0.0));
    assert!(*betweenness.get("HAN").unwrap() > 0.0);

    // hanging off the edge of the cast also means being further from it
    let closeness = closeness_centrality(&graph).unwrap();
    assert!(closeness.get("JABBA").unwrap() < closeness.get("HAN").unwrap());
}

#[test]
fn test_rankings_are_reproducible() {
    let graph = star_wars_graph();

    let first = betweenness_centrality(&graph, true).unwrap();
    let second = betweenness_centrality(&graph, true).unwrap();
    assert_eq!(first.get_all_values(), second.get_all_values());

    let first = closeness_centrality(&graph).unwrap();
    let second = closeness_centrality(&graph).unwrap();
    assert_eq!(first.get_all_values(), second.get_all_values());
}
