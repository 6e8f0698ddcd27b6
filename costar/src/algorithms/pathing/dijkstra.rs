/// Dijkstra's algorithm
use crate::{errors::GraphError, graph::Graph};
use costar_api::core::{entities::VID, storage::arc_str::ArcStr};
use ordered_float::OrderedFloat;
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, collections::BinaryHeap};

/// A state in the Dijkstra algorithm with a cost and a node id.
#[derive(PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) cost: OrderedFloat<f64>,
    pub(crate) node: VID,
}

impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        // flipped so the max-heap pops the cheapest state first; ties break
        // on the node id to keep the visit order reproducible
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Shortest-path distances from `source` to every node, as a dense vector
/// indexed by internal node id. Unreachable nodes get `f64::INFINITY`.
pub(crate) fn dijkstra_distances(g: &Graph, source: VID) -> Vec<f64> {
    let mut dist = vec![f64::INFINITY; g.count_nodes()];
    let mut heap = BinaryHeap::new();
    dist[source.index()] = 0.0;
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost.into_inner() > dist[node.index()] {
            continue;
        }
        for (nbr, weight) in g.neighbours_iter(node) {
            let next_cost = cost.into_inner() + weight;
            if next_cost < dist[nbr.index()] {
                dist[nbr.index()] = next_cost;
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node: nbr,
                });
            }
        }
    }
    dist
}

/// Finds the shortest paths from a single source to multiple targets in the
/// graph. Path length is the sum of edge weights along the path, not the
/// number of hops.
///
/// # Arguments
///
/// * `g` - The graph to search in.
/// * `source` - The name of the source node.
/// * `targets` - The names of the target nodes. Names that are not in the
///   graph are skipped.
///
/// # Returns
///
/// Returns a map from target node name to a tuple of the total cost and the
/// node names along the shortest path, source and target included. Targets
/// that cannot be reached from the source do not appear in the map. Fails
/// with [`GraphError::NodeMissingError`] if the source is not in the graph.
pub fn dijkstra_single_source_shortest_paths<T: AsRef<str>>(
    g: &Graph,
    source: impl AsRef<str>,
    targets: Vec<T>,
) -> Result<FxHashMap<ArcStr, (f64, Vec<ArcStr>)>, GraphError> {
    let source = g.resolve(source.as_ref())?;

    let mut target_nodes = vec![false; g.count_nodes()];
    for target in &targets {
        if let Some(node) = g.node(target.as_ref()) {
            target_nodes[node.id.index()] = true;
        }
    }

    let mut dist = vec![f64::INFINITY; g.count_nodes()];
    let mut predecessor: FxHashMap<VID, VID> = FxHashMap::default();
    let mut paths: FxHashMap<ArcStr, (f64, Vec<ArcStr>)> = FxHashMap::default();
    let mut heap = BinaryHeap::new();
    dist[source.index()] = 0.0;
    heap.push(State {
        cost: OrderedFloat(0.0),
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost.into_inner() > dist[node.index()] {
            continue;
        }
        if target_nodes[node.index()] {
            // the node is settled here, so the recorded path is final
            target_nodes[node.index()] = false;
            let mut path = vec![node];
            let mut current = node;
            while let Some(&prev) = predecessor.get(&current) {
                path.push(prev);
                current = prev;
            }
            path.reverse();
            paths.insert(
                g.node_name(node),
                (
                    cost.into_inner(),
                    path.into_iter().map(|v| g.node_name(v)).collect(),
                ),
            );
        }
        for (nbr, weight) in g.neighbours_iter(node) {
            let next_cost = cost.into_inner() + weight;
            if next_cost < dist[nbr.index()] {
                dist[nbr.index()] = next_cost;
                predecessor.insert(nbr, node);
                heap.push(State {
                    cost: OrderedFloat(next_cost),
                    node: nbr,
                });
            }
        }
    }

    Ok(paths)
}
