use crate::graph::Graph;
use costar_api::core::{
    entities::{properties::Prop, VID},
    storage::arc_str::ArcStr,
};
use rustc_hash::FxHashMap;
use std::fmt;

/// A read-only view of a node in a [`Graph`].
#[derive(Copy, Clone)]
pub struct NodeView<'g> {
    graph: &'g Graph,
    pub id: VID,
}

impl<'g> NodeView<'g> {
    pub(crate) fn new(graph: &'g Graph, id: VID) -> Self {
        Self { graph, id }
    }

    /// The name the node was added under.
    pub fn name(&self) -> ArcStr {
        self.graph.node_name(self.id)
    }

    /// All attributes attached to the node.
    pub fn properties(&self) -> &'g FxHashMap<ArcStr, Prop> {
        &self.graph.node_entry(self.id).properties
    }

    /// Look up a single attribute by key.
    pub fn property(&self, key: &str) -> Option<&'g Prop> {
        self.graph.node_entry(self.id).properties.get(key)
    }

    /// Number of distinct neighbours.
    pub fn degree(&self) -> usize {
        self.graph.degree(self.id)
    }

    /// Sum of the weights of all incident edges, also called strength.
    pub fn weighted_degree(&self) -> f64 {
        self.graph.neighbours_iter(self.id).map(|(_, w)| w).sum()
    }

    /// The neighbours of this node together with the connecting edge
    /// weights, ordered by internal neighbour id.
    pub fn neighbours(&self) -> impl Iterator<Item = (NodeView<'g>, f64)> + 'g {
        let graph = self.graph;
        graph
            .neighbours_iter(self.id)
            .map(move |(n, w)| (NodeView::new(graph, n), w))
    }
}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}

impl PartialEq for NodeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for NodeView<'_> {}
