use crate::graph::{Graph, NodeView};
use costar_api::core::entities::EID;
use std::fmt;

/// A read-only view of an edge in a [`Graph`].
#[derive(Copy, Clone)]
pub struct EdgeView<'g> {
    graph: &'g Graph,
    pub id: EID,
}

impl<'g> EdgeView<'g> {
    pub(crate) fn new(graph: &'g Graph, id: EID) -> Self {
        Self { graph, id }
    }

    /// The endpoint that joined the graph first.
    pub fn src(&self) -> NodeView<'g> {
        NodeView::new(self.graph, self.graph.edge_entry(self.id).src)
    }

    /// The endpoint that joined the graph second.
    pub fn dst(&self) -> NodeView<'g> {
        NodeView::new(self.graph, self.graph.edge_entry(self.id).dst)
    }

    /// The accumulated weight of the edge.
    pub fn weight(&self) -> f64 {
        self.graph.edge_entry(self.id).weight
    }
}

impl fmt::Debug for EdgeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeView")
            .field("id", &self.id)
            .field("src", &self.src().name())
            .field("dst", &self.dst().name())
            .field("weight", &self.weight())
            .finish()
    }
}

impl PartialEq for EdgeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EdgeView<'_> {}
