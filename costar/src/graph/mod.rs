//! The co-occurrence graph itself: an undirected simple graph with
//! positively weighted edges and opaque node attributes.
//!
//! Graphs are built once through [`Graph::add_node`] and [`Graph::add_edge`]
//! and read afterwards; all analysis takes `&Graph`.

use crate::errors::GraphError;
use costar_api::core::{
    entities::{properties::Prop, EID, VID},
    storage::{
        arc_str::ArcStr,
        dict_mapper::{DictMapper, MaybeNew},
    },
};
use rustc_hash::FxHashMap;
use sorted_vector_map::SortedVectorMap;

mod edge;
mod node;

pub use edge::EdgeView;
pub use node::NodeView;

#[derive(Debug, Clone, Default)]
pub(crate) struct NodeStore {
    pub(crate) properties: FxHashMap<ArcStr, Prop>,
}

#[derive(Debug, Clone)]
pub(crate) struct EdgeStore {
    // endpoints are normalised so that src < dst
    pub(crate) src: VID,
    pub(crate) dst: VID,
    pub(crate) weight: f64,
}

/// An in-memory undirected weighted graph.
///
/// Nodes are identified by name and mapped to dense internal ids in
/// insertion order. Each unordered pair of nodes holds at most one edge;
/// adding an edge for a pair that is already connected accumulates the
/// weight onto the existing edge instead of creating a parallel one.
///
/// # Examples
///
/// ```rust
/// use costar::prelude::*;
///
/// let mut graph = Graph::new();
/// graph.add_node("LUKE", [("affiliation", Prop::str("rebel"))]).unwrap();
/// graph.add_node("LEIA", NO_PROPS).unwrap();
/// graph.add_edge("LUKE", "LEIA", 3.0).unwrap();
///
/// assert_eq!(graph.count_nodes(), 2);
/// assert_eq!(graph.count_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Graph {
    mapper: DictMapper,
    nodes: Vec<NodeStore>,
    edges: Vec<EdgeStore>,
    // one entry per node, keyed by neighbour id; every edge is registered
    // under both endpoints
    adj: Vec<SortedVectorMap<VID, EID>>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the node, unique within the graph.
    /// * `props` - Attributes to attach to the node, `NO_PROPS` for none.
    ///   The graph stores these verbatim and never interprets them.
    ///
    /// # Returns
    ///
    /// The internal id of the new node, or [`GraphError::NodeExistsError`]
    /// if the name is already taken.
    pub fn add_node<K: Into<ArcStr>, V: Into<Prop>>(
        &mut self,
        name: impl AsRef<str>,
        props: impl IntoIterator<Item = (K, V)>,
    ) -> Result<VID, GraphError> {
        let name = name.as_ref();
        match self.mapper.get_or_create_id(name) {
            MaybeNew::Existing(_) => Err(GraphError::NodeExistsError(name.into())),
            MaybeNew::New(vid) => {
                let properties = props
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect();
                self.nodes.push(NodeStore { properties });
                self.adj.push(SortedVectorMap::new());
                Ok(vid)
            }
        }
    }

    /// Add an undirected weighted edge between two existing nodes.
    ///
    /// If the pair is already connected the given weight is added onto the
    /// existing edge, so repeated observations of the same pair accumulate.
    ///
    /// # Arguments
    ///
    /// * `src` - The name of one endpoint.
    /// * `dst` - The name of the other endpoint.
    /// * `weight` - The weight to record, must be positive and finite.
    ///
    /// # Returns
    ///
    /// The id of the affected edge. Fails with
    /// [`GraphError::InvalidWeightError`] for weights that are not positive
    /// and finite (or when merging would overflow the stored weight),
    /// [`GraphError::NodeMissingError`] for unknown endpoints and
    /// [`GraphError::SelfLoopError`] when both endpoints are the same node.
    /// Nothing is recorded unless all checks pass.
    pub fn add_edge(
        &mut self,
        src: impl AsRef<str>,
        dst: impl AsRef<str>,
        weight: f64,
    ) -> Result<EID, GraphError> {
        let src = src.as_ref();
        let dst = dst.as_ref();
        if !weight.is_finite() || weight <= 0.0 {
            return Err(GraphError::InvalidWeightError {
                src: src.into(),
                dst: dst.into(),
                weight,
            });
        }
        let src_id = self.resolve(src)?;
        let dst_id = self.resolve(dst)?;
        if src_id == dst_id {
            return Err(GraphError::SelfLoopError(src.into()));
        }

        if let Some(&eid) = self.adj[src_id.index()].get(&dst_id) {
            // two finite weights can still sum past f64::MAX
            let merged = self.edges[eid.index()].weight + weight;
            if !merged.is_finite() {
                return Err(GraphError::InvalidWeightError {
                    src: src.into(),
                    dst: dst.into(),
                    weight: merged,
                });
            }
            self.edges[eid.index()].weight = merged;
            return Ok(eid);
        }

        let (lo, hi) = if src_id < dst_id {
            (src_id, dst_id)
        } else {
            (dst_id, src_id)
        };
        let eid = EID(self.edges.len());
        self.edges.push(EdgeStore {
            src: lo,
            dst: hi,
            weight,
        });
        self.adj[src_id.index()].insert(dst_id, eid);
        self.adj[dst_id.index()].insert(src_id, eid);
        Ok(eid)
    }

    /// Check if a node with the given name is in the graph.
    pub fn has_node(&self, name: impl AsRef<str>) -> bool {
        self.mapper.get_id(name.as_ref()).is_some()
    }

    /// Look up a node by name.
    pub fn node(&self, name: impl AsRef<str>) -> Option<NodeView<'_>> {
        self.mapper
            .get_id(name.as_ref())
            .map(|vid| NodeView::new(self, vid))
    }

    /// The neighbours of a node together with the connecting edge weights,
    /// ordered by internal neighbour id.
    pub fn neighbours(
        &self,
        name: impl AsRef<str>,
    ) -> Result<impl Iterator<Item = (NodeView<'_>, f64)> + '_, GraphError> {
        let vid = self.resolve(name.as_ref())?;
        Ok(self
            .neighbours_iter(vid)
            .map(move |(n, w)| (NodeView::new(self, n), w)))
    }

    /// Number of nodes in the graph.
    pub fn count_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges in the graph. Each unordered pair counts once.
    pub fn count_edges(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeView<'_>> + '_ {
        (0..self.nodes.len()).map(move |i| NodeView::new(self, VID(i)))
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> + '_ {
        (0..self.edges.len()).map(move |i| EdgeView::new(self, EID(i)))
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<VID, GraphError> {
        self.mapper
            .get_id(name)
            .ok_or_else(|| GraphError::NodeMissingError(name.into()))
    }

    pub(crate) fn node_name(&self, id: VID) -> ArcStr {
        self.mapper.get_name(id)
    }

    pub(crate) fn node_entry(&self, id: VID) -> &NodeStore {
        &self.nodes[id.index()]
    }

    pub(crate) fn edge_entry(&self, id: EID) -> &EdgeStore {
        &self.edges[id.index()]
    }

    pub(crate) fn degree(&self, id: VID) -> usize {
        self.adj[id.index()].len()
    }

    pub(crate) fn neighbours_iter(&self, id: VID) -> impl Iterator<Item = (VID, f64)> + '_ {
        self.adj[id.index()]
            .iter()
            .map(move |(&n, &e)| (n, self.edges[e.index()].weight))
    }
}
