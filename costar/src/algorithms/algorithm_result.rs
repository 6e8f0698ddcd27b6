use crate::graph::{Graph, NodeView};
use num_traits::float::FloatCore;
use ordered_float::OrderedFloat;
use std::{cmp::Ordering, collections::HashMap, fmt, marker::PhantomData};

pub trait AsOrd<T: ?Sized + Ord> {
    /// Views the value as a totally ordered type, so result containers can
    /// rank values that are not `Ord` themselves. Floats map to
    /// [`OrderedFloat`], anything already `Ord` maps to itself; unlike
    /// `AsRef`, the identity conversion is blanket-implemented.
    fn as_ord(&self) -> &T;
}

impl<T: Ord> AsOrd<T> for T {
    fn as_ord(&self) -> &T {
        self
    }
}

impl<T: FloatCore> AsOrd<OrderedFloat<T>> for T {
    fn as_ord(&self) -> &OrderedFloat<T> {
        self.into()
    }
}

/// Names the algorithm a result came from and the type of its values, for
/// display purposes.
pub struct AlgorithmRepr {
    pub algo_name: String,
    pub result_type: String,
}

/// The result of running an algorithm over a graph: one value per node.
///
/// Values are stored densely in internal node order, so lookups by name,
/// iteration and rankings all come back in a stable order. The `O` type
/// parameter is the totally ordered stand-in used for sorting; for float
/// values it is [`OrderedFloat`], for everything `Ord` it is the value type
/// itself.
pub struct AlgorithmResult<'g, V, O = V> {
    pub algo_repr: AlgorithmRepr,
    pub graph: &'g Graph,
    values: Vec<V>,
    marker: PhantomData<O>,
}

impl<'g, V, O> AlgorithmResult<'g, V, O>
where
    V: Clone,
{
    /// Creates a new instance of `AlgorithmResult` with the provided values.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph the algorithm ran on.
    /// * `algo_name` - The name of the algorithm.
    /// * `result_type` - The type of the result values.
    /// * `values` - One value per node, in internal node order.
    pub fn new(graph: &'g Graph, algo_name: &str, result_type: &str, values: Vec<V>) -> Self {
        debug_assert_eq!(graph.count_nodes(), values.len());
        Self {
            algo_repr: AlgorithmRepr {
                algo_name: algo_name.to_string(),
                result_type: result_type.to_string(),
            },
            graph,
            values,
            marker: PhantomData,
        }
    }

    /// Returns a formatted string representation of the algorithm run.
    pub fn repr(&self) -> String {
        format!(
            "Algorithm Name: {}, Number of Nodes: {}, Result Type: {}",
            &self.algo_repr.algo_name,
            self.values.len(),
            &self.algo_repr.result_type
        )
    }

    /// Returns the value for the node with the given name, `None` if the
    /// node is not in the graph.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&V> {
        let node = self.graph.node(name)?;
        self.values.get(node.id.index())
    }

    /// Returns all values in internal node order.
    pub fn get_all_values(&self) -> Vec<V> {
        self.values.clone()
    }

    /// Returns a hashmap with node names and values.
    pub fn get_all_with_names(&self) -> HashMap<String, V> {
        self.iter()
            .map(|(node, value)| (node.name().to_string(), value.clone()))
            .collect()
    }

    /// Iterate over nodes with their values, in internal node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeView<'g>, &V)> + '_ {
        self.graph.nodes().zip(self.values.iter())
    }

    /// Nodes with their values, ordered by node name.
    ///
    /// # Arguments
    ///
    /// * `reverse` - If `true`, sorts in descending order; otherwise in
    ///   ascending order.
    pub fn sort_by_node_name(&self, reverse: bool) -> Vec<(NodeView<'g>, V)> {
        let mut sorted: Vec<(NodeView<'g>, V)> = self.cloned_entries();
        sorted.sort_by(|(a, _), (b, _)| {
            if reverse {
                b.name().cmp(&a.name())
            } else {
                a.name().cmp(&b.name())
            }
        });
        sorted
    }

    /// Nodes with their values sorted by value with the given comparator.
    /// Ties keep internal node order.
    ///
    /// # Arguments
    ///
    /// * `cmp` - The comparator to order values with.
    /// * `reverse` - If `true`, sorts in descending order; otherwise in
    ///   ascending order.
    pub fn sort_by_values<F: FnMut(&V, &V) -> Ordering>(
        &self,
        mut cmp: F,
        reverse: bool,
    ) -> Vec<(NodeView<'g>, V)> {
        let mut all_as_vec = self.cloned_entries();
        all_as_vec.sort_by(|a, b| {
            let order = cmp(&a.1, &b.1);
            if reverse {
                order.reverse()
            } else {
                order
            }
        });
        all_as_vec
    }

    /// Retrieves the top-k entries based on the given comparator.
    ///
    /// # Arguments
    ///
    /// * `cmp` - The comparator to order values with.
    /// * `k` - The number of entries to retrieve.
    /// * `percentage` - If `true`, `k` is treated as a percentage of the
    ///   node count.
    /// * `reverse` - If `true`, the highest values come first.
    pub fn top_k_by<F: FnMut(&V, &V) -> Ordering>(
        &self,
        cmp: F,
        k: usize,
        percentage: bool,
        reverse: bool,
    ) -> Vec<(NodeView<'g>, V)> {
        let k = if percentage {
            let total_count = self.values.len();
            (total_count as f64 * (k as f64 / 100.0)) as usize
        } else {
            k
        };
        self.sort_by_values(cmp, reverse)
            .into_iter()
            .take(k)
            .collect()
    }

    pub fn min_by<F: FnMut(&V, &V) -> Ordering>(&self, mut cmp: F) -> Option<(NodeView<'g>, V)> {
        self.cloned_entries()
            .into_iter()
            .min_by(|(_, a_value), (_, b_value)| cmp(a_value, b_value))
    }

    pub fn max_by<F: FnMut(&V, &V) -> Ordering>(&self, mut cmp: F) -> Option<(NodeView<'g>, V)> {
        self.cloned_entries()
            .into_iter()
            .max_by(|(_, a_value), (_, b_value)| cmp(a_value, b_value))
    }

    pub fn median_by<F: FnMut(&V, &V) -> Ordering>(&self, mut cmp: F) -> Option<(NodeView<'g>, V)> {
        let mut items = self.cloned_entries();
        let len = items.len();
        if len == 0 {
            return None;
        }

        items.sort_by(|(_, a_value), (_, b_value)| cmp(a_value, b_value));
        let median_index = len / 2;
        Some(items[median_index].clone())
    }

    fn cloned_entries(&self) -> Vec<(NodeView<'g>, V)> {
        self.iter()
            .map(|(node, value)| (node, value.clone()))
            .collect()
    }
}

impl<'g, V, O> AlgorithmResult<'g, V, O>
where
    V: Clone + AsOrd<O>,
    O: Ord,
{
    /// Nodes with their values sorted by value.
    ///
    /// # Arguments
    ///
    /// * `reverse` - If `true`, sorts in descending order; otherwise in
    ///   ascending order.
    pub fn sort_by_value(&self, reverse: bool) -> Vec<(NodeView<'g>, V)> {
        self.sort_by_values(|a, b| O::cmp(a.as_ord(), b.as_ord()), reverse)
    }

    /// Retrieves the top-k entries based on the values.
    ///
    /// # Arguments
    ///
    /// * `k` - The number of entries to retrieve.
    /// * `percentage` - If `true`, `k` is treated as a percentage of the
    ///   node count.
    /// * `reverse` - If `true`, the highest values come first.
    pub fn top_k(&self, k: usize, percentage: bool, reverse: bool) -> Vec<(NodeView<'g>, V)> {
        self.top_k_by(
            |a, b| O::cmp(a.as_ord(), b.as_ord()),
            k,
            percentage,
            reverse,
        )
    }

    /// Returns the node with the minimum value.
    pub fn min(&self) -> Option<(NodeView<'g>, V)> {
        self.min_by(|a, b| O::cmp(a.as_ord(), b.as_ord()))
    }

    /// Returns the node with the maximum value.
    pub fn max(&self) -> Option<(NodeView<'g>, V)> {
        self.max_by(|a, b| O::cmp(a.as_ord(), b.as_ord()))
    }

    /// Returns the node with the median value.
    pub fn median(&self) -> Option<(NodeView<'g>, V)> {
        self.median_by(|a, b| O::cmp(a.as_ord(), b.as_ord()))
    }
}

impl<V: fmt::Debug, O> fmt::Display for AlgorithmResult<'_, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AlgorithmResult {{")?;
        writeln!(f, "  Algorithm Name: {}", self.algo_repr.algo_name)?;
        writeln!(f, "  Result Type: {}", self.algo_repr.result_type)?;
        writeln!(f, "  Number of Nodes: {}", self.values.len())?;
        writeln!(f, "  Results: [")?;

        for (node, value) in self.graph.nodes().zip(self.values.iter()) {
            writeln!(f, "    {}: {:?}", node.name(), value)?;
        }

        writeln!(f, "  ]")?;
        writeln!(f, "}}")
    }
}

impl<V: fmt::Debug, O> fmt::Debug for AlgorithmResult<'_, V, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "AlgorithmResult {{")?;
        writeln!(f, "  Algorithm Name: {:?}", self.algo_repr.algo_name)?;
        writeln!(f, "  Result Type: {:?}", self.algo_repr.result_type)?;
        writeln!(f, "  Number of Nodes: {:?}", self.values.len())?;
        writeln!(f, "  Results: [")?;

        for (node, value) in self.graph.nodes().zip(self.values.iter()) {
            writeln!(f, "    {:?}: {:?}", node.name(), value)?;
        }

        writeln!(f, "  ]")?;
        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod algorithm_result_test {
    use super::*;
    use crate::graph::Graph;
    use costar_api::core::entities::properties::NO_PROPS;
    use ordered_float::OrderedFloat;

    fn four_node_graph() -> Graph {
        let mut g = Graph::new();
        for name in ["A", "B", "C", "D"] {
            g.add_node(name, NO_PROPS).expect("Failed to add node");
        }
        g
    }

    fn count_result(graph: &Graph) -> AlgorithmResult<'_, u64> {
        AlgorithmResult::new(
            graph,
            "Scene Count",
            std::any::type_name::<u64>(),
            vec![10, 20, 30, 5],
        )
    }

    fn score_result(graph: &Graph) -> AlgorithmResult<'_, f64, OrderedFloat<f64>> {
        AlgorithmResult::new(
            graph,
            "Influence Score",
            std::any::type_name::<f64>(),
            vec![10.0, 20.0, 30.0, 5.0],
        )
    }

    #[test]
    fn min_max_median_pick_the_right_nodes() {
        let graph = four_node_graph();
        let algo_result = count_result(&graph);
        assert_eq!(
            algo_result.min().map(|(n, v)| (n.name().to_string(), v)),
            Some(("D".to_string(), 5))
        );
        assert_eq!(
            algo_result.max().map(|(n, v)| (n.name().to_string(), v)),
            Some(("C".to_string(), 30))
        );
        assert_eq!(
            algo_result.median().map(|(n, v)| (n.name().to_string(), v)),
            Some(("B".to_string(), 20))
        );

        let algo_result = score_result(&graph);
        assert_eq!(
            algo_result.min().map(|(n, v)| (n.name().to_string(), v)),
            Some(("D".to_string(), 5.0))
        );
        assert_eq!(
            algo_result.max().map(|(n, v)| (n.name().to_string(), v)),
            Some(("C".to_string(), 30.0))
        );
        assert_eq!(
            algo_result.median().map(|(n, v)| (n.name().to_string(), v)),
            Some(("B".to_string(), 20.0))
        );
    }

    #[test]
    fn lookup_by_name() {
        let graph = four_node_graph();
        let algo_result = count_result(&graph);
        assert_eq!(algo_result.get("C"), Some(&30u64));
        assert_eq!(algo_result.get("E"), None);

        let algo_result = score_result(&graph);
        assert_eq!(algo_result.get("C"), Some(&30.0f64));
    }

    #[test]
    fn sorting_by_value_and_by_name() {
        let graph = four_node_graph();
        let algo_result = score_result(&graph);
        let sorted = algo_result.sort_by_value(true);
        assert_eq!(sorted[0].0.name(), "C");
        let sorted = algo_result.sort_by_value(false);
        assert_eq!(sorted[0].0.name(), "D");

        let by_name = algo_result.sort_by_node_name(false);
        assert_eq!(by_name[0].0.name(), "A");
        let by_name = algo_result.sort_by_node_name(true);
        assert_eq!(by_name[0].0.name(), "D");
    }

    #[test]
    fn top_k_absolute_and_percentage() {
        let graph = four_node_graph();
        let algo_result = count_result(&graph);

        let top_k = algo_result.top_k(2, false, false);
        assert_eq!(top_k[0].0.name(), "D");
        assert_eq!(top_k[1].0.name(), "A");

        let top_k = algo_result.top_k(2, false, true);
        assert_eq!(top_k[0].0.name(), "C");
        assert_eq!(top_k.len(), 2);

        let top_half = algo_result.top_k(50, true, true);
        assert_eq!(top_half.len(), 2);
    }

    #[test]
    fn exporting_to_a_name_keyed_map() {
        let graph = four_node_graph();
        let algo_result = score_result(&graph);
        let as_map = algo_result.get_all_with_names();
        assert_eq!(as_map.get("A"), Some(&10.0));
        assert_eq!(as_map.len(), 4);
        assert_eq!(algo_result.get_all_values().len(), 4);
    }

    #[test]
    fn repr_names_the_algorithm() {
        let graph = four_node_graph();
        let algo_result = count_result(&graph);
        assert!(algo_result.repr().contains("Scene Count"));
        assert!(format!("{}", algo_result).contains("Number of Nodes: 4"));
    }

    #[test]
    fn floats_order_totally_through_as_ord() {
        assert_eq!(1.5f64.as_ord().cmp(2.5f64.as_ord()), Ordering::Less);
        assert_eq!(f64::NAN.as_ord().cmp(f64::NAN.as_ord()), Ordering::Equal);
        assert_eq!(0.25f32.as_ord(), &OrderedFloat(0.25f32));
    }
}
