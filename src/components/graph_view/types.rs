use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GraphError;

/// Stable identity of a node for the lifetime of its graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<u64> for NodeId {
	fn from(id: u64) -> Self {
		Self(id)
	}
}

/// A graph node carrying an opaque caller payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
	/// Identity, unique within the graph.
	pub id: NodeId,
	/// Caller payload, read by the decorator.
	pub data: T,
}

/// Read-only view of a directed graph, as consumed by the bridge.
///
/// Both iterators must yield in a stable order: the bridge emits commands in
/// exactly the order it observes here.
pub trait GraphSource {
	/// Payload carried by each node.
	type Data;

	/// All nodes, in insertion order.
	fn nodes(&self) -> impl Iterator<Item = &Node<Self::Data>>;

	/// Successors of `node`, in adjacency order.
	fn edges(&self, node: &Node<Self::Data>) -> impl Iterator<Item = &Node<Self::Data>>;
}

/// Insertion-ordered directed graph with per-node adjacency lists.
///
/// Parallel edges and self-loops are allowed. Every adjacency entry refers to
/// a node of this graph; [`Graph::add_edge`] refuses anything else.
#[derive(Clone, Debug)]
pub struct Graph<T> {
	nodes: Vec<Node<T>>,
	adjacency: Vec<Vec<usize>>,
	index: HashMap<NodeId, usize>,
}

impl<T> Default for Graph<T> {
	fn default() -> Self {
		Self {
			nodes: Vec::new(),
			adjacency: Vec::new(),
			index: HashMap::new(),
		}
	}
}

impl<T> Graph<T> {
	/// An empty graph.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a node. Fails if `id` is already present.
	pub fn add_node(&mut self, id: u64, data: T) -> Result<(), GraphError> {
		let id = NodeId(id);
		if self.index.contains_key(&id) {
			return Err(GraphError::DuplicateNode(id));
		}
		self.index.insert(id, self.nodes.len());
		self.nodes.push(Node { id, data });
		self.adjacency.push(Vec::new());
		Ok(())
	}

	/// Appends `to` to the successors of `from`. Both must exist.
	pub fn add_edge(&mut self, from: u64, to: u64) -> Result<(), GraphError> {
		let (from, to) = (NodeId(from), NodeId(to));
		let src = *self.index.get(&from).ok_or(GraphError::UnknownNode(from))?;
		let tgt = *self.index.get(&to).ok_or(GraphError::UnknownNode(to))?;
		self.adjacency[src].push(tgt);
		Ok(())
	}

	/// The node with `id`, if present.
	pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
		self.index.get(&id).map(|&idx| &self.nodes[idx])
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether the graph has no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Total adjacency count, parallel edges included.
	pub fn edge_count(&self) -> usize {
		self.adjacency.iter().map(Vec::len).sum()
	}
}

impl<T> GraphSource for Graph<T> {
	type Data = T;

	fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
		self.nodes.iter()
	}

	fn edges(&self, node: &Node<T>) -> impl Iterator<Item = &Node<T>> {
		let successors = match self.index.get(&node.id) {
			Some(&idx) => self.adjacency[idx].as_slice(),
			None => &[][..],
		};
		successors.iter().map(|&idx| &self.nodes[idx])
	}
}
