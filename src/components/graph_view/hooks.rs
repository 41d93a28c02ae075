use super::theme::Color;
use super::types::Node;

/// Supplies per-node and per-edge presentation to the bridge.
///
/// Every method has a neutral default, so a view only overrides what it
/// renders. Returned text is raw; the bridge escapes it before sending.
pub trait NodeDecorator<T> {
	/// Title shown above the node body.
	fn node_title(&self, node: &Node<T>) -> String {
		let _ = node;
		String::new()
	}

	/// Body text of the node.
	fn node_content(&self, node: &Node<T>) -> String {
		let _ = node;
		String::new()
	}

	/// Stroke colour of the edge `from -> to`.
	fn edge_color(&self, from: &Node<T>, to: &Node<T>) -> Color {
		let _ = (from, to);
		Color::BLACK
	}
}

/// Empty titles, empty content, black edges.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainDecorator;

impl<T> NodeDecorator<T> for PlainDecorator {}

impl<T, D: NodeDecorator<T> + ?Sized> NodeDecorator<T> for &D {
	fn node_title(&self, node: &Node<T>) -> String {
		(**self).node_title(node)
	}

	fn node_content(&self, node: &Node<T>) -> String {
		(**self).node_content(node)
	}

	fn edge_color(&self, from: &Node<T>, to: &Node<T>) -> Color {
		(**self).edge_color(from, to)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph_view::types::NodeId;

	struct Labels;

	impl NodeDecorator<&'static str> for Labels {
		fn node_title(&self, node: &Node<&'static str>) -> String {
			node.data.to_uppercase()
		}
	}

	#[test]
	fn defaults_are_neutral() {
		let node = Node { id: NodeId(1), data: () };
		assert_eq!(PlainDecorator.node_title(&node), "");
		assert_eq!(PlainDecorator.node_content(&node), "");
		assert_eq!(PlainDecorator.edge_color(&node, &node), Color::BLACK);
	}

	#[test]
	fn overrides_keep_remaining_defaults() {
		let node = Node { id: NodeId(1), data: "entry" };
		let by_ref = &Labels;
		assert_eq!(by_ref.node_title(&node), "ENTRY");
		assert_eq!(by_ref.node_content(&node), "");
		assert_eq!(by_ref.edge_color(&node, &node), Color::BLACK);
	}
}
