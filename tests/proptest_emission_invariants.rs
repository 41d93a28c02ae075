//! Property-based invariants of a render session.
//!
//! Verifies:
//! 1. One `SetNode` per node and one `SetEdge` per adjacency entry
//! 2. Session shape: InitGraph, nodes, edges, RenderGraph
//! 3. Nodes follow graph order; edges follow (node order, adjacency order)
//! 4. Escaped node text never carries markup characters and decodes back
//! 5. Determinism: the same graph yields the same stream
//! 6. Script lines carry the same ids and text as the command and its JSON form

use flow_graph_view::{
	Command, Graph, GraphSource, GraphViewBridge, Node, NodeDecorator, NodeId, Presentation,
	StreamSink,
};
use proptest::prelude::*;
use serde_json::Value;

/// Titles nodes by id and uses the payload as content.
struct Payload;

impl NodeDecorator<String> for Payload {
	fn node_title(&self, node: &Node<String>) -> String {
		format!("<{}>", node.id)
	}

	fn node_content(&self, node: &Node<String>) -> String {
		node.data.clone()
	}
}

// ── Strategy helpers ──────────────────────────────────────────────────

/// Distinct ids in random order, with random content and adjacency.
fn arb_graph() -> impl Strategy<Value = Graph<String>> {
	prop::collection::btree_set(any::<u64>(), 0..24)
		.prop_flat_map(|ids| {
			let ids: Vec<u64> = ids.into_iter().collect();
			let n = ids.len();
			let order = Just(ids).prop_shuffle();
			let contents = prop::collection::vec(".{0,12}", n);
			let edges = if n == 0 {
				Just(Vec::new()).boxed()
			} else {
				prop::collection::vec((0..n, 0..n), 0..48).boxed()
			};
			(order, contents, edges)
		})
		.prop_map(|(ids, contents, edges)| {
			let mut graph = Graph::new();
			for (&id, content) in ids.iter().zip(contents) {
				graph.add_node(id, content).unwrap();
			}
			for (from, to) in edges {
				graph.add_edge(ids[from], ids[to]).unwrap();
			}
			graph
		})
}

fn render(graph: &Graph<String>) -> Vec<Command> {
	let mut bridge = GraphViewBridge::new(Vec::new(), Payload, Presentation::default());
	bridge.on_surface_ready().unwrap();
	bridge.sink_mut().clear();
	bridge.set_graph(graph).unwrap();
	bridge.into_sink()
}

/// The session as script lines, skipping page setup and styles.
fn render_script(graph: &Graph<String>) -> Vec<String> {
	let sink = StreamSink::script(Vec::new());
	let mut bridge = GraphViewBridge::new(sink, Payload, Presentation::default());
	bridge.on_surface_ready().unwrap();
	bridge.set_graph(graph).unwrap();
	let text = String::from_utf8(bridge.into_sink().into_inner()).unwrap();
	text.lines().skip(3).map(str::to_owned).collect()
}

/// Splits `GraphView.method(args);` into the method and its decoded arguments.
fn decode_script(line: &str) -> (String, Vec<Value>) {
	let call = line
		.strip_prefix("GraphView.")
		.and_then(|l| l.strip_suffix(");"))
		.unwrap_or_else(|| panic!("not a surface call: {line}"));
	let (method, args) = call
		.split_once('(')
		.unwrap_or_else(|| panic!("no argument list: {line}"));
	let args: Vec<Value> = serde_json::from_str(&format!("[{args}]")).unwrap();
	(method.to_owned(), args)
}

fn unescape(text: &str) -> String {
	text.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}

proptest! {
	#[test]
	fn counts_match_graph(graph in arb_graph()) {
		let commands = render(&graph);
		let nodes = commands.iter().filter(|c| matches!(c, Command::SetNode { .. })).count();
		let edges = commands.iter().filter(|c| matches!(c, Command::SetEdge { .. })).count();
		prop_assert_eq!(nodes, graph.len());
		prop_assert_eq!(edges, graph.edge_count());
		prop_assert_eq!(commands.len(), graph.len() + graph.edge_count() + 2);
	}

	#[test]
	fn order_follows_graph(graph in arb_graph()) {
		let commands = render(&graph);
		prop_assert_eq!(commands.first(), Some(&Command::InitGraph));
		prop_assert_eq!(commands.last(), Some(&Command::RenderGraph));

		let body = &commands[1..commands.len() - 1];
		let (node_part, edge_part) = body.split_at(graph.len());

		let expected_nodes: Vec<NodeId> = graph.nodes().map(|n| n.id).collect();
		let sent_nodes: Vec<NodeId> = node_part
			.iter()
			.map(|c| match c {
				Command::SetNode { id, .. } => *id,
				other => panic!("expected SetNode, got {other:?}"),
			})
			.collect();
		prop_assert_eq!(sent_nodes, expected_nodes);

		let expected_edges: Vec<(NodeId, NodeId)> = graph
			.nodes()
			.flat_map(|from| graph.edges(from).map(move |to| (from.id, to.id)))
			.collect();
		let sent_edges: Vec<(NodeId, NodeId)> = edge_part
			.iter()
			.map(|c| match c {
				Command::SetEdge { from, to, .. } => (*from, *to),
				other => panic!("expected SetEdge, got {other:?}"),
			})
			.collect();
		prop_assert_eq!(sent_edges, expected_edges);
	}

	#[test]
	fn node_text_is_inert_markup(graph in arb_graph()) {
		let commands = render(&graph);
		for (cmd, node) in commands[1..].iter().zip(graph.nodes()) {
			let content = match cmd {
				Command::SetNode { content, .. } => content,
				other => panic!("expected SetNode, got {other:?}"),
			};
			prop_assert!(!content.contains(['<', '>', '"', '\'']));
			prop_assert_eq!(&unescape(content), &node.data);
		}
	}

	#[test]
	fn rendering_is_deterministic(graph in arb_graph()) {
		prop_assert_eq!(render(&graph), render(&graph));
	}

	#[test]
	fn script_lines_match_commands_and_json(graph in arb_graph()) {
		let commands = render(&graph);
		let lines = render_script(&graph);
		prop_assert_eq!(lines.len(), commands.len());

		for (line, cmd) in lines.iter().zip(&commands) {
			let (method, args) = decode_script(line);
			prop_assert_eq!(method.as_str(), cmd.method());
			let wire: Value = serde_json::from_str(&cmd.to_json().unwrap()).unwrap();
			match cmd {
				Command::SetNode { id, title, content } => {
					prop_assert_eq!(args.len(), 3);
					prop_assert_eq!(args[0].as_u64(), Some(id.0));
					prop_assert_eq!(&args[0], &wire["id"]);
					prop_assert_eq!(args[1].as_str(), Some(title.as_str()));
					prop_assert_eq!(&args[1], &wire["title"]);
					prop_assert_eq!(args[2].as_str(), Some(content.as_str()));
					prop_assert_eq!(&args[2], &wire["content"]);
				}
				Command::SetEdge { from, to, color } => {
					prop_assert_eq!(args.len(), 3);
					prop_assert_eq!(args[0].as_u64(), Some(from.0));
					prop_assert_eq!(&args[0], &wire["from"]);
					prop_assert_eq!(args[1].as_u64(), Some(to.0));
					prop_assert_eq!(&args[1], &wire["to"]);
					let color_name = color.name();
					prop_assert_eq!(args[2].as_str(), Some(color_name.as_str()));
					prop_assert_eq!(&args[2], &wire["color"]);
				}
				_ => prop_assert!(args.is_empty()),
			}
		}
	}
}
