use std::collections::HashSet;

use log::warn;

use super::command::Command;
use super::error::SurfaceError;
use super::hooks::NodeDecorator;
use super::sink::CommandSink;
use super::types::{GraphSource, NodeId};

/// Counts reported for one render session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
	/// One-based session number.
	pub session: u64,
	/// `SetNode` commands sent.
	pub nodes: usize,
	/// `SetEdge` commands sent.
	pub edges: usize,
	/// Adjacency entries whose target is not among the graph's nodes.
	pub skipped_edges: usize,
}

/// Emits one full session: `InitGraph`, nodes, edges, `RenderGraph`.
pub(super) fn render_session<G, D, S>(
	graph: &G,
	decorator: &D,
	sink: &mut S,
	session: u64,
) -> Result<RenderStats, SurfaceError>
where
	G: GraphSource,
	D: NodeDecorator<G::Data> + ?Sized,
	S: CommandSink + ?Sized,
{
	let mut stats = RenderStats {
		session,
		..RenderStats::default()
	};
	sink.dispatch(Command::InitGraph)?;
	let known = generate_nodes(graph, decorator, sink, &mut stats)?;
	generate_edges(graph, decorator, sink, &known, &mut stats)?;
	sink.dispatch(Command::RenderGraph)?;
	Ok(stats)
}

fn generate_nodes<G, D, S>(
	graph: &G,
	decorator: &D,
	sink: &mut S,
	stats: &mut RenderStats,
) -> Result<HashSet<NodeId>, SurfaceError>
where
	G: GraphSource,
	D: NodeDecorator<G::Data> + ?Sized,
	S: CommandSink + ?Sized,
{
	let mut known = HashSet::new();
	for node in graph.nodes() {
		let (title, content) = (decorator.node_title(node), decorator.node_content(node));
		sink.dispatch(Command::set_node(node.id, &title, &content))?;
		known.insert(node.id);
		stats.nodes += 1;
	}
	Ok(known)
}

fn generate_edges<G, D, S>(
	graph: &G,
	decorator: &D,
	sink: &mut S,
	known: &HashSet<NodeId>,
	stats: &mut RenderStats,
) -> Result<(), SurfaceError>
where
	G: GraphSource,
	D: NodeDecorator<G::Data> + ?Sized,
	S: CommandSink + ?Sized,
{
	for from in graph.nodes() {
		for to in graph.edges(from) {
			// The surface would create a phantom node for an unknown target.
			if !known.contains(&to.id) {
				warn!("skipping edge {} -> {}: target is not in the graph", from.id, to.id);
				stats.skipped_edges += 1;
				continue;
			}
			// Self-loops go out like any other edge; the surface draws them.
			sink.dispatch(Command::SetEdge {
				from: from.id,
				to: to.id,
				color: decorator.edge_color(from, to),
			})?;
			stats.edges += 1;
		}
	}
	Ok(())
}
