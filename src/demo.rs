//! Sample control-flow graph and a disassembly-style decorator for it.

use crate::components::graph_view::{Color, Graph, Node, NodeDecorator};

const TAKEN: Color = Color::rgb(0x00, 0x80, 0x00);
const FALLTHROUGH: Color = Color::rgb(0xc0, 0x00, 0x00);
const JUMP: Color = Color::rgb(0x00, 0x00, 0xc0);

/// A basic block of a disassembled function.
#[derive(Clone, Debug, PartialEq)]
pub struct BasicBlock {
	/// Address of the first instruction.
	pub address: u64,
	/// Disassembly, one instruction per entry.
	pub instructions: Vec<String>,
	/// Target of a conditional branch ending the block.
	pub taken: Option<u64>,
}

/// Titles blocks by address and colours branch edges.
///
/// The edge to a conditional branch's target is green, its fall-through is
/// red. Blocks with a single successor use blue.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockDecorator;

impl NodeDecorator<BasicBlock> for BlockDecorator {
	fn node_title(&self, node: &Node<BasicBlock>) -> String {
		format!("loc_{:08x}", node.data.address)
	}

	fn node_content(&self, node: &Node<BasicBlock>) -> String {
		node.data.instructions.join("\n")
	}

	fn edge_color(&self, from: &Node<BasicBlock>, to: &Node<BasicBlock>) -> Color {
		match from.data.taken {
			Some(target) if target == to.id.0 => TAKEN,
			Some(_) => FALLTHROUGH,
			None => JUMP,
		}
	}
}

/// A small function: a prologue, a counted loop, a bounds check and an exit.
pub fn sample_cfg() -> Graph<BasicBlock> {
	let blocks: [(u64, &[&str], Option<u64>); 5] = [
		(0x401000, &["push ebp", "mov ebp, esp", "xor ecx, ecx"], None),
		(0x401005, &["cmp ecx, [ebp+8]", "jge loc_401014"], Some(5)),
		(0x40100a, &["mov eax, [ebp+0Ch]", "cmp byte [eax+ecx], 0", "je loc_401014"], Some(5)),
		(0x401011, &["inc ecx", "jmp loc_401005"], None),
		(0x401014, &["mov eax, ecx", "pop ebp", "ret"], None),
	];

	let mut graph = Graph::new();
	for (id, (address, instructions, taken)) in (1u64..).zip(blocks) {
		let block = BasicBlock {
			address,
			instructions: instructions.iter().map(|s| s.to_string()).collect(),
			taken,
		};
		// ids are unique by construction
		let _ = graph.add_node(id, block);
	}
	for (from, to) in [(1, 2), (2, 5), (2, 3), (3, 5), (3, 4), (4, 2)] {
		let _ = graph.add_edge(from, to);
	}
	graph
}
