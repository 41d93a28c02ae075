//! Directives understood by the rendering surface.
//!
//! The surface exposes a single script object, `GraphView`, with one method
//! per command. A command renders either as a script statement
//! (`GraphView.setEdge(1, 2, "#000000");`) or as a JSON message for
//! transports that cross a process boundary.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::theme::Color;
use super::types::NodeId;

/// Name of the script object the surface exposes.
pub const SURFACE_OBJECT: &str = "GraphView";

/// A self-contained surface document defining [`SURFACE_OBJECT`].
///
/// It ranks nodes by breadth-first depth and draws edges as curves. Hosts
/// with their own layout engine load their own document instead.
pub const SURFACE_DOCUMENT: &str = include_str!("surface.html");

/// Largest node id a script number holds exactly (`Number.MAX_SAFE_INTEGER`).
///
/// Ids are written as plain decimal integers in the script and JSON forms
/// whatever their size. On wasm32, `DocumentSurface` passes larger ids to the
/// surface as `BigInt`s.
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// One directive for the surface, in emission order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
	/// Prepare a freshly loaded document.
	InitPage,
	/// Drop any previously rendered topology.
	InitGraph,
	/// `title` and `content` are already HTML-escaped.
	SetNode {
		/// Node identity, reused by later `SetEdge`s.
		id: NodeId,
		/// Escaped title text.
		title: String,
		/// Escaped body text.
		content: String,
	},
	/// Directed edge between two nodes already set in this session.
	SetEdge {
		/// Source node.
		from: NodeId,
		/// Target node.
		to: NodeId,
		/// Stroke colour.
		color: Color,
	},
	/// Lay out and paint everything set since `InitGraph`.
	RenderGraph,
	/// Raw stylesheet fragment, trusted and sent verbatim.
	#[serde(rename = "appendCss")]
	AppendStyle {
		/// Stylesheet text.
		css: String,
	},
	/// Bring the given line into view.
	FocusOnLine {
		/// Line to focus.
		line: i64,
	},
}

/// A positional argument of a surface method call.
#[derive(Clone, Debug, PartialEq)]
pub enum Argument<'a> {
	/// A node id, never narrowed to a signed type.
	Id(NodeId),
	/// A signed number such as a line.
	Integer(i64),
	/// A string, passed as a string literal or value.
	Text(Cow<'a, str>),
}

impl Command {
	/// Builds a `SetNode`, escaping title and content for markup.
	pub fn set_node(id: NodeId, title: &str, content: &str) -> Self {
		Command::SetNode {
			id,
			title: escape_html(title),
			content: escape_html(content),
		}
	}

	/// Surface method invoked for this command.
	pub fn method(&self) -> &'static str {
		match self {
			Command::InitPage => "initPage",
			Command::InitGraph => "initGraph",
			Command::SetNode { .. } => "setNode",
			Command::SetEdge { .. } => "setEdge",
			Command::RenderGraph => "renderGraph",
			Command::AppendStyle { .. } => "appendCss",
			Command::FocusOnLine { .. } => "focusOnLine",
		}
	}

	/// Positional arguments of the surface method, in call order.
	pub fn arguments(&self) -> Vec<Argument<'_>> {
		match self {
			Command::InitPage | Command::InitGraph | Command::RenderGraph => Vec::new(),
			Command::SetNode { id, title, content } => vec![
				Argument::Id(*id),
				Argument::Text(Cow::Borrowed(title.as_str())),
				Argument::Text(Cow::Borrowed(content.as_str())),
			],
			Command::SetEdge { from, to, color } => vec![
				Argument::Id(*from),
				Argument::Id(*to),
				Argument::Text(Cow::Owned(color.name())),
			],
			Command::AppendStyle { css } => vec![Argument::Text(Cow::Borrowed(css.as_str()))],
			Command::FocusOnLine { line } => vec![Argument::Integer(*line)],
		}
	}

	/// Script statement invoking this command on the surface object.
	///
	/// Text arguments are written as JSON string literals, which are valid
	/// script literals for any content.
	pub fn to_script(&self) -> String {
		let args: Vec<String> = self
			.arguments()
			.into_iter()
			.map(|arg| match arg {
				Argument::Id(id) => id.to_string(),
				Argument::Integer(n) => n.to_string(),
				Argument::Text(s) => serde_json::Value::from(s.as_ref()).to_string(),
			})
			.collect();
		format!("{SURFACE_OBJECT}.{}({});", self.method(), args.join(", "))
	}

	/// Tagged JSON message, e.g. `{"command":"renderGraph"}`.
	pub fn to_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string(self)
	}

	/// Parses a message written by [`to_json`](Self::to_json).
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Escapes the characters that are significant in markup.
pub fn escape_html(text: &str) -> String {
	let mut out = String::with_capacity(text.len());
	for c in text.chars() {
		match c {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#39;"),
			c => out.push(c),
		}
	}
	out
}
