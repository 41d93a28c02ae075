//! Ordered, one-directional transports from the bridge to a surface.

use std::io::Write;
use std::sync::mpsc;

use super::command::Command;
use super::error::SurfaceError;

/// Delivers commands to a rendering surface, in dispatch order.
pub trait CommandSink {
	/// Delivers one command; an error means the stream is broken.
	fn dispatch(&mut self, command: Command) -> Result<(), SurfaceError>;
}

/// Records commands in memory.
impl CommandSink for Vec<Command> {
	fn dispatch(&mut self, command: Command) -> Result<(), SurfaceError> {
		self.push(command);
		Ok(())
	}
}

/// Sends commands to a surface running on another thread.
#[derive(Clone, Debug)]
pub struct ChannelSink {
	tx: mpsc::Sender<Command>,
}

/// Creates a connected sink and the receiver the surface drains.
pub fn channel() -> (ChannelSink, mpsc::Receiver<Command>) {
	let (tx, rx) = mpsc::channel();
	(ChannelSink { tx }, rx)
}

impl CommandSink for ChannelSink {
	fn dispatch(&mut self, command: Command) -> Result<(), SurfaceError> {
		self.tx.send(command).map_err(|_| SurfaceError::Disconnected)
	}
}

/// Line format written by a [`StreamSink`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WireFormat {
	/// `GraphView.method(args);` statements.
	#[default]
	Script,
	/// Tagged JSON messages.
	Json,
}

/// Writes one command per line, for a surface in another process.
#[derive(Debug)]
pub struct StreamSink<W> {
	out: W,
	format: WireFormat,
}

impl<W: Write> StreamSink<W> {
	/// A sink writing `format` lines to `out`.
	pub fn new(out: W, format: WireFormat) -> Self {
		Self { out, format }
	}

	/// A sink writing script statements.
	pub fn script(out: W) -> Self {
		Self::new(out, WireFormat::Script)
	}

	/// A sink writing JSON messages.
	pub fn json(out: W) -> Self {
		Self::new(out, WireFormat::Json)
	}

	/// Returns the underlying writer.
	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> CommandSink for StreamSink<W> {
	fn dispatch(&mut self, command: Command) -> Result<(), SurfaceError> {
		let line = match self.format {
			WireFormat::Script => command.to_script(),
			WireFormat::Json => command.to_json().map_err(std::io::Error::from)?,
		};
		writeln!(self.out, "{line}")?;
		// The reader executes statements as they arrive.
		self.out.flush()?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::thread;

	use super::*;
	use crate::components::graph_view::types::NodeId;

	#[test]
	fn channel_preserves_order_across_threads() {
		let (mut sink, rx) = channel();
		let surface = thread::spawn(move || rx.iter().map(|c| c.method()).collect::<Vec<_>>());

		sink.dispatch(Command::InitGraph).unwrap();
		sink.dispatch(Command::set_node(NodeId(1), "", "")).unwrap();
		sink.dispatch(Command::RenderGraph).unwrap();
		drop(sink);

		assert_eq!(surface.join().unwrap(), vec!["initGraph", "setNode", "renderGraph"]);
	}

	#[test]
	fn channel_reports_dropped_surface() {
		let (mut sink, rx) = channel();
		drop(rx);
		assert!(matches!(
			sink.dispatch(Command::InitGraph),
			Err(SurfaceError::Disconnected)
		));
	}

	#[test]
	fn script_stream_writes_one_statement_per_line() {
		let mut sink = StreamSink::script(Vec::new());
		sink.dispatch(Command::InitGraph).unwrap();
		sink.dispatch(Command::FocusOnLine { line: 3 }).unwrap();

		let text = String::from_utf8(sink.into_inner()).unwrap();
		assert_eq!(text, "GraphView.initGraph();\nGraphView.focusOnLine(3);\n");
	}

	#[test]
	fn json_stream_lines_parse_back() {
		let sent = vec![
			Command::InitGraph,
			Command::set_node(NodeId(4), "a<b", "x\ny"),
			Command::RenderGraph,
		];
		let mut sink = StreamSink::json(Vec::new());
		for cmd in sent.clone() {
			sink.dispatch(cmd).unwrap();
		}

		let text = String::from_utf8(sink.into_inner()).unwrap();
		let received: Vec<Command> = text.lines().map(|l| Command::from_json(l).unwrap()).collect();
		assert_eq!(received, sent);
	}
}
