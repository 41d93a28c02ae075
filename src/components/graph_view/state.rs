use log::{debug, trace, warn};

use super::command::Command;
use super::error::BridgeError;
use super::hooks::NodeDecorator;
use super::menu::{ContextAction, ContextMenu};
use super::render::{self, RenderStats};
use super::sink::CommandSink;
use super::style;
use super::theme::Presentation;
use super::types::GraphSource;

/// Whether the surface can execute commands yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Readiness {
	/// No load-finished event seen yet.
	#[default]
	NotReady,
	/// The surface document is loaded and accepts commands.
	Ready,
}

/// Drives a rendering surface from a read-only graph.
///
/// Nothing is emitted until [`on_surface_ready`](Self::on_surface_ready) has
/// been called; earlier emitting calls fail with
/// [`BridgeError::SurfaceNotReady`] and leave the sink untouched.
pub struct GraphViewBridge<S, D> {
	sink: S,
	decorator: D,
	presentation: Presentation,
	readiness: Readiness,
	menu: ContextMenu,
	ready_cycles: u64,
	sessions: u64,
}

impl<S: CommandSink, D> GraphViewBridge<S, D> {
	/// A bridge that waits for the surface behind `sink` to become ready.
	pub fn new(sink: S, decorator: D, presentation: Presentation) -> Self {
		Self {
			sink,
			decorator,
			presentation,
			readiness: Readiness::NotReady,
			menu: ContextMenu::default(),
			ready_cycles: 0,
			sessions: 0,
		}
	}

	/// Handles a load-finished event from the surface document.
	///
	/// The first call makes the bridge ready. Later calls mean the document
	/// was reloaded: the context menu is rebuilt and page setup and styles
	/// are pushed again.
	pub fn on_surface_ready(&mut self) -> Result<(), BridgeError> {
		self.readiness = Readiness::Ready;
		self.ready_cycles += 1;
		debug!("surface ready (cycle {})", self.ready_cycles);

		self.menu.clear();
		self.configure_actions();
		self.sink.dispatch(Command::InitPage)?;
		self.push_styles()
	}

	/// Brings a freshly loaded document up to date.
	///
	/// Runs a ready cycle, renders `graph` and then replays `focus`, which is
	/// a focus request made while the document was still loading.
	pub fn on_surface_loaded<G>(
		&mut self,
		graph: &G,
		focus: Option<i64>,
	) -> Result<RenderStats, BridgeError>
	where
		G: GraphSource,
		D: NodeDecorator<G::Data>,
	{
		self.on_surface_ready()?;
		let stats = self.set_graph(graph)?;
		if let Some(line) = focus {
			self.focus_on_line(line)?;
		}
		Ok(stats)
	}

	/// Renders `graph` as a new session and returns what was sent.
	pub fn set_graph<G>(&mut self, graph: &G) -> Result<RenderStats, BridgeError>
	where
		G: GraphSource,
		D: NodeDecorator<G::Data>,
	{
		self.ensure_ready("set_graph")?;
		self.sessions += 1;
		let stats = render::render_session(graph, &self.decorator, &mut self.sink, self.sessions)?;
		debug!(
			"session {}: {} nodes, {} edges",
			stats.session, stats.nodes, stats.edges
		);
		Ok(stats)
	}

	/// Asks the surface to bring `line` into view.
	pub fn focus_on_line(&mut self, line: i64) -> Result<(), BridgeError> {
		self.ensure_ready("focus_on_line")?;
		self.sink.dispatch(Command::FocusOnLine { line })?;
		Ok(())
	}

	/// Sends a raw stylesheet fragment. Repeated fragments are sent again.
	pub fn append_style(&mut self, css: &str) -> Result<(), BridgeError> {
		self.ensure_ready("append_style")?;
		self.sink.dispatch(Command::AppendStyle { css: css.to_owned() })?;
		Ok(())
	}

	/// Reserved; the surface has no zoom command yet.
	pub fn zoom_on(&mut self, line: i64) {
		trace!("zoom_on({line}) ignored");
	}

	/// Replaces the presentation settings after a theme or font change.
	///
	/// A ready surface is restyled at once; otherwise the new styles go out
	/// with the next ready cycle.
	pub fn apply_presentation(&mut self, presentation: Presentation) -> Result<(), BridgeError> {
		self.presentation = presentation;
		match self.readiness {
			Readiness::Ready => self.push_styles(),
			Readiness::NotReady => Ok(()),
		}
	}

	/// Current handshake state.
	pub fn readiness(&self) -> Readiness {
		self.readiness
	}

	/// Whether emitting operations are accepted.
	pub fn is_ready(&self) -> bool {
		self.readiness == Readiness::Ready
	}

	/// Number of load-finished events handled so far.
	pub fn ready_cycles(&self) -> u64 {
		self.ready_cycles
	}

	/// Number of render sessions started so far.
	pub fn sessions(&self) -> u64 {
		self.sessions
	}

	/// Actions offered for the current ready cycle.
	pub fn context_menu(&self) -> &ContextMenu {
		&self.menu
	}

	/// Settings the next styles are built from.
	pub fn presentation(&self) -> &Presentation {
		&self.presentation
	}

	/// The node and edge decorator.
	pub fn decorator(&self) -> &D {
		&self.decorator
	}

	/// The transport commands are dispatched to.
	pub fn sink(&self) -> &S {
		&self.sink
	}

	/// Mutable access to the transport.
	pub fn sink_mut(&mut self) -> &mut S {
		&mut self.sink
	}

	/// Consumes the bridge, returning its transport.
	pub fn into_sink(self) -> S {
		self.sink
	}

	fn configure_actions(&mut self) {
		self.menu.add(ContextAction::Copy);
	}

	fn push_styles(&mut self) -> Result<(), BridgeError> {
		for css in style::stylesheets(&self.presentation) {
			self.append_style(&css)?;
		}
		Ok(())
	}

	fn ensure_ready(&self, operation: &'static str) -> Result<(), BridgeError> {
		match self.readiness {
			Readiness::Ready => Ok(()),
			Readiness::NotReady => {
				warn!("{operation} called before the surface is ready");
				Err(BridgeError::SurfaceNotReady { operation })
			}
		}
	}
}
