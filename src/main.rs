//! Runs the graph view: the web app on wasm32, a command emitter elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() {
	use flow_graph_view::{App, init_logging};

	init_logging();
	leptos::mount::mount_to_body(App);
}

/// Streams the sample graph's command sequence to stdout, for a surface
/// running in another process.
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
	use std::io;
	use std::path::PathBuf;

	use anyhow::Context;
	use clap::Parser;
	use flow_graph_view::demo::{BlockDecorator, sample_cfg};
	use flow_graph_view::{GraphViewBridge, Presentation, StreamSink, WireFormat};

	#[derive(Parser, Debug)]
	#[command(name = "flow-graph-view")]
	#[command(about = "Emit graph surface commands for a sample control-flow graph")]
	struct Args {
		/// Presentation settings (JSON)
		#[arg(long)]
		settings: Option<PathBuf>,

		/// Emit JSON messages instead of script statements
		#[arg(long)]
		json: bool,

		/// Line to focus after rendering
		#[arg(long)]
		focus: Option<i64>,
	}

	let args = Args::parse();
	let presentation = match &args.settings {
		Some(path) => {
			let text = std::fs::read_to_string(path)
				.with_context(|| format!("reading {}", path.display()))?;
			Presentation::from_json(&text)?
		}
		None => Presentation::default(),
	};
	let format = if args.json {
		WireFormat::Json
	} else {
		WireFormat::Script
	};

	let sink = StreamSink::new(io::stdout().lock(), format);
	let mut bridge = GraphViewBridge::new(sink, BlockDecorator, presentation);
	bridge.on_surface_ready()?;
	bridge.set_graph(&sample_cfg())?;
	if let Some(line) = args.focus {
		bridge.focus_on_line(line)?;
	}
	Ok(())
}
