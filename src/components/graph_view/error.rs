use thiserror::Error;

use super::types::NodeId;

/// Failure while building a [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
	/// A node with this id was already added.
	#[error("node {0} already exists")]
	DuplicateNode(NodeId),
	/// An edge endpoint is not in the graph.
	#[error("node {0} does not exist")]
	UnknownNode(NodeId),
}

/// The transport to the rendering surface failed.
#[derive(Debug, Error)]
pub enum SurfaceError {
	/// The receiving end of a channel is gone.
	#[error("surface receiver has been dropped")]
	Disconnected,
	/// No frame is attached, or it has no window.
	#[error("no surface document is attached")]
	Detached,
	/// The surface object lacks the command's method.
	#[error("surface object has no method `{0}`")]
	MissingMethod(&'static str),
	/// The surface threw while running a command.
	#[error("surface script failed: {0}")]
	Script(String),
	/// Writing to a stream failed.
	#[error("failed to write command: {0}")]
	Io(#[from] std::io::Error),
}

/// Error returned by the bridge's emitting operations.
#[derive(Debug, Error)]
pub enum BridgeError {
	/// An emitting call arrived before the surface reported ready.
	#[error("surface is not ready; `{operation}` was rejected")]
	SurfaceNotReady {
		/// The rejected bridge operation.
		operation: &'static str,
	},
	/// The transport failed mid-stream.
	#[error(transparent)]
	Surface(#[from] SurfaceError),
}

/// Presentation settings could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Malformed JSON or an invalid colour.
	#[error("invalid presentation settings: {0}")]
	Parse(#[from] serde_json::Error),
}
