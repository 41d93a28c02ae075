mod command;
mod error;
mod hooks;
mod menu;
mod render;
mod sink;
mod state;
mod style;
mod theme;
mod types;

#[cfg(target_arch = "wasm32")]
mod component;
#[cfg(target_arch = "wasm32")]
mod surface;

pub use command::{Argument, Command, MAX_SAFE_ID, SURFACE_DOCUMENT, SURFACE_OBJECT, escape_html};
pub use error::{BridgeError, ConfigError, GraphError, SurfaceError};
pub use hooks::{NodeDecorator, PlainDecorator};
pub use menu::{ContextAction, ContextMenu};
pub use render::RenderStats;
pub use sink::{ChannelSink, CommandSink, StreamSink, WireFormat, channel};
pub use state::{GraphViewBridge, Readiness};
pub use style::{block_css, general_css, stylesheets};
pub use theme::{Color, FontSpec, GRAPH_BACKGROUND, Palette, ParseColorError, Presentation};
pub use types::{Graph, GraphSource, Node, NodeId};

#[cfg(target_arch = "wasm32")]
pub use component::GraphView;
#[cfg(target_arch = "wasm32")]
pub use surface::DocumentSurface;
