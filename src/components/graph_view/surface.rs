use js_sys::{Array, BigInt, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlIFrameElement;

use super::command::{Argument, Command, MAX_SAFE_ID, SURFACE_OBJECT};
use super::error::SurfaceError;
use super::sink::CommandSink;

/// Invokes commands on the `GraphView` object of a document loaded in a frame.
///
/// Calls are synchronous, so commands run in dispatch order. Arguments are
/// passed as script values, never spliced into source text. Node ids up to
/// [`MAX_SAFE_ID`] arrive as numbers, larger ones as `BigInt`s.
#[derive(Clone, Debug, Default)]
pub struct DocumentSurface {
	frame: Option<HtmlIFrameElement>,
}

impl DocumentSurface {
	/// Targets the document loaded in `frame`.
	pub fn attach(&mut self, frame: HtmlIFrameElement) {
		self.frame = Some(frame);
	}

	/// The attached frame, if any.
	pub fn frame(&self) -> Option<&HtmlIFrameElement> {
		self.frame.as_ref()
	}
}

impl CommandSink for DocumentSurface {
	fn dispatch(&mut self, command: Command) -> Result<(), SurfaceError> {
		let window = self
			.frame
			.as_ref()
			.and_then(|f| f.content_window())
			.ok_or(SurfaceError::Detached)?;
		let target = Reflect::get(&window, &JsValue::from_str(SURFACE_OBJECT)).map_err(script_error)?;
		let method: Function = Reflect::get(&target, &JsValue::from_str(command.method()))
			.map_err(script_error)?
			.dyn_into()
			.map_err(|_| SurfaceError::MissingMethod(command.method()))?;

		let args: Array = command
			.arguments()
			.into_iter()
			.map(|arg| match arg {
				Argument::Id(id) if id.0 <= MAX_SAFE_ID => JsValue::from_f64(id.0 as f64),
				Argument::Id(id) => BigInt::from(id.0).into(),
				Argument::Integer(n) => JsValue::from_f64(n as f64),
				Argument::Text(s) => JsValue::from_str(&s),
			})
			.collect();
		method.apply(&target, &args).map_err(script_error)?;
		Ok(())
	}
}

fn script_error(err: JsValue) -> SurfaceError {
	SurfaceError::Script(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}
