use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlDocument, HtmlIFrameElement, MouseEvent};

use super::command::SURFACE_DOCUMENT;
use super::hooks::NodeDecorator;
use super::menu::ContextAction;
use super::state::GraphViewBridge;
use super::surface::DocumentSurface;
use super::theme::Presentation;
use super::types::Graph;

#[derive(Clone, Debug, PartialEq)]
struct MenuRequest {
	x: f64,
	y: f64,
	actions: Vec<ContextAction>,
}

/// Hosts the graph surface document in a frame and keeps it in sync.
///
/// The graph is rendered on every load of the document and whenever `graph`
/// changes afterwards. Presentation changes restyle the surface in place.
/// A focus requested before the document loads is applied after the first
/// render.
#[component]
pub fn GraphView<T, D>(
	/// Document defining the `GraphView` script object. Without one the
	/// bundled [`SURFACE_DOCUMENT`] is loaded.
	#[prop(into, optional)]
	src: Option<String>,
	/// Graph to render.
	#[prop(into)]
	graph: Signal<Graph<T>>,
	/// Titles, content and edge colours.
	decorator: D,
	/// Font and colours for the surface styles.
	#[prop(into)]
	presentation: Signal<Presentation>,
	/// Line to bring into view.
	#[prop(into, optional)]
	focus_line: Option<Signal<Option<i64>>>,
) -> impl IntoView
where
	T: Send + Sync + 'static,
	D: NodeDecorator<T> + 'static,
{
	let frame_ref = NodeRef::<leptos::html::Iframe>::new();
	let srcdoc = src.is_none().then_some(SURFACE_DOCUMENT);
	let bridge = Rc::new(RefCell::new(GraphViewBridge::new(
		DocumentSurface::default(),
		decorator,
		presentation.get_untracked(),
	)));
	let menu_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let (menu, set_menu) = signal(None::<MenuRequest>);
	let (action, set_action) = signal(None::<ContextAction>);

	let (bridge_load, menu_cb_load) = (bridge.clone(), menu_cb.clone());
	let on_load = move |_: Event| {
		let Some(frame): Option<HtmlIFrameElement> = frame_ref.get_untracked() else {
			return;
		};
		let mut b = bridge_load.borrow_mut();
		b.sink_mut().attach(frame.clone());
		set_menu.set(None);

		// Focus requested while loading is replayed after the render.
		let pending_focus = focus_line.and_then(|f| f.get_untracked());
		if let Err(err) = graph.with_untracked(|g| b.on_surface_loaded(g, pending_focus)) {
			error!("graph surface setup failed: {err}");
			return;
		}

		let Some(document) = frame.content_document() else {
			return;
		};
		let (actions, frame_menu) = (b.context_menu().actions().to_vec(), frame.clone());
		*menu_cb_load.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			ev.prevent_default();
			let rect = frame_menu.get_bounding_client_rect();
			set_menu.set(Some(MenuRequest {
				x: rect.left() + ev.client_x() as f64,
				y: rect.top() + ev.client_y() as f64,
				actions: actions.clone(),
			}));
		}));
		if let Some(ref cb) = *menu_cb_load.borrow() {
			let _ = document.add_event_listener_with_callback("contextmenu", cb.as_ref().unchecked_ref());
		}
	};

	let bridge_graph = bridge.clone();
	Effect::new(move |_| {
		graph.with(|g| {
			let mut b = bridge_graph.borrow_mut();
			// The load handler renders whatever is current once ready.
			if !b.is_ready() {
				return;
			}
			if let Err(err) = b.set_graph(g) {
				error!("graph render failed: {err}");
			}
		});
	});

	let bridge_style = bridge.clone();
	Effect::new(move |_| {
		let p = presentation.get();
		if let Err(err) = bridge_style.borrow_mut().apply_presentation(p) {
			error!("restyling graph surface failed: {err}");
		}
	});

	if let Some(focus_line) = focus_line {
		let bridge_focus = bridge.clone();
		Effect::new(move |_| {
			let Some(line) = focus_line.get() else {
				return;
			};
			let mut b = bridge_focus.borrow_mut();
			if !b.is_ready() {
				return;
			}
			if let Err(err) = b.focus_on_line(line) {
				error!("focus request failed: {err}");
			}
		});
	}

	let bridge_action = bridge.clone();
	Effect::new(move |_| {
		if let Some(action) = action.get() {
			run_action(bridge_action.borrow().sink(), action);
		}
	});

	view! {
		<div class="graph-view" style="position: relative; width: 100%; height: 100%;">
			<iframe
				node_ref=frame_ref
				src=src
				srcdoc=srcdoc
				on:load=on_load
				style="display: block; border: none; width: 100%; height: 100%;"
			/>
			{move || {
				menu.get()
					.map(|req| {
						view! {
							<ul
								class="graph-view-menu"
								style=format!("position: fixed; left: {}px; top: {}px;", req.x, req.y)
								on:mouseleave=move |_| set_menu.set(None)
							>
								{req
									.actions
									.into_iter()
									.map(|a| {
										view! {
											<li on:click=move |_| {
												set_menu.set(None);
												set_action.set(Some(a));
											}>{a.label()}</li>
										}
									})
									.collect_view()}
							</ul>
						}
					})
			}}
		</div>
	}
}

fn run_action(surface: &DocumentSurface, action: ContextAction) {
	match action {
		ContextAction::Copy => {
			let document = surface
				.frame()
				.and_then(|f| f.content_document())
				.and_then(|d| d.dyn_into::<HtmlDocument>().ok());
			match document {
				Some(doc) => {
					if let Err(err) = doc.exec_command("copy") {
						error!("copy failed: {err:?}");
					}
				}
				None => error!("copy failed: no surface document"),
			}
		}
	}
}
