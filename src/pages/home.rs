use leptos::prelude::*;

use crate::components::graph_view::{GraphView, Presentation};
use crate::demo::{BlockDecorator, sample_cfg};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let graph = Signal::derive(sample_cfg);
	let (dark, set_dark) = signal(false);
	let presentation = Signal::derive(move || {
		if dark.get() {
			Presentation::dark()
		} else {
			Presentation::default()
		}
	});
	let (focus, set_focus) = signal(None::<i64>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphView
					graph=graph
					decorator=BlockDecorator
					presentation=presentation
					focus_line=focus
				/>
				<div class="graph-overlay">
					<h1>"Control-Flow Graph"</h1>
					<p class="subtitle">"Right-click a block to copy its text."</p>
					<button on:click=move |_| set_dark.update(|d| *d = !*d)>"Toggle theme"</button>
					<button on:click=move |_| set_focus.set(Some(0))>"Focus entry"</button>
				</div>
			</div>
		</ErrorBoundary>
	}
}
