use super::theme::{GRAPH_BACKGROUND, Presentation};

/// Page-level rules: font, text colour and background of the surface.
pub fn general_css(p: &Presentation) -> String {
	let background = p.theme_color(GRAPH_BACKGROUND).unwrap_or(p.palette.window);
	format!(
		"html {{\
			cursor: default;\
			font-family: {family};\
			font-size: {size}pt;\
			color: {text};\
			background-color: {background};\
		}}\
		html, body {{\
			overflow: hidden;\
			margin: 0px;\
		}}",
		family = p.font.family,
		size = p.font.size,
		text = p.palette.window_text,
	)
}

/// Node and edge rules.
pub fn block_css(p: &Presentation) -> String {
	let (text, window, base) = (p.palette.window_text, p.palette.window, p.palette.base);
	format!(
		".nodetitle {{\
			text-align: center;\
			margin-bottom: 4px;\
			border: 1px solid {text};\
			background-color: {window};\
			color: {text};\
		}}\
		.node rect {{\
			fill: {base};\
			stroke: {text};\
			stroke-width: 3;\
			filter: url(#dropshadow);\
		}}\
		.edgepath path {{\
			stroke-width: 1.5;\
		}}\
		.edgepath path:hover {{\
			stroke-width: 2.5;\
		}}"
	)
}

/// Both fragments, in the order they are pushed to the surface.
pub fn stylesheets(p: &Presentation) -> [String; 2] {
	[general_css(p), block_css(p)]
}
