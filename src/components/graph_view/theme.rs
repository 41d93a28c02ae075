use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Theme token used for the surface background.
pub const GRAPH_BACKGROUND: &str = "graph_bg";

/// 24-bit RGB colour, written as lowercase `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// `#000000`, the default edge colour.
	pub const BLACK: Color = Color::rgb(0, 0, 0);
	/// `#ffffff`
	pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

	/// A colour from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// `#rrggbb` form sent to the surface.
	pub fn name(&self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name())
	}
}

/// A colour string that is neither `#rgb` nor `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid colour `{0}`, expected #rgb or #rrggbb")]
pub struct ParseColorError(String);

impl FromStr for Color {
	type Err = ParseColorError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let invalid = || ParseColorError(s.to_owned());
		let hex = s.strip_prefix('#').ok_or_else(invalid)?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(invalid());
		}
		let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
		match hex.len() {
			6 => Ok(Color::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			// #abc expands to #aabbcc
			3 => Ok(Color::rgb(
				channel(&hex[0..1])? * 0x11,
				channel(&hex[1..2])? * 0x11,
				channel(&hex[2..3])? * 0x11,
			)),
			_ => Err(invalid()),
		}
	}
}

impl TryFrom<String> for Color {
	type Error = ParseColorError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Color> for String {
	fn from(color: Color) -> Self {
		color.name()
	}
}

/// Font of the surface text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
	/// CSS font family.
	pub family: String,
	/// Point size.
	pub size: f32,
}

impl Default for FontSpec {
	fn default() -> Self {
		Self {
			family: "monospace".into(),
			size: 10.0,
		}
	}
}

/// Host palette roles the stylesheets draw from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
	/// Text and outlines.
	pub window_text: Color,
	/// Title bars, and the background when no theme colour is set.
	pub window: Color,
	/// Node bodies.
	pub base: Color,
	/// Selection accent.
	pub highlight: Color,
}

impl Default for Palette {
	fn default() -> Self {
		Self {
			window_text: Color::BLACK,
			window: Color::rgb(0xef, 0xef, 0xef),
			base: Color::WHITE,
			highlight: Color::rgb(0x30, 0x8c, 0xc6),
		}
	}
}

/// Font, palette and named theme colours used to style the surface.
///
/// Passed to the bridge explicitly and refreshed through
/// `GraphViewBridge::apply_presentation`. Every field has a default, so a
/// settings file only needs the keys it changes:
///
/// ```json
/// { "font": { "family": "Hack", "size": 11 }, "theme": { "graph_bg": "#202020" } }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
	/// Surface font.
	pub font: FontSpec,
	/// Palette roles.
	pub palette: Palette,
	/// Named theme colours, such as [`GRAPH_BACKGROUND`].
	pub theme: BTreeMap<String, Color>,
}

impl Default for Presentation {
	fn default() -> Self {
		Self {
			font: FontSpec::default(),
			palette: Palette::default(),
			theme: BTreeMap::from([(GRAPH_BACKGROUND.to_owned(), Color::WHITE)]),
		}
	}
}

impl Presentation {
	/// A dark palette on a navy background.
	pub fn dark() -> Self {
		Self {
			font: FontSpec::default(),
			palette: Palette {
				window_text: Color::rgb(0xdc, 0xdc, 0xdc),
				window: Color::rgb(0x35, 0x35, 0x35),
				base: Color::rgb(0x2a, 0x2a, 0x2a),
				highlight: Color::rgb(0x2a, 0x82, 0xda),
			},
			theme: BTreeMap::from([(GRAPH_BACKGROUND.to_owned(), Color::rgb(0x1a, 0x1a, 0x2e))]),
		}
	}

	/// Loads settings, filling absent keys with defaults.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}

	/// Looks up a named theme colour.
	pub fn theme_color(&self, token: &str) -> Option<Color> {
		self.theme.get(token).copied()
	}
}
