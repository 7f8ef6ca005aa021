use anyhow::{Result, bail, ensure};
use lazy_static::lazy_static;
use regex::Regex;

/// All marker icons are drawn on the same 100x100 canvas.
pub const MARKER_VIEW_BOX: &str = "0 0 100 100";

lazy_static! {
	static ref RE_SVG_ELEMENT: Regex = Regex::new(r"^\s*<svg[\s>]").unwrap();
	static ref RE_VIEW_BOX: Regex = Regex::new(r#"viewBox\s*=\s*['"]([^'"]*)['"]"#).unwrap();
}

/// An inline SVG marker icon with its display size in pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerIcon {
	pub svg: String,
	pub width: u32,
	pub height: u32,
}

impl MarkerIcon {
	pub fn new(svg: impl Into<String>, width: u32, height: u32) -> Self {
		Self {
			svg: svg.into(),
			width,
			height,
		}
	}

	/// Check that the markup is an `<svg>` element on the expected canvas and that
	/// the display size is non-zero.
	pub fn verify(&self) -> Result<()> {
		ensure!(!self.svg.trim().is_empty(), "marker svg is empty");
		ensure!(RE_SVG_ELEMENT.is_match(&self.svg), "marker svg must be an <svg> element");

		match RE_VIEW_BOX.captures(&self.svg) {
			None => bail!("marker svg has no viewBox"),
			Some(captures) if &captures[1] == MARKER_VIEW_BOX => {}
			Some(captures) => bail!("marker svg viewBox is '{}', expected '{MARKER_VIEW_BOX}'", &captures[1]),
		}

		ensure!(
			self.width > 0 && self.height > 0,
			"marker size {}x{} must be non-zero",
			self.width,
			self.height
		);
		Ok(())
	}
}
