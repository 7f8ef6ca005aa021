use crate::marker::{MarkerColor, MarkerIcon};
use anyhow::{Context, Result};
use poimark_core::write::JsonWriter;

/// Display metadata carried by every POI feature.
///
/// The wire keys are fixed: `svgHtml`/`iconWidth`/`iconHeight` (the icon), `hr`
/// (the color), `ID` (duplicate of the feature id), `name`, `type` (the category)
/// and `note`.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiProperties {
	pub icon: MarkerIcon,
	pub color: MarkerColor,
	pub id: u64,
	pub name: String,
	pub category: String,
	pub note: Option<String>,
}

impl PoiProperties {
	/// Write the properties object with the wire keys in artifact order.
	pub fn write_json(&self, json: &mut JsonWriter) {
		json.begin_object();
		json.key("svgHtml");
		json.string(&self.icon.svg);
		json.key("iconWidth");
		json.number(self.icon.width);
		json.key("iconHeight");
		json.number(self.icon.height);
		json.key("hr");
		json.string(&self.color.to_string());
		json.key("ID");
		json.number(self.id);
		json.key("name");
		json.string(&self.name);
		json.key("type");
		json.string(&self.category);
		json.key("note");
		match &self.note {
			Some(note) => json.string(note),
			None => json.null(),
		}
		json.end_object();
	}

	pub fn verify(&self) -> Result<()> {
		self.icon.verify().context("marker icon")
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			icon: MarkerIcon::new("<svg viewBox='0 0 100 100'><path d='M0,0h100v100z'/></svg>", 40, 40),
			color: MarkerColor::new(0xda, 0x51, 0x51, 0xff),
			id: 13,
			name: "Nice".to_string(),
			category: "Nice".to_string(),
			note: None,
		}
	}
}
