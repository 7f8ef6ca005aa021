use super::{PoiProperties, Position};
use anyhow::{Context, Result, ensure};
use poimark_core::write::JsonWriter;

/// One map point of interest: a feature with Point geometry and marker metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct PoiFeature {
	pub id: u64,
	pub position: Position,
	pub properties: PoiProperties,
}

impl PoiFeature {
	pub fn new(id: u64, position: Position, properties: PoiProperties) -> Self {
		Self {
			id,
			position,
			properties,
		}
	}

	/// Write the feature in wire form, optionally rounding coordinates.
	pub fn write_json(&self, json: &mut JsonWriter, precision: Option<u8>) {
		json.begin_object();
		json.key("type");
		json.string("Feature");
		json.key("properties");
		self.properties.write_json(json);
		json.key("geometry");
		json.begin_object();
		json.key("coordinates");
		self.position.write_json(json, precision);
		json.key("type");
		json.string("Point");
		json.end_object();
		json.key("id");
		json.number(self.id);
		json.end_object();
	}

	/// Check this feature's invariants: the duplicated id matches, the position is
	/// in range, and the marker icon is well-formed.
	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.properties.id == self.id,
			"properties ID {} does not match feature id {}",
			self.properties.id,
			self.id
		);
		self.position.verify().context("position")?;
		self.properties.verify()
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: 13,
			position: Position::new(7.26, 43.71),
			properties: PoiProperties::new_example(),
		}
	}
}
