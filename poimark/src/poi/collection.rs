use super::PoiFeature;
use crate::geojson::parse_poi_collection;
use anyhow::{Context, Result, ensure};
use poimark_core::write::JsonWriter;
use std::collections::BTreeSet;

/// The root container: an ordered sequence of POI features
/// (wire tag `"FeatureCollection"`).
#[derive(Clone, Debug, PartialEq)]
pub struct PoiCollection {
	pub features: Vec<PoiFeature>,
}

impl PoiCollection {
	#[must_use]
	pub fn from(features: Vec<PoiFeature>) -> Self {
		Self { features }
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_poi_collection(json)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.features.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Find a feature by its id.
	#[must_use]
	pub fn get(&self, id: u64) -> Option<&PoiFeature> {
		self.features.iter().find(|f| f.id == id)
	}

	/// Find the first feature with the given name.
	#[must_use]
	pub fn get_by_name(&self, name: &str) -> Option<&PoiFeature> {
		self.features.iter().find(|f| f.properties.name == name)
	}

	/// Bounding box `[min lon, min lat, max lon, max lat]`, or `None` when empty.
	#[must_use]
	pub fn bounds(&self) -> Option<[f64; 4]> {
		let mut bounds: Option<[f64; 4]> = None;
		for feature in &self.features {
			let (lon, lat) = (feature.position.lon(), feature.position.lat());
			bounds = Some(match bounds {
				None => [lon, lat, lon, lat],
				Some(b) => [b[0].min(lon), b[1].min(lat), b[2].max(lon), b[3].max(lat)],
			});
		}
		bounds
	}

	/// Serialize the collection in wire form. `precision` optionally rounds
	/// coordinates, `pretty` switches to tab-indented output.
	#[must_use]
	pub fn to_json_string(&self, precision: Option<u8>, pretty: bool) -> String {
		let mut json = JsonWriter::new(pretty);
		json.begin_object();
		json.key("type");
		json.string("FeatureCollection");
		json.key("features");
		json.begin_array();
		for feature in &self.features {
			feature.write_json(&mut json, precision);
		}
		json.end_array();
		json.end_object();
		json.finish()
	}

	/// Check the collection invariants: ids are unique and every feature passes
	/// [`PoiFeature::verify`].
	pub fn verify(&self) -> Result<()> {
		let mut seen = BTreeSet::new();
		for feature in &self.features {
			ensure!(seen.insert(feature.id), "duplicate feature id {}", feature.id);
			feature
				.verify()
				.with_context(|| format!("feature {} ('{}')", feature.id, feature.properties.name))?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn collection_of(ids: &[u64]) -> PoiCollection {
		PoiCollection::from(
			ids
				.iter()
				.map(|&id| {
					let mut feature = PoiFeature::new_example();
					feature.id = id;
					feature.properties.id = id;
					feature.position = crate::Position::new(id as f64, id as f64 / 2.0);
					feature
				})
				.collect(),
		)
	}

	#[test]
	fn lookup_by_id_and_name() {
		let collection = collection_of(&[0, 1, 2]);
		assert_eq!(collection.len(), 3);
		assert_eq!(collection.get(1).unwrap().id, 1);
		assert!(collection.get(9).is_none());
		assert_eq!(collection.get_by_name("Nice").unwrap().id, 0);
		assert!(collection.get_by_name("Nowhere").is_none());
	}

	#[test]
	fn bounds_span_all_features() {
		let collection = collection_of(&[0, 4, 2]);
		assert_eq!(collection.bounds(), Some([0.0, 0.0, 4.0, 2.0]));
		assert_eq!(PoiCollection::from(vec![]).bounds(), None);
	}

	#[test]
	fn wire_shape() {
		let text = collection_of(&[0]).to_json_string(None, false);
		assert!(text.starts_with(r#"{"type":"FeatureCollection","features":[{"#));
		assert!(text.ends_with("]}"));

		assert_eq!(
			PoiCollection::from(vec![]).to_json_string(None, false),
			r#"{"type":"FeatureCollection","features":[]}"#
		);
	}

	#[test]
	fn verify_accepts_unique_ids() {
		assert!(collection_of(&[0, 1, 2]).verify().is_ok());
	}

	#[test]
	fn verify_rejects_duplicate_ids() {
		let message = collection_of(&[0, 1, 1]).verify().unwrap_err().to_string();
		assert!(message.contains("duplicate feature id 1"));
	}

	#[test]
	fn round_trip_is_idempotent() {
		let collection = collection_of(&[0, 1, 2]);
		let text = collection.to_json_string(None, false);
		let reparsed = PoiCollection::from_json_str(&text).unwrap();
		assert_eq!(reparsed, collection);
		assert_eq!(reparsed.to_json_string(None, false), text);
	}

	#[test]
	fn pretty_output_round_trips() {
		let collection = collection_of(&[0, 1]);
		let pretty = collection.to_json_string(None, true);
		assert_eq!(PoiCollection::from_json_str(&pretty).unwrap(), collection);
	}
}
