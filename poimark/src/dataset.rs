//! The POI dataset shipped with the crate.

use crate::{PoiCollection, geojson::parse_poi_collection};
use lazy_static::lazy_static;

/// The English dataset in wire form, as compiled into the binary.
pub static POINTS_EN_JSON: &str = include_str!("../assets/points_en.json");

lazy_static! {
	static ref POINTS_EN: PoiCollection =
		parse_poi_collection(POINTS_EN_JSON).expect("embedded dataset must be valid GeoJSON");
}

/// The English POI set, parsed once on first use.
pub fn points_en() -> &'static PoiCollection {
	&POINTS_EN
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn dataset_parses_and_verifies() {
		let collection = points_en();
		assert!(!collection.is_empty());
		collection.verify().unwrap();
	}

	#[test]
	fn contains_the_heritage_centre() {
		let feature = points_en().get(0).unwrap();
		assert_eq!(feature.properties.name, "Bugungu Heritage and Information Centre");
		assert_eq!(feature.properties.category, feature.properties.name);
		assert_eq!(feature.position.lon(), 31.41401);
		assert_eq!(feature.position.lat(), 2.11583);
		assert_eq!(feature.properties.color.to_string(), "#da5151ff");
		assert_eq!(feature.properties.icon.width, 40);
		assert_eq!(feature.properties.icon.height, 40);
		assert_eq!(feature.properties.note, None);
	}

	#[test]
	fn lookup_by_name() {
		let feature = points_en().get_by_name("Bugungu Heritage and Information Centre");
		assert_eq!(feature.unwrap().id, 0);
	}

	#[test]
	fn dataset_round_trips() {
		let text = points_en().to_json_string(None, false);
		let reparsed = parse_poi_collection(&text).unwrap();
		assert_eq!(&reparsed, points_en());
	}

	#[test]
	fn pretty_output_matches_the_asset() {
		assert_eq!(points_en().to_json_string(None, true), POINTS_EN_JSON.trim_end());
	}
}
