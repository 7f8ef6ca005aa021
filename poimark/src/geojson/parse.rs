use crate::{
	PoiCollection, PoiFeature, PoiProperties, Position,
	marker::{MarkerColor, MarkerIcon},
};
use anyhow::{Context, Result, anyhow, bail};
use poimark_core::scan::Scanner;

/// Parse a GeoJSON FeatureCollection of POI features.
///
/// The input must be a single document; trailing content is an error.
pub fn parse_poi_collection(json: &str) -> Result<PoiCollection> {
	let mut scanner = Scanner::new(json);
	let collection = parse_collection(&mut scanner)?;
	scanner.expect_end()?;
	Ok(collection)
}

/// Parse a single POI feature object, e.g. one line of newline-delimited input.
pub fn parse_poi_feature(json: &str) -> Result<PoiFeature> {
	let mut scanner = Scanner::new(json);
	let feature = parse_feature(&mut scanner)?;
	scanner.expect_end()?;
	Ok(feature)
}

fn parse_collection(scanner: &mut Scanner) -> Result<PoiCollection> {
	let mut features = Vec::new();
	let mut object_type: Option<String> = None;

	scanner.object_entries(|key, scanner| {
		match key {
			"type" => object_type = Some(scanner.string()?),
			"features" => scanner.array_entries(|scanner| {
				features.push(parse_feature(scanner)?);
				Ok(())
			})?,
			_ => scanner.skip_value()?,
		}
		Ok(())
	})?;

	check_type(object_type, "FeatureCollection")?;

	Ok(PoiCollection { features })
}

fn check_type(object_type: Option<String>, name: &str) -> Result<()> {
	let object_type = object_type.ok_or_else(|| anyhow!("{name} must have a type"))?;

	if object_type.as_str() != name {
		bail!("type must be '{name}', found '{object_type}'")
	}
	Ok(())
}

fn parse_feature(scanner: &mut Scanner) -> Result<PoiFeature> {
	let mut object_type: Option<String> = None;
	let mut id: Option<u64> = None;
	let mut position: Option<Position> = None;
	let mut properties: Option<PoiProperties> = None;

	scanner.object_entries(|key, scanner| {
		match key {
			"type" => object_type = Some(scanner.string()?),
			"id" => id = Some(scanner.number::<u64>()?),
			"geometry" => position = Some(parse_point_geometry(scanner)?),
			"properties" => properties = Some(parse_properties(scanner)?),
			_ => scanner.skip_value()?,
		}
		Ok(())
	})?;

	check_type(object_type, "Feature")?;

	Ok(PoiFeature {
		id: id.ok_or_else(|| anyhow!("feature is missing 'id'"))?,
		position: position.ok_or_else(|| anyhow!("feature is missing 'geometry'"))?,
		properties: properties.ok_or_else(|| anyhow!("feature is missing 'properties'"))?,
	})
}

fn parse_point_geometry(scanner: &mut Scanner) -> Result<Position> {
	let mut geometry_type: Option<String> = None;
	let mut coordinates: Option<Vec<f64>> = None;

	scanner.object_entries(|key, scanner| {
		match key {
			"type" => geometry_type = Some(scanner.string()?),
			"coordinates" => {
				let mut values = Vec::new();
				scanner.array_entries(|scanner| {
					values.push(scanner.number::<f64>()?);
					Ok(())
				})?;
				coordinates = Some(values);
			}
			_ => scanner.skip_value()?,
		}
		Ok(())
	})?;

	let geometry_type = geometry_type.ok_or_else(|| anyhow!("geometry must have a type"))?;
	if geometry_type.as_str() != "Point" {
		bail!("unsupported geometry type '{geometry_type}', only 'Point' is allowed")
	}

	let coordinates = coordinates.ok_or_else(|| anyhow!("geometry must have coordinates"))?;
	let [lon, lat]: [f64; 2] = coordinates
		.try_into()
		.map_err(|v: Vec<f64>| anyhow!("coordinates must have exactly two values, found {}", v.len()))?;

	Ok(Position::new(lon, lat))
}

fn parse_optional_string(scanner: &mut Scanner) -> Result<Option<String>> {
	scanner.skip_whitespace();
	match scanner.peek() {
		Some(b'n') => scanner.expect_tag("null").map(|()| None),
		_ => scanner.string().map(Some),
	}
}

fn parse_properties(scanner: &mut Scanner) -> Result<PoiProperties> {
	let mut svg: Option<String> = None;
	let mut icon_width: Option<u32> = None;
	let mut icon_height: Option<u32> = None;
	let mut color: Option<MarkerColor> = None;
	let mut id: Option<u64> = None;
	let mut name: Option<String> = None;
	let mut category: Option<String> = None;
	let mut note: Option<String> = None;

	scanner
		.object_entries(|key, scanner| {
			match key {
				"svgHtml" => svg = Some(scanner.string()?),
				"iconWidth" => icon_width = Some(scanner.number::<u32>()?),
				"iconHeight" => icon_height = Some(scanner.number::<u32>()?),
				"hr" => color = Some(MarkerColor::parse(&scanner.string()?)?),
				"ID" => id = Some(scanner.number::<u64>()?),
				"name" => name = Some(scanner.string()?),
				"type" => category = Some(scanner.string()?),
				"note" => note = parse_optional_string(scanner)?,
				_ => scanner.skip_value()?,
			}
			Ok(())
		})
		.context("while parsing feature properties")?;

	let missing = |key: &str| anyhow!("properties are missing '{key}'");

	Ok(PoiProperties {
		icon: MarkerIcon {
			svg: svg.ok_or_else(|| missing("svgHtml"))?,
			width: icon_width.ok_or_else(|| missing("iconWidth"))?,
			height: icon_height.ok_or_else(|| missing("iconHeight"))?,
		},
		color: color.ok_or_else(|| missing("hr"))?,
		id: id.ok_or_else(|| missing("ID"))?,
		name: name.ok_or_else(|| missing("name"))?,
		category: category.ok_or_else(|| missing("type"))?,
		note,
	})
}
