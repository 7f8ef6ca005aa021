use super::{parse_poi_collection, parse_poi_feature};
use crate::{PoiCollection, PoiFeature};
use anyhow::{Result, anyhow};
use std::io::{BufRead, Read};

/// Read a whole GeoJSON FeatureCollection from any reader.
pub fn read_poi_collection(mut reader: impl Read) -> Result<PoiCollection> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_poi_collection(&buffer)
}

fn process_line(line: std::io::Result<String>, index: usize) -> Result<Option<PoiFeature>> {
	match line {
		Ok(line) if line.trim().is_empty() => Ok(None), // Skip empty or whitespace-only lines
		Ok(line) => parse_poi_feature(&line)
			.map(Some)
			.map_err(|e| anyhow!("line {}: {}", index + 1, e)),
		Err(e) => Err(anyhow!("line {}: {}", index + 1, e)),
	}
}

/// Iterate over newline-delimited feature objects, one feature per line.
pub fn read_poi_lines_iter(reader: impl BufRead) -> impl Iterator<Item = Result<PoiFeature>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index).transpose())
}
