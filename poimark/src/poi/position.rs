use anyhow::{Result, ensure};
use poimark_core::write::JsonWriter;
use std::fmt::Debug;

/// A longitude/latitude pair in degrees, stored as `[lon, lat]`.
#[derive(Clone, Copy, PartialEq)]
pub struct Position([f64; 2]);

impl Position {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self([lon, lat])
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0[1]
	}

	/// Write the position as a JSON array `[lon, lat]`, optionally rounded to
	/// `precision` decimal places.
	pub fn write_json(&self, json: &mut JsonWriter, precision: Option<u8>) {
		let [lon, lat] = match precision {
			Some(digits) => {
				let factor = 10f64.powi(i32::from(digits));
				[
					(self.0[0] * factor).round() / factor,
					(self.0[1] * factor).round() / factor,
				]
			}
			None => self.0,
		};
		json.begin_array();
		json.number(lon);
		json.number(lat);
		json.end_array();
	}

	/// Check that both components are finite and within valid geographic ranges.
	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.lon().is_finite() && self.lat().is_finite(),
			"coordinates must be finite numbers"
		);
		ensure!(
			(-180.0..=180.0).contains(&self.lon()),
			"longitude {} is outside [-180, 180]",
			self.lon()
		);
		ensure!(
			(-90.0..=90.0).contains(&self.lat()),
			"latitude {} is outside [-90, 90]",
			self.lat()
		);
		Ok(())
	}
}

impl From<[f64; 2]> for Position {
	fn from(value: [f64; 2]) -> Self {
		Position(value)
	}
}

impl From<(f64, f64)> for Position {
	fn from(value: (f64, f64)) -> Self {
		Position([value.0, value.1])
	}
}

impl From<Position> for [f64; 2] {
	fn from(value: Position) -> Self {
		value.0
	}
}

impl Debug for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
