//! A strongly typed GeoJSON point-of-interest dataset with custom marker icons.
//!
//! The crate holds the data model ([`PoiCollection`], [`PoiFeature`]), the GeoJSON
//! codec ([`geojson`]), marker icon and color types ([`marker`]), and the embedded
//! dataset ([`dataset`]).

mod poi;

pub mod dataset;
pub mod geojson;
pub mod marker;

pub use poi::*;
