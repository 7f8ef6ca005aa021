//! The GeoJSON wire codec: parsing and reading POI feature collections.
//!
//! Serialization lives on the model types (`write_json`/`to_json_string` built
//! on `poimark_core::write`).

mod parse;
mod read;

pub use parse::*;
pub use read::*;
