use anyhow::{Context, Result};
use clap::Args;
use log::info;
use poimark::geojson::read_poi_collection;
use std::fs::File;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// POI GeoJSON file you want to validate
	#[arg(required = true)]
	filename: String,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("validate {:?}", arguments.filename);

	let file = File::open(&arguments.filename).with_context(|| format!("opening '{}'", arguments.filename))?;
	let collection = read_poi_collection(file).with_context(|| format!("reading '{}'", arguments.filename))?;
	collection
		.verify()
		.with_context(|| format!("validating '{}'", arguments.filename))?;

	println!("'{}' is valid: {} features", arguments.filename, collection.len());
	Ok(())
}
