use anyhow::{Context, Result};
use clap::Args;
use log::info;
use poimark::geojson::read_poi_collection;
use std::fs::File;

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// POI GeoJSON file you want to probe
	#[arg(required = true)]
	filename: String,

	/// also run full validation
	#[arg(long, short)]
	deep: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("probe {:?}", arguments.filename);

	let file = File::open(&arguments.filename).with_context(|| format!("opening '{}'", arguments.filename))?;
	let collection = read_poi_collection(file).with_context(|| format!("reading '{}'", arguments.filename))?;

	println!("features: {}", collection.len());
	if let Some(bounds) = collection.bounds() {
		println!(
			"bounds: [{}, {}] .. [{}, {}]",
			bounds[0], bounds[1], bounds[2], bounds[3]
		);
	}
	for feature in &collection.features {
		println!(
			"  {} '{}' at [{}, {}] ({}, {}x{} px)",
			feature.id,
			feature.properties.name,
			feature.position.lon(),
			feature.position.lat(),
			feature.properties.color,
			feature.properties.icon.width,
			feature.properties.icon.height,
		);
	}

	if arguments.deep {
		collection
			.verify()
			.with_context(|| format!("validating '{}'", arguments.filename))?;
		println!("validation: ok");
	}

	Ok(())
}
