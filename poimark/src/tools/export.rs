use anyhow::{Context, Result};
use clap::Args;
use log::info;
use poimark::dataset;
use std::path::PathBuf;

#[derive(Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// output file; writes to stdout if omitted
	#[arg(long, short)]
	output: Option<PathBuf>,

	/// pretty-print the output
	#[arg(long, short)]
	pretty: bool,

	/// number of coordinate decimal places
	#[arg(long)]
	precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut text = dataset::points_en().to_json_string(arguments.precision, arguments.pretty);
	text.push('\n');

	match &arguments.output {
		Some(path) => {
			std::fs::write(path, &text).with_context(|| format!("writing '{}'", path.display()))?;
			info!("wrote {} bytes to '{}'", text.len(), path.display());
		}
		None => print!("{text}"),
	}
	Ok(())
}
