use anyhow::{Result, bail};
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// An RGBA marker color, written as `#rrggbbaa` on the wire.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MarkerColor {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: u8,
}

impl MarkerColor {
	#[must_use]
	pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Parse `#rrggbbaa` or `#rrggbb` (alpha defaults to `ff`).
	pub fn parse(text: &str) -> Result<Self> {
		let Some(hex) = text.strip_prefix('#') else {
			bail!("color '{text}' must start with '#'");
		};
		if hex.len() != 6 && hex.len() != 8 {
			bail!("color '{text}' must have 6 or 8 hex digits");
		}
		if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
			bail!("color '{text}' contains invalid hex digits");
		}

		let channel = |index: usize| -> Result<u8> {
			u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16)
				.map_err(|_| anyhow::anyhow!("color '{text}' contains invalid hex digits"))
		};

		Ok(Self {
			r: channel(0)?,
			g: channel(1)?,
			b: channel(2)?,
			a: if hex.len() == 8 { channel(3)? } else { 0xff },
		})
	}
}

impl FromStr for MarkerColor {
	type Err = anyhow::Error;
	fn from_str(text: &str) -> Result<Self> {
		Self::parse(text)
	}
}

impl Display for MarkerColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
	}
}

impl Debug for MarkerColor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "MarkerColor({self})")
	}
}
