//! A streaming JSON writer.
//!
//! The wire format has a fixed schema, so output is built by emitting keys and
//! values in order instead of going through a value tree. `pretty` switches
//! from compact output to tab-indented lines.

use std::fmt::Display;

pub struct JsonWriter {
	out: String,
	pretty: bool,
	depth: usize,
	needs_comma: bool,
	after_key: bool,
}

impl JsonWriter {
	#[must_use]
	pub fn new(pretty: bool) -> Self {
		JsonWriter {
			out: String::new(),
			pretty,
			depth: 0,
			needs_comma: false,
			after_key: false,
		}
	}

	fn separate(&mut self) {
		if self.after_key {
			self.after_key = false;
			return;
		}
		if self.needs_comma {
			self.out.push(',');
		}
		if self.pretty && self.depth > 0 {
			self.break_line();
		}
	}

	fn break_line(&mut self) {
		self.out.push('\n');
		for _ in 0..self.depth {
			self.out.push('\t');
		}
	}

	fn close(&mut self, bracket: char) {
		self.depth -= 1;
		// an empty container stays inline
		if self.pretty && self.needs_comma {
			self.break_line();
		}
		self.out.push(bracket);
		self.needs_comma = true;
	}

	pub fn begin_object(&mut self) {
		self.separate();
		self.out.push('{');
		self.depth += 1;
		self.needs_comma = false;
	}

	pub fn end_object(&mut self) {
		self.close('}');
	}

	pub fn begin_array(&mut self) {
		self.separate();
		self.out.push('[');
		self.depth += 1;
		self.needs_comma = false;
	}

	pub fn end_array(&mut self) {
		self.close(']');
	}

	/// Emit an object key; the next emitted value belongs to it.
	pub fn key(&mut self, key: &str) {
		self.separate();
		self.out.push('"');
		escape_into(&mut self.out, key);
		self.out.push_str("\":");
		if self.pretty {
			self.out.push(' ');
		}
		self.after_key = true;
	}

	pub fn string(&mut self, value: &str) {
		self.separate();
		self.out.push('"');
		escape_into(&mut self.out, value);
		self.out.push('"');
		self.needs_comma = true;
	}

	pub fn number<N: Display>(&mut self, value: N) {
		self.separate();
		self.out.push_str(&value.to_string());
		self.needs_comma = true;
	}

	pub fn null(&mut self) {
		self.separate();
		self.out.push_str("null");
		self.needs_comma = true;
	}

	#[must_use]
	pub fn finish(self) -> String {
		self.out
	}
}

/// Append `text` to `out` with JSON string escaping.
fn escape_into(out: &mut String, text: &str) {
	for c in text.chars() {
		match c {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\u{08}' => out.push_str("\\b"),
			'\u{0C}' => out.push_str("\\f"),
			c if c.is_control() => {
				out.push_str(&format!("\\u{:04x}", c as u32));
			}
			c => out.push(c),
		}
	}
}
