//! A slice-based JSON scanner.
//!
//! The codec always works on complete in-memory documents, so the scanner
//! borrows the input and tracks a byte offset. Errors carry the offset and the
//! input surrounding it.

use anyhow::{Error, Result, anyhow};
use std::str::FromStr;

/// How many bytes of input to show on each side of an error offset.
const ERROR_CONTEXT: usize = 16;

pub struct Scanner<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Scanner<'a> {
	#[must_use]
	pub fn new(input: &'a str) -> Self {
		Scanner {
			bytes: input.as_bytes(),
			pos: 0,
		}
	}

	#[must_use]
	pub fn offset(&self) -> usize {
		self.pos
	}

	/// Look at the next byte without consuming it.
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.pos).copied()
	}

	/// Consume and return the next byte.
	pub fn bump(&mut self) -> Option<u8> {
		let byte = self.peek();
		if byte.is_some() {
			self.pos += 1;
		}
		byte
	}

	fn expect_byte(&mut self, expected: u8) -> Result<()> {
		match self.peek() {
			Some(byte) if byte == expected => {
				self.pos += 1;
				Ok(())
			}
			Some(byte) => Err(self.error(&format!("expected '{}', found '{}'", expected as char, byte as char))),
			None => Err(self.error(&format!("expected '{}', found end of input", expected as char))),
		}
	}

	/// Build an error annotated with the byte offset and the input around it.
	#[must_use]
	pub fn error(&self, msg: &str) -> Error {
		let at = self.pos.min(self.bytes.len());
		let start = at.saturating_sub(ERROR_CONTEXT);
		let end = (at + ERROR_CONTEXT).min(self.bytes.len());
		let before = String::from_utf8_lossy(&self.bytes[start..at]);
		let after = String::from_utf8_lossy(&self.bytes[at..end]);
		anyhow!("{msg} at offset {at}: '{before}' -> '{after}'")
	}

	pub fn skip_whitespace(&mut self) {
		while let Some(byte) = self.peek() {
			if !byte.is_ascii_whitespace() {
				break;
			}
			self.pos += 1;
		}
	}

	/// Error if any non-whitespace input remains.
	pub fn expect_end(&mut self) -> Result<()> {
		self.skip_whitespace();
		if self.pos < self.bytes.len() {
			return Err(self.error("expected end of input"));
		}
		Ok(())
	}

	/// Match a fixed tag like `true` or `null` at the current offset.
	pub fn expect_tag(&mut self, tag: &str) -> Result<()> {
		if self.bytes[self.pos..].starts_with(tag.as_bytes()) {
			self.pos += tag.len();
			Ok(())
		} else {
			Err(self.error(&format!("expected '{tag}'")))
		}
	}

	/// Parse a string literal including the quotes.
	///
	/// Handles the JSON escapes and BMP `\uXXXX` sequences. Strings without
	/// escapes are sliced straight out of the input.
	pub fn string(&mut self) -> Result<String> {
		self.skip_whitespace();
		self.expect_byte(b'"')?;

		let start = self.pos;
		loop {
			match self.peek() {
				None => return Err(self.error("unterminated string")),
				Some(b'"') => {
					let text = self.str_slice(start, self.pos)?.to_string();
					self.pos += 1;
					return Ok(text);
				}
				Some(b'\\') => break,
				Some(_) => self.pos += 1,
			}
		}

		let mut bytes = self.bytes[start..self.pos].to_vec();
		loop {
			match self.bump() {
				None => return Err(self.error("unterminated string")),
				Some(b'"') => {
					return String::from_utf8(bytes).map_err(|_| self.error("string is not valid UTF-8"));
				}
				Some(b'\\') => match self.bump() {
					Some(b'"') => bytes.push(b'"'),
					Some(b'\\') => bytes.push(b'\\'),
					Some(b'/') => bytes.push(b'/'),
					Some(b'b') => bytes.push(0x08),
					Some(b'f') => bytes.push(0x0C),
					Some(b'n') => bytes.push(b'\n'),
					Some(b'r') => bytes.push(b'\r'),
					Some(b't') => bytes.push(b'\t'),
					Some(b'u') => {
						let c = self.unicode_escape()?;
						let mut buf = [0u8; 4];
						bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
					}
					_ => return Err(self.error("unknown escape sequence")),
				},
				Some(byte) => bytes.push(byte),
			}
		}
	}

	fn unicode_escape(&mut self) -> Result<char> {
		let code = self
			.bytes
			.get(self.pos..self.pos + 4)
			.and_then(|hex| std::str::from_utf8(hex).ok())
			.and_then(|hex| u32::from_str_radix(hex, 16).ok())
			.ok_or_else(|| self.error("invalid unicode escape"))?;
		self.pos += 4;
		char::from_u32(code).ok_or_else(|| self.error("invalid unicode code point"))
	}

	/// Parse a number following the JSON grammar and convert it via `FromStr`.
	pub fn number<T: FromStr>(&mut self) -> Result<T> {
		self.skip_whitespace();
		let start = self.pos;

		if let Some(b'-') = self.peek() {
			self.pos += 1;
		}
		if self.eat_digits() == 0 {
			return Err(self.error("expected a digit"));
		}
		if let Some(b'.') = self.peek() {
			self.pos += 1;
			if self.eat_digits() == 0 {
				return Err(self.error("expected a digit after the decimal point"));
			}
		}
		if let Some(b'e' | b'E') = self.peek() {
			self.pos += 1;
			if let Some(b'+' | b'-') = self.peek() {
				self.pos += 1;
			}
			if self.eat_digits() == 0 {
				return Err(self.error("expected a digit in the exponent"));
			}
		}

		self
			.str_slice(start, self.pos)?
			.parse::<T>()
			.map_err(|_| self.error("invalid number"))
	}

	fn eat_digits(&mut self) -> usize {
		let start = self.pos;
		while let Some(b'0'..=b'9') = self.peek() {
			self.pos += 1;
		}
		self.pos - start
	}

	/// Walk the entries of an object, calling `entry` for every key.
	///
	/// The callback receives the key and the scanner positioned at the start of
	/// the value, and must consume exactly that value.
	pub fn object_entries(&mut self, mut entry: impl FnMut(&str, &mut Scanner<'a>) -> Result<()>) -> Result<()> {
		self.skip_whitespace();
		self.expect_byte(b'{')?;
		self.skip_whitespace();
		if let Some(b'}') = self.peek() {
			self.pos += 1;
			return Ok(());
		}

		loop {
			let key = self.string()?;
			self.skip_whitespace();
			self.expect_byte(b':')?;
			self.skip_whitespace();
			entry(&key, self)?;

			self.skip_whitespace();
			match self.peek() {
				Some(b',') => self.pos += 1,
				Some(b'}') => {
					self.pos += 1;
					return Ok(());
				}
				_ => return Err(self.error("expected ',' or '}' in object")),
			}
		}
	}

	/// Walk the entries of an array, calling `entry` for every element.
	pub fn array_entries(&mut self, mut entry: impl FnMut(&mut Scanner<'a>) -> Result<()>) -> Result<()> {
		self.skip_whitespace();
		self.expect_byte(b'[')?;
		self.skip_whitespace();
		if let Some(b']') = self.peek() {
			self.pos += 1;
			return Ok(());
		}

		loop {
			entry(self)?;

			self.skip_whitespace();
			match self.peek() {
				Some(b',') => self.pos += 1,
				Some(b']') => {
					self.pos += 1;
					return Ok(());
				}
				_ => return Err(self.error("expected ',' or ']' in array")),
			}
		}
	}

	/// Skip one complete JSON value of any type.
	pub fn skip_value(&mut self) -> Result<()> {
		self.skip_whitespace();
		match self.peek() {
			Some(b'{') => self.object_entries(|_, scanner| scanner.skip_value()),
			Some(b'[') => self.array_entries(Scanner::skip_value),
			Some(b'"') => self.string().map(|_| ()),
			Some(b't') => self.expect_tag("true"),
			Some(b'f') => self.expect_tag("false"),
			Some(b'n') => self.expect_tag("null"),
			Some(b'-' | b'0'..=b'9') => self.number::<f64>().map(|_| ()),
			Some(byte) => Err(self.error(&format!("unexpected character '{}'", byte as char))),
			None => Err(self.error("expected a value")),
		}
	}

	fn str_slice(&self, start: usize, end: usize) -> Result<&'a str> {
		std::str::from_utf8(&self.bytes[start..end]).map_err(|_| self.error("input is not valid UTF-8"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn bump_and_peek() {
		let mut scanner = Scanner::new("ab");
		assert_eq!(scanner.peek(), Some(b'a'));
		assert_eq!(scanner.peek(), Some(b'a'));
		assert_eq!(scanner.bump(), Some(b'a'));
		assert_eq!(scanner.bump(), Some(b'b'));
		assert_eq!(scanner.bump(), None);
		assert_eq!(scanner.offset(), 2);
	}

	#[test]
	fn tags() {
		assert!(Scanner::new("null").expect_tag("null").is_ok());
		assert!(Scanner::new("true,").expect_tag("true").is_ok());
		assert!(Scanner::new("nuul").expect_tag("null").is_err());
		assert!(Scanner::new("nul").expect_tag("null").is_err());
	}

	#[rstest]
	#[case(" \"hello\" ", "hello")]
	#[case("\"he\\nllo\"", "he\nllo")]
	#[case("\"he\\u0041llo\"", "heAllo")]
	#[case("\"a\\b\\f\\n\\r\\tb\"", "a\x08\x0C\n\r\tb")]
	#[case("\"say \\\"hi\\\"\"", "say \"hi\"")]
	#[case("\"<svg x='0px'/>\"", "<svg x='0px'/>")]
	#[case("\"Unicode: 😊\"", "Unicode: 😊")]
	fn strings(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(Scanner::new(input).string().unwrap(), expected);
	}

	#[rstest]
	#[case("\"he\\u004Gllo\"")]
	#[case("\"bad \\q escape\"")]
	#[case("\"surrogate \\ud800\"")]
	#[case("\"unterminated")]
	#[case("no quotes")]
	fn invalid_strings(#[case] input: &str) {
		assert!(Scanner::new(input).string().is_err());
	}

	#[rstest]
	#[case("123", "123")]
	#[case("-123", "-123")]
	#[case("0.456", "0.456")]
	#[case("31.41401,", "31.41401")]
	#[case("-123.45E+6", "-123450000")]
	#[case("2e10", "20000000000")]
	fn numbers(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(Scanner::new(input).number::<f64>().unwrap().to_string(), expected);
	}

	#[test]
	fn typed_numbers() {
		assert_eq!(Scanner::new("-123").number::<i32>().unwrap(), -123);
		assert_eq!(Scanner::new("42").number::<u64>().unwrap(), 42);
		assert_eq!(Scanner::new("2.11583").number::<f64>().unwrap(), 2.11583);
		assert!(Scanner::new("12.34").number::<u32>().is_err());
	}

	#[rstest]
	#[case("123..45")]
	#[case("123e")]
	#[case("e123")]
	#[case("-")]
	#[case("123.")]
	#[case("+5")]
	fn invalid_numbers(#[case] input: &str) {
		assert!(Scanner::new(input).number::<f64>().is_err());
	}

	#[test]
	fn object_entries_collects_keys() {
		let mut map = std::collections::BTreeMap::new();
		Scanner::new("{\"key1\":\"value1\", \"key2\": \"value2\"}")
			.object_entries(|key, scanner| {
				map.insert(key.to_string(), scanner.string()?);
				Ok(())
			})
			.unwrap();

		assert_eq!(map.get("key1"), Some(&"value1".to_string()));
		assert_eq!(map.get("key2"), Some(&"value2".to_string()));
	}

	#[test]
	fn object_entries_errors() {
		let result = Scanner::new("{\"key\" 1}").object_entries(|_, scanner| scanner.skip_value());
		assert!(result.unwrap_err().to_string().contains("expected ':'"));

		let result = Scanner::new("{\"a\":1 \"b\":2}").object_entries(|_, scanner| scanner.skip_value());
		assert!(result.unwrap_err().to_string().contains("expected ',' or '}'"));
	}

	#[test]
	fn array_entries_collects_values() {
		let mut values = Vec::new();
		Scanner::new("[1, 2, 3]")
			.array_entries(|scanner| {
				values.push(scanner.number::<i32>()?);
				Ok(())
			})
			.unwrap();
		assert_eq!(values, vec![1, 2, 3]);
	}

	#[test]
	fn empty_containers() {
		assert!(Scanner::new("[ ]").array_entries(|_| unreachable!()).is_ok());
		assert!(Scanner::new("{}").object_entries(|_, _| unreachable!()).is_ok());
	}

	#[test]
	fn array_entries_rejects_missing_comma() {
		let result = Scanner::new("[1 2]").array_entries(|scanner| scanner.number::<i32>().map(|_| ()));
		assert!(result.is_err());
	}

	#[test]
	fn skip_value_handles_nesting() {
		let mut scanner = Scanner::new(r#"{"a":[1,{"b":null}],"c":"x","d":true} tail"#);
		scanner.skip_value().unwrap();
		scanner.skip_whitespace();
		assert_eq!(scanner.peek(), Some(b't'));
	}

	#[test]
	fn skip_value_rejects_garbage() {
		assert!(Scanner::new("<svg>").skip_value().is_err());
		assert!(Scanner::new("").skip_value().is_err());
		assert!(Scanner::new("[1,]").skip_value().is_err());
	}

	#[test]
	fn errors_carry_offset_and_context() {
		let err = Scanner::new("[1,x]")
			.array_entries(|scanner| scanner.number::<f64>().map(|_| ()))
			.unwrap_err();
		let msg = err.to_string();
		assert!(msg.contains("at offset 3"));
		assert!(msg.contains("[1,"));
	}

	#[test]
	fn expect_end_rejects_trailing_input() {
		let mut scanner = Scanner::new("null  ");
		scanner.expect_tag("null").unwrap();
		assert!(scanner.expect_end().is_ok());

		let mut scanner = Scanner::new("null x");
		scanner.expect_tag("null").unwrap();
		let msg = scanner.expect_end().unwrap_err().to_string();
		assert!(msg.contains("expected end of input"));
	}
}
