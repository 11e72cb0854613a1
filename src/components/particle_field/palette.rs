//! Colour tokens for particles.
//!
//! Palettes are supplied as CSS hex strings (`#3B82F6`, `#fff`) and parsed
//! once at configuration time so the simulator only ever copies plain values.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color at opacity `a`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Parse a `#rgb` or `#rrggbb` token. Returns `None` for anything else.
	pub fn from_hex(token: &str) -> Option<Self> {
		let hex = token.trim().strip_prefix('#')?;
		if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
			return None;
		}
		let channel = |s: &str| u8::from_str_radix(s, 16).ok();
		match hex.len() {
			3 => {
				let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
				Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
			}
			6 => Some(Self::rgb(
				channel(&hex[0..2])?,
				channel(&hex[2..4])?,
				channel(&hex[4..6])?,
			)),
			_ => None,
		}
	}

	/// CSS value: hex when opaque, `rgba()` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Blue, green, violet and amber accents used across the site.
pub const DEFAULT_TOKENS: [&str; 4] = ["#3B82F6", "#10B981", "#8B5CF6", "#F59E0B"];

/// [`DEFAULT_TOKENS`] as colors.
pub fn default_palette() -> Vec<Color> {
	vec![
		Color::rgb(59, 130, 246), // Blue
		Color::rgb(16, 185, 129), // Emerald
		Color::rgb(139, 92, 246), // Violet
		Color::rgb(245, 158, 11), // Amber
	]
}

/// Parse a list of tokens, skipping invalid entries.
///
/// Falls back to [`default_palette`] when nothing usable remains so a field
/// always has at least one colour to draw from.
pub fn parse_palette<S: AsRef<str>>(tokens: &[S]) -> Vec<Color> {
	let colors: Vec<Color> = tokens
		.iter()
		.filter_map(|t| {
			let parsed = Color::from_hex(t.as_ref());
			if parsed.is_none() {
				log::warn!("portfolio: ignoring invalid colour token {:?}", t.as_ref());
			}
			parsed
		})
		.collect();

	if colors.is_empty() {
		default_palette()
	} else {
		colors
	}
}
