//! Pointer tracking in the normalized coordinate space.
//!
//! Client coordinates from mouse events are converted into percentages of the
//! container's bounding box. Anything outside `[0, 100]` on either axis, or a
//! container with no area, reads as "no pointer".

/// Container bounding box in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Width; zero means not laid out.
	pub width: f64,
	/// Height.
	pub height: f64,
}

impl Bounds {
	/// Box from its edges and size.
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			left,
			top,
			width,
			height,
		}
	}

	/// Box of a measured element.
	pub fn from_rect(rect: &web_sys::DomRect) -> Self {
		Self::new(rect.left(), rect.top(), rect.width(), rect.height())
	}

	/// Convert client coordinates into `[0, 100]` percentages of the box.
	pub fn normalize(&self, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
		if !(self.width > 0.0 && self.height > 0.0) {
			return None;
		}
		let x = (client_x - self.left) / self.width * 100.0;
		let y = (client_y - self.top) / self.height * 100.0;
		let inside = |v: f64| (0.0..=100.0).contains(&v);
		(inside(x) && inside(y)).then_some((x, y))
	}
}

/// Last known pointer position, or absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	position: Option<(f64, f64)>,
}

impl PointerState {
	/// Normalized position, if the pointer is inside.
	pub fn get(&self) -> Option<(f64, f64)> {
		self.position
	}

	/// Record a pointer-move. Out-of-box positions clear the state.
	pub fn track(&mut self, bounds: Option<Bounds>, client_x: f64, client_y: f64) {
		self.position = bounds.and_then(|b| b.normalize(client_x, client_y));
	}

	/// Place the pointer at normalized coordinates.
	pub fn set(&mut self, x: f64, y: f64) {
		self.position = Some((x, y));
	}

	/// Forget the pointer, e.g. when it leaves the window.
	pub fn clear(&mut self) {
		self.position = None;
	}
}
