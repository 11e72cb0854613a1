//! Type-and-delete caption cycling through a list of phrases.

use std::time::Duration;

use leptos::prelude::*;

/// Delay between typed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
/// Delay between deleted characters.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// How long a fully typed phrase stays before deleting starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(2_000);
/// Pause after a phrase is erased, before the next one starts.
pub const NEXT_DELAY: Duration = Duration::from_millis(150);

/// Caption state. Each [`Typewriter::step`] types or deletes one character.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Typewriter {
	phrases: Vec<String>,
	phrase: usize,
	shown: usize,
	deleting: bool,
}

impl Typewriter {
	/// Start with nothing shown, about to type the first phrase.
	pub fn new(phrases: Vec<String>) -> Self {
		Self {
			phrases,
			..Self::default()
		}
	}

	fn current(&self) -> &str {
		if self.phrases.is_empty() {
			""
		} else {
			&self.phrases[self.phrase % self.phrases.len()]
		}
	}

	/// Visible prefix of the current phrase.
	pub fn text(&self) -> &str {
		let phrase = self.current();
		match phrase.char_indices().nth(self.shown) {
			Some((end, _)) => &phrase[..end],
			None => phrase,
		}
	}

	/// Whether characters are being removed.
	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Advance one step and return the delay before the next one.
	pub fn step(&mut self) -> Duration {
		if self.phrases.is_empty() {
			return HOLD_DELAY;
		}

		let len = self.current().chars().count();
		match (self.deleting, self.shown) {
			(false, shown) if shown >= len => {
				self.deleting = true;
				HOLD_DELAY
			}
			(false, _) => {
				self.shown += 1;
				TYPE_DELAY
			}
			(true, 0) => {
				self.deleting = false;
				self.phrase = (self.phrase + 1) % self.phrases.len();
				NEXT_DELAY
			}
			(true, _) => {
				self.shown -= 1;
				DELETE_DELAY
			}
		}
	}
}

/// Drive `state` with chained timeouts until its owner is disposed.
pub fn run_typewriter(state: RwSignal<Typewriter>, delay: Duration) {
	set_timeout(
		move || {
			if let Some(next) = state.try_update(Typewriter::step) {
				run_typewriter(state, next);
			}
		},
		delay,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn writer() -> Typewriter {
		Typewriter::new(vec!["Né".to_string(), "ok".to_string()])
	}

	#[test]
	fn types_then_holds() {
		let mut t = writer();
		assert_eq!(t.text(), "");
		assert_eq!(t.step(), TYPE_DELAY);
		assert_eq!(t.text(), "N");
		assert_eq!(t.step(), TYPE_DELAY);
		assert_eq!(t.text(), "Né");

		assert_eq!(t.step(), HOLD_DELAY);
		assert!(t.is_deleting());
		assert_eq!(t.text(), "Né");
	}

	#[test]
	fn deletes_then_moves_to_next_phrase() {
		let mut t = writer();
		for _ in 0..3 {
			t.step();
		}
		assert_eq!(t.step(), DELETE_DELAY);
		assert_eq!(t.text(), "N");
		assert_eq!(t.step(), DELETE_DELAY);
		assert_eq!(t.text(), "");

		assert_eq!(t.step(), NEXT_DELAY);
		assert!(!t.is_deleting());
		t.step();
		assert_eq!(t.text(), "o");
	}

	#[test]
	fn wraps_after_last_phrase() {
		let mut t = writer();
		// two phrases of two chars: type 2, hold, delete 2, next
		for _ in 0..12 {
			t.step();
		}
		assert_eq!(t.text(), "");
		t.step();
		assert_eq!(t.text(), "N");
	}

	#[test]
	fn no_phrases_is_inert() {
		let mut t = Typewriter::new(Vec::new());
		assert_eq!(t.step(), HOLD_DELAY);
		assert_eq!(t.text(), "");
		assert!(!t.is_deleting());
	}
}
