//! Light/dark theme state.
//!
//! The mode is owned by the root component and shared through
//! [`ThemeContext`]. Applying a mode toggles the `dark` class on `<html>` and
//! remembers the choice in `localStorage`.

use leptos::prelude::*;

const STORAGE_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

/// Color scheme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
	/// Default light scheme.
	#[default]
	Light,
	/// Dark scheme, `dark` class on `<html>`.
	Dark,
}

impl ThemeMode {
	/// A saved preference wins; otherwise follow the system setting.
	pub fn initial(saved: Option<&str>, prefers_dark: bool) -> Self {
		match saved.and_then(Self::parse) {
			Some(mode) => mode,
			None if prefers_dark => ThemeMode::Dark,
			None => ThemeMode::Light,
		}
	}

	/// Parse a stored `"light"`/`"dark"` value.
	pub fn parse(value: &str) -> Option<Self> {
		match value {
			"dark" => Some(ThemeMode::Dark),
			"light" => Some(ThemeMode::Light),
			_ => None,
		}
	}

	/// Value written to storage.
	pub fn as_str(self) -> &'static str {
		match self {
			ThemeMode::Light => "light",
			ThemeMode::Dark => "dark",
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			ThemeMode::Light => ThemeMode::Dark,
			ThemeMode::Dark => ThemeMode::Light,
		}
	}

	/// Whether this is the dark scheme.
	pub fn is_dark(self) -> bool {
		self == ThemeMode::Dark
	}
}

/// Shared handle to the current theme.
#[derive(Clone, Copy, Debug)]
pub struct ThemeContext {
	/// Current mode.
	pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
	/// Context starting in `mode`.
	pub fn new(mode: ThemeMode) -> Self {
		Self {
			mode: RwSignal::new(mode),
		}
	}

	/// Flip between light and dark.
	pub fn toggle(&self) {
		self.mode.update(|m| *m = m.toggled());
	}
}

fn saved_preference() -> Option<String> {
	let storage = web_sys::window()?.local_storage().ok()??;
	storage.get_item(STORAGE_KEY).ok()?
}

fn prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.is_some_and(|q| q.matches())
}

/// Initial mode from storage and the system preference.
pub fn detect_theme() -> ThemeMode {
	ThemeMode::initial(saved_preference().as_deref(), prefers_dark())
}

/// Reflect `mode` on the document root and persist it.
pub fn apply_theme(mode: ThemeMode) {
	let Some(window) = web_sys::window() else {
		return;
	};
	if let Some(root) = window.document().and_then(|d| d.document_element()) {
		let classes = root.class_list();
		let result = if mode.is_dark() {
			classes.add_1(DARK_CLASS)
		} else {
			classes.remove_1(DARK_CLASS)
		};
		if let Err(e) = result {
			log::warn!("portfolio: failed to apply theme class: {:?}", e);
		}
	}
	if let Ok(Some(storage)) = window.local_storage() {
		let _ = storage.set_item(STORAGE_KEY, mode.as_str());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn saved_preference_wins() {
		assert_eq!(ThemeMode::initial(Some("light"), true), ThemeMode::Light);
		assert_eq!(ThemeMode::initial(Some("dark"), false), ThemeMode::Dark);
	}

	#[test]
	fn falls_back_to_system() {
		assert_eq!(ThemeMode::initial(None, true), ThemeMode::Dark);
		assert_eq!(ThemeMode::initial(None, false), ThemeMode::Light);
		assert_eq!(ThemeMode::initial(Some("sepia"), true), ThemeMode::Dark);
	}

	#[test]
	fn toggling_round_trips() {
		let mode = ThemeMode::Light;
		assert_eq!(mode.toggled(), ThemeMode::Dark);
		assert_eq!(mode.toggled().toggled(), mode);
		assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
	}
}
