//! Section navigation and scroll-dependent UI state.

use leptos::prelude::*;

/// Header switches to its solid style past this scroll offset (px).
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
/// Scroll-to-top button appears past this offset (px).
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// A section becomes active once its top edge reaches this fraction of the
/// viewport height.
pub const ACTIVE_LINE: f64 = 0.2;

/// A page section reachable from the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	/// Element id of the section.
	pub id: &'static str,
	/// Link text.
	pub label: &'static str,
}

impl NavItem {
	/// In-page anchor.
	pub fn href(&self) -> String {
		format!("#{}", self.id)
	}
}

/// Header links in page order.
pub const NAV_ITEMS: [NavItem; 7] = [
	NavItem { id: "home", label: "Accueil" },
	NavItem { id: "about", label: "À propos" },
	NavItem { id: "skills", label: "Compétences" },
	NavItem { id: "projects", label: "Projets" },
	NavItem { id: "experience", label: "Expérience" },
	NavItem { id: "education", label: "Formation" },
	NavItem { id: "contact", label: "Contact" },
];

/// Pick the active section from measured `(id, top)` pairs in document order.
///
/// `top` is the section's top edge relative to the viewport. The last section
/// whose top has crossed the activation line wins; before any has, the first.
pub fn active_section<'a>(tops: &[(&'a str, f64)], viewport_height: f64) -> Option<&'a str> {
	let line = viewport_height * ACTIVE_LINE;
	tops.iter()
		.rev()
		.find(|(_, top)| *top <= line)
		.or_else(|| tops.first())
		.map(|(id, _)| *id)
}

/// Navigation state owned by the root component.
#[derive(Clone, Copy, Debug)]
pub struct NavigationContext {
	/// Id of the section under the activation line.
	pub active: RwSignal<&'static str>,
	/// Window scroll offset (px).
	pub scroll_y: RwSignal<f64>,
	/// Mobile menu visibility.
	pub menu_open: RwSignal<bool>,
}

impl Default for NavigationContext {
	fn default() -> Self {
		Self {
			active: RwSignal::new(NAV_ITEMS[0].id),
			scroll_y: RwSignal::new(0.0),
			menu_open: RwSignal::new(false),
		}
	}
}

impl NavigationContext {
	/// Whether the header uses its solid style.
	pub fn header_scrolled(&self) -> bool {
		self.scroll_y.get() > HEADER_SCROLL_THRESHOLD
	}

	/// Whether the scroll-to-top button is visible.
	pub fn show_scroll_top(&self) -> bool {
		self.scroll_y.get() > SCROLL_TOP_THRESHOLD
	}

	/// Re-measure scroll offset and section positions.
	pub fn refresh(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		self.scroll_y.set(window.scroll_y().unwrap_or(0.0));

		let Some(document) = window.document() else {
			return;
		};
		let viewport = window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0);
		let tops: Vec<(&'static str, f64)> = NAV_ITEMS
			.iter()
			.filter_map(|item| {
				let el = document.get_element_by_id(item.id)?;
				Some((item.id, el.get_bounding_client_rect().top()))
			})
			.collect();

		if let Some(id) = active_section(&tops, viewport) {
			if self.active.get_untracked() != id {
				self.active.set(id);
			}
		}
	}
}

/// Smoothly scroll the window back to the top.
pub fn scroll_to_top() {
	if let Some(window) = web_sys::window() {
		let options = web_sys::ScrollToOptions::new();
		options.set_top(0.0);
		options.set_behavior(web_sys::ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);
	}
}
