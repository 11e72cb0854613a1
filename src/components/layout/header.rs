//! Fixed page header with section links, theme toggle and mobile menu.

use leptos::prelude::*;

use super::navigation::{NAV_ITEMS, NavItem, NavigationContext};
use super::theme::ThemeContext;

fn nav_link(nav: NavigationContext, item: NavItem, class: &'static str) -> impl IntoView {
	let link_class = move || {
		if nav.active.get() == item.id {
			format!("{} active", class)
		} else {
			class.to_string()
		}
	};
	view! {
		<a href=item.href() class=link_class on:click=move |_| nav.menu_open.set(false)>
			{item.label}
		</a>
	}
}

/// Fixed navigation bar with theme toggle and mobile menu.
#[component]
pub fn Header(#[prop(into)] owner: String) -> impl IntoView {
	let nav = expect_context::<NavigationContext>();
	let theme = expect_context::<ThemeContext>();

	let header_class = move || {
		if nav.header_scrolled() {
			"site-header scrolled"
		} else {
			"site-header"
		}
	};
	let theme_label = move || {
		if theme.mode.get().is_dark() {
			"Passer au thème clair"
		} else {
			"Passer au thème sombre"
		}
	};

	view! {
		<header class=header_class>
			<nav class="container nav-bar">
				<a href="#home" class="brand">{owner}</a>
				<div class="nav-links">
					{NAV_ITEMS.iter().map(|&item| nav_link(nav, item, "nav-link")).collect_view()}
				</div>
				<button
					class="icon-button theme-toggle"
					aria-label=theme_label
					title=theme_label
					on:click=move |_| theme.toggle()
				>
					{move || if theme.mode.get().is_dark() { "☀" } else { "☾" }}
				</button>
				<button
					class="icon-button menu-toggle"
					aria-label="Menu"
					aria-expanded=move || nav.menu_open.get().to_string()
					on:click=move |_| nav.menu_open.update(|open| *open = !*open)
				>
					{move || if nav.menu_open.get() { "✕" } else { "☰" }}
				</button>
			</nav>
			<Show when=move || nav.menu_open.get()>
				<div class="mobile-menu">
					{NAV_ITEMS
						.iter()
						.map(|&item| nav_link(nav, item, "mobile-link"))
						.collect_view()}
				</div>
			</Show>
		</header>
	}
}
