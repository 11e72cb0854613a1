//! Page footer and the floating scroll-to-top button.

use leptos::prelude::*;

use super::navigation::{NAV_ITEMS, NavigationContext, scroll_to_top};
use crate::content::SocialLink;

/// Quick links, social links and copyright.
#[component]
pub fn Footer(#[prop(into)] owner: String, social_links: Vec<SocialLink>) -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="site-footer">
			<div class="container footer-grid">
				<div>
					<p class="brand">{owner.clone()}</p>
				</div>
				<ul class="footer-links">
					{NAV_ITEMS
						.iter()
						.map(|item| view! { <li><a href=item.href()>{item.label}</a></li> })
						.collect_view()}
				</ul>
				<ul class="social-links">
					{social_links
						.into_iter()
						.map(|link| {
							view! {
								<li>
									<a
										href=link.url
										target="_blank"
										rel="noopener noreferrer"
										class=format!("social-link icon-{}", link.icon)
									>
										{link.name}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</div>
			<p class="copyright">{format!("© {} {}. Tous droits réservés.", year, owner)}</p>
		</footer>
	}
}

/// Floating button shown once the page is scrolled down.
#[component]
pub fn ScrollToTop() -> impl IntoView {
	let nav = expect_context::<NavigationContext>();

	view! {
		<Show when=move || nav.show_scroll_top()>
			<button
				class="scroll-top"
				aria-label="Retour en haut"
				on:click=move |_| scroll_to_top()
			>
				"↑"
			</button>
		</Show>
	}
}
