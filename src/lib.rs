//! portfolio-site: single-page personal portfolio.
//!
//! This crate provides a WASM front-end that renders the owner's profile,
//! skills, projects, experience and education, an interactive particle
//! backdrop, and a contact form posting to a third-party form relay.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod content;

use components::contact::ContactSection;
use components::layout::{
	Footer, Header, NavigationContext, ScrollToTop, ThemeContext, apply_theme, detect_theme,
};
use components::sections::{
	AboutSection, EducationSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection,
};
pub use components::particle_field::{FieldConfig, InteractiveParticles, ParticleField};
pub use config::{SiteConfig, load_site_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Main application component.
///
/// Loads the site document from the DOM, owns theme and navigation state,
/// and lays out every section.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let SiteConfig {
		content,
		particles,
		contact,
	} = load_site_config();

	let theme = ThemeContext::new(detect_theme());
	let nav = NavigationContext::default();
	provide_context(theme);
	provide_context(nav);

	Effect::new(move |_| apply_theme(theme.mode.get()));

	let scroll_handle = window_event_listener(ev::scroll, move |_| nav.refresh());
	on_cleanup(move || scroll_handle.remove());

	let title = format!("{} | Portfolio", content.profile.name);
	let owner = content.profile.name.clone();

	view! {
		<Html attr:lang="fr" attr:dir="ltr" />
		<Title text=title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<Header owner=owner.clone() />
			<main>
				<HeroSection profile=content.profile.clone() particles=particles.field_config() />
				<AboutSection profile=content.profile.clone() languages=content.languages.clone() />
				<SkillsSection content=content.clone() />
				<ProjectsSection content=content.clone() />
				<ExperienceSection experiences=content.experiences.clone() />
				<EducationSection
					education=content.education.clone()
					certifications=content.certifications.clone()
				/>
				<ContactSection profile=content.profile.clone() endpoint=contact.endpoint />
			</main>
			<Footer owner=owner social_links=content.social_links.clone() />
			<ScrollToTop />
		</div>
	}
}
