//! Site configuration loaded from the host page.
//!
//! The page may embed a JSON document in
//! `<script id="portfolio-data" type="application/json">`. Every section is
//! optional; anything missing falls back to the built-in defaults.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::contact::DEFAULT_ENDPOINT;
use crate::components::particle_field::FieldConfig;
use crate::components::particle_field::palette::{DEFAULT_TOKENS, parse_palette};
use crate::content::Portfolio;

/// Id of the script element holding the site document.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-data";

/// Particle backdrop settings as written in the site document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleSettings {
	/// Negative values mean no particles.
	pub count: i64,
	/// Pointer influence radius.
	pub max_distance: f64,
	/// CSS hex tokens.
	pub colors: Vec<String>,
	/// Attraction strength.
	pub speed_factor: f64,
}

impl Default for ParticleSettings {
	fn default() -> Self {
		Self {
			count: 25,
			max_distance: 150.0,
			colors: DEFAULT_TOKENS.iter().map(|s| s.to_string()).collect(),
			speed_factor: 0.03,
		}
	}
}

/// Largest accepted attraction strength.
pub const MAX_SPEED_FACTOR: f64 = 1.0;
/// Largest accepted influence radius; well past the field diagonal.
pub const MAX_DISTANCE_LIMIT: f64 = 1_000.0;

/// Clamp into `[0, max]`, mapping NaN to 0.
fn clamp_setting(value: f64, max: f64) -> f64 {
	if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}

impl ParticleSettings {
	/// Clamp to a valid simulator configuration.
	pub fn field_config(&self) -> FieldConfig {
		FieldConfig {
			count: usize::try_from(self.count.max(0)).unwrap_or(0),
			max_distance: clamp_setting(self.max_distance, MAX_DISTANCE_LIMIT),
			colors: parse_palette(&self.colors),
			speed_factor: clamp_setting(self.speed_factor, MAX_SPEED_FACTOR),
		}
	}
}

/// Contact form settings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ContactSettings {
	/// Form relay URL receiving the JSON POST.
	pub endpoint: String,
}

impl Default for ContactSettings {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
		}
	}
}

/// Everything the page needs to render.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
	/// Rendered content.
	pub content: Portfolio,
	/// Hero backdrop settings.
	pub particles: ParticleSettings,
	/// Contact form settings.
	pub contact: ContactSettings,
}

impl SiteConfig {
	/// Parse a site document; missing sections take their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Read the embedded site document, or fall back to defaults.
pub fn load_site_config() -> SiteConfig {
	let Some(text) = config_text() else {
		log::info!("portfolio: no embedded site document, using built-in content");
		return SiteConfig::default();
	};

	match SiteConfig::from_json(&text) {
		Ok(config) => {
			log::info!(
				"portfolio: loaded {} projects, {} skills",
				config.content.projects.len(),
				config.content.skills.len()
			);
			config
		}
		Err(e) => {
			log::warn!("portfolio: failed to parse site document: {}", e);
			SiteConfig::default()
		}
	}
}
