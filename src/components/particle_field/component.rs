//! Leptos component driving the particle field.
//!
//! Particles are drawn as retained, absolutely positioned `div`s inside a
//! container that covers its parent. A fixed-period interval advances the
//! simulation; window-level mouse listeners feed the pointer state. Both are
//! released when the component is unmounted.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use web_sys::MouseEvent;

use super::field::{FieldConfig, ParticleField, ParticleSnapshot};
use super::pointer::Bounds;

/// Nominal tick period (~60 updates per second).
pub const TICK_PERIOD: Duration = Duration::from_millis(16);

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Renders an interactive particle backdrop.
///
/// The container fills its positioned parent and ignores pointer events so
/// content underneath stays clickable. Pointer tracking listens on the window
/// and converts client coordinates relative to this container.
#[component]
pub fn InteractiveParticles(
	#[prop(into)] config: FieldConfig,
	#[prop(optional, into)] class: String,
	#[prop(optional)] seed: Option<u64>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();

	let mut rng = SmallRng::seed_from_u64(seed.unwrap_or_else(random_seed));
	let field = Rc::new(RefCell::new(ParticleField::new(config, &mut rng)));
	let count = field.borrow().len();
	let frame = RwSignal::new(field.borrow().frame());

	log::debug!("portfolio: particle field started with {} particles", count);

	let bounds = move || {
		container_ref.get_untracked().and_then(|el| {
			let bounds = Bounds::from_rect(&el.get_bounding_client_rect());
			(bounds.width > 0.0 && bounds.height > 0.0).then_some(bounds)
		})
	};

	let field_move = field.clone();
	let move_handle = window_event_listener(ev::mousemove, move |ev: MouseEvent| {
		field_move.borrow_mut().pointer_mut().track(
			bounds(),
			ev.client_x() as f64,
			ev.client_y() as f64,
		);
	});

	// The pointer leaving the document shows up as a mouseout with no
	// related target.
	let field_out = field.clone();
	let out_handle = window_event_listener(ev::mouseout, move |ev: MouseEvent| {
		if ev.related_target().is_none() {
			field_out.borrow_mut().pointer_mut().clear();
		}
	});

	let field_tick = field.clone();
	let interval = if count > 0 {
		set_interval_with_handle(
			move || {
				let mut f = field_tick.borrow_mut();
				f.tick();
				frame.set(f.frame());
			},
			TICK_PERIOD,
		)
		.map_err(|e| log::warn!("portfolio: failed to start particle timer: {:?}", e))
		.ok()
	} else {
		None
	};

	on_cleanup(move || {
		if let Some(handle) = interval {
			handle.clear();
		}
		move_handle.remove();
		out_handle.remove();
		log::debug!("portfolio: particle field stopped");
	});

	let particle_style = move |i: usize| {
		frame.with(|f| f.get(i).map(ParticleSnapshot::css).unwrap_or_default())
	};

	view! {
		<div
			node_ref=container_ref
			class=format!("particles-container {}", class)
			style="position: absolute; inset: 0; overflow: hidden; pointer-events: none; max-width: 100vw;"
		>
			{(0..count)
				.map(|i| {
					view! {
						<div
							class="particle"
							style=move || {
								format!(
									"position: absolute; border-radius: 9999px; filter: blur(1px); transition: left 0.5s linear, top 0.5s linear; {}",
									particle_style(i),
								)
							}
						/>
					}
				})
				.collect_view()}
		</div>
	}
}
