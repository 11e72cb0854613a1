//! Contact section: owner details plus the message form.

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::form::{ContactForm, Field, FormStatus, SUBMITTED_DISPLAY_MS};
use super::relay::{FetchRelay, FormRelay};
use crate::content::Profile;

fn input_class(
	form: RwSignal<ContactForm>,
	field: Field,
) -> impl Fn() -> &'static str + Send + Sync + 'static {
	move || {
		if form.with(|f| f.errors().contains(field)) {
			"input input-error"
		} else {
			"input"
		}
	}
}

fn field_error(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
	move || {
		form.with(|f| f.errors().get(field))
			.map(|msg| view! { <p class="field-error">{msg}</p> })
	}
}

#[component]
fn TextField(
	form: RwSignal<ContactForm>,
	field: Field,
	label: &'static str,
	#[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
	view! {
		<div class="form-field">
			<label for=field.key()>{label}</label>
			<input
				id=field.key()
				name=field.key()
				type=kind
				class=input_class(form, field)
				prop:value=move || form.with(|f| f.values().get(field).to_string())
				on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
			/>
			{field_error(form, field)}
		</div>
	}
}

/// Contact details and a validated form posting to `endpoint`.
#[component]
pub fn ContactSection(profile: Profile, #[prop(into)] endpoint: String) -> impl IntoView {
	let form = RwSignal::new(ContactForm::default());
	let relay = FetchRelay::new(endpoint);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let Some(message) = form.try_update(|f| f.begin_submit()).flatten() else {
			return;
		};
		log::info!("portfolio: sending contact message to {}", relay.endpoint());

		let relay = relay.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let outcome = relay.send(&message).await;
			let sent = outcome.is_ok();
			match &outcome {
				Ok(()) => log::info!("portfolio: contact message delivered"),
				Err(e) => log::warn!("portfolio: contact message failed: {}", e),
			}

			let at = js_sys::Date::now();
			form.update(|f| f.complete(outcome, at));

			if sent {
				set_timeout(
					move || {
						let now = js_sys::Date::now().max(at + SUBMITTED_DISPLAY_MS);
						form.update(|f| f.expire(now));
					},
					Duration::from_millis(SUBMITTED_DISPLAY_MS as u64),
				);
			}
		});
	};

	let banner = move || {
		form.with(|f| match f.status() {
			FormStatus::Submitted { .. } => Some(view! {
				<div class="banner banner-success">
					"Message envoyé ! Je vous répondrai dans les plus brefs délais."
				</div>
			}
			.into_any()),
			FormStatus::Failed(err) => Some(view! {
				<div class="banner banner-error">{err.user_message()}</div>
			}
			.into_any()),
			FormStatus::Idle | FormStatus::Submitting => None,
		})
	};

	let submitting = move || form.with(ContactForm::is_submitting);

	view! {
		<section id="contact" class="section section-alt">
			<div class="container">
				<h2 class="section-title">"Contactez-moi"</h2>
				<div class="contact-grid">
					<div class="contact-info">
						<p>
							<span class="label">"Email"</span>
							<a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
						</p>
						<p>
							<span class="label">"Téléphone"</span>
							<a href=format!("tel:{}", profile.phone.replace(' ', ""))>
								{profile.phone.clone()}
							</a>
						</p>
						<p>
							<span class="label">"Localisation"</span>
							{profile.location.clone()}
						</p>
					</div>

					<form class="contact-form" novalidate=true on:submit=on_submit>
						{banner}
						<TextField form=form field=Field::Name label="Nom" />
						<TextField form=form field=Field::Email label="Email" kind="email" />
						<TextField form=form field=Field::Subject label="Sujet" />
						<div class="form-field">
							<label for=Field::Message.key()>"Message"</label>
							<textarea
								id=Field::Message.key()
								name=Field::Message.key()
								rows="5"
								class=input_class(form, Field::Message)
								prop:value=move || {
									form.with(|f| f.values().get(Field::Message).to_string())
								}
								on:input=move |ev| {
									form.update(|f| f.set(Field::Message, event_target_value(&ev)))
								}
							></textarea>
							{field_error(form, Field::Message)}
						</div>
						<button type="submit" class="btn btn-primary" disabled=submitting>
							{move || if submitting() { "Envoi en cours..." } else { "Envoyer le message" }}
						</button>
					</form>
				</div>
			</div>
		</section>
	}
}
