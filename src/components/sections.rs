//! Content sections of the page, top to bottom.

use leptos::prelude::*;

use super::particle_field::{FieldConfig, InteractiveParticles};
use super::typewriter::{TYPE_DELAY, Typewriter, run_typewriter};
use crate::content::{
	Certification, Education, Experience, Language, Portfolio, Profile, Project, ProjectFilter,
	Skill, SkillFilter,
};

fn tags(items: Vec<String>) -> impl IntoView {
	view! {
		<ul class="tags">
			{items.into_iter().map(|t| view! { <li class="tag">{t}</li> }).collect_view()}
		</ul>
	}
}

/// Landing section over the particle backdrop.
#[component]
pub fn HeroSection(profile: Profile, particles: FieldConfig) -> impl IntoView {
	let roles = if profile.roles.is_empty() {
		vec![profile.title.clone()]
	} else {
		profile.roles.clone()
	};
	let caption = RwSignal::new(Typewriter::new(roles));
	run_typewriter(caption, TYPE_DELAY);
	let subtitle = move || caption.with(|t| t.text().to_string());

	view! {
		<section id="home" class="section hero">
			<InteractiveParticles config=particles />
			<div class="container hero-content">
				<p class="eyebrow">"Bonjour, je suis"</p>
				<h1 class="hero-title">{profile.name}</h1>
				<p class="hero-subtitle">
					<span class="typed">{subtitle}</span>
					<span class="cursor">"|"</span>
				</p>
				<div class="hero-actions">
					<a href="#projects" class="btn btn-primary">"Voir mes projets"</a>
					<a href="#contact" class="btn btn-outline">"Me contacter"</a>
				</div>
			</div>
		</section>
	}
}

/// Bio, highlights, achievements and spoken languages.
#[component]
pub fn AboutSection(profile: Profile, languages: Vec<Language>) -> impl IntoView {
	view! {
		<section id="about" class="section">
			<div class="container">
				<h2 class="section-title">"À propos de moi"</h2>
				<p class="bio">{profile.bio}</p>
				<div class="about-grid">
					<div>
						<h3>"Points forts"</h3>
						<ul class="checklist">
							{profile
								.highlights
								.into_iter()
								.map(|h| view! { <li>{h}</li> })
								.collect_view()}
						</ul>
					</div>
					<div>
						<h3>"Réalisations"</h3>
						<ul class="checklist">
							{profile
								.achievements
								.into_iter()
								.map(|a| view! { <li>{a}</li> })
								.collect_view()}
						</ul>
					</div>
					<div>
						<h3>"Langues"</h3>
						<ul class="languages">
							{languages
								.into_iter()
								.map(|l| {
									view! {
										<li>
											<span class="language-name">{l.name}</span>
											<span class="language-level">{l.level}</span>
										</li>
									}
								})
								.collect_view()}
						</ul>
					</div>
				</div>
			</div>
		</section>
	}
}

fn skill_card(skill: &Skill) -> impl IntoView + use<> {
	let flipped = RwSignal::new(false);
	let width = format!("width: {}%;", skill.percent());
	let details = skill.details.clone().unwrap_or_default();

	view! {
		<div
			class=move || if flipped.get() { "skill-card flipped" } else { "skill-card" }
			on:click=move |_| flipped.update(|f| *f = !*f)
		>
			<div class="skill-front">
				<div class="skill-header">
					<span>{skill.name.clone()}</span>
					<span>{format!("{}%", skill.percent())}</span>
				</div>
				<div class="skill-bar">
					<div class="skill-bar-fill" style=width></div>
				</div>
			</div>
			<div class="skill-back">
				<p>{details}</p>
			</div>
		</div>
	}
}

/// Skill cards behind category tabs.
#[component]
pub fn SkillsSection(content: Portfolio) -> impl IntoView {
	let filter = RwSignal::new(SkillFilter::All);
	let filters = content.skill_filters();
	let content = StoredValue::new(content);

	let visible = move || {
		let current = filter.get();
		content.with_value(|c| c.skills_matching(current).map(skill_card).collect_view())
	};

	view! {
		<section id="skills" class="section section-alt">
			<div class="container">
				<h2 class="section-title">"Compétences"</h2>
				<div class="filter-bar">
					{filters
						.into_iter()
						.map(|f| {
							view! {
								<button
									class=move || {
										if filter.get() == f { "filter-button active" } else { "filter-button" }
									}
									on:click=move |_| filter.set(f)
								>
									{f.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
				<div class="skill-grid">{visible}</div>
			</div>
		</section>
	}
}

fn project_card(project: Project) -> impl IntoView {
	let demo = project.demo_link().map(|href| {
		let href = href.to_string();
		view! { <a href=href target="_blank" rel="noopener noreferrer">"Démo"</a> }
	});
	let source = project.source_link().map(|href| {
		let href = href.to_string();
		view! { <a href=href target="_blank" rel="noopener noreferrer">"Code"</a> }
	});
	let image = project.image.clone().map(|src| {
		let alt = project.title.clone();
		view! { <img src=src alt=alt loading="lazy" /> }
	});

	view! {
		<article class="project-card">
			<div class="project-image">{image}</div>
			<div class="project-body">
				<span class="project-category">{project.category.label()}</span>
				<h3>{project.title}</h3>
				<p>{project.description}</p>
				{tags(project.technologies)}
				<div class="project-links">{demo} {source}</div>
			</div>
		</article>
	}
}

/// Project cards behind category tabs.
#[component]
pub fn ProjectsSection(content: Portfolio) -> impl IntoView {
	let filter = RwSignal::new(ProjectFilter::All);
	let filters = content.project_filters();
	let content = StoredValue::new(content);

	let visible = move || {
		let current = filter.get();
		content.with_value(|c| {
			c.projects_matching(current)
				.cloned()
				.map(project_card)
				.collect_view()
		})
	};

	view! {
		<section id="projects" class="section">
			<div class="container">
				<h2 class="section-title">"Mes Projets"</h2>
				<div class="filter-bar">
					{filters
						.into_iter()
						.map(|f| {
							view! {
								<button
									class=move || {
										if filter.get() == f { "filter-button active" } else { "filter-button" }
									}
									on:click=move |_| filter.set(f)
								>
									{f.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
				<div class="project-grid">{visible}</div>
			</div>
		</section>
	}
}

fn experience_entry(exp: Experience) -> impl IntoView {
	view! {
		<li class="timeline-entry">
			<div class="timeline-meta">
				<span class="dates">{format!("{} - {}", exp.start_date, exp.end_date)}</span>
				<span class="location">{exp.location}</span>
			</div>
			<h3>{exp.title}</h3>
			<p class="company">{exp.company}</p>
			<ul class="duties">
				{exp.description.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
			</ul>
			{tags(exp.technologies)}
		</li>
	}
}

/// Work history timeline.
#[component]
pub fn ExperienceSection(experiences: Vec<Experience>) -> impl IntoView {
	view! {
		<section id="experience" class="section section-alt">
			<div class="container">
				<h2 class="section-title">"Expérience Professionnelle"</h2>
				<ol class="timeline">
					{experiences.into_iter().map(experience_entry).collect_view()}
				</ol>
			</div>
		</section>
	}
}

fn certification_item(cert: Certification) -> impl IntoView {
	let title = match cert.link() {
		Some(href) => {
			let href = href.to_string();
			view! { <a href=href target="_blank">{cert.title.clone()}</a> }.into_any()
		}
		None => view! { <span>{cert.title.clone()}</span> }.into_any(),
	};
	view! {
		<li class="certification">
			{title}
			<span class="issuer">{format!("{} · {}", cert.issuer, cert.date)}</span>
		</li>
	}
}

/// Degrees timeline followed by certifications.
#[component]
pub fn EducationSection(
	education: Vec<Education>,
	certifications: Vec<Certification>,
) -> impl IntoView {
	view! {
		<section id="education" class="section">
			<div class="container">
				<h2 class="section-title">"Formation"</h2>
				<ol class="timeline">
					{education
						.into_iter()
						.map(|e| {
							view! {
								<li class="timeline-entry">
									<div class="timeline-meta">
										<span class="dates">
											{format!("{} - {}", e.start_date, e.end_date)}
										</span>
										<span class="location">{e.location}</span>
									</div>
									<h3>{e.degree}</h3>
									<p class="school">{e.school}</p>
									{e.description.map(|d| view! { <p>{d}</p> })}
								</li>
							}
						})
						.collect_view()}
				</ol>
				<h3 class="subsection-title">"Certifications"</h3>
				<ul class="certifications">
					{certifications.into_iter().map(certification_item).collect_view()}
				</ul>
			</div>
		</section>
	}
}
