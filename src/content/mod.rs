//! Static portfolio content.
//!
//! Typed records for skills, projects, experience, education, certifications
//! and social links, with the owner's data built in as the default.

mod defaults;
mod types;

pub use types::{
	Certification, Education, Experience, Language, Portfolio, Profile, Project, ProjectCategory,
	ProjectFilter, Skill, SkillCategory, SkillFilter, SocialLink,
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_content_is_populated() {
		let p = Portfolio::default();
		assert!(!p.profile.name.is_empty());
		assert!(!p.skills.is_empty());
		assert!(!p.projects.is_empty());
		assert!(!p.experiences.is_empty());
		assert!(!p.education.is_empty());
		assert!(!p.social_links.is_empty());
		assert!(p.skills.iter().all(|s| s.level <= 100));
	}

	#[test]
	fn project_ids_are_unique() {
		let p = Portfolio::default();
		let mut ids: Vec<&str> = p.projects.iter().map(|p| p.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), p.projects.len());
	}

	#[test]
	fn skills_grouped_in_order() {
		let p = Portfolio::default();
		let frontend: Vec<&str> = p
			.skills_in(SkillCategory::Frontend)
			.map(|s| s.name.as_str())
			.collect();
		assert_eq!(frontend, ["HTML", "CSS", "JavaScript", "React"]);

		let total: usize = SkillCategory::ALL.iter().map(|&c| p.skills_in(c).count()).sum();
		assert_eq!(total, p.skills.len());
	}

	#[test]
	fn skill_tabs_filter_by_category() {
		let p = Portfolio::default();
		assert_eq!(
			p.skill_filters(),
			vec![
				SkillFilter::All,
				SkillFilter::Category(SkillCategory::Frontend),
				SkillFilter::Category(SkillCategory::Backend),
				SkillFilter::Category(SkillCategory::Tools),
				SkillFilter::Category(SkillCategory::SoftSkills),
			]
		);
		assert_eq!(p.skills_matching(SkillFilter::All).count(), p.skills.len());
		assert!(
			p.skills_matching(SkillFilter::Category(SkillCategory::Tools))
				.all(|s| s.category == SkillCategory::Tools)
		);

		let only_tools = Portfolio {
			skills: p.skills_in(SkillCategory::Tools).cloned().collect(),
			..Portfolio::default()
		};
		assert_eq!(
			only_tools.skill_filters(),
			vec![SkillFilter::All, SkillFilter::Category(SkillCategory::Tools)]
		);
	}

	#[test]
	fn project_filtering() {
		let p = Portfolio::default();
		assert_eq!(p.projects_matching(ProjectFilter::All).count(), p.projects.len());
		assert!(
			p.projects_matching(ProjectFilter::Category(ProjectCategory::Mobile))
				.all(|pr| pr.category == ProjectCategory::Mobile)
		);
		assert_eq!(
			p.projects_matching(ProjectFilter::Category(ProjectCategory::Design))
				.count(),
			0
		);
	}

	#[test]
	fn filters_cover_used_categories_only() {
		let filters = Portfolio::default().project_filters();
		assert_eq!(
			filters,
			vec![
				ProjectFilter::All,
				ProjectFilter::Category(ProjectCategory::Web),
				ProjectFilter::Category(ProjectCategory::Mobile),
			]
		);
	}

	#[test]
	fn empty_links_are_absent() {
		let p = Portfolio::default();
		let mobile = p
			.projects
			.iter()
			.find(|pr| pr.category == ProjectCategory::Mobile)
			.unwrap();
		assert_eq!(mobile.demo_link(), None);
		assert_eq!(mobile.source_link(), None);

		let web = &p.projects[0];
		assert!(web.demo_link().is_some());
	}

	#[test]
	fn deserializes_camel_case_records() {
		let json = r#"{
			"id": "x",
			"title": "X",
			"description": "d",
			"technologies": ["Rust"],
			"githubLink": "https://example.org/x",
			"category": "web"
		}"#;
		let project: Project = serde_json::from_str(json).unwrap();
		assert_eq!(project.source_link(), Some("https://example.org/x"));
		assert_eq!(project.demo_link(), None);

		let skill: Skill =
			serde_json::from_str(r#"{"name":"Rust","level":70,"category":"softSkills"}"#).unwrap();
		assert_eq!(skill.category, SkillCategory::SoftSkills);
	}
}
