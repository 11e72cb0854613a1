//! Portfolio content records.
//!
//! Everything here is plain data deserialized from the embedded site
//! document. Optional text fields tolerate being absent or empty.

use serde::Deserialize;

/// Grouping used by the skills section.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
	/// Browser-side technologies.
	Frontend,
	/// Server-side technologies.
	Backend,
	/// Tooling and platforms.
	Tools,
	/// Interpersonal skills.
	SoftSkills,
}

impl SkillCategory {
	/// Every category in display order.
	pub const ALL: [SkillCategory; 4] = [
		SkillCategory::Frontend,
		SkillCategory::Backend,
		SkillCategory::Tools,
		SkillCategory::SoftSkills,
	];

	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			SkillCategory::Frontend => "Frontend",
			SkillCategory::Backend => "Backend",
			SkillCategory::Tools => "Outils",
			SkillCategory::SoftSkills => "Soft Skills",
		}
	}
}

/// Which skills the skills section shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFilter {
	/// Every skill.
	#[default]
	All,
	/// Skills of one category.
	Category(SkillCategory),
}

impl SkillFilter {
	/// Whether `skill` passes this filter.
	pub fn matches(self, skill: &Skill) -> bool {
		match self {
			SkillFilter::All => true,
			SkillFilter::Category(c) => skill.category == c,
		}
	}

	/// Tab caption.
	pub fn label(self) -> &'static str {
		match self {
			SkillFilter::All => "Toutes",
			SkillFilter::Category(c) => c.label(),
		}
	}
}

/// A single skill with a self-assessed level.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Skill {
	/// Display name.
	pub name: String,
	/// Proficiency from 0 to 100.
	pub level: u8,
	/// Group the skill belongs to.
	pub category: SkillCategory,
	/// Icon name, if any.
	#[serde(default)]
	pub icon: Option<String>,
	/// Longer description shown on the back of the card.
	#[serde(default)]
	pub details: Option<String>,
}

impl Skill {
	/// Level clamped to a percentage, for bar widths.
	pub fn percent(&self) -> u8 {
		self.level.min(100)
	}
}

/// Kind of project, used by the filter tabs.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ProjectCategory {
	/// Web application or site.
	Web,
	/// Mobile application.
	Mobile,
	/// Visual design work.
	Design,
	/// Anything else.
	Other,
}

impl ProjectCategory {
	/// Display name.
	pub fn label(self) -> &'static str {
		match self {
			ProjectCategory::Web => "Web",
			ProjectCategory::Mobile => "Mobile",
			ProjectCategory::Design => "Design",
			ProjectCategory::Other => "Autre",
		}
	}
}

/// Which projects the projects section shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
	/// Every project.
	#[default]
	All,
	/// Projects of one category.
	Category(ProjectCategory),
}

impl ProjectFilter {
	/// Whether `project` passes this filter.
	pub fn matches(self, project: &Project) -> bool {
		match self {
			ProjectFilter::All => true,
			ProjectFilter::Category(c) => project.category == c,
		}
	}

	/// Tab caption.
	pub fn label(self) -> &'static str {
		match self {
			ProjectFilter::All => "Tous",
			ProjectFilter::Category(c) => c.label(),
		}
	}
}

/// A showcased project.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
	/// Unique key.
	pub id: String,
	/// Card heading.
	pub title: String,
	/// Card body.
	pub description: String,
	/// Screenshot URL.
	#[serde(default)]
	pub image: Option<String>,
	/// Stack tags.
	#[serde(default)]
	pub technologies: Vec<String>,
	/// Live demo URL.
	#[serde(default)]
	pub link: Option<String>,
	/// Source repository URL.
	#[serde(default)]
	pub github_link: Option<String>,
	/// Group used by the filter tabs.
	pub category: ProjectCategory,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Project {
	/// Demo URL, ignoring empty values.
	pub fn demo_link(&self) -> Option<&str> {
		non_empty(&self.link)
	}

	/// Repository URL, ignoring empty values.
	pub fn source_link(&self) -> Option<&str> {
		non_empty(&self.github_link)
	}
}

/// A past or current position.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
	/// Unique key.
	pub id: String,
	/// Job title.
	pub title: String,
	/// Employer.
	pub company: String,
	/// City.
	pub location: String,
	/// Free-form start date.
	pub start_date: String,
	/// Free-form end date, e.g. `Présent`.
	pub end_date: String,
	/// Duties, one per bullet.
	#[serde(default)]
	pub description: Vec<String>,
	/// Stack tags.
	#[serde(default)]
	pub technologies: Vec<String>,
}

/// A degree or program.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
	/// Unique key.
	pub id: String,
	/// Degree or program.
	pub degree: String,
	/// Institution.
	pub school: String,
	/// City.
	pub location: String,
	/// Free-form start date.
	pub start_date: String,
	/// Free-form end date.
	pub end_date: String,
	/// Optional summary.
	#[serde(default)]
	pub description: Option<String>,
}

/// A certificate with optional verification link.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Certification {
	/// Unique key.
	pub id: String,
	/// Certificate name.
	pub title: String,
	/// Issuing organization.
	pub issuer: String,
	/// Free-form award date.
	pub date: String,
	/// Verification URL.
	#[serde(default)]
	pub link: Option<String>,
}

impl Certification {
	/// Verification URL, ignoring empty values.
	pub fn link(&self) -> Option<&str> {
		non_empty(&self.link)
	}
}

/// Outbound profile link (mail, LinkedIn, GitHub...).
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
	/// Shown as the link title.
	pub name: String,
	/// Target URL.
	pub url: String,
	/// Icon name, e.g. `"github"`.
	pub icon: String,
}

/// Spoken language and fluency.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Language {
	/// Language name.
	pub name: String,
	/// Fluency, free-form.
	pub level: String,
}

/// Who the site is about.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	/// Full name.
	pub name: String,
	/// Headline shown when no roles are set.
	pub title: String,
	/// City.
	pub location: String,
	/// Phone number as displayed.
	pub phone: String,
	/// Contact address.
	pub email: String,
	/// About-section paragraph.
	pub bio: String,
	/// Short strengths list.
	pub highlights: Vec<String>,
	/// Notable results.
	pub achievements: Vec<String>,
	/// Titles cycled by the hero typewriter.
	pub roles: Vec<String>,
}

/// All content rendered by the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Portfolio {
	/// Owner details.
	pub profile: Profile,
	/// Skills in display order.
	pub skills: Vec<Skill>,
	/// Projects in display order.
	pub projects: Vec<Project>,
	/// Work history, most recent first.
	pub experiences: Vec<Experience>,
	/// Degrees, most recent first.
	pub education: Vec<Education>,
	/// Certificates, most recent first.
	pub certifications: Vec<Certification>,
	/// Footer links.
	pub social_links: Vec<SocialLink>,
	/// Spoken languages.
	pub languages: Vec<Language>,
}

impl Portfolio {
	/// Skills of one category in declaration order.
	pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &Skill> {
		self.skills.iter().filter(move |s| s.category == category)
	}

	/// Skills passing `filter` in declaration order.
	pub fn skills_matching(&self, filter: SkillFilter) -> impl Iterator<Item = &Skill> {
		self.skills.iter().filter(move |s| filter.matches(s))
	}

	/// Skill tabs: `All` plus every category, in fixed order, that has skills.
	pub fn skill_filters(&self) -> Vec<SkillFilter> {
		std::iter::once(SkillFilter::All)
			.chain(
				SkillCategory::ALL
					.into_iter()
					.filter(|&c| self.skills_in(c).next().is_some())
					.map(SkillFilter::Category),
			)
			.collect()
	}

	/// Projects passing `filter` in declaration order.
	pub fn projects_matching(&self, filter: ProjectFilter) -> impl Iterator<Item = &Project> {
		self.projects.iter().filter(move |p| filter.matches(p))
	}

	/// Project filters worth offering: `All` plus every category in use.
	pub fn project_filters(&self) -> Vec<ProjectFilter> {
		let mut filters = vec![ProjectFilter::All];
		for project in &self.projects {
			let filter = ProjectFilter::Category(project.category);
			if !filters.contains(&filter) {
				filters.push(filter);
			}
		}
		filters
	}
}
