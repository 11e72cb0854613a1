//! Built-in content used when the page does not embed its own document.

use super::types::{
	Certification, Education, Experience, Language, Portfolio, Profile, Project, ProjectCategory,
	Skill, SkillCategory, SocialLink,
};

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8, category: SkillCategory, details: &str) -> Skill {
	Skill {
		name: name.into(),
		level,
		category,
		icon: None,
		details: Some(details.into()),
	}
}

#[allow(clippy::too_many_arguments)]
fn project(
	id: &str,
	title: &str,
	description: &str,
	image: &str,
	technologies: &[&str],
	link: &str,
	github_link: &str,
	category: ProjectCategory,
) -> Project {
	Project {
		id: id.into(),
		title: title.into(),
		description: description.into(),
		image: Some(image.into()),
		technologies: strings(technologies),
		link: Some(link.into()),
		github_link: Some(github_link.into()),
		category,
	}
}

fn certification(id: &str, title: &str, date: &str, link: &str) -> Certification {
	Certification {
		id: id.into(),
		title: title.into(),
		issuer: "FORCE N".into(),
		date: date.into(),
		link: Some(link.into()),
	}
}

fn profile() -> Profile {
	Profile {
		name: "Serigne Moustapha Diouf".into(),
		title: "Développeur Web & Mobile".into(),
		location: "Dakar".into(),
		phone: "+221 78 165 24 92".into(),
		email: "sydioufsd710pro@gmail.com".into(),
		bio: "J'aime travailler dans des environnements dynamiques et en contact avec le public. \
		      Capable d'effectuer des tâches périodiques, je suis avide de nouvelles technologies. \
		      Passionné par le développement web et mobile, je m'efforce constamment d'améliorer \
		      mes compétences et de rester à jour avec les dernières tendances du secteur."
			.into(),
		highlights: strings(&[
			"Développeur Full Stack",
			"Concepteur d'applications mobiles",
			"Gestionnaire de projets web",
			"Passionné de nouvelles technologies",
		]),
		achievements: strings(&[
			"Sortie Major en première année de mon institut",
			"Sélectionné parmi les 5 meilleurs étudiants de l'année 2021/2022 de mon institut",
		]),
		roles: strings(&[
			"Développeur Web & Mobile",
			"Concepteur d'Applications",
			"Passionné de Technologie",
			"Full Stack Developer",
		]),
	}
}

fn skills() -> Vec<Skill> {
	use SkillCategory::*;
	vec![
		skill(
			"HTML",
			90,
			Frontend,
			"Maîtrise des structures sémantiques, formulaires, balises multimédias et des standards HTML5.",
		),
		skill(
			"CSS",
			85,
			Frontend,
			"Responsive design, Flexbox, Grid, animations et transitions CSS. Familier avec Sass et BEM.",
		),
		skill(
			"JavaScript",
			85,
			Frontend,
			"Fonctionnalités ES6+, manipulation du DOM, APIs web et programmation asynchrone.",
		),
		skill(
			"React",
			80,
			Frontend,
			"Composants fonctionnels, hooks, context API et intégration avec des APIs.",
		),
		skill(
			"Java",
			75,
			Backend,
			"Applications Spring Boot, JPA/Hibernate, services RESTful et microservices.",
		),
		skill(
			"Python",
			80,
			Backend,
			"Applications backend avec Django et Flask, analyse de données avec pandas.",
		),
		skill(
			"PHP",
			70,
			Backend,
			"Sites web dynamiques avec Laravel et WordPress, intégration MySQL.",
		),
		skill(
			"C/C++",
			65,
			Backend,
			"Programmation système, algorithmique et structures de données avancées.",
		),
		skill(
			"Git",
			75,
			Tools,
			"Gestion de versions, résolution de conflits et stratégies de branching.",
		),
		skill(
			"Gestion de Projet",
			80,
			Tools,
			"Organisation de sprints, planification agile et coordination d'équipe.",
		),
		skill(
			"Design UI/UX",
			75,
			Tools,
			"Maquettes, prototypes interactifs et conception centrée sur l'utilisateur.",
		),
		skill(
			"Communication",
			85,
			SoftSkills,
			"Communication claire avec les clients et l'équipe, vulgarisation technique.",
		),
		skill(
			"Travail d'équipe",
			90,
			SoftSkills,
			"Collaboration proactive et partage de connaissances.",
		),
		skill(
			"Autonomie",
			95,
			SoftSkills,
			"Prise d'initiative et résolution de problèmes sans supervision constante.",
		),
		skill(
			"Résolution de problèmes",
			85,
			SoftSkills,
			"Décomposition des problèmes complexes en tâches gérables.",
		),
	]
}

fn projects() -> Vec<Project> {
	use ProjectCategory::*;
	vec![
		project(
			"curi-management",
			"Application Web de gestion de l'Institut CURI",
			"Gestion complète des étudiants et de leurs documents, organisés par promotions \
			 académiques, avec gestion des utilisateurs, audit et suivi des dossiers.",
			"images/curi.jpg",
			&["HTML", "CSS", "JavaScript", "PHP"],
			"https://sy-diouf.github.io/Gestion-etudiant/",
			"https://github.com/sy-diouf/Gestion-etudiant",
			Web,
		),
		project(
			"meteo-senegal",
			"Météo Sénégal",
			"Application météorologique PWA offrant les conditions actuelles et les prévisions \
			 pour les régions du Sénégal.",
			"images/meteo.jpg",
			&["HTML", "CSS", "JavaScript", "React"],
			"https://sy-diouf.github.io/meteo-senegal/",
			"https://github.com/sy-diouf/meteo-senegal",
			Web,
		),
		project(
			"senformalites",
			"Application Mobile SenFormalités",
			"Application mobile conçue pour simplifier les démarches administratives au Sénégal.",
			"images/senformalites.jpg",
			&["TypeScript", "React Native"],
			"",
			"",
			Mobile,
		),
		project(
			"portfolio",
			"Site Web Portfolio",
			"Portfolio personnel moderne et responsive présentant compétences, projets, \
			 expériences et formations.",
			"images/portfolio.jpg",
			&["Rust", "Leptos", "WebAssembly"],
			"https://sy-diouf.github.io/mon_portfolio/",
			"https://github.com/sy-diouf/mon_portfolio",
			Web,
		),
		project(
			"quiz-senegal",
			"Quiz Sénégal",
			"Application interactive pour découvrir la culture, l'histoire et la géographie du \
			 Sénégal à travers des quiz thématiques.",
			"images/quiz.jpg",
			&["TypeScript"],
			"https://sy-diouf.github.io/quiz-senegal/",
			"https://github.com/sy-diouf/quiz-senegal",
			Web,
		),
		project(
			"pos-app",
			"Application Mobile de Caisse Enregistreuse",
			"Caisse enregistreuse (POS) pour la restauration rapide, développée avec React \
			 Native et Expo.",
			"images/caisse.jpg",
			&["React Native", "Firebase", "Expo"],
			"",
			"",
			Mobile,
		),
	]
}

fn experiences() -> Vec<Experience> {
	vec![
		Experience {
			id: "yombal".into(),
			title: "Technicien Stagiaire".into(),
			company: "YOMBAL MARKET".into(),
			location: "Sénégal".into(),
			start_date: "Septembre 2024".into(),
			end_date: "Présent".into(),
			description: strings(&[
				"Support client",
				"Gestion et mise à jour du site web",
				"Réalisation de supports",
				"Intégration web",
			]),
			technologies: strings(&["HTML", "CSS", "JavaScript", "PHP", "Photoshop"]),
		},
		Experience {
			id: "nic".into(),
			title: "Stagiaire".into(),
			company: "NIC SENEGAL".into(),
			location: "Sénégal".into(),
			start_date: "Juillet 2024".into(),
			end_date: "Août 2024".into(),
			description: strings(&[
				"Participation à la promotion du domaine .SN",
				"Implication dans les projets de gestion des noms de domaine nationaux",
			]),
			technologies: strings(&["DNS", "Web Hosting", "Domain Management"]),
		},
		Experience {
			id: "2cm".into(),
			title: "Stagiaire".into(),
			company: "2CM SARL".into(),
			location: "Sénégal".into(),
			start_date: "Juillet 2023".into(),
			end_date: "Octobre 2023".into(),
			description: strings(&[
				"Développement web",
				"Maintenance et mise à jour du site de l'entreprise",
				"Contribution aux projets web",
			]),
			technologies: strings(&["HTML", "CSS", "JavaScript", "PHP", "MySQL"]),
		},
	]
}

fn education() -> Vec<Education> {
	vec![Education {
		id: "ucad-dut".into(),
		degree: "DUT Informatique (Développement Web et Mobile)".into(),
		school: "Université Cheikh Anta Diop de Dakar".into(),
		location: "Dakar, Sénégal".into(),
		start_date: "2021".into(),
		end_date: "2023".into(),
		description: Some(
			"Formation complète en développement web et mobile: front-end, back-end, bases de \
			 données et méthodologies de conception d'applications."
				.into(),
		),
	}]
}

fn certifications() -> Vec<Certification> {
	vec![
		certification(
			"cert-marketing",
			"Marketing Digital",
			"2023",
			"/certifications/marketing-digital.pdf",
		),
		certification(
			"cert-security",
			"Cyber Sécurité",
			"2023",
			"/certifications/cyber-securite.pdf",
		),
		certification(
			"cert-frontend",
			"Développement Front-End",
			"2024",
			"/certifications/developpement-frontend.pdf",
		),
		certification(
			"cert-mobile",
			"Développement Mobile",
			"2024",
			"/certifications/developpement-mobile.pdf",
		),
		certification(
			"cert-data",
			"Traitement des données avancées",
			"2024",
			"/certifications/traitement-donnees-avancees.pdf",
		),
	]
}

fn social_links() -> Vec<SocialLink> {
	let link = |name: &str, url: &str, icon: &str| SocialLink {
		name: name.into(),
		url: url.into(),
		icon: icon.into(),
	};
	vec![
		link("Email", "mailto:sydioufsd710pro@gmail.com", "mail"),
		link("LinkedIn", "https://sn.linkedin.com/in/sy-diouf-42b197291", "linkedin"),
		link("GitHub", "https://github.com/sy-diouf", "github"),
	]
}

fn languages() -> Vec<Language> {
	[
		("Wolof", "Langue maternelle"),
		("Français", "Courant"),
		("Anglais", "Intermédiaire"),
	]
	.into_iter()
	.map(|(name, level)| Language {
		name: name.into(),
		level: level.into(),
	})
	.collect()
}

impl Default for Portfolio {
	fn default() -> Self {
		Self {
			profile: profile(),
			skills: skills(),
			projects: projects(),
			experiences: experiences(),
			education: education(),
			certifications: certifications(),
			social_links: social_links(),
			languages: languages(),
		}
	}
}
