use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Static page content. This is presentation data, not interactive state:
/// it is loaded once and never mutated while the viewer runs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: Vec<String>,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    /// Downloadable resume, surfaced as a path in the hero section
    #[serde(default)]
    pub resume: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Skills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Live demo URL
    #[serde(default)]
    pub link: Option<String>,
    /// Repository URL
    #[serde(default)]
    pub github: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl PortfolioContent {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content profile {}", path.display()))?;
        let content: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse content profile {}", path.display()))?;
        Ok(content)
    }
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Sam Okafor".to_string(),
                headline: "Full Stack Developer".to_string(),
                tagline: "I build dynamic, responsive web applications, from front-end \
                          interfaces to robust back-end systems and database management."
                    .to_string(),
                about: vec![
                    "Hello! I'm Sam, a full-stack developer with three years of hands-on \
                     experience building web applications. I work across the entire stack, \
                     from PHP and Laravel back ends to React and Node.js front ends."
                        .to_string(),
                    "My tech journey began in my first year on campus when I built my first \
                     website, and I've been hooked since. Formal studies in Information \
                     Technology and a string of freelance projects sharpened both my \
                     frontend and backend skills."
                        .to_string(),
                    "I'm currently looking for challenging projects that fuel my growth as \
                     a developer and let me deliver user-focused solutions."
                        .to_string(),
                ],
                email: "sam@okafor.dev".to_string(),
                phone: "+254 700 123 456".to_string(),
                location: "Mombasa, Kenya".to_string(),
                resume: Some("assets/resume.pdf".to_string()),
            },
            skills: Skills {
                technical: vec![
                    "JavaScript".to_string(),
                    "TypeScript".to_string(),
                    "React".to_string(),
                    "Node.js".to_string(),
                    "HTML/CSS".to_string(),
                    "Git".to_string(),
                    "PHP".to_string(),
                    "MySQL".to_string(),
                ],
                soft: vec![
                    "Problem Solving".to_string(),
                    "Teamwork".to_string(),
                    "Communication".to_string(),
                    "Time Management".to_string(),
                ],
            },
            projects: vec![
                Project {
                    name: "E-Learning Platform".to_string(),
                    description: "A full-stack e-learning platform with student \
                                  authentication, a project showcase page, and a chat \
                                  platform for Q&A."
                        .to_string(),
                    technologies: vec![
                        "PHP".to_string(),
                        "Laravel".to_string(),
                        "MySQL".to_string(),
                        "Bootstrap".to_string(),
                    ],
                    link: None,
                    github: Some("https://github.com/samokafor/elearning".to_string()),
                },
                Project {
                    name: "Task Management Website".to_string(),
                    description: "A productivity website for managing student tasks and \
                                  projects at an affordable price."
                        .to_string(),
                    technologies: vec![
                        "PHP".to_string(),
                        "Bootstrap".to_string(),
                        "MySQL".to_string(),
                        "Laravel".to_string(),
                    ],
                    link: Some("https://taskapp.example.com".to_string()),
                    github: Some("https://github.com/samokafor/taskapp".to_string()),
                },
            ],
            education: vec![
                Education {
                    institution: "Technical University of Mombasa".to_string(),
                    degree: "Bachelor of Technology".to_string(),
                    field: "Information Technology".to_string(),
                    year: "2025".to_string(),
                },
                Education {
                    institution: "Alison College".to_string(),
                    degree: "Dynamics of Information".to_string(),
                    field: "Security Management Systems".to_string(),
                    year: "2025".to_string(),
                },
                Education {
                    institution: "Code Academy".to_string(),
                    degree: "Certification".to_string(),
                    field: "Full Stack Web Development".to_string(),
                    year: "2022".to_string(),
                },
                Education {
                    institution: "Alison College".to_string(),
                    degree: "Diploma".to_string(),
                    field: "Ethical Hacking".to_string(),
                    year: "2025".to_string(),
                },
            ],
            socials: vec![
                SocialLink {
                    label: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/samokafor".to_string(),
                },
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/samokafor".to_string(),
                },
                SocialLink {
                    label: "Twitter".to_string(),
                    url: "https://x.com/samokafor".to_string(),
                },
                SocialLink {
                    label: "WhatsApp".to_string(),
                    url: "https://wa.me/254700123456".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_populated() {
        let content = PortfolioContent::default();
        assert!(!content.profile.name.is_empty());
        assert_eq!(content.projects.len(), 2);
        assert_eq!(content.education.len(), 4);
        assert_eq!(content.skills.technical.len(), 8);
        assert_eq!(content.skills.soft.len(), 4);
        assert_eq!(content.socials.len(), 4);
    }

    #[test]
    fn content_loads_from_profile_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("me.toml");
        std::fs::write(
            &path,
            r#"
[profile]
name = "Ada"
headline = "Systems Engineer"
email = "ada@example.com"

[[projects]]
name = "Analytical Engine"
description = "Mechanical general-purpose computer."
technologies = ["brass"]
"#,
        )
        .unwrap();

        let content = PortfolioContent::load(&path).unwrap();
        assert_eq!(content.profile.name, "Ada");
        assert_eq!(content.projects.len(), 1);
        assert!(content.projects[0].github.is_none());
        assert!(content.education.is_empty());
    }

    #[test]
    fn malformed_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "profile = 12").unwrap();
        assert!(PortfolioContent::load(&path).is_err());
    }
}
