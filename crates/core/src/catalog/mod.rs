use serde::{Deserialize, Serialize};

use crate::{Result, ShowcaseError};

/// Immutable content record for one project panel.
///
/// `github` and `live` are optional; a missing link means the matching
/// action button is omitted from render, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: usize,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    pub year: String,
    pub category: String,
}

/// Fixed set of project records backing the carousel panels.
///
/// Validation enforces the one structural invariant the carousel relies on:
/// ids are exactly `0..N-1` in order, so a panel index doubles as a record
/// lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Builds a catalog from records, validating the id invariant.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        let catalog = Self { projects };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serializes the catalog as a JSON array of records, the same shape
    /// [`Self::from_json`] accepts.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProjectRecord> {
        self.projects.get(index)
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.projects
    }

    fn validate(&self) -> Result<()> {
        if self.projects.is_empty() {
            return Err(ShowcaseError::InvalidInput(
                "catalog requires at least one project",
            ));
        }

        for (index, record) in self.projects.iter().enumerate() {
            if record.id != index {
                return Err(ShowcaseError::msg(format!(
                    "project `{}` has id {} but sits at position {index}",
                    record.title, record.id
                )));
            }
        }

        Ok(())
    }

    /// The built-in portfolio content shown when no external catalog is
    /// supplied.
    pub fn builtin() -> Self {
        let record = |id: usize,
                      title: &str,
                      subtitle: &str,
                      description: &str,
                      image: &str,
                      tech: &[&str],
                      github: Option<&str>,
                      live: Option<&str>,
                      year: &str,
                      category: &str| ProjectRecord {
            id,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            github: github.map(str::to_string),
            live: live.map(str::to_string),
            year: year.to_string(),
            category: category.to_string(),
        };

        Self {
            projects: vec![
                record(
                    0,
                    "LEBWORK",
                    "Next-Gen Freelancing",
                    "Empowering businesses and freelancers to collaborate effortlessly \
                     with intuitive project management, secure payments, real-time \
                     communication, and AI-powered insights.",
                    "https://lebwork.b-cdn.net/stuff/f62008a8edae4c43ba4e6957d8a05e78.png",
                    &["React", "Flask", "PostgreSQL", "Whish Money"],
                    Some("https://github.com/Mahmoud-ctrl/Lebwork"),
                    Some("https://lebwork.net"),
                    "2025",
                    "Freelance Marketplace",
                ),
                record(
                    1,
                    "XSignals AI",
                    "Crypto Innovation",
                    "Next-generation trading intelligence that transforms market \
                     complexity into precise, AI-powered signals.",
                    "https://lebwork.b-cdn.net/stuff/1440x0.jpg",
                    &["React", "Python", "Blockchain", "AI"],
                    Some("https://github.com/Mahmoud-ctrl/XSignalsAI"),
                    Some("https://xsignalsai.com"),
                    "2024",
                    "Crypto/AI",
                ),
                record(
                    2,
                    "E-STORE",
                    "Tech Commerce Platform",
                    "Modern e-commerce platform with dynamic product catalogs, advanced \
                     search, and a streamlined inquiry system connecting customers with \
                     sales teams.",
                    "https://lebwork.b-cdn.net/stuff/images_PC%20System.jpg",
                    &["React", "Flask", "PostgreSQL", "WhatsApp API"],
                    Some("https://github.com/Mahmoud-ctrl/SmartTech"),
                    Some("https://aidibysmartech.com"),
                    "2024",
                    "E-Commerce",
                ),
                record(
                    3,
                    "Booknest",
                    "Smarter Appointments, Healthier Smiles",
                    "A powerful, intuitive system that transforms complex dental \
                     scheduling into seamless, efficient appointments.",
                    "https://lebwork.b-cdn.net/stuff/istockphoto-1152845300-2048x2048.jpg",
                    &["React", "Tailwind CSS", "Netlify"],
                    Some("https://github.com/Mahmoud-ctrl/Booknest"),
                    Some("https://preeminent-kashata-bc8bb1.netlify.app/"),
                    "2024",
                    "Appointment Booking",
                ),
            ],
        }
    }
}
