use serde::{Deserialize, Serialize};

/// One entry of the portfolio (a role, a project, a chapter).
/// `body` is the markup string the reveal engine plays back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub slug: String,
    pub title: String,
    pub body: String,
}

/// Ordered, slug-addressable collection of sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dossier {
    sections: Vec<Section>,
}

impl Dossier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn get(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// The section auto-played when the experience opens.
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    pub fn slugs(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.slug.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
