use serde::Deserialize;

/// One glossary entry as it appears in the data source. Every string field
/// defaults to empty so a sparse or malformed record degrades instead of
/// failing the whole load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TermRecord {
    /// Display name
    pub term: String,
    /// Phonetic/alternate rendering
    pub reading: String,
    pub description: String,
    /// Free-text search keywords, not displayed
    pub keywords: String,
    /// Preferred grouping labels
    pub tags: Option<Vec<String>>,
    /// Legacy single-category field, consulted only when `tags` is absent
    pub category: Option<String>,
}

impl TermRecord {
    /// Labels shown as badges: tags when present, else the legacy category.
    pub fn badges(&self) -> Vec<String> {
        match (&self.tags, &self.category) {
            (Some(tags), _) if !tags.is_empty() => tags.clone(),
            (_, Some(category)) => vec![category.clone()],
            _ => Vec::new(),
        }
    }
}
