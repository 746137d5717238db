use yougo_core::types::TermRecord;

/// Immutable set of glossary records, populated once at startup and never
/// mutated afterwards.
pub struct GlossaryStore {
    records: Vec<TermRecord>,
}

impl GlossaryStore {
    pub fn new(records: Vec<TermRecord>) -> Self {
        Self { records }
    }

    /// Empty store, the fallback after a failed load. Browsing still works,
    /// it just matches nothing.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TermRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unique badge labels in first-seen order. Drives the home screen's
    /// category cards.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.records {
            for label in record.badges() {
                if !seen.contains(&label) {
                    seen.push(label);
                }
            }
        }
        seen
    }
}
