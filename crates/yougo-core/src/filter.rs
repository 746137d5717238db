use crate::types::TermRecord;

/// Sentinel category meaning "no category restriction".
pub const CATEGORY_ALL: &str = "all";

/// Current search inputs. Owned by the view controller; the query is kept
/// verbatim and only normalized at comparison time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CATEGORY_ALL.to_string(),
        }
    }
}

/// Stable filter over the loaded records: a record is included iff it passes
/// both the category test and the text test. Original relative order is
/// preserved, nothing is re-sorted.
pub fn filter<'a>(records: &'a [TermRecord], state: &FilterState) -> Vec<&'a TermRecord> {
    let query = state.query.trim().to_lowercase();
    records
        .iter()
        .filter(|record| matches_category(record, &state.category) && matches_text(record, &query))
        .collect()
}

fn matches_category(record: &TermRecord, category: &str) -> bool {
    if category == CATEGORY_ALL {
        return true;
    }
    match (&record.tags, &record.category) {
        // Tags take precedence over the legacy field; membership is exact
        // and case-sensitive.
        (Some(tags), _) if !tags.is_empty() => tags.iter().any(|tag| tag == category),
        (_, Some(legacy)) => legacy == category,
        _ => false,
    }
}

/// Text test against the already trimmed and lower-cased query. The reading
/// is matched as a raw substring without case folding, unlike every other
/// field; that asymmetry is long-standing observed behavior and callers
/// depend on the exact-script match for katakana readings.
fn matches_text(record: &TermRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.term.to_lowercase().contains(query)
        || record.reading.contains(query)
        || record.keywords.to_lowercase().contains(query)
        || record
            .tags
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}
