use yougo_types::{DisplayRow, RenderPlan, TermDetail, View};

use crate::filter::{CATEGORY_ALL, FilterState, filter};
use crate::highlight;
use crate::types::TermRecord;

/// The two-screen state machine. Owns the current view and the filter
/// inputs; rendering is a pure function of those plus the loaded records.
#[derive(Debug, Default)]
pub struct ViewController {
    view: View,
    filter: FilterState,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Search submitted from the home screen. Entering the results screen
    /// this way always drops any previously picked category.
    pub fn submit_query(&mut self, query: impl Into<String>) {
        self.enter_results(query.into(), CATEGORY_ALL.to_string());
    }

    /// Category card or chip. From home this replaces the whole filter;
    /// while already on results only the category changes and the query
    /// stays.
    pub fn pick_category(&mut self, category: impl Into<String>) {
        match self.view {
            View::Home => self.enter_results(String::new(), category.into()),
            View::Results => self.filter.category = category.into(),
        }
    }

    /// Live edit of the results search field; applied on every keystroke.
    pub fn type_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn reset(&mut self) {
        self.enter_results(String::new(), CATEGORY_ALL.to_string());
    }

    /// Back to home. The filter is left stale; every transition into
    /// results overwrites it before anything is rendered from it, and the
    /// home screen renders no list.
    pub fn back(&mut self) {
        self.view = View::Home;
    }

    fn enter_results(&mut self, query: String, category: String) {
        self.filter.query = query;
        self.filter.category = category;
        self.view = View::Results;
    }

    /// Run the filter and build one decorated row per match.
    pub fn render(&self, records: &[TermRecord]) -> RenderPlan {
        let rows = filter(records, &self.filter)
            .into_iter()
            .map(|record| self.row(record))
            .collect();
        RenderPlan {
            view: self.view,
            query: self.filter.query.clone(),
            category: self.filter.category.clone(),
            rows,
        }
    }

    /// Resolve a row index of the current result set back to its record.
    pub fn detail(&self, records: &[TermRecord], index: usize) -> Option<TermDetail> {
        let matches = filter(records, &self.filter);
        matches.get(index).map(|record| TermDetail {
            term: record.term.clone(),
            badges: record.badges(),
            description: record.description.clone(),
        })
    }

    fn row(&self, record: &TermRecord) -> DisplayRow {
        DisplayRow {
            term: highlight::segments(&record.term, &self.filter.query),
            reading: record.reading.clone(),
            description: highlight::segments(&record.description, &self.filter.query),
            badges: record.badges(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<TermRecord> {
        vec![
            TermRecord {
                term: "API".to_string(),
                reading: "エーピーアイ".to_string(),
                description: "Application Programming Interface".to_string(),
                tags: Some(vec!["backend".to_string()]),
                ..TermRecord::default()
            },
            TermRecord {
                term: "Flexbox".to_string(),
                tags: Some(vec!["frontend".to_string()]),
                ..TermRecord::default()
            },
        ]
    }

    #[test]
    fn starts_on_home_with_default_filter() {
        let controller = ViewController::new();
        assert_eq!(controller.view(), View::Home);
        assert_eq!(controller.filter_state().query, "");
        assert_eq!(controller.filter_state().category, CATEGORY_ALL);
    }

    #[test]
    fn submit_query_enters_results_and_clears_category() {
        let mut controller = ViewController::new();
        controller.pick_category("backend");
        controller.back();
        controller.submit_query("flex");
        assert_eq!(controller.view(), View::Results);
        assert_eq!(controller.filter_state().query, "flex");
        assert_eq!(controller.filter_state().category, CATEGORY_ALL);
    }

    #[test]
    fn pick_category_from_home_clears_query() {
        let mut controller = ViewController::new();
        controller.submit_query("api");
        controller.back();
        controller.pick_category("frontend");
        assert_eq!(controller.view(), View::Results);
        assert_eq!(controller.filter_state().query, "");
        assert_eq!(controller.filter_state().category, "frontend");
    }

    #[test]
    fn pick_category_on_results_keeps_query() {
        let mut controller = ViewController::new();
        controller.submit_query("api");
        controller.pick_category("backend");
        assert_eq!(controller.filter_state().query, "api");
        assert_eq!(controller.filter_state().category, "backend");
    }

    #[test]
    fn typing_updates_only_query() {
        let mut controller = ViewController::new();
        controller.pick_category("backend");
        controller.type_query("a");
        controller.type_query("ap");
        assert_eq!(controller.filter_state().query, "ap");
        assert_eq!(controller.filter_state().category, "backend");
    }

    #[test]
    fn back_leaves_filter_stale() {
        let mut controller = ViewController::new();
        controller.submit_query("api");
        controller.back();
        assert_eq!(controller.view(), View::Home);
        assert_eq!(controller.filter_state().query, "api");
    }

    #[test]
    fn reset_restores_full_list() {
        let records = records();
        let mut controller = ViewController::new();
        controller.submit_query("api");
        assert_eq!(controller.render(&records).rows.len(), 1);
        controller.reset();
        let plan = controller.render(&records);
        assert_eq!(plan.rows.len(), records.len());
        assert_eq!(plan.query, "");
        assert_eq!(plan.category, CATEGORY_ALL);
    }

    #[test]
    fn render_highlights_term_but_not_absent_description_match() {
        let records = records();
        let mut controller = ViewController::new();
        controller.submit_query("api");
        let plan = controller.render(&records);
        assert_eq!(plan.rows.len(), 1);
        let row = &plan.rows[0];
        // Term carries a marker around "API", original casing intact
        assert!(row.term.iter().any(|s| s.is_match && s.text == "API"));
        // "api" does not occur in the description, so no segment matches
        assert!(row.description.iter().all(|s| !s.is_match));
        assert_eq!(row.badges, vec!["backend".to_string()]);
    }

    #[test]
    fn zero_matches_render_empty_plan() {
        let records = records();
        let mut controller = ViewController::new();
        controller.submit_query("no such term");
        let plan = controller.render(&records);
        assert!(plan.rows.is_empty());
        assert_eq!(plan.view, View::Results);
    }

    #[test]
    fn detail_resolves_row_in_filtered_order() {
        let records = records();
        let mut controller = ViewController::new();
        controller.reset();
        let detail = controller.detail(&records, 1).expect("row 1 exists");
        assert_eq!(detail.term, "Flexbox");
        assert_eq!(detail.badges, vec!["frontend".to_string()]);
        assert!(controller.detail(&records, 5).is_none());
    }
}
