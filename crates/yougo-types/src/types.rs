use serde::{Deserialize, Serialize};

/// Events flowing over the app <-> UI channel pair.
#[derive(Debug, Clone)]
pub enum AppEvent {
    Ui(UiEvent),
    GlossaryReady {
        terms: usize,
        categories: Vec<String>,
    },
    LoadFailed(String),
    ShowView(RenderPlan),
    ShowDetail(TermDetail),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Search submitted from the home screen.
    SubmitQuery(String),
    /// Category card or chip picked on either screen.
    PickCategory(String),
    /// Live edit of the results search field.
    TypeQuery(String),
    /// Row selected on the results screen (zero-based).
    SelectRow(usize),
    Reset,
    Back,
    Quit,
}

/// Which of the two screens is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Home,
    Results,
}

/// One run of characters inside a highlighted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

/// One presentational row of the results list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub term: Vec<Segment>,
    pub reading: String,
    pub description: Vec<Segment>,
    pub badges: Vec<String>,
}

/// Everything the frontend needs to draw the current screen: the active
/// view, the filter inputs echoed back (so both input fields and the
/// active chip stay in sync), and one row per matching record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPlan {
    pub view: View,
    pub query: String,
    pub category: String,
    pub rows: Vec<DisplayRow>,
}

/// Full record surfaced when a row is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermDetail {
    pub term: String,
    pub badges: Vec<String>,
    pub description: String,
}
