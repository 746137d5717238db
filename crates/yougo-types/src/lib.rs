pub mod types;

pub use types::{AppEvent, DisplayRow, RenderPlan, Segment, TermDetail, UiEvent, View};
