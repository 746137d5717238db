use std::io::Write;

use yougo_types::{DisplayRow, RenderPlan, Segment, TermDetail, View};

/// Stdout renderer. Highlight markers are ANSI reverse video when color is
/// on, plain brackets otherwise.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn welcome(&self) {
        println!("yougo glossary browser");
        println!("Type a word to search, :cat <name> to browse a category, :quit to exit.");
    }

    pub fn glossary_ready(&self, terms: usize, categories: &[String]) {
        println!("Loaded {terms} terms.");
        if !categories.is_empty() {
            println!("Categories: {}", categories.join(", "));
        }
    }

    /// The single visible error indicator the load contract asks for.
    pub fn load_failure(&self, message: &str) {
        println!("!! {message}");
    }

    pub fn plan(&self, plan: &RenderPlan) {
        match plan.view {
            View::Home => {
                println!();
                println!("Type a word to search, :cat <name> to browse a category.");
            }
            View::Results => {
                println!();
                println!(
                    "{} result(s) for \"{}\" in [{}]",
                    plan.rows.len(),
                    plan.query,
                    plan.category
                );
                if plan.rows.is_empty() {
                    println!("No results.");
                } else {
                    for (number, row) in plan.rows.iter().enumerate() {
                        self.row(number + 1, row);
                    }
                    println!(":open <n> shows a term, :back returns home.");
                }
            }
        }
    }

    pub fn detail(&self, detail: &TermDetail) {
        println!();
        println!("{}", detail.term);
        if !detail.badges.is_empty() {
            println!("[{}]", detail.badges.join(", "));
        }
        println!();
        println!("{}", detail.description);
    }

    pub fn prompt(&self, view: View) {
        let prompt = match view {
            View::Home => "search> ",
            View::Results => "filter> ",
        };
        print!("{prompt}");
        let _ = std::io::stdout().flush();
    }

    fn row(&self, number: usize, row: &DisplayRow) {
        let badges: String = row.badges.iter().map(|b| format!("[{b}]")).collect();
        let reading = if row.reading.is_empty() {
            String::new()
        } else {
            format!("（{}）", row.reading)
        };
        println!("{number:>3}. {}{reading} {badges}", self.markup(&row.term));
        if !row.description.is_empty() {
            println!("     {}", self.markup(&row.description));
        }
    }

    fn markup(&self, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|segment| {
                if !segment.is_match {
                    segment.text.clone()
                } else if self.color {
                    format!("\x1b[7m{}\x1b[0m", segment.text)
                } else {
                    format!("[{}]", segment.text)
                }
            })
            .collect()
    }
}
