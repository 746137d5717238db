use yougo_types::{UiEvent, View};

/// Map one input line to a UI event. Plain text submits a search from home
/// and live-filters on results; `:commands` work on both screens. `None`
/// means the line is ignored (blank home line, unknown command).
pub fn parse_line(line: &str, view: View) -> Option<UiEvent> {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix(':') {
        let (command, arg) = match rest.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (rest, ""),
        };
        return match command {
            "cat" | "c" if !arg.is_empty() => Some(UiEvent::PickCategory(arg.to_string())),
            // Rows are numbered from 1 on screen
            "open" | "o" => arg
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .map(UiEvent::SelectRow),
            "reset" => Some(UiEvent::Reset),
            "back" | "b" => Some(UiEvent::Back),
            "quit" | "q" => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match view {
        View::Home => {
            if trimmed.is_empty() {
                None
            } else {
                Some(UiEvent::SubmitQuery(line.to_string()))
            }
        }
        // Every line on results is a live query edit; an empty line clears
        // the query
        View::Results => Some(UiEvent::TypeQuery(line.to_string())),
    }
}
