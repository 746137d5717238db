use yougo_types::Segment;

/// Split `text` into ordered runs, flagging every case-insensitive
/// occurrence of `query`. Matched runs keep the original casing of the
/// text. The query is a literal substring; no pattern language is
/// involved, so metacharacters need no escaping and cannot change what
/// matches.
pub fn segments(text: &str, query: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }
    if query.is_empty() {
        return vec![plain(text.to_string())];
    }

    let needle: Vec<char> = query.chars().map(fold).collect();
    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().map(|c| fold(*c)).collect();

    let mut out = Vec::new();
    let mut run_start = 0;
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        if folded[i..i + needle.len()] == needle[..] {
            if run_start < i {
                out.push(plain(chars[run_start..i].iter().collect()));
            }
            out.push(Segment {
                text: chars[i..i + needle.len()].iter().collect(),
                is_match: true,
            });
            i += needle.len();
            run_start = i;
        } else {
            i += 1;
        }
    }
    if run_start < chars.len() {
        out.push(plain(chars[run_start..].iter().collect()));
    }
    out
}

/// Wrap every occurrence of `query` within `text` in the given markers.
/// Identity when either input is empty.
pub fn apply(text: &str, query: &str, open: &str, close: &str) -> String {
    segments(text, query)
        .into_iter()
        .map(|segment| {
            if segment.is_match {
                format!("{open}{}{close}", segment.text)
            } else {
                segment.text
            }
        })
        .collect()
}

fn plain(text: String) -> Segment {
    Segment {
        text,
        is_match: false,
    }
}

// One-to-one case fold so match offsets in the folded text line up with the
// original. Multi-char expansions (ß and friends) keep their first char,
// which leaves them unmatched rather than mis-sliced.
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(apply("some text", "", "[", "]"), "some text");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(apply("", "api", "[", "]"), "");
        assert!(segments("", "api").is_empty());
    }

    #[test]
    fn match_preserves_original_casing() {
        assert_eq!(apply("The API layer", "api", "<", ">"), "The <API> layer");
    }

    #[test]
    fn wraps_every_occurrence() {
        assert_eq!(apply("api and API", "Api", "[", "]"), "[api] and [API]");
    }

    #[test]
    fn metacharacters_are_literal() {
        assert_eq!(apply("uses C++ a lot", "c++", "[", "]"), "uses [C++] a lot");
        assert_eq!(apply("a.c abc", "a.c", "[", "]"), "[a.c] abc");
    }

    #[test]
    fn no_occurrence_leaves_text_alone() {
        let segs = segments("Application", "xyz");
        assert_eq!(segs.len(), 1);
        assert!(!segs[0].is_match);
        assert_eq!(segs[0].text, "Application");
    }

    #[test]
    fn adjacent_matches_stay_separate_runs() {
        let segs = segments("aaaa", "aa");
        assert_eq!(segs.len(), 2);
        assert!(segs.iter().all(|s| s.is_match));
    }

    #[test]
    fn katakana_matches_exactly() {
        assert_eq!(
            apply("エーピーアイ", "ピー", "[", "]"),
            "エー[ピー]アイ"
        );
    }

    #[test]
    fn whole_text_match_is_single_segment() {
        let segs = segments("API", "api");
        assert_eq!(segs.len(), 1);
        assert!(segs[0].is_match);
        assert_eq!(segs[0].text, "API");
    }
}
