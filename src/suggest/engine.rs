//! Substring matching and list-suppression policy.

/// Return every candidate containing `query`, preserving corpus order.
///
/// The list is suppressed entirely (empty result) when the query is empty or
/// when some candidate equals the query exactly: the user has already typed a
/// complete, known phrase and partial matches would only distract.
pub fn compute_suggestions<S: AsRef<str>>(query: &str, corpus: &[S]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let found: Vec<&str> = corpus
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| candidate.contains(query))
        .collect();

    if found.iter().any(|candidate| *candidate == query) {
        return Vec::new();
    }

    found.into_iter().map(str::to_string).collect()
}

/// One contiguous run of a suggestion, flagged when it matches the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Split `text` into alternating matched/unmatched runs of `needle`.
///
/// Every non-overlapping occurrence is marked, scanning left to right.
pub fn highlight_segments<'a>(text: &'a str, needle: &str) -> Vec<Segment<'a>> {
    if needle.is_empty() {
        return vec![Segment {
            text,
            matched: false,
        }];
    }

    let mut segments = Vec::new();
    let mut last = 0usize;
    for (start, part) in text.match_indices(needle) {
        if start > last {
            segments.push(Segment {
                text: &text[last..start],
                matched: false,
            });
        }
        segments.push(Segment {
            text: part,
            matched: true,
        });
        last = start + part.len();
    }
    if last < text.len() || segments.is_empty() {
        segments.push(Segment {
            text: &text[last..],
            matched: false,
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: [&str; 5] = [
        "what is react",
        "what is hooks",
        "why do we need fragment",
        "how is react different from angular",
        "What is capitalised",
    ];

    #[test]
    fn filters_by_substring_in_corpus_order() {
        assert_eq!(
            compute_suggestions("is react", &CORPUS),
            vec![
                "what is react".to_string(),
                "how is react different from angular".to_string()
            ]
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            compute_suggestions("what is", &CORPUS),
            vec!["what is react".to_string(), "what is hooks".to_string()]
        );
        assert_eq!(
            compute_suggestions("What", &CORPUS),
            vec!["What is capitalised".to_string()]
        );
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(compute_suggestions("", &CORPUS).is_empty());
    }

    #[test]
    fn exact_match_suppresses_partial_matches() {
        // Suppression applies even when other candidates would still match.
        let corpus = ["react", "what is react", "react hooks"];
        assert!(compute_suggestions("react", &corpus).is_empty());
        assert!(compute_suggestions("what is react", &CORPUS).is_empty());
    }

    #[test]
    fn empty_corpus_or_no_match_yields_nothing() {
        let empty: [&str; 0] = [];
        assert!(compute_suggestions("what", &empty).is_empty());
        assert!(compute_suggestions("zzz", &CORPUS).is_empty());
    }

    #[test]
    fn works_with_owned_corpus() {
        let corpus = vec!["alpha".to_string(), "alphabet".to_string()];
        assert_eq!(
            compute_suggestions("alph", &corpus),
            vec!["alpha".to_string(), "alphabet".to_string()]
        );
    }

    #[test]
    fn highlight_marks_every_occurrence() {
        let segments = highlight_segments("react is not react native", "react");
        let rendered: Vec<(&str, bool)> = segments.iter().map(|s| (s.text, s.matched)).collect();
        assert_eq!(
            rendered,
            vec![
                ("react", true),
                (" is not ", false),
                ("react", true),
                (" native", false)
            ]
        );
    }

    #[test]
    fn highlight_without_needle_or_match_is_one_plain_segment() {
        assert_eq!(
            highlight_segments("what is react", ""),
            vec![Segment {
                text: "what is react",
                matched: false
            }]
        );
        assert_eq!(
            highlight_segments("what is react", "vue"),
            vec![Segment {
                text: "what is react",
                matched: false
            }]
        );
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn suggestions_always_contain_the_query(
                query in proptest::string::string_regex("[a-c ]{0,3}").expect("regex"),
                corpus in proptest::collection::vec(
                    proptest::string::string_regex("[a-c ]{0,8}").expect("regex"),
                    0..12
                )
            ) {
                let result = compute_suggestions(&query, &corpus);
                for candidate in &result {
                    prop_assert!(candidate.contains(query.as_str()));
                }
                if query.is_empty() || corpus.iter().any(|c| *c == query) {
                    prop_assert!(result.is_empty());
                }
            }

            #[test]
            fn highlight_segments_reassemble_the_text(
                text in proptest::string::string_regex("[ab]{0,12}").expect("regex"),
                needle in proptest::string::string_regex("[ab]{0,3}").expect("regex")
            ) {
                let joined: String = highlight_segments(&text, &needle)
                    .iter()
                    .map(|segment| segment.text)
                    .collect();
                prop_assert_eq!(joined, text);
            }
        }
    }
}
