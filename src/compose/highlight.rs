//! Key-term highlighting
//!
//! Naive literal substitution: every occurrence of each key term in the
//! body text is wrapped in emphasis, term by term. There is no word
//! boundary or overlap handling — a term that is a substring of another
//! term, or of text an earlier term already wrapped, matches again. That
//! is the product behavior, kept deliberately (see DESIGN.md).

use super::blocks::Span;

const MARK_OPEN: char = '\u{1}';
const MARK_CLOSE: char = '\u{2}';

/// Wrap every literal occurrence of each key term in emphasis spans.
///
/// Terms are applied in the order given, matched case-sensitively. Text
/// inside a nested match stays emphasized once; emphasis does not stack.
pub fn emphasize_terms(body: &str, key_terms: &[String]) -> Vec<Span> {
    let mut marked = body.to_string();
    for term in key_terms {
        if term.is_empty() {
            continue;
        }
        marked = marked.replace(term.as_str(), &format!("{MARK_OPEN}{term}{MARK_CLOSE}"));
    }
    spans_from_marked(&marked)
}

/// Body text as spans without any highlighting
pub fn plain_spans(body: &str) -> Vec<Span> {
    vec![Span::plain(body)]
}

fn spans_from_marked(marked: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut depth: u32 = 0;

    for ch in marked.chars() {
        match ch {
            MARK_OPEN => {
                if depth == 0 && !current.is_empty() {
                    spans.push(Span::plain(std::mem::take(&mut current)));
                }
                depth += 1;
            }
            MARK_CLOSE => {
                depth = depth.saturating_sub(1);
                if depth == 0 && !current.is_empty() {
                    spans.push(Span::emphasized(std::mem::take(&mut current)));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        spans.push(if depth > 0 {
            Span::emphasized(current)
        } else {
            Span::plain(current)
        });
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emphasized_text(spans: &[Span]) -> Vec<&str> {
        spans
            .iter()
            .filter(|s| s.emphasis)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn wraps_every_occurrence() {
        let spans = emphasize_terms(
            "superposition here, superposition there",
            &["superposition".to_string()],
        );
        assert_eq!(
            emphasized_text(&spans),
            vec!["superposition", "superposition"]
        );
    }

    #[test]
    fn reassembles_original_text() {
        let body = "The wave function collapses on measurement.";
        let spans = emphasize_terms(
            body,
            &["wave function".to_string(), "measurement".to_string()],
        );
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, body);
    }

    #[test]
    fn substring_terms_rewrap_already_emphasized_text() {
        // "L1" wraps first; "L" then matches inside the wrapped region.
        // The text stays emphasized exactly once and nothing is lost.
        let spans = emphasize_terms("use L1 loss", &["L1".to_string(), "L".to_string()]);
        let joined: String = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(joined, "use L1 loss");
        assert_eq!(emphasized_text(&spans), vec!["L1"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let spans = emphasize_terms("Dropout and dropout", &["dropout".to_string()]);
        assert_eq!(emphasized_text(&spans), vec!["dropout"]);
    }

    #[test]
    fn no_terms_yields_single_plain_span() {
        let spans = emphasize_terms("nothing to see", &[]);
        assert_eq!(spans, vec![Span::plain("nothing to see")]);
    }
}
