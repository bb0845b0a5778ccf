//! Pulls the excuse text out of the page HTML.
//!
//! This is a purely textual scan: the first `<a ...>...</a>` on a single line
//! wins, whether or not it is the anchor a reader would consider the excuse.
//! A line ends at `\n`, `\r`, U+2028 or U+2029.

use std::sync::LazyLock;

use regex::Regex;

const ANCHOR_PATTERN: &str =
    r"<a[^\n\r\x{2028}\x{2029}]*?>([^\n\r\x{2028}\x{2029}]*?)</a>";

static ANCHOR_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCHOR_PATTERN).expect("valid anchor pattern"));

/// Result of scanning a successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExcuseOutcome {
    /// Inner text of the first anchor tag.
    Excuse(String),
    /// The page had no anchor, or the first anchor was empty.
    ExtractionFailed,
}

impl ExcuseOutcome {
    pub fn from_html(html: &str) -> Self {
        match extract_excuse(html) {
            Some(excuse) => Self::Excuse(excuse),
            None => Self::ExtractionFailed,
        }
    }

    pub fn excuse(&self) -> Option<&str> {
        match self {
            Self::Excuse(text) => Some(text),
            Self::ExtractionFailed => None,
        }
    }
}

/// Returns the inner text of the first anchor tag, or `None` when there is no
/// anchor or the first one has nothing between its tags.
pub fn extract_excuse(html: &str) -> Option<String> {
    let caps = ANCHOR_TEXT.captures(html)?;
    caps.get(1)
        .map(|m| m.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_anchor() {
        let html = r#"<a href="/x">Bad sprint planning</a>"#;
        assert_eq!(extract_excuse(html).as_deref(), Some("Bad sprint planning"));
    }

    #[test]
    fn first_anchor_wins() {
        let html = r#"<p><a href="/">It works on my machine</a> | <a href="/about">About</a></p>"#;
        assert_eq!(
            extract_excuse(html).as_deref(),
            Some("It works on my machine")
        );
    }

    #[test]
    fn no_anchor_is_extraction_failure() {
        assert_eq!(extract_excuse("<div>no links here</div>"), None);
        assert_eq!(
            ExcuseOutcome::from_html("<div>no links here</div>"),
            ExcuseOutcome::ExtractionFailed
        );
    }

    #[test]
    fn empty_first_anchor_is_extraction_failure() {
        // only the first match counts, even when a later anchor has text
        let html = r#"<a href="/"></a><a href="/x">Cosmic rays</a>"#;
        assert_eq!(extract_excuse(html), None);
    }

    #[test]
    fn anchor_must_close_on_the_same_line() {
        let html = "<a href=\"/\">split\nacross lines</a>";
        assert_eq!(extract_excuse(html), None);
    }

    #[test]
    fn carriage_return_ends_the_line() {
        assert_eq!(extract_excuse("<a>one\rtwo</a>"), None);
        assert_eq!(
            extract_excuse("<a href=\"/\">split\r</a><a>Flaky test</a>").as_deref(),
            Some("Flaky test")
        );
    }

    #[test]
    fn unicode_line_separators_end_the_line() {
        let html = "<a>one\u{2028}two</a><a>three</a>";
        assert_eq!(extract_excuse(html).as_deref(), Some("three"));
        assert_eq!(extract_excuse("<a>one\u{2029}two</a>"), None);
    }

    #[test]
    fn capture_is_non_greedy() {
        let html = r#"<a class="x">one</a><a>two</a>"#;
        assert_eq!(extract_excuse(html).as_deref(), Some("one"));
    }

    #[test]
    fn nested_markup_is_kept_verbatim() {
        let html = r#"<a href="/"><b>Cache</b> was stale</a>"#;
        assert_eq!(extract_excuse(html).as_deref(), Some("<b>Cache</b> was stale"));
    }

    #[test]
    fn other_tags_starting_with_a_also_match() {
        // matches the textual scan, not an HTML-aware one
        let html = r#"<abbr title="x">DNS</a>"#;
        assert_eq!(extract_excuse(html).as_deref(), Some("DNS"));
    }

    #[test]
    fn extraction_is_repeatable() {
        let html = r#"<html><body><a href="/">The build server was down</a></body></html>"#;
        let first = ExcuseOutcome::from_html(html);
        let second = ExcuseOutcome::from_html(html);
        assert_eq!(first, second);
        assert_eq!(first.excuse(), Some("The build server was down"));
    }
}
