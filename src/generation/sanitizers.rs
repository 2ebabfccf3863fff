//! Sanitizer for text that ends up inside generated doc comments.

use regex::Regex;
use std::sync::OnceLock;

/// Flattens schema description text into a single doc-comment-safe line:
/// smart quotes become plain quotes, whitespace runs collapse, and empty
/// lines disappear.
pub fn sanitize_doc(input: &str) -> String {
    static UNICODE_RE: OnceLock<Regex> = OnceLock::new();
    static WS_RE: OnceLock<Regex> = OnceLock::new();

    let unicode_re = UNICODE_RE
        .get_or_init(|| Regex::new(r"[\u{2018}\u{2019}\u{201C}\u{201D}\u{2014}]").unwrap());
    let ws_re = WS_RE.get_or_init(|| Regex::new(r"\s+").unwrap());

    let replaced = unicode_re.replace_all(input, |caps: &regex::Captures| match &caps[0] {
        "\u{2018}" | "\u{2019}" => "'",
        "\u{201C}" | "\u{201D}" => "\"",
        "\u{2014}" => "-",
        _ => "",
    });

    replaced
        .lines()
        .map(|line| ws_re.replace_all(line.trim(), " ").to_string())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
