//! Line-oriented helpers over the architecture Markdown.

use serde::Serialize;
use std::str::Lines;

/// Heading prefix that marks a section
const SECTION_PREFIX: &str = "## ";

/// Upper bound on hits returned by `search`
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Lazy iterator over second-level heading texts.
///
/// Cloning yields an independent iterator from the same position, so the
/// sequence can be walked as many times as needed.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    lines: Lines<'a>,
}

impl<'a> Iterator for Sections<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .find_map(|line| line.strip_prefix(SECTION_PREFIX).map(str::trim))
    }
}

/// Headings of every line starting with `## `, prefix stripped and trimmed.
pub fn extract_sections(markdown: &str) -> Sections<'_> {
    Sections {
        lines: markdown.lines(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// 1-based
    pub line_number: usize,
    pub text: String,
}

/// Case-insensitive substring search, first `MAX_SEARCH_RESULTS` hits in order.
///
/// Lines are split on `\n` only, so a trailing newline yields a final empty line.
pub fn search(query: &str, markdown: &str) -> Vec<SearchHit> {
    let needle = query.to_lowercase();

    markdown
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .filter(|(_, line)| line.to_lowercase().contains(&needle))
        .take(MAX_SEARCH_RESULTS)
        .map(|(index, line)| SearchHit {
            line_number: index + 1,
            text: line.trim().to_string(),
        })
        .collect()
}
