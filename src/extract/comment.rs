//! Documentation comment body extraction.

use once_cell::sync::Lazy;
use regex::{Match, Regex};
use text_size::{TextRange, TextSize};

use crate::base::UnitRange;
use crate::text::SourceText;

/// Block doc form: `/** ... */`, possibly spanning lines.
static BLOCK_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?ms)^\s*/\*\*\s*(.*?)\*/").unwrap());

/// Line doc form: one `///` line; the remainder of the line is one body line.
static LINE_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*///(.+)?").unwrap());

/// Authoring directive; lines carrying it are dropped from the body.
const DIRECTIVE: &str = "@name";

/// Extract the documentation body if the text (or the given code unit range
/// of it) begins a recognized doc comment form.
///
/// The block form is tried first, then the line form; the first form with any
/// match wins. Each captured line keeps its own indentation as a space
/// prefix, directive lines contribute empty body lines, trailing whitespace
/// is trimmed, and leading whitespace common to all lines is removed.
/// Returns `None` when nothing matches, the normalized body is empty, or the
/// limit range is untranslatable.
pub fn comment_body(source: &SourceText, limit: Option<UnitRange>) -> Option<String> {
    let byte_limit = match limit {
        Some(range) => source.unit_range_to_byte_range(range)?,
        None => TextRange::up_to(source.len()),
    };
    let region_start = usize::from(byte_limit.start());
    let region = &source.as_str()[region_start..usize::from(byte_limit.end())];

    for pattern in [&*BLOCK_DOC, &*LINE_DOC] {
        let mut parts = Vec::new();
        for caps in pattern.captures_iter(region) {
            for group in 1..caps.len() {
                parts.push(body_part(source, region_start, caps.get(group)));
            }
        }
        if !parts.is_empty() {
            let body = remove_common_leading_whitespace(parts.join("\n").trim_end());
            return (!body.is_empty()).then_some(body);
        }
    }
    None
}

/// One body line from a capture group: the captured text prefixed by one
/// space per leading whitespace character of the line it starts on, so that
/// relative indentation inside the comment survives reassembly.
fn body_part(source: &SourceText, region_start: usize, group: Option<Match<'_>>) -> String {
    let Some(group) = group else {
        return String::new();
    };
    let body = group.as_str();
    if body.contains(DIRECTIVE) {
        return String::new();
    }

    let index = source.line_index();
    let line = index.line_of_byte(TextSize::new((region_start + group.start()) as u32));
    let line_text =
        &source.as_str()[usize::from(index.line_start(line))..usize::from(index.line_end(line))];
    let indent = count_leading(line_text, char::is_whitespace);

    format!("{}{}", " ".repeat(indent), body)
}

/// Remove the leading whitespace common to every line.
///
/// The minimum is taken over lines that are not purely whitespace, counting
/// leading characters in the decoration set (whitespace plus `*`, so that
/// wall-of-asterisk blocks normalize cleanly). Lines shorter than the
/// minimum are left untouched. Idempotent on already-normalized text.
pub fn remove_common_leading_whitespace(body: &str) -> String {
    let mut min_leading = usize::MAX;
    for line in body.lines() {
        let whitespace = count_leading(line, char::is_whitespace);
        let decoration = count_leading(line, |c| c.is_whitespace() || c == '*');
        if decoration < min_leading && whitespace != line.chars().count() {
            min_leading = decoration;
        }
    }
    if min_leading == usize::MAX || min_leading == 0 {
        return body.to_string();
    }

    let stripped: Vec<&str> = body
        .lines()
        .map(|line| {
            if line.chars().count() < min_leading {
                line
            } else {
                line.char_indices()
                    .nth(min_leading)
                    .map_or("", |(idx, _)| &line[idx..])
            }
        })
        .collect();
    stripped.join("\n")
}

/// Number of contiguous leading chars satisfying the predicate.
fn count_leading(text: &str, matches: impl Fn(char) -> bool) -> usize {
    text.chars().take_while(|&c| matches(c)).count()
}
