use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static SPLIT_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans up text coming out of the PDF parser and the vision service:
/// NFKC normalization (ligatures, width variants), re-joins words the
/// layout hyphenated across line breaks, collapses internal whitespace
/// runs, and reduces blank-line runs to single paragraph breaks.
///
/// Plain-text uploads never pass through here; they are contractually
/// returned byte-identical.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();
    let rejoined = SPLIT_WORD.replace_all(&normalized, "$head$tail");

    let mut out = String::with_capacity(rejoined.len());
    let mut pending_break: Option<&str> = None;

    for line in rejoined.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !out.is_empty() {
                pending_break = Some("\n\n");
            }
            continue;
        }

        if let Some(sep) = pending_break.take() {
            out.push_str(sep);
        } else if !out.is_empty() {
            out.push('\n');
        }
        push_collapsed(trimmed, &mut out);
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut prev_was_space = false;
    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
