use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ExtractionOutcome;

static NEWLINE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Collapses the successful outcomes into one normalized notes blob:
/// blank-line separators between files, carriage returns stripped, runs
/// of 3+ newlines collapsed to exactly 2, hard-truncated to `max_chars`
/// with no attempt to cut on a semantic boundary.
///
/// Failed outcomes are simply omitted here; callers wanting per-file
/// detail use the outcome list directly.
pub fn aggregate_notes(outcomes: &[ExtractionOutcome], max_chars: usize) -> String {
    let joined = outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            ExtractionOutcome::Success { text, .. } if !text.trim().is_empty() => {
                Some(text.trim())
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let without_cr: String = joined.chars().filter(|c| *c != '\r').collect();
    let collapsed = NEWLINE_RUNS.replace_all(&without_cr, "\n\n");

    if collapsed.chars().count() <= max_chars {
        collapsed.into_owned()
    } else {
        collapsed.chars().take(max_chars).collect()
    }
}
