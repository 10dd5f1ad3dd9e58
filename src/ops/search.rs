use std::ops::Range;

use regex::Regex;

use crate::model::note::Note;
use crate::model::task::Task;

/// Anything that can be matched against a search query
pub trait Searchable {
    fn search_text(&self) -> &str;
}

impl Searchable for Task {
    fn search_text(&self) -> &str {
        &self.text
    }
}

impl Searchable for Note {
    fn search_text(&self) -> &str {
        &self.text
    }
}

/// Case-insensitive substring test. An empty query matches everything.
pub fn matches_query(text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    text.to_lowercase().contains(&query.to_lowercase())
}

/// The subsequence of `items` whose text contains `query`, in original order.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.search_text().to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Highlighting
// ---------------------------------------------------------------------------

/// Compile a query into a case-insensitive literal regex for highlighting.
/// Returns None for an empty query.
pub fn query_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Collect all non-overlapping match byte-ranges for a regex in the given text.
pub fn match_spans(re: &Regex, text: &str) -> Vec<Range<usize>> {
    re.find_iter(text).map(|m| m.start()..m.end()).collect()
}
