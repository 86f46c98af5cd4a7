use serde::Serialize;

use super::entry::Entry;

/// Outcome of one lookup. Exactly one of `entries` and `suggested_spellings`
/// is meaningfully populated: entries when the word resolved directly,
/// suggestions when the site redirected to its spell-checker.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub spelling_is_correct: bool,
    pub entries: Vec<Entry>,
    pub suggested_spellings: Vec<String>,
}

impl QueryResult {
    /// A new result keeping only entries whose part of speech is in `wanted`,
    /// in original relative order. An empty `wanted` keeps nothing; callers
    /// that want all types skip the filter instead.
    pub fn filter_by_types(&self, wanted: &[&str]) -> QueryResult {
        QueryResult {
            spelling_is_correct: self.spelling_is_correct,
            entries: self
                .entries
                .iter()
                .filter(|e| wanted.contains(&e.part_of_speech.as_str()))
                .cloned()
                .collect(),
            suggested_spellings: self.suggested_spellings.clone(),
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_types(types: &[&str]) -> QueryResult {
        QueryResult {
            spelling_is_correct: true,
            entries: types
                .iter()
                .map(|t| Entry {
                    part_of_speech: t.to_string(),
                    ..Default::default()
                })
                .collect(),
            suggested_spellings: Vec::new(),
        }
    }

    #[test]
    fn keeps_matching_entries_in_order() {
        let result = result_with_types(&["noun", "verb", "noun"]);
        let filtered = result.filter_by_types(&["noun"]);
        assert_eq!(filtered.entries.len(), 2);
        assert!(filtered.entries.iter().all(|e| e.part_of_speech == "noun"));
    }

    #[test]
    fn no_match_yields_empty() {
        let result = result_with_types(&["noun", "verb"]);
        assert!(result.filter_by_types(&["adjective"]).entries.is_empty());
    }

    #[test]
    fn empty_wanted_yields_empty() {
        let result = result_with_types(&["noun", "verb"]);
        assert!(result.filter_by_types(&[]).entries.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let result = result_with_types(&["noun", "verb", "noun", "adverb"]);
        let once = result.filter_by_types(&["noun", "adverb"]);
        let twice = once.filter_by_types(&["noun", "adverb"]);
        assert_eq!(once.entries.len(), twice.entries.len());
        assert_eq!(once.entries, twice.entries);
    }

    #[test]
    fn empty_part_of_speech_matches_only_explicitly() {
        let result = result_with_types(&["", "noun"]);
        assert!(result.filter_by_types(&["noun"]).entries.len() == 1);
        assert_eq!(result.filter_by_types(&["", "noun"]).entries.len(), 2);
    }

    #[test]
    fn input_is_untouched() {
        let result = result_with_types(&["noun", "verb"]);
        let _ = result.filter_by_types(&["noun"]);
        assert_eq!(result.entries.len(), 2);
    }

    #[test]
    fn result_serializes_to_json() {
        let result = result_with_types(&["noun"]);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"spellingIsCorrect\":true"));
        assert!(json.contains("\"partOfSpeech\":\"noun\""));
    }
}
