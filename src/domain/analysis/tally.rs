//! Category tallies - label counts in first-encountered order.

use serde::{Deserialize, Serialize};

/// One label and how many ready members chose it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub label: String,
    pub count: u32,
}

/// Counts of each observed label on one axis.
///
/// Entries keep the order in which labels were first seen; ties for the
/// most common label go to the earliest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTally {
    entries: Vec<TallyEntry>,
}

impl CategoryTally {
    /// Tallies labels, ignoring `None` and blank strings.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut tally = Self::default();
        for label in labels.into_iter().flatten() {
            tally.add(label);
        }
        tally
    }

    /// Counts one occurrence of a label.
    pub fn add(&mut self, label: &str) {
        let label = label.trim();
        if label.is_empty() {
            return;
        }
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(entry) => entry.count += 1,
            None => self.entries.push(TallyEntry {
                label: label.to_string(),
                count: 1,
            }),
        }
    }

    /// Returns the entries in first-encountered order.
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Returns the count for a label (0 if never seen).
    pub fn count_of(&self, label: &str) -> u32 {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map_or(0, |e| e.count)
    }

    /// Most common entry; the first one wins a tie.
    pub fn top(&self) -> Option<&TallyEntry> {
        self.entries
            .iter()
            .fold(None, |best: Option<&TallyEntry>, entry| match best {
                Some(b) if b.count >= entry.count => Some(b),
                _ => Some(entry),
            })
    }

    /// Count of the most common label (0 when empty).
    pub fn top_count(&self) -> u32 {
        self.top().map_or(0, |e| e.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Returns true if nothing was counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_labels_and_skips_nulls() {
        let tally = CategoryTally::from_labels([Some("a"), None, Some("b"), Some("a")]);
        assert_eq!(tally.count_of("a"), 2);
        assert_eq!(tally.count_of("b"), 1);
        assert_eq!(tally.count_of("c"), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn blank_labels_are_ignored() {
        let tally = CategoryTally::from_labels([Some(""), Some("  "), Some("x")]);
        assert_eq!(tally.entries().len(), 1);
    }

    #[test]
    fn entries_keep_first_seen_order() {
        let tally = CategoryTally::from_labels([Some("b"), Some("a"), Some("b")]);
        let labels: Vec<&str> = tally.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn top_breaks_ties_by_first_encountered() {
        let tally = CategoryTally::from_labels([Some("x"), Some("y"), Some("y"), Some("x")]);
        assert_eq!(tally.top().unwrap().label, "x");
        assert_eq!(tally.top_count(), 2);
    }

    #[test]
    fn top_picks_strict_maximum() {
        let tally = CategoryTally::from_labels([Some("x"), Some("y"), Some("y")]);
        assert_eq!(tally.top().unwrap().label, "y");
    }

    #[test]
    fn empty_tally_has_no_top() {
        let tally = CategoryTally::default();
        assert!(tally.top().is_none());
        assert_eq!(tally.top_count(), 0);
        assert!(tally.is_empty());
    }

    #[test]
    fn serializes_as_ordered_list() {
        let tally = CategoryTally::from_labels([Some("カフェ")]);
        let json = serde_json::to_string(&tally).unwrap();
        assert_eq!(json, r#"[{"label":"カフェ","count":1}]"#);
    }
}
