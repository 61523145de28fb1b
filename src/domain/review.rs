use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One guest review extracted from the review modal. Missing sub-fields
/// default to the empty string; a review is never dropped for an absent
/// field. Identity within one collection run is the title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub positive_feedback: String,
    #[serde(default)]
    pub negative_feedback: String,
}

/// Keep the first review for each title, preserving order. This is the
/// admission rule the paginator applies across modal pages, where a next-page
/// click can re-render the tail of the previous page.
pub fn dedup_by_title(reviews: impl IntoIterator<Item = Review>) -> Vec<Review> {
    let mut seen: HashSet<String> = HashSet::new();
    reviews
        .into_iter()
        .filter(|review| seen.insert(review.title.clone()))
        .collect()
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\"{}\" ({})", self.title, self.date)?;
        if !self.positive_feedback.is_empty() {
            write!(f, " +{}", self.positive_feedback)?;
        }
        if !self.negative_feedback.is_empty() {
            write!(f, " -{}", self.negative_feedback)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(title: &str) -> Review {
        Review {
            title: title.into(),
            date: "March 2025".into(),
            positive_feedback: String::new(),
            negative_feedback: String::new(),
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let deduped = dedup_by_title(vec![review("Great"), review("Quiet"), review("Great")]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].title, "Great");
        assert_eq!(deduped[1].title, "Quiet");
    }

    #[test]
    fn dedup_collapses_empty_titles() {
        // Untitled reviews share the empty-string key and collapse to one.
        let deduped = dedup_by_title(vec![review(""), review(""), review("Nice")]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn dedup_preserves_order() {
        let deduped = dedup_by_title(vec![review("c"), review("a"), review("b"), review("a")]);
        let titles: Vec<&str> = deduped.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn display_includes_both_feedback_sides() {
        let r = Review {
            title: "Mixed".into(),
            date: "July 2025".into(),
            positive_feedback: "great beach".into(),
            negative_feedback: "noisy street".into(),
        };
        let s = r.to_string();
        assert!(s.contains("\"Mixed\""));
        assert!(s.contains("+great beach"));
        assert!(s.contains("-noisy street"));
    }
}
