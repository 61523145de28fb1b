use scraper::{ElementRef, Html};

use crate::domain::review::Review;
use crate::extract::{joined_text, parse_selector};
use crate::selectors;

/// Extract every review card currently rendered inside the modal. Missing
/// sub-fields become empty strings; deduplication is the paginator's job,
/// not this parser's.
pub fn parse_modal_reviews(html: &str) -> Vec<Review> {
    let document = Html::parse_document(html);
    let Some(card_selector) = parse_selector(selectors::REVIEW_CARD) else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .map(extract_review)
        .collect()
}

fn extract_review(card: ElementRef<'_>) -> Review {
    Review {
        title: field(card, selectors::REVIEW_TITLE),
        date: field(card, selectors::REVIEW_DATE),
        positive_feedback: field(card, selectors::REVIEW_POSITIVE),
        negative_feedback: field(card, selectors::REVIEW_NEGATIVE),
    }
}

fn field(card: ElementRef<'_>, raw: &str) -> String {
    parse_selector(raw)
        .and_then(|sel| card.select(&sel).next())
        .map(|el| joined_text(el, " "))
        .unwrap_or_default()
}
