use scraper::{ElementRef, Html, Selector};

use crate::domain::property::PropertySummary;
use crate::extract::{
    joined_text, parse_selector, UNAVAILABLE_BEACH_DISTANCE, UNAVAILABLE_DISTANCE,
    UNAVAILABLE_NAME, UNAVAILABLE_PRICE, UNAVAILABLE_RATING,
};
use crate::selectors;

/// Extract every result card from a fully-rendered search results document.
/// Fields a card does not render come back as sentinels, never as errors.
pub fn parse_property_cards(html: &str) -> Vec<PropertySummary> {
    let document = Html::parse_document(html);
    let Some(card_selector) = parse_selector(selectors::PROPERTY_CARD) else {
        return Vec::new();
    };

    document
        .select(&card_selector)
        .map(extract_card)
        .collect()
}

fn extract_card(card: ElementRef<'_>) -> PropertySummary {
    PropertySummary {
        title: first_text(card, selectors::CARD_TITLE)
            .unwrap_or_else(|| UNAVAILABLE_NAME.into()),
        price: first_text(card, selectors::CARD_PRICE)
            .or_else(|| first_text(card, selectors::CARD_PRICE_FALLBACK))
            .unwrap_or_else(|| UNAVAILABLE_PRICE.into()),
        rating: first_text(card, selectors::CARD_REVIEW_SCORE)
            .unwrap_or_else(|| UNAVAILABLE_RATING.into()),
        distance: first_text(card, selectors::CARD_DISTANCE)
            .unwrap_or_else(|| UNAVAILABLE_DISTANCE.into()),
        beach_distance: beach_badge(card).unwrap_or_else(|| UNAVAILABLE_BEACH_DISTANCE.into()),
        features: features_line(card),
        payment_policy: first_el(card, selectors::CARD_PAYMENT_POLICY)
            .map(|el| joined_text(el, " "))
            .unwrap_or_default(),
        detail_url: detail_url(card),
        description: String::new(),
        location: String::new(),
        services: Vec::new(),
        reviews: Vec::new(),
    }
}

fn first_el<'a>(card: ElementRef<'a>, raw: &str) -> Option<ElementRef<'a>> {
    let selector = parse_selector(raw)?;
    card.select(&selector).next()
}

fn first_text(card: ElementRef<'_>, raw: &str) -> Option<String> {
    let text = joined_text(first_el(card, raw)?, " ");
    (!text.is_empty()).then_some(text)
}

/// The beach badge carries no stable test id; match any span mentioning the
/// beach, in either site language.
fn beach_badge(card: ElementRef<'_>) -> Option<String> {
    let span = Selector::parse("span").ok()?;
    card.select(&span)
        .map(|el| joined_text(el, " "))
        .find(|text| {
            let lower = text.to_lowercase();
            lower.contains("playa") || lower.contains("beach")
        })
}

fn features_line(card: ElementRef<'_>) -> String {
    let Some(selector) = parse_selector(selectors::CARD_FEATURES) else {
        return String::new();
    };
    card.select(&selector)
        .map(|el| joined_text(el, " "))
        .filter(|text| !text.is_empty() && !text.contains('•'))
        .collect::<Vec<_>>()
        .join(" ")
}

fn detail_url(card: ElementRef<'_>) -> String {
    first_el(card, selectors::CARD_TITLE_LINK)
        .or_else(|| first_el(card, selectors::CARD_LINK_FALLBACK))
        .and_then(|el| el.value().attr("href"))
        .unwrap_or_default()
        .to_string()
}
