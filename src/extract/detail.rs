use scraper::Html;

use crate::domain::property::PropertyDetail;
use crate::extract::{joined_text, parse_selector, UNAVAILABLE_DESCRIPTION, UNAVAILABLE_LOCATION};
use crate::selectors;

/// Extract detail-page fields. Absent elements yield the sentinel defaults;
/// this function cannot fail.
pub fn parse_detail(html: &str) -> PropertyDetail {
    let document = Html::parse_document(html);

    let description = parse_selector(selectors::DETAIL_DESCRIPTION)
        .and_then(|sel| document.select(&sel).next().map(|el| joined_text(el, " ")))
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNAVAILABLE_DESCRIPTION.into());

    let location = parse_selector(selectors::DETAIL_MAP_PIN)
        .and_then(|sel| {
            document
                .select(&sel)
                .next()
                .and_then(|el| el.value().attr(selectors::DETAIL_MAP_LATLNG_ATTR))
                .map(String::from)
        })
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNAVAILABLE_LOCATION.into());

    let services = parse_selector(selectors::DETAIL_FACILITIES)
        .and_then(|sel| document.select(&sel).next())
        .map(|wrapper| {
            let Some(span) = parse_selector("span") else {
                return Vec::new();
            };
            wrapper
                .select(&span)
                .map(|el| joined_text(el, " "))
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();

    PropertyDetail {
        description,
        location,
        services,
    }
}
