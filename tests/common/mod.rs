//! Shared test utilities and fixtures.

#![allow(dead_code)]

use ocrsnip::contracts::{highlights_balanced, rendered_len};
use ocrsnip::{Query, Snippeter, StopwordSet};

// ============================================================================
// FIXTURES
// ============================================================================

/// One OCR page from a municipal bulletin, with typical scan noise.
pub const BULLETIN_PAGE: &str = "\
Gemeente Bennekom - Mededelingen
Het drinkwaterbedrijf meldt dat de waterleiding in de Dorpsstraat
vanaf maandag wordt vernieuwd. Bewoners ontvangen een brief.
De school voor uitgebreid lager  onderwijs opent haar deuren op 1 sept.
Inlichtingen bij het bureau van de gemeente-secretaris.";

/// Two paragraphs: the first mentions one query word, the second two.
pub const TWO_PARAGRAPHS: &str = "\
De vriend kwam gisteren op bezoek.
Het water stond hoog bij de brug, zei de vriend.";

/// Maximum snippet length with the default layout.
pub const MAX_LEN: usize = 300;

// ============================================================================
// HELPERS
// ============================================================================

pub fn engine() -> Snippeter {
    Snippeter::dutch()
}

pub fn dutch_query(raw: &str) -> Query {
    Query::parse(raw, StopwordSet::default_shared()).unwrap()
}

/// Snippet HTML with the shared Dutch engine.
pub fn snippet(query: &str, text: &str, context: usize) -> Option<String> {
    ocrsnip::find_snippet(query, text, context).unwrap()
}

/// Highlighted words, in order.
pub fn highlights(html: &str) -> Vec<&str> {
    html.split("<em>")
        .skip(1)
        .filter_map(|part| part.split_once("</em>").map(|(hit, _)| hit))
        .collect()
}

pub fn assert_well_formed(html: &str) {
    assert!(
        rendered_len(html) <= MAX_LEN,
        "snippet too long ({} chars): {:?}",
        rendered_len(html),
        html
    );
    assert!(highlights_balanced(html), "unbalanced highlights: {:?}", html);
}
