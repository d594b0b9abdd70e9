use frames_core::{FilterRules, SearchResult, Suitability};
use pretty_assertions::assert_eq;

fn record(title: &str, snippet: &str, domain: &str) -> SearchResult {
    SearchResult {
        url: "https://img.example.com/a.jpg".to_string(),
        title: title.to_string(),
        snippet: snippet.to_string(),
        source_domain: domain.to_string(),
        mime: "image/jpeg".to_string(),
        ..SearchResult::default()
    }
}

#[test]
fn studio_shot_on_stock_site_is_accepted() {
    let rules = FilterRules::default();
    let result = record("Gold Aviator Sunglasses - Studio Shot", "", "shutterstock.com");

    let score = rules.score(&result);
    assert_eq!(
        score,
        Suitability {
            positive_score: 2, // "glasses" and "studio"
            negative_score: 0,
            domain_bonus: 1,
        }
    );
    assert!(score.is_accepted());
}

#[test]
fn person_wearing_glasses_is_rejected() {
    let rules = FilterRules::default();
    let result = record("Man wearing gold aviator glasses outdoors", "", "example.org");

    let score = rules.score(&result);
    assert!(score.negative_score > 0);
    assert!(score.positive_score > 0);
    assert!(!score.is_accepted());
}

#[test]
fn preferred_domain_alone_is_enough() {
    let rules = FilterRules::default();
    let result = record("Aviator 3025", "Gold tone", "www.rayban.com");
    let score = rules.score(&result);
    assert_eq!(score.positive_score, 0);
    assert_eq!(score.domain_bonus, 1);
    assert!(score.is_accepted());
}

#[test]
fn nothing_matching_is_rejected() {
    let rules = FilterRules::default();
    let result = record("Sunset over the bay", "holiday photos", "example.org");
    assert!(!rules.accepts(&result));
}

#[test]
fn negative_keyword_in_snippet_vetoes_preferred_domain() {
    let rules = FilterRules::default();
    let result = record(
        "Round tortoiseshell eyeglasses",
        "Portrait of a smiling customer",
        "zenni.com",
    );
    assert!(!rules.accepts(&result));
}

#[test]
fn matching_is_case_insensitive() {
    let rules = FilterRules::default();
    let result = record("EYEWEAR ISOLATED", "", "EXAMPLE.ORG");
    assert_eq!(rules.score(&result).positive_score, 2);
    assert!(rules.accepts(&result));
}

#[test]
fn every_accepted_record_satisfies_the_gate() {
    let rules = FilterRules::default();
    let titles = [
        "Black square frames product",
        "Woman wearing cat eye glasses",
        "Product photo",
        "Lifestyle shot of eyewear",
        "Random title",
        "Spectacles on white background",
    ];
    for title in titles {
        for domain in ["getty.com", "example.org"] {
            let result = record(title, "", domain);
            let score = rules.score(&result);
            if rules.accepts(&result) {
                assert_eq!(score.negative_score, 0, "{title} @ {domain}");
                assert!(score.positive_score + score.domain_bonus > 0);
            }
        }
    }
}
