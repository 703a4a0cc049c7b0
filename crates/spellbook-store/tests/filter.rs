use spellbook_core::{Language, Spell};
use spellbook_store::query::filter;

fn sample() -> Vec<Spell> {
    vec![
        Spell::new("Printer", "print(1)", Language::Python),
        Spell::new("Logger", "console.log(1)", Language::Javascript),
        Spell::new("Pyramid", "draw()", Language::Rust),
    ]
}

#[test]
fn empty_query_is_the_identity() {
    let spells = sample();
    let hits = filter(&spells, "");
    let titles: Vec<&str> = hits.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Printer", "Logger", "Pyramid"]);
}

#[test]
fn matches_are_case_insensitive() {
    let spells = sample();
    // "PY" hits both the python language tag and the "Pyramid" title.
    let hits = filter(&spells, "PY");
    let titles: Vec<&str> = hits.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Printer", "Pyramid"]);
}

#[test]
fn language_substring_matches() {
    let spells = sample();
    let hits = filter(&spells, "java");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Logger");
}

#[test]
fn code_content_is_not_searched() {
    let spells = sample();
    assert!(filter(&spells, "console").is_empty());
}

#[test]
fn no_match_returns_empty() {
    let spells = sample();
    assert!(filter(&spells, "cobol").is_empty());
}

#[test]
fn input_order_is_preserved() {
    let spells = sample();
    let hits = filter(&spells, "r");
    // "Printer", "Logger" and "Pyramid" (rust) all contain an "r".
    let titles: Vec<&str> = hits.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Printer", "Logger", "Pyramid"]);
}
