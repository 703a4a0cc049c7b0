use spellbook_core::{Language, Spell};

#[test]
fn known_language_labels_round_trip() {
    for label in [
        "javascript",
        "typescript",
        "python",
        "java",
        "csharp",
        "cpp",
        "ruby",
        "go",
        "rust",
        "php",
        "html",
        "css",
        "sql",
    ] {
        let language = Language::from(label);
        assert!(!matches!(language, Language::Other(_)), "{label}");
        assert_eq!(language.as_str(), label);
    }
}

#[test]
fn unknown_label_is_preserved() {
    let language = Language::from("brainfuck");
    assert_eq!(language, Language::Other("brainfuck".to_string()));
    assert_eq!(language.as_str(), "brainfuck");
    assert_eq!(language.icon(), "📜");
}

#[test]
fn language_parsing_is_case_insensitive() {
    assert_eq!(Language::from("Python"), Language::Python);
    assert_eq!(Language::from("RUST"), Language::Rust);
}

#[test]
fn language_serializes_as_plain_label() {
    let json = serde_json::to_string(&Language::Javascript).unwrap();
    assert_eq!(json, "\"javascript\"");

    let parsed: Language = serde_json::from_str("\"elixir\"").unwrap();
    assert_eq!(parsed, Language::Other("elixir".to_string()));
}

#[test]
fn spell_wire_shape_uses_epoch_millis() {
    let mut spell = Spell::new("Logger", "console.log(1)", Language::Javascript);
    spell.created_at = jiff::Timestamp::from_millisecond(1_700_000_000_000).unwrap();

    let value: serde_json::Value = serde_json::to_value(&spell).unwrap();
    assert_eq!(value["title"], "Logger");
    assert_eq!(value["language"], "javascript");
    assert_eq!(value["created_at"], 1_700_000_000_000_i64);

    let back: Spell = serde_json::from_value(value).unwrap();
    assert_eq!(back, spell);
}

#[test]
fn fresh_spells_get_distinct_ids() {
    let a = Spell::new("A", "a()", Language::Rust);
    let b = Spell::new("B", "b()", Language::Rust);
    assert_ne!(a.id, b.id);
}
