use spellbook_core::Spell;

/// Case-insensitive substring filter over title and language label.
///
/// Pure: input order is preserved and an empty query matches everything.
pub fn filter<'a>(spells: &'a [Spell], query: &str) -> Vec<&'a Spell> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return spells.iter().collect();
    }
    spells
        .iter()
        .filter(|spell| {
            spell.title.to_lowercase().contains(&needle)
                || spell.language.as_str().to_lowercase().contains(&needle)
        })
        .collect()
}
