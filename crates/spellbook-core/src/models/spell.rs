use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::language::Language;

/// One harvested code spell.
///
/// Spells are immutable after creation: there is no edit operation, only
/// harvest and banish. The whole collection is written back to storage on
/// every mutation, so this shape is also the persisted wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    pub id: Uuid,
    pub title: String,
    pub code: String,
    pub language: Language,
    /// Creation instant. On the wire this is numeric epoch milliseconds,
    /// which keeps old snapshots readable regardless of platform locale.
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub created_at: jiff::Timestamp,
}

impl Spell {
    /// Build a fresh spell with a new v4 id and `created_at = now`.
    pub fn new(title: impl Into<String>, code: impl Into<String>, language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            code: code.into(),
            language,
            created_at: jiff::Timestamp::now(),
        }
    }
}
