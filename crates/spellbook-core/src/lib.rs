//! spellbook-core
//!
//! Pure domain types: the spell model, its language tag, and the
//! notification events the store emits. No I/O — this is the shared
//! vocabulary of the spellbook system.

pub mod models;
pub mod notify;

pub use models::language::Language;
pub use models::spell::Spell;
