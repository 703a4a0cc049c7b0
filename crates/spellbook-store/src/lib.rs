//! spellbook-store
//!
//! The spellbook itself: an owned in-memory spell collection that mirrors
//! every mutation to a persistence adapter, plus the title/language
//! filter the search surface uses.

pub mod error;
pub mod query;
pub mod store;

pub use error::StoreError;
pub use store::Spellbook;
