//! spellbook-storage
//!
//! Whole-state snapshot persistence. A [`backend::StateStore`] moves raw
//! bytes to and from one named entry; [`state`] layers JSON on top; the
//! [`adapter::SpellbookAdapter`] owns the spell-collection contract
//! (load never fails the caller, save totally replaces the entry).

pub mod adapter;
pub mod backend;
pub mod error;
pub mod state;

pub use adapter::SpellbookAdapter;
pub use backend::{FileStore, MemoryStore, StateStore};
pub use error::StorageError;
