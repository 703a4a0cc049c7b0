use tracing::warn;

use spellbook_core::Spell;

use crate::backend::{FileStore, MemoryStore, StateStore};
use crate::error::StorageError;
use crate::state;

/// Persistence boundary for the spell collection.
///
/// Load is deliberately infallible: a missing entry, an unreadable
/// backend, or an unparsable snapshot all degrade to the empty
/// collection, so a corrupt store can never block startup. Save surfaces
/// its error; callers keep operating in memory when it fails.
pub struct SpellbookAdapter {
    store: Box<dyn StateStore>,
}

impl SpellbookAdapter {
    pub fn new(store: Box<dyn StateStore>) -> Self {
        Self { store }
    }

    pub fn on_disk(store: FileStore) -> Self {
        Self::new(Box::new(store))
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn load(&self) -> Vec<Spell> {
        match state::load_state::<Vec<Spell>>(self.store.as_ref()) {
            Ok(Some(spells)) => spells,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not load spellbook; starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, spells: &[Spell]) -> Result<(), StorageError> {
        state::save_state(self.store.as_ref(), &spells)
    }
}
