use tracing::warn;
use uuid::Uuid;

use spellbook_core::notify::{Notification, NotificationSink};
use spellbook_core::{Language, Spell};
use spellbook_storage::SpellbookAdapter;

use crate::error::StoreError;

/// Authoritative in-memory spell collection.
///
/// Most-recently-harvested first; every mutation writes the full
/// collection back through the adapter. Not designed for concurrent
/// callers — a multi-threaded host must serialize access externally.
pub struct Spellbook {
    spells: Vec<Spell>,
    adapter: SpellbookAdapter,
    sink: Option<Box<dyn NotificationSink>>,
}

impl Spellbook {
    /// Open the spellbook, loading whatever the adapter has persisted.
    pub fn open(adapter: SpellbookAdapter) -> Self {
        let spells = adapter.load();
        Self {
            spells,
            adapter,
            sink: None,
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Harvest a new spell onto the front of the collection.
    ///
    /// Title and code must be non-empty after trimming; a rejected
    /// harvest mutates nothing and emits nothing. Text is stored as
    /// given, not trimmed. A failed persistence save is logged and the
    /// harvest still succeeds in memory.
    pub fn harvest(
        &mut self,
        code: &str,
        language: Language,
        title: &str,
    ) -> Result<Spell, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        if code.trim().is_empty() {
            return Err(StoreError::EmptyCode);
        }

        let spell = Spell::new(title, code, language);
        self.spells.insert(0, spell.clone());
        self.persist();

        self.notify(Notification::success(
            "Code spell harvested",
            format!("Your \"{}\" spell has been added to your spellbook.", spell.title),
        ));
        Ok(spell)
    }

    /// Remove the spell with the given id.
    ///
    /// Returns `false` when no spell matches; banishing an absent id is
    /// an idempotent no-op with no save and no notification.
    pub fn banish(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.spells.iter().position(|s| s.id == id) else {
            return false;
        };
        self.spells.remove(pos);
        self.persist();

        self.notify(Notification::failure(
            "Spell removed",
            "The spell has been removed from your spellbook.",
        ));
        true
    }

    /// The collection, most recently harvested first. Read-only.
    pub fn spells(&self) -> &[Spell] {
        &self.spells
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Explicit final save, for hosts that flush on shutdown.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.adapter.save(&self.spells)?;
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.adapter.save(&self.spells) {
            warn!(error = %e, "could not persist spellbook; continuing in memory");
        }
    }

    fn notify(&self, event: Notification) {
        if let Some(sink) = &self.sink {
            sink.notify(event);
        }
    }
}
