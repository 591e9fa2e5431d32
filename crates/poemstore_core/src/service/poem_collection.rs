//! In-memory poem collection bound to the named store.
//!
//! # Responsibility
//! - Mirror the store's poem records as an ordered in-memory sequence.
//! - Keep store and memory in step on create/remove.
//!
//! # Invariants
//! - The collection starts empty; only `fetch` and explicit creation
//!   populate it.
//! - `fetch` replaces the in-memory contents wholesale, preserving store
//!   order.
//! - Every collection is bound to the store named `STORE_NAME`.

use crate::db::STORE_NAME;
use crate::model::poem::{Poem, PoemId};
use crate::repo::poem_repo::{PoemRepository, RepoResult};
use log::{error, info};

/// Ordered collection of poems backed by a persistent store.
///
/// A fetch failure leaves the previous in-memory contents untouched; the
/// caller may ignore the returned result, but the error stays observable
/// through it and through the log.
pub struct PoemCollection<R: PoemRepository> {
    repo: R,
    poems: Vec<Poem>,
}

impl<R: PoemRepository> PoemCollection<R> {
    /// Creates an empty collection over the provided repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            poems: Vec::new(),
        }
    }

    /// Name of the persistent store this collection is bound to.
    pub fn store_name(&self) -> &'static str {
        STORE_NAME
    }

    /// Loads the store's current records, replacing in-memory contents.
    ///
    /// Returns the number of records loaded. No retry and no fallback
    /// content on failure; the error is logged and returned as-is.
    pub fn fetch(&mut self) -> RepoResult<usize> {
        match self.repo.list_poems() {
            Ok(poems) => {
                self.poems = poems;
                info!(
                    "event=collection_fetch module=service status=ok store={STORE_NAME} count={}",
                    self.poems.len()
                );
                Ok(self.poems.len())
            }
            Err(err) => {
                error!(
                    "event=collection_fetch module=service status=error store={STORE_NAME} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Persists one poem and appends it to the in-memory sequence.
    pub fn create(&mut self, poem: Poem) -> RepoResult<PoemId> {
        let id = self.repo.insert_poem(&poem)?;
        self.poems.push(poem);
        Ok(id)
    }

    /// Deletes one poem from the store and drops it from memory.
    pub fn remove(&mut self, id: PoemId) -> RepoResult<()> {
        self.repo.delete_poem(id)?;
        self.poems.retain(|poem| poem.uuid != id);
        Ok(())
    }

    /// Current in-memory records in store order.
    pub fn poems(&self) -> &[Poem] {
        &self.poems
    }

    /// Looks up one in-memory record by id.
    pub fn get(&self, id: PoemId) -> Option<&Poem> {
        self.poems.iter().find(|poem| poem.uuid == id)
    }

    pub fn len(&self) -> usize {
        self.poems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poems.is_empty()
    }
}
