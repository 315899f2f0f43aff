//! Catalog state: last fetched activities, the live query, and fetch
//! sequencing.
//!
//! DESIGN
//! ======
//! Fetches can overlap (login, logout and every action trigger a refresh).
//! Each fetch takes a sequence number from [`CatalogState::begin_fetch`]; a
//! response is applied only if no newer fetch has been issued since, so the
//! board never regresses to an older snapshot.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::Catalog;
use crate::util::search::{filter_catalog, normalize_query};

/// Outcome of the most recent applied fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// Full catalog from the last successful fetch. Replaced wholesale.
    pub catalog: Catalog,
    /// Normalized (lowercased) search query.
    pub query: String,
    pub status: LoadStatus,
    latest_seq: u64,
}

impl CatalogState {
    /// Issue a sequence number for a new fetch.
    pub fn begin_fetch(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// Apply the result of fetch `seq`. Returns `false` (and changes nothing)
    /// when a newer fetch has been issued.
    ///
    /// A failed fetch keeps the previous catalog but switches the board to the
    /// failure placeholder.
    pub fn apply_fetch<E>(&mut self, seq: u64, result: Result<Catalog, E>) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.status = LoadStatus::Loaded;
            }
            Err(_) => self.status = LoadStatus::Failed,
        }
        true
    }

    /// Update the query from raw input. Typing after a failed load re-renders
    /// from the retained catalog.
    pub fn set_query(&mut self, raw: &str) {
        self.query = normalize_query(raw);
        if self.status == LoadStatus::Failed {
            self.status = LoadStatus::Loaded;
        }
    }

    /// Catalog entries matching the current query.
    pub fn visible(&self) -> Catalog {
        filter_catalog(&self.catalog, &self.query)
    }
}
