//! Live search filtering over the catalog.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::types::{Activity, Catalog};

/// Normalize raw input into the query used for matching.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Whether an activity matches an already-normalized query, by name or
/// description substring.
pub fn matches(name: &str, activity: &Activity, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(query) || activity.description.to_lowercase().contains(query)
}

/// Entries of `catalog` matching `query` (case-insensitive), in catalog order.
/// The source catalog is left untouched.
pub fn filter_catalog(catalog: &Catalog, query: &str) -> Catalog {
    let query = normalize_query(query);
    catalog
        .iter()
        .filter(|(name, activity)| matches(name, activity, &query))
        .map(|(name, activity)| (name.to_owned(), activity.clone()))
        .collect()
}
