//! The search query and the request handed to the search collaborator.
//!
//! Jobseek never executes a search itself. Triggering Search snapshots the
//! current inputs into a [`SearchRequest`] and sends it over a channel; the
//! consumer decides what a search actually means.

use serde::Serialize;

use crate::filters::{FilterCategory, SelectionStore};

/// The two free-text inputs of the search bar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
}

/// Selected options of one filter category, in vocabulary order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySelection {
    pub category: &'static str,
    pub options: Vec<&'static str>,
}

/// Snapshot emitted when the user triggers Search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub filters: Vec<CategorySelection>,
}

impl SearchRequest {
    /// Snapshot the current query text and filter selections
    pub fn new(keyword: &str, location: &str, selections: &SelectionStore) -> Self {
        let filters = FilterCategory::ALL
            .iter()
            .map(|category| CategorySelection {
                category: category.label(),
                options: selections.selected(*category),
            })
            .collect();

        Self {
            query: SearchQuery {
                keyword: keyword.to_string(),
                location: location.to_string(),
            },
            filters,
        }
    }
}
