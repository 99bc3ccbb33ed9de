//! Search effects - side effects declared by the search reducer

use super::query::SearchQuery;

/// Side effects declared by [`search_reducer`](super::reducer::search_reducer)
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEffect {
    /// Run the search against the flights collaborator. The generation must
    /// be echoed back in the resulting `DidLoad`/`DidError`.
    Fetch {
        generation: u64,
        query: SearchQuery,
    },
}
