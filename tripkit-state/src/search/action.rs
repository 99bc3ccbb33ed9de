//! Search actions
//!
//! Two-phase pattern for the fetch: `Submit` is the intent, `DidLoad` /
//! `DidError` are the results. Result actions carry the generation of the
//! request they answer so the reducer can discard answers to superseded
//! searches.

use tripkit_core::{Action, ActionSummary};

use super::filter::FilterSet;
use super::query::SearchQuery;
use super::state::{FlightOffer, SearchDraft};

/// Actions handled by the search reducer
#[derive(Clone, Debug, PartialEq)]
pub enum SearchAction {
    /// Intent: store the query, bump the generation, start a fetch
    Submit(SearchQuery),

    /// Store a query without fetching (e.g. restored from a deep link);
    /// resets loading and error to their idle values
    SetQuery(SearchQuery),

    /// Clears query, results, loading, and error together
    Clear,

    SetLoading(bool),

    /// Result: the search for `generation` succeeded
    DidLoad {
        generation: u64,
        offers: Vec<FlightOffer>,
    },

    /// Result: the search for `generation` failed; results are retained
    DidError { generation: u64, message: String },

    // ===== Draft =====
    /// A saved draft is about to be replayed into a form
    DraftHydrateStart,

    /// Hydration finished; subsequent changes are the user's again
    DraftHydrateFinish,

    /// Form input changed; ignored while hydrating
    DraftChange(SearchDraft),

    DraftClear,

    // ===== Filters =====
    SetFilters(FilterSet),
    ClearFilters,
}

impl Action for SearchAction {
    fn name(&self) -> &'static str {
        match self {
            SearchAction::Submit(_) => "Submit",
            SearchAction::SetQuery(_) => "SetQuery",
            SearchAction::Clear => "Clear",
            SearchAction::SetLoading(_) => "SetLoading",
            SearchAction::DidLoad { .. } => "DidLoad",
            SearchAction::DidError { .. } => "DidError",
            SearchAction::DraftHydrateStart => "DraftHydrateStart",
            SearchAction::DraftHydrateFinish => "DraftHydrateFinish",
            SearchAction::DraftChange(_) => "DraftChange",
            SearchAction::DraftClear => "DraftClear",
            SearchAction::SetFilters(_) => "SetFilters",
            SearchAction::ClearFilters => "ClearFilters",
        }
    }
}

impl ActionSummary for SearchAction {
    fn summary(&self) -> String {
        match self {
            // A result set can be hundreds of offers; log the count
            SearchAction::DidLoad { generation, offers } => {
                format!(
                    "DidLoad {{ generation: {}, offers: {} }}",
                    generation,
                    offers.len()
                )
            }
            SearchAction::DidError {
                generation,
                message,
            } => {
                let msg: String = message.chars().take(40).collect();
                format!("DidError {{ generation: {}, message: {:?} }}", generation, msg)
            }
            _ => format!("{:?}", self),
        }
    }
}
